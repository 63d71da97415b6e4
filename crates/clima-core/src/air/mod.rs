pub mod engine;
pub mod levels;
pub mod outcome;

pub use engine::{assess, chart_rows, evaluate};
pub use levels::RecommendedLevels;
pub use outcome::{AirQualityReport, ComponentRow, Warning};

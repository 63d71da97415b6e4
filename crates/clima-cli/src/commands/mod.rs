pub mod air;
pub mod dashboard;
pub mod forecast;
pub mod levels;

#[derive(Debug, thiserror::Error)]
pub enum ClimaError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("no OpenWeather API key. Pass --api-key or set OPENWEATHER_API_KEY")]
    MissingApiKey,

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{endpoint} returned status {code}: {message}")]
    ApiStatus {
        endpoint: String,
        code: u16,
        message: String,
    },

    #[error("city '{city}' not found in country '{country}'. Try another city or country")]
    CityNotFound { city: String, country: String },

    #[error("invalid recommended levels: {0}")]
    LevelsInvalid(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

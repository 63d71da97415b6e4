//! OpenWeather REST backend.
//!
//! Every response is read as JSON first so the API's own `cod` field can be
//! checked before the body is mapped into typed records.

use crate::error::ClimaError;
use crate::location::Location;
use crate::model::{AirPollution, Coord, CurrentWeather, ForecastEntry, Readings, WeatherAlert};
use crate::source::{ClientConfig, WeatherSource};
use chrono::{DateTime, NaiveDateTime, Utc};
use serde::Deserialize;
use serde_json::Value;

const WEATHER_PATH: &str = "/data/2.5/weather";
const FORECAST_PATH: &str = "/data/2.5/forecast";
const AIR_POLLUTION_PATH: &str = "/data/2.5/air_pollution";
const ONE_CALL_PATH: &str = "/data/2.5/onecall";
const UV_PATH: &str = "/data/2.5/uvi";

const FORECAST_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

// ---------------------------------------------------------------------------
// Wire format
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct WeatherResponse {
    #[serde(default)]
    name: String,
    coord: Coord,
    #[serde(default)]
    weather: Vec<Condition>,
    main: MainBlock,
    wind: Wind,
}

#[derive(Debug, Deserialize)]
struct Condition {
    description: String,
}

#[derive(Debug, Deserialize)]
struct MainBlock {
    temp: f64,
    #[serde(default)]
    humidity: f64,
    #[serde(default)]
    pressure: f64,
}

#[derive(Debug, Deserialize)]
struct Wind {
    speed: f64,
}

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    list: Vec<ForecastItem>,
}

#[derive(Debug, Deserialize)]
struct ForecastItem {
    dt_txt: String,
    main: MainBlock,
    #[serde(default)]
    weather: Vec<Condition>,
}

#[derive(Debug, Deserialize)]
struct AirResponse {
    list: Vec<AirSample>,
}

#[derive(Debug, Deserialize)]
struct AirSample {
    main: AqiBlock,
    components: Value,
}

#[derive(Debug, Deserialize)]
struct AqiBlock {
    aqi: u8,
}

#[derive(Debug, Deserialize)]
struct OneCallResponse {
    #[serde(default)]
    alerts: Vec<AlertItem>,
}

#[derive(Debug, Deserialize)]
struct AlertItem {
    #[serde(default)]
    sender_name: Option<String>,
    event: String,
    start: i64,
    end: i64,
    #[serde(default)]
    description: String,
}

#[derive(Debug, Deserialize)]
struct UvResponse {
    value: f64,
}

// ---------------------------------------------------------------------------
// Client
// ---------------------------------------------------------------------------

/// Blocking OpenWeather client.
pub struct OpenWeatherClient {
    http: reqwest::blocking::Client,
    config: ClientConfig,
}

impl OpenWeatherClient {
    pub fn new(config: ClientConfig) -> Result<Self, ClimaError> {
        let http = reqwest::blocking::Client::builder()
            .user_agent(concat!("clima/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(OpenWeatherClient { http, config })
    }

    /// Parameters shared by the city-based and one-call endpoints.
    fn display_params(&self) -> [(&'static str, String); 2] {
        [
            ("units", self.config.units.clone()),
            ("lang", self.config.lang.clone()),
        ]
    }

    fn get_json(&self, path: &str, params: &[(&str, String)]) -> Result<Value, ClimaError> {
        let url = format!("{}{}", self.config.base_url.trim_end_matches('/'), path);
        tracing::debug!(url = %url, ?params, "requesting");

        let response = self
            .http
            .get(&url)
            .query(params)
            .query(&[("appid", self.config.api_key.as_str())])
            .send()?;

        let status = response.status();
        let body = response.text()?;
        tracing::debug!(url = %url, status = status.as_u16(), bytes = body.len(), "response");

        parse_body(path, status.as_u16(), &body)
    }
}

fn coord_params(coord: Coord) -> [(&'static str, String); 2] {
    [("lat", coord.lat.to_string()), ("lon", coord.lon.to_string())]
}

impl WeatherSource for OpenWeatherClient {
    fn current_weather(&self, location: &Location) -> Result<CurrentWeather, ClimaError> {
        let mut params = vec![("q", location.query())];
        params.extend(self.display_params());

        let json = self
            .get_json(WEATHER_PATH, &params)
            .map_err(|e| current_weather_error(e, location))?;
        decode_current(json)
    }

    fn forecast(&self, location: &Location) -> Result<Vec<ForecastEntry>, ClimaError> {
        let mut params = vec![("q", location.query())];
        params.extend(self.display_params());
        decode_forecast(self.get_json(FORECAST_PATH, &params)?)
    }

    fn air_pollution(&self, coord: Coord) -> Result<AirPollution, ClimaError> {
        decode_air_pollution(self.get_json(AIR_POLLUTION_PATH, &coord_params(coord))?)
    }

    fn alerts(&self, coord: Coord) -> Result<Vec<WeatherAlert>, ClimaError> {
        let mut params = coord_params(coord).to_vec();
        params.push(("exclude", "minutely,hourly,daily".to_string()));
        params.extend(self.display_params());
        decode_alerts(self.get_json(ONE_CALL_PATH, &params)?)
    }

    fn uv_index(&self, coord: Coord) -> Result<f64, ClimaError> {
        let uv: UvResponse = serde_json::from_value(self.get_json(UV_PATH, &coord_params(coord))?)?;
        Ok(uv.value)
    }

    fn backend_name(&self) -> &str {
        "openweather"
    }
}

// ---------------------------------------------------------------------------
// Decoding
// ---------------------------------------------------------------------------

/// Parse a response body and check its status.
///
/// A non-2xx response whose body is not JSON (e.g. an HTML gateway page) is
/// reported as `ApiStatus` with the start of the body as message.
fn parse_body(endpoint: &str, http_status: u16, body: &str) -> Result<Value, ClimaError> {
    let json: Value = match serde_json::from_str(body) {
        Ok(json) => json,
        Err(_) if !(200..300).contains(&http_status) => {
            return Err(ClimaError::ApiStatus {
                endpoint: endpoint.to_string(),
                code: http_status,
                message: body.chars().take(200).collect(),
            });
        }
        Err(e) => return Err(e.into()),
    };

    check_status(endpoint, http_status, &json)?;
    Ok(json)
}

/// Only a 404 on the current-weather call means an unknown city; other
/// failures (bad key, rate limit) keep their status.
fn current_weather_error(e: ClimaError, location: &Location) -> ClimaError {
    match e {
        ClimaError::ApiStatus { code: 404, .. } => ClimaError::CityNotFound {
            city: location.city.clone(),
            country: location.country.to_uppercase(),
        },
        other => other,
    }
}

/// Reject bodies whose `cod` is not 200, then non-2xx statuses.
///
/// `cod` is a number on some endpoints and a string on others.
fn check_status(endpoint: &str, http_status: u16, json: &Value) -> Result<(), ClimaError> {
    let cod = match json.get("cod") {
        Some(Value::Number(n)) => n.as_u64().and_then(|c| u16::try_from(c).ok()),
        Some(Value::String(s)) => s.trim().parse::<u16>().ok(),
        _ => None,
    };

    let failing = match cod {
        Some(200) => None,
        Some(code) => Some(code),
        None if !(200..300).contains(&http_status) => Some(http_status),
        None => None,
    };

    match failing {
        None => Ok(()),
        Some(code) => {
            let message = json
                .get("message")
                .and_then(Value::as_str)
                .unwrap_or("no message")
                .to_string();
            Err(ClimaError::ApiStatus {
                endpoint: endpoint.to_string(),
                code,
                message,
            })
        }
    }
}

fn decode_current(json: Value) -> Result<CurrentWeather, ClimaError> {
    let raw: WeatherResponse = serde_json::from_value(json)?;
    Ok(CurrentWeather {
        name: raw.name,
        coord: raw.coord,
        temperature_c: raw.main.temp,
        humidity_pct: raw.main.humidity,
        pressure_hpa: raw.main.pressure,
        wind_speed_ms: raw.wind.speed,
        description: first_description(raw.weather),
    })
}

fn decode_forecast(json: Value) -> Result<Vec<ForecastEntry>, ClimaError> {
    let raw: ForecastResponse = serde_json::from_value(json)?;
    raw.list
        .into_iter()
        .map(|item| {
            let time = NaiveDateTime::parse_from_str(&item.dt_txt, FORECAST_TIME_FORMAT)
                .map_err(|e| {
                    ClimaError::InvalidInput(format!(
                        "invalid forecast time '{}': {}",
                        item.dt_txt, e
                    ))
                })?;
            Ok(ForecastEntry {
                time,
                temperature_c: item.main.temp,
                description: first_description(item.weather),
            })
        })
        .collect()
}

fn decode_air_pollution(json: Value) -> Result<AirPollution, ClimaError> {
    let raw: AirResponse = serde_json::from_value(json)?;
    let sample = raw.list.into_iter().next().ok_or_else(|| {
        ClimaError::InvalidInput("air pollution response contains no samples".into())
    })?;
    Ok(AirPollution {
        aqi: sample.main.aqi,
        readings: Readings::from_components(&sample.components)?,
    })
}

fn decode_alerts(json: Value) -> Result<Vec<WeatherAlert>, ClimaError> {
    let raw: OneCallResponse = serde_json::from_value(json)?;
    raw.alerts
        .into_iter()
        .map(|a| {
            Ok(WeatherAlert {
                start: timestamp(a.start)?,
                end: timestamp(a.end)?,
                sender: a.sender_name,
                event: a.event,
                description: a.description,
            })
        })
        .collect()
}

fn timestamp(secs: i64) -> Result<DateTime<Utc>, ClimaError> {
    DateTime::<Utc>::from_timestamp(secs, 0)
        .ok_or_else(|| ClimaError::InvalidInput(format!("timestamp {} out of range", secs)))
}

fn first_description(conditions: Vec<Condition>) -> String {
    conditions
        .into_iter()
        .next()
        .map(|c| c.description)
        .unwrap_or_default()
}

use crate::error::ClimaError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A city lookup key for the weather API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub city: String,
    /// ISO 3166 country code, lowercase.
    pub country: String,
}

impl Location {
    /// Normalize user input: trims both parts, title-cases the city and
    /// lowercases the country code.
    pub fn new(city: &str, country: &str) -> Result<Location, ClimaError> {
        let city = title_case(city.trim());
        let country = country.trim().to_lowercase();

        if city.is_empty() {
            return Err(ClimaError::InvalidInput("city must not be empty".into()));
        }
        if country.is_empty() {
            return Err(ClimaError::InvalidInput(
                "country code must not be empty".into(),
            ));
        }

        Ok(Location { city, country })
    }

    /// The `q` parameter value, e.g. "Rio De Janeiro,br".
    pub fn query(&self) -> String {
        format!("{},{}", self.city, self.country)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.city, self.country.to_uppercase())
    }
}

/// Uppercase the first letter of every run of letters, lowercase the rest.
fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_is_letter = false;
    for c in s.chars() {
        if c.is_alphabetic() {
            if prev_is_letter {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_is_letter = true;
        } else {
            out.push(c);
            prev_is_letter = false;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalizes_city_and_country() {
        let loc = Location::new("  rio de janeiro ", " BR ").unwrap();
        assert_eq!(loc.city, "Rio De Janeiro");
        assert_eq!(loc.country, "br");
        assert_eq!(loc.query(), "Rio De Janeiro,br");
    }

    #[test]
    fn test_title_case_after_punctuation() {
        assert_eq!(title_case("SÃO PAULO"), "São Paulo");
        assert_eq!(title_case("winston-salem"), "Winston-Salem");
        assert_eq!(title_case("o'fallon"), "O'Fallon");
    }

    #[test]
    fn test_empty_city_rejected() {
        assert!(matches!(
            Location::new("   ", "br"),
            Err(ClimaError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_empty_country_rejected() {
        assert!(Location::new("Recife", "").is_err());
    }

    #[test]
    fn test_display() {
        let loc = Location::new("lisboa", "pt").unwrap();
        assert_eq!(loc.to_string(), "Lisboa (PT)");
    }
}

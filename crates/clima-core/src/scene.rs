use serde::{Deserialize, Serialize};
use std::fmt;

/// Illustration shown next to the current conditions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scene {
    Cloudy,
    Sunny,
    Rain,
    Snow,
}

impl Scene {
    pub fn image(&self) -> &'static str {
        match self {
            Scene::Cloudy => "robo_nublado.png",
            Scene::Sunny => "robo_sol.png",
            Scene::Rain => "robo_chuva.png",
            Scene::Snow => "robo_neve.png",
        }
    }
}

impl fmt::Display for Scene {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scene::Cloudy => write!(f, "Cloudy"),
            Scene::Sunny => write!(f, "Sunny"),
            Scene::Rain => write!(f, "Rain"),
            Scene::Snow => write!(f, "Snow"),
        }
    }
}

// Checked top to bottom; the first keyword found in the description wins.
const SCENE_KEYWORDS: &[(Scene, &[&str])] = &[
    (Scene::Cloudy, &["nublado", "névoa", "nuvens", "cloud", "mist", "fog", "haze"]),
    (
        Scene::Sunny,
        &["sol", "céu claro", "céu limpo", "ensolarado", "clear sky", "sun"],
    ),
    (Scene::Rain, &["chuva", "chuvisco", "rain", "drizzle", "shower"]),
    (Scene::Snow, &["neve", "snow"]),
];

/// Pick a scene for a weather description (pt_br or en).
pub fn classify(description: &str) -> Option<Scene> {
    let lower = description.to_lowercase();
    SCENE_KEYWORDS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| lower.contains(k)))
        .map(|(scene, _)| *scene)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_portuguese_descriptions() {
        assert_eq!(classify("nuvens dispersas"), Some(Scene::Cloudy));
        assert_eq!(classify("Névoa"), Some(Scene::Cloudy));
        assert_eq!(classify("céu limpo"), Some(Scene::Sunny));
        assert_eq!(classify("chuva moderada"), Some(Scene::Rain));
        assert_eq!(classify("pancada de chuva"), Some(Scene::Rain));
        assert_eq!(classify("neve"), Some(Scene::Snow));
    }

    #[test]
    fn test_english_descriptions() {
        assert_eq!(classify("broken clouds"), Some(Scene::Cloudy));
        assert_eq!(classify("clear sky"), Some(Scene::Sunny));
        assert_eq!(classify("light rain"), Some(Scene::Rain));
        assert_eq!(classify("heavy snow"), Some(Scene::Snow));
    }

    #[test]
    fn test_cloudy_checked_before_rain() {
        assert_eq!(classify("nublado com chuva"), Some(Scene::Cloudy));
    }

    #[test]
    fn test_no_match() {
        assert_eq!(classify("trovoada"), None);
        assert_eq!(classify(""), None);
    }

    #[test]
    fn test_images() {
        assert_eq!(Scene::Rain.image(), "robo_chuva.png");
        assert_eq!(Scene::Sunny.image(), "robo_sol.png");
    }
}

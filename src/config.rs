use crate::model::ConfigError;
use serde::Deserialize;
use std::fs;

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    /// Snapshot location: a local file path, or an http(s) URL fetched once.
    pub snapshot: String,
    /// How many best deals to show per model card.
    #[serde(default = "default_top_deals")]
    pub top_deals: usize,
}

fn default_top_deals() -> usize {
    3
}

pub fn load_config(path: &str) -> Result<AppConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: AppConfig = serde_json::from_str(&content)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_config() {
        let config: AppConfig =
            serde_json::from_str(r#"{"snapshot": "data/listings.json", "top_deals": 5}"#).unwrap();
        assert_eq!(config.snapshot, "data/listings.json");
        assert_eq!(config.top_deals, 5);
    }

    #[test]
    fn top_deals_defaults_to_three() {
        let config: AppConfig =
            serde_json::from_str(r#"{"snapshot": "https://example.com/listings.json"}"#).unwrap();
        assert_eq!(config.top_deals, 3);
    }
}

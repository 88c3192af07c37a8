use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{Result, WattWiseError};

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub forecast: ForecastConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiConfig {
    #[serde(default = "default_postcodes_url")]
    pub postcodes_base_url: String,
    #[serde(default = "default_openmeteo_url")]
    pub openmeteo_base_url: String,
    #[serde(default = "default_carbonintensity_url")]
    pub carbonintensity_base_url: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ForecastConfig {
    /// How many days to request from the weather API.
    #[serde(default = "default_forecast_days")]
    pub days: u32,
}

fn default_postcodes_url() -> String {
    "https://api.postcodes.io".to_string()
}

fn default_openmeteo_url() -> String {
    "https://api.open-meteo.com/v1".to_string()
}

fn default_carbonintensity_url() -> String {
    "https://api.carbonintensity.org.uk".to_string()
}

fn default_forecast_days() -> u32 {
    2
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            postcodes_base_url: default_postcodes_url(),
            openmeteo_base_url: default_openmeteo_url(),
            carbonintensity_base_url: default_carbonintensity_url(),
        }
    }
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            days: default_forecast_days(),
        }
    }
}

impl Config {
    /// Load config from an explicit path, the working directory, or the XDG
    /// config dir. Missing files fall back to defaults; an explicitly named
    /// file that does not exist is an error.
    pub fn load(config_override: Option<PathBuf>) -> Result<Self> {
        let config_path = match config_override {
            Some(p) => {
                if !p.exists() {
                    return Err(WattWiseError::Config(format!(
                        "Config file not found at {:?}",
                        p
                    )));
                }
                Some(p)
            }
            None => Self::find_config_path(),
        };

        let Some(path) = config_path else {
            return Ok(Self::default());
        };

        let config_str = std::fs::read_to_string(&path)
            .map_err(|e| WattWiseError::Config(format!("Failed to read config: {}", e)))?;

        // Substitute environment variables
        let config_str = Self::substitute_env_vars(&config_str);

        serde_yaml::from_str(&config_str)
            .map_err(|e| WattWiseError::Config(format!("Failed to parse config: {}", e)))
    }

    fn find_config_path() -> Option<PathBuf> {
        let local_config = PathBuf::from("config/config.yaml");
        if local_config.exists() {
            return Some(local_config);
        }

        let xdg_config = dirs::config_dir()?.join("wattwise").join("config.yaml");
        xdg_config.exists().then_some(xdg_config)
    }

    fn substitute_env_vars(content: &str) -> String {
        let mut result = content.to_string();

        // Find all ${VAR_NAME} patterns and substitute
        let re = regex_lite::Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}").unwrap();

        for cap in re.captures_iter(content) {
            let var_name = &cap[1];
            let placeholder = &cap[0];
            if let Ok(value) = std::env::var(var_name) {
                result = result.replace(placeholder, &value);
            }
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_public_apis() {
        let config = Config::default();
        assert!(config.api.postcodes_base_url.contains("postcodes.io"));
        assert!(config.api.openmeteo_base_url.contains("open-meteo"));
        assert_eq!(config.forecast.days, 2);
    }

    #[test]
    fn partial_yaml_keeps_defaults_for_the_rest() {
        let yaml = "forecast:\n  days: 5\n";
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.forecast.days, 5);
        assert!(config.api.carbonintensity_base_url.contains("carbonintensity"));
    }

    #[test]
    fn env_substitution_replaces_known_vars() {
        std::env::set_var("WATTWISE_TEST_URL", "http://localhost:9999");
        let out = Config::substitute_env_vars("url: ${WATTWISE_TEST_URL}");
        assert_eq!(out, "url: http://localhost:9999");
        // unknown vars are left in place
        let out = Config::substitute_env_vars("url: ${WATTWISE_NO_SUCH_VAR_SET}");
        assert!(out.contains("${WATTWISE_NO_SUCH_VAR_SET}"));
    }
}

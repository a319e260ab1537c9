use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::hashtags::DEFAULT_HASHTAG_CAP;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ForecastConfig {
    pub base_score: f64,
    pub min_score: f64,
    pub max_score: f64,
    /// Half-width of the symmetric random adjustment applied to the score.
    pub jitter: f64,
    pub reference_score: f64,
    pub placeholder_followers: u64,
    pub random_factor_min: f64,
    pub random_factor_max: f64,
    /// Percent.
    pub max_engagement_rate: f64,
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            base_score: 75.0,
            min_score: 65.0,
            max_score: 98.0,
            jitter: 5.0,
            reference_score: 75.0,
            placeholder_followers: 1_000,
            random_factor_min: 0.8,
            random_factor_max: 1.4,
            max_engagement_rate: 18.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HashtagConfig {
    pub cap: usize,
}

impl Default for HashtagConfig {
    fn default() -> Self {
        Self {
            cap: DEFAULT_HASHTAG_CAP,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8787,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub forecast: ForecastConfig,
    pub hashtags: HashtagConfig,
    pub server: ServerConfig,
}

impl EngineConfig {
    pub fn load(path: Option<PathBuf>) -> Result<(Self, Option<PathBuf>), ConfigError> {
        let config_path = path.or_else(default_config_path);
        let mut config = match config_path.as_ref() {
            Some(path) if path.exists() => Self::from_file(path)?,
            _ => EngineConfig::default(),
        };

        config.apply_env_overrides();
        config.validate()?;
        Ok((config, config_path))
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(ConfigError::Read)?;
        Ok(toml::from_str(&contents)?)
    }

    pub fn write(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(ConfigError::Write)?;
            }
        }
        let payload = toml::to_string_pretty(self)?;
        std::fs::write(path, payload).map_err(ConfigError::Write)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let forecast = &self.forecast;
        if !(0.0..=100.0).contains(&forecast.min_score) || !(0.0..=100.0).contains(&forecast.max_score) {
            return Err(ConfigError::Invalid(
                "score bounds must lie within 0-100".to_string(),
            ));
        }
        if forecast.min_score > forecast.base_score || forecast.base_score > forecast.max_score {
            return Err(ConfigError::Invalid(format!(
                "expected min_score <= base_score <= max_score, got {} / {} / {}",
                forecast.min_score, forecast.base_score, forecast.max_score
            )));
        }
        if forecast.jitter < 0.0 {
            return Err(ConfigError::Invalid("jitter must not be negative".to_string()));
        }
        if forecast.reference_score <= 0.0 {
            return Err(ConfigError::Invalid(
                "reference_score must be positive".to_string(),
            ));
        }
        if forecast.random_factor_min <= 0.0 || forecast.random_factor_min > forecast.random_factor_max {
            return Err(ConfigError::Invalid(format!(
                "random factor range must be positive and ordered, got {}..{}",
                forecast.random_factor_min, forecast.random_factor_max
            )));
        }
        if forecast.max_engagement_rate <= 0.0 || forecast.max_engagement_rate > 100.0 {
            return Err(ConfigError::Invalid(
                "max_engagement_rate must lie within (0, 100]".to_string(),
            ));
        }
        if self.hashtags.cap == 0 {
            return Err(ConfigError::Invalid("hashtag cap must be at least 1".to_string()));
        }
        Ok(())
    }

    fn apply_env_overrides(&mut self) {
        if let Some(value) = env_parse::<f64>("CONTENT_ENGINE_BASE_SCORE") {
            self.forecast.base_score = value;
        }
        if let Some(value) = env_parse::<f64>("CONTENT_ENGINE_MIN_SCORE") {
            self.forecast.min_score = value;
        }
        if let Some(value) = env_parse::<f64>("CONTENT_ENGINE_MAX_SCORE") {
            self.forecast.max_score = value;
        }
        if let Some(value) = env_parse::<u64>("CONTENT_ENGINE_PLACEHOLDER_FOLLOWERS") {
            self.forecast.placeholder_followers = value;
        }
        if let Some(value) = env_parse::<usize>("CONTENT_ENGINE_HASHTAG_CAP") {
            self.hashtags.cap = value;
        }
        if let Ok(host) = env::var("CONTENT_ENGINE_HOST") {
            if !host.trim().is_empty() {
                self.server.host = host;
            }
        }
        if let Some(value) = env_parse::<u16>("CONTENT_ENGINE_PORT") {
            self.server.port = value;
        }
    }
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|value| value.trim().parse::<T>().ok())
}

fn default_config_path() -> Option<PathBuf> {
    env::var("CONTENT_ENGINE_CONFIG")
        .ok()
        .filter(|value| !value.trim().is_empty())
        .map(PathBuf::from)
        .or_else(|| Some(PathBuf::from("config/engine.toml")))
}

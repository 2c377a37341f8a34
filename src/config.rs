// src/config.rs
use crate::application::validation::ValidationLimits;
use std::env;
use thiserror::Error;

#[derive(Clone, Debug)]
pub struct AppConfig {
    limits: ValidationLimits,
    log_filter: String,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_log_filter() -> String {
    "info".into()
}

impl AppConfig {
    /// Build configuration from environment variables, falling back to the
    /// form defaults for anything unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`AppConfig::from_env`] but reads keys through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = ValidationLimits::default();
        let limits = ValidationLimits {
            title_max_chars: parse_limit(&lookup, "ARTICLE_TITLE_MAX_CHARS", defaults.title_max_chars)?,
            path_max_chars: parse_limit(&lookup, "ARTICLE_PATH_MAX_CHARS", defaults.path_max_chars)?,
            digest_max_chars: parse_limit(
                &lookup,
                "ARTICLE_DIGEST_MAX_CHARS",
                defaults.digest_max_chars,
            )?,
        };

        let log_filter = lookup("RUST_LOG").unwrap_or_else(default_log_filter);

        Ok(Self { limits, log_filter })
    }

    pub fn limits(&self) -> ValidationLimits {
        self.limits
    }

    pub fn log_filter(&self) -> &str {
        &self.log_filter
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            limits: ValidationLimits::default(),
            log_filter: default_log_filter(),
        }
    }
}

fn parse_limit<F>(lookup: &F, key: &'static str, default: usize) -> Result<usize, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => match raw.trim().parse::<usize>() {
            Ok(0) | Err(_) => Err(ConfigError::Invalid(format!(
                "{key} must be a positive integer, got '{raw}'"
            ))),
            Ok(value) => Ok(value),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn unset_keys_fall_back_to_defaults() {
        let config = AppConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.limits(), ValidationLimits::default());
        assert_eq!(config.log_filter(), "info");
    }

    #[test]
    fn limits_are_read_from_keys() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("ARTICLE_TITLE_MAX_CHARS", "80"),
            ("ARTICLE_PATH_MAX_CHARS", " 64 "),
            ("ARTICLE_DIGEST_MAX_CHARS", "1000"),
            ("RUST_LOG", "debug"),
        ]))
        .unwrap();
        assert_eq!(
            config.limits(),
            ValidationLimits {
                title_max_chars: 80,
                path_max_chars: 64,
                digest_max_chars: 1000,
            }
        );
        assert_eq!(config.log_filter(), "debug");
    }

    #[test]
    fn zero_or_garbage_limits_are_rejected() {
        for bad in ["0", "-1", "lots"] {
            let err = AppConfig::from_lookup(lookup_from(&[("ARTICLE_PATH_MAX_CHARS", bad)]))
                .unwrap_err();
            assert!(matches!(err, ConfigError::Invalid(msg) if msg.contains("ARTICLE_PATH_MAX_CHARS")));
        }
    }
}

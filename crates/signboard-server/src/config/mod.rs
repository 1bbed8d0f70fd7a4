use serde::Serialize;
use std::time::Duration;

pub const CONFIG_SCHEMA_VERSION: &str = "1";

#[derive(Debug, Clone, Serialize)]
pub struct ApiConfig {
    pub max_body_bytes: usize,
    /// Budget for one store operation (load or append) before the request
    /// fails over to a 503.
    pub store_timeout: Duration,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            max_body_bytes: 16 * 1024,
            store_timeout: Duration::from_secs(2),
        }
    }
}

pub fn validate_startup_config(api: &ApiConfig) -> Result<(), String> {
    if api.max_body_bytes == 0 {
        return Err("max_body_bytes must be > 0".to_string());
    }
    if api.store_timeout.is_zero() {
        return Err("store_timeout must be > 0".to_string());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_passes_the_startup_contract() {
        validate_startup_config(&ApiConfig::default()).expect("default config");
    }

    #[test]
    fn zero_limits_are_rejected() {
        let api = ApiConfig {
            max_body_bytes: 0,
            ..ApiConfig::default()
        };
        let err = validate_startup_config(&api).expect_err("zero body limit");
        assert!(err.contains("max_body_bytes"));

        let api = ApiConfig {
            store_timeout: Duration::ZERO,
            ..ApiConfig::default()
        };
        let err = validate_startup_config(&api).expect_err("zero timeout");
        assert!(err.contains("store_timeout"));
    }
}

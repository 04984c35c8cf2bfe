use super::{types::Config, ConfigError};

/// Validate configuration
/// Currently validates:
/// - Catalog URL is present and http(s)
/// - Timeouts are non-zero
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if config.catalog.url.is_empty() {
        return Err(ConfigError::ValidationError(
            "catalog.url cannot be empty".to_string(),
        ));
    }

    if !config.catalog.url.starts_with("http://") && !config.catalog.url.starts_with("https://") {
        return Err(ConfigError::ValidationError(format!(
            "catalog.url must be an http(s) URL, got {}",
            config.catalog.url
        )));
    }

    if config.catalog.timeout_secs == 0 {
        return Err(ConfigError::ValidationError(
            "catalog.timeout_secs cannot be 0".to_string(),
        ));
    }

    if config.search.timeout_secs == 0 {
        return Err(ConfigError::ValidationError(
            "search.timeout_secs cannot be 0".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_default_config() {
        assert!(validate_config(&Config::default()).is_ok());
    }

    #[test]
    fn test_validate_empty_url_fails() {
        let mut config = Config::default();
        config.catalog.url = String::new();
        let result = validate_config(&config);
        assert!(result.is_err());
        assert!(matches!(
            result.unwrap_err(),
            ConfigError::ValidationError(_)
        ));
    }

    #[test]
    fn test_validate_non_http_url_fails() {
        let mut config = Config::default();
        config.catalog.url = "ftp://example.com/catalog.json".to_string();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validate_zero_timeout_fails() {
        let mut config = Config::default();
        config.catalog.timeout_secs = 0;
        assert!(validate_config(&config).is_err());
    }
}

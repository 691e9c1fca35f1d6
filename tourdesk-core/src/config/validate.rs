//! Configuration validation rules.

use super::schema::Config;

/// Validate configuration and return aggregated validation errors.
pub fn validate_config(config: &Config) -> crate::Result<()> {
    let mut errors = Vec::new();

    if config.agent.max_tokens == 0 {
        errors.push("agent.max_tokens must be > 0".to_string());
    }
    if !(0.0..=2.0).contains(&config.agent.temperature) {
        errors.push("agent.temperature must be in [0.0, 2.0]".to_string());
    }
    if config.agent.max_tool_iterations == 0 {
        errors.push("agent.max_tool_iterations must be > 0".to_string());
    }
    if config.agent.history_window == 0 {
        errors.push("agent.history_window must be > 0".to_string());
    }

    if config.data.dir.trim().is_empty() {
        errors.push("data.dir must not be empty".to_string());
    }

    if config.server.port == 0 {
        errors.push("server.port must be > 0".to_string());
    }
    if config.server.static_dir.trim().is_empty() {
        errors.push("server.static_dir must not be empty".to_string());
    }

    if config.cache.ttl_secs == 0 {
        errors.push("cache.ttl_secs must be > 0".to_string());
    }
    if config.cache.sweep_interval_secs == 0 {
        errors.push("cache.sweep_interval_secs must be > 0".to_string());
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(crate::Error::Validation(errors.join("; ")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_accepts_defaults() {
        let config = Config::default();
        validate_config(&config).unwrap();
    }

    #[test]
    fn test_validate_rejects_zero_port() {
        let mut config = Config::default();
        config.server.port = 0;

        let err = validate_config(&config).unwrap_err();
        assert!(err.to_string().contains("server.port"));
    }

    #[test]
    fn test_validate_aggregates_errors() {
        let mut config = Config::default();
        config.cache.ttl_secs = 0;
        config.cache.sweep_interval_secs = 0;

        let err = validate_config(&config).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("cache.ttl_secs"));
        assert!(msg.contains("cache.sweep_interval_secs"));
    }
}

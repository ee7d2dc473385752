use crate::config::types::CrawlOptions;
use crate::ConfigError;

/// Validates crawl options
///
/// # Rules
///
/// * `max_concurrent_requests` must be at least 1
/// * `user_agent` must not be empty or all whitespace
///
/// # Arguments
///
/// * `options` - The options to validate
///
/// # Returns
///
/// * `Ok(())` - Options are valid
/// * `Err(ConfigError::Validation)` - A rule was violated
pub fn validate(options: &CrawlOptions) -> Result<(), ConfigError> {
    if options.max_concurrent_requests == 0 {
        return Err(ConfigError::Validation(
            "max-concurrent-requests must be at least 1".to_string(),
        ));
    }

    if options.user_agent.trim().is_empty() {
        return Err(ConfigError::Validation(
            "user-agent must not be empty".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options_are_valid() {
        assert!(validate(&CrawlOptions::default()).is_ok());
    }

    #[test]
    fn test_zero_concurrency_rejected() {
        let options = CrawlOptions {
            max_concurrent_requests: 0,
            ..CrawlOptions::default()
        };
        let result = validate(&options);
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    #[test]
    fn test_concurrency_of_one_allowed() {
        let options = CrawlOptions {
            max_concurrent_requests: 1,
            ..CrawlOptions::default()
        };
        assert!(validate(&options).is_ok());
    }

    #[test]
    fn test_empty_user_agent_rejected() {
        let options = CrawlOptions {
            user_agent: "   ".to_string(),
            ..CrawlOptions::default()
        };
        let result = validate(&options);
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }
}

use crate::config::types::CrawlOptions;
use crate::config::validation::validate;
use crate::ConfigError;
use std::path::Path;

/// Loads and validates crawl options from a TOML file
///
/// Any option missing from the file keeps its documented default.
///
/// # Arguments
///
/// * `path` - Path to the TOML options file
///
/// # Returns
///
/// * `Ok(CrawlOptions)` - Successfully loaded and validated options
/// * `Err(ConfigError)` - Failed to read, parse, or validate the file
///
/// # Example
///
/// ```no_run
/// use std::path::Path;
/// use site_distill::config::load_options;
///
/// let options = load_options(Path::new("distill.toml")).unwrap();
/// println!("User agent: {}", options.user_agent);
/// ```
pub fn load_options(path: &Path) -> Result<CrawlOptions, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    let options: CrawlOptions = toml::from_str(&content)?;
    validate(&options)?;
    Ok(options)
}

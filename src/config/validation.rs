use crate::config::types::{Config, CrawlerConfig, ForumConfig, HttpConfig, OutputConfig};
use crate::ConfigError;
use url::Url;

/// Upper bound on listing pages per run
const MAX_PAGE_COUNT: u32 = 1000;

/// Upper bound on in-flight fetches
const MAX_CONCURRENT_FETCHES: u32 = 64;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_forum_config(&config.forum)?;
    validate_http_config(&config.http)?;
    validate_crawler_config(&config.crawler)?;
    validate_output_config(&config.output)?;
    Ok(())
}

/// Validates forum configuration
fn validate_forum_config(config: &ForumConfig) -> Result<(), ConfigError> {
    let url = Url::parse(&config.base_host)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid base-host: {}", e)))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::InvalidUrl(format!(
            "base-host '{}' must use http or https",
            config.base_host
        )));
    }

    // Paths are appended verbatim, so "https://host/" would yield "//bbs/..."
    if config.base_host.ends_with('/') {
        return Err(ConfigError::Validation(format!(
            "base-host '{}' must not end with '/'",
            config.base_host
        )));
    }

    validate_board_name(&config.board)?;

    if config.page_count < 1 || config.page_count > MAX_PAGE_COUNT {
        return Err(ConfigError::Validation(format!(
            "page-count must be between 1 and {}, got {}",
            MAX_PAGE_COUNT, config.page_count
        )));
    }

    Ok(())
}

/// Validates a board name: non-empty, alphanumeric plus '_' and '-'
fn validate_board_name(board: &str) -> Result<(), ConfigError> {
    if board.is_empty() {
        return Err(ConfigError::Validation("board cannot be empty".to_string()));
    }

    if !board
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    {
        return Err(ConfigError::Validation(format!(
            "board must contain only ASCII letters, digits, '_' or '-', got '{}'",
            board
        )));
    }

    Ok(())
}

/// Validates HTTP configuration
fn validate_http_config(config: &HttpConfig) -> Result<(), ConfigError> {
    if config.user_agent.trim().is_empty() {
        return Err(ConfigError::Validation(
            "user-agent cannot be empty".to_string(),
        ));
    }

    if config.timeout_secs < 1 {
        return Err(ConfigError::Validation(format!(
            "timeout-secs must be >= 1, got {}",
            config.timeout_secs
        )));
    }

    if config.connect_timeout_secs < 1 {
        return Err(ConfigError::Validation(format!(
            "connect-timeout-secs must be >= 1, got {}",
            config.connect_timeout_secs
        )));
    }

    if let Some(proxy) = &config.proxy {
        Url::parse(proxy)
            .map_err(|e| ConfigError::InvalidUrl(format!("Invalid proxy '{}': {}", proxy, e)))?;
    }

    Ok(())
}

/// Validates crawler configuration
fn validate_crawler_config(config: &CrawlerConfig) -> Result<(), ConfigError> {
    if config.max_concurrent_fetches < 1 || config.max_concurrent_fetches > MAX_CONCURRENT_FETCHES
    {
        return Err(ConfigError::Validation(format!(
            "max-concurrent-fetches must be between 1 and {}, got {}",
            MAX_CONCURRENT_FETCHES, config.max_concurrent_fetches
        )));
    }

    Ok(())
}

/// Validates output configuration
fn validate_output_config(config: &OutputConfig) -> Result<(), ConfigError> {
    if config.backlog_path.is_empty() {
        return Err(ConfigError::Validation(
            "backlog-path cannot be empty".to_string(),
        ));
    }

    if matches!(config.results_path.as_deref(), Some("")) {
        return Err(ConfigError::Validation(
            "results-path cannot be empty when set".to_string(),
        ));
    }

    Ok(())
}

use super::*;

#[test]
fn test_validate_default_config() {
    let config = AppConfig::default();
    let result = ConfigValidator::validate(&config).unwrap();
    assert!(result.is_valid());
    assert!(result.warnings.is_empty());
}

#[test]
fn test_validate_zero_rows() {
    let mut config = AppConfig::default();
    config.scrape.rows = 0;

    let result = ConfigValidator::validate(&config).unwrap();
    assert!(!result.is_valid());
    assert!(result.errors.iter().any(|e| e.path == "scrape.rows"));
}

#[test]
fn test_validate_bad_source_url() {
    let mut config = AppConfig::default();
    config.scrape.source_url = "en.wikipedia.org/wiki/List".to_string();

    let result = ConfigValidator::validate(&config).unwrap();
    assert!(result.errors.iter().any(|e| e.path == "scrape.source_url"));
}

#[test]
fn test_validate_zero_timeouts() {
    let mut config = AppConfig::default();
    config.scrape.element_timeout_secs = 0;
    config.confirm.timeout_secs = 0;

    let result = ConfigValidator::validate(&config).unwrap();
    assert_eq!(result.errors.len(), 2);
}

#[test]
fn test_validate_long_confirm_timeout_warning() {
    let mut config = AppConfig::default();
    config.confirm.timeout_secs = 7200;

    let result = ConfigValidator::validate(&config).unwrap();
    assert!(result.is_valid());
    assert!(result.warnings.iter().any(|w| w.path == "confirm.timeout_secs"));
}

#[test]
fn test_validate_zero_port() {
    let mut config = AppConfig::default();
    config.browser.debug_port = 0;

    let result = ConfigValidator::validate(&config).unwrap();
    assert!(result.errors.iter().any(|e| e.path == "browser.debug_port"));
}

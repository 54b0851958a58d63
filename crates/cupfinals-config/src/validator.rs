//! Configuration validation.

use crate::error::ConfigError;
use crate::schema::AppConfig;

/// Validation result.
#[derive(Debug, Default)]
pub struct ValidationResult {
    pub errors: Vec<ValidationError>,
    pub warnings: Vec<ValidationWarning>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn add_error(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    pub fn add_warning(&mut self, warning: ValidationWarning) {
        self.warnings.push(warning);
    }
}

/// A validation error.
#[derive(Debug)]
pub struct ValidationError {
    pub path: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// A validation warning.
#[derive(Debug)]
pub struct ValidationWarning {
    pub path: String,
    pub message: String,
}

impl ValidationWarning {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Configuration validator.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate the configuration.
    pub fn validate(config: &AppConfig) -> Result<ValidationResult, ConfigError> {
        let mut result = ValidationResult::default();

        Self::validate_scrape(config, &mut result);
        Self::validate_confirm(config, &mut result);
        Self::validate_browser(config, &mut result);

        Ok(result)
    }

    fn validate_scrape(config: &AppConfig, result: &mut ValidationResult) {
        let scrape = &config.scrape;

        if !scrape.source_url.starts_with("http://") && !scrape.source_url.starts_with("https://") {
            result.add_error(ValidationError::new(
                "scrape.source_url",
                "source_url must start with http:// or https://",
            ));
        }

        if scrape.rows == 0 {
            result.add_error(ValidationError::new(
                "scrape.rows",
                "rows must be greater than 0",
            ));
        }

        if scrape.element_timeout_secs == 0 {
            result.add_error(ValidationError::new(
                "scrape.element_timeout_secs",
                "element_timeout_secs must be greater than 0",
            ));
        }

        if scrape.verify_timeout_secs == 0 {
            result.add_error(ValidationError::new(
                "scrape.verify_timeout_secs",
                "verify_timeout_secs must be greater than 0",
            ));
        }

        if scrape.element_poll_ms == 0 {
            result.add_error(ValidationError::new(
                "scrape.element_poll_ms",
                "element_poll_ms must be greater than 0",
            ));
        }
    }

    fn validate_confirm(config: &AppConfig, result: &mut ValidationResult) {
        let confirm = &config.confirm;

        if confirm.timeout_secs == 0 {
            result.add_error(ValidationError::new(
                "confirm.timeout_secs",
                "timeout_secs must be greater than 0",
            ));
        }

        if confirm.poll_ms == 0 {
            result.add_error(ValidationError::new(
                "confirm.poll_ms",
                "poll_ms must be greater than 0",
            ));
        }

        if confirm.timeout_secs > 3600 {
            result.add_warning(ValidationWarning::new(
                "confirm.timeout_secs",
                "timeout_secs is very high (>1h), an unattended run will block for a long time per row",
            ));
        }
    }

    fn validate_browser(config: &AppConfig, result: &mut ValidationResult) {
        if config.browser.debug_port == 0 {
            result.add_error(ValidationError::new(
                "browser.debug_port",
                "Port cannot be 0",
            ));
        }
    }
}

#[cfg(test)]
#[path = "validator_tests.rs"]
mod tests;

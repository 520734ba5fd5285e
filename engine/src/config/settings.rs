// Engine settings: which locale/currency the form renders in and where it submits.
use serde::{Deserialize, Serialize};
use shared::format::{Formatter, DEFAULT_CURRENCY, DEFAULT_LOCALE};
use std::path::Path;

use crate::error::EngineError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineSettings {
    #[serde(default = "default_locale")]
    pub locale: String,
    #[serde(default = "default_currency")]
    pub currency: String,
    #[serde(default)]
    pub submit_action: String,
    #[serde(default = "default_method")]
    pub submit_method: String,
}

fn default_locale() -> String {
    DEFAULT_LOCALE.to_string()
}

fn default_currency() -> String {
    DEFAULT_CURRENCY.to_string()
}

fn default_method() -> String {
    "POST".to_string()
}

impl Default for EngineSettings {
    fn default() -> Self {
        EngineSettings {
            locale: default_locale(),
            currency: default_currency(),
            submit_action: String::new(),
            submit_method: default_method(),
        }
    }
}

impl EngineSettings {
    /// Defaults overridden by `ACCOUNTING_LOCALE`, `ACCOUNTING_CURRENCY`,
    /// `ACCOUNTING_SUBMIT_URL` and `ACCOUNTING_SUBMIT_METHOD`.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            locale: std::env::var("ACCOUNTING_LOCALE").unwrap_or(defaults.locale),
            currency: std::env::var("ACCOUNTING_CURRENCY").unwrap_or(defaults.currency),
            submit_action: std::env::var("ACCOUNTING_SUBMIT_URL").unwrap_or(defaults.submit_action),
            submit_method: std::env::var("ACCOUNTING_SUBMIT_METHOD").unwrap_or(defaults.submit_method),
        }
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, EngineError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let settings: EngineSettings = serde_json::from_str(&content)?;
        settings.validate()?;
        tracing::debug!(path = %path.display(), locale = %settings.locale, "Loaded engine settings");
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), EngineError> {
        self.formatter()?;
        if self.submit_method.is_empty() {
            return Err(EngineError::ConfigError("submit_method must not be empty".to_string()));
        }
        Ok(())
    }

    pub fn formatter(&self) -> Result<Formatter, EngineError> {
        Ok(Formatter::new(&self.locale, &self.currency)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_settings(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", content).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_default_settings() {
        let settings = EngineSettings::default();
        assert_eq!(settings.locale, "ar-EG");
        assert_eq!(settings.currency, "EGP");
        assert_eq!(settings.submit_method, "POST");
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_from_json_file_fills_defaults() {
        let file = write_settings(r#"{"locale": "en-US", "currency": "USD", "submit_action": "/sales/invoices/"}"#);
        let settings = EngineSettings::from_json_file(file.path()).unwrap();
        assert_eq!(settings.locale, "en-US");
        assert_eq!(settings.submit_action, "/sales/invoices/");
        assert_eq!(settings.submit_method, "POST");
    }

    #[test]
    fn test_from_json_file_rejects_unknown_locale() {
        let file = write_settings(r#"{"locale": "de-DE"}"#);
        let err = EngineSettings::from_json_file(file.path()).unwrap_err();
        assert!(matches!(err, EngineError::LocaleError { .. }));
    }

    #[test]
    fn test_from_json_file_missing_file() {
        let err = EngineSettings::from_json_file("/nonexistent/settings.json").unwrap_err();
        assert!(matches!(err, EngineError::IoError { .. }));
    }

    #[test]
    fn test_from_json_file_malformed() {
        let file = write_settings("{ not json");
        let err = EngineSettings::from_json_file(file.path()).unwrap_err();
        assert!(matches!(err, EngineError::JsonError { .. }));
    }
}

//! Error types for internationalization operations

use thiserror::Error;

/// Errors that can occur during internationalization operations
#[derive(Error, Debug)]
pub enum I18nError {
    /// Failed to parse a language identifier
    #[error("Invalid language identifier: {0}")]
    InvalidLanguageId(String),

    /// No usable dictionary found at the given path
    #[error("Failed to load dictionary from: {path}")]
    ResourceLoad { path: String },

    /// Failed to parse a Fluent source
    #[error("Failed to parse Fluent source: {errors:?}")]
    FluentParse { errors: Vec<String> },

    /// Message not found in any loaded locale
    #[error("Message not found: {key}")]
    MessageNotFound { key: String },

    /// Failed to format a message
    #[error("Failed to format message '{key}': {errors:?}")]
    MessageFormat { key: String, errors: Vec<String> },

    /// Locale referenced without a loaded dictionary
    #[error("Locale has no loaded dictionary: {locale}")]
    UnsupportedLocale { locale: String },

    /// Dictionary key is not a valid Fluent message identifier
    #[error("Invalid translation key: {key}")]
    InvalidKey { key: String },

    /// JSON dictionary could not be parsed
    #[error("Invalid JSON dictionary: {0}")]
    InvalidDictionary(#[from] serde_json::Error),

    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for i18n operations
pub type I18nResult<T> = Result<T, I18nError>;

//! Internationalization support for the web console front-end
//!
//! This crate wires the console's two translation dictionaries (English,
//! Chinese) into a message-lookup facade built on the Fluent localization
//! system, and exports a process-wide instance configured Chinese-first with
//! English fallback:
//!
//! - Locale management (`en`, `zh`)
//! - Dictionary loading: compiled-in Fluent files, Fluent files on disk, and
//!   flat JSON dictionaries
//! - Message formatting with fallback for missing translations
//! - Compile-time validation of the shipped dictionaries (see `build.rs`)
//!
//! # Example
//!
//! ```rust
//! use console_i18n::{I18n, Locale};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let i18n = I18n::with_defaults()?;
//! assert_eq!(i18n.locale(), Locale::Chinese);
//! assert_eq!(i18n.fallback_locale(), Locale::English);
//!
//! let title = i18n.translate("app-title", None)?;
//! assert_eq!(title, "运维控制台");
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod bundle;
pub mod error;
pub mod locale;
pub mod manager;
pub mod store;

pub use bundle::BundleManager;
pub use error::{I18nError, I18nResult};
pub use locale::Locale;
pub use manager::{I18n, I18nConfig};
pub use store::{Dictionary, MessageStore};

// Re-export commonly used Fluent types
pub use fluent::{FluentArgs, FluentValue};

use once_cell::sync::Lazy;

/// Process-wide i18n instance, built on first use from the embedded
/// dictionaries with the shipped configuration (active `zh`, fallback `en`).
///
/// The embedded dictionaries are validated by the build script, so
/// construction cannot fail at runtime.
pub static I18N: Lazy<I18n> =
    Lazy::new(|| I18n::with_defaults().expect("embedded dictionaries are validated at build time"));

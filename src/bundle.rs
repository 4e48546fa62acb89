//! FluentBundle management and message formatting
//!
//! One concurrent bundle per loaded locale. The concurrent bundle variant is
//! `Send + Sync`, which lets the facade live in a process-wide static without
//! extra locking.

use std::collections::HashMap;

use fluent::{FluentArgs, FluentResource};
use tracing::{debug, warn};

use crate::error::{I18nError, I18nResult};
use crate::Locale;

type ConcurrentBundle = fluent::concurrent::FluentBundle<FluentResource>;

/// Manages FluentBundle instances for the loaded locales
pub struct BundleManager {
    bundles: HashMap<Locale, ConcurrentBundle>,
}

impl std::fmt::Debug for BundleManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BundleManager")
            .field("locales", &self.bundles.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl BundleManager {
    /// Create a new BundleManager
    pub fn new() -> Self {
        Self {
            bundles: HashMap::new(),
        }
    }

    /// Add a resource to a locale's bundle, creating the bundle on first use
    pub fn add_resource(&mut self, locale: Locale, resource: FluentResource) -> I18nResult<()> {
        let lang_id = locale.to_language_identifier()?;

        let bundle = self.bundles.entry(locale).or_insert_with(|| {
            let mut bundle = ConcurrentBundle::new_concurrent(vec![lang_id]);
            // No Unicode isolation marks around placeables; the console
            // renders the strings as-is.
            bundle.set_use_isolating(false);
            bundle
        });

        bundle.add_resource(resource).map_err(|errors| {
            let messages: Vec<String> = errors.into_iter().map(|e| format!("{e:?}")).collect();
            warn!("Failed to add resource for locale {}: {:?}", locale, messages);
            I18nError::FluentParse { errors: messages }
        })?;

        debug!("Added resource to bundle for locale {}", locale);
        Ok(())
    }

    /// Format a message with the given arguments
    pub fn format_message(
        &self,
        locale: Locale,
        key: &str,
        args: Option<&FluentArgs>,
    ) -> I18nResult<String> {
        let not_found = || I18nError::MessageNotFound {
            key: key.to_string(),
        };

        let bundle = self.bundles.get(&locale).ok_or_else(not_found)?;
        let message = bundle.get_message(key).ok_or_else(not_found)?;
        let pattern = message.value().ok_or_else(not_found)?;

        let mut errors = Vec::new();
        let formatted = bundle.format_pattern(pattern, args, &mut errors);

        if !errors.is_empty() {
            let messages: Vec<String> = errors.into_iter().map(|e| format!("{e:?}")).collect();
            warn!("Formatting errors for message '{}': {:?}", key, messages);
            return Err(I18nError::MessageFormat {
                key: key.to_string(),
                errors: messages,
            });
        }

        Ok(formatted.into_owned())
    }

    /// Check if a message exists in the given locale's bundle
    pub fn has_message(&self, locale: Locale, key: &str) -> bool {
        self.bundles
            .get(&locale)
            .map(|bundle| bundle.has_message(key))
            .unwrap_or(false)
    }

    /// Check if a bundle exists for the given locale
    pub fn has_locale(&self, locale: Locale) -> bool {
        self.bundles.contains_key(&locale)
    }

    /// Get all loaded locales
    pub fn available_locales(&self) -> Vec<Locale> {
        self.bundles.keys().copied().collect()
    }
}

impl Default for BundleManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Macro to create `Option<FluentArgs>` from key-value pairs
#[macro_export]
macro_rules! fluent_args {
    () => {
        None
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut args = $crate::FluentArgs::new();
        $(
            args.set($key, $value);
        )+
        Some(args)
    }};
}

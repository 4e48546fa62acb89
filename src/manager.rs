//! The i18n facade
//!
//! Owns the locale configuration and the bundles, and applies the resolution
//! rule: active locale first, fallback locale second.

use std::sync::Arc;

use arc_swap::ArcSwap;
use fluent::FluentArgs;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::bundle::BundleManager;
use crate::error::{I18nError, I18nResult};
use crate::store::MessageStore;
use crate::Locale;

/// Construction-time configuration for the facade
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct I18nConfig {
    /// Locale consulted first for every lookup
    pub locale: Locale,
    /// Locale consulted when the active locale lacks a key
    pub fallback_locale: Locale,
    /// When set, a key missing from every loaded locale is an error instead
    /// of being echoed back to the caller
    pub strict: bool,
}

impl Default for I18nConfig {
    fn default() -> Self {
        Self {
            locale: Locale::Chinese,
            fallback_locale: Locale::English,
            strict: false,
        }
    }
}

/// Message-lookup facade over the loaded dictionaries
#[derive(Debug)]
pub struct I18n {
    config: I18nConfig,
    active: ArcSwap<Locale>,
    bundles: BundleManager,
}

impl I18n {
    /// Build a facade from a configuration and a message store
    ///
    /// Every locale in the store is loaded. The configured active and
    /// fallback locales must both have a dictionary in the store.
    pub fn new(config: I18nConfig, store: MessageStore) -> I18nResult<Self> {
        let mut bundles = BundleManager::new();
        for locale in store.locales() {
            for resource in store.resources(locale)? {
                bundles.add_resource(locale, resource)?;
            }
        }

        for required in [config.locale, config.fallback_locale] {
            if !bundles.has_locale(required) {
                return Err(I18nError::UnsupportedLocale {
                    locale: required.code().to_string(),
                });
            }
        }

        info!(
            "I18n initialized with active locale {} and fallback locale {}",
            config.locale, config.fallback_locale
        );
        Ok(Self {
            active: ArcSwap::from_pointee(config.locale),
            config,
            bundles,
        })
    }

    /// Build a facade with the shipped configuration and the embedded dictionaries
    pub fn with_defaults() -> I18nResult<Self> {
        Self::new(I18nConfig::default(), MessageStore::embedded())
    }

    /// The currently active locale
    pub fn locale(&self) -> Locale {
        **self.active.load()
    }

    /// Swap the active locale
    ///
    /// Fails without changing the active locale when the requested locale has
    /// no loaded dictionary.
    pub fn set_locale(&self, locale: Locale) -> I18nResult<()> {
        if !self.bundles.has_locale(locale) {
            return Err(I18nError::UnsupportedLocale {
                locale: locale.code().to_string(),
            });
        }
        self.active.store(Arc::new(locale));
        info!("Active locale switched to {}", locale);
        Ok(())
    }

    /// The configured fallback locale
    pub fn fallback_locale(&self) -> Locale {
        self.config.fallback_locale
    }

    /// The configuration the facade was built with
    pub fn config(&self) -> &I18nConfig {
        &self.config
    }

    /// All locales with a loaded dictionary
    pub fn available_locales(&self) -> Vec<Locale> {
        self.bundles.available_locales()
    }

    /// Resolve a key under the active locale
    pub fn translate(&self, key: &str, args: Option<&FluentArgs>) -> I18nResult<String> {
        self.translate_in(self.locale(), key, args)
    }

    /// Resolve a key under an explicit locale, falling back as configured
    pub fn translate_in(
        &self,
        locale: Locale,
        key: &str,
        args: Option<&FluentArgs>,
    ) -> I18nResult<String> {
        if self.bundles.has_message(locale, key) {
            return self.bundles.format_message(locale, key, args);
        }

        let fallback = self.config.fallback_locale;
        if locale != fallback && self.bundles.has_message(fallback, key) {
            warn!(
                "Message '{}' not found in locale {}, falling back to {}",
                key, locale, fallback
            );
            return self.bundles.format_message(fallback, key, args);
        }

        if self.config.strict {
            return Err(I18nError::MessageNotFound {
                key: key.to_string(),
            });
        }
        warn!("Message '{}' not found in any loaded locale, echoing the key", key);
        Ok(key.to_string())
    }

    /// Resolve a key, or return the given default when it is missing
    pub fn translate_or(&self, key: &str, args: Option<&FluentArgs>, default: &str) -> String {
        if !self.has_message(key) {
            return default.to_string();
        }
        self.translate(key, args)
            .unwrap_or_else(|_| default.to_string())
    }

    /// Check whether a key resolves under the active or fallback locale
    pub fn has_message(&self, key: &str) -> bool {
        let active = self.locale();
        self.bundles.has_message(active, key)
            || (active != self.config.fallback_locale
                && self.bundles.has_message(self.config.fallback_locale, key))
    }
}

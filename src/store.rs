//! Message store: acquisition of per-locale dictionary sources
//!
//! The store collects raw dictionary sources for each locale and hands them to
//! the bundle layer as parsed Fluent resources. Sources come from three places:
//! the dictionaries compiled into the binary, Fluent files on disk, and flat
//! JSON key/value dictionaries (the console's historical dictionary format).

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::fs;
use std::path::Path;

use fluent::FluentResource;
use fluent_syntax::ast;
use tracing::{debug, info};

use crate::error::{I18nError, I18nResult};
use crate::Locale;

/// Flat key-to-string mapping, the on-disk JSON dictionary format
pub type Dictionary = BTreeMap<String, String>;

const EN_MAIN: &str = include_str!("../locales/en/main.ftl");
const ZH_MAIN: &str = include_str!("../locales/zh/main.ftl");

/// Collects dictionary sources for each supported locale
#[derive(Debug, Default)]
pub struct MessageStore {
    sources: HashMap<Locale, Vec<String>>,
}

impl MessageStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-loaded with the dictionaries compiled into the binary
    pub fn embedded() -> Self {
        let mut store = Self::new();
        store.add_ftl(Locale::English, EN_MAIN);
        store.add_ftl(Locale::Chinese, ZH_MAIN);
        store
    }

    /// Register a raw Fluent source for a locale
    pub fn add_ftl<S: Into<String>>(&mut self, locale: Locale, source: S) {
        self.sources.entry(locale).or_default().push(source.into());
        debug!("Registered Fluent source for locale {}", locale);
    }

    /// Register a flat dictionary for a locale
    ///
    /// Keys must be valid Fluent message identifiers. Values are taken as
    /// literal text: braces are escaped during synthesis, so placeables cannot
    /// be expressed through this path.
    pub fn add_dictionary(&mut self, locale: Locale, dictionary: &Dictionary) -> I18nResult<()> {
        let source = dictionary_to_ftl(dictionary)?;
        self.sources.entry(locale).or_default().push(source);
        debug!(
            "Registered dictionary with {} entries for locale {}",
            dictionary.len(),
            locale
        );
        Ok(())
    }

    /// Register a JSON object of strings as a dictionary for a locale
    pub fn add_json(&mut self, locale: Locale, json: &str) -> I18nResult<()> {
        let dictionary: Dictionary = serde_json::from_str(json)?;
        self.add_dictionary(locale, &dictionary)
    }

    /// Load dictionaries from a directory
    ///
    /// For each supported locale the store looks for `<code>/main.ftl` first
    /// and `<code>.json` second. A directory yielding no dictionary at all is
    /// an error; individual absent locales are not.
    pub fn load_from_dir<P: AsRef<Path>>(&mut self, dir: P) -> I18nResult<()> {
        let dir = dir.as_ref();
        let mut found = false;

        for locale in Locale::all() {
            let ftl_path = dir.join(locale.resource_file());
            let json_path = dir.join(format!("{}.json", locale.code()));

            if ftl_path.exists() {
                self.add_ftl(locale, fs::read_to_string(&ftl_path)?);
                info!("Loaded {} for locale {}", ftl_path.display(), locale);
                found = true;
            } else if json_path.exists() {
                let content = fs::read_to_string(&json_path)?;
                self.add_json(locale, &content)?;
                info!("Loaded {} for locale {}", json_path.display(), locale);
                found = true;
            }
        }

        if !found {
            return Err(I18nError::ResourceLoad {
                path: dir.display().to_string(),
            });
        }
        Ok(())
    }

    /// Locales with at least one registered source
    pub fn locales(&self) -> Vec<Locale> {
        self.sources.keys().copied().collect()
    }

    /// Parse the registered sources for a locale into Fluent resources
    pub fn resources(&self, locale: Locale) -> I18nResult<Vec<FluentResource>> {
        let sources = self
            .sources
            .get(&locale)
            .ok_or_else(|| I18nError::UnsupportedLocale {
                locale: locale.code().to_string(),
            })?;

        sources
            .iter()
            .map(|source| {
                FluentResource::try_new(source.clone()).map_err(|(_, errors)| {
                    I18nError::FluentParse {
                        errors: errors.iter().map(|e| format!("{e:?}")).collect(),
                    }
                })
            })
            .collect()
    }

    /// All message keys registered for a locale
    pub fn keys(&self, locale: Locale) -> I18nResult<BTreeSet<String>> {
        let mut keys = BTreeSet::new();
        for resource in self.resources(locale)? {
            for entry in resource.entries() {
                if let ast::Entry::Message(message) = entry {
                    keys.insert(message.id.name.to_string());
                }
            }
        }
        Ok(keys)
    }
}

/// Synthesize a Fluent source from a flat dictionary
fn dictionary_to_ftl(dictionary: &Dictionary) -> I18nResult<String> {
    let mut out = String::new();
    for (key, value) in dictionary {
        if !is_valid_message_id(key) {
            return Err(I18nError::InvalidKey { key: key.clone() });
        }
        append_message(&mut out, key, value);
    }
    Ok(out)
}

fn is_valid_message_id(key: &str) -> bool {
    let mut chars = key.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

fn append_message(out: &mut String, key: &str, value: &str) {
    let escaped = escape_value(value);
    let mut lines = escaped.split('\n');
    let first = lines.next().unwrap_or_default();

    out.push_str(key);
    out.push_str(" = ");
    push_guarded(out, first);
    for line in lines {
        out.push_str("\n    ");
        push_guarded(out, line);
    }
    out.push('\n');
}

/// Append one value line, prefixing an empty string literal where the raw text
/// would otherwise be taken as Fluent syntax or have its whitespace stripped.
fn push_guarded(out: &mut String, line: &str) {
    if line.is_empty() || line.starts_with([' ', '.', '*', '[']) {
        out.push_str("{\"\"}");
    }
    out.push_str(line);
}

/// Escape literal braces so dictionary values never introduce placeables
fn escape_value(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '{' => out.push_str("{\"{\"}"),
            '}' => out.push_str("{\"}\"}"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_ids_follow_fluent_rules() {
        assert!(is_valid_message_id("app-title"));
        assert!(is_valid_message_id("nav_home2"));
        assert!(!is_valid_message_id(""));
        assert!(!is_valid_message_id("2fast"));
        assert!(!is_valid_message_id("-leading-dash"));
        assert!(!is_valid_message_id("bad key"));
        assert!(!is_valid_message_id("标题"));
    }

    #[test]
    fn braces_are_escaped() {
        assert_eq!(escape_value("a {b} c"), "a {\"{\"}b{\"}\"} c");
        assert_eq!(escape_value("plain"), "plain");
    }

    #[test]
    fn synthesized_source_parses_and_round_trips() {
        let mut dictionary = Dictionary::new();
        dictionary.insert("greeting".to_string(), "Hello, {world}!".to_string());
        dictionary.insert("empty".to_string(), String::new());
        dictionary.insert("multiline".to_string(), "first\n.second\n  third".to_string());

        let source = dictionary_to_ftl(&dictionary).unwrap();
        let resource = FluentResource::try_new(source).unwrap();
        let message_count = resource
            .entries()
            .filter(|entry| matches!(entry, ast::Entry::Message(_)))
            .count();
        assert_eq!(message_count, 3);
    }

    #[test]
    fn invalid_key_is_rejected() {
        let mut dictionary = Dictionary::new();
        dictionary.insert("no spaces allowed".to_string(), "value".to_string());
        assert!(matches!(
            dictionary_to_ftl(&dictionary),
            Err(I18nError::InvalidKey { .. })
        ));
    }
}

//! Checks that the embedded dictionaries cover the same keys
//!
//! The build script enforces this at compile time for the shipped files; this
//! test covers the same invariant through the store API.

use console_i18n::{fluent_args, I18n, Locale, MessageStore};

#[test]
fn test_embedded_dictionaries_have_identical_key_sets() {
    let store = MessageStore::embedded();
    let en_keys = store.keys(Locale::English).unwrap();
    let zh_keys = store.keys(Locale::Chinese).unwrap();

    assert!(!en_keys.is_empty());
    assert_eq!(en_keys, zh_keys);
}

#[test]
fn test_every_embedded_key_resolves_in_both_locales() {
    let store = MessageStore::embedded();
    let keys = store.keys(Locale::English).unwrap();
    let i18n = I18n::with_defaults().unwrap();

    // Unused arguments are ignored, so one superset covers the
    // parameterized messages too.
    let args = fluent_args!["name" => "tester"];
    for key in &keys {
        for locale in Locale::all() {
            let message = i18n.translate_in(locale, key, args.as_ref());
            assert!(
                message.is_ok(),
                "key '{}' failed to resolve in locale {}",
                key,
                locale
            );
        }
    }
}

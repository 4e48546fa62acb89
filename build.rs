//! Validates the shipped locale files at compile time:
//! - every file is valid Fluent syntax
//! - all locales carry the same message keys
//! - placeable parameters agree across translations of the same key

use std::collections::{BTreeMap, BTreeSet};
use std::env;
use std::fs;
use std::path::PathBuf;
use std::process;

use fluent_syntax::ast::{Entry, Expression, InlineExpression, Pattern, PatternElement};
use fluent_syntax::parser::parse;

/// Message key -> set of placeable parameter names.
type MessageMap = BTreeMap<String, BTreeSet<String>>;

fn collect_pattern<S>(elements: &[PatternElement<S>], params: &mut BTreeSet<String>)
where
    S: AsRef<str> + ToString,
{
    for element in elements {
        if let PatternElement::Placeable { expression } = element {
            collect_expression(expression, params);
        }
    }
}

fn collect_expression<S>(expression: &Expression<S>, params: &mut BTreeSet<String>)
where
    S: AsRef<str> + ToString,
{
    match expression {
        Expression::Select { selector, variants } => {
            collect_inline(selector, params);
            for variant in variants {
                collect_pattern(&variant.value.elements, params);
            }
        }
        Expression::Inline(inline) => collect_inline(inline, params),
    }
}

fn collect_inline<S>(expression: &InlineExpression<S>, params: &mut BTreeSet<String>)
where
    S: AsRef<str> + ToString,
{
    match expression {
        InlineExpression::VariableReference { id } => {
            params.insert(id.name.to_string());
        }
        InlineExpression::FunctionReference { arguments, .. } => {
            for arg in &arguments.positional {
                collect_inline(arg, params);
            }
            for arg in &arguments.named {
                collect_inline(&arg.value, params);
            }
        }
        InlineExpression::Placeable { expression } => collect_expression(expression, params),
        InlineExpression::MessageReference { .. }
        | InlineExpression::TermReference { .. }
        | InlineExpression::StringLiteral { .. }
        | InlineExpression::NumberLiteral { .. } => {}
    }
}

/// Extract every message key and its parameter names from one Fluent source.
fn message_params(content: &str) -> Result<MessageMap, String> {
    let resource = match parse(content) {
        Ok(resource) => resource,
        Err((_, errors)) => return Err(format!("parse errors: {errors:?}")),
    };

    let mut messages = MessageMap::new();
    for entry in resource.body {
        if let Entry::Message(message) = entry {
            let mut params = BTreeSet::new();
            if let Some(Pattern { elements }) = message.value {
                collect_pattern(&elements, &mut params);
            }
            for attribute in message.attributes {
                collect_pattern(&attribute.value.elements, &mut params);
            }
            messages.insert(message.id.name.to_string(), params);
        }
    }
    Ok(messages)
}

/// Locale directory name -> parsed message map, for every `<locale>/main.ftl`.
fn load_locales() -> Result<BTreeMap<String, MessageMap>, Vec<String>> {
    let manifest_dir = env::var("CARGO_MANIFEST_DIR")
        .map_err(|_| vec!["CARGO_MANIFEST_DIR not set".to_string()])?;
    let locales_dir = PathBuf::from(manifest_dir).join("locales");

    let entries = fs::read_dir(&locales_dir)
        .map_err(|e| vec![format!("cannot read {}: {e}", locales_dir.display())])?;

    let mut locales = BTreeMap::new();
    let mut errors = Vec::new();
    for entry in entries {
        let path = match entry {
            Ok(entry) => entry.path(),
            Err(e) => {
                errors.push(format!("cannot read directory entry: {e}"));
                continue;
            }
        };
        let file = path.join("main.ftl");
        if !path.is_dir() || !file.exists() {
            continue;
        }
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or_default()
            .to_string();
        match fs::read_to_string(&file) {
            Ok(content) => match message_params(&content) {
                Ok(messages) => {
                    locales.insert(name, messages);
                }
                Err(e) => errors.push(format!("{name}: {e}")),
            },
            Err(e) => errors.push(format!("{name}: cannot read {}: {e}", file.display())),
        }
    }

    if locales.is_empty() {
        errors.push(format!("no locale files found under {}", locales_dir.display()));
    }
    if errors.is_empty() {
        Ok(locales)
    } else {
        Err(errors)
    }
}

fn validate() -> Result<(), Vec<String>> {
    let locales = load_locales()?;

    let mut errors = Vec::new();
    let (reference, reference_messages) = locales
        .iter()
        .next()
        .expect("load_locales returned at least one locale");

    for (locale, messages) in &locales {
        if locale == reference {
            continue;
        }
        for key in reference_messages.keys() {
            if !messages.contains_key(key) {
                errors.push(format!("{locale}: missing message key '{key}'"));
            }
        }
        for key in messages.keys() {
            if !reference_messages.contains_key(key) {
                errors.push(format!("{locale}: extra message key '{key}'"));
            }
        }
        for (key, reference_params) in reference_messages {
            if let Some(params) = messages.get(key) {
                if params != reference_params {
                    errors.push(format!(
                        "{locale}: parameter mismatch for '{key}': expected {reference_params:?}, found {params:?}"
                    ));
                }
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn main() {
    println!("cargo:rerun-if-changed=locales");

    if let Err(errors) = validate() {
        eprintln!("locale validation failed:");
        for error in errors {
            eprintln!("  {error}");
        }
        process::exit(1);
    }
}

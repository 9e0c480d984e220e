//! Host properties files
//!
//! Hosts configure providers with `key=value`, `key: value` or `key value`
//! lines. Provider parameters use
//! the layout `config.providers.<alias>.param.<option>`; a bare `<option>` key
//! applies to whichever alias is being loaded.

use crate::options::OptionMap;
use kscp_core::{Error, Result, PARAM_SEGMENT, PROVIDERS_PREFIX};
use serde_json::Value;
use std::collections::BTreeMap;

/// Parsed properties, in key order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Properties(BTreeMap<String, String>);

impl Properties {
    /// Parse properties text.
    ///
    /// Blank lines and lines starting with `#` or `!` are skipped. The key ends
    /// at the first `=`, `:` or whitespace; whitespace around a single `=` or
    /// `:` is part of the separator. A line with no separator is a key with an
    /// empty value. Later duplicates win.
    pub fn parse(text: &str) -> Result<Self> {
        let mut entries = BTreeMap::new();

        for (index, raw_line) in text.lines().enumerate() {
            let line = raw_line.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
                continue;
            }

            let (key, value) = split_entry(line);

            if key.is_empty() {
                return Err(Error::configuration(format!(
                    "line {}: property has no key",
                    index + 1
                )));
            }

            entries.insert(key.to_string(), value.to_string());
        }

        Ok(Self(entries))
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Collect the parameters addressed to `alias`.
    ///
    /// Scoped keys override bare keys of the same option. Keys scoped to other
    /// providers are left out.
    #[must_use]
    pub fn params_for(&self, alias: &str) -> OptionMap {
        let scope = format!("{PROVIDERS_PREFIX}{alias}{PARAM_SEGMENT}");
        let mut bare = OptionMap::new();
        let mut scoped = OptionMap::new();

        for (key, value) in &self.0 {
            if let Some(option) = key.strip_prefix(&scope) {
                scoped.insert(option.to_string(), Value::String(value.clone()));
            } else if !key.starts_with(PROVIDERS_PREFIX) {
                bare.insert(key.clone(), Value::String(value.clone()));
            }
        }

        bare.extend(scoped);
        bare
    }
}

fn split_entry(line: &str) -> (&str, &str) {
    let Some(end) = line.find(|c: char| c == '=' || c == ':' || c.is_whitespace()) else {
        return (line, "");
    };

    let rest = line[end..].trim_start();
    let value = rest
        .strip_prefix(['=', ':'])
        .map_or(rest, str::trim_start);
    (&line[..end], value)
}

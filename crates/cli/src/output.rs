use clap::ValueEnum;
use kscp_config::ProviderOptions;
use kscp_core::{ResolvedConfig, Result};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// A JSON object with sorted keys
    Json,
    /// `key=value` lines in properties syntax
    Properties,
}

/// Render resolved values for stdout, keys sorted
pub fn render(resolved: &ResolvedConfig, format: OutputFormat) -> Result<String> {
    let sorted: BTreeMap<&str, &str> = resolved
        .data()
        .iter()
        .map(|(k, v)| (k.as_str(), v.as_str()))
        .collect();

    match format {
        OutputFormat::Json => {
            let mut out = serde_json::to_string_pretty(&sorted)?;
            out.push('\n');
            Ok(out)
        }
        OutputFormat::Properties => {
            Ok(sorted
                .into_iter()
                .map(|(key, value)| format!("{}={}\n", escape(key, true), escape(value, false)))
                .collect())
        }
    }
}

/// Render effective provider options as pretty JSON
pub fn render_options(options: &ProviderOptions) -> Result<String> {
    let mut out = serde_json::to_string_pretty(options)?;
    out.push('\n');
    Ok(out)
}

fn escape(text: &str, is_key: bool) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            '=' | ':' | ' ' if is_key => {
                escaped.push('\\');
                escaped.push(c);
            }
            _ => escaped.push(c),
        }
    }
    escaped
}

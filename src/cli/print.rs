//! Print command.
//!
//! Loads configuration into an in-memory map instead of the process
//! environment and prints it.

use std::collections::BTreeMap;

use crate::cli::output;
use crate::core::options::Options;
use crate::core::{loader, value};
use crate::error::Result;

/// Print the configuration that would be loaded.
pub fn execute(options: &Options, json: bool, typed: bool) -> Result<()> {
    let mut env = BTreeMap::new();
    let result = loader::config_with(options, &mut env)?;
    if let Some(e) = &result.error {
        output::warn(&format!("partial load: {}", e));
    }

    if typed {
        let typed = result.typed.unwrap_or_default();
        println!(
            "{}",
            serde_json::to_string_pretty(&value::table_to_json(&typed))?
        );
    } else if json {
        println!("{}", serde_json::to_string_pretty(&result.parsed)?);
    } else {
        output::raw(&to_env_string(&result.parsed));
    }

    Ok(())
}

/// Render `KEY=value` lines, quoting values the way `.env` readers expect.
fn to_env_string(entries: &BTreeMap<String, String>) -> String {
    let mut out = String::new();

    for (key, value) in entries {
        if needs_quotes(value) {
            out.push_str(&format!("{}=\"{}\"\n", key, escape_env_value(value)));
        } else {
            out.push_str(&format!("{}={}\n", key, value));
        }
    }

    out
}

fn needs_quotes(value: &str) -> bool {
    value.is_empty()
        || value.chars().any(|ch| ch.is_whitespace())
        || value.contains(['#', '=', '"', '\'', '\\'])
}

fn escape_env_value(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());

    for ch in value.chars() {
        match ch {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            _ => escaped.push(ch),
        }
    }

    escaped
}

//! Command implementations for devtools-cli

pub mod base64;
pub mod categories;
pub mod completions;
pub mod config;
pub mod highlight;
pub mod json;
pub mod list;
pub mod open;
pub mod regex;

use std::io::Read;
use std::path::Path;

use serde::Serialize;

use crate::error::{CliError, Result};

pub use base64::run_base64;
pub use categories::run_categories;
pub use completions::run_completions;
pub use config::run_config_show;
pub use highlight::run_highlight;
pub use json::{run_json_format, run_json_minify, run_json_validate};
pub use list::run_list;
pub use open::run_open;
pub use regex::run_regex;

/// Marker argument for "read from stdin"
pub const STDIN: &str = "-";

/// Read a file argument, or stdin for "-".
pub fn read_source(input: &str) -> Result<String> {
    if input == STDIN {
        let mut content = String::new();
        std::io::stdin().read_to_string(&mut content)?;
        return Ok(content);
    }
    let path = Path::new(input);
    std::fs::read_to_string(path)
        .map_err(|e| CliError::user(format!("Cannot read {}: {}", path.display(), e)))
}

/// Pretty-print a value as JSON on stdout.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

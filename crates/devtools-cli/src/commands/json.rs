//! JSON commands

use colored::Colorize;
use devtools_catalog::AppConfig;
use devtools_highlight::{Language, Painter};
use devtools_kit::json_formatter;

use crate::commands::highlight::{emit, highlight_document};
use crate::commands::read_source;
use crate::error::{CliError, Result};

const MAX_INDENT: usize = 16;

/// Run json format
pub fn run_json_format(
    config: &AppConfig,
    input: &str,
    indent: Option<usize>,
    html: bool,
    painter: &dyn Painter,
) -> Result<()> {
    let indent = indent.unwrap_or(config.indent);
    if indent == 0 || indent > MAX_INDENT {
        return Err(CliError::user(format!(
            "--indent must be between 1 and {MAX_INDENT}, got {indent}"
        )));
    }

    let source = read_source(input)?;
    let formatted = json_formatter::format(&source, indent)?;
    emit(&highlight_document(Language::Json, formatted), html, painter);
    Ok(())
}

/// Run json minify
pub fn run_json_minify(input: &str) -> Result<()> {
    let source = read_source(input)?;
    println!("{}", json_formatter::minify(&source)?);
    Ok(())
}

/// Run json validate
pub fn run_json_validate(input: &str) -> Result<()> {
    let source = read_source(input)?;
    json_formatter::validate(&source)?;
    println!("{} Valid JSON", "ok:".green().bold());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use devtools_highlight::PlainPainter;
    use devtools_test_utils::TestWorkspace;

    #[test]
    fn test_indent_out_of_range() {
        let config = AppConfig::default();
        let err = run_json_format(&config, "-", Some(0), false, &PlainPainter).unwrap_err();
        assert!(matches!(err, CliError::User { .. }));
    }

    #[test]
    fn test_json_commands_on_file() {
        let ws = TestWorkspace::new();
        let path = ws.write("data.json", r#"{"b": [1, 2], "a": null}"#);
        let path = path.to_str().unwrap();
        let config = AppConfig::default();

        assert!(run_json_format(&config, path, None, true, &PlainPainter).is_ok());
        assert!(run_json_minify(path).is_ok());
        assert!(run_json_validate(path).is_ok());
    }

    #[test]
    fn test_invalid_json_propagates_kit_error() {
        let ws = TestWorkspace::new();
        let path = ws.write("bad.json", "{");
        let err = run_json_validate(path.to_str().unwrap()).unwrap_err();
        assert!(matches!(err, CliError::Kit(_)));
    }
}

//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// devtools - Browse and run small developer utilities
#[derive(Parser, Debug)]
#[command(name = "devtools")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Config file (defaults to <config dir>/devtools/config.toml)
    #[arg(long, global = true, env = "DEVTOOLS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Catalog file to use instead of the configured one
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// List tools, optionally filtered
    ///
    /// Examples:
    ///   devtools list                  # Every tool
    ///   devtools list -c data          # Only the "data" category
    ///   devtools list -s "encode"      # Name or description contains "encode"
    List {
        /// Category id ("all" for no category filter)
        #[arg(short, long)]
        category: Option<String>,

        /// Case-insensitive search text
        #[arg(short, long)]
        search: Option<String>,

        /// Strip surrounding whitespace from the search text
        #[arg(long)]
        trim: bool,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// List categories with their tool counts
    Categories {
        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Show details for a tool
    Open {
        /// Tool id (e.g., "regex", "json")
        id: String,
    },

    /// Test a regular expression against text
    ///
    /// Examples:
    ///   devtools regex '\d+' 'a1 b22' --flags g
    ///   devtools regex '(\w+)@(\w+)' 'me@host' --replace '$2:$1'
    Regex {
        /// Pattern to compile
        #[arg(allow_hyphen_values = true)]
        pattern: String,

        /// Text to search
        #[arg(allow_hyphen_values = true)]
        text: String,

        /// Flags: g (all matches), i, m, s, x
        #[arg(short, long, default_value = "")]
        flags: String,

        /// Replace matches instead of listing them ($1 and ${name} expand)
        #[arg(short, long)]
        replace: Option<String>,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Encode or decode Base64
    Base64 {
        #[command(subcommand)]
        action: Base64Action,
    },

    /// Format, minify or validate JSON
    Json {
        #[command(subcommand)]
        action: JsonAction,
    },

    /// Highlight source code
    ///
    /// Examples:
    ///   devtools highlight sql query.sql
    ///   cat page.html | devtools highlight html - --html
    Highlight {
        /// Language name or alias (json, js, ts, html, css, sql, sh, yaml)
        language: String,

        /// File to read, or "-" for stdin
        #[arg(default_value = "-")]
        input: String,

        /// Emit HTML markup instead of terminal output
        #[arg(long)]
        html: bool,
    },

    /// Manage configuration
    Config {
        /// Config action to perform
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completions
    ///
    /// Examples:
    ///   devtools completions bash > ~/.local/share/bash-completion/completions/devtools
    ///   devtools completions zsh > ~/.zfunc/_devtools
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Base64 actions
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Base64Action {
    /// Encode text
    Encode {
        /// Text to encode, or "-" for stdin
        #[arg(allow_hyphen_values = true)]
        input: String,

        /// Use the URL-safe alphabet
        #[arg(long)]
        url_safe: bool,
    },

    /// Decode to text
    Decode {
        /// Base64 to decode, or "-" for stdin
        #[arg(allow_hyphen_values = true)]
        input: String,

        /// Use the URL-safe alphabet
        #[arg(long)]
        url_safe: bool,
    },
}

/// JSON actions
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum JsonAction {
    /// Pretty-print and highlight
    Format {
        /// File to read, or "-" for stdin
        #[arg(default_value = "-")]
        input: String,

        /// Spaces per level (defaults to the configured indent)
        #[arg(long)]
        indent: Option<usize>,

        /// Emit HTML markup instead of terminal output
        #[arg(long)]
        html: bool,
    },

    /// Remove insignificant whitespace
    Minify {
        /// File to read, or "-" for stdin
        #[arg(default_value = "-")]
        input: String,
    },

    /// Check syntax and report the first error position
    Validate {
        /// File to read, or "-" for stdin
        #[arg(default_value = "-")]
        input: String,
    },
}

/// Config actions
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ConfigAction {
    /// Show the effective configuration
    Show {
        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_no_args() {
        let cli = Cli::parse_from(["devtools"]);
        assert!(!cli.verbose);
        assert!(cli.command.is_none());
    }

    #[test]
    fn parse_global_flags_after_subcommand() {
        let cli = Cli::parse_from(["devtools", "categories", "-v", "--catalog", "c.yaml"]);
        assert!(cli.verbose);
        assert_eq!(cli.catalog, Some(PathBuf::from("c.yaml")));
        assert_eq!(cli.command, Some(Commands::Categories { json: false }));
    }

    #[test]
    fn parse_list_filters() {
        let cli = Cli::parse_from(["devtools", "list", "-c", "data", "-s", " json ", "--trim"]);
        assert_eq!(
            cli.command,
            Some(Commands::List {
                category: Some("data".to_string()),
                search: Some(" json ".to_string()),
                trim: true,
                json: false,
            })
        );
    }

    #[test]
    fn parse_regex_command() {
        let cli = Cli::parse_from(["devtools", "regex", r"\d+", "a1", "-f", "gi", "-r", "#"]);
        match cli.command {
            Some(Commands::Regex {
                pattern,
                text,
                flags,
                replace,
                json,
            }) => {
                assert_eq!(pattern, r"\d+");
                assert_eq!(text, "a1");
                assert_eq!(flags, "gi");
                assert_eq!(replace.as_deref(), Some("#"));
                assert!(!json);
            }
            other => panic!("Expected Regex command, got {other:?}"),
        }
    }

    #[test]
    fn parse_base64_decode_url_safe() {
        let cli = Cli::parse_from(["devtools", "base64", "decode", "-_8=", "--url-safe"]);
        assert_eq!(
            cli.command,
            Some(Commands::Base64 {
                action: Base64Action::Decode {
                    input: "-_8=".to_string(),
                    url_safe: true,
                }
            })
        );
    }

    #[test]
    fn parse_json_format_defaults_to_stdin() {
        let cli = Cli::parse_from(["devtools", "json", "format", "--indent", "4"]);
        assert_eq!(
            cli.command,
            Some(Commands::Json {
                action: JsonAction::Format {
                    input: "-".to_string(),
                    indent: Some(4),
                    html: false,
                }
            })
        );
    }

    #[test]
    fn parse_completions_command() {
        let cli = Cli::parse_from(["devtools", "completions", "bash"]);
        assert_eq!(cli.command, Some(Commands::Completions { shell: Shell::Bash }));
    }

    #[test]
    fn parse_rejects_unknown_shell() {
        assert!(Cli::try_parse_from(["devtools", "completions", "tcsh"]).is_err());
    }
}

//! devtools CLI
//!
//! Browse the tool catalog and run the built-in utilities from a terminal.

mod cli;
mod commands;
mod context;
mod error;
mod painter;

use clap::Parser;
use colored::Colorize;

use cli::{Cli, Commands, ConfigAction, JsonAction};
use context::Context;
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    if let Err(e) = devtools_catalog::logging::init(cli.verbose) {
        eprintln!("{} Logging disabled: {}", "warning:".yellow().bold(), e);
    }
    tracing::debug!("Verbose mode enabled");

    match cli.command.clone() {
        Some(cmd) => execute_command(cmd, &cli),
        None => {
            println!("{} Developer utilities catalog", "devtools".green().bold());
            println!();
            println!("Run {} for available commands.", "devtools --help".cyan());
            Ok(())
        }
    }
}

fn load_context(cli: &Cli) -> Result<Context> {
    Context::load(cli.config.as_deref(), cli.catalog.as_deref())
}

fn execute_command(cmd: Commands, cli: &Cli) -> Result<()> {
    let painter = painter::stdout_painter();
    match cmd {
        Commands::List {
            category,
            search,
            trim,
            json,
        } => {
            let store = load_context(cli)?.store()?;
            commands::run_list(store, category.as_deref(), search.as_deref(), trim, json)
        }
        Commands::Categories { json } => {
            let store = load_context(cli)?.store()?;
            commands::run_categories(&store, json)
        }
        Commands::Open { id } => {
            let ctx = load_context(cli)?;
            commands::run_open(ctx.store()?, &ctx.config, &id, painter.as_ref())
        }
        Commands::Regex {
            pattern,
            text,
            flags,
            replace,
            json,
        } => commands::run_regex(&pattern, &text, &flags, replace.as_deref(), json),
        Commands::Base64 { action } => commands::run_base64(&action),
        Commands::Json { action } => match action {
            JsonAction::Format {
                input,
                indent,
                html,
            } => {
                let ctx = load_context(cli)?;
                commands::run_json_format(&ctx.config, &input, indent, html, painter.as_ref())
            }
            JsonAction::Minify { input } => commands::run_json_minify(&input),
            JsonAction::Validate { input } => commands::run_json_validate(&input),
        },
        Commands::Highlight {
            language,
            input,
            html,
        } => commands::run_highlight(&language, &input, html, painter.as_ref()),
        Commands::Config { action } => match action {
            ConfigAction::Show { json } => {
                let ctx = load_context(cli)?;
                commands::run_config_show(&ctx.config, json)
            }
        },
        Commands::Completions { shell } => {
            commands::run_completions(shell);
            Ok(())
        }
    }
}

//! Configuration display command

use colored::Colorize;
use devtools_catalog::AppConfig;

use crate::commands::print_json;
use crate::error::Result;

/// Display the effective configuration
pub fn run_config_show(config: &AppConfig, json: bool) -> Result<()> {
    if json {
        return print_json(&serde_json::json!({
            "profile": config.profile,
            "base_path": config.base_path(),
            "catalog": config.catalog,
            "query_policy": config.query_policy,
            "indent": config.indent,
            "source": config.source,
        }));
    }

    let catalog = match &config.catalog {
        Some(path) => path.display().to_string(),
        None => "(built-in)".to_string(),
    };
    let source = match &config.source {
        Some(path) => path.display().to_string(),
        None => "(defaults)".to_string(),
    };

    println!("{}", "Configuration".bold());
    println!();
    println!("  {:<14} {:?}", "Profile:".dimmed(), config.profile);
    println!("  {:<14} {}", "Base path:".dimmed(), config.base_path());
    println!("  {:<14} {}", "Catalog:".dimmed(), catalog);
    println!("  {:<14} {:?}", "Query policy:".dimmed(), config.query_policy);
    println!("  {:<14} {}", "Indent:".dimmed(), config.indent);
    println!("  {:<14} {}", "Source:".dimmed(), source);

    Ok(())
}

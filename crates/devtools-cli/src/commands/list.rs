//! List command for the filtered tool view

use colored::Colorize;
use devtools_catalog::{QueryPolicy, ToolStore};

use crate::commands::print_json;
use crate::error::Result;

/// Run the list command
pub fn run_list(
    mut store: ToolStore,
    category: Option<&str>,
    search: Option<&str>,
    trim: bool,
    json: bool,
) -> Result<()> {
    if trim {
        store = store.with_query_policy(QueryPolicy::Trim);
    }
    if let Some(category) = category {
        store.select_category(category);
    }
    if let Some(search) = search {
        store.set_search_query(search);
    }

    let selected = store.selected_category();
    let categories = store.categories();
    if !categories.iter().any(|c| c.id == selected) {
        let valid: Vec<&str> = categories.iter().map(|c| c.id.as_str()).collect();
        eprintln!(
            "{} Unknown category '{}'. Valid: {}",
            "warning:".yellow().bold(),
            selected,
            valid.join(", ")
        );
    }

    let tools = store.filtered_tools();

    if json {
        return print_json(&tools);
    }

    let label = store.selected_label();
    println!("{} ({})", label.name.bold(), tools.len());
    println!();

    if tools.is_empty() {
        println!("  {}", "No tools match.".dimmed());
        return Ok(());
    }

    for tool in &tools {
        println!(
            "  {:<10} {} {}",
            tool.id.green(),
            tool.name,
            format!("[{}]", tool.category_name).dimmed()
        );
        println!("  {:<10} {}", "", tool.description.dimmed());
    }

    println!();
    println!(
        "{} Use {} for details.",
        "Tip:".dimmed(),
        "devtools open <id>".cyan()
    );

    Ok(())
}

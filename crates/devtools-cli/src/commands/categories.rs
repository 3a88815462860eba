//! Categories command

use colored::Colorize;
use devtools_catalog::ToolStore;

use crate::commands::print_json;
use crate::error::Result;

/// Run the categories command
pub fn run_categories(store: &ToolStore, json: bool) -> Result<()> {
    let categories = store.categories();

    if json {
        return print_json(&categories);
    }

    println!("{}", "Categories".bold());
    println!();
    for category in &categories {
        println!(
            "  {:<10} {:<20} {}",
            category.id.green(),
            category.name,
            category.count.to_string().cyan()
        );
    }

    Ok(())
}

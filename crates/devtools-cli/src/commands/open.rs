//! Open command: tool details with a highlighted usage example

use colored::Colorize;
use devtools_catalog::{AppConfig, ToolStore};
use devtools_highlight::{Painter, RenderNotifier};
use devtools_kit::Utility;

use crate::error::Result;

/// Route for a tool's page relative to the base path
fn tool_route(id: &str) -> String {
    format!("tools/{id}")
}

/// Render the details of the open tool, or the empty-slot message.
pub fn render_details(store: &ToolStore, config: &AppConfig, painter: &dyn Painter) -> String {
    let Some(tool) = store.current_tool() else {
        return "No tool open\n".to_string();
    };

    let label = store.catalog().lookup_category(&tool.category);
    let notifier = RenderNotifier::highlighting();
    let doc = notifier.render(|doc| {
        doc.push_text(format!(
            "{}\n\n  {:<10} {}\n  {:<10} {} ({})\n  {:<10} {}\n  {:<10} {}\n",
            tool.name.bold(),
            "Id:".dimmed(),
            tool.id,
            "Category:".dimmed(),
            label.name,
            label.icon,
            "About:".dimmed(),
            tool.description,
            "Link:".dimmed(),
            config.asset_url(&tool_route(&tool.id)),
        ));
        match Utility::from_tool_id(&tool.id) {
            Some(utility) => {
                let example = utility.example();
                doc.push_text(format!("\n{}\n", "Example:".dimmed()))
                    .push_code(Some(example.language), example.code)
                    .push_text("\n");
            }
            None => {
                doc.push_text(format!("\n{}\n", "No built-in utility for this tool.".dimmed()));
            }
        }
    });

    doc.render(painter)
}

/// Run the open command
pub fn run_open(mut store: ToolStore, config: &AppConfig, id: &str, painter: &dyn Painter) -> Result<()> {
    store.open_tool(id);
    print!("{}", render_details(&store, config, painter));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use devtools_catalog::Profile;
    use devtools_highlight::PlainPainter;

    fn production() -> AppConfig {
        AppConfig {
            profile: Profile::Production,
            ..AppConfig::default()
        }
    }

    #[test]
    fn test_unknown_tool_leaves_slot_empty() {
        let mut store = ToolStore::default();
        store.open_tool("nope");
        assert_eq!(render_details(&store, &production(), &PlainPainter), "No tool open\n");
    }

    #[test]
    fn test_details_include_label_link_and_example() {
        let mut store = ToolStore::default();
        store.open_tool("json");
        let out = render_details(&store, &production(), &PlainPainter);

        assert!(out.contains("JSON Formatter"));
        assert!(out.contains("Data Formats (fas fa-database)"));
        assert!(out.contains("/mydevToolsOL/tools/json"));
        assert!(out.contains("\"name\": \"devtools\""));
    }

    #[test]
    fn test_closed_tool_renders_empty_slot() {
        let mut store = ToolStore::default();
        store.open_tool("json");
        store.close_tool();
        assert_eq!(render_details(&store, &production(), &PlainPainter), "No tool open\n");
    }
}

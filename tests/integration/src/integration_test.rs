//! End-to-end tests across the catalog, utilities and highlighter
//!
//! Each test walks a full browse flow: config -> catalog -> session ->
//! utility -> highlighted render.

use devtools_catalog::{ALL_CATEGORY, AppConfig, Catalog, Profile, QueryPolicy, ToolStore};
use devtools_highlight::{HtmlPainter, PlainPainter, RenderNotifier};
use devtools_kit::{Alphabet, RegexTester, Utility, base64_codec, json_formatter};
use devtools_test_utils::{TestWorkspace, fixtures};
use pretty_assertions::assert_eq;

fn ids<'a>(tools: impl IntoIterator<Item = &'a devtools_catalog::Tool>) -> Vec<&'a str> {
    tools.into_iter().map(|t| t.id.as_str()).collect()
}

#[test]
fn test_browse_search_and_open_builtin() {
    let mut store = ToolStore::default();

    // Initial view shows every tool
    assert_eq!(ids(store.filtered_tools()), vec!["regex", "base64", "json"]);
    assert_eq!(store.selected_label().name, "All");

    store.select_category("data");
    store.set_search_query("JSON");
    assert_eq!(ids(store.filtered_tools()), vec!["json"]);

    store.open_tool("json");
    let tool = store.current_tool().unwrap();
    assert_eq!(store.category_name(&tool.category), "Data Formats");

    // The open tool maps to a runnable utility
    assert_eq!(Utility::from_tool_id(&tool.id), Some(Utility::JsonFormatter));

    store.close_tool();
    assert!(store.current_tool().is_none());
}

#[test]
fn test_open_unknown_then_known() {
    let mut store = ToolStore::default();
    store.open_tool("base64");
    store.open_tool("does-not-exist");
    assert!(store.current_tool().is_none());
    assert_eq!(store.category_icon("does-not-exist"), "fas fa-th");
    assert_eq!(store.category_name("does-not-exist"), "All Tools");
}

#[test]
fn test_production_config_with_external_catalog() {
    let ws = TestWorkspace::new();
    ws.write("catalog.json", fixtures::EXTENDED_CATALOG_JSON);
    let path = ws.write("config.toml", fixtures::PRODUCTION_CONFIG_TOML);

    let mut config = AppConfig::load(&path).unwrap();
    config.apply_profile_env(None);
    assert_eq!(config.profile, Profile::Production);
    assert_eq!(config.asset_url("tools/uuid"), "/mydevToolsOL/tools/uuid");

    let catalog = config.load_catalog().unwrap();
    let mut store = ToolStore::new(catalog).with_query_policy(config.query_policy);
    assert_eq!(store.query_policy(), QueryPolicy::Trim);

    store.set_search_query("  generate ");
    assert_eq!(ids(store.filtered_tools()), vec!["uuid", "lorem"]);

    // The synthetic "all" category is present with the full count
    let counts: Vec<(String, usize)> = store
        .categories()
        .into_iter()
        .map(|c| (c.id, c.count))
        .collect();
    assert_eq!(
        counts,
        vec![
            (ALL_CATEGORY.to_string(), 4),
            ("text".to_string(), 2),
            ("gen".to_string(), 2)
        ]
    );

    // Catalog tools without a built-in utility
    assert!(store.tools().iter().all(|t| Utility::from_tool_id(&t.id).is_none()));
}

#[test]
fn test_development_profile_env_override() {
    let mut config = AppConfig::default();
    config.apply_profile_env(Some("development"));
    assert_eq!(config.base_path(), "/");
    config.apply_profile_env(Some("prod"));
    assert_eq!(config.base_path(), "/mydevToolsOL/");
}

#[test]
fn test_catalog_formats_agree() {
    let ws = TestWorkspace::new();
    let toml = Catalog::load(&ws.write("a.toml", fixtures::SCENARIO_CATALOG_TOML)).unwrap();
    assert_eq!(toml, Catalog::builtin());

    let yaml = Catalog::load(&ws.write("b.yml", fixtures::MINIMAL_CATALOG_YAML)).unwrap();
    assert_eq!(ids(yaml.filter("crypto", "sha")), vec!["hash"]);
}

#[test]
fn test_json_tool_render_pass() {
    let formatted = json_formatter::format(r#"{"tool":"json","ok":true}"#, 2).unwrap();

    let notifier = RenderNotifier::highlighting();
    let doc = notifier.render(|doc| {
        doc.push_text("Result\n").push_code(Some("json"), formatted.as_str());
    });

    assert_eq!(doc.render(&PlainPainter), format!("Result\n{formatted}"));
    let html = doc.render(&HtmlPainter);
    assert!(html.contains(r#"<span class="token property">&quot;tool&quot;</span>"#));
    assert!(html.contains(r#"<span class="token boolean">true</span>"#));
}

#[test]
fn test_usage_examples_highlight_and_run() {
    let notifier = RenderNotifier::highlighting();
    for utility in Utility::ALL {
        let example = utility.example();
        let doc = notifier.render(|doc| {
            doc.push_code(Some(example.language), example.code);
        });
        assert!(doc.code_blocks().all(|b| b.is_highlighted()), "{utility}");
    }

    // What the regex example advertises actually works
    let tester = RegexTester::new(r"(?P<year>\d{4})-(\d{2})", "g").unwrap();
    let years: Vec<String> = tester
        .find("from 2024-01 to 2025-06")
        .iter()
        .filter_map(|m| m.named("year").map(str::to_string))
        .collect();
    assert_eq!(years, vec!["2024", "2025"]);

    assert_eq!(
        base64_codec::decode_to_string("aGVsbG8gd29ybGQ=", Alphabet::Standard).unwrap(),
        "hello world"
    );
}

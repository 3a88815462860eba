//! Catalog and config documents used across test suites.

/// The three-tool scenario catalog: regex (code), base64 (text), json (data).
pub const SCENARIO_CATALOG_TOML: &str = r#"
[[tools]]
id = "regex"
name = "Regex Tester"
icon = "fas fa-not-equal"
category = "code"
categoryName = "Code"
description = "Test and debug regular expressions online"

[[tools]]
id = "base64"
name = "Base64 Encode/Decode"
icon = "fas fa-lock"
category = "text"
categoryName = "Text"
description = "Base64 encoding and decoding tool"

[[tools]]
id = "json"
name = "JSON Formatter"
icon = "fas fa-indent"
category = "data"
categoryName = "Data Formats"
description = "Format, minify and validate JSON data"

[[categories]]
id = "all"
name = "All"
icon = "fas fa-th"

[[categories]]
id = "code"
name = "Code"
icon = "fas fa-code"

[[categories]]
id = "text"
name = "Text"
icon = "fas fa-font"

[[categories]]
id = "data"
name = "Data Formats"
icon = "fas fa-database"
"#;

/// A larger catalog in JSON, with two tools per category and no "all" entry.
pub const EXTENDED_CATALOG_JSON: &str = r#"{
  "tools": [
    { "id": "url", "name": "URL Encoder", "icon": "fas fa-link", "category": "text",
      "categoryName": "Text", "description": "Percent-encode text for URLs" },
    { "id": "uuid", "name": "UUID Generator", "icon": "fas fa-key", "category": "gen",
      "categoryName": "Generators", "description": "Generate random identifiers" },
    { "id": "case", "name": "Case Converter", "icon": "fas fa-font", "category": "text",
      "categoryName": "Text", "description": "Switch between camelCase and snake_case" },
    { "id": "lorem", "name": "Lorem Ipsum", "icon": "fas fa-paragraph", "category": "gen",
      "categoryName": "Generators", "description": "Generate placeholder TEXT" }
  ],
  "categories": [
    { "id": "text", "name": "Text", "icon": "fas fa-font" },
    { "id": "gen", "name": "Generators", "icon": "fas fa-magic" }
  ]
}"#;

/// A YAML catalog with a single tool.
pub const MINIMAL_CATALOG_YAML: &str = r#"
tools:
  - id: hash
    name: Hash Calculator
    icon: fas fa-hashtag
    category: crypto
    categoryName: Crypto
    description: Compute SHA digests
categories:
  - id: crypto
    name: Crypto
    icon: fas fa-shield-alt
"#;

/// A catalog that repeats a tool id.
pub const DUPLICATE_CATALOG_TOML: &str = r#"
[[tools]]
id = "dup"
name = "First"
icon = "i"
category = "x"
categoryName = "X"
description = "first"

[[tools]]
id = "dup"
name = "Second"
icon = "i"
category = "x"
categoryName = "X"
description = "second"
"#;

/// A production config pointing at a catalog next to it.
pub const PRODUCTION_CONFIG_TOML: &str = r#"
profile = "production"
catalog = "catalog.json"
query_policy = "trim"
indent = 4
"#;

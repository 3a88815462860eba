//! Catalog filtering by category and search text

use serde::{Deserialize, Serialize};

use crate::tool::{ALL_CATEGORY, Tool};

/// How the search query is prepared before matching.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QueryPolicy {
    /// Match the query exactly as typed; whitespace is literal text
    #[default]
    Literal,
    /// Strip leading and trailing whitespace first
    Trim,
}

impl QueryPolicy {
    /// Parse a policy name ("literal" or "trim")
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "literal" => Some(Self::Literal),
            "trim" => Some(Self::Trim),
            _ => None,
        }
    }

    /// Apply the policy to a raw query
    pub fn apply<'a>(&self, query: &'a str) -> &'a str {
        match self {
            Self::Literal => query,
            Self::Trim => query.trim(),
        }
    }
}

/// Produce the visible subset of `tools`.
///
/// Narrows by exact (case-sensitive) category first, skipped for `"all"`,
/// then keeps tools whose name or description contains `query`
/// case-insensitively. An empty query keeps everything. Catalog order is
/// preserved.
pub fn filter_tools<'a>(tools: &'a [Tool], category: &str, query: &str) -> Vec<&'a Tool> {
    let needle = (!query.is_empty()).then(|| query.to_lowercase());

    tools
        .iter()
        .filter(|tool| category == ALL_CATEGORY || tool.category == category)
        .filter(|tool| needle.as_deref().is_none_or(|n| tool.matches_lowercase(n)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn catalog() -> Vec<Tool> {
        vec![
            Tool::new("regex", "Regex Tester", "i", "code", "Code", "Test regular expressions"),
            Tool::new("base64", "Base64", "i", "text", "Text", "Encode and decode"),
            Tool::new("json", "JSON Formatter", "i", "data", "Data", "Format JSON"),
        ]
    }

    fn ids(tools: Vec<&Tool>) -> Vec<&str> {
        tools.into_iter().map(|t| t.id.as_str()).collect()
    }

    #[rstest]
    #[case("all", "", vec!["regex", "base64", "json"])]
    #[case("all", "json", vec!["json"])]
    #[case("text", "", vec!["base64"])]
    #[case("data", "xyz", vec![])]
    #[case("code", "REGULAR", vec!["regex"])]
    #[case("Code", "", vec![])]
    #[case("nope", "", vec![])]
    fn test_filter_table(#[case] category: &str, #[case] query: &str, #[case] expected: Vec<&str>) {
        let tools = catalog();
        assert_eq!(ids(filter_tools(&tools, category, query)), expected);
    }

    #[test]
    fn test_whitespace_query_is_literal() {
        let tools = catalog();
        // "Regex Tester", "JSON Formatter", and several descriptions contain a space
        assert_eq!(ids(filter_tools(&tools, "all", " ")), vec!["regex", "base64", "json"]);
        assert!(filter_tools(&tools, "all", "  ").is_empty());
    }

    #[test]
    fn test_query_policy_trim() {
        assert_eq!(QueryPolicy::Trim.apply("  json "), "json");
        assert_eq!(QueryPolicy::Literal.apply("  json "), "  json ");
        assert_eq!(QueryPolicy::Trim.apply("   "), "");
    }

    #[test]
    fn test_query_policy_parse() {
        assert_eq!(QueryPolicy::parse("trim"), Some(QueryPolicy::Trim));
        assert_eq!(QueryPolicy::parse("literal"), Some(QueryPolicy::Literal));
        assert_eq!(QueryPolicy::parse("fuzzy"), None);
        assert_eq!(QueryPolicy::default(), QueryPolicy::Literal);
    }
}

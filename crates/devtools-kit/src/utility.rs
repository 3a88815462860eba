//! Mapping from catalog tool ids to the utilities that implement them

use std::fmt;

/// A runnable utility behind a catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Utility {
    RegexTester,
    Base64,
    JsonFormatter,
}

/// A short usage example shown in tool details.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Example {
    /// Language tag for highlighting
    pub language: &'static str,
    pub code: &'static str,
}

impl Utility {
    pub const ALL: [Utility; 3] = [Self::RegexTester, Self::Base64, Self::JsonFormatter];

    /// The utility for a catalog id, if one is implemented.
    pub fn from_tool_id(id: &str) -> Option<Self> {
        let utility = Self::ALL.into_iter().find(|u| u.tool_id() == id);
        if utility.is_none() {
            tracing::debug!(id, "No utility for tool");
        }
        utility
    }

    pub fn tool_id(&self) -> &'static str {
        match self {
            Self::RegexTester => "regex",
            Self::Base64 => "base64",
            Self::JsonFormatter => "json",
        }
    }

    pub fn example(&self) -> Example {
        match self {
            Self::RegexTester => Example {
                language: "bash",
                code: "devtools regex '(?P<year>\\d{4})-(\\d{2})' 'from 2024-01 to 2025-06' --flags g",
            },
            Self::Base64 => Example {
                language: "bash",
                code: "devtools base64 encode 'hello world'\necho aGVsbG8gd29ybGQ= | devtools base64 decode -",
            },
            Self::JsonFormatter => Example {
                language: "json",
                code: "{\n  \"name\": \"devtools\",\n  \"tools\": [\"regex\", \"base64\", \"json\"],\n  \"stable\": true\n}",
            },
        }
    }
}

impl fmt::Display for Utility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tool_id())
    }
}

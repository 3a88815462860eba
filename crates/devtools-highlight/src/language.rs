//! Supported languages and their aliases

use std::fmt;

use crate::error::{Error, Result};

/// Languages the highlighter understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    Json,
    JavaScript,
    TypeScript,
    Markup,
    Css,
    Sql,
    Bash,
    Yaml,
}

impl Language {
    /// Every supported language.
    pub const ALL: [Language; 8] = [
        Self::Json,
        Self::JavaScript,
        Self::TypeScript,
        Self::Markup,
        Self::Css,
        Self::Sql,
        Self::Bash,
        Self::Yaml,
    ];

    /// Resolve a language name or alias (case-insensitive).
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "json" => Some(Self::Json),
            "javascript" | "js" => Some(Self::JavaScript),
            "typescript" | "ts" => Some(Self::TypeScript),
            "markup" | "html" | "xml" | "svg" => Some(Self::Markup),
            "css" => Some(Self::Css),
            "sql" => Some(Self::Sql),
            "bash" | "sh" | "shell" => Some(Self::Bash),
            "yaml" | "yml" => Some(Self::Yaml),
            _ => None,
        }
    }

    /// Like [`Language::from_name`] but reports the supported set on failure.
    pub fn parse(name: &str) -> Result<Self> {
        Self::from_name(name).ok_or_else(|| Error::UnknownLanguage {
            name: name.to_string(),
            supported: Self::ALL
                .iter()
                .map(|l| l.name())
                .collect::<Vec<_>>()
                .join(", "),
        })
    }

    /// Canonical name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::JavaScript => "javascript",
            Self::TypeScript => "typescript",
            Self::Markup => "markup",
            Self::Css => "css",
            Self::Sql => "sql",
            Self::Bash => "bash",
            Self::Yaml => "yaml",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

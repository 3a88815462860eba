//! Token kinds produced by the lexer

use std::ops::Range;

/// Classification of a highlighted span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Comment,
    String,
    Number,
    Keyword,
    Builtin,
    Boolean,
    Property,
    Punctuation,
    Operator,
    Function,
    Tag,
    AttrName,
    AttrValue,
    Selector,
    Variable,
    Entity,
    /// Text with no highlighting
    Plain,
}

impl TokenKind {
    /// CSS class name, following the `token <kind>` convention.
    ///
    /// `Plain` has no class.
    pub fn class(&self) -> Option<&'static str> {
        let class = match self {
            Self::Comment => "comment",
            Self::String => "string",
            Self::Number => "number",
            Self::Keyword => "keyword",
            Self::Builtin => "builtin",
            Self::Boolean => "boolean",
            Self::Property => "property",
            Self::Punctuation => "punctuation",
            Self::Operator => "operator",
            Self::Function => "function",
            Self::Tag => "tag",
            Self::AttrName => "attr-name",
            Self::AttrValue => "attr-value",
            Self::Selector => "selector",
            Self::Variable => "variable",
            Self::Entity => "entity",
            Self::Plain => return None,
        };
        Some(class)
    }
}

/// A classified slice of source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
}

/// A classified byte range, detached from the source it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub kind: TokenKind,
    pub range: Range<usize>,
}

impl Span {
    /// Resolve the span against its source.
    pub fn token<'a>(&self, source: &'a str) -> Token<'a> {
        Token {
            kind: self.kind,
            text: &source[self.range.clone()],
        }
    }
}

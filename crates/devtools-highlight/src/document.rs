//! Rendered output as a sequence of text and code blocks
//!
//! A [`Document`] is what a view produces during a render pass. Code
//! blocks carry their source and, once highlighted, the classified spans
//! for it. Highlighting always recomputes spans from the source, so it is
//! safe to repeat.

use crate::language::Language;
use crate::lexer;
use crate::render::{HtmlPainter, Painter};
use crate::token::{Span, Token, TokenKind};

/// A fenced piece of source code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeBlock {
    tag: Option<String>,
    language: Option<Language>,
    source: String,
    spans: Option<Vec<Span>>,
}

impl CodeBlock {
    /// Create a block. `tag` is the language name as written; unknown tags
    /// are kept for output but never highlighted.
    pub fn new(tag: Option<&str>, source: impl Into<String>) -> Self {
        Self {
            tag: tag.map(str::to_string),
            language: tag.and_then(Language::from_name),
            source: source.into(),
            spans: None,
        }
    }

    pub fn language(&self) -> Option<Language> {
        self.language
    }

    pub fn language_tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn spans(&self) -> Option<&[Span]> {
        self.spans.as_deref()
    }

    pub fn is_highlighted(&self) -> bool {
        self.spans.is_some()
    }

    /// Highlight from source. Returns false when the language is unknown.
    pub fn highlight(&mut self) -> bool {
        match self.language {
            Some(language) => {
                self.spans = Some(lexer::spans(language, &self.source));
                true
            }
            None => false,
        }
    }

    /// Tokens for painting; a single plain token when not highlighted.
    pub fn tokens(&self) -> Vec<Token<'_>> {
        match &self.spans {
            Some(spans) => spans.iter().map(|s| s.token(&self.source)).collect(),
            None if self.source.is_empty() => Vec::new(),
            None => vec![Token {
                kind: TokenKind::Plain,
                text: &self.source,
            }],
        }
    }

    pub fn paint(&self, painter: &dyn Painter) -> String {
        let body: String = self
            .tokens()
            .into_iter()
            .map(|t| painter.token(t.kind, t.text))
            .collect();
        painter.code_block(self, body)
    }
}

/// One piece of a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Text(String),
    Code(CodeBlock),
}

/// The output of a render pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    nodes: Vec<Node>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append free text.
    pub fn push_text(&mut self, text: impl Into<String>) -> &mut Self {
        self.nodes.push(Node::Text(text.into()));
        self
    }

    /// Append a code block.
    pub fn push_code(&mut self, tag: Option<&str>, source: impl Into<String>) -> &mut Self {
        self.nodes.push(Node::Code(CodeBlock::new(tag, source)));
        self
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn code_blocks(&self) -> impl Iterator<Item = &CodeBlock> {
        self.nodes.iter().filter_map(|n| match n {
            Node::Code(block) => Some(block),
            Node::Text(_) => None,
        })
    }

    pub fn code_blocks_mut(&mut self) -> impl Iterator<Item = &mut CodeBlock> {
        self.nodes.iter_mut().filter_map(|n| match n {
            Node::Code(block) => Some(block),
            Node::Text(_) => None,
        })
    }

    /// Paint every node and concatenate the result.
    pub fn render(&self, painter: &dyn Painter) -> String {
        self.nodes
            .iter()
            .map(|node| match node {
                Node::Text(text) => painter.text(text),
                Node::Code(block) => block.paint(painter),
            })
            .collect()
    }

    pub fn to_html(&self) -> String {
        self.render(&HtmlPainter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::PlainPainter;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_unknown_tag_is_kept_but_not_highlighted() {
        let mut block = CodeBlock::new(Some("brainfuck"), "+-");
        assert_eq!(block.language(), None);
        assert_eq!(block.language_tag(), Some("brainfuck"));
        assert!(!block.highlight());
        assert!(!block.is_highlighted());
    }

    #[test]
    fn test_highlight_is_recomputed() {
        let mut block = CodeBlock::new(Some("json"), "[1]");
        assert!(block.highlight());
        let first = block.spans().map(<[Span]>::to_vec);
        assert!(block.highlight());
        assert_eq!(block.spans().map(<[Span]>::to_vec), first);
    }

    #[test]
    fn test_tokens_of_unhighlighted_block() {
        let block = CodeBlock::new(None, "x");
        assert_eq!(block.tokens(), vec![Token { kind: TokenKind::Plain, text: "x" }]);
        assert!(CodeBlock::new(None, "").tokens().is_empty());
    }

    #[test]
    fn test_document_html() {
        let mut doc = Document::new();
        doc.push_text("<h1>").push_code(Some("json"), "true");
        for block in doc.code_blocks_mut() {
            block.highlight();
        }
        assert_eq!(
            doc.to_html(),
            r#"&lt;h1&gt;<pre class="language-json"><code class="language-json"><span class="token boolean">true</span></code></pre>"#
        );
    }

    #[test]
    fn test_plain_render_round_trips_text() {
        let mut doc = Document::new();
        doc.push_text("a\n").push_code(Some("sql"), "SELECT 1;").push_code(None, "raw");
        assert_eq!(doc.render(&PlainPainter), "a\nSELECT 1;raw");
        assert_eq!(doc.code_blocks().count(), 2);
        assert_eq!(doc.len(), 3);
    }
}

//! Syntax highlighting for devtools output.
//!
//! Highlighting is a side effect of rendering. A view builds a
//! [`Document`] of text and code blocks; when the pass is complete the
//! caller notifies a [`RenderNotifier`], and the registered
//! [`HighlightHook`] classifies every code block present at that moment.
//!
//! ```
//! use devtools_highlight::{HtmlPainter, RenderNotifier};
//!
//! let notifier = RenderNotifier::highlighting();
//! let doc = notifier.render(|doc| {
//!     doc.push_code(Some("json"), r#"{"ok": true}"#);
//! });
//! let html = doc.render(&HtmlPainter);
//! assert!(html.contains(r#"<span class="token boolean">true</span>"#));
//! ```
//!
//! The lexer is a regex-driven state machine with one grammar per
//! [`Language`]: json, javascript, typescript, markup, css, sql, bash and
//! yaml.

pub mod document;
pub mod error;
mod grammar;
pub mod language;
pub mod lexer;
pub mod notify;
pub mod render;
pub mod token;

pub use document::{CodeBlock, Document, Node};
pub use error::{Error, Result};
pub use language::Language;
pub use lexer::{spans, tokenize};
pub use notify::{HighlightHook, RenderHook, RenderNotifier, highlight_all};
pub use render::{HtmlPainter, Painter, PlainPainter, escape_html};
pub use token::{Span, Token, TokenKind};

//! Output styles for highlighted documents

use crate::document::CodeBlock;
use crate::token::TokenKind;

/// Turns document pieces into output text.
///
/// Implement this to target a new medium; [`HtmlPainter`] is the
/// built-in one.
pub trait Painter {
    /// Text outside code blocks.
    fn text(&self, text: &str) -> String;

    /// One token inside a highlighted code block.
    fn token(&self, kind: TokenKind, text: &str) -> String;

    /// Wrap the painted body of a code block.
    fn code_block(&self, _block: &CodeBlock, body: String) -> String {
        body
    }
}

/// Escape text for inclusion in HTML.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

/// HTML output using `<span class="token kind">` markup.
#[derive(Debug, Default, Clone, Copy)]
pub struct HtmlPainter;

impl Painter for HtmlPainter {
    fn text(&self, text: &str) -> String {
        escape_html(text)
    }

    fn token(&self, kind: TokenKind, text: &str) -> String {
        match kind.class() {
            Some(class) => format!(r#"<span class="token {class}">{}</span>"#, escape_html(text)),
            None => escape_html(text),
        }
    }

    fn code_block(&self, block: &CodeBlock, body: String) -> String {
        match block.language_tag() {
            Some(tag) => {
                let tag = escape_html(tag);
                format!(r#"<pre class="language-{tag}"><code class="language-{tag}">{body}</code></pre>"#)
            }
            None => format!("<pre><code>{body}</code></pre>"),
        }
    }
}

/// Plain output with no markup at all.
#[derive(Debug, Default, Clone, Copy)]
pub struct PlainPainter;

impl Painter for PlainPainter {
    fn text(&self, text: &str) -> String {
        text.to_string()
    }

    fn token(&self, _kind: TokenKind, text: &str) -> String {
        text.to_string()
    }
}

//! Highlight command

use devtools_highlight::{Document, Language, Painter, RenderNotifier};

use crate::commands::read_source;
use crate::error::Result;

/// Print a rendered document as HTML or through `painter`.
pub fn emit(doc: &Document, html: bool, painter: &dyn Painter) {
    let out = if html { doc.to_html() } else { doc.render(painter) };
    println!("{}", out.trim_end_matches('\n'));
}

/// Highlight `source` in a single render pass.
pub fn highlight_document(language: Language, source: String) -> Document {
    RenderNotifier::highlighting().render(|doc| {
        doc.push_code(Some(language.name()), source);
    })
}

/// Run the highlight command
pub fn run_highlight(language: &str, input: &str, html: bool, painter: &dyn Painter) -> Result<()> {
    let language = Language::parse(language)?;
    let source = read_source(input)?;
    tracing::debug!(%language, bytes = source.len(), "Highlighting input");
    emit(&highlight_document(language, source), html, painter);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CliError;
    use devtools_highlight::PlainPainter;

    #[test]
    fn test_unknown_language_is_an_error() {
        let err = run_highlight("cobol", "-", false, &PlainPainter).unwrap_err();
        assert!(matches!(err, CliError::Highlight(_)));
    }

    #[test]
    fn test_document_is_highlighted() {
        let doc = highlight_document(Language::Sql, "SELECT 1".to_string());
        assert!(doc.code_blocks().all(|b| b.is_highlighted()));
        assert_eq!(
            doc.to_html(),
            concat!(
                r#"<pre class="language-sql"><code class="language-sql">"#,
                r#"<span class="token keyword">SELECT</span> <span class="token number">1</span>"#,
                "</code></pre>"
            )
        );
    }
}

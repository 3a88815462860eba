//! Integration tests for the render pass and HTML output

use devtools_highlight::{
    Document, HtmlPainter, Language, Node, RenderNotifier, TokenKind, highlight_all, spans,
    tokenize,
};
use pretty_assertions::assert_eq;
use rstest::rstest;

#[test]
fn test_render_pass_highlights_attached_blocks() {
    let notifier = RenderNotifier::highlighting();
    let doc = notifier.render(|doc| {
        doc.push_text("Request:\n")
            .push_code(Some("bash"), "curl -s $URL")
            .push_text("Response:\n")
            .push_code(Some("json"), r#"{"status": "ok"}"#);
    });

    assert_eq!(doc.code_blocks().filter(|b| b.is_highlighted()).count(), 2);
    let html = doc.render(&HtmlPainter);
    assert!(html.contains(r#"<span class="token variable">$URL</span>"#));
    assert!(html.contains(r#"<span class="token property">&quot;status&quot;</span>"#));
    assert!(html.starts_with("Request:\n<pre class=\"language-bash\">"));
}

#[test]
fn test_blocks_added_after_notify_are_not_highlighted() {
    let notifier = RenderNotifier::highlighting();
    let mut doc = notifier.render(|doc| {
        doc.push_code(Some("css"), "a { color: red; }");
    });
    doc.push_code(Some("css"), "b { color: blue; }");

    let flags: Vec<bool> = doc.code_blocks().map(|b| b.is_highlighted()).collect();
    assert_eq!(flags, vec![true, false]);

    // A second pass picks up the late block
    notifier.notify(&mut doc);
    assert!(doc.code_blocks().all(|b| b.is_highlighted()));
}

#[test]
fn test_repeated_highlighting_is_stable() {
    let mut doc = Document::new();
    doc.push_code(Some("ts"), "interface A { b: string }");
    highlight_all(&mut doc);
    let first = doc.to_html();
    highlight_all(&mut doc);
    highlight_all(&mut doc);
    assert_eq!(doc.to_html(), first);
}

#[test]
fn test_unknown_language_left_verbatim() {
    let notifier = RenderNotifier::highlighting();
    let doc = notifier.render(|doc| {
        doc.push_code(Some("cobol"), "DISPLAY 'HI'.");
    });
    assert_eq!(
        doc.to_html(),
        r#"<pre class="language-cobol"><code class="language-cobol">DISPLAY 'HI'.</code></pre>"#
    );
    match &doc.nodes()[0] {
        Node::Code(block) => assert!(!block.is_highlighted()),
        Node::Text(_) => panic!("expected a code block"),
    }
}

#[rstest]
#[case(Language::Json, "// note", TokenKind::Comment)]
#[case(Language::JavaScript, "/* a */", TokenKind::Comment)]
#[case(Language::Markup, "<!-- a -->", TokenKind::Comment)]
#[case(Language::Css, "/* a */", TokenKind::Comment)]
#[case(Language::Sql, "-- a", TokenKind::Comment)]
#[case(Language::Bash, "#!/bin/sh", TokenKind::Comment)]
#[case(Language::Yaml, "# a", TokenKind::Comment)]
#[case(Language::Markup, "<!DOCTYPE html>", TokenKind::Keyword)]
#[case(Language::JavaScript, "`a ${b}`", TokenKind::String)]
#[case(Language::Sql, "'it''s'", TokenKind::String)]
fn test_single_token(#[case] language: Language, #[case] source: &str, #[case] kind: TokenKind) {
    let tokens = tokenize(language, source);
    assert_eq!(tokens.len(), 1, "{language}: {tokens:?}");
    assert_eq!(tokens[0].kind, kind);
    assert_eq!(tokens[0].text, source);
}

#[test]
fn test_long_single_line_yaml_lexes_in_linear_time() {
    let entries: Vec<String> = (0..20_000).map(|i| format!("k{i}: v")).collect();
    let source = format!("{{{}}}", entries.join(", "));
    assert!(source.len() > 150_000);

    let start = std::time::Instant::now();
    let spans = spans(Language::Yaml, &source);
    let elapsed = start.elapsed();

    assert!(elapsed.as_secs() < 10, "lexing took {elapsed:?}");
    assert_eq!(spans.first().map(|s| s.range.start), Some(0));
    assert_eq!(spans.last().map(|s| s.range.end), Some(source.len()));
    assert!(spans.windows(2).all(|w| w[0].range.end == w[1].range.start));
}

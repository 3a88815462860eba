//! Tokenizer driving the language grammars

use std::sync::LazyLock;

use regex::Regex;

use crate::grammar::grammar;
use crate::language::Language;
use crate::token::{Span, Token, TokenKind};

static WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\A\w+").unwrap());

/// Split `source` into classified spans covering every byte.
///
/// Adjacent unclassified text is merged into a single `Plain` span.
pub fn spans(language: Language, source: &str) -> Vec<Span> {
    let grammar = grammar(language);
    let mut spans = Vec::new();
    let mut state = 0;
    let mut pos = 0;
    let mut plain_start = 0;

    while pos < source.len() {
        let matched = grammar.states[state]
            .iter()
            .find_map(|rule| rule.match_at(source, pos).map(|len| (rule, len)));

        if let Some((rule, len)) = matched {
            if plain_start < pos {
                spans.push(Span {
                    kind: TokenKind::Plain,
                    range: plain_start..pos,
                });
            }
            spans.push(Span {
                kind: rule.kind,
                range: pos..pos + len,
            });
            pos += len;
            plain_start = pos;
            if let Some(next) = rule.next {
                state = next;
            }
            continue;
        }

        // Skip a whole identifier so no rule can start inside it
        let rest = &source[pos..];
        pos += match WORD.find(rest) {
            Some(m) => m.end(),
            None => rest.chars().next().map_or(1, char::len_utf8),
        };
    }

    if plain_start < source.len() {
        spans.push(Span {
            kind: TokenKind::Plain,
            range: plain_start..source.len(),
        });
    }

    spans
}

/// Tokenize `source` into borrowed tokens.
pub fn tokenize(language: Language, source: &str) -> Vec<Token<'_>> {
    spans(language, source)
        .iter()
        .map(|span| span.token(source))
        .collect()
}

//! Terminal output for highlighted documents

use std::io::IsTerminal;

use colored::Colorize;
use devtools_highlight::{Painter, PlainPainter, TokenKind};

/// ANSI colors for highlighted tokens.
#[derive(Debug, Default, Clone, Copy)]
pub struct AnsiPainter;

impl Painter for AnsiPainter {
    fn text(&self, text: &str) -> String {
        text.to_string()
    }

    fn token(&self, kind: TokenKind, text: &str) -> String {
        let styled = match kind {
            TokenKind::Comment => text.dimmed(),
            TokenKind::String | TokenKind::AttrValue => text.green(),
            TokenKind::Number | TokenKind::Boolean => text.yellow(),
            TokenKind::Keyword => text.magenta(),
            TokenKind::Builtin | TokenKind::Function => text.blue(),
            TokenKind::Property | TokenKind::AttrName => text.cyan(),
            TokenKind::Tag | TokenKind::Selector => text.red(),
            TokenKind::Variable | TokenKind::Entity => text.bright_magenta(),
            TokenKind::Punctuation | TokenKind::Operator | TokenKind::Plain => {
                return text.to_string();
            }
        };
        styled.to_string()
    }
}

/// Colors when stdout is a terminal, plain text otherwise.
pub fn stdout_painter() -> Box<dyn Painter> {
    if std::io::stdout().is_terminal() {
        Box::new(AnsiPainter)
    } else {
        Box::new(PlainPainter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_kinds_are_unstyled() {
        let painter = AnsiPainter;
        assert_eq!(painter.token(TokenKind::Punctuation, "{"), "{");
        assert_eq!(painter.token(TokenKind::Plain, "x y"), "x y");
        assert_eq!(painter.text("text"), "text");
    }

    #[test]
    fn test_styled_kinds_keep_text() {
        colored::control::set_override(true);
        let out = AnsiPainter.token(TokenKind::String, "\"a\"");
        colored::control::unset_override();
        assert!(out.contains("\"a\""));
        assert!(out.starts_with('\u{1b}'));
    }
}

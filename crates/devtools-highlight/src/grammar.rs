//! Per-language lexing rules
//!
//! A grammar is a small state machine: each state holds an ordered rule
//! list, and a rule may switch the state after it matches (markup tags,
//! CSS declaration blocks). The first rule that matches at the current
//! position wins.

use std::sync::LazyLock;

use regex::Regex;

use crate::language::Language;
use crate::token::TokenKind;

/// Where a rule is allowed to start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Boundary {
    Any,
    /// At the start of input or after whitespace
    AfterSpace,
    /// Only whitespace or list dashes between the line start and here
    LineStart,
}

impl Boundary {
    fn allows(&self, before: &str) -> bool {
        match self {
            Self::Any => true,
            Self::AfterSpace => before.chars().next_back().is_none_or(char::is_whitespace),
            // Scans back only as far as the first significant character
            Self::LineStart => {
                for c in before.chars().rev() {
                    match c {
                        '\n' => return true,
                        '-' => {}
                        c if c.is_whitespace() => {}
                        _ => return false,
                    }
                }
                true
            }
        }
    }
}

pub(crate) struct Rule {
    pub kind: TokenKind,
    pattern: Regex,
    lookahead: Option<Regex>,
    boundary: Boundary,
    pub next: Option<usize>,
}

fn anchored(pattern: &str) -> Regex {
    Regex::new(&format!(r"\A(?:{pattern})"))
        .unwrap_or_else(|e| panic!("invalid built-in pattern {pattern:?}: {e}"))
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn rule(kind: TokenKind, pattern: &str) -> Rule {
    Rule {
        kind,
        pattern: anchored(pattern),
        lookahead: None,
        boundary: Boundary::Any,
        next: None,
    }
}

impl Rule {
    fn followed_by(mut self, pattern: &str) -> Self {
        self.lookahead = Some(anchored(pattern));
        self
    }

    fn boundary(mut self, boundary: Boundary) -> Self {
        self.boundary = boundary;
        self
    }

    fn goto(mut self, state: usize) -> Self {
        self.next = Some(state);
        self
    }

    /// Length of the match at `pos`, if this rule applies there.
    pub fn match_at(&self, source: &str, pos: usize) -> Option<usize> {
        let (before, rest) = source.split_at(pos);
        if !self.boundary.allows(before) {
            return None;
        }

        let m = self.pattern.find(rest)?;
        if m.is_empty() {
            return None;
        }

        // Words only match on a word boundary
        let starts_word = m.as_str().chars().next().is_some_and(is_word_char);
        if starts_word && before.chars().next_back().is_some_and(is_word_char) {
            return None;
        }

        if let Some(lookahead) = &self.lookahead
            && !lookahead.is_match(&rest[m.end()..])
        {
            return None;
        }

        Some(m.end())
    }
}

pub(crate) struct Grammar {
    pub states: Vec<Vec<Rule>>,
}

const DQ_STRING: &str = r#""(?:[^"\\\n]|\\.)*""#;
const SQ_STRING: &str = r"'(?:[^'\\\n]|\\.)*'";
const C_COMMENT: &str = r"//[^\n]*|/\*[\s\S]*?\*/";
/// Scalar must end the value: end of line, comment, or flow punctuation
const YAML_SCALAR_END: &str = r"(?m:[ \t]*(?:$|[#,\]}]))";

const JS_KEYWORDS: &str = "as|async|await|break|case|catch|class|const|continue|debugger|default|\
delete|do|else|export|extends|finally|for|from|function|get|if|import|in|instanceof|let|new|null|\
of|return|set|static|super|switch|this|throw|try|typeof|undefined|var|void|while|with|yield";

const TS_KEYWORDS: &str = "abstract|declare|enum|implements|infer|interface|is|keyof|namespace|\
private|protected|public|readonly|type";

const TS_BUILTINS: &str = "any|bigint|boolean|never|number|object|string|symbol|unknown";

const SQL_KEYWORDS: &str = "add|all|alter|and|as|asc|begin|between|by|case|check|commit|constraint|\
create|cross|default|delete|desc|distinct|drop|else|end|exists|foreign|from|full|group|having|if|\
in|index|inner|insert|into|is|join|key|left|like|limit|not|offset|on|or|order|outer|primary|\
references|returning|right|rollback|select|set|table|then|transaction|union|unique|update|values|\
view|when|where|with";

const BASH_KEYWORDS: &str = "case|declare|do|done|elif|else|esac|export|fi|for|function|if|in|\
local|readonly|return|select|then|until|unset|while";

const BASH_BUILTINS: &str = "alias|cd|echo|eval|exec|exit|kill|printf|pwd|read|set|shift|source|\
test|trap|type|wait";

fn json() -> Grammar {
    use TokenKind::*;
    Grammar {
        states: vec![vec![
            rule(Comment, C_COMMENT),
            rule(Property, DQ_STRING).followed_by(r"\s*:"),
            rule(String, DQ_STRING),
            rule(Number, r"-?\d+(?:\.\d+)?(?:[eE][+-]?\d+)?"),
            rule(Boolean, r"(?:true|false)\b"),
            rule(Keyword, r"null\b"),
            rule(Operator, ":"),
            rule(Punctuation, r"[{}\[\],]"),
        ]],
    }
}

fn script(typed: bool) -> Grammar {
    use TokenKind::*;
    let keywords = if typed {
        format!(r"(?:{JS_KEYWORDS}|{TS_KEYWORDS})\b")
    } else {
        format!(r"(?:{JS_KEYWORDS})\b")
    };

    let mut rules = vec![
        rule(Comment, C_COMMENT),
        rule(String, r"`(?:[^`\\]|\\[\s\S])*`"),
        rule(String, DQ_STRING),
        rule(String, SQ_STRING),
        rule(Keyword, &keywords),
    ];
    if typed {
        rules.push(rule(Builtin, &format!(r"(?:{TS_BUILTINS})\b")));
    }
    rules.extend([
        rule(Boolean, r"(?:true|false)\b"),
        rule(Function, r"[A-Za-z_$][\w$]*").followed_by(r"\s*\("),
        rule(Number, r"0[xX][0-9a-fA-F]+|\d+(?:\.\d+)?(?:[eE][+-]?\d+)?"),
        rule(Operator, r"=>|\.\.\.|[-+*/%=!<>&|^~?]+"),
        rule(Punctuation, r"[{}\[\]();,.:]"),
    ]);

    Grammar {
        states: vec![rules],
    }
}

fn markup() -> Grammar {
    use TokenKind::*;
    const TEXT: usize = 0;
    const TAG: usize = 1;
    Grammar {
        states: vec![
            vec![
                rule(Comment, r"<!--[\s\S]*?-->"),
                rule(Keyword, r"<!(?i:doctype)[^>]*>"),
                rule(String, r"<!\[CDATA\[[\s\S]*?\]\]>"),
                rule(Tag, r"</?[A-Za-z][\w:.-]*").goto(TAG),
                rule(Entity, r"&(?:#\d+|#x[0-9a-fA-F]+|[A-Za-z][A-Za-z0-9]*);"),
            ],
            vec![
                rule(Punctuation, r"/?>").goto(TEXT),
                rule(Punctuation, "="),
                rule(AttrValue, r#""[^"]*"|'[^']*'"#),
                rule(AttrName, r#"[^\s"'/>=]+"#),
            ],
        ],
    }
}

fn css() -> Grammar {
    use TokenKind::*;
    const RULESET: usize = 0;
    const BLOCK: usize = 1;
    let comment = r"/\*[\s\S]*?\*/";
    Grammar {
        states: vec![
            vec![
                rule(Comment, comment),
                rule(Keyword, r"@[\w-]+"),
                rule(String, DQ_STRING),
                rule(String, SQ_STRING),
                rule(Punctuation, r"\{").goto(BLOCK),
                rule(Selector, r"[^{}\s;@/](?:[^{};/]*[^{};/\s])?").followed_by(r"\s*\{"),
                rule(Punctuation, r"[;,()]"),
            ],
            vec![
                rule(Comment, comment),
                rule(Punctuation, r"\}").goto(RULESET),
                rule(Property, r"--[\w-]+|-?[A-Za-z][\w-]*").followed_by(r"\s*:"),
                rule(Keyword, r"!(?i:important)"),
                rule(String, DQ_STRING),
                rule(String, SQ_STRING),
                rule(Function, r"-?[A-Za-z][\w-]*").followed_by(r"\("),
                rule(Number, r"#[0-9a-fA-F]{3,8}\b"),
                rule(Number, r"-?(?:\d+\.?\d*|\.\d+)(?:%|[A-Za-z]+)?"),
                rule(Punctuation, r"[:;,()]"),
            ],
        ],
    }
}

fn sql() -> Grammar {
    use TokenKind::*;
    Grammar {
        states: vec![vec![
            rule(Comment, r"--[^\n]*|/\*[\s\S]*?\*/"),
            rule(String, r"'(?:[^']|'')*'"),
            rule(Variable, r"@[\w.$]+|`[^`]*`"),
            rule(Keyword, &format!(r"(?i:{SQL_KEYWORDS})\b")),
            rule(Boolean, r"(?i:true|false|null)\b"),
            rule(Function, r"[A-Za-z_]\w*").followed_by(r"\s*\("),
            rule(Number, r"\d+(?:\.\d+)?"),
            rule(Operator, r"<>|!=|<=|>=|\|\||[-+*/%=<>]"),
            rule(Punctuation, r"[;(),.]"),
        ]],
    }
}

fn bash() -> Grammar {
    use TokenKind::*;
    Grammar {
        states: vec![vec![
            rule(Comment, r"#[^\n]*").boundary(Boundary::AfterSpace),
            rule(String, r#""(?:[^"\\]|\\[\s\S])*""#),
            rule(String, r"'[^']*'"),
            rule(Variable, r"\$(?:\{[^}\n]*\}|[A-Za-z_]\w*|[@#?$!*0-9-])"),
            rule(Keyword, &format!(r"(?:{BASH_KEYWORDS})\b")),
            rule(Builtin, &format!(r"(?:{BASH_BUILTINS})\b")),
            rule(Boolean, r"(?:true|false)\b"),
            rule(Function, r"[A-Za-z_][\w-]*").followed_by(r"\s*\(\s*\)"),
            rule(Number, r"\d+(?:\.\d+)?"),
            rule(Operator, r"&&|\|\||;;|[|&;<>!=]+"),
            rule(Punctuation, r"[\[\]{}()]"),
        ]],
    }
}

fn yaml() -> Grammar {
    use TokenKind::*;
    Grammar {
        states: vec![vec![
            rule(Comment, r"#[^\n]*").boundary(Boundary::AfterSpace),
            rule(Punctuation, r"---|\.\.\.")
                .boundary(Boundary::LineStart)
                .followed_by(r"\s|\z"),
            rule(Property, &format!(r#"{DQ_STRING}|'[^'\n]*'|[A-Za-z0-9_$./][\w$./ -]*"#))
                .boundary(Boundary::LineStart)
                .followed_by(r"[ \t]*:(?:\s|\z)"),
            rule(String, DQ_STRING),
            rule(String, r"'(?:[^']|'')*'"),
            rule(Variable, r"[&*][\w-]+"),
            rule(Keyword, r"!!?[\w/.-]+"),
            rule(Boolean, r"(?i:true|false|yes|no|on|off)\b").followed_by(YAML_SCALAR_END),
            rule(Keyword, r"(?:null|Null|NULL)\b|~").followed_by(YAML_SCALAR_END),
            rule(Number, r"[+-]?\d+(?:\.\d+)?(?:[eE][+-]?\d+)?").followed_by(YAML_SCALAR_END),
            rule(Punctuation, r"[:\-,\[\]{}|>?]"),
        ]],
    }
}

static JSON: LazyLock<Grammar> = LazyLock::new(json);
static JAVASCRIPT: LazyLock<Grammar> = LazyLock::new(|| script(false));
static TYPESCRIPT: LazyLock<Grammar> = LazyLock::new(|| script(true));
static MARKUP: LazyLock<Grammar> = LazyLock::new(markup);
static CSS: LazyLock<Grammar> = LazyLock::new(css);
static SQL: LazyLock<Grammar> = LazyLock::new(sql);
static BASH: LazyLock<Grammar> = LazyLock::new(bash);
static YAML: LazyLock<Grammar> = LazyLock::new(yaml);

/// Compiled grammar for a language, built on first use.
pub(crate) fn grammar(language: Language) -> &'static Grammar {
    match language {
        Language::Json => &JSON,
        Language::JavaScript => &JAVASCRIPT,
        Language::TypeScript => &TYPESCRIPT,
        Language::Markup => &MARKUP,
        Language::Css => &CSS,
        Language::Sql => &SQL,
        Language::Bash => &BASH,
        Language::Yaml => &YAML,
    }
}

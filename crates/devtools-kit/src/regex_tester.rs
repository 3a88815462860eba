//! Regex tester
//!
//! Flags follow the usual `/pattern/flags` notation: `i` ignores case,
//! `m` makes `^`/`$` match at line breaks, `s` lets `.` match newlines,
//! `x` ignores whitespace in the pattern, and `g` reports every match
//! instead of only the first.

use std::fmt;
use std::ops::Range;
use std::str::FromStr;

use regex::{Regex, RegexBuilder};
use serde::Serialize;

use crate::error::{KitError, Result};

const SUPPORTED_FLAGS: &str = "g, i, m, s, x";

/// Parsed regex flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RegexFlags {
    pub global: bool,
    pub case_insensitive: bool,
    pub multi_line: bool,
    pub dot_matches_new_line: bool,
    pub ignore_whitespace: bool,
}

impl FromStr for RegexFlags {
    type Err = KitError;

    fn from_str(s: &str) -> Result<Self> {
        let mut flags = Self::default();
        for flag in s.chars() {
            match flag {
                'g' => flags.global = true,
                'i' => flags.case_insensitive = true,
                'm' => flags.multi_line = true,
                's' => flags.dot_matches_new_line = true,
                'x' => flags.ignore_whitespace = true,
                _ => {
                    return Err(KitError::UnknownFlag {
                        flag,
                        supported: SUPPORTED_FLAGS,
                    });
                }
            }
        }
        Ok(flags)
    }
}

impl fmt::Display for RegexFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (set, c) in [
            (self.global, 'g'),
            (self.case_insensitive, 'i'),
            (self.multi_line, 'm'),
            (self.dot_matches_new_line, 's'),
            (self.ignore_whitespace, 'x'),
        ] {
            if set {
                write!(f, "{c}")?;
            }
        }
        Ok(())
    }
}

/// A capture group within a match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Group {
    pub index: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// `None` when the group did not participate in the match
    pub text: Option<String>,
    #[serde(skip)]
    pub range: Option<Range<usize>>,
}

/// One match of the pattern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegexMatch {
    pub text: String,
    pub start: usize,
    pub end: usize,
    pub groups: Vec<Group>,
}

impl RegexMatch {
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Text of a named group, if it matched.
    pub fn named(&self, name: &str) -> Option<&str> {
        self.groups
            .iter()
            .find(|g| g.name.as_deref() == Some(name))
            .and_then(|g| g.text.as_deref())
    }
}

/// A compiled pattern with its flags.
#[derive(Debug, Clone)]
pub struct RegexTester {
    regex: Regex,
    flags: RegexFlags,
}

impl RegexTester {
    /// Compile `pattern` with flags such as `"gi"`.
    pub fn new(pattern: &str, flags: &str) -> Result<Self> {
        let flags: RegexFlags = flags.parse()?;
        let regex = RegexBuilder::new(pattern)
            .case_insensitive(flags.case_insensitive)
            .multi_line(flags.multi_line)
            .dot_matches_new_line(flags.dot_matches_new_line)
            .ignore_whitespace(flags.ignore_whitespace)
            .build()?;
        tracing::debug!(pattern, %flags, groups = regex.captures_len() - 1, "Compiled pattern");
        Ok(Self { regex, flags })
    }

    pub fn flags(&self) -> RegexFlags {
        self.flags
    }

    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }

    /// Matches in `text`: all of them with `g`, otherwise at most one.
    pub fn find(&self, text: &str) -> Vec<RegexMatch> {
        let limit = if self.flags.global { usize::MAX } else { 1 };
        let names: Vec<Option<&str>> = self.regex.capture_names().collect();

        self.regex
            .captures_iter(text)
            .take(limit)
            .filter_map(|caps| {
                let whole = caps.get(0)?;
                let groups = names
                    .iter()
                    .enumerate()
                    .skip(1)
                    .map(|(index, name)| {
                        let m = caps.get(index);
                        Group {
                            index,
                            name: name.map(str::to_string),
                            text: m.map(|m| m.as_str().to_string()),
                            range: m.map(|m| m.range()),
                        }
                    })
                    .collect();
                Some(RegexMatch {
                    text: whole.as_str().to_string(),
                    start: whole.start(),
                    end: whole.end(),
                    groups,
                })
            })
            .collect()
    }

    /// Replace matches using `$1` / `${name}` references.
    ///
    /// Replaces every match with `g`, otherwise only the first.
    pub fn replace(&self, text: &str, replacement: &str) -> String {
        if self.flags.global {
            self.regex.replace_all(text, replacement).into_owned()
        } else {
            self.regex.replace(text, replacement).into_owned()
        }
    }
}

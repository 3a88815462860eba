//! The utilities behind the devtools catalog entries.
//!
//! - [`regex_tester`]: compile a pattern with flags, list matches and captures
//! - [`base64_codec`]: standard and URL-safe Base64
//! - [`json_formatter`]: pretty-print, minify and validate JSON
//!
//! ```
//! use devtools_kit::{Alphabet, RegexTester, base64_codec, json_formatter};
//!
//! let tester = RegexTester::new(r"\d+", "g").unwrap();
//! assert_eq!(tester.find("a1b22").len(), 2);
//!
//! assert_eq!(base64_codec::encode("hi", Alphabet::Standard), "aGk=");
//! assert_eq!(json_formatter::minify("{ \"a\" : 1 }").unwrap(), r#"{"a":1}"#);
//! ```

pub mod base64_codec;
pub mod error;
pub mod json_formatter;
pub mod regex_tester;
pub mod utility;

pub use base64_codec::Alphabet;
pub use error::{KitError, Result};
pub use regex_tester::{Group, RegexFlags, RegexMatch, RegexTester};
pub use utility::{Example, Utility};

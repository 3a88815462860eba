//! Base64 encoding and decoding

use std::fmt;

use base64::Engine;
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};

use crate::error::Result;

/// Padded on encode; padding is optional on decode.
const CONFIG: GeneralPurposeConfig =
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent);

const STANDARD: GeneralPurpose = GeneralPurpose::new(&alphabet::STANDARD, CONFIG);
const URL_SAFE: GeneralPurpose = GeneralPurpose::new(&alphabet::URL_SAFE, CONFIG);

/// Base64 alphabet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Alphabet {
    /// `+` and `/`
    #[default]
    Standard,
    /// `-` and `_`
    UrlSafe,
}

impl Alphabet {
    fn engine(self) -> &'static GeneralPurpose {
        match self {
            Self::Standard => &STANDARD,
            Self::UrlSafe => &URL_SAFE,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::UrlSafe => "url-safe",
        }
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Encode bytes.
pub fn encode(input: impl AsRef<[u8]>, alphabet: Alphabet) -> String {
    alphabet.engine().encode(input)
}

/// Decode to bytes. Surrounding whitespace is ignored.
pub fn decode(input: &str, alphabet: Alphabet) -> Result<Vec<u8>> {
    let trimmed = input.trim();
    let bytes = alphabet.engine().decode(trimmed)?;
    tracing::debug!(%alphabet, encoded = trimmed.len(), decoded = bytes.len(), "Decoded Base64");
    Ok(bytes)
}

/// Decode to UTF-8 text.
pub fn decode_to_string(input: &str, alphabet: Alphabet) -> Result<String> {
    Ok(String::from_utf8(decode(input, alphabet)?)?)
}

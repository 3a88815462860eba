//! Base64 command

use devtools_kit::{Alphabet, base64_codec};

use crate::cli::Base64Action;
use crate::commands::{STDIN, read_source};
use crate::error::Result;

fn alphabet(url_safe: bool) -> Alphabet {
    if url_safe {
        Alphabet::UrlSafe
    } else {
        Alphabet::Standard
    }
}

fn read_input(input: &str) -> Result<String> {
    if input == STDIN {
        read_source(STDIN)
    } else {
        Ok(input.to_string())
    }
}

/// Run a base64 action
pub fn run_base64(action: &Base64Action) -> Result<()> {
    match action {
        Base64Action::Encode { input, url_safe } => {
            let text = read_input(input)?;
            println!("{}", base64_codec::encode(text, alphabet(*url_safe)));
        }
        Base64Action::Decode { input, url_safe } => {
            let text = read_input(input)?;
            println!("{}", base64_codec::decode_to_string(&text, alphabet(*url_safe))?);
        }
    }
    Ok(())
}

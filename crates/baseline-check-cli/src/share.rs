//! Share links: code carried in a URL fragment as `code=<base64url>`.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;

use crate::error::{CliError, CliResult};

const CODE_PARAM: &str = "code";

/// Encode code into a fragment (without the leading `#`).
pub fn encode_fragment(code: &str) -> String {
    format!("{CODE_PARAM}={}", URL_SAFE_NO_PAD.encode(code.as_bytes()))
}

/// Decode the code carried by a fragment or full URL.
///
/// Accepts `code=...`, `#code=...`, or a URL whose fragment holds the
/// parameter among others (`#a=1&code=...`).
pub fn decode_fragment(input: &str) -> CliResult<String> {
    let input = input.trim();
    let fragment = match input.split_once('#') {
        Some((_, fragment)) => fragment,
        None => input,
    };

    let encoded = fragment
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(name, _)| *name == CODE_PARAM)
        .map(|(_, value)| value)
        .ok_or_else(|| CliError::InvalidShareLink(format!("no `{CODE_PARAM}` parameter")))?;

    let bytes = URL_SAFE_NO_PAD
        .decode(encoded.trim_end_matches('='))
        .map_err(|e| CliError::InvalidShareLink(e.to_string()))?;

    String::from_utf8(bytes).map_err(|e| CliError::InvalidShareLink(e.to_string()))
}

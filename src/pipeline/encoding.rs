use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

use crate::pipeline::config::Encoding;
use crate::pipeline::error::{EncodingError, Result};

pub(crate) type RenderFn = fn(&[u8]) -> String;
pub(crate) type ParseFn = fn(&str) -> Result<Vec<u8>>;

impl Encoding {
    /// Render/parse stage functions for this encoding.
    pub(crate) fn codecs(self) -> (RenderFn, ParseFn) {
        match self {
            Encoding::Base64 => (base64_render, base64_parse),
            Encoding::Hex => (hex_render, hex_parse),
        }
    }
}

/// Renders raw bytes as printable text.
pub fn render(bytes: &[u8], encoding: Encoding) -> String {
    (encoding.codecs().0)(bytes)
}

/// Parses text produced by [render]. Malformed input fails with
/// [Encoding](crate::Error::Encoding).
pub fn parse(text: &str, encoding: Encoding) -> Result<Vec<u8>> {
    (encoding.codecs().1)(text)
}

fn base64_render(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

fn base64_parse(text: &str) -> Result<Vec<u8>> {
    Ok(STANDARD.decode(text).map_err(EncodingError::from)?)
}

fn hex_render(bytes: &[u8]) -> String {
    hex::encode(bytes)
}

// accepts either case
fn hex_parse(text: &str) -> Result<Vec<u8>> {
    Ok(hex::decode(text).map_err(EncodingError::from)?)
}

//! Closed enumerations for the three pipeline stages and the [`CipherConfig`] that
//! bundles them with key material.
//!
//! Variant names round-trip through [`FromStr`] and [`Display`] using lowercase
//! names (`"cbc"`, `"pkcs7"`, `"base64"`, ...). `"pkcs5"` parses to [`Padding::Pkcs7`];
//! the two schemes are identical for 16-byte blocks.

use std::fmt;
use std::str::FromStr;

use crate::pipeline::error::Error;

/// Block-cipher chaining mode.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Electronic codebook. Every block is encrypted on its own and the IV is ignored.
    /// **Identical plaintext blocks produce identical ciphertext blocks.**
    Ecb,
    /// Cipher block chaining.
    #[default]
    Cbc,
    /// Full-block (128-bit segment) cipher feedback.
    Cfb,
    /// Output feedback.
    Ofb,
}

/// Padding scheme used to extend plaintext to a whole number of blocks.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Padding {
    /// PKCS#7 (and PKCS#5): `n` bytes of value `n`.
    #[default]
    Pkcs7,
    /// `n` zero bytes. Unpadding strips **every** trailing zero byte, so plaintext that
    /// itself ends in `0x00` does not survive a round trip intact.
    Zero,
    /// `n - 1` random bytes followed by the count byte `n`.
    Iso10126,
    /// ANSI X9.23: `n - 1` zero bytes followed by the count byte `n`.
    AnsiX923,
}

/// Text rendering of raw ciphertext.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Encoding {
    /// RFC 4648 standard alphabet with `=` padding.
    #[default]
    Base64,
    /// Lowercase hexadecimal, two characters per byte.
    Hex,
}

impl Mode {
    pub const ALL: [Mode; 4] = [Mode::Ecb, Mode::Cbc, Mode::Cfb, Mode::Ofb];

    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Ecb => "ecb",
            Mode::Cbc => "cbc",
            Mode::Cfb => "cfb",
            Mode::Ofb => "ofb",
        }
    }

    /// Whether the mode consumes an IV. Only ECB does not.
    pub fn requires_iv(self) -> bool {
        !matches!(self, Mode::Ecb)
    }
}

impl Padding {
    pub const ALL: [Padding; 4] = [
        Padding::Pkcs7,
        Padding::Zero,
        Padding::Iso10126,
        Padding::AnsiX923,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Padding::Pkcs7 => "pkcs7",
            Padding::Zero => "zero",
            Padding::Iso10126 => "iso10126",
            Padding::AnsiX923 => "ansix923",
        }
    }

    /// Whether repeated padding of the same input yields the same bytes.
    pub fn is_deterministic(self) -> bool {
        !matches!(self, Padding::Iso10126)
    }
}

impl Encoding {
    pub const ALL: [Encoding; 2] = [Encoding::Base64, Encoding::Hex];

    pub fn as_str(self) -> &'static str {
        match self {
            Encoding::Base64 => "base64",
            Encoding::Hex => "hex",
        }
    }
}

impl FromStr for Mode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ecb" => Ok(Mode::Ecb),
            "cbc" => Ok(Mode::Cbc),
            "cfb" => Ok(Mode::Cfb),
            "ofb" => Ok(Mode::Ofb),
            _ => Err(Error::UnsupportedMode(s.to_owned())),
        }
    }
}

impl FromStr for Padding {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pkcs5" | "pkcs7" => Ok(Padding::Pkcs7),
            "zero" => Ok(Padding::Zero),
            "iso10126" => Ok(Padding::Iso10126),
            "ansix923" => Ok(Padding::AnsiX923),
            _ => Err(Error::UnsupportedPadding(s.to_owned())),
        }
    }
}

impl FromStr for Encoding {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "base64" => Ok(Encoding::Base64),
            "hex" => Ok(Encoding::Hex),
            _ => Err(Error::UnsupportedEncoding(s.to_owned())),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Padding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything one encrypt or decrypt call needs: the three stage selections plus
/// the raw key and IV bytes.
///
/// Key and IV lengths are not checked here; they are validated at the start of
/// every operation, before any byte is processed. The pipeline only ever borrows a
/// config.
///
/// ## Examples
/// ```
/// use aespipe::{CipherConfig, Encoding, Mode, Padding};
///
/// let config = CipherConfig::new(b"pwFHCqoQZGmho4w6", b"EkRm7iFT261dpevs")
///     .with_mode(Mode::Ofb)
///     .with_padding(Padding::AnsiX923)
///     .with_encoding(Encoding::Hex);
///
/// assert_eq!(config.mode, Mode::Ofb);
/// assert_eq!(config.key.len(), 16);
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct CipherConfig {
    pub mode: Mode,
    pub padding: Padding,
    pub encoding: Encoding,
    pub key: Vec<u8>,
    pub iv: Vec<u8>,
}

impl CipherConfig {
    /// Builds a config with the default stages (CBC, PKCS#7, Base64).
    pub fn new(key: &[u8], iv: &[u8]) -> Self {
        Self {
            mode: Mode::default(),
            padding: Padding::default(),
            encoding: Encoding::default(),
            key: key.to_vec(),
            iv: iv.to_vec(),
        }
    }

    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_padding(mut self, padding: Padding) -> Self {
        self.padding = padding;
        self
    }

    pub fn with_encoding(mut self, encoding: Encoding) -> Self {
        self.encoding = encoding;
        self
    }
}

// key and IV bytes stay out of logs and panic messages
impl fmt::Debug for CipherConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CipherConfig")
            .field("mode", &self.mode)
            .field("padding", &self.padding)
            .field("encoding", &self.encoding)
            .field("key_len", &self.key.len())
            .field("iv_len", &self.iv.len())
            .finish()
    }
}

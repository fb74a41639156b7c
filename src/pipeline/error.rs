use std::string::FromUtf8Error;

use rand::rand_core;
use thiserror::Error;

use crate::pipeline::config::Mode;

/// Pipeline Result type.
pub type Result<T> = std::result::Result<T, Error>;

/// Pipeline stage an [Error] originated from.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Stage {
    /// Key, IV, or variant name validation before any byte is processed.
    Config,
    Padding,
    Mode,
    Encoding,
    /// Conversion of decrypted bytes into the caller's requested output type.
    Output,
}

/// Pipeline Error type.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// Attempted to build an AES key from a slice that is not 128, 192, or 256 bits.
    #[error("invalid key length: {len} bytes (expected 16, 24, or 32)")]
    InvalidKeyLength { len: usize },

    /// A chaining mode was given an IV that is not exactly one block long.
    #[error("invalid IV length for {mode}: {len} bytes (expected 16)")]
    InvalidIvLength { len: usize, mode: Mode },

    #[error("unsupported mode: {0:?}")]
    UnsupportedMode(String),

    #[error("unsupported padding: {0:?}")]
    UnsupportedPadding(String),

    #[error("unsupported encoding: {0:?}")]
    UnsupportedEncoding(String),

    /// Input handed to the mode stage was not a whole number of blocks.
    #[error("misaligned input: {len} bytes ({context})")]
    MisalignedInput { len: usize, context: &'static str },

    /// Ciphertext text could not be decoded.
    #[error(transparent)]
    Encoding(#[from] EncodingError),

    /// Padding trailer is missing or corrupt, usually a wrong key/IV or truncated ciphertext.
    #[error("invalid padding: {len} bytes ({context})")]
    Padding { len: usize, context: &'static str },

    /// OS RNG failed while generating ISO 10126 filler.
    #[error("OS RNG failed in ISO 10126 padding")]
    Rng(#[from] rand_core::OsError),

    #[error("decrypted plaintext is not valid UTF-8")]
    Utf8(#[from] FromUtf8Error),
}

/// Malformed ciphertext text, tagged with the codec that rejected it.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum EncodingError {
    #[error("malformed base64 input: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("malformed hex input: {0}")]
    Hex(#[from] hex::FromHexError),
}

impl Error {
    /// Returns the stage that produced this error.
    pub fn stage(&self) -> Stage {
        match self {
            Error::InvalidKeyLength { .. }
            | Error::InvalidIvLength { .. }
            | Error::UnsupportedMode(_)
            | Error::UnsupportedPadding(_)
            | Error::UnsupportedEncoding(_) => Stage::Config,
            Error::Padding { .. } | Error::Rng(_) => Stage::Padding,
            Error::MisalignedInput { .. } => Stage::Mode,
            Error::Encoding(_) => Stage::Encoding,
            Error::Utf8(_) => Stage::Output,
        }
    }
}

//! AES convenience layer: pick a chaining mode, a padding scheme, and a text encoding,
//! then encrypt byte payloads to printable ciphertext and back.
//!
//! ```
//! # fn main() -> aespipe::Result<()> {
//! use aespipe::{CipherConfig, Encoding, Mode, Padding};
//!
//! let config = CipherConfig::new(b"pwFHCqoQZGmho4w6", b"EkRm7iFT261dpevs")
//!     .with_mode(Mode::Cbc)
//!     .with_padding(Padding::Pkcs7)
//!     .with_encoding(Encoding::Base64);
//!
//! let ciphertext = aespipe::encrypt_str("hello world", &config)?;
//! assert_eq!(ciphertext, "ajjTrSSO/Z11GxiPAphb7Q==");
//! assert_eq!(aespipe::decrypt_to_string(&ciphertext, &config)?, "hello world");
//! # Ok(())
//! # }
//! ```
//!
//! No authentication is performed: a tampered ciphertext either fails to unpad or
//! decrypts to garbage.

mod pipeline;

pub use pipeline::{
    BLOCK_SIZE, BlockCipher, CipherConfig, CipherPipeline, Encoding, EncodingError, Error, Iv,
    Key, Mode, Padding, Result, Stage, decrypt, decrypt_bytes, decrypt_to_string, encrypt,
    encrypt_bytes, encrypt_str, pad, parse, render, unpad,
};

mod block;
mod cipher;
mod config;
mod encoding;
mod error;
mod key;
mod modes;
mod padding;

pub use block::BlockCipher;
pub use cipher::{
    CipherPipeline, decrypt, decrypt_bytes, decrypt_to_string, encrypt, encrypt_bytes, encrypt_str,
};
pub use config::{CipherConfig, Encoding, Mode, Padding};
pub use encoding::{parse, render};
pub use error::{EncodingError, Error, Result, Stage};
pub use key::Key;
pub use modes::{BLOCK_SIZE, Iv};
pub use padding::{pad, unpad};

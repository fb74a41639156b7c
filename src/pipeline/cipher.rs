use log::{debug, trace};

use crate::pipeline::block::BlockCipher;
use crate::pipeline::config::{CipherConfig, Encoding, Mode, Padding};
use crate::pipeline::encoding::{ParseFn, RenderFn};
use crate::pipeline::error::Result;
use crate::pipeline::modes::{BLOCK_SIZE, BlockFn};
use crate::pipeline::padding::{PadFn, UnpadFn};

/// Pad → chain → render orchestrator for one (mode, padding, encoding) selection.
///
/// The stage functions are resolved once when the pipeline is built, so a pipeline can
/// be kept around and reused for any number of keys and payloads. Each call validates
/// its key and IV before touching the payload and either returns the full result or an
/// error; there is never partial output.
///
/// ## Examples
/// ```
/// # fn main() -> aespipe::Result<()> {
/// use aespipe::{CipherPipeline, Encoding, Mode, Padding};
///
/// let pipeline = CipherPipeline::new(Mode::Cbc, Padding::Pkcs7, Encoding::Base64);
/// let key = b"pwFHCqoQZGmho4w6";
/// let iv = b"EkRm7iFT261dpevs";
///
/// let ciphertext = pipeline.encrypt(b"hello world", key, iv)?;
/// assert_eq!(ciphertext, "ajjTrSSO/Z11GxiPAphb7Q==");
/// assert_eq!(pipeline.decrypt(&ciphertext, key, iv)?, b"hello world");
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct CipherPipeline {
    mode: Mode,
    padding: Padding,
    encoding: Encoding,
    pad: PadFn,
    unpad: UnpadFn,
    encrypt_blocks: BlockFn,
    decrypt_blocks: BlockFn,
    render: RenderFn,
    parse: ParseFn,
}

impl CipherPipeline {
    pub fn new(mode: Mode, padding: Padding, encoding: Encoding) -> Self {
        let (pad, unpad) = padding.transforms();
        let (encrypt_blocks, decrypt_blocks) = mode.block_fns();
        let (render, parse) = encoding.codecs();
        Self {
            mode,
            padding,
            encoding,
            pad,
            unpad,
            encrypt_blocks,
            decrypt_blocks,
            render,
            parse,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn padding(&self) -> Padding {
        self.padding
    }

    pub fn encoding(&self) -> Encoding {
        self.encoding
    }

    /// Pads, encrypts, and renders `plaintext`.
    pub fn encrypt(&self, plaintext: &[u8], key: &[u8], iv: &[u8]) -> Result<String> {
        let ciphertext = self.encrypt_bytes(plaintext, key, iv)?;
        let text = (self.render)(&ciphertext);
        trace!("rendered {} ciphertext bytes as {}", ciphertext.len(), self.encoding);
        Ok(text)
    }

    /// Parses, decrypts, and unpads `text`.
    pub fn decrypt(&self, text: &str, key: &[u8], iv: &[u8]) -> Result<Vec<u8>> {
        let (cipher, iv) = self.prepare(key, iv)?;
        let ciphertext = (self.parse)(text)?;
        trace!("parsed {} ciphertext bytes from {}", ciphertext.len(), self.encoding);
        self.decrypt_with(&ciphertext, &cipher, &iv)
    }

    /// Pads and encrypts `plaintext`, returning raw ciphertext bytes.
    pub fn encrypt_bytes(&self, plaintext: &[u8], key: &[u8], iv: &[u8]) -> Result<Vec<u8>> {
        let (cipher, iv) = self.prepare(key, iv)?;

        let padded = (self.pad)(plaintext, BLOCK_SIZE)?;
        trace!(
            "{} padded {} -> {} bytes",
            self.padding,
            plaintext.len(),
            padded.len()
        );

        let ciphertext = (self.encrypt_blocks)(&padded, &cipher, &iv)?;
        debug!("encrypted {} bytes with {:?}/{}", plaintext.len(), cipher, self.mode);
        Ok(ciphertext)
    }

    /// Decrypts and unpads raw ciphertext bytes.
    pub fn decrypt_bytes(&self, ciphertext: &[u8], key: &[u8], iv: &[u8]) -> Result<Vec<u8>> {
        let (cipher, iv) = self.prepare(key, iv)?;
        self.decrypt_with(ciphertext, &cipher, &iv)
    }

    /// Encrypts UTF-8 text.
    pub fn encrypt_str(&self, plaintext: &str, key: &[u8], iv: &[u8]) -> Result<String> {
        self.encrypt(plaintext.as_bytes(), key, iv)
    }

    /// Decrypts to a `String`; fails with [Utf8](crate::Error::Utf8) if the plaintext is
    /// not valid UTF-8.
    pub fn decrypt_to_string(&self, text: &str, key: &[u8], iv: &[u8]) -> Result<String> {
        Ok(String::from_utf8(self.decrypt(text, key, iv)?)?)
    }

    /// Key and IV checks shared by every entry point; runs before any payload byte is
    /// processed.
    fn prepare(&self, key: &[u8], iv: &[u8]) -> Result<(BlockCipher, [u8; BLOCK_SIZE])> {
        let cipher = BlockCipher::try_from_slice(key)?;
        let iv = self.mode.resolve_iv(iv)?;
        Ok((cipher, iv))
    }

    fn decrypt_with(
        &self,
        ciphertext: &[u8],
        cipher: &BlockCipher,
        iv: &[u8; BLOCK_SIZE],
    ) -> Result<Vec<u8>> {
        let padded = (self.decrypt_blocks)(ciphertext, cipher, iv)?;
        let plaintext = (self.unpad)(&padded, BLOCK_SIZE)?;
        debug!(
            "decrypted {} bytes with {:?}/{}/{}",
            ciphertext.len(),
            cipher,
            self.mode,
            self.padding
        );
        Ok(plaintext)
    }
}

impl From<&CipherConfig> for CipherPipeline {
    fn from(config: &CipherConfig) -> Self {
        Self::new(config.mode, config.padding, config.encoding)
    }
}

impl std::fmt::Debug for CipherPipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CipherPipeline")
            .field("mode", &self.mode)
            .field("padding", &self.padding)
            .field("encoding", &self.encoding)
            .finish()
    }
}

/// Encrypts `plaintext` with `config` and renders the ciphertext as text.
///
/// ## Examples
/// ```
/// # fn main() -> aespipe::Result<()> {
/// use aespipe::{CipherConfig, Encoding, Mode, Padding, decrypt, encrypt};
///
/// let config = CipherConfig::new(b"pwFHCqoQZGmho4w6", b"EkRm7iFT261dpevs")
///     .with_mode(Mode::Ecb)
///     .with_padding(Padding::Zero)
///     .with_encoding(Encoding::Hex);
///
/// // empty input still produces one full block
/// let ciphertext = encrypt(b"", &config)?;
/// assert_eq!(ciphertext.len(), 32);
/// assert!(decrypt(&ciphertext, &config)?.is_empty());
/// # Ok(())
/// # }
/// ```
pub fn encrypt(plaintext: &[u8], config: &CipherConfig) -> Result<String> {
    CipherPipeline::from(config).encrypt(plaintext, &config.key, &config.iv)
}

/// Parses `text`, decrypts it with `config`, and strips the padding.
pub fn decrypt(text: &str, config: &CipherConfig) -> Result<Vec<u8>> {
    CipherPipeline::from(config).decrypt(text, &config.key, &config.iv)
}

/// Like [encrypt] but returns raw ciphertext bytes.
pub fn encrypt_bytes(plaintext: &[u8], config: &CipherConfig) -> Result<Vec<u8>> {
    CipherPipeline::from(config).encrypt_bytes(plaintext, &config.key, &config.iv)
}

/// Like [decrypt] but takes raw ciphertext bytes.
pub fn decrypt_bytes(ciphertext: &[u8], config: &CipherConfig) -> Result<Vec<u8>> {
    CipherPipeline::from(config).decrypt_bytes(ciphertext, &config.key, &config.iv)
}

pub fn encrypt_str(plaintext: &str, config: &CipherConfig) -> Result<String> {
    CipherPipeline::from(config).encrypt_str(plaintext, &config.key, &config.iv)
}

pub fn decrypt_to_string(text: &str, config: &CipherConfig) -> Result<String> {
    CipherPipeline::from(config).decrypt_to_string(text, &config.key, &config.iv)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::error::{Error, Stage};

    const KEY: &[u8] = b"pwFHCqoQZGmho4w6";
    const IV: &[u8] = b"EkRm7iFT261dpevs";

    #[test]
    fn key_checked_before_payload() {
        let pipeline = CipherPipeline::new(Mode::Cbc, Padding::Pkcs7, Encoding::Base64);
        // malformed text and a bad key: the key error wins
        let err = pipeline.decrypt("!!!", b"short", IV).unwrap_err();
        assert!(matches!(err, Error::InvalidKeyLength { len: 5 }));
        assert_eq!(err.stage(), Stage::Config);
    }

    #[test]
    fn iv_checked_before_payload() {
        let pipeline = CipherPipeline::new(Mode::Ofb, Padding::Zero, Encoding::Hex);
        let err = pipeline.decrypt("zz", KEY, b"short iv").unwrap_err();
        assert!(matches!(err, Error::InvalidIvLength { len: 8, mode: Mode::Ofb }));
    }

    #[test]
    fn ecb_ignores_iv() -> Result<()> {
        let pipeline = CipherPipeline::new(Mode::Ecb, Padding::Pkcs7, Encoding::Hex);
        let a = pipeline.encrypt(b"payload", KEY, &[])?;
        let b = pipeline.encrypt(b"payload", KEY, IV)?;
        assert_eq!(a, b);
        Ok(())
    }

    #[test]
    fn errors_carry_their_stage() {
        let pipeline = CipherPipeline::new(Mode::Cbc, Padding::Pkcs7, Encoding::Hex);

        let err = pipeline.decrypt("0g", KEY, IV).unwrap_err();
        assert_eq!(err.stage(), Stage::Encoding);

        let err = pipeline.decrypt("00112233", KEY, IV).unwrap_err();
        assert_eq!(err.stage(), Stage::Mode);

        let err = pipeline.decrypt("", KEY, IV).unwrap_err();
        assert_eq!(err.stage(), Stage::Padding);
    }

    #[test]
    fn non_utf8_plaintext() -> Result<()> {
        let pipeline = CipherPipeline::new(Mode::Cfb, Padding::AnsiX923, Encoding::Base64);
        let text = pipeline.encrypt(&[0xff, 0xfe, 0xfd], KEY, IV)?;
        let err = pipeline.decrypt_to_string(&text, KEY, IV).unwrap_err();
        assert!(matches!(err, Error::Utf8(_)));
        assert_eq!(err.stage(), Stage::Output);
        Ok(())
    }

    #[test]
    fn bytes_and_text_agree() -> Result<()> {
        let config = CipherConfig::new(KEY, IV).with_encoding(Encoding::Hex);
        let raw = encrypt_bytes(b"hello world", &config)?;
        assert_eq!(encrypt(b"hello world", &config)?, hex::encode(&raw));
        assert_eq!(decrypt_bytes(&raw, &config)?, b"hello world");
        Ok(())
    }
}

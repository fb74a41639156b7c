mod cbc;
mod cfb;
mod ecb;
mod ofb;
mod util;

use crate::pipeline::block::BlockCipher;
use crate::pipeline::config::Mode;
use crate::pipeline::error::{Error, Result};

pub use util::{BLOCK_SIZE, Iv};

#[cfg(test)]
pub(crate) use util::test_util;

/// Signature shared by every mode-stage direction.
pub(crate) type BlockFn = fn(&[u8], &BlockCipher, &Iv) -> Result<Vec<u8>>;

impl Mode {
    /// Encrypt/decrypt stage functions for this mode.
    pub(crate) fn block_fns(self) -> (BlockFn, BlockFn) {
        match self {
            Mode::Ecb => (ecb::ecb_encrypt, ecb::ecb_decrypt),
            Mode::Cbc => (cbc::cbc_encrypt, cbc::cbc_decrypt),
            Mode::Cfb => (cfb::cfb_encrypt, cfb::cfb_decrypt),
            Mode::Ofb => (ofb::ofb_apply, ofb::ofb_apply),
        }
    }

    /// Checks `iv` against this mode. ECB ignores the IV entirely, so any length passes
    /// and a zero block is returned in its place.
    pub fn resolve_iv(self, iv: &[u8]) -> Result<Iv> {
        if !self.requires_iv() {
            return Ok([0u8; BLOCK_SIZE]);
        }
        iv.try_into().map_err(|_| Error::InvalidIvLength {
            len: iv.len(),
            mode: self,
        })
    }

    /// Runs this mode's encryption over block-aligned `input`. Fails with
    /// [MisalignedInput](crate::Error::MisalignedInput) if `input` is not a whole number of blocks.
    pub fn encrypt_blocks(self, input: &[u8], cipher: &BlockCipher, iv: &Iv) -> Result<Vec<u8>> {
        (self.block_fns().0)(input, cipher, iv)
    }

    /// Runs this mode's decryption over block-aligned `input`.
    pub fn decrypt_blocks(self, input: &[u8], cipher: &BlockCipher, iv: &Iv) -> Result<Vec<u8>> {
        (self.block_fns().1)(input, cipher, iv)
    }
}

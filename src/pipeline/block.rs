use aes::cipher::generic_array::GenericArray;
use aes::cipher::{BlockDecrypt, BlockEncrypt, KeyInit};
use aes::{Aes128, Aes192, Aes256};

use crate::pipeline::error::Result;
use crate::pipeline::key::{Key, KeyBytes};

/// Raw AES block primitive. The key size picks AES-128, AES-192, or AES-256; the
/// round keys are expanded once on construction and reused for every block.
///
/// Chaining is not done here, see [Mode](crate::Mode).
#[derive(Clone)]
pub enum BlockCipher {
    Aes128(Aes128),
    Aes192(Aes192),
    Aes256(Aes256),
}

impl BlockCipher {
    pub fn new(key: &Key) -> Self {
        match key.key_bytes() {
            KeyBytes::K128(k) => Self::Aes128(Aes128::new(GenericArray::from_slice(k))),
            KeyBytes::K192(k) => Self::Aes192(Aes192::new(GenericArray::from_slice(k))),
            KeyBytes::K256(k) => Self::Aes256(Aes256::new(GenericArray::from_slice(k))),
        }
    }

    /// Validates `key` and expands it. Fails with
    /// [InvalidKeyLength](crate::Error::InvalidKeyLength) for anything but 16, 24, or 32 bytes.
    pub fn try_from_slice(key: &[u8]) -> Result<Self> {
        Ok(Self::new(&Key::try_from_slice(key)?))
    }

    #[inline(always)]
    pub fn encrypt_block(&self, input: &[u8; 16]) -> [u8; 16] {
        let mut block = *input;
        let ga = GenericArray::from_mut_slice(&mut block);
        match self {
            Self::Aes128(c) => c.encrypt_block(ga),
            Self::Aes192(c) => c.encrypt_block(ga),
            Self::Aes256(c) => c.encrypt_block(ga),
        }
        block
    }

    #[inline(always)]
    pub fn decrypt_block(&self, input: &[u8; 16]) -> [u8; 16] {
        let mut block = *input;
        let ga = GenericArray::from_mut_slice(&mut block);
        match self {
            Self::Aes128(c) => c.decrypt_block(ga),
            Self::Aes192(c) => c.decrypt_block(ga),
            Self::Aes256(c) => c.decrypt_block(ga),
        }
        block
    }
}

impl std::fmt::Debug for BlockCipher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let bits = match self {
            Self::Aes128(_) => 128,
            Self::Aes192(_) => 192,
            Self::Aes256(_) => 256,
        };
        write!(f, "BlockCipher(AES-{bits})")
    }
}

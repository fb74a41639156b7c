//! Defines the [`Key`] struct, which holds a valid AES key of 128, 192, or 256 bits.

use crate::pipeline::error::{Error, Result};

#[derive(Clone, PartialEq, Eq)]
pub(crate) enum KeyBytes {
    K128([u8; 16]),
    K192([u8; 24]),
    K256([u8; 32]),
}

/// Contains a valid AES key, built from a slice of bytes that is 16, 24, or 32 bytes long.
/// The key size selects AES-128, AES-192, or AES-256.
///
/// ## Examples
/// ```
/// # fn main() -> aespipe::Result<()> {
/// use aespipe::Key;
///
/// let key_bytes = b"pwFHCqoQZGmho4w6pwFHCqoQZGmho4w6";
/// let key_128 = Key::try_from_slice(&key_bytes[..16])?;
/// let key_256 = Key::try_from_slice(&key_bytes[..32])?;
///
/// assert_eq!(key_128.as_bytes(), &key_bytes[..16]);
/// assert_eq!(key_256.bits(), 256);
///
/// // Any other length is rejected with an InvalidKeyLength error:
/// assert!(Key::try_from_slice(&key_bytes[..20]).is_err());
/// # Ok(())
/// # }
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Key {
    bytes: KeyBytes,
}

impl Key {
    /// Attempts to build a key from a slice of bytes. Will return an InvalidKeyLength error
    /// if the input slice is anything other than 16, 24, or 32 bytes long.
    pub fn try_from_slice(bytes: &[u8]) -> Result<Self> {
        let invalid = || Error::InvalidKeyLength { len: bytes.len() };
        let bytes = match bytes.len() {
            16 => KeyBytes::K128(bytes.try_into().map_err(|_| invalid())?),
            24 => KeyBytes::K192(bytes.try_into().map_err(|_| invalid())?),
            32 => KeyBytes::K256(bytes.try_into().map_err(|_| invalid())?),
            _ => return Err(invalid()),
        };
        Ok(Self { bytes })
    }

    /// Returns a reference to the internal key as an array of bytes.
    pub fn as_bytes(&self) -> &[u8] {
        match &self.bytes {
            KeyBytes::K128(k) => k,
            KeyBytes::K192(k) => k,
            KeyBytes::K256(k) => k,
        }
    }

    /// Key size in bits.
    pub fn bits(&self) -> usize {
        self.as_bytes().len() * 8
    }

    pub(crate) fn key_bytes(&self) -> &KeyBytes {
        &self.bytes
    }
}

impl std::fmt::Debug for Key {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Key(AES-{})", self.bits())
    }
}

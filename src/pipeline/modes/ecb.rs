use crate::pipeline::block::BlockCipher;
use crate::pipeline::error::*;
use crate::pipeline::modes::util::{Iv, check_aligned, map_blocks};

/// ECB encryption. Every 16-byte block is encrypted on its own; the IV is unused.
pub(crate) fn ecb_encrypt(input: &[u8], cipher: &BlockCipher, _iv: &Iv) -> Result<Vec<u8>> {
    check_aligned(input, "ECB input not a multiple of 16 bytes")?;
    Ok(map_blocks(input, |block| cipher.encrypt_block(block)))
}

/// ECB decryption.
pub(crate) fn ecb_decrypt(input: &[u8], cipher: &BlockCipher, _iv: &Iv) -> Result<Vec<u8>> {
    check_aligned(input, "ECB ciphertext not a multiple of 16 bytes")?;
    Ok(map_blocks(input, |block| cipher.decrypt_block(block)))
}

use crate::pipeline::block::BlockCipher;
use crate::pipeline::error::*;
use crate::pipeline::modes::util::{
    BLOCK_SIZE, Iv, check_aligned, map_blocks_chained, to_block, xor_blocks,
};

/// CBC encryption. Each plaintext block is `XOR`'d with the previous ciphertext block
/// (the IV for the first) before encryption. Inherently serial.
pub(crate) fn cbc_encrypt(input: &[u8], cipher: &BlockCipher, iv: &Iv) -> Result<Vec<u8>> {
    check_aligned(input, "CBC input not a multiple of 16 bytes")?;

    let mut output = Vec::with_capacity(input.len());
    let mut prev = *iv;

    for chunk in input.chunks_exact(BLOCK_SIZE) {
        prev = cipher.encrypt_block(&xor_blocks(&to_block(chunk), &prev));
        output.extend_from_slice(&prev);
    }

    Ok(output)
}

/// CBC decryption. `P_i = D(C_i) ^ C_(i-1)`, so blocks decrypt independently.
pub(crate) fn cbc_decrypt(input: &[u8], cipher: &BlockCipher, iv: &Iv) -> Result<Vec<u8>> {
    check_aligned(input, "CBC ciphertext not a multiple of 16 bytes")?;
    Ok(map_blocks_chained(input, iv, |block, prev| {
        xor_blocks(&cipher.decrypt_block(block), prev)
    }))
}

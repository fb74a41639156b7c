use crate::pipeline::block::BlockCipher;
use crate::pipeline::error::*;
use crate::pipeline::modes::util::{
    BLOCK_SIZE, Iv, check_aligned, map_blocks_chained, to_block, xor_blocks,
};

/// Full-block CFB encryption. The keystream block is the encryption of the previous
/// ciphertext block (the IV for the first).
pub(crate) fn cfb_encrypt(input: &[u8], cipher: &BlockCipher, iv: &Iv) -> Result<Vec<u8>> {
    check_aligned(input, "CFB input not a multiple of 16 bytes")?;

    let mut output = Vec::with_capacity(input.len());
    let mut prev = *iv;

    for chunk in input.chunks_exact(BLOCK_SIZE) {
        let keystream = cipher.encrypt_block(&prev);
        prev = xor_blocks(&to_block(chunk), &keystream);
        output.extend_from_slice(&prev);
    }

    Ok(output)
}

/// Full-block CFB decryption. The keystream only depends on ciphertext, so blocks are
/// independent.
pub(crate) fn cfb_decrypt(input: &[u8], cipher: &BlockCipher, iv: &Iv) -> Result<Vec<u8>> {
    check_aligned(input, "CFB ciphertext not a multiple of 16 bytes")?;
    Ok(map_blocks_chained(input, iv, |block, prev| {
        xor_blocks(block, &cipher.encrypt_block(prev))
    }))
}

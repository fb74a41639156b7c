use crate::pipeline::block::BlockCipher;
use crate::pipeline::error::*;
use crate::pipeline::modes::util::{BLOCK_SIZE, Iv, check_aligned, to_block, xor_blocks};

/// Core OFB algorithm (OFB is symmetric). The keystream is the IV encrypted over and
/// over, independent of the data, and is `XOR`'d with the input.
pub(crate) fn ofb_apply(input: &[u8], cipher: &BlockCipher, iv: &Iv) -> Result<Vec<u8>> {
    check_aligned(input, "OFB input not a multiple of 16 bytes")?;

    let mut output = Vec::with_capacity(input.len());
    let mut keystream = *iv;

    for chunk in input.chunks_exact(BLOCK_SIZE) {
        keystream = cipher.encrypt_block(&keystream);
        output.extend_from_slice(&xor_blocks(&to_block(chunk), &keystream));
    }

    Ok(output)
}

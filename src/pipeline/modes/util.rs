use rayon::prelude::*;

use crate::pipeline::error::{Error, Result};

/// AES block size in bytes.
pub const BLOCK_SIZE: usize = 16;
pub(crate) const PARALLEL_THRESHOLD: usize = 4 * 1024; // process in parallel if input size gt 4 KiB

/// One block worth of IV.
pub type Iv = [u8; BLOCK_SIZE];

pub(crate) fn check_aligned(input: &[u8], context: &'static str) -> Result<()> {
    if input.len() % BLOCK_SIZE != 0 {
        return Err(Error::MisalignedInput {
            len: input.len(),
            context,
        });
    }
    Ok(())
}

#[inline(always)]
pub(crate) fn to_block(chunk: &[u8]) -> [u8; 16] {
    let mut block = [0u8; 16];
    block.copy_from_slice(chunk);
    block
}

#[inline(always)]
pub(crate) fn xor_blocks(a: &[u8; 16], b: &[u8; 16]) -> [u8; 16] {
    let mut out = *a;
    for i in 0..16 {
        out[i] ^= b[i];
    }
    out
}

/// Maps every block of `input` through `f` independently. Input must already be aligned.
pub(crate) fn map_blocks<F>(input: &[u8], f: F) -> Vec<u8>
where
    F: Fn(&[u8; 16]) -> [u8; 16] + Sync + Send,
{
    let mut output = vec![0u8; input.len()];

    if input.len() > PARALLEL_THRESHOLD {
        output
            .par_chunks_exact_mut(BLOCK_SIZE)
            .zip(input.par_chunks_exact(BLOCK_SIZE))
            .for_each(|(out, block)| out.copy_from_slice(&f(&to_block(block))));
    } else {
        for (out, block) in output
            .chunks_exact_mut(BLOCK_SIZE)
            .zip(input.chunks_exact(BLOCK_SIZE))
        {
            out.copy_from_slice(&f(&to_block(block)));
        }
    }

    output
}

/// Like [map_blocks], but `f` also receives the previous *input* block (`iv` for the
/// first). Covers every direction whose output block depends only on known input
/// blocks: CBC and CFB decryption.
pub(crate) fn map_blocks_chained<F>(input: &[u8], iv: &Iv, f: F) -> Vec<u8>
where
    F: Fn(&[u8; 16], &[u8; 16]) -> [u8; 16] + Sync + Send,
{
    let prev = |i: usize| -> [u8; 16] {
        if i == 0 {
            *iv
        } else {
            to_block(&input[(i - 1) * BLOCK_SIZE..i * BLOCK_SIZE])
        }
    };

    let mut output = vec![0u8; input.len()];

    if input.len() > PARALLEL_THRESHOLD {
        output
            .par_chunks_exact_mut(BLOCK_SIZE)
            .zip(input.par_chunks_exact(BLOCK_SIZE))
            .enumerate()
            .for_each(|(i, (out, block))| out.copy_from_slice(&f(&to_block(block), &prev(i))));
    } else {
        for (i, (out, block)) in output
            .chunks_exact_mut(BLOCK_SIZE)
            .zip(input.chunks_exact(BLOCK_SIZE))
            .enumerate()
        {
            out.copy_from_slice(&f(&to_block(block), &prev(i)));
        }
    }

    output
}

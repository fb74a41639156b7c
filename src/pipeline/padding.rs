//! Padding stage. Every scheme appends `n = block_size - (len % block_size)` bytes, so
//! already aligned input (including empty input) gains a full extra block and the
//! padded length is always strictly greater than the input length.

use rand::TryRngCore;
use rand::rngs::OsRng;

use crate::pipeline::config::Padding;
use crate::pipeline::error::{Error, Result};

pub(crate) type PadFn = fn(&[u8], usize) -> Result<Vec<u8>>;
pub(crate) type UnpadFn = fn(&[u8], usize) -> Result<Vec<u8>>;

impl Padding {
    /// Pad/unpad stage functions for this scheme.
    pub(crate) fn transforms(self) -> (PadFn, UnpadFn) {
        match self {
            Padding::Pkcs7 => (pkcs7_pad, pkcs7_unpad),
            Padding::Zero => (zero_pad, zero_unpad),
            Padding::Iso10126 => (iso10126_pad, count_unpad),
            Padding::AnsiX923 => (ansix923_pad, ansix923_unpad),
        }
    }
}

/// Pads `data` to a multiple of `block_size` (1..=255) with `scheme`.
///
/// ## Examples
/// ```
/// # fn main() -> aespipe::Result<()> {
/// use aespipe::{Padding, pad, unpad};
///
/// let padded = pad(b"hello world", 16, Padding::AnsiX923)?;
/// assert_eq!(&padded[11..], &[0, 0, 0, 0, 5]);
/// assert_eq!(unpad(&padded, 16, Padding::AnsiX923)?, b"hello world");
/// # Ok(())
/// # }
/// ```
pub fn pad(data: &[u8], block_size: usize, scheme: Padding) -> Result<Vec<u8>> {
    (scheme.transforms().0)(data, block_size)
}

/// Strips `scheme` padding from `data`. Fails with [Padding](crate::Error::Padding) on
/// empty input or a corrupt trailer.
///
/// [Padding::Zero] strips **every** trailing zero byte, including ones that belonged
/// to the plaintext.
pub fn unpad(data: &[u8], block_size: usize, scheme: Padding) -> Result<Vec<u8>> {
    (scheme.transforms().1)(data, block_size)
}

/// Number of pad bytes `n` for `len` bytes of input, in 1..=block_size.
fn pad_len(len: usize, block_size: usize) -> Result<usize> {
    if block_size == 0 || block_size > u8::MAX as usize {
        return Err(Error::Padding {
            len,
            context: "block size must be between 1 and 255",
        });
    }
    Ok(block_size - len % block_size)
}

/// Copies `data` into a buffer of the final padded length; the tail is zeroed.
fn extend(data: &[u8], n: usize) -> Vec<u8> {
    let mut out = Vec::with_capacity(data.len() + n);
    out.extend_from_slice(data);
    out.resize(data.len() + n, 0);
    out
}

fn pkcs7_pad(data: &[u8], block_size: usize) -> Result<Vec<u8>> {
    let n = pad_len(data.len(), block_size)?;
    let mut out = extend(data, n);
    out[data.len()..].fill(n as u8);
    Ok(out)
}

fn zero_pad(data: &[u8], block_size: usize) -> Result<Vec<u8>> {
    let n = pad_len(data.len(), block_size)?;
    Ok(extend(data, n))
}

fn iso10126_pad(data: &[u8], block_size: usize) -> Result<Vec<u8>> {
    let n = pad_len(data.len(), block_size)?;
    let mut out = extend(data, n);
    let last = out.len() - 1;
    // exactly n - 1 bytes of filler; an RNG failure aborts rather than falling back
    OsRng.try_fill_bytes(&mut out[data.len()..last])?;
    out[last] = n as u8;
    Ok(out)
}

fn ansix923_pad(data: &[u8], block_size: usize) -> Result<Vec<u8>> {
    let n = pad_len(data.len(), block_size)?;
    let mut out = extend(data, n);
    let last = out.len() - 1;
    out[last] = n as u8;
    Ok(out)
}

/// Reads and range-checks the trailing count byte. Returns `(count, start_of_padding)`.
fn read_count(data: &[u8], block_size: usize) -> Result<(usize, usize)> {
    let Some(&last) = data.last() else {
        return Err(Error::Padding {
            len: 0,
            context: "attempted to unpad empty input",
        });
    };

    let n = last as usize;
    if n == 0 || n > block_size || n > data.len() {
        return Err(Error::Padding {
            len: data.len(),
            context: "invalid padding length specified by last byte",
        });
    }

    Ok((n, data.len() - n))
}

fn pkcs7_unpad(data: &[u8], block_size: usize) -> Result<Vec<u8>> {
    let (n, start) = read_count(data, block_size)?;
    if !data[start..].iter().all(|&b| b as usize == n) {
        return Err(Error::Padding {
            len: data.len(),
            context: "invalid PKCS#7 padding format",
        });
    }
    Ok(data[..start].to_vec())
}

/// ISO 10126: only the count byte carries information, the filler is random.
fn count_unpad(data: &[u8], block_size: usize) -> Result<Vec<u8>> {
    let (_, start) = read_count(data, block_size)?;
    Ok(data[..start].to_vec())
}

fn ansix923_unpad(data: &[u8], block_size: usize) -> Result<Vec<u8>> {
    let (_, start) = read_count(data, block_size)?;
    let last = data.len() - 1;
    if data[start..last].iter().any(|&b| b != 0) {
        return Err(Error::Padding {
            len: data.len(),
            context: "invalid ANSI X9.23 padding format",
        });
    }
    Ok(data[..start].to_vec())
}

fn zero_unpad(data: &[u8], _block_size: usize) -> Result<Vec<u8>> {
    if data.is_empty() {
        return Err(Error::Padding {
            len: 0,
            context: "attempted to unpad empty input",
        });
    }
    let end = data.iter().rposition(|&b| b != 0).map_or(0, |i| i + 1);
    Ok(data[..end].to_vec())
}

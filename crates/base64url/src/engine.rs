//! Standard (padded, `+`/`/`) base64 engines the URL-safe codec delegates to.

use crate::constants::{ALPHABET_BYTES, PAD};
use crate::size::required_encode_buffer_size;
use crate::{Base64UrlError, Result};

/// The standard base64 primitive behind [`crate::Base64Url`].
///
/// Implementations only ever see the standard alphabet with `=` padding; the
/// URL-safe substitution happens around them.
pub trait StandardEngine {
    /// Writes the padded base64 text of `src` to the front of `dest` and
    /// returns the number of bytes written.
    ///
    /// `dest` must hold at least `required_encode_buffer_size(src.len())`
    /// bytes, otherwise [`Base64UrlError::DestinationTooSmall`] is returned.
    fn encode_into(&self, src: &[u8], dest: &mut [u8]) -> Result<usize>;

    /// Decodes padded base64 text whose length is a multiple of four.
    ///
    /// Fails with [`Base64UrlError::InvalidBase64Sequence`] on a bad length, a
    /// byte outside the alphabet, misplaced padding or non-zero trailing bits.
    fn decode(&self, src: &[u8]) -> Result<Vec<u8>>;
}

impl<E: StandardEngine + ?Sized> StandardEngine for &E {
    fn encode_into(&self, src: &[u8], dest: &mut [u8]) -> Result<usize> {
        (**self).encode_into(src, dest)
    }

    fn decode(&self, src: &[u8]) -> Result<Vec<u8>> {
        (**self).decode(src)
    }
}

fn check_destination(src: &[u8], dest: &[u8]) -> Result<usize> {
    let required = required_encode_buffer_size(src.len())?;
    if dest.len() < required {
        return Err(Base64UrlError::DestinationTooSmall {
            required,
            available: dest.len(),
        });
    }
    Ok(required)
}

/// Pre-computed two-character lookup table for encoding.
/// Entry `i * 64 + j` holds the characters for sextets `i` and `j`.
static TABLE2: [[u8; 2]; 4096] = {
    let mut table = [[0u8; 2]; 4096];
    let mut i = 0;
    while i < 64 {
        let mut j = 0;
        while j < 64 {
            let idx = i * 64 + j;
            table[idx][0] = ALPHABET_BYTES[i];
            table[idx][1] = ALPHABET_BYTES[j];
            j += 1;
        }
        i += 1;
    }
    table
};

/// Reverse lookup table, -1 for bytes outside the alphabet.
static SEXTETS: [i8; 256] = {
    let mut table = [-1i8; 256];
    let mut i = 0;
    while i < 64 {
        table[ALPHABET_BYTES[i] as usize] = i as i8;
        i += 1;
    }
    table
};

#[inline]
fn sextet(octet: u8) -> Result<u8> {
    let value = SEXTETS[octet as usize];
    if value < 0 {
        return Err(Base64UrlError::InvalidBase64Sequence);
    }
    Ok(value as u8)
}

/// Lookup-table engine with no dependencies beyond the standard library.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TableEngine;

impl StandardEngine for TableEngine {
    fn encode_into(&self, src: &[u8], dest: &mut [u8]) -> Result<usize> {
        check_destination(src, dest)?;

        let extra_length = src.len() % 3;
        let base_length = src.len() - extra_length;
        let mut offset = 0;

        for chunk in src[..base_length].chunks_exact(3) {
            let v1 = ((chunk[0] as usize) << 4) | ((chunk[1] as usize) >> 4);
            let v2 = (((chunk[1] & 0b1111) as usize) << 8) | (chunk[2] as usize);
            dest[offset..offset + 2].copy_from_slice(&TABLE2[v1]);
            dest[offset + 2..offset + 4].copy_from_slice(&TABLE2[v2]);
            offset += 4;
        }

        if extra_length == 1 {
            let v1 = (src[base_length] as usize) << 4;
            dest[offset..offset + 2].copy_from_slice(&TABLE2[v1]);
            dest[offset + 2] = PAD;
            dest[offset + 3] = PAD;
            offset += 4;
        } else if extra_length == 2 {
            let o1 = src[base_length];
            let o2 = src[base_length + 1];
            let v1 = ((o1 as usize) << 4) | ((o2 as usize) >> 4);
            let v2 = ((o2 & 0b1111) as usize) << 2;
            dest[offset..offset + 2].copy_from_slice(&TABLE2[v1]);
            dest[offset + 2] = ALPHABET_BYTES[v2];
            dest[offset + 3] = PAD;
            offset += 4;
        }

        Ok(offset)
    }

    fn decode(&self, src: &[u8]) -> Result<Vec<u8>> {
        if src.is_empty() {
            return Ok(Vec::new());
        }
        if src.len() % 4 != 0 {
            return Err(Base64UrlError::InvalidBase64Sequence);
        }

        let padding = match src {
            [.., PAD, PAD] => 2,
            [.., PAD] => 1,
            _ => 0,
        };
        let main_end = src.len() - if padding > 0 { 4 } else { 0 };
        let mut buf = Vec::with_capacity(src.len() / 4 * 3 - padding);

        for quad in src[..main_end].chunks_exact(4) {
            let sextet0 = sextet(quad[0])?;
            let sextet1 = sextet(quad[1])?;
            let sextet2 = sextet(quad[2])?;
            let sextet3 = sextet(quad[3])?;
            buf.push((sextet0 << 2) | (sextet1 >> 4));
            buf.push((sextet1 << 4) | (sextet2 >> 2));
            buf.push((sextet2 << 6) | sextet3);
        }

        let tail = &src[main_end..];
        if padding == 1 {
            let sextet0 = sextet(tail[0])?;
            let sextet1 = sextet(tail[1])?;
            let sextet2 = sextet(tail[2])?;
            // Trailing bits must be zero.
            if sextet2 & 0b11 != 0 {
                return Err(Base64UrlError::InvalidBase64Sequence);
            }
            buf.push((sextet0 << 2) | (sextet1 >> 4));
            buf.push((sextet1 << 4) | (sextet2 >> 2));
        } else if padding == 2 {
            let sextet0 = sextet(tail[0])?;
            let sextet1 = sextet(tail[1])?;
            if sextet1 & 0b1111 != 0 {
                return Err(Base64UrlError::InvalidBase64Sequence);
            }
            buf.push((sextet0 << 2) | (sextet1 >> 4));
        }

        Ok(buf)
    }
}

/// Engine backed by the `base64` crate's standard padded configuration.
#[cfg(feature = "base64-crate")]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CrateEngine;

#[cfg(feature = "base64-crate")]
impl StandardEngine for CrateEngine {
    fn encode_into(&self, src: &[u8], dest: &mut [u8]) -> Result<usize> {
        use base64::Engine as _;

        let required = check_destination(src, dest)?;
        let available = dest.len();
        base64::engine::general_purpose::STANDARD
            .encode_slice(src, dest)
            .map_err(|_| Base64UrlError::DestinationTooSmall {
                required,
                available,
            })
    }

    fn decode(&self, src: &[u8]) -> Result<Vec<u8>> {
        use base64::Engine as _;

        base64::engine::general_purpose::STANDARD
            .decode(src)
            .map_err(|err| {
                tracing::trace!(error = %err, "standard base64 engine rejected input");
                Base64UrlError::InvalidBase64Sequence
            })
    }
}

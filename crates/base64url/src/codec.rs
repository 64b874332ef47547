//! The URL-safe codec: alphabet substitution and padding around a standard engine.

use crate::constants::PAD;
use crate::engine::{StandardEngine, TableEngine};
use crate::size::{padding_chars_to_add, required_decode_buffer_size, required_encode_buffer_size};
use crate::window::validate_window;
use crate::{Base64UrlError, Result};

/// Unpadded base64url codec over a [`StandardEngine`].
///
/// The codec itself holds no state besides the engine, so a single instance
/// can be shared freely between threads when the engine allows it.
///
/// # Example
///
/// ```
/// use base64url::{Base64Url, TableEngine};
///
/// let codec = Base64Url::new(TableEngine);
/// let mut out = [0u8; 8];
/// let written = codec.encode_into(b"hello", 0, 5, &mut out, 0).unwrap();
/// assert_eq!(&out[..written], b"aGVsbG8");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Base64Url<E = TableEngine> {
    engine: E,
}

impl<E: StandardEngine> Base64Url<E> {
    pub const fn new(engine: E) -> Self {
        Self { engine }
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Decodes a whole base64url string.
    pub fn decode(&self, text: &str) -> Result<Vec<u8>> {
        self.decode_window(text, 0, text.len())
    }

    /// Decodes `count` bytes of `text` starting at byte `offset`.
    ///
    /// The window is copied into a scratch buffer sized by
    /// [`required_decode_buffer_size`] and decoded in place there.
    pub fn decode_window(&self, text: &str, offset: usize, count: usize) -> Result<Vec<u8>> {
        let text = text.as_bytes();
        validate_window(text.len(), offset, count)?;
        if count == 0 {
            return Ok(Vec::new());
        }

        let mut buf = vec![0u8; required_decode_buffer_size(count)?];
        buf[..count].copy_from_slice(&text[offset..offset + count]);
        self.decode_in_place(&mut buf, 0, count)
    }

    /// Decodes the `count` characters at `offset` in `buf`, rewriting them in
    /// place.
    ///
    /// `-` and `_` are replaced by `+` and `/`, and up to two `=` bytes are
    /// written directly after the window, so `buf` must have
    /// `required_decode_buffer_size(count)` bytes available from `offset`.
    /// The window contents are unspecified after the call, even on error.
    pub fn decode_in_place(&self, buf: &mut [u8], offset: usize, count: usize) -> Result<Vec<u8>> {
        validate_window(buf.len(), offset, count)?;
        if count == 0 {
            return Ok(Vec::new());
        }

        let padding = padding_chars_to_add(count).inspect_err(|_| {
            tracing::trace!(offset, count, "base64url length is 1 mod 4");
        })?;
        let required = required_decode_buffer_size(count)?;
        debug_assert_eq!(required % 4, 0);
        debug_assert_eq!(required, count + padding);

        let available = buf.len() - offset;
        if available < required {
            tracing::trace!(offset, count, required, available, "no room for padding");
            return Err(Base64UrlError::DestinationTooSmall {
                required,
                available,
            });
        }

        let window = &mut buf[offset..offset + required];
        to_standard_alphabet(&mut window[..count]);
        window[count..].fill(PAD);

        self.engine.decode(window).inspect_err(|_| {
            tracing::trace!(offset, count, "standard engine rejected base64url input");
        })
    }

    /// Encodes all of `bytes`.
    pub fn encode(&self, bytes: &[u8]) -> Result<String> {
        self.encode_window(bytes, 0, bytes.len())
    }

    /// Encodes the `count` bytes of `bytes` starting at `offset`.
    pub fn encode_window(&self, bytes: &[u8], offset: usize, count: usize) -> Result<String> {
        validate_window(bytes.len(), offset, count)?;
        if count == 0 {
            return Ok(String::new());
        }

        let mut out = vec![0u8; required_encode_buffer_size(count)?];
        let written = self.encode_into(bytes, offset, count, &mut out, 0)?;
        out.truncate(written);
        String::from_utf8(out).map_err(|_| Base64UrlError::InvalidEngineOutput)
    }

    /// Encodes the `count` bytes at `offset` into `out` starting at
    /// `out_offset`, returning the number of base64url characters written.
    ///
    /// `out` must have `required_encode_buffer_size(count)` bytes available
    /// from `out_offset`. Bytes of that range past the returned length may
    /// hold leftover padding and carry no meaning.
    pub fn encode_into(
        &self,
        bytes: &[u8],
        offset: usize,
        count: usize,
        out: &mut [u8],
        out_offset: usize,
    ) -> Result<usize> {
        validate_window(bytes.len(), offset, count)?;
        let required = required_encode_buffer_size(count)?;
        validate_window(out.len(), out_offset, required).map_err(|_| {
            Base64UrlError::DestinationTooSmall {
                required,
                available: out.len().saturating_sub(out_offset),
            }
        })?;
        if count == 0 {
            return Ok(0);
        }

        let dest = &mut out[out_offset..out_offset + required];
        let produced = self
            .engine
            .encode_into(&bytes[offset..offset + count], dest)?;
        Ok(to_url_alphabet(&mut dest[..produced]))
    }
}

fn to_standard_alphabet(text: &mut [u8]) {
    for c in text {
        match *c {
            b'-' => *c = b'+',
            b'_' => *c = b'/',
            _ => {}
        }
    }
}

/// Rewrites standard base64 to the URL-safe alphabet up to the first `=` and
/// returns the unpadded length.
fn to_url_alphabet(text: &mut [u8]) -> usize {
    for (i, c) in text.iter_mut().enumerate() {
        match *c {
            b'+' => *c = b'-',
            b'/' => *c = b'_',
            PAD => return i,
            _ => {}
        }
    }
    text.len()
}

//! Buffer-size arithmetic shared by the encode and decode paths.

use crate::constants::PAD;
use crate::{Base64UrlError, Result};

/// Number of `=` characters needed to pad `count` unpadded characters to a
/// multiple of four.
///
/// Remainders 0, 2 and 3 map to 0, 2 and 1 padding characters. A remainder of
/// 1 can never come from encoding bytes and fails with
/// [`Base64UrlError::InvalidLength`].
pub fn padding_chars_to_add(count: usize) -> Result<usize> {
    match count % 4 {
        0 => Ok(0),
        2 => Ok(2),
        3 => Ok(1),
        _ => Err(Base64UrlError::InvalidLength { count }),
    }
}

/// Size of the padded standard base64 text that `count` unpadded base64url
/// characters expand to.
///
/// This is the capacity an in-place decode needs from its window.
///
/// # Example
///
/// ```
/// use base64url::required_decode_buffer_size;
///
/// assert_eq!(required_decode_buffer_size(0).unwrap(), 0);
/// assert_eq!(required_decode_buffer_size(2).unwrap(), 4);
/// assert_eq!(required_decode_buffer_size(3).unwrap(), 4);
/// assert_eq!(required_decode_buffer_size(4).unwrap(), 4);
/// ```
pub fn required_decode_buffer_size(count: usize) -> Result<usize> {
    if count == 0 {
        return Ok(0);
    }
    let padding = padding_chars_to_add(count)?;
    count
        .checked_add(padding)
        .ok_or(Base64UrlError::SizeOverflow { count })
}

/// Size of the padded standard base64 text for `count` bytes,
/// `ceil(count / 3) * 4`.
///
/// # Example
///
/// ```
/// use base64url::required_encode_buffer_size;
///
/// assert_eq!(required_encode_buffer_size(1).unwrap(), 4);
/// assert_eq!(required_encode_buffer_size(3).unwrap(), 4);
/// assert_eq!(required_encode_buffer_size(4).unwrap(), 8);
/// ```
pub fn required_encode_buffer_size(count: usize) -> Result<usize> {
    count
        .div_ceil(3)
        .checked_mul(4)
        .ok_or(Base64UrlError::SizeOverflow { count })
}

/// Exact length of the unpadded base64url text for `count` bytes.
pub fn encoded_len(count: usize) -> Result<usize> {
    let tail = match count % 3 {
        0 => 0,
        1 => 2,
        _ => 3,
    };
    (count / 3)
        .checked_mul(4)
        .and_then(|full| full.checked_add(tail))
        .ok_or(Base64UrlError::SizeOverflow { count })
}

/// Exact number of bytes decoded from `count` unpadded base64url characters.
pub fn decoded_len(count: usize) -> Result<usize> {
    let padding = padding_chars_to_add(count)?;
    let tail = match padding {
        0 => 0,
        1 => 2,
        _ => 1,
    };
    Ok(count / 4 * 3 + tail)
}

/// Counts the trailing `=` characters of standard base64 text (0, 1 or 2).
pub fn trailing_padding(text: &[u8]) -> usize {
    text.iter().rev().take(2).take_while(|&&c| c == PAD).count()
}

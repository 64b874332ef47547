//! URL-safe base64 encoding functions.

use crate::{Base64Url, Result, TableEngine};

/// Encodes a byte slice to a URL-safe base64 string.
///
/// This uses the URL-safe alphabet (`-` and `_` instead of `+` and `/`)
/// and does not add padding.
///
/// # Example
///
/// ```
/// use base64url::to_base64_url;
///
/// assert_eq!(to_base64_url(b"hello world").unwrap(), "aGVsbG8gd29ybGQ");
/// assert_eq!(to_base64_url(&[0x00]).unwrap(), "AA");
/// ```
pub fn to_base64_url(uint8: &[u8]) -> Result<String> {
    Base64Url::new(TableEngine).encode(uint8)
}

/// Encodes the `count` bytes of `uint8` starting at `offset`.
pub fn to_base64_url_window(uint8: &[u8], offset: usize, count: usize) -> Result<String> {
    Base64Url::new(TableEngine).encode_window(uint8, offset, count)
}

/// Encodes bytes into a destination byte slice.
///
/// # Arguments
///
/// * `uint8` - The source bytes to encode.
/// * `offset` - The starting index in the source slice.
/// * `count` - The number of bytes to encode.
/// * `dest` - The destination byte slice.
/// * `dest_offset` - The starting offset in the destination slice.
///
/// # Returns
///
/// The number of characters written, excluding padding. The destination needs
/// `required_encode_buffer_size(count)` bytes from `dest_offset`.
///
/// # Example
///
/// ```
/// use base64url::to_base64_url_bin;
///
/// let mut dest = [b'.'; 10];
/// let written = to_base64_url_bin(&[0xFF, 0xFF], 0, 2, &mut dest, 2).unwrap();
/// assert_eq!(&dest[2..2 + written], b"__8");
/// ```
pub fn to_base64_url_bin(
    uint8: &[u8],
    offset: usize,
    count: usize,
    dest: &mut [u8],
    dest_offset: usize,
) -> Result<usize> {
    Base64Url::new(TableEngine).encode_into(uint8, offset, count, dest, dest_offset)
}

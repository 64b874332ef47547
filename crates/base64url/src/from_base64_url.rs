//! URL-safe base64 decoding functions.

use crate::{Base64Url, Result, TableEngine};

/// Decodes an unpadded URL-safe base64 string.
///
/// # Example
///
/// ```
/// use base64url::from_base64_url;
///
/// assert_eq!(from_base64_url("aGVsbG8gd29ybGQ").unwrap(), b"hello world");
/// assert_eq!(from_base64_url("__8").unwrap(), vec![0xFF, 0xFF]);
/// assert!(from_base64_url("AAAAA").is_err());
/// ```
pub fn from_base64_url(encoded: &str) -> Result<Vec<u8>> {
    Base64Url::new(TableEngine).decode(encoded)
}

/// Decodes the `count` bytes of `encoded` starting at byte `offset`.
///
/// # Example
///
/// ```
/// use base64url::from_base64_url_window;
///
/// assert_eq!(from_base64_url_window("..Zm8..", 2, 3).unwrap(), b"fo");
/// ```
pub fn from_base64_url_window(encoded: &str, offset: usize, count: usize) -> Result<Vec<u8>> {
    Base64Url::new(TableEngine).decode_window(encoded, offset, count)
}

/// Decodes the `count` characters at `offset` in `buf` in place.
///
/// The buffer needs `required_decode_buffer_size(count)` bytes from `offset`,
/// since padding is appended right after the window.
///
/// # Example
///
/// ```
/// use base64url::from_base64_url_in_place;
///
/// let mut buf = *b"Zg\0\0";
/// assert_eq!(from_base64_url_in_place(&mut buf, 0, 2).unwrap(), b"f");
/// assert_eq!(&buf, b"Zg==");
/// ```
pub fn from_base64_url_in_place(buf: &mut [u8], offset: usize, count: usize) -> Result<Vec<u8>> {
    Base64Url::new(TableEngine).decode_in_place(buf, offset, count)
}

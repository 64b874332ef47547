//! URL-safe base64 encoding and decoding without padding.
//!
//! This crate provides the RFC 4648 section 5 alphabet (`-` and `_` instead of
//! `+` and `/`) with the `=` padding omitted, on top of a pluggable standard
//! base64 engine:
//! - Owned conversions between bytes and `String`
//! - Encoding into a caller-supplied output buffer at an offset
//! - In-place decoding of a mutable ASCII buffer with room for padding
//! - Exact buffer-size helpers for both directions
//!
//! Every entry point validates its `(offset, count)` windows, lengths and
//! buffer sizes before touching any buffer, so `OutOfBounds`, `InvalidLength`,
//! `DestinationTooSmall` and `SizeOverflow` never leave partial output behind.
//! An in-place decode rejected by the engine has already rewritten its window.
//!
//! # Example
//!
//! ```
//! use base64url::{from_base64_url, to_base64_url};
//!
//! let encoded = to_base64_url(&[0xFF, 0xFF]).unwrap();
//! assert_eq!(encoded, "__8");
//! assert_eq!(from_base64_url(&encoded).unwrap(), vec![0xFF, 0xFF]);
//! ```

mod codec;
mod constants;
mod engine;
mod from_base64_url;
mod size;
mod to_base64_url;
mod window;

pub use codec::Base64Url;
pub use constants::{ALPHABET, ALPHABET_BYTES, ALPHABET_URL, PAD};
#[cfg(feature = "base64-crate")]
pub use engine::CrateEngine;
pub use engine::{StandardEngine, TableEngine};
pub use from_base64_url::{from_base64_url, from_base64_url_in_place, from_base64_url_window};
pub use size::{
    decoded_len, encoded_len, padding_chars_to_add, required_decode_buffer_size,
    required_encode_buffer_size, trailing_padding,
};
pub use to_base64_url::{to_base64_url, to_base64_url_bin, to_base64_url_window};
pub use window::validate_window;

/// Error type for URL-safe base64 operations.
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum Base64UrlError {
    /// A buffer size computation overflowed `usize`.
    #[error("size computation overflows for count {count}")]
    SizeOverflow { count: usize },
    /// The `(offset, count)` window runs past the end of the buffer.
    #[error("window at offset {offset} with count {count} exceeds buffer of length {len}")]
    OutOfBounds {
        len: usize,
        offset: usize,
        count: usize,
    },
    /// The destination has fewer bytes than the operation must write.
    #[error("destination needs {required} bytes but only {available} are available")]
    DestinationTooSmall { required: usize, available: usize },
    /// An unpadded base64url length of `1 mod 4` can never be valid.
    #[error("invalid base64url length {count}")]
    InvalidLength { count: usize },
    /// The standard engine rejected the input after alphabet substitution.
    #[error("INVALID_BASE64_SEQ")]
    InvalidBase64Sequence,
    /// The standard engine produced bytes that are not ASCII text.
    #[error("engine produced non-ASCII output")]
    InvalidEngineOutput,
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Base64UrlError>;

//! Shared `(offset, count)` window validation.

use crate::{Base64UrlError, Result};

/// Checks that `count` elements starting at `offset` fit in a buffer of `len`.
///
/// Every public encode and decode entry point runs this before any
/// transformation, for both source and destination windows.
///
/// # Example
///
/// ```
/// use base64url::validate_window;
///
/// assert!(validate_window(8, 4, 4).is_ok());
/// assert!(validate_window(8, 4, 5).is_err());
/// ```
pub fn validate_window(len: usize, offset: usize, count: usize) -> Result<()> {
    if offset > len || len - offset < count {
        tracing::trace!(len, offset, count, "window exceeds buffer");
        return Err(Base64UrlError::OutOfBounds { len, offset, count });
    }
    Ok(())
}

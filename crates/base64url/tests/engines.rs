//! The codec behaves the same regardless of the standard engine behind it.

use base64url::{Base64Url, Base64UrlError, Result, StandardEngine, TableEngine};

/// Engine that rejects every input.
struct RejectingEngine;

impl StandardEngine for RejectingEngine {
    fn encode_into(&self, _src: &[u8], _dest: &mut [u8]) -> Result<usize> {
        Err(Base64UrlError::InvalidBase64Sequence)
    }

    fn decode(&self, _src: &[u8]) -> Result<Vec<u8>> {
        Err(Base64UrlError::InvalidBase64Sequence)
    }
}

/// Engine that checks it only ever receives padded standard base64.
struct StrictEngine;

impl StandardEngine for StrictEngine {
    fn encode_into(&self, src: &[u8], dest: &mut [u8]) -> Result<usize> {
        TableEngine.encode_into(src, dest)
    }

    fn decode(&self, src: &[u8]) -> Result<Vec<u8>> {
        assert_eq!(src.len() % 4, 0);
        assert!(!src.contains(&b'-') && !src.contains(&b'_'));
        TableEngine.decode(src)
    }
}

#[test]
fn engine_errors_propagate() {
    let codec = Base64Url::new(RejectingEngine);
    assert_eq!(
        codec.decode("Zm9v"),
        Err(Base64UrlError::InvalidBase64Sequence)
    );
    assert_eq!(
        codec.encode(b"foo"),
        Err(Base64UrlError::InvalidBase64Sequence)
    );
}

#[test]
fn empty_input_skips_engine() {
    let codec = Base64Url::new(RejectingEngine);
    assert_eq!(codec.decode("").unwrap(), b"");
    assert_eq!(codec.encode(b"").unwrap(), "");
    let mut out = [0u8; 0];
    assert_eq!(codec.encode_into(b"", 0, 0, &mut out, 0).unwrap(), 0);
}

#[test]
fn engine_sees_standard_padded_text() {
    let codec = Base64Url::new(StrictEngine);
    for text in ["-_8", "AA", "Zm9v", "aGVsbG8gd29ybGQ", "-_-_"] {
        codec.decode(text).unwrap();
    }
}

#[cfg(feature = "base64-crate")]
#[test]
fn engines_produce_identical_output() {
    use base64url::CrateEngine;

    let table = Base64Url::new(TableEngine);
    let krate = Base64Url::new(CrateEngine);
    let data: Vec<u8> = (0..=255u8).rev().collect();
    for len in 0..data.len() {
        let encoded = table.encode(&data[..len]).unwrap();
        assert_eq!(krate.encode(&data[..len]).unwrap(), encoded);
        assert_eq!(krate.decode(&encoded).unwrap(), &data[..len]);
    }
    assert_eq!(
        krate.decode("Zm.v"),
        Err(Base64UrlError::InvalidBase64Sequence)
    );
    assert_eq!(
        krate.decode("AAAAA"),
        Err(Base64UrlError::InvalidLength { count: 5 })
    );
}

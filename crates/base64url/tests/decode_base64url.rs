//! Tests for URL-safe base64 decoding (from_base64_url and friends).

use base64url::{from_base64_url, from_base64_url_window, to_base64_url, Base64UrlError};
use rand::Rng;

fn generate_blob() -> Vec<u8> {
    let mut rng = rand::thread_rng();
    let length = rng.gen_range(0..=100);
    (0..length).map(|_| rng.gen::<u8>()).collect()
}

#[test]
fn works() {
    for _ in 0..100 {
        let blob = generate_blob();
        let encoded = to_base64_url(&blob).unwrap();
        let decoded = from_base64_url(&encoded).unwrap();
        assert_eq!(decoded, blob);
    }
}

#[test]
fn empty_input() {
    assert_eq!(from_base64_url("").unwrap(), b"");
    assert_eq!(from_base64_url_window("abcd", 4, 0).unwrap(), b"");
}

#[test]
fn known_vectors() {
    assert_eq!(from_base64_url("AA").unwrap(), vec![0x00]);
    assert_eq!(from_base64_url("__8").unwrap(), vec![0xFF, 0xFF]);
    assert_eq!(from_base64_url("aGVsbG8gd29ybGQ").unwrap(), b"hello world");
    assert_eq!(from_base64_url("Zg").unwrap(), b"f");
    assert_eq!(from_base64_url("Zm8").unwrap(), b"fo");
    assert_eq!(from_base64_url("Zm9v").unwrap(), b"foo");
}

#[test]
fn rejects_length_one_mod_four() {
    for count in [1, 5, 9, 13] {
        let text = "A".repeat(count);
        assert_eq!(
            from_base64_url(&text),
            Err(Base64UrlError::InvalidLength { count })
        );
    }
}

#[test]
fn rejects_characters_outside_alphabet() {
    for text in ["A=A", "Zm9v!A", "Zm 9v", "Zm9vY===", "é"] {
        assert!(from_base64_url(text).is_err(), "accepted {:?}", text);
    }
    assert_eq!(
        from_base64_url("Zm.v"),
        Err(Base64UrlError::InvalidBase64Sequence)
    );
}

#[test]
fn passes_padded_input_through_to_engine() {
    // Length 0 mod 4 gets no extra padding, so canonical standard padding is accepted.
    assert_eq!(from_base64_url("Zm9vYg==").unwrap(), b"foob");
    assert_eq!(from_base64_url("Zm9vYmE=").unwrap(), b"fooba");
}

#[test]
fn window() {
    let text = "[[aGVsbG8]]";
    assert_eq!(from_base64_url_window(text, 2, 7).unwrap(), b"hello");
    assert_eq!(
        from_base64_url_window(text, 6, 7),
        Err(Base64UrlError::OutOfBounds {
            len: 11,
            offset: 6,
            count: 7
        })
    );
    assert!(from_base64_url_window(text, 12, 0).is_err());
}

#[test]
fn window_does_not_touch_source() {
    let text = String::from("-_8");
    assert_eq!(from_base64_url_window(&text, 0, 3).unwrap(), vec![0xFB, 0xFF]);
    assert_eq!(text, "-_8");
}

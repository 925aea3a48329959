use alloc::{string::String, vec::Vec};

use quickcheck::QuickCheck;

use super::arbitrary::Mangled;
use crate::{Codepoints, Utf8Error, is_valid, validate};

fn tests() -> u64 {
    #[cfg(not(miri))]
    let tests = if is_ci::cached() { 10_000 } else { 1_000 };
    #[cfg(miri)]
    let tests = 10;
    tests
}

/// Property: any Rust string validates, walks to exactly its `chars()`, and
/// re-encodes to the same bytes.
#[test]
fn valid_text_roundtrip_quickcheck() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(text: String) -> bool {
        let mut walk = Codepoints::new(text.as_bytes());
        let decoded: Vec<char> = walk.by_ref().collect();
        let reencoded: String = decoded.iter().collect();

        is_valid(text.as_bytes())
            && walk.is_done()
            && !walk.saw_error()
            && walk == Codepoints::end()
            && decoded == text.chars().collect::<Vec<_>>()
            && reencoded.as_bytes() == text.as_bytes()
    }

    QuickCheck::new()
        .tests(tests())
        .quickcheck(prop as fn(String) -> bool);
}

/// Property: acceptance matches `core::str::from_utf8`, the failure lands in
/// the first invalid sequence std reports, and the walk yields exactly the
/// valid prefix before failing.
#[test]
fn agrees_with_core_validation_quickcheck() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(input: Mangled) -> bool {
        let bytes = &input.0;
        let mut walk = Codepoints::new(bytes);
        let decoded: Vec<char> = walk.by_ref().collect();

        match (core::str::from_utf8(bytes), validate(bytes)) {
            (Ok(text), Ok(())) => {
                !walk.saw_error() && decoded == text.chars().collect::<Vec<_>>()
            }
            (Err(std_err), Err(reason)) => {
                let start = std_err.valid_up_to();
                let Ok(prefix) = core::str::from_utf8(&bytes[..start]) else {
                    return false;
                };
                let truncation_agrees =
                    std_err.error_len().is_some() || reason.kind() == Utf8Error::Truncated;
                (start..=start + 3).contains(&reason.position())
                    && truncation_agrees
                    && walk.saw_error()
                    && walk.error_explanation() == Some(&reason)
                    && decoded == prefix.chars().collect::<Vec<_>>()
            }
            _ => false,
        }
    }

    QuickCheck::new()
        .tests(tests())
        .quickcheck(prop as fn(Mangled) -> bool);
}

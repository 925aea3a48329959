#![no_main]
use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use strict_utf8::{Codepoints, Termination, TextualElements, Utf8Error, validate_range};

#[derive(Debug, Arbitrary)]
struct Input {
    bytes: Vec<u8>,
    // Window into `bytes`, clamped by the library.
    start: u16,
    end: u16,
    // Low bits pick a grouping policy.
    policy: u8,
}

fn keep_going(policy: u8) -> impl FnMut(char) -> bool {
    move |c| match policy % 4 {
        0 => false,
        1 => true,
        2 => ('\u{300}'..='\u{36F}').contains(&c),
        _ => !c.is_ascii(),
    }
}

fuzz_target!(|input: Input| {
    let bytes = input.bytes.as_slice();
    let end = usize::from(input.end).min(bytes.len());
    let start = usize::from(input.start).min(end);
    let window = &bytes[..end];

    // Acceptance must match core, with the failure inside the first bad
    // sequence core reports.
    let ours = validate_range(bytes, start..end);
    match (core::str::from_utf8(&window[start..]), ours) {
        (Ok(_), Ok(())) => {}
        (Err(e), Err(reason)) => {
            let first_bad = start + e.valid_up_to();
            assert!(
                (first_bad..=first_bad + 3).contains(&reason.position()),
                "{reason} vs core {e}"
            );
            if e.error_len().is_none() {
                assert_eq!(reason.kind(), Utf8Error::Truncated);
            }
        }
        (core_result, ours) => panic!("disagreement: core {core_result:?}, ours {ours:?}"),
    }

    // The walk yields exactly core's valid prefix and ends consistently.
    let mut walk = Codepoints::with_range(bytes, start..end);
    let decoded: String = walk.by_ref().collect();
    let valid_prefix = match core::str::from_utf8(&window[start..]) {
        Ok(s) => s,
        Err(e) => core::str::from_utf8(&window[start..start + e.valid_up_to()]).unwrap(),
    };
    assert_eq!(decoded, valid_prefix);
    assert_eq!(walk.saw_error(), ours.is_err());
    assert_eq!(walk.error_explanation().copied(), ours.err());

    // Elements tile the window up to the first failure.
    let mut cursor = start;
    for element in TextualElements::new(&window[start..], keep_going(input.policy)) {
        match element {
            Ok(element) => {
                assert_eq!(element.range.start + start, cursor);
                assert!(!element.range.is_empty());
                cursor = element.range.end + start;
                if let Termination::Failed(_) = element.termination {
                    break;
                }
            }
            Err(_) => break,
        }
    }
    assert_eq!(cursor, start + valid_prefix.len());
});

use alloc::{string::String, vec, vec::Vec};

use crate::{Codepoints, Utf8Error, WalkState};

#[test]
fn construction_decodes_first_scalar() {
    let walk = Codepoints::new("ωx");
    assert_eq!(walk.current(), Some('ω'));
    assert_eq!(walk.state(), WalkState::Positioned('ω'));
    assert_eq!(walk.position(), 2);
    assert!(walk.is_positioned());
}

#[test]
fn empty_walk_is_done_and_equals_end() {
    let walk = Codepoints::new("");
    assert!(walk.is_done());
    assert!(!walk.saw_error());
    assert_eq!(walk.current(), None);
    assert_eq!(walk, Codepoints::end());
    assert_eq!(walk, Codepoints::default());
}

#[test]
fn advance_to_end_is_clean() {
    let mut walk = Codepoints::new("ab");
    assert_eq!(walk.current(), Some('a'));
    walk.advance();
    assert_eq!(walk.current(), Some('b'));
    walk.advance();
    assert_eq!(walk.state(), WalkState::Exhausted);
    assert!(!walk.saw_error());
    assert_eq!(walk.error_explanation(), None);
    assert_eq!(walk, Codepoints::end());

    // Advancing a finished walk is a no-op.
    walk.advance();
    assert_eq!(walk.state(), WalkState::Exhausted);
}

#[test]
fn truncated_tail_fails_at_leading_byte() {
    let mut walk = Codepoints::new(b"a\xE2\x82");
    assert_eq!(walk.next(), Some('a'));
    assert_eq!(walk.next(), None);
    assert!(walk.is_done());
    assert!(walk.saw_error());
    let reason = walk.error_explanation().copied().unwrap();
    assert_eq!(reason.kind(), Utf8Error::Truncated);
    assert_eq!(reason.position(), 1);
    assert_eq!(walk.position(), 1);
}

#[test]
fn first_scalar_failure_is_observable_at_construction() {
    let walk = Codepoints::new(b"\xC0\x80");
    assert!(walk.saw_error());
    assert_eq!(walk.current(), None);
    assert_eq!(
        walk.error_explanation().map(|r| r.kind()),
        Some(Utf8Error::Overlong(0))
    );
}

#[test]
fn failed_and_clean_walks_compare_equal() {
    let failed = Codepoints::new(b"\xFF");
    let clean = Codepoints::new(b"");
    assert_eq!(failed, clean);
    assert_eq!(failed, Codepoints::end());
}

#[test]
fn clones_walk_independently() {
    let text = "héllo";
    let mut walk = Codepoints::new(text);
    walk.advance();
    let snapshot = walk.clone();
    assert_eq!(walk, snapshot);

    walk.advance();
    assert_ne!(walk, snapshot);
    assert_eq!(snapshot.current(), Some('é'));
    assert_eq!(walk.current(), Some('l'));
    assert_eq!(snapshot.collect::<Vec<_>>(), vec!['é', 'l', 'l', 'o']);
}

#[test]
fn equality_needs_the_same_slice() {
    let a = "same".as_bytes();
    let b = String::from("same");
    assert_ne!(Codepoints::new(a), Codepoints::new(b.as_bytes()));
    assert_eq!(Codepoints::new(a), Codepoints::new(a));
}

#[test]
fn walks_over_separate_starts_differ() {
    let buf = "abc".as_bytes();
    let whole = Codepoints::with_range(buf, 0..3);
    let mut tail = Codepoints::with_range(buf, 1..3);
    assert_ne!(whole, tail);
    assert_eq!(tail.next(), Some('b'));
    assert_eq!(tail.start(), 1);
    assert_eq!(tail.bound(), 3);
}

#[test]
fn range_bound_cuts_a_scalar() {
    let buf = "a€b".as_bytes();
    let mut walk = Codepoints::with_range(buf, 0..3);
    assert_eq!(walk.next(), Some('a'));
    assert_eq!(walk.next(), None);
    assert_eq!(
        walk.error_explanation().map(|r| (r.kind(), r.position())),
        Some((Utf8Error::Truncated, 1))
    );
}

#[test]
fn decodes_from_every_representation() {
    let expected = vec!['ç', 'a'];
    assert_eq!(Codepoints::new("ça").collect::<Vec<_>>(), expected);
    assert_eq!(Codepoints::new(b"\xC3\xA7a").collect::<Vec<_>>(), expected);
    assert_eq!(Codepoints::new(c"ça").collect::<Vec<_>>(), expected);
    assert_eq!(
        Codepoints::new(bstr::BStr::new("ça")).collect::<Vec<_>>(),
        expected
    );
    assert_eq!(
        Codepoints::new(&crate::NulTerminated::new(b"\xC3\xA7a\0\xFF")).collect::<Vec<_>>(),
        expected
    );
}

#[test]
fn size_hint_brackets_the_count() {
    let walk = Codepoints::new("añ😀");
    let (lo, hi) = walk.size_hint();
    let count = walk.count();
    assert!(lo <= count);
    assert!(hi.is_some_and(|hi| count <= hi));
    assert_eq!(Codepoints::end().size_hint(), (0, Some(0)));
}

use crate::annotate::{Segment, reconstruct};

/// Validates parser output invariants.
///
/// Asserts that:
/// - Segments are non-empty, ordered and contiguous from 0 to `text.len()`
/// - Each segment's source equals the slice of `text` its span names
/// - Joining all sources reproduces `text`
///
/// # Panics
/// Panics with a descriptive message if any invariant is violated.
pub fn check(text: &str, segments: &[Segment]) {
    let mut expected_start = 0;
    for s in segments {
        let sp = s.span();
        assert!(!sp.is_empty(), "empty segment: {s:?}");
        assert_eq!(
            sp.start, expected_start,
            "segment not contiguous with previous: {s:?}"
        );
        assert!(
            sp.end <= text.len(),
            "segment span out of bounds: {:?} (text len: {})",
            sp,
            text.len()
        );
        assert_eq!(
            &text[sp.start..sp.end],
            s.source(),
            "segment source differs from its span: {s:?}"
        );
        expected_start = sp.end;
    }
    assert_eq!(expected_start, text.len(), "segments stop short of the text end");
    assert_eq!(reconstruct(segments), text, "segments do not round-trip");
}

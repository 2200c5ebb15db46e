use super::{
    matcher::{find_canonical_mentions, find_hashtags, find_legacy_mentions},
    span::Span,
    types::Segment,
};

/// Parses raw post or comment text into an ordered list of [`Segment`]s.
///
/// # Precedence
/// Canonical mentions are matched first and claim their text; hashtags
/// starting inside a claimed span are dropped. The remaining gaps are then
/// scanned one at a time for legacy `@Name` mentions.
///
/// # Returns
/// Segments covering the entire input, in order, with no overlaps. Text
/// between markup is emitted as [`Segment::Text`]. Empty input yields no
/// segments.
pub fn parse_segments(text: &str) -> Vec<Segment> {
    let mentions = find_canonical_mentions(text);
    let claimed: Vec<Span> = mentions.iter().map(|m| m.span).collect();
    let hashtags = find_hashtags(text, &claimed);

    let mut spans: Vec<Segment> = mentions
        .into_iter()
        .map(Segment::Mention)
        .chain(hashtags.into_iter().map(Segment::Hashtag))
        .collect();
    spans.sort_by_key(|s| s.span().start);

    let mut out = Vec::with_capacity(spans.len() * 2 + 1);
    let mut gap_start = 0;

    for segment in spans {
        let sp = segment.span();
        debug_assert!(sp.start >= gap_start, "overlapping markup spans at {sp:?}");
        push_gap(&mut out, text, gap_start, sp.start);
        gap_start = sp.end;
        out.push(segment);
    }
    push_gap(&mut out, text, gap_start, text.len());

    log::trace!("parsed {} bytes into {} segments", text.len(), out.len());
    out
}

/// Emits the uncovered range `[start, end)` as text, split around any
/// legacy mentions found inside it.
fn push_gap(out: &mut Vec<Segment>, text: &str, start: usize, end: usize) {
    if end <= start {
        return;
    }

    let mut text_start = start;
    for mention in find_legacy_mentions(&text[start..end], start) {
        flush_text(out, text, text_start, mention.span.start);
        text_start = mention.span.end;
        out.push(Segment::Mention(mention));
    }
    flush_text(out, text, text_start, end);
}

fn flush_text(out: &mut Vec<Segment>, text: &str, start: usize, end: usize) {
    if end > start {
        out.push(Segment::Text {
            span: Span { start, end },
            content: text[start..end].to_string(),
        });
    }
}

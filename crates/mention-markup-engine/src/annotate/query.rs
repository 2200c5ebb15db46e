//! Cheap questions about a text that don't need the full segment list.

use std::collections::HashSet;

use super::{
    kinds::{CanonicalMentionSyntax, HashtagSyntax, LegacyMentionSyntax, MentionTarget},
    matcher::{find_canonical_mentions, find_hashtags},
    parser::parse_segments,
    span::Span,
    types::Segment,
};

fn canonical_spans(text: &str) -> Vec<Span> {
    CanonicalMentionSyntax::regex()
        .find_iter(text)
        .map(Span::from)
        .collect()
}

/// True if `text` holds any canonical or legacy mention.
pub fn has_mentions(text: &str) -> bool {
    CanonicalMentionSyntax::regex().is_match(text) || LegacyMentionSyntax::regex().is_match(text)
}

/// True if `text` holds a hashtag outside every canonical mention.
pub fn has_hashtags(text: &str) -> bool {
    let mut tags = HashtagSyntax::regex().find_iter(text).peekable();
    if tags.peek().is_none() {
        return false;
    }
    let claimed = canonical_spans(text);
    tags.any(|m| !claimed.iter().any(|sp| sp.contains(m.start())))
}

/// True if rendering `text` would produce anything but plain text.
pub fn has_markup(text: &str) -> bool {
    has_mentions(text) || has_hashtags(text)
}

/// Hashtags in first-seen order, without the `#`.
///
/// Duplicates are detected case-insensitively; the first spelling wins.
pub fn extract_hashtags(text: &str) -> Vec<String> {
    let claimed = canonical_spans(text);
    let mut seen = HashSet::new();
    find_hashtags(text, &claimed)
        .into_iter()
        .filter(|h| seen.insert(h.normalized()))
        .map(|h| h.tag)
        .collect()
}

/// Resolved mention targets in first-seen order, each listed once.
///
/// These are the entities to notify when a post is published.
pub fn extract_mention_targets(text: &str) -> Vec<MentionTarget> {
    let mut seen = HashSet::new();
    find_canonical_mentions(text)
        .iter()
        .filter_map(|m| m.target())
        .filter(|t| seen.insert(t.clone()))
        .collect()
}

/// Renders markup as readable plain text.
///
/// Canonical mentions collapse to `@Display Name`; everything else is kept
/// as written. Used for notification previews.
pub fn to_plain_text(text: &str) -> String {
    parse_segments(text)
        .iter()
        .map(|segment| match segment {
            Segment::Mention(m) if !m.is_legacy() => format!("@{}", m.display_name),
            other => other.source().to_string(),
        })
        .collect()
}

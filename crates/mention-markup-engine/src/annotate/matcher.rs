use super::{
    kinds::{CanonicalMentionSyntax, HashtagSyntax, LegacyMentionSyntax, MentionType},
    span::Span,
    types::{Hashtag, Mention},
};

/// Finds every canonical `@[Name](type:id)` mention, left to right.
///
/// An unrecognised type tag still claims the text, but the mention is left
/// unresolved (`mention_type: None`).
pub fn find_canonical_mentions(text: &str) -> Vec<Mention> {
    CanonicalMentionSyntax::regex()
        .captures_iter(text)
        .filter_map(|cap| {
            let full = cap.get(0)?;
            let name = cap.get(1)?;
            let tag = cap.get(2)?;
            let id = cap.get(3)?;

            let mention_type = match tag.as_str().parse::<MentionType>() {
                Ok(t) => Some(t),
                Err(e) => {
                    log::debug!("{e}; leaving mention at {} unresolved", full.start());
                    None
                }
            };

            Some(Mention {
                span: full.into(),
                raw: full.as_str().to_string(),
                display_name: name.as_str().to_string(),
                mention_type,
                mention_id: Some(id.as_str().to_string()),
            })
        })
        .collect()
}

/// Finds every `#tag`, dropping those that start inside a `claimed` span.
///
/// `claimed` holds the canonical mention spans, so `@[Team #1](group:7)`
/// never yields a stray `#1`.
pub fn find_hashtags(text: &str, claimed: &[Span]) -> Vec<Hashtag> {
    HashtagSyntax::regex()
        .captures_iter(text)
        .filter_map(|cap| {
            let full = cap.get(0)?;
            let tag = cap.get(1)?;
            if claimed.iter().any(|sp| sp.contains(full.start())) {
                return None;
            }
            Some(Hashtag {
                span: full.into(),
                raw: full.as_str().to_string(),
                tag: tag.as_str().to_string(),
            })
        })
        .collect()
}

/// Finds legacy `@Name` mentions inside a single uncovered gap.
///
/// `base` is the gap's byte offset in the full text; returned spans are
/// absolute. Matching is confined to `gap`, so a name can never run across
/// a claimed span into the next gap.
pub fn find_legacy_mentions(gap: &str, base: usize) -> Vec<Mention> {
    LegacyMentionSyntax::regex()
        .captures_iter(gap)
        .filter_map(|cap| {
            let full = cap.get(0)?;
            let name = cap.get(1)?;
            Some(Mention {
                span: Span::from(full).shifted(base),
                raw: full.as_str().to_string(),
                display_name: name.as_str().to_string(),
                mention_type: None,
                mention_id: None,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_mentions_carry_type_and_id() {
        let found = find_canonical_mentions("Hei @[Ola Nordmann](user:42)!");
        assert_eq!(found.len(), 1);
        let m = &found[0];
        assert_eq!(m.span, Span::new(4, 28));
        assert_eq!(m.raw, "@[Ola Nordmann](user:42)");
        assert_eq!(m.display_name, "Ola Nordmann");
        assert_eq!(m.mention_type, Some(MentionType::User));
        assert_eq!(m.mention_id.as_deref(), Some("42"));
    }

    #[test]
    fn canonical_mention_with_unknown_type_is_unresolved() {
        let found = find_canonical_mentions("@[Festival](event:99)");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].mention_type, None);
        assert_eq!(found[0].mention_id.as_deref(), Some("99"));
        assert!(!found[0].is_resolved());
    }

    #[test]
    fn incomplete_canonical_markup_is_ignored() {
        assert!(find_canonical_mentions("@[Ola](user42)").is_empty());
        assert!(find_canonical_mentions("@[](user:1)").is_empty());
        assert!(find_canonical_mentions("@[Ola](user:)").is_empty());
        assert!(find_canonical_mentions("@[Ola](user:1").is_empty());
    }

    #[test]
    fn hashtags_inside_claimed_spans_are_dropped() {
        let text = "@[Team #1](group:7) #ok";
        let claimed: Vec<Span> = find_canonical_mentions(text)
            .iter()
            .map(|m| m.span)
            .collect();
        let tags = find_hashtags(text, &claimed);
        assert_eq!(tags.len(), 1);
        assert_eq!(tags[0].tag, "ok");
        assert_eq!(tags[0].span, Span::new(20, 23));
    }

    #[test]
    fn legacy_mentions_are_shifted_by_base() {
        let found = find_legacy_mentions("hei @Ola", 100);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].span, Span::new(104, 108));
        assert_eq!(found[0].display_name, "Ola");
        assert!(found[0].is_legacy());
    }

    #[test]
    fn empty_input_finds_nothing() {
        assert!(find_canonical_mentions("").is_empty());
        assert!(find_hashtags("", &[]).is_empty());
        assert!(find_legacy_mentions("", 0).is_empty());
    }

    #[test]
    fn bare_sigils_find_nothing() {
        assert!(find_hashtags("# @ #", &[]).is_empty());
        assert!(find_legacy_mentions("@ 123 @!", 0).is_empty());
    }
}

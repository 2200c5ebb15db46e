use serde::Serialize;

use super::{
    kinds::{MentionTarget, MentionType},
    span::Span,
};

/// A mention span, canonical (`@[Name](type:id)`) or legacy (`@Name`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Mention {
    pub span: Span,
    /// The matched source text, markup included.
    pub raw: String,
    pub display_name: String,
    /// `None` for legacy mentions and for canonical mentions with an
    /// unrecognised type tag.
    pub mention_type: Option<MentionType>,
    /// `None` for legacy mentions.
    pub mention_id: Option<String>,
}

impl Mention {
    /// The entity this mention opens, if both type and id are known.
    pub fn target(&self) -> Option<MentionTarget> {
        match (self.mention_type, &self.mention_id) {
            (Some(mention_type), Some(id)) => Some(MentionTarget::new(mention_type, id.clone())),
            _ => None,
        }
    }

    pub fn is_resolved(&self) -> bool {
        self.mention_type.is_some() && self.mention_id.is_some()
    }

    /// True for bare `@Name` mentions, which never carry an id.
    pub fn is_legacy(&self) -> bool {
        self.mention_id.is_none()
    }
}

/// A `#tag` span.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Hashtag {
    pub span: Span,
    pub raw: String,
    /// The tag as written, without the leading `#`.
    pub tag: String,
}

impl Hashtag {
    /// Lower-cased tag, the key hashtag listings are stored under.
    pub fn normalized(&self) -> String {
        self.tag.to_lowercase()
    }
}

/// One piece of annotated text.
///
/// A parse produces segments that are ordered, contiguous and cover the
/// input exactly: joining every segment's [`source`](Segment::source)
/// reproduces the original string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind")]
pub enum Segment {
    /// Plain text between markup.
    Text { span: Span, content: String },
    Mention(Mention),
    Hashtag(Hashtag),
}

impl Segment {
    pub fn span(&self) -> Span {
        match self {
            Segment::Text { span, .. } => *span,
            Segment::Mention(m) => m.span,
            Segment::Hashtag(h) => h.span,
        }
    }

    /// The exact source text this segment was cut from.
    pub fn source(&self) -> &str {
        match self {
            Segment::Text { content, .. } => content,
            Segment::Mention(m) => &m.raw,
            Segment::Hashtag(h) => &h.raw,
        }
    }

    pub fn is_markup(&self) -> bool {
        !matches!(self, Segment::Text { .. })
    }
}

/// Joins segment sources back into the original text.
pub fn reconstruct(segments: &[Segment]) -> String {
    segments.iter().map(Segment::source).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mention(mention_type: Option<MentionType>, mention_id: Option<&str>) -> Mention {
        Mention {
            span: Span::new(0, 4),
            raw: "@Ola".into(),
            display_name: "Ola".into(),
            mention_type,
            mention_id: mention_id.map(str::to_string),
        }
    }

    #[test]
    fn target_requires_type_and_id() {
        let m = mention(Some(MentionType::User), Some("42"));
        assert!(m.is_resolved());
        assert_eq!(m.target(), Some(MentionTarget::new(MentionType::User, "42")));

        let unknown_type = mention(None, Some("42"));
        assert!(!unknown_type.is_resolved());
        assert!(!unknown_type.is_legacy());
        assert_eq!(unknown_type.target(), None);

        let legacy = mention(None, None);
        assert!(legacy.is_legacy());
        assert_eq!(legacy.target(), None);
    }

    #[test]
    fn reconstruct_joins_sources() {
        let segments = vec![
            Segment::Text {
                span: Span::new(0, 4),
                content: "Hei ".into(),
            },
            Segment::Hashtag(Hashtag {
                span: Span::new(4, 9),
                raw: "#Sami".into(),
                tag: "Sami".into(),
            }),
        ];
        assert_eq!(reconstruct(&segments), "Hei #Sami");
        assert!(!segments[0].is_markup());
        assert!(segments[1].is_markup());
    }

    #[test]
    fn hashtag_normalized_is_lowercase() {
        let h = Hashtag {
            span: Span::new(0, 7),
            raw: "#SÁPMI".into(),
            tag: "SÁPMI".into(),
        };
        assert_eq!(h.normalized(), "sápmi");
    }
}

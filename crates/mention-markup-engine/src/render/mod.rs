//! # Render Adapter
//!
//! Maps parsed [`Segment`]s to UI-agnostic [`RenderItem`]s with a click
//! contract, so any host (terminal, HTML, native) renders markup the same way.
//!
//! - Resolved mentions become entity buttons that open `(type, id)`.
//! - Legacy or unresolved mentions are styled text with no click target.
//! - Hashtags link to the hashtag listing, keyed by the lower-cased tag.
//! - Plain text passes through unchanged.
//!
//! Clicks are delivered to an [`EntityNavigator`] the host passes in.

pub mod html;
pub mod navigator;

pub use html::render_html;
pub use navigator::{EntityNavigator, EventLog, NavigationEvent, dispatch_open};

use crate::annotate::{MentionTarget, Segment};

pub const DEFAULT_HASHTAG_ROUTE: &str = "/hashtag";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Route prefix for hashtag listings, e.g. `/hashtag`.
    pub hashtag_route: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            hashtag_route: DEFAULT_HASHTAG_ROUTE.to_string(),
        }
    }
}

impl RenderOptions {
    pub fn with_hashtag_route(route: impl Into<String>) -> Self {
        Self {
            hashtag_route: route.into(),
        }
    }

    /// Link to the listing for `tag` (already lower-cased).
    pub fn hashtag_href(&self, tag: &str) -> String {
        format!("{}/{}", self.hashtag_route.trim_end_matches('/'), tag)
    }
}

/// A segment ready for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderItem {
    Plain(String),
    /// A mention that opens an entity when clicked.
    EntityButton { label: String, target: MentionTarget },
    /// A mention with no resolvable entity. Styled, not clickable.
    StyledMention { label: String },
    HashtagLink {
        label: String,
        /// Lower-cased tag, the listing key.
        tag: String,
        href: String,
    },
}

impl RenderItem {
    pub fn label(&self) -> &str {
        match self {
            RenderItem::Plain(text) => text,
            RenderItem::EntityButton { label, .. }
            | RenderItem::StyledMention { label }
            | RenderItem::HashtagLink { label, .. } => label,
        }
    }

    pub fn is_interactive(&self) -> bool {
        matches!(
            self,
            RenderItem::EntityButton { .. } | RenderItem::HashtagLink { .. }
        )
    }

    /// Delivers a click to `nav`. Returns `false` for items with no target.
    pub fn activate(&self, nav: &mut dyn EntityNavigator) -> bool {
        match self {
            RenderItem::EntityButton { target, .. } => {
                dispatch_open(target, nav);
                true
            }
            RenderItem::HashtagLink { tag, .. } => {
                nav.open_hashtag(tag);
                true
            }
            RenderItem::Plain(_) | RenderItem::StyledMention { .. } => false,
        }
    }
}

pub fn render_segment(segment: &Segment, options: &RenderOptions) -> RenderItem {
    match segment {
        Segment::Text { content, .. } => RenderItem::Plain(content.clone()),
        Segment::Mention(m) => {
            let label = format!("@{}", m.display_name);
            match m.target() {
                Some(target) => RenderItem::EntityButton { label, target },
                None => RenderItem::StyledMention { label },
            }
        }
        Segment::Hashtag(h) => {
            let tag = h.normalized();
            RenderItem::HashtagLink {
                label: h.raw.clone(),
                href: options.hashtag_href(&tag),
                tag,
            }
        }
    }
}

pub fn render_segments(segments: &[Segment], options: &RenderOptions) -> Vec<RenderItem> {
    segments
        .iter()
        .map(|s| render_segment(s, options))
        .collect()
}

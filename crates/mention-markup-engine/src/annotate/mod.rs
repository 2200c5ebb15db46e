//! # Mention and Hashtag Annotation
//!
//! Splits post and comment text into plain text, mentions and hashtags.
//!
//! ## Architecture
//!
//! Parsing is a single pass per grammar over an immutable `&str`. Nothing is
//! cached between calls; the compiled regexes are stateless and shared.
//!
//! 1. Canonical mentions `@[Name](type:id)` are found first and claim their
//!    text.
//! 2. Hashtags `#tag` are found over the whole text; any starting inside a
//!    claimed span is dropped.
//! 3. The uncovered gaps are scanned one by one for legacy `@Name`
//!    mentions, which can never reach into claimed text.
//!
//! ## Modules
//!
//! - **`span`**: `Span` byte ranges into the input
//! - **`kinds`**: syntax types owning delimiters and regexes, plus the
//!   `MentionType` vocabulary
//! - **`types`**: `Segment`, `Mention`, `Hashtag`
//! - **`matcher`**: per-grammar `find_*` functions
//! - **`parser`**: `parse_segments()` main entry point
//! - **`query`**: presence checks and extraction helpers
//!
//! ## Lossless Output
//!
//! Segments cover the input exactly. `reconstruct(&parse_segments(s)) == s`
//! for every `s`.

pub mod kinds;
pub mod matcher;
pub mod parser;
pub mod query;
pub mod span;
pub mod types;

pub use kinds::{MentionTarget, MentionType, UnknownMentionType, format_mention};
pub use parser::parse_segments;
pub use query::{
    extract_hashtags, extract_mention_targets, has_hashtags, has_markup, has_mentions,
    to_plain_text,
};
pub use span::Span;
pub use types::{Hashtag, Mention, Segment, reconstruct};

//! # Markup Kinds
//!
//! Token types that own their delimiters and match patterns. The matcher
//! asks these types for their regexes; it never spells out `@[` or `#`
//! itself.
//!
//! ## Types
//!
//! - **`CanonicalMentionSyntax`**: `@[Name](type:id)`, resolvable to an entity
//! - **`LegacyMentionSyntax`**: `@Name` or `@First Last`, display only
//! - **`HashtagSyntax`**: `#tag`
//! - **`MentionType`** / **`MentionTarget`**: the entity vocabulary a
//!   canonical mention points into

pub mod hashtag;
pub mod mention;

pub use hashtag::HashtagSyntax;
pub use mention::{
    CanonicalMentionSyntax, LegacyMentionSyntax, MentionTarget, MentionType, UnknownMentionType,
    format_mention,
};

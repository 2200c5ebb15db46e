use std::{fmt, str::FromStr, sync::OnceLock};

use regex::Regex;
use serde::{Deserialize, Serialize};

/// The kinds of entity a canonical mention can point at.
///
/// Serialised with the same lower-case tags used inside the markup
/// (`user`, `language_area`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MentionType {
    User,
    Community,
    Place,
    Municipality,
    LanguageArea,
    Group,
}

impl MentionType {
    pub const ALL: [MentionType; 6] = [
        MentionType::User,
        MentionType::Community,
        MentionType::Place,
        MentionType::Municipality,
        MentionType::LanguageArea,
        MentionType::Group,
    ];

    /// The tag written between `(` and `:` in canonical markup.
    pub fn as_str(self) -> &'static str {
        match self {
            MentionType::User => "user",
            MentionType::Community => "community",
            MentionType::Place => "place",
            MentionType::Municipality => "municipality",
            MentionType::LanguageArea => "language_area",
            MentionType::Group => "group",
        }
    }
}

impl fmt::Display for MentionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown mention type: {0}")]
pub struct UnknownMentionType(pub String);

impl FromStr for MentionType {
    type Err = UnknownMentionType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MentionType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| UnknownMentionType(s.to_string()))
    }
}

/// A resolved mention: which entity to open when the mention is clicked.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MentionTarget {
    pub mention_type: MentionType,
    pub id: String,
}

impl MentionTarget {
    pub fn new(mention_type: MentionType, id: impl Into<String>) -> Self {
        Self {
            mention_type,
            id: id.into(),
        }
    }

    /// Builds the canonical `@[Name](type:id)` token for this target.
    pub fn to_markup(&self, display_name: &str) -> String {
        format_mention(display_name, self.mention_type, &self.id)
    }
}

impl fmt::Display for MentionTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.mention_type, self.id)
    }
}

/// Canonical mention syntax: `@[Display Name](type:id)`.
pub struct CanonicalMentionSyntax;

impl CanonicalMentionSyntax {
    pub const OPEN: &'static str = "@[";
    pub const NAME_CLOSE: char = ']';
    pub const TARGET_OPEN: char = '(';
    pub const TYPE_SEPARATOR: char = ':';
    pub const CLOSE: char = ')';

    /// Group 1: display name, group 2: type tag, group 3: id.
    ///
    /// The type tag stops at the first `:`; the id runs to the first `)` and
    /// may itself contain `:`.
    pub fn regex() -> &'static Regex {
        static CANONICAL_MENTION_REGEX: OnceLock<Regex> = OnceLock::new();
        CANONICAL_MENTION_REGEX.get_or_init(|| {
            Regex::new(r"@\[([^\]]+)\]\(([^:]+):([^)]+)\)")
                .expect("Invalid canonical mention regex")
        })
    }
}

/// Legacy mention syntax: `@Name` or `@First Last`.
///
/// Written before canonical markup existed, so it carries no id.
pub struct LegacyMentionSyntax;

impl LegacyMentionSyntax {
    pub const SIGIL: char = '@';

    /// Group 1: one word, or two words separated by a single space.
    pub fn regex() -> &'static Regex {
        static LEGACY_MENTION_REGEX: OnceLock<Regex> = OnceLock::new();
        LEGACY_MENTION_REGEX.get_or_init(|| {
            Regex::new(r"@([A-Za-zæøåÆØÅ]+(?: [A-Za-zæøåÆØÅ]+)?)")
                .expect("Invalid legacy mention regex")
        })
    }
}

/// Formats a canonical mention token.
///
/// `]` cannot appear in a display name and `)` cannot appear in an id, so
/// both are stripped rather than producing markup that parses differently.
pub fn format_mention(display_name: &str, mention_type: MentionType, id: &str) -> String {
    let name: String = display_name
        .chars()
        .filter(|&c| c != CanonicalMentionSyntax::NAME_CLOSE)
        .collect();
    let id: String = id
        .chars()
        .filter(|&c| c != CanonicalMentionSyntax::CLOSE)
        .collect();
    format!(
        "{}{}{}{}{}{}{}{}",
        CanonicalMentionSyntax::OPEN,
        name,
        CanonicalMentionSyntax::NAME_CLOSE,
        CanonicalMentionSyntax::TARGET_OPEN,
        mention_type,
        CanonicalMentionSyntax::TYPE_SEPARATOR,
        id,
        CanonicalMentionSyntax::CLOSE
    )
}

use std::sync::OnceLock;

use regex::Regex;

/// Hashtag syntax: `#` followed by one or more word characters.
///
/// `\w` is Unicode-aware, so æ/ø/å and the Sámi letters (á, č, đ, ŋ, š, ŧ, ž)
/// all count as word characters.
pub struct HashtagSyntax;

impl HashtagSyntax {
    pub const SIGIL: char = '#';

    /// Group 1: the tag without the `#`.
    pub fn regex() -> &'static Regex {
        static HASHTAG_REGEX: OnceLock<Regex> = OnceLock::new();
        HASHTAG_REGEX.get_or_init(|| Regex::new(r"#(\w+)").expect("Invalid hashtag regex"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_nordic_and_sami_letters() {
        let caps = HashtagSyntax::regex().captures("#sápmi_2024").unwrap();
        assert_eq!(&caps[1], "sápmi_2024");

        let caps = HashtagSyntax::regex().captures("#blåbær!").unwrap();
        assert_eq!(&caps[1], "blåbær");
    }

    #[test]
    fn bare_sigil_does_not_match() {
        assert!(!HashtagSyntax::regex().is_match("# heading"));
        assert!(!HashtagSyntax::regex().is_match("#"));
    }
}

use std::fmt::Write;

use crate::annotate::Segment;

/// One line per segment: kind, byte span, then the kind's fields.
///
/// ```text
/// Mention 0..24 user:42 "Ola Nordmann"
/// Text 24..28 " sa "
/// Hashtag 28..32 "hei"
/// ```
///
/// Legacy mentions show `legacy` in place of a target; canonical mentions
/// with an unknown type show `unresolved:<id>`.
pub fn normalize(segments: &[Segment]) -> String {
    let mut out = String::new();
    for s in segments {
        let sp = s.span();
        let _ = match s {
            Segment::Text { content, .. } => {
                writeln!(out, "Text {}..{} {:?}", sp.start, sp.end, content)
            }
            Segment::Mention(m) => {
                let target = match (m.target(), &m.mention_id) {
                    (Some(t), _) => t.to_string(),
                    (None, Some(id)) => format!("unresolved:{id}"),
                    (None, None) => "legacy".to_string(),
                };
                writeln!(
                    out,
                    "Mention {}..{} {} {:?}",
                    sp.start, sp.end, target, m.display_name
                )
            }
            Segment::Hashtag(h) => writeln!(out, "Hashtag {}..{} {:?}", sp.start, sp.end, h.tag),
        };
    }
    out
}

use html_escape::{encode_double_quoted_attribute, encode_text};

use super::{RenderItem, RenderOptions, render_segments};
use crate::annotate::parse_segments;

/// Renders items as an HTML fragment. All user text is escaped.
///
/// Entity buttons carry `data-mention-type` / `data-mention-id` for the
/// host's click handler to pick up.
pub fn render_html(items: &[RenderItem]) -> String {
    let mut out = String::new();
    for item in items {
        match item {
            RenderItem::Plain(text) => out.push_str(&encode_text(text)),
            RenderItem::EntityButton { label, target } => {
                out.push_str(&format!(
                    r#"<button type="button" class="mention" data-mention-type="{}" data-mention-id="{}">{}</button>"#,
                    target.mention_type,
                    encode_double_quoted_attribute(&target.id),
                    encode_text(label)
                ));
            }
            RenderItem::StyledMention { label } => {
                out.push_str(&format!(
                    r#"<span class="mention">{}</span>"#,
                    encode_text(label)
                ));
            }
            RenderItem::HashtagLink { label, href, .. } => {
                out.push_str(&format!(
                    r#"<a class="hashtag" href="{}">{}</a>"#,
                    encode_double_quoted_attribute(href),
                    encode_text(label)
                ));
            }
        }
    }
    out
}

/// Parses and renders `text` in one step.
pub fn render_text_html(text: &str, options: &RenderOptions) -> String {
    render_html(&render_segments(&parse_segments(text), options))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn renders_each_item_kind() {
        let html = render_text_html(
            "@[Kari](user:9) og @Ola: #Sami",
            &RenderOptions::default(),
        );
        assert_eq!(
            html,
            concat!(
                r#"<button type="button" class="mention" data-mention-type="user" data-mention-id="9">@Kari</button>"#,
                " og ",
                r#"<span class="mention">@Ola</span>"#,
                ": ",
                r#"<a class="hashtag" href="/hashtag/sami">#Sami</a>"#,
            )
        );
    }

    #[test]
    fn escapes_user_text() {
        let html = render_text_html("<b>hei</b> & @[<i>](group:1)", &RenderOptions::default());
        assert!(html.starts_with("&lt;b&gt;hei&lt;/b&gt; &amp; "));
        assert!(html.contains(">@&lt;i&gt;</button>"));
        assert!(!html.contains("<b>"));
        assert!(!html.contains("<i>"));
    }

    #[test]
    fn empty_input_renders_nothing() {
        assert_eq!(render_text_html("", &RenderOptions::default()), "");
    }
}

use owo_colors::{OwoColorize, Style};
use replview_present::markup::{self, Tag};

/// Terminal style for one markup tag, layered on top of its parents.
fn apply(style: Style, tag: Tag) -> Style {
    match tag {
        Tag::Object => style,
        Tag::Class => style.blue(),
        Tag::Strong => style.bold(),
        Tag::Number => style.magenta(),
        Tag::String => style.green(),
        Tag::Bool => style.cyan(),
        Tag::Const => style.bright_black(),
    }
}

/// Render color markup for a terminal.
pub fn to_ansi(text: &str) -> String {
    markup::parse(text)
        .into_iter()
        .map(|segment| {
            if segment.tags.is_empty() {
                return segment.text;
            }
            let style = segment.tags.iter().fold(Style::new(), |style, tag| apply(style, *tag));
            segment.text.style(style).to_string()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_untagged_text_is_unchanged() {
        assert_eq!(to_ansi("plain > text"), "plain > text");
    }

    #[test]
    fn test_tags_become_escape_sequences() {
        let rendered = to_ansi("<number>42</number>");
        assert!(rendered.contains("42"));
        assert!(rendered.contains('\u{1b}'));
        assert!(!rendered.contains("<number>"));
    }

    #[test]
    fn test_escapes_are_resolved() {
        let rendered = to_ansi("<object>\\<<class>Foo</class> <strong>#1</strong>></object>");
        assert!(!rendered.contains("\\<"));
        assert!(rendered.contains('<'));
        assert!(rendered.contains("Foo"));
    }
}

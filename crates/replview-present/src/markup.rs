//! Style markup emitted in `Mode::Color`.
//!
//! Styled fragments are wrapped in tags from a fixed vocabulary, e.g.
//! `<number>42</number>`. A literal `<` in text is written as `\<` and a
//! literal backslash as `\\`, so text never parses as a tag. Everything
//! else, including a bare `>`, is plain text.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    /// A whole object reference
    Object,
    /// A class name
    Class,
    /// Emphasis, used for identity tokens
    Strong,
    Number,
    String,
    Bool,
    Const,
}

impl Tag {
    pub const ALL: [Tag; 7] = [
        Tag::Object,
        Tag::Class,
        Tag::Strong,
        Tag::Number,
        Tag::String,
        Tag::Bool,
        Tag::Const,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Tag::Object => "object",
            Tag::Class => "class",
            Tag::Strong => "strong",
            Tag::Number => "number",
            Tag::String => "string",
            Tag::Bool => "bool",
            Tag::Const => "const",
        }
    }

    pub fn from_name(name: &str) -> Option<Tag> {
        Tag::ALL.into_iter().find(|tag| tag.name() == name)
    }
}

/// Wrap already-escaped markup in `tag`.
pub fn wrap(tag: Tag, markup: &str) -> String {
    format!("<{0}>{1}</{0}>", tag.name(), markup)
}

/// Escape plain text for inclusion in markup.
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '\\' | '<') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// A run of text and the tags active over it, outermost first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    pub tags: Vec<Tag>,
}

/// Split markup into styled segments.
///
/// Unknown tags and unmatched closing tags are kept as literal text.
pub fn parse(markup: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut stack: Vec<Tag> = Vec::new();
    let mut text = String::new();
    let mut rest = markup;

    while let Some(c) = rest.chars().next() {
        if c == '\\' && rest[1..].starts_with(['\\', '<']) {
            text.push_str(&rest[1..2]);
            rest = &rest[2..];
            continue;
        }

        if c == '<'
            && let Some((tag, closing, len)) = read_tag(rest)
        {
            if !closing {
                flush(&mut segments, &mut text, &stack);
                stack.push(tag);
                rest = &rest[len..];
                continue;
            }
            if let Some(pos) = stack.iter().rposition(|open| *open == tag) {
                flush(&mut segments, &mut text, &stack);
                stack.truncate(pos);
                rest = &rest[len..];
                continue;
            }
        }

        text.push(c);
        rest = &rest[c.len_utf8()..];
    }

    flush(&mut segments, &mut text, &stack);
    segments
}

/// Remove all tags and unescape, leaving the text a plain terminal shows.
pub fn strip(markup: &str) -> String {
    parse(markup)
        .into_iter()
        .map(|segment| segment.text)
        .collect()
}

fn read_tag(input: &str) -> Option<(Tag, bool, usize)> {
    let end = input.find('>')?;
    let inner = &input[1..end];
    let (closing, name) = match inner.strip_prefix('/') {
        Some(name) => (true, name),
        None => (false, inner),
    };
    Tag::from_name(name).map(|tag| (tag, closing, end + 1))
}

fn flush(segments: &mut Vec<Segment>, text: &mut String, stack: &[Tag]) {
    if !text.is_empty() {
        segments.push(Segment {
            text: std::mem::take(text),
            tags: stack.to_vec(),
        });
    }
}

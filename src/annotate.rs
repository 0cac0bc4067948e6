use std::borrow::Cow;

use crate::options::AnnotationStyle;

/// Boundary comments written around each module body.
#[derive(Copy, Clone)]
pub struct Annotator {
    pub start: fn(&str) -> String,
    pub end: Option<fn(&str) -> String>,
}

impl AnnotationStyle {
    pub fn annotator(self) -> Annotator {
        match self {
            AnnotationStyle::Inline => Annotator {
                start: inline_start,
                end: None,
            },
            AnnotationStyle::Region => Annotator {
                start: region_start,
                end: Some(region_end),
            },
        }
    }
}

fn inline_start(id: &str) -> String {
    format!("// {}", comment_safe(id))
}

fn region_start(id: &str) -> String {
    format!("//#region {}", comment_safe(id))
}

fn region_end(_id: &str) -> String {
    "//#endregion".to_string()
}

/// Keeps an id on a single comment line.
pub fn comment_safe(id: &str) -> Cow<'_, str> {
    if !id.contains(['\n', '\r', '\u{2028}', '\u{2029}']) {
        return Cow::Borrowed(id);
    }
    let mut out = String::with_capacity(id.len() + 2);
    for c in id.chars() {
        match c {
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\u{2028}' => out.push_str("\\u2028"),
            '\u{2029}' => out.push_str("\\u2029"),
            c => out.push(c),
        }
    }
    Cow::Owned(out)
}

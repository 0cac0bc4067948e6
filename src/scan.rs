//! Lightweight scanner for the head of a JavaScript source: the hashbang line
//! and the directive prologue. Nothing past the prologue is tokenized.

use std::borrow::Cow;
use std::ops::Range;

const BOM: char = '\u{feff}';
const LINE_BREAKS: [char; 4] = ['\n', '\r', '\u{2028}', '\u{2029}'];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Directive<'a> {
    /// Raw text between the quotes.
    pub value: &'a str,
    /// Byte range of the whole statement, including the `;` when present.
    pub span: Range<usize>,
}

impl Directive<'_> {
    pub fn is_use_strict(&self) -> bool {
        self.value == "use strict"
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Prologue<'a> {
    pub hashbang: Option<&'a str>,
    pub directives: Vec<Directive<'a>>,
    /// Offset just past the last directive (or the hashbang line).
    pub end: usize,
}

impl Prologue<'_> {
    pub fn has_use_strict(&self) -> bool {
        self.directives.iter().any(Directive::is_use_strict)
    }
}

pub fn parse_prologue(code: &str) -> Prologue<'_> {
    let mut pos = 0;
    if code.starts_with(BOM) {
        pos = BOM.len_utf8();
    }
    let mut hashbang = None;
    if code[pos..].starts_with("#!") {
        let end = line_end(code, pos);
        hashbang = Some(&code[pos..end]);
        pos = end;
    }

    let mut directives = Vec::new();
    let mut end = pos;
    loop {
        let Some(start) = skip_trivia(code, pos) else {
            break;
        };
        let Some(lit_end) = string_literal_end(code, start) else {
            break;
        };
        let Some(stmt_end) = directive_end(code, lit_end) else {
            break;
        };
        directives.push(Directive {
            value: &code[start + 1..lit_end - 1],
            span: start..stmt_end,
        });
        pos = stmt_end;
        end = stmt_end;
    }

    Prologue {
        hashbang,
        directives,
        end,
    }
}

/// Removes every `"use strict"` directive from the prologue of `code`,
/// together with the rest of its line when nothing else is on it.
pub fn strip_strict_directives(code: &str) -> Cow<'_, str> {
    let prologue = parse_prologue(code);
    if !prologue.has_use_strict() {
        return Cow::Borrowed(code);
    }
    let mut out = String::with_capacity(code.len());
    let mut last = 0;
    for d in prologue.directives.iter().filter(|d| d.is_use_strict()) {
        let (cut_to, ate_newline) = consume_line_rest(code, d.span.end);
        let from_line = line_start(code, d.span.start).max(last);
        let indent_only = code[from_line..d.span.start]
            .chars()
            .all(|c| c == ' ' || c == '\t');
        let cut_from = if ate_newline && indent_only {
            from_line
        } else {
            d.span.start
        };
        out.push_str(&code[last..cut_from]);
        last = cut_to;
    }
    out.push_str(&code[last..]);
    Cow::Owned(out)
}

/// True when `text` holds nothing but a hashbang, comments, whitespace and
/// directives, i.e. placing it before a directive keeps that directive in
/// the prologue. A block comment left open is not trivia.
pub fn is_trivia_only(text: &str) -> bool {
    let prologue = parse_prologue(text);
    skip_trivia(text, prologue.end) == Some(text.len())
}

/// Offset of a `/*` that is never closed, looking past string literals and
/// line comments.
pub fn unterminated_comment(text: &str) -> Option<usize> {
    let bytes = text.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'/' if bytes.get(i + 1) == Some(&b'/') => i = line_end(text, i),
            b'/' if bytes.get(i + 1) == Some(&b'*') => match text[i + 2..].find("*/") {
                Some(j) => i += 2 + j + 2,
                None => return Some(i),
            },
            quote @ (b'"' | b'\'' | b'`') => {
                i += 1;
                while i < bytes.len() && bytes[i] != quote {
                    if quote != b'`' && matches!(bytes[i], b'\n' | b'\r') {
                        break;
                    }
                    i += if bytes[i] == b'\\' { 2 } else { 1 };
                }
                i += 1;
            }
            _ => i += 1,
        }
    }
    None
}

/// Whether the leading statements of a module carry `"use strict"`. Scanning
/// stops at the first statement that leaves the prologue.
pub fn statements_use_strict<S: AsRef<str>>(statements: &[S]) -> bool {
    for stmt in statements {
        let s = stmt.as_ref();
        let prologue = parse_prologue(s);
        if prologue.has_use_strict() {
            return true;
        }
        if skip_trivia(s, prologue.end) != Some(s.len()) {
            return false;
        }
    }
    false
}

/// Offset of the first non-trivia character at or after `pos`; `None` when a
/// block comment runs off the end.
fn skip_trivia(code: &str, mut pos: usize) -> Option<usize> {
    loop {
        let rest = &code[pos..];
        let trimmed = rest.trim_start_matches(|c: char| c.is_whitespace() || c == BOM);
        pos += rest.len() - trimmed.len();
        if trimmed.starts_with("//") {
            pos = line_end(code, pos);
        } else if trimmed.starts_with("/*") {
            match trimmed[2..].find("*/") {
                Some(i) => pos += 2 + i + 2,
                None => return None,
            }
        } else {
            return Some(pos);
        }
    }
}

fn line_start(code: &str, pos: usize) -> usize {
    code[..pos]
        .char_indices()
        .rev()
        .find(|&(_, c)| LINE_BREAKS.contains(&c))
        .map_or(0, |(i, c)| i + c.len_utf8())
}

fn line_end(code: &str, from: usize) -> usize {
    code[from..]
        .find(LINE_BREAKS)
        .map_or(code.len(), |i| from + i)
}

/// Offset just past the closing quote of a string literal starting at
/// `start`, or `None` if there is no well-formed literal there.
fn string_literal_end(code: &str, start: usize) -> Option<usize> {
    let mut chars = code[start..].char_indices().peekable();
    let (_, quote) = chars.next()?;
    if quote != '"' && quote != '\'' {
        return None;
    }
    while let Some((i, c)) = chars.next() {
        match c {
            '\\' => {
                if let Some((_, '\r')) = chars.next() {
                    chars.next_if(|&(_, c)| c == '\n');
                }
            }
            '\n' | '\r' => return None,
            c if c == quote => return Some(start + i + c.len_utf8()),
            _ => {}
        }
    }
    None
}

/// Decides whether the literal ending at `lit_end` forms a complete
/// expression statement, and returns the statement's end offset.
fn directive_end(code: &str, lit_end: usize) -> Option<usize> {
    let next = skip_trivia(code, lit_end)?;
    let Some(c) = code[next..].chars().next() else {
        return Some(lit_end);
    };
    match c {
        ';' => Some(next + 1),
        '}' => Some(lit_end),
        c if code[lit_end..next].contains(LINE_BREAKS)
            && (starts_update_operator(&code[next..]) || !continues_expression(c)) =>
        {
            Some(lit_end)
        }
        _ => None,
    }
}

/// `++`/`--` may not follow their operand across a line break, so ASI ends
/// the statement before them.
fn starts_update_operator(rest: &str) -> bool {
    rest.starts_with("++") || rest.starts_with("--")
}

fn continues_expression(c: char) -> bool {
    matches!(
        c,
        '(' | '[' | '.' | '+' | '-' | '*' | '/' | '%' | '=' | ',' | '?' | '<' | '>' | '&' | '|'
            | '^' | '`'
    )
}

/// Skips spaces and tabs after `pos`, then one line break. Returns the new
/// offset and whether a line break was consumed.
fn consume_line_rest(code: &str, pos: usize) -> (usize, bool) {
    let rest = &code[pos..];
    let trimmed = rest.trim_start_matches([' ', '\t']);
    let pos = pos + rest.len() - trimmed.len();
    if trimmed.starts_with("\r\n") {
        (pos + 2, true)
    } else if trimmed.starts_with(LINE_BREAKS) {
        (pos + trimmed.chars().next().map_or(0, char::len_utf8), true)
    } else if trimmed.is_empty() {
        (pos, true)
    } else {
        (pos, false)
    }
}

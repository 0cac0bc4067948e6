use std::borrow::Cow;

use handlebars::Handlebars;
use log::{debug, trace};

use crate::annotate::Annotator;
use crate::banner::{validate_banner, validate_banner_before_directive, validate_footer};
use crate::error::EmitError;
use crate::format::{DirectiveScope, FormatSpec, Wrapper};
use crate::module::Module;
use crate::options::{EmitOptions, OutputFormat, Spacing};
use crate::scan::{is_trivia_only, strip_strict_directives};
use crate::strict::{resolve_directive, DirectivePlan};

const USE_STRICT: &str = "\"use strict\";";

/// Emitted bundle text plus what a writer needs to know about it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bundle {
    pub code: String,
    pub format: OutputFormat,
    /// Module code runs in strict mode, by directive or by format.
    pub strict: bool,
}

impl Bundle {
    pub fn file_extension(&self) -> &'static str {
        FormatSpec::lookup(self.format).map_or("js", |s| s.extension)
    }
}

#[derive(serde::Serialize)]
struct WrapperCtx<'a> {
    name: Option<&'a str>,
}

fn render_wrapper(wrapper: &Wrapper, name: Option<&str>) -> Result<(String, String), EmitError> {
    let mut hbs = Handlebars::new();
    hbs.register_escape_fn(handlebars::no_escape);
    let ctx = WrapperCtx { name };
    let render = |tpl: &str| {
        hbs.render_template(tpl, &ctx)
            .map_err(|e| EmitError::Render(e.to_string()))
    };
    let open = render(wrapper.open)?;
    let close = render(wrapper.close)?;
    Ok((open, close))
}

const RESERVED_WORDS: &[&str] = &[
    "await", "break", "case", "catch", "class", "const", "continue", "debugger", "default",
    "delete", "do", "else", "enum", "export", "extends", "false", "finally", "for", "function",
    "if", "implements", "import", "in", "instanceof", "interface", "let", "new", "null",
    "package", "private", "protected", "public", "return", "static", "super", "switch", "this",
    "throw", "true", "try", "typeof", "var", "void", "while", "with", "yield",
];

/// A name that can be declared with `var`: identifier characters, and not a
/// reserved word in either sloppy or strict code.
pub fn is_identifier(name: &str) -> bool {
    if RESERVED_WORDS.contains(&name) {
        return false;
    }
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$')
}

fn push_line(out: &mut String, text: &str) {
    out.push_str(text);
    if !text.ends_with('\n') {
        out.push('\n');
    }
}

/// Statements to write for `module`, with any `"use strict"` left in its
/// prologue removed.
fn module_body(module: &Module) -> Vec<Cow<'_, str>> {
    let mut in_prologue = true;
    let mut out = Vec::with_capacity(module.statements.len());
    for stmt in &module.statements {
        let stmt = if in_prologue {
            in_prologue = is_trivia_only(stmt);
            strip_strict_directives(stmt)
        } else {
            Cow::Borrowed(stmt.as_str())
        };
        if stmt.trim().is_empty() {
            continue;
        }
        out.push(stmt);
    }
    out
}

/// Assembles the bundle text for `modules` in the given order. Pure: the
/// same inputs always give the same bytes, and every error is reported
/// before any text is produced.
pub fn emit(modules: &[Module], opts: &EmitOptions) -> Result<Bundle, EmitError> {
    let spec = FormatSpec::lookup(opts.format)?;

    let banner = opts.banner.as_deref().filter(|b| !b.is_empty());
    let footer = opts.footer.as_deref().filter(|f| !f.is_empty());
    if let Some(b) = banner {
        validate_banner(b)?;
    }
    if let Some(f) = footer {
        validate_footer(f)?;
    }

    let name = match (&spec.wrapper, opts.name.as_deref()) {
        (Some(_), Some(n)) if !is_identifier(n) => {
            return Err(EmitError::InvalidName(n.to_string()));
        }
        (Some(_), n) => n,
        (None, Some(n)) => {
            debug!("ignoring name {:?}: {} output has no wrapper", n, spec.format);
            None
        }
        (None, None) => None,
    };

    let plan = resolve_directive(spec, opts.strict, modules)?;
    if let (DirectivePlan::Hoist(DirectiveScope::TopLevel), Some(b)) = (plan, banner) {
        validate_banner_before_directive(b)?;
    }

    let wrapper = match &spec.wrapper {
        Some(w) => Some(render_wrapper(w, name)?),
        None => None,
    };
    let padded = opts.spacing.unwrap_or(spec.spacing) == Spacing::Padded;
    let trailing_newline = opts.trailing_newline.unwrap_or(spec.trailing_newline);
    let annotator: Annotator = opts.annotations.annotator();

    let mut out = String::new();

    if let Some(hashbang) = modules.first().and_then(|m| m.hashbang.as_deref()) {
        push_line(&mut out, hashbang);
    }
    for m in modules.iter().skip(1).filter(|m| m.hashbang.is_some()) {
        debug!("dropping hashbang of non-entry module {}", m.id);
    }
    if let Some(b) = banner {
        push_line(&mut out, b);
    }

    if let Some((open, _)) = &wrapper {
        push_line(&mut out, open);
        if padded {
            out.push('\n');
        }
    }

    if let DirectivePlan::Hoist(_) = plan {
        push_line(&mut out, USE_STRICT);
        if padded {
            out.push('\n');
        }
    }

    for (i, module) in modules.iter().enumerate() {
        trace!("emitting module {} ({} statements)", module.id, module.statements.len());
        if padded && i > 0 && annotator.end.is_none() {
            out.push('\n');
        }
        push_line(&mut out, &(annotator.start)(&module.id));
        for stmt in module_body(module) {
            push_line(&mut out, &stmt);
        }
        if let Some(end) = annotator.end {
            if padded {
                out.push('\n');
            }
            push_line(&mut out, &end(&module.id));
        }
    }

    if let Some((_, close)) = &wrapper {
        push_line(&mut out, close);
    }

    match footer {
        Some(f) => {
            out.push_str(f);
            if trailing_newline && !f.ends_with('\n') {
                out.push('\n');
            }
        }
        None if !trailing_newline => {
            let kept = out.trim_end_matches(['\n', '\r']).len();
            out.truncate(kept);
        }
        None => {}
    }

    Ok(Bundle {
        code: out,
        format: spec.format,
        strict: plan.is_strict(),
    })
}

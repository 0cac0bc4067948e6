use crate::error::EmitError;
use crate::options::{OutputFormat, Spacing};

/// Where the hoisted `"use strict"` directive lives for a format.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DirectiveScope {
    /// First statement of the file.
    TopLevel,
    /// First statement inside the wrapper function.
    Wrapper,
    /// Module code is strict by definition; no directive is ever written.
    Implicit,
}

/// Handlebars templates for the text around the module bodies. Both receive
/// `name` (the optional global name).
#[derive(Debug)]
pub struct Wrapper {
    pub open: &'static str,
    pub close: &'static str,
}

#[derive(Debug)]
pub struct FormatSpec {
    pub format: OutputFormat,
    pub wrapper: Option<Wrapper>,
    pub directive_scope: DirectiveScope,
    pub spacing: Spacing,
    pub trailing_newline: bool,
    pub extension: &'static str,
}

const IIFE_OPEN: &str = "{{#if name}}var {{name}} = {{/if}}(function() {";
const IIFE_CLOSE: &str = "})();";

const UMD_OPEN: &str = r#"{{#if name}}(function(global, factory) {
	typeof exports === "object" && typeof module !== "undefined" ? module.exports = factory() : typeof define === "function" && define.amd ? define([], factory) : (global = typeof globalThis !== "undefined" ? globalThis : global || self, global.{{name}} = factory());
})(this, {{else}}(function(factory) {
	typeof define === "function" && define.amd ? define([], factory) : factory();
})({{/if}}function() {"#;
const UMD_CLOSE: &str = "});";

static FORMATS: [FormatSpec; 4] = [
    FormatSpec {
        format: OutputFormat::Iife,
        wrapper: Some(Wrapper {
            open: IIFE_OPEN,
            close: IIFE_CLOSE,
        }),
        directive_scope: DirectiveScope::Wrapper,
        spacing: Spacing::Padded,
        trailing_newline: true,
        extension: "js",
    },
    FormatSpec {
        format: OutputFormat::Cjs,
        wrapper: None,
        directive_scope: DirectiveScope::TopLevel,
        spacing: Spacing::Padded,
        trailing_newline: true,
        extension: "cjs",
    },
    FormatSpec {
        format: OutputFormat::Esm,
        wrapper: None,
        directive_scope: DirectiveScope::Implicit,
        spacing: Spacing::Padded,
        trailing_newline: true,
        extension: "mjs",
    },
    FormatSpec {
        format: OutputFormat::Umd,
        wrapper: Some(Wrapper {
            open: UMD_OPEN,
            close: UMD_CLOSE,
        }),
        directive_scope: DirectiveScope::Wrapper,
        spacing: Spacing::Padded,
        trailing_newline: true,
        extension: "js",
    },
];

impl FormatSpec {
    pub fn lookup(format: OutputFormat) -> Result<&'static FormatSpec, EmitError> {
        FORMATS
            .iter()
            .find(|s| s.format == format)
            .ok_or_else(|| EmitError::UnsupportedFormat(format.to_string()))
    }

    pub fn all() -> &'static [FormatSpec] {
        &FORMATS
    }
}

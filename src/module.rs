use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use glob::glob;
use log::debug;

use crate::scan::{parse_prologue, statements_use_strict, strip_strict_directives};

/// One input file's contribution to the bundle, already resolved and
/// ordered by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Module {
    pub id: String,
    pub statements: Vec<String>,
    /// The original source opened with a `"use strict"` directive.
    pub has_own_strict_directive: bool,
    /// `#!` line the source started with; only the entry module's survives.
    pub hashbang: Option<String>,
}

impl Module {
    pub fn new<I, S>(id: impl Into<String>, statements: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id: id.into(),
            statements: statements.into_iter().map(Into::into).collect(),
            has_own_strict_directive: false,
            hashbang: None,
        }
    }

    pub fn with_strict_directive(mut self, strict: bool) -> Self {
        self.has_own_strict_directive = strict;
        self
    }

    pub fn with_hashbang(mut self, hashbang: impl Into<String>) -> Self {
        self.hashbang = Some(hashbang.into());
        self
    }

    /// Splits raw source into hashbang, strictness and body. The body keeps
    /// every other directive and comment as written.
    pub fn from_source(id: impl Into<String>, source: &str) -> Self {
        let prologue = parse_prologue(source);
        let hashbang = prologue.hashbang.map(str::to_string);
        let strict = prologue.has_use_strict();

        let after_bom = source.strip_prefix('\u{feff}').unwrap_or(source);
        let rest = match prologue.hashbang {
            Some(h) => &after_bom[h.len()..],
            None => after_bom,
        };
        let body = strip_strict_directives(rest);
        let body = trim_leading_blank_lines(&body);

        let statements = if body.trim().is_empty() {
            Vec::new()
        } else {
            vec![body.to_string()]
        };
        Self {
            id: id.into(),
            statements,
            has_own_strict_directive: strict,
            hashbang,
        }
    }

    /// Strict if flagged, or if the statements still open with the directive.
    pub fn requires_strict(&self) -> bool {
        self.has_own_strict_directive || statements_use_strict(&self.statements)
    }
}

fn trim_leading_blank_lines(s: &str) -> &str {
    let mut rest = s;
    loop {
        let Some(nl) = rest.find('\n') else {
            return rest;
        };
        if rest[..nl].trim().is_empty() {
            rest = &rest[nl + 1..];
        } else {
            return rest;
        }
    }
}

/// Module id for `path`: relative to `base` when possible, `/`-separated.
pub fn module_id(path: &Path, base: Option<&Path>) -> String {
    let rel = base.and_then(|b| path.strip_prefix(b).ok()).unwrap_or(path);
    rel.to_string_lossy().replace('\\', "/")
}

fn is_glob(input: &str) -> bool {
    input.contains(['*', '?', '['])
}

/// Loads modules in the order given. Glob patterns expand to their sorted
/// matches; a file reached twice keeps its first position.
pub fn load_modules(inputs: &[String], base: Option<&Path>) -> Result<Vec<Module>> {
    let mut paths: Vec<PathBuf> = Vec::new();
    for input in inputs {
        if is_glob(input) {
            let mut matched: Vec<PathBuf> = glob(input)
                .with_context(|| format!("invalid module pattern: {}", input))?
                .filter_map(|r| r.ok())
                .filter(|p| p.is_file())
                .collect();
            matched.sort();
            if matched.is_empty() {
                debug!("module pattern matched nothing: {}", input);
            }
            paths.extend(matched);
        } else {
            paths.push(PathBuf::from(input));
        }
    }

    let mut seen: HashSet<PathBuf> = HashSet::new();
    let mut out = Vec::new();
    for path in paths {
        if !seen.insert(path.clone()) {
            debug!("skipping duplicate module {}", path.display());
            continue;
        }
        let source = fs::read_to_string(&path)
            .with_context(|| format!("failed to read module: {}", path.display()))?;
        out.push(Module::from_source(module_id(&path, base), &source));
    }
    Ok(out)
}

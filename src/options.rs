use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;

use crate::error::EmitError;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum OutputFormat {
    Iife,
    Cjs,
    #[default]
    Esm,
    Umd,
}

impl OutputFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            OutputFormat::Iife => "iife",
            OutputFormat::Cjs => "cjs",
            OutputFormat::Esm => "esm",
            OutputFormat::Umd => "umd",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = EmitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "iife" => Ok(OutputFormat::Iife),
            "cjs" | "commonjs" => Ok(OutputFormat::Cjs),
            "esm" | "es" | "module" => Ok(OutputFormat::Esm),
            "umd" => Ok(OutputFormat::Umd),
            _ => Err(EmitError::UnsupportedFormat(s.to_string())),
        }
    }
}

/// Whether the bundle carries a `"use strict"` directive.
#[derive(Copy, Clone, Debug, Default, ValueEnum, PartialEq, Eq)]
pub enum StrictMode {
    /// Emit the directive when the modules ask for it.
    #[default]
    Auto,
    Always,
    Never,
}

/// How module boundaries are marked in the output.
#[derive(Copy, Clone, Debug, Default, ValueEnum, PartialEq, Eq)]
pub enum AnnotationStyle {
    /// `// entry.js`
    Inline,
    /// `//#region entry.js` ... `//#endregion`
    #[default]
    Region,
}

/// Blank-line policy around the wrapper opener, the directive and module
/// boundaries. Purely cosmetic, but part of the byte-exact output.
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum Spacing {
    Padded,
    Compact,
}

#[derive(Debug, Clone, Default)]
pub struct EmitOptions {
    pub format: OutputFormat,
    pub banner: Option<String>,
    pub footer: Option<String>,
    pub strict: StrictMode,
    pub annotations: AnnotationStyle,
    /// Overrides the format's default spacing.
    pub spacing: Option<Spacing>,
    /// Overrides the format's default trailing-newline policy.
    pub trailing_newline: Option<bool>,
    /// Global name the iife/umd result is bound to.
    pub name: Option<String>,
}

impl EmitOptions {
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            ..Self::default()
        }
    }
}

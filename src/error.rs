use thiserror::Error;

use crate::options::OutputFormat;

/// Strict-mode requirements that cannot be met without changing what some
/// module means at runtime.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("strict mode is disabled but these modules require \"use strict\": {}", .modules.join(", "))]
    StrictDisabled { modules: Vec<String> },

    #[error(
        "cannot hoist \"use strict\" for {} over sloppy-mode modules: {}",
        .strict.join(", "),
        .sloppy.join(", ")
    )]
    MixedStrictness {
        strict: Vec<String>,
        sloppy: Vec<String>,
    },

    #[error("{format} output is always strict mode; strict = \"never\" cannot be honored")]
    ImplicitStrict { format: OutputFormat },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidBannerError {
    #[error("banner line {line} is a shebang but cannot be the first line of the output")]
    MisplacedShebang { line: usize },

    #[error("footer line {line} is a shebang; a shebang must be the first line of the output")]
    ShebangInFooter { line: usize },

    #[error("banner line {line} opens a block comment that is never closed")]
    UnterminatedComment { line: usize },

    #[error("banner contains statements that would precede the top-level \"use strict\" directive")]
    StatementsBeforeDirective,
}

#[derive(Debug, Error)]
pub enum EmitError {
    #[error(transparent)]
    Format(#[from] FormatError),

    #[error("unsupported output format: {0}")]
    UnsupportedFormat(String),

    #[error(transparent)]
    InvalidBanner(#[from] InvalidBannerError),

    #[error("invalid bundle name {0:?}: expected a non-reserved JavaScript identifier")]
    InvalidName(String),

    #[error("failed to render wrapper template: {0}")]
    Render(String),
}

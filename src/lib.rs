mod annotate;
mod banner;
mod bundle;
mod config;
mod error;
mod format;
mod module;
mod options;
mod scan;
mod strict;

pub use annotate::{comment_safe, Annotator};
pub use banner::{validate_banner, validate_banner_before_directive, validate_footer};
pub use bundle::{emit, is_identifier, Bundle};
pub use config::{
    load_config, load_from_path, parse_choice, resolve_pathbuf, LoadedConfig, OutputConfig,
};
pub use error::{EmitError, FormatError, InvalidBannerError};
pub use format::{DirectiveScope, FormatSpec, Wrapper};
pub use module::{load_modules, module_id, Module};
pub use options::{AnnotationStyle, EmitOptions, OutputFormat, Spacing, StrictMode};
pub use scan::{
    is_trivia_only, parse_prologue, statements_use_strict, strip_strict_directives,
    unterminated_comment, Directive, Prologue,
};
pub use strict::{resolve_directive, DirectivePlan};

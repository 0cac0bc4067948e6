use log::debug;

use crate::error::FormatError;
use crate::format::{DirectiveScope, FormatSpec};
use crate::module::Module;
use crate::options::StrictMode;

/// Outcome of strict-mode resolution for one bundle.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DirectivePlan {
    /// Write a single `"use strict";` at the start of this scope.
    Hoist(DirectiveScope),
    /// The format is strict without a directive.
    Implicit,
    Omit,
}

impl DirectivePlan {
    /// Whether the emitted module code runs in strict mode.
    pub fn is_strict(self) -> bool {
        !matches!(self, DirectivePlan::Omit)
    }
}

fn ids(modules: &[&Module]) -> Vec<String> {
    modules.iter().map(|m| m.id.clone()).collect()
}

pub fn resolve_directive(
    spec: &FormatSpec,
    mode: StrictMode,
    modules: &[Module],
) -> Result<DirectivePlan, FormatError> {
    let (strict, sloppy): (Vec<&Module>, Vec<&Module>) =
        modules.iter().partition(|m| m.requires_strict());

    if spec.directive_scope == DirectiveScope::Implicit {
        if mode == StrictMode::Never {
            return Err(FormatError::ImplicitStrict {
                format: spec.format,
            });
        }
        if !strict.is_empty() {
            debug!(
                "{} output is implicitly strict; dropping {} module directive(s)",
                spec.format,
                strict.len()
            );
        }
        return Ok(DirectivePlan::Implicit);
    }

    match mode {
        StrictMode::Always => Ok(DirectivePlan::Hoist(spec.directive_scope)),
        StrictMode::Never if strict.is_empty() => Ok(DirectivePlan::Omit),
        StrictMode::Never => Err(FormatError::StrictDisabled {
            modules: ids(&strict),
        }),
        StrictMode::Auto if strict.is_empty() => Ok(DirectivePlan::Omit),
        StrictMode::Auto if sloppy.is_empty() => Ok(DirectivePlan::Hoist(spec.directive_scope)),
        StrictMode::Auto => Err(FormatError::MixedStrictness {
            strict: ids(&strict),
            sloppy: ids(&sloppy),
        }),
    }
}

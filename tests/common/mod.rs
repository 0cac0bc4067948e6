#![allow(dead_code)]

use std::path::PathBuf;

use jspack::*;

pub fn manifest_path(rel: &str) -> String {
    let root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    root.join(rel).to_string_lossy().into_owned()
}

pub fn module(id: &str, statements: &[&str]) -> Module {
    Module::new(id, statements.iter().copied())
}

pub fn strict_module(id: &str, statements: &[&str]) -> Module {
    module(id, statements).with_strict_directive(true)
}

/// Two plain modules used across the format tests.
pub fn pair() -> Vec<Module> {
    vec![
        module("a.js", &["const a = 1;"]),
        module("b.js", &["console.log(a);"]),
    ]
}

pub fn options(
    format: OutputFormat,
    strict: StrictMode,
    annotations: AnnotationStyle,
) -> EmitOptions {
    EmitOptions {
        format,
        strict,
        annotations,
        ..EmitOptions::default()
    }
}

pub fn emit_code(modules: &[Module], opts: &EmitOptions) -> String {
    emit(modules, opts).expect("emit").code
}

use jspack::*;

mod common;

#[test]
fn leading_shebang_run_is_accepted() {
    assert_eq!(validate_banner("#! in file\n#! from banner"), Ok(()));
    assert_eq!(validate_banner("#!/usr/bin/env node\n/* MIT */"), Ok(()));
}

#[test]
fn shebang_after_other_lines_is_rejected() {
    assert_eq!(
        validate_banner("/* MIT */\n#!/usr/bin/env node"),
        Err(InvalidBannerError::MisplacedShebang { line: 2 })
    );
}

#[test]
fn footer_cannot_hold_shebang() {
    assert_eq!(
        validate_footer("// end\n#!/bin/sh"),
        Err(InvalidBannerError::ShebangInFooter { line: 2 })
    );
    assert_eq!(validate_footer("// end"), Ok(()));
}

#[test]
fn statements_before_top_level_directive() {
    assert_eq!(
        validate_banner_before_directive("#!/usr/bin/env node\n/*! MIT */\n'use client';"),
        Ok(())
    );
    assert_eq!(
        validate_banner_before_directive("var VERSION = '1.0';"),
        Err(InvalidBannerError::StatementsBeforeDirective)
    );
}

#[test]
fn code_banner_rejected_only_where_it_breaks_the_directive() {
    let modules = common::pair();
    let banner = Some("var VERSION = '1.0';".to_string());

    let cjs = EmitOptions {
        banner: banner.clone(),
        ..common::options(OutputFormat::Cjs, StrictMode::Always, AnnotationStyle::Region)
    };
    assert!(matches!(
        emit(&modules, &cjs),
        Err(EmitError::InvalidBanner(
            InvalidBannerError::StatementsBeforeDirective
        ))
    ));

    let iife = EmitOptions {
        banner: banner.clone(),
        ..common::options(OutputFormat::Iife, StrictMode::Always, AnnotationStyle::Region)
    };
    let code = common::emit_code(&modules, &iife);
    assert!(code.starts_with("var VERSION = '1.0';\n(function() {\n"));

    let sloppy_cjs = EmitOptions {
        banner,
        ..common::options(OutputFormat::Cjs, StrictMode::Auto, AnnotationStyle::Region)
    };
    assert!(emit(&modules, &sloppy_cjs).is_ok());
}

#[test]
fn emit_rejects_misplaced_shebangs() {
    let opts = EmitOptions {
        banner: Some("/* MIT */\n#!/usr/bin/env node".into()),
        ..EmitOptions::new(OutputFormat::Iife)
    };
    let err = emit(&common::pair(), &opts).unwrap_err();
    assert!(matches!(
        err,
        EmitError::InvalidBanner(InvalidBannerError::MisplacedShebang { line: 2 })
    ));

    let opts = EmitOptions {
        footer: Some("#!/usr/bin/env node".into()),
        ..EmitOptions::new(OutputFormat::Cjs)
    };
    assert!(matches!(
        emit(&common::pair(), &opts),
        Err(EmitError::InvalidBanner(InvalidBannerError::ShebangInFooter { line: 1 }))
    ));
}

#[test]
fn banner_gets_line_break_once() {
    let with_newline = EmitOptions {
        banner: Some("/* hi */\n".into()),
        ..EmitOptions::new(OutputFormat::Iife)
    };
    let without = EmitOptions {
        banner: Some("/* hi */".into()),
        ..EmitOptions::new(OutputFormat::Iife)
    };
    let a = common::emit_code(&common::pair(), &with_newline);
    let b = common::emit_code(&common::pair(), &without);
    assert!(a.starts_with("/* hi */\n(function() {"));
    assert_eq!(a, b);
}

#[test]
fn empty_banner_is_ignored() {
    let opts = EmitOptions {
        banner: Some(String::new()),
        ..EmitOptions::new(OutputFormat::Iife)
    };
    assert!(common::emit_code(&common::pair(), &opts).starts_with("(function() {"));
}

#[test]
fn unterminated_comment_in_banner() {
    assert_eq!(
        validate_banner("/* license"),
        Err(InvalidBannerError::UnterminatedComment { line: 1 })
    );
    assert_eq!(
        validate_banner("#!/usr/bin/env node\n/*! MIT */\n/* oops"),
        Err(InvalidBannerError::UnterminatedComment { line: 3 })
    );
    assert_eq!(
        validate_banner_before_directive("/* license"),
        Err(InvalidBannerError::StatementsBeforeDirective)
    );
}

#[test]
fn emit_rejects_open_comment_banner_for_every_format() {
    let modules = vec![common::strict_module("a.js", &["foo();"])];
    for format in [
        OutputFormat::Cjs,
        OutputFormat::Iife,
        OutputFormat::Umd,
        OutputFormat::Esm,
    ] {
        let opts = EmitOptions {
            banner: Some("/* license".into()),
            ..common::options(format, StrictMode::Auto, AnnotationStyle::Region)
        };
        assert!(
            matches!(
                emit(&modules, &opts),
                Err(EmitError::InvalidBanner(
                    InvalidBannerError::UnterminatedComment { line: 1 }
                ))
            ),
            "{format}"
        );
    }
}

#[test]
fn entry_hashbang_stays_ahead_of_banner_shebangs() {
    let modules = vec![common::module("cli.js", &["run();"]).with_hashbang("#!/usr/bin/env node")];
    let opts = EmitOptions {
        banner: Some("#!/usr/bin/env bun".into()),
        ..common::options(OutputFormat::Cjs, StrictMode::Auto, AnnotationStyle::Inline)
    };
    let code = common::emit_code(&modules, &opts);
    assert!(code.starts_with("#!/usr/bin/env node\n#!/usr/bin/env bun\n// cli.js\n"));
}

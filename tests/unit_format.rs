use jspack::*;

#[test]
fn parse_known_formats_and_aliases() {
    assert_eq!("iife".parse::<OutputFormat>().unwrap(), OutputFormat::Iife);
    assert_eq!("CJS".parse::<OutputFormat>().unwrap(), OutputFormat::Cjs);
    assert_eq!("commonjs".parse::<OutputFormat>().unwrap(), OutputFormat::Cjs);
    assert_eq!("es".parse::<OutputFormat>().unwrap(), OutputFormat::Esm);
    assert_eq!("module".parse::<OutputFormat>().unwrap(), OutputFormat::Esm);
    assert_eq!(" umd ".parse::<OutputFormat>().unwrap(), OutputFormat::Umd);
}

#[test]
fn unknown_format_is_unsupported() {
    let err = "amd".parse::<OutputFormat>().unwrap_err();
    assert!(matches!(err, EmitError::UnsupportedFormat(ref f) if f == "amd"));
    assert_eq!(err.to_string(), "unsupported output format: amd");
}

#[test]
fn every_format_has_a_strategy() {
    for format in [
        OutputFormat::Iife,
        OutputFormat::Cjs,
        OutputFormat::Esm,
        OutputFormat::Umd,
    ] {
        let spec = FormatSpec::lookup(format).expect("registered");
        assert_eq!(spec.format, format);
        assert_eq!(format.to_string().parse::<OutputFormat>().unwrap(), format);
    }
    assert_eq!(FormatSpec::all().len(), 4);
}

#[test]
fn wrapper_formats_scope_the_directive_inside() {
    for spec in FormatSpec::all() {
        match spec.directive_scope {
            DirectiveScope::Wrapper => assert!(spec.wrapper.is_some(), "{}", spec.format),
            DirectiveScope::TopLevel | DirectiveScope::Implicit => {
                assert!(spec.wrapper.is_none(), "{}", spec.format)
            }
        }
    }
}

#[test]
fn extension_hints() {
    let ext = |f| FormatSpec::lookup(f).unwrap().extension;
    assert_eq!(ext(OutputFormat::Iife), "js");
    assert_eq!(ext(OutputFormat::Umd), "js");
    assert_eq!(ext(OutputFormat::Cjs), "cjs");
    assert_eq!(ext(OutputFormat::Esm), "mjs");
}

#[test]
fn reserved_word_name_is_rejected() {
    let opts = EmitOptions {
        name: Some("class".into()),
        ..EmitOptions::new(OutputFormat::Iife)
    };
    assert!(matches!(
        emit(&[], &opts),
        Err(EmitError::InvalidName(ref n)) if n == "class"
    ));
}

#[test]
fn names_must_be_identifiers() {
    assert!(is_identifier("MyLib"));
    assert!(is_identifier("$_lib2"));
    assert!(!is_identifier("2lib"));
    assert!(!is_identifier("my-lib"));
    assert!(!is_identifier(""));
    assert!(!is_identifier("class"));
    assert!(!is_identifier("yield"));
    assert!(is_identifier("classy"));

    let opts = EmitOptions {
        name: Some("my-lib".into()),
        ..EmitOptions::new(OutputFormat::Umd)
    };
    assert!(matches!(
        emit(&[], &opts),
        Err(EmitError::InvalidName(ref n)) if n == "my-lib"
    ));
}

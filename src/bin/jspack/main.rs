use std::io::Write;
use std::{fs, path::PathBuf, process::ExitCode};

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use jspack::{
    emit, load_config, load_modules, resolve_pathbuf, AnnotationStyle, OutputFormat, Spacing,
    StrictMode,
};
use log::{debug, info};

/// jspack: JavaScript bundle emitter — CLI
#[derive(Parser, Debug)]
#[command(
    name = "jspack",
    version,
    about = "Concatenate ordered JavaScript modules into an iife/cjs/esm/umd bundle"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Emit a bundle from modules in the order given
    Bundle(BundleCmd),
}

#[derive(Parser, Debug)]
struct BundleCmd {
    /// Module files or glob patterns; the first one is the entry
    #[arg(value_name = "INPUT")]
    inputs: Vec<String>,

    /// Output format: iife, cjs, esm or umd
    #[arg(short = 'f', long)]
    format: Option<String>,

    /// Text written verbatim before the bundle
    #[arg(long, conflicts_with = "banner_file")]
    banner: Option<String>,

    /// File whose contents are used as the banner
    #[arg(long = "banner-file", value_name = "FILE")]
    banner_file: Option<PathBuf>,

    /// Text written verbatim after the bundle
    #[arg(long, conflicts_with = "footer_file")]
    footer: Option<String>,

    /// File whose contents are used as the footer
    #[arg(long = "footer-file", value_name = "FILE")]
    footer_file: Option<PathBuf>,

    /// Strict-mode policy for the hoisted "use strict" directive
    #[arg(long, value_enum)]
    strict: Option<StrictMode>,

    /// Module boundary comments
    #[arg(long, value_enum)]
    annotations: Option<AnnotationStyle>,

    /// Blank-line policy (defaults per format)
    #[arg(long, value_enum)]
    spacing: Option<Spacing>,

    /// Global name for iife/umd output
    #[arg(long)]
    name: Option<String>,

    /// Do not end the bundle with a newline
    #[arg(long = "no-trailing-newline", action = ArgAction::SetTrue, default_value_t = false)]
    no_trailing_newline: bool,

    /// Module ids are written relative to this directory
    #[arg(long, value_name = "DIR")]
    base: Option<PathBuf>,

    /// Output bundle file path (stdout when omitted)
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    output: Option<PathBuf>,

    /// Path to config file; if omitted, auto-discovers jspack.{toml,yaml,yml,json}
    #[arg(long = "config", value_name = "FILE")]
    config: Option<PathBuf>,

    /// Log what the emitter decides (same as RUST_LOG=debug)
    #[arg(long = "diagnostics", action = ArgAction::SetTrue, default_value_t = false)]
    diagnostics: bool,
}

fn main() -> ExitCode {
    match real_main() {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {:#}", err);
            ExitCode::from(1)
        }
    }
}

fn real_main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Bundle(cmd) => run_bundle(cmd),
    }
}

fn init_logging(diagnostics: bool) {
    let default = if diagnostics { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default))
        .format_timestamp(None)
        .init();
}

fn run_bundle(cli: BundleCmd) -> Result<()> {
    init_logging(cli.diagnostics);

    // Effective options: config < env < CLI
    let loaded = load_config(cli.config.as_deref())?;
    let base_dir = loaded.dir.as_deref();
    let mut opts = loaded.cfg.to_emit_options(base_dir)?;

    if let Some(f) = &cli.format {
        opts.format = f.parse::<OutputFormat>()?;
    }
    if let Some(b) = &cli.banner {
        opts.banner = Some(b.clone());
    } else if let Some(p) = &cli.banner_file {
        opts.banner = Some(
            fs::read_to_string(p)
                .with_context(|| format!("failed to read banner: {}", p.display()))?,
        );
    }
    if let Some(f) = &cli.footer {
        opts.footer = Some(f.clone());
    } else if let Some(p) = &cli.footer_file {
        opts.footer = Some(
            fs::read_to_string(p)
                .with_context(|| format!("failed to read footer: {}", p.display()))?,
        );
    }
    if let Some(s) = cli.strict {
        opts.strict = s;
    }
    if let Some(a) = cli.annotations {
        opts.annotations = a;
    }
    if cli.spacing.is_some() {
        opts.spacing = cli.spacing;
    }
    if cli.name.is_some() {
        opts.name = cli.name.clone();
    }
    if cli.no_trailing_newline {
        opts.trailing_newline = Some(false);
    }

    let inputs: Vec<String> = if !cli.inputs.is_empty() {
        cli.inputs.clone()
    } else {
        loaded
            .cfg
            .modules
            .clone()
            .unwrap_or_default()
            .into_iter()
            // resolve relative to config file dir
            .map(|p| resolve_pathbuf(base_dir, &p).to_string_lossy().to_string())
            .collect()
    };
    if inputs.is_empty() {
        anyhow::bail!("no input modules given (pass INPUT or set output.modules in the config)");
    }

    let id_base: Option<PathBuf> = if let Some(b) = &cli.base {
        Some(b.clone())
    } else if let Some(b) = loaded.cfg.base.as_deref() {
        Some(resolve_pathbuf(base_dir, b))
    } else {
        std::env::current_dir().ok()
    };

    let output_path: Option<PathBuf> = if let Some(o) = &cli.output {
        Some(o.clone())
    } else {
        loaded
            .cfg
            .file
            .as_deref()
            .map(|s| resolve_pathbuf(base_dir, s))
    };

    let modules = load_modules(&inputs, id_base.as_deref())?;
    debug!(
        "format={} strict={:?} annotations={:?} modules={}",
        opts.format,
        opts.strict,
        opts.annotations,
        modules.len()
    );

    let bundle = emit(&modules, &opts)?;

    match &output_path {
        Some(out_path) => {
            if let Some(parent) = out_path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(out_path, &bundle.code)
                .with_context(|| format!("failed to write bundle to {}", out_path.display()))?;
            info!(
                "wrote {} ({} bytes, suggested extension .{})",
                out_path.display(),
                bundle.code.len(),
                bundle.file_extension()
            );
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(bundle.code.as_bytes())?;
            stdout.flush()?;
        }
    }

    Ok(())
}

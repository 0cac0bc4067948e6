use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use clap::ValueEnum;
use config as cfg;
use serde::Deserialize;

use crate::options::{AnnotationStyle, EmitOptions, OutputFormat, Spacing, StrictMode};

/// The `[output]` table of a jspack config file. Every key is optional; CLI
/// flags take precedence over whatever is set here.
#[derive(Debug, Default, Deserialize, Clone)]
pub struct OutputConfig {
    pub format: Option<String>,
    pub banner: Option<String>,
    pub footer: Option<String>,
    pub banner_file: Option<String>,
    pub footer_file: Option<String>,
    pub strict: Option<String>,
    pub annotations: Option<String>,
    pub spacing: Option<String>,
    pub name: Option<String>,
    pub trailing_newline: Option<bool>,
    pub modules: Option<Vec<String>>,
    pub file: Option<String>,
    pub base: Option<String>,
}

#[derive(Debug, Default, Deserialize, Clone)]
struct RootConfig {
    pub output: Option<OutputConfig>,
}

pub struct LoadedConfig {
    pub cfg: OutputConfig,
    pub dir: Option<PathBuf>,
}

pub fn load_config(explicit: Option<&Path>) -> Result<LoadedConfig> {
    if let Some(p) = explicit {
        return load_from_path(p);
    }
    let cwd = std::env::current_dir()?;
    let candidates = ["jspack.toml", "jspack.yaml", "jspack.yml", "jspack.json"];
    for name in &candidates {
        let path = cwd.join(name);
        if path.is_file() {
            return load_from_path(&path);
        }
    }
    // No file: the environment alone still applies.
    let conf = cfg::Config::builder().add_source(env_source()).build()?;
    let root = conf
        .try_deserialize::<RootConfig>()
        .context("failed to parse JSPACK_ environment settings")?;
    Ok(LoadedConfig {
        cfg: root.output.unwrap_or_default(),
        dir: None,
    })
}

/// Environment overlay: JSPACK_OUTPUT__FORMAT=iife, JSPACK_OUTPUT__TRAILING_NEWLINE=false
fn env_source() -> cfg::Environment {
    cfg::Environment::with_prefix("JSPACK")
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
}

pub fn load_from_path(path: &Path) -> Result<LoadedConfig> {
    let conf = cfg::Config::builder()
        .add_source(cfg::File::from(path))
        .add_source(env_source())
        .build()?;
    let root = conf
        .try_deserialize::<RootConfig>()
        .with_context(|| format!("failed to parse config at {}", path.display()))?;
    let cfg = root.output.unwrap_or_default();
    let dir = path.parent().map(|p| p.to_path_buf());
    Ok(LoadedConfig { cfg, dir })
}

pub fn resolve_pathbuf(base: Option<&Path>, value: &str) -> PathBuf {
    let p = Path::new(value);
    if p.is_absolute() {
        p.to_path_buf()
    } else if let Some(b) = base {
        b.join(p)
    } else {
        p.to_path_buf()
    }
}

pub fn parse_choice<T: ValueEnum>(key: &str, value: &str) -> Result<T> {
    T::from_str(value.trim(), true).map_err(|_| {
        let allowed: Vec<String> = T::value_variants()
            .iter()
            .filter_map(|v| v.to_possible_value())
            .map(|v| v.get_name().to_string())
            .collect();
        anyhow!(
            "invalid value {:?} for `{}` (expected one of: {})",
            value,
            key,
            allowed.join(", ")
        )
    })
}

/// Reads inline text or, failing that, a file resolved against `dir`.
fn text_or_file(
    inline: &Option<String>,
    file: &Option<String>,
    dir: Option<&Path>,
) -> Result<Option<String>> {
    if let Some(text) = inline {
        return Ok(Some(text.clone()));
    }
    match file {
        Some(f) => {
            let path = resolve_pathbuf(dir, f);
            let text = fs::read_to_string(&path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            Ok(Some(text))
        }
        None => Ok(None),
    }
}

impl OutputConfig {
    /// Typed emitter options; `dir` is the directory of the config file.
    pub fn to_emit_options(&self, dir: Option<&Path>) -> Result<EmitOptions> {
        let format = match self.format.as_deref() {
            Some(f) => f.parse::<OutputFormat>()?,
            None => OutputFormat::default(),
        };
        let strict = match self.strict.as_deref() {
            Some(s) => parse_choice::<StrictMode>("strict", s)?,
            None => StrictMode::default(),
        };
        let annotations = match self.annotations.as_deref() {
            Some(s) => parse_choice::<AnnotationStyle>("annotations", s)?,
            None => AnnotationStyle::default(),
        };
        let spacing = self
            .spacing
            .as_deref()
            .map(|s| parse_choice::<Spacing>("spacing", s))
            .transpose()?;

        Ok(EmitOptions {
            format,
            banner: text_or_file(&self.banner, &self.banner_file, dir)?,
            footer: text_or_file(&self.footer, &self.footer_file, dir)?,
            strict,
            annotations,
            spacing,
            trailing_newline: self.trailing_newline,
            name: self.name.clone(),
        })
    }
}

use anyhow::{Context, Result, bail};
use dtsgen_common::GeneratorConfig;
use std::path::{Path, PathBuf};

use crate::cli::args::CliArgs;

/// Read a generator configuration. Comments and trailing commas are accepted.
pub fn load_config(path: &Path) -> Result<GeneratorConfig> {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file {}", path.display()))?;
    parse_config(&source).with_context(|| format!("failed to parse config file {}", path.display()))
}

pub fn parse_config(source: &str) -> Result<GeneratorConfig> {
    let config: GeneratorConfig = json5::from_str(source)?;
    Ok(config)
}

/// Load the configuration named on the command line and apply CLI overrides.
pub fn resolve_config(args: &CliArgs, cwd: &Path) -> Result<GeneratorConfig> {
    let path = resolve_path(cwd, &args.config);
    let mut config = load_config(&path)?;
    apply_overrides(&mut config, args);

    if config.input.versions.is_empty() {
        bail!("no library versions configured; set input.versions or pass --libVersion");
    }
    if config.input.namespaces.is_empty() {
        bail!("no namespaces configured; set input.namespaces or pass --namespace");
    }
    Ok(config)
}

pub fn apply_overrides(config: &mut GeneratorConfig, args: &CliArgs) {
    if args.local {
        config.local.run_local = true;
    }
    if args.remote {
        config.local.run_local = false;
    }
    if let Some(out_dir) = &args.out_dir {
        config.output.definitions_path = out_dir.to_string_lossy().into_owned();
    }
    if let Some(exports_dir) = &args.exports_dir {
        config.output.exports_path = exports_dir.to_string_lossy().into_owned();
    }
    if !args.versions.is_empty() {
        config.input.versions = args.versions.clone();
    }
    if !args.namespaces.is_empty() {
        config.input.namespaces = args.namespaces.clone();
    }
}

pub fn resolve_path(cwd: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;

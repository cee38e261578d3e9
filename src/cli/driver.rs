use anyhow::{Context, Result};
use dtsgen_common::{ApiDocument, GeneratorConfig};
use dtsgen_emitter::ApiTree;
use std::path::{Path, PathBuf};

use crate::cli::args::CliArgs;
use crate::cli::config::{resolve_config, resolve_path};
use crate::cli::fetch::{ApiFetcher, ApiSource};

/// Output of one namespace at one version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFiles {
    pub declarations: String,
    pub exports: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedNamespace {
    pub namespace: String,
    pub version: String,
    pub declarations_path: PathBuf,
    pub exports_path: PathBuf,
}

#[derive(Debug, Default)]
pub struct GenerationSummary {
    pub generated: Vec<GeneratedNamespace>,
}

pub fn run(args: &CliArgs, cwd: &Path) -> Result<GenerationSummary> {
    let config = resolve_config(args, cwd)?;
    let fetcher = ApiFetcher::new(&config, cwd);
    generate_all(&config, &fetcher, cwd)
}

/// Generate every configured namespace at every configured version.
pub fn generate_all(
    config: &GeneratorConfig,
    source: &dyn ApiSource,
    cwd: &Path,
) -> Result<GenerationSummary> {
    let definitions_root = resolve_path(cwd, Path::new(&config.output.definitions_path));
    let exports_root = resolve_path(cwd, Path::new(&config.output.exports_path));
    let mut summary = GenerationSummary::default();

    for version in &config.input.versions {
        for namespace in &config.input.namespaces {
            let _span = tracing::info_span!("generate", %namespace, %version).entered();

            let api = source
                .load(namespace, version)
                .with_context(|| format!("failed to load API description for {namespace} {version}"))?;
            let files = generate_namespace(&api, config)
                .with_context(|| format!("failed to generate declarations for {namespace} {version}"))?;

            let file_name = format!("{namespace}.d.ts");
            let declarations_path = definitions_root.join(version).join(&file_name);
            let exports_path = exports_root.join(version).join(&file_name);
            write_output(&declarations_path, &files.declarations)?;
            write_output(&exports_path, &files.exports)?;

            tracing::info!(path = %declarations_path.display(), "declarations written");
            summary.generated.push(GeneratedNamespace {
                namespace: namespace.clone(),
                version: version.clone(),
                declarations_path,
                exports_path,
            });
        }
    }

    Ok(summary)
}

/// Build, reconcile and print one API description.
pub fn generate_namespace(api: &ApiDocument, config: &GeneratorConfig) -> Result<GeneratedFiles> {
    let tree = ApiTree::build(api, config)?;
    let reconciled = tree.reconcile();
    Ok(GeneratedFiles {
        declarations: reconciled.emit_declarations()?,
        exports: reconciled.emit_exports(),
    })
}

fn write_output(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    std::fs::write(path, contents).with_context(|| format!("failed to write {}", path.display()))
}

//! API description sources.
//!
//! Remote mode downloads `<apiBaseUrl>/<namespace>/<jsonLocation>` on every
//! run. Local mode reads `<local.path>/<namespace>/<jsonLocation>` and
//! downloads (then caches) the file only when it is missing.

use anyhow::{Context, Result, anyhow};
use dtsgen_common::config::substitute_version;
use dtsgen_common::{ApiDocument, GeneratorConfig};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Where API descriptions come from.
pub trait ApiSource {
    fn load(&self, namespace: &str, version: &str) -> Result<ApiDocument>;
}

/// One HTTP GET returning a JSON body. Non-2xx responses are errors.
pub trait JsonTransport {
    fn get_json(&self, url: &str) -> Result<serde_json::Value>;
}

/// Blocking transport backed by `ureq`.
pub struct UreqTransport;

impl JsonTransport for UreqTransport {
    fn get_json(&self, url: &str) -> Result<serde_json::Value> {
        let mut response = ureq::get(url)
            .call()
            .with_context(|| format!("request to {url} failed"))?;
        let value = response
            .body_mut()
            .read_json::<serde_json::Value>()
            .with_context(|| format!("response from {url} is not JSON"))?;
        Ok(value)
    }
}

pub struct ApiFetcher<'a, T = UreqTransport> {
    config: &'a GeneratorConfig,
    root: PathBuf,
    transport: T,
}

impl<'a> ApiFetcher<'a> {
    /// `root` anchors a relative `local.path`.
    pub fn new(config: &'a GeneratorConfig, root: &Path) -> Self {
        Self::with_transport(config, root, UreqTransport)
    }
}

impl<'a, T: JsonTransport> ApiFetcher<'a, T> {
    pub fn with_transport(config: &'a GeneratorConfig, root: &Path, transport: T) -> Self {
        ApiFetcher {
            config,
            root: root.to_path_buf(),
            transport,
        }
    }

    /// The version marker may appear anywhere in the URL, base included.
    pub fn remote_url(&self, namespace: &str, version: &str) -> String {
        let input = &self.config.input;
        let url = format!(
            "{}/{}/{}",
            input.api_base_url.trim_end_matches('/'),
            namespace,
            input.json_location.trim_start_matches('/')
        );
        substitute_version(&url, version)
    }

    pub fn local_path(&self, namespace: &str, version: &str) -> PathBuf {
        let relative = substitute_version(
            &format!(
                "{}/{}/{}",
                self.config.local.path, namespace, self.config.input.json_location
            ),
            version,
        );

        let mut path = self.root.clone();
        for segment in relative.split('/').filter(|segment| !segment.is_empty()) {
            path.push(segment);
        }
        path
    }

    fn load_local(&self, namespace: &str, version: &str) -> Result<ApiDocument> {
        let path = self.local_path(namespace, version);
        if !path.exists() {
            tracing::info!(path = %path.display(), "local API description missing, downloading");
            let value = self.download(&self.remote_url(namespace, version))?;
            write_cache(&path, &value, &self.config.output.indentation)?;
            return serde_json::from_value(value)
                .with_context(|| format!("invalid API description for {namespace} {version}"));
        }

        tracing::debug!(path = %path.display(), "reading local API description");
        let source = std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let api: ApiDocument = json5::from_str(&source)
            .with_context(|| format!("failed to parse {}", path.display()))?;
        Ok(api)
    }

    fn load_remote(&self, namespace: &str, version: &str) -> Result<ApiDocument> {
        let value = self.download(&self.remote_url(namespace, version))?;
        serde_json::from_value(value)
            .with_context(|| format!("invalid API description for {namespace} {version}"))
    }

    /// GET with `input.retries` additional attempts.
    pub fn download(&self, url: &str) -> Result<serde_json::Value> {
        let attempts = self.config.input.retries.saturating_add(1);
        let mut last_error = None;
        for attempt in 1..=attempts {
            tracing::info!(url, attempt, "fetching API description");
            match self.transport.get_json(url) {
                Ok(value) => return Ok(value),
                Err(err) => {
                    tracing::warn!(url, attempt, error = %err, "fetch failed");
                    last_error = Some(err);
                }
            }
        }
        Err(last_error
            .unwrap_or_else(|| anyhow!("no attempts made"))
            .context(format!("giving up on {url} after {attempts} attempt(s)")))
    }
}

impl<T: JsonTransport> ApiSource for ApiFetcher<'_, T> {
    fn load(&self, namespace: &str, version: &str) -> Result<ApiDocument> {
        if self.config.local.run_local {
            self.load_local(namespace, version)
        } else {
            self.load_remote(namespace, version)
        }
    }
}

/// Pretty-print `value` to `path`, indenting with `indentation`.
pub fn write_cache(path: &Path, value: &serde_json::Value, indentation: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }

    let mut buffer = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(indentation.as_bytes());
    let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
    value
        .serialize(&mut serializer)
        .context("failed to serialize API description")?;

    std::fs::write(path, buffer).with_context(|| format!("failed to write {}", path.display()))
}

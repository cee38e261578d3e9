use clap::Parser;
use std::path::PathBuf;

/// Generate TypeScript declaration files from library API descriptions.
#[derive(Parser, Debug)]
#[command(
    name = "dtsgen",
    version,
    about = "Generate TypeScript declaration files from library API descriptions"
)]
pub struct CliArgs {
    /// Generator configuration file (JSON or JSON5).
    #[arg(short = 'c', long = "config", default_value = "dtsgen.json")]
    pub config: PathBuf,

    /// Read API descriptions from the local cache, downloading missing ones.
    #[arg(long, conflicts_with = "remote")]
    pub local: bool,

    /// Always download API descriptions.
    #[arg(long)]
    pub remote: bool,

    /// Directory for declaration files (overrides `output.definitionsPath`).
    #[arg(long = "outDir", alias = "out-dir")]
    pub out_dir: Option<PathBuf>,

    /// Directory for module export files (overrides `output.exportsPath`).
    #[arg(long = "exportsDir", alias = "exports-dir")]
    pub exports_dir: Option<PathBuf>,

    /// Library version to generate; repeatable. Overrides `input.versions`.
    #[arg(long = "libVersion", alias = "lib-version", value_name = "VERSION")]
    pub versions: Vec<String>,

    /// Namespace to generate; repeatable. Overrides `input.namespaces`.
    #[arg(short = 'n', long = "namespace", value_name = "NAMESPACE")]
    pub namespaces: Vec<String>,

    /// Disable colored output.
    #[arg(long = "noColor", alias = "no-color")]
    pub no_color: bool,
}

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "license-viewr",
    about = "Fetch and format package license details for display",
    version
)]
pub struct Cli {
    /// Import path of the package to show licenses for
    pub path: String,

    /// Resolved module version (e.g. v1.2.3)
    pub version: String,

    /// Module path owning the package [default: the package path]
    #[arg(long)]
    pub module: Option<String>,

    /// Read from a local JSON license store instead of the HTTP backend
    #[arg(long, value_name = "DIR")]
    pub store: Option<PathBuf>,

    /// Override the HTTP backend base URL
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    /// Config file [default: ./.license-viewr/config.toml, fallback ~/.config/license-viewr/config.toml]
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, default_value = "terminal", value_name = "FORMAT")]
    pub format: OutputFormat,

    /// Print only the (type, anchor) header links, not the full sections
    #[arg(long)]
    pub metadata: bool,

    /// Include full license contents in the terminal output
    #[arg(short, long)]
    pub verbose: bool,

    /// Only print the summary line
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(Debug, Clone, clap::ValueEnum)]
pub enum OutputFormat {
    Terminal,
    Json,
}

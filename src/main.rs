//! `license-viewr` — fetch license records for a package version and format
//! them for display.
//!
//! # Flow
//! 1. Parse CLI arguments ([`cli`]).
//! 2. Load data-source config ([`config::load_config`]).
//! 3. Resolve the package coordinate (import path, module path, version).
//! 4. Fetch and transform the license records
//!    ([`details::fetch_package_licenses_details`]).
//! 5. Render the requested output ([`report`], `--format json`,
//!    `--metadata`).

mod anchor;
mod cli;
mod config;
mod datasource;
mod details;
mod models;
mod report;

use std::time::Duration;

use anyhow::Result;
use clap::Parser;

use cli::{Cli, OutputFormat};
use config::load_config;
use datasource::proxy::ProxyDataSource;
use datasource::store::StoreDataSource;
use details::{fetch_package_licenses_details, transform_license_metadata};
use models::PackageCoordinate;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = load_config(cli.config.as_deref())?;

    let pkg = PackageCoordinate {
        module_path: cli.module.clone().unwrap_or_else(|| cli.path.clone()),
        path: cli.path,
        version: cli.version,
    };

    // A local store (flag or config) takes precedence over the HTTP backend
    let store_path = cli.store.or(config.source.store_path);
    let details = match store_path {
        Some(root) => fetch_package_licenses_details(&StoreDataSource::new(root), &pkg).await?,
        None => {
            let base_url = cli.base_url.unwrap_or(config.source.base_url);
            let timeout = Duration::from_secs(config.source.timeout_secs);
            let ds = ProxyDataSource::new(&base_url, timeout)?;
            fetch_package_licenses_details(&ds, &pkg).await?
        }
    };

    if cli.metadata {
        let links = transform_license_metadata(
            details
                .licenses
                .iter()
                .map(|s| s.license.metadata())
                .collect(),
        );
        match cli.format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&links)?),
            OutputFormat::Terminal => {
                for link in &links {
                    println!("{}\t#{}", link.license_type, link.anchor);
                }
            }
        }
        return Ok(());
    }

    match cli.format {
        OutputFormat::Terminal => report::terminal::render(&details, &pkg, cli.verbose, cli.quiet)?,
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&details)?),
    }

    Ok(())
}

//! Data sources that license records are read from.
//!
//! Each implementation exposes a single
//! `get_package_licenses(path, module_path, version)` method that returns
//! the license records for one package version in storage order, or an
//! error when the version is unknown or the backend is unreachable.

use anyhow::Result;

use crate::models::License;

pub mod proxy;
pub mod store;

/// Read-side interface to wherever license records are kept.
pub trait DataSource {
    /// List the license records that apply to the package `path` inside
    /// `module_path` at `version`, in storage order.
    async fn get_package_licenses(
        &self,
        path: &str,
        module_path: &str,
        version: &str,
    ) -> Result<Vec<License>>;
}

use serde::{Deserialize, Serialize};

/// A full license record for one license file in a module's source tree, as
/// computed upstream by the license detection pipeline. Everything here is
/// passed through to display unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct License {
    /// Detected license types for this file (e.g. "MIT", "Apache-2.0").
    #[serde(default)]
    pub types: Vec<String>,
    /// Path of the license file, relative to the module root.
    pub file_path: String,
    /// Full text of the license file.
    #[serde(default)]
    pub contents: String,
}

impl License {
    /// Strip the contents, keeping only the header-level metadata.
    pub fn metadata(&self) -> LicenseMetadata {
        LicenseMetadata {
            types: self.types.clone(),
            file_path: self.file_path.clone(),
        }
    }
}

/// A lighter-weight license record: file path and detected types only,
/// without the license text. This is what package headers work from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LicenseMetadata {
    /// Detected license types for this file.
    #[serde(default)]
    pub types: Vec<String>,
    /// Path of the license file, relative to the module root.
    pub file_path: String,
}

/// The (import path, module path, version) triple identifying a published
/// package version.
#[derive(Debug, Clone)]
pub struct PackageCoordinate {
    /// Import path of the package.
    pub path: String,
    /// Path of the module the package belongs to.
    pub module_path: String,
    /// Resolved module version (e.g. `v1.2.3`).
    pub version: String,
}

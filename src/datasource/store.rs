use std::collections::HashMap;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use serde::Deserialize;

use crate::datasource::DataSource;
use crate::models::License;

/// On-disk document for one module version: license records grouped by the
/// import path of the package they apply to.
#[derive(Debug, Deserialize)]
struct StoreDocument {
    #[serde(default)]
    packages: HashMap<String, Vec<License>>,
}

/// Data source reading license records from a local JSON store.
///
/// The store mirrors the backend's URL layout on disk: the document for a
/// module version lives at `<root>/<module path>/@v/<version>.json`.
pub struct StoreDataSource {
    root: PathBuf,
}

impl StoreDataSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn document_path(&self, module_path: &str, version: &str) -> PathBuf {
        self.root
            .join(module_path)
            .join("@v")
            .join(format!("{}.json", version))
    }
}

impl DataSource for StoreDataSource {
    async fn get_package_licenses(
        &self,
        path: &str,
        module_path: &str,
        version: &str,
    ) -> Result<Vec<License>> {
        let doc_path = self.document_path(module_path, version);
        if !doc_path.exists() {
            bail!("no license data for {}@{}", module_path, version);
        }

        let content = std::fs::read_to_string(&doc_path)
            .with_context(|| format!("reading {}", doc_path.display()))?;
        let doc: StoreDocument = serde_json::from_str(&content)
            .with_context(|| format!("parsing {}", doc_path.display()))?;

        match doc.packages.get(path) {
            Some(licenses) => Ok(licenses.clone()),
            None => bail!("package {} not found in {}@{}", path, module_path, version),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    const DOCUMENT: &str = r#"
    {
        "packages": {
            "github.com/acme/kit/cmd": [
                {"types": ["MIT"], "file_path": "LICENSE", "contents": "MIT text"},
                {"types": ["BSD-3-Clause", "MIT"], "file_path": "vendor/LICENSE", "contents": "vendored text"}
            ]
        }
    }
    "#;

    fn write_document(root: &Path, module_path: &str, version: &str, body: &str) {
        let dir = root.join(module_path).join("@v");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join(format!("{}.json", version)), body).unwrap();
    }

    #[tokio::test]
    async fn test_reads_package_licenses() {
        let dir = tempfile::tempdir().unwrap();
        write_document(dir.path(), "github.com/acme/kit", "v1.2.3", DOCUMENT);

        let ds = StoreDataSource::new(dir.path());
        let licenses = ds
            .get_package_licenses("github.com/acme/kit/cmd", "github.com/acme/kit", "v1.2.3")
            .await
            .unwrap();

        assert_eq!(licenses.len(), 2);
        assert_eq!(licenses[0].file_path, "LICENSE");
        assert_eq!(licenses[1].types, vec!["BSD-3-Clause", "MIT"]);
    }

    #[tokio::test]
    async fn test_missing_version_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let ds = StoreDataSource::new(dir.path());

        let err = ds
            .get_package_licenses("github.com/acme/kit", "github.com/acme/kit", "v9.9.9")
            .await
            .unwrap_err();
        assert!(err.to_string().contains("no license data"));
    }

    #[tokio::test]
    async fn test_unknown_package_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        write_document(dir.path(), "github.com/acme/kit", "v1.2.3", DOCUMENT);

        let ds = StoreDataSource::new(dir.path());
        let err = ds
            .get_package_licenses("github.com/acme/other", "github.com/acme/kit", "v1.2.3")
            .await
            .unwrap_err();
        assert!(err.to_string().contains("not found"));
    }
}

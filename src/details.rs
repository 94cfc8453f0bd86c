use anyhow::Result;
use serde::Serialize;

use crate::anchor::license_anchor;
use crate::datasource::DataSource;
use crate::models::{License, LicenseMetadata, PackageCoordinate};

/// A single license section on the rendered licenses page: the raw record
/// plus the anchor used to deep-link to it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LicenseSection {
    #[serde(flatten)]
    pub license: License,
    pub anchor: String,
}

/// License information for a package or module, in data-source order.
#[derive(Debug, Clone, Serialize)]
pub struct LicensesDetails {
    pub licenses: Vec<LicenseSection>,
}

/// One entry in a package header's license line: a detected license type
/// and the anchor of the section describing it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LicenseMetadataLink {
    pub license_type: String,
    pub anchor: String,
}

/// Fetch license data for the package version identified by `pkg` and
/// return it ready for display.
///
/// Retrieval is delegated entirely to the data source; its errors (not
/// found, connectivity, storage fault) are propagated unchanged.
pub async fn fetch_package_licenses_details(
    ds: &impl DataSource,
    pkg: &PackageCoordinate,
) -> Result<LicensesDetails> {
    let licenses = ds
        .get_package_licenses(&pkg.path, &pkg.module_path, &pkg.version)
        .await?;
    Ok(LicensesDetails {
        licenses: transform_licenses(licenses),
    })
}

/// Expand each record into zero or more display values sharing one anchor
/// computed from the record's file path. Record order is preserved; within
/// a record, whatever order `expand` produces.
fn expand_with_anchor<R, V>(
    records: Vec<R>,
    file_path: impl Fn(&R) -> &str,
    expand: impl Fn(R, &str) -> Vec<V>,
) -> Vec<V> {
    let mut out = Vec::new();
    for record in records {
        let anchor = license_anchor(file_path(&record));
        out.extend(expand(record, &anchor));
    }
    out
}

/// Pair each license record with its section anchor, one-to-one and in
/// order.
pub fn transform_licenses(licenses: Vec<License>) -> Vec<LicenseSection> {
    expand_with_anchor(
        licenses,
        |l| &l.file_path,
        |license, anchor| {
            vec![LicenseSection {
                license,
                anchor: anchor.to_string(),
            }]
        },
    )
}

/// Expand each metadata record into one link per detected type, in the
/// record's type order. Links from one record share its file's anchor; a
/// record with no types contributes no links.
pub fn transform_license_metadata(metadata: Vec<LicenseMetadata>) -> Vec<LicenseMetadataLink> {
    expand_with_anchor(
        metadata,
        |m| &m.file_path,
        |record, anchor| {
            record
                .types
                .into_iter()
                .map(|license_type| LicenseMetadataLink {
                    license_type,
                    anchor: anchor.to_string(),
                })
                .collect()
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::bail;

    fn license(file_path: &str, types: &[&str]) -> License {
        License {
            types: types.iter().map(|t| t.to_string()).collect(),
            file_path: file_path.to_string(),
            contents: format!("text of {}", file_path),
        }
    }

    fn metadata(file_path: &str, types: &[&str]) -> LicenseMetadata {
        LicenseMetadata {
            types: types.iter().map(|t| t.to_string()).collect(),
            file_path: file_path.to_string(),
        }
    }

    fn coordinate() -> PackageCoordinate {
        PackageCoordinate {
            path: "github.com/acme/kit/cmd".to_string(),
            module_path: "github.com/acme/kit".to_string(),
            version: "v1.2.3".to_string(),
        }
    }

    struct StubDataSource {
        licenses: Vec<License>,
    }

    impl DataSource for StubDataSource {
        async fn get_package_licenses(
            &self,
            _path: &str,
            _module_path: &str,
            _version: &str,
        ) -> Result<Vec<License>> {
            Ok(self.licenses.clone())
        }
    }

    struct FailingDataSource;

    impl DataSource for FailingDataSource {
        async fn get_package_licenses(
            &self,
            _path: &str,
            _module_path: &str,
            _version: &str,
        ) -> Result<Vec<License>> {
            bail!("license backend unavailable")
        }
    }

    #[test]
    fn test_transform_licenses_preserves_length_and_order() {
        let input = vec![
            license("LICENSE", &["MIT"]),
            license("vendor/LICENSE", &["BSD-3-Clause", "MIT"]),
            license("docs dir/COPYING", &["GPL-2.0"]),
        ];
        let sections = transform_licenses(input.clone());

        assert_eq!(sections.len(), input.len());
        for (section, original) in sections.iter().zip(&input) {
            assert_eq!(&section.license, original);
            assert_eq!(section.anchor, license_anchor(&original.file_path));
        }
    }

    #[test]
    fn test_transform_licenses_empty_input() {
        assert!(transform_licenses(Vec::new()).is_empty());
    }

    #[test]
    fn test_metadata_expands_one_link_per_type() {
        let links = transform_license_metadata(vec![
            metadata("LICENSE", &["MIT"]),
            metadata("vendor/LICENSE", &["BSD-3-Clause", "MIT"]),
        ]);

        assert_eq!(
            links,
            vec![
                LicenseMetadataLink {
                    license_type: "MIT".to_string(),
                    anchor: "LICENSE".to_string(),
                },
                LicenseMetadataLink {
                    license_type: "BSD-3-Clause".to_string(),
                    anchor: "vendor%2FLICENSE".to_string(),
                },
                LicenseMetadataLink {
                    license_type: "MIT".to_string(),
                    anchor: "vendor%2FLICENSE".to_string(),
                },
            ]
        );
        // The two vendor/LICENSE links share one anchor
        assert_eq!(links[1].anchor, links[2].anchor);
    }

    #[test]
    fn test_metadata_record_without_types_yields_nothing() {
        let links = transform_license_metadata(vec![
            metadata("LICENSE", &[]),
            metadata("COPYING", &["GPL-3.0"]),
        ]);
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].license_type, "GPL-3.0");
        assert_eq!(links[0].anchor, "COPYING");
    }

    #[test]
    fn test_metadata_empty_input() {
        assert!(transform_license_metadata(Vec::new()).is_empty());
    }

    #[tokio::test]
    async fn test_fetch_returns_transformed_records() {
        let records = vec![
            license("LICENSE", &["MIT"]),
            license("vendor/LICENSE", &["BSD-3-Clause"]),
        ];
        let ds = StubDataSource {
            licenses: records.clone(),
        };

        let details = fetch_package_licenses_details(&ds, &coordinate())
            .await
            .unwrap();
        assert_eq!(details.licenses, transform_licenses(records));
    }

    #[tokio::test]
    async fn test_fetch_propagates_data_source_error() {
        let err = fetch_package_licenses_details(&FailingDataSource, &coordinate())
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "license backend unavailable");
    }
}

use std::time::Duration;

use anyhow::{bail, Result};
use reqwest::{Client, StatusCode};
use serde::Deserialize;

use crate::datasource::DataSource;
use crate::models::License;

/// Body of the backend's licenses endpoint.
#[derive(Debug, Deserialize)]
struct LicensesResponse {
    #[serde(default)]
    licenses: Vec<License>,
}

/// Data source backed by an HTTP license backend speaking the module-proxy
/// URL layout.
pub struct ProxyDataSource {
    client: Client,
    base_url: String,
}

impl ProxyDataSource {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }
}

impl DataSource for ProxyDataSource {
    async fn get_package_licenses(
        &self,
        path: &str,
        module_path: &str,
        version: &str,
    ) -> Result<Vec<License>> {
        // Backend endpoint: GET /{module}/@v/{version}/licenses?pkg={path}
        let url = format!(
            "{}/{}/@v/{}/licenses?pkg={}",
            self.base_url,
            module_path,
            version,
            urlencoding::encode(path),
        );

        let response = self
            .client
            .get(&url)
            .header("User-Agent", "license-viewr/0.1.0")
            .header("Accept", "application/json")
            .send()
            .await?;

        if response.status() == StatusCode::NOT_FOUND {
            bail!("no license data for {}@{}", module_path, version);
        }
        if !response.status().is_success() {
            bail!(
                "license backend returned {} for {}",
                response.status(),
                url
            );
        }

        let body: LicensesResponse = response.json().await?;
        Ok(body.licenses)
    }
}

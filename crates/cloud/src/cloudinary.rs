//! Cloudinary implementation of [`AssetHost`].
//!
//! Listing uses the Admin API with HTTP basic auth; rename and destroy use
//! the signed Upload API.

use std::collections::BTreeMap;
use std::time::Duration;

use async_trait::async_trait;
use folio_core::assets::ResourceKind;
use serde::Deserialize;

use crate::config::CloudinaryConfig;
use crate::error::HostError;
use crate::host::{AssetHost, RemoteResource, RenameOptions};
use crate::signing::sign_params;

/// Per-call timeout toward the host.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP client for one Cloudinary account.
pub struct CloudinaryClient {
    client: reqwest::Client,
    config: CloudinaryConfig,
}

#[derive(Debug, Deserialize)]
struct ListResponse {
    #[serde(default)]
    resources: Vec<RemoteResource>,
}

#[derive(Debug, Deserialize)]
struct DestroyResponse {
    result: String,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

impl CloudinaryClient {
    pub fn new(config: CloudinaryConfig) -> Result<Self, HostError> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self { client, config })
    }

    fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/v1_1/{}/{}",
            self.config.api_url, self.config.cloud_name, path
        )
    }

    /// Add `timestamp`, `api_key` and `signature` to a set of parameters.
    fn signed_form(&self, mut params: BTreeMap<&'static str, String>) -> BTreeMap<&'static str, String> {
        params.insert("timestamp", chrono::Utc::now().timestamp().to_string());
        let signature = sign_params(
            &params,
            &self.config.api_secret,
            self.config.signature_algorithm,
        );
        params.insert("api_key", self.config.api_key.clone());
        params.insert("signature", signature);
        params
    }

    /// Map a non-2xx response to [`HostError::Api`], keeping the host's
    /// error message when the body carries one.
    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, HostError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "<unreadable body>".to_string());
        let message = serde_json::from_str::<ErrorEnvelope>(&body)
            .map(|envelope| envelope.error.message)
            .unwrap_or(body);

        Err(HostError::Api {
            status: status.as_u16(),
            message,
        })
    }
}

#[async_trait]
impl AssetHost for CloudinaryClient {
    async fn list_resources(
        &self,
        kind: ResourceKind,
        prefix: &str,
        max_results: u32,
    ) -> Result<Vec<RemoteResource>, HostError> {
        let response = self
            .client
            .get(self.endpoint(&format!("resources/{kind}/upload")))
            .basic_auth(&self.config.api_key, Some(&self.config.api_secret))
            .query(&[("prefix", prefix.to_string()), ("max_results", max_results.to_string())])
            .send()
            .await?;

        let list: ListResponse = Self::ensure_success(response).await?.json().await?;
        tracing::debug!(%kind, prefix, count = list.resources.len(), "Listed remote resources");
        Ok(list.resources)
    }

    async fn rename(
        &self,
        from_id: &str,
        to_id: &str,
        kind: ResourceKind,
        options: RenameOptions,
    ) -> Result<(), HostError> {
        let mut params = BTreeMap::new();
        params.insert("from_public_id", from_id.to_string());
        params.insert("to_public_id", to_id.to_string());
        params.insert("overwrite", options.overwrite.to_string());
        params.insert("invalidate", options.invalidate.to_string());

        let response = self
            .client
            .post(self.endpoint(&format!("{kind}/rename")))
            .form(&self.signed_form(params))
            .send()
            .await?;

        Self::ensure_success(response).await?;
        Ok(())
    }

    async fn destroy(&self, public_id: &str, kind: ResourceKind) -> Result<(), HostError> {
        let mut params = BTreeMap::new();
        params.insert("public_id", public_id.to_string());
        params.insert("invalidate", "true".to_string());

        let response = self
            .client
            .post(self.endpoint(&format!("{kind}/destroy")))
            .form(&self.signed_form(params))
            .send()
            .await?;

        let outcome: DestroyResponse = Self::ensure_success(response).await?.json().await?;
        if outcome.result == "not found" {
            return Err(HostError::NotFound {
                public_id: public_id.to_string(),
            });
        }
        Ok(())
    }
}

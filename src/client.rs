//! HTTP client for the blob sidecar API

use crate::blob::Blob;
use crate::error::{Result, SidecarError};
use crate::reference::BlobRef;
use crate::types::*;
use reqwest::{header, Client, Response, StatusCode};
use std::time::Duration;
use tracing::{debug, info, warn};

/// HTTP client for the blob sidecar API
///
/// # Example
///
/// ```rust,no_run
/// use sidecar_client::{Blob, SidecarClient};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// // Fails unless the sidecar answers its health check
/// let client = SidecarClient::connect("", None).await?;
///
/// let blob_ref = client.submit_blob(&Blob::new(b"hello".to_vec())).await?;
/// let blob = client.get_blob(&blob_ref).await?;
/// assert_eq!(blob.data, b"hello");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct SidecarClient {
    host: String,
    client: Client,
    configuration: Option<ConfigureClientRequest>,
}

impl SidecarClient {
    /// Create a client without contacting the sidecar
    pub fn new(config: SidecarConfig) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder
            .build()
            .map_err(|e| SidecarError::Config(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            host: config.resolved_host(),
            client,
            configuration: config.configuration,
        })
    }

    /// Create a client and probe `/health`.
    ///
    /// An empty `host` means `http://localhost:5888`. The configuration is
    /// only held; it is not pushed to the sidecar.
    pub async fn connect(
        host: &str,
        configuration: Option<ConfigureClientRequest>,
    ) -> Result<Self> {
        Self::connect_with(SidecarConfig {
            host: host.to_string(),
            configuration,
            ..Default::default()
        })
        .await
    }

    /// Same as [`SidecarClient::connect`] with full transport options
    pub async fn connect_with(config: SidecarConfig) -> Result<Self> {
        let client = Self::new(config)?;
        client.health().await?;
        info!(host = %client.host, "Connected to sidecar");
        Ok(client)
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    /// Configuration supplied at construction, if any
    pub fn configuration(&self) -> Option<&ConfigureClientRequest> {
        self.configuration.as_ref()
    }

    // ==================== Sidecar API ====================

    /// Push network and account credentials to the sidecar
    pub async fn configure(&self, request: &ConfigureClientRequest) -> Result<()> {
        let url = format!("{}/configure", self.host);
        debug!(
            account_id = %request.account_id,
            contract_id = %request.contract_id,
            network = %request.network,
            "Configuring sidecar"
        );

        let response = self
            .client
            .put(&url)
            .header(header::CONTENT_TYPE, "application/json")
            .json(request)
            .send()
            .await?;

        self.check_status(response, "configure").await?;
        Ok(())
    }

    /// Push the configuration held since construction
    pub async fn configure_default(&self) -> Result<()> {
        let request = self
            .configuration
            .as_ref()
            .ok_or(SidecarError::MissingConfiguration)?;
        self.configure(request).await
    }

    /// Submit a blob and return the reference the sidecar assigned
    pub async fn submit_blob(&self, blob: &Blob) -> Result<BlobRef> {
        let url = format!("{}/blob", self.host);
        debug!(size = blob.len(), "Submitting blob");

        let response = self
            .client
            .post(&url)
            .header(header::CONTENT_TYPE, "application/json")
            .json(blob)
            .send()
            .await?;

        let response = self.check_status(response, "submit blob").await?;
        let body = response.text().await?;

        // bare hex id, no JSON envelope
        let blob_ref = BlobRef::from_hex(&body).map_err(|e| {
            warn!(body = %body, error = %e, "Sidecar returned an invalid blob reference");
            SidecarError::InvalidResponse(format!("blob reference: {}", e))
        })?;

        info!(transaction_id = %blob_ref, size = blob.len(), "Blob submitted");
        Ok(blob_ref)
    }

    /// Fetch a blob by reference
    pub async fn get_blob(&self, blob_ref: &BlobRef) -> Result<Blob> {
        let url = format!("{}/blob?transaction_id={}", self.host, blob_ref.id());
        debug!(transaction_id = %blob_ref, "Fetching blob");

        let response = self.client.get(&url).send().await?;
        let response = self.check_status(response, "get blob").await?;
        let body = response.text().await?;

        let blob: Blob = serde_json::from_str(&body)
            .map_err(|e| SidecarError::InvalidResponse(format!("blob body: {}", e)))?;

        debug!(transaction_id = %blob_ref, size = blob.len(), "Blob fetched");
        Ok(blob)
    }

    /// Check that the sidecar answers `GET /health` with 200
    pub async fn health(&self) -> Result<()> {
        let url = format!("{}/health", self.host);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| SidecarError::Unreachable(format!("{}: {}", self.host, e)))?;

        if response.status() != StatusCode::OK {
            return Err(SidecarError::Unreachable(format!(
                "health check failed with status {}",
                response.status().as_u16()
            )));
        }

        Ok(())
    }

    // ==================== Helper Methods ====================

    async fn check_status(&self, response: Response, operation: &str) -> Result<Response> {
        if response.status() == StatusCode::OK {
            return Ok(response);
        }

        let status = response.status().as_u16();
        let message = match response.text().await {
            Ok(body) => body,
            Err(e) => {
                warn!(operation, status, error = %e, "Failed to read rejection body");
                String::new()
            }
        };
        debug!(operation, status, message = %message, "Sidecar rejected request");
        Err(SidecarError::RemoteRejected { status, message })
    }
}

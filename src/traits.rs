//! Backend-agnostic data availability interface

use crate::blob::Blob;
use crate::client::SidecarClient;
use crate::error::Result;
use crate::reference::BlobRef;
use async_trait::async_trait;

/// Anything that can store a blob and hand back a reference to it
#[async_trait]
pub trait DataAvailability: Send + Sync {
    /// Submit a blob to the DA layer
    async fn submit(&self, blob: Blob) -> Result<BlobRef>;

    /// Read a blob back by reference
    async fn get(&self, blob_ref: BlobRef) -> Result<Blob>;
}

#[async_trait]
impl DataAvailability for SidecarClient {
    async fn submit(&self, blob: Blob) -> Result<BlobRef> {
        self.submit_blob(&blob).await
    }

    async fn get(&self, blob_ref: BlobRef) -> Result<Blob> {
        self.get_blob(&blob_ref).await
    }
}

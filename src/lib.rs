//! Rust client SDK for the blob sidecar API
//!
//! The sidecar stores opaque blobs and returns a 32-byte transaction id
//! ([`BlobRef`]) that can be posted on a ledger. Binary values travel as
//! lowercase hex in JSON.
//!
//! # Example
//!
//! ```rust,no_run
//! use sidecar_client::{Blob, ConfigureClientRequest, Namespace, Network, SidecarClient};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = SidecarClient::connect("http://localhost:5888", None).await?;
//!
//! client
//!     .configure(
//!         &ConfigureClientRequest::new("me.testnet", "ed25519:...", "blobs.testnet", Network::Testnet)
//!             .with_namespace(Namespace { id: 1, version: 1 }),
//!     )
//!     .await?;
//!
//! let blob_ref = client.submit_blob(&Blob::new(b"payload".to_vec())).await?;
//! println!("submitted {}", blob_ref);
//! # Ok(())
//! # }
//! ```

pub mod blob;
pub mod client;
pub mod error;
pub mod reference;
pub mod traits;
pub mod types;

// Re-export main types
pub use blob::Blob;
pub use client::SidecarClient;
pub use error::{Result, SidecarError};
pub use reference::{BlobRef, TRANSACTION_ID_LEN};
pub use traits::DataAvailability;
pub use types::*;

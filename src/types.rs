//! Types for sidecar client API

use crate::error::{Result, SidecarError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Host used when none is given
pub const DEFAULT_HOST: &str = "http://localhost:5888";

/// Client configuration
#[derive(Debug, Clone)]
pub struct SidecarConfig {
    /// Base URL of the sidecar HTTP API
    pub host: String,
    /// Request timeout in seconds; `None` keeps the transport default
    pub timeout_secs: Option<u64>,
    /// Credentials the client can push with `configure_default`
    pub configuration: Option<ConfigureClientRequest>,
}

impl Default for SidecarConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            timeout_secs: None,
            configuration: None,
        }
    }
}

impl SidecarConfig {
    /// Create config from environment variables
    ///
    /// - `SIDECAR_HOST`: base URL (default: `http://localhost:5888`)
    /// - `SIDECAR_TIMEOUT_SECS`: request timeout (default: none, must be an integer)
    /// - `SIDECAR_CONFIG_PATH`: JSON credentials file to hold as configuration
    pub fn from_env() -> Result<Self> {
        let host = std::env::var("SIDECAR_HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string());

        let timeout_secs = parse_timeout_secs(std::env::var("SIDECAR_TIMEOUT_SECS").ok())?;

        let configuration = match std::env::var("SIDECAR_CONFIG_PATH") {
            Ok(path) => Some(ConfigureClientRequest::from_json_file(path)?),
            Err(_) => None,
        };

        Ok(Self {
            host,
            timeout_secs,
            configuration,
        })
    }

    /// Host with the default applied and any trailing slash removed
    pub fn resolved_host(&self) -> String {
        resolve_host(&self.host)
    }
}

fn parse_timeout_secs(raw: Option<String>) -> Result<Option<u64>> {
    match raw {
        None => Ok(None),
        Some(v) => v.trim().parse::<u64>().map(Some).map_err(|e| {
            SidecarError::Config(format!("SIDECAR_TIMEOUT_SECS={:?}: {}", v, e))
        }),
    }
}

pub(crate) fn resolve_host(host: &str) -> String {
    let host = host.trim().trim_end_matches('/');
    if host.is_empty() {
        DEFAULT_HOST.to_string()
    } else {
        host.to_string()
    }
}

/// Ledger network the sidecar submits to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    Mainnet,
    Testnet,
    Localnet,
}

impl Network {
    pub fn as_str(&self) -> &'static str {
        match self {
            Network::Mainnet => "mainnet",
            Network::Testnet => "testnet",
            Network::Localnet => "localnet",
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Network {
    type Err = SidecarError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "mainnet" => Ok(Network::Mainnet),
            "testnet" => Ok(Network::Testnet),
            "localnet" => Ok(Network::Localnet),
            other => Err(SidecarError::Config(format!("unknown network: {}", other))),
        }
    }
}

/// Blob namespace, registered on the shared blob registry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Namespace {
    pub id: u32,
    pub version: u32,
}

/// Request body for `PUT /configure`
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigureClientRequest {
    /// Signer account id, e.g. "anexamplehere.near"
    pub account_id: String,
    /// ed25519 secret key as exported by the wallet ("ed25519:...")
    pub secret_key: String,
    /// Contract the blobs are submitted to
    pub contract_id: String,
    pub network: Network,
    pub namespace: Option<Namespace>,
    /// Overrides the RPC endpoint the sidecar uses for `network`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rpc_url: Option<String>,
}

impl ConfigureClientRequest {
    pub fn new(
        account_id: impl Into<String>,
        secret_key: impl Into<String>,
        contract_id: impl Into<String>,
        network: Network,
    ) -> Self {
        Self {
            account_id: account_id.into(),
            secret_key: secret_key.into(),
            contract_id: contract_id.into(),
            network,
            namespace: None,
            rpc_url: None,
        }
    }

    pub fn with_namespace(mut self, namespace: Namespace) -> Self {
        self.namespace = Some(namespace);
        self
    }

    pub fn with_rpc_url(mut self, rpc_url: impl Into<String>) -> Self {
        self.rpc_url = Some(rpc_url.into());
        self
    }

    /// Load credentials from a JSON file shaped like the request body
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .map_err(|e| SidecarError::Config(format!("{}: {}", path.display(), e)))?;
        serde_json::from_str(&raw)
            .map_err(|e| SidecarError::Config(format!("{}: {}", path.display(), e)))
    }
}

impl fmt::Debug for ConfigureClientRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfigureClientRequest")
            .field("account_id", &self.account_id)
            .field("secret_key", &"<redacted>")
            .field("contract_id", &self.contract_id)
            .field("network", &self.network)
            .field("namespace", &self.namespace)
            .field("rpc_url", &self.rpc_url)
            .finish()
    }
}

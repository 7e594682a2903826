//! Blob payloads and their hex wire form

use crate::error::Result;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Opaque binary payload
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Blob {
    pub data: Vec<u8>,
}

impl Blob {
    pub fn new(data: impl Into<Vec<u8>>) -> Self {
        Self { data: data.into() }
    }

    /// Decode a payload from hex; the empty string yields an empty blob
    pub fn from_hex(s: &str) -> Result<Self> {
        Ok(Self { data: hex::decode(s)? })
    }

    /// Lowercase hex of the payload
    pub fn to_hex(&self) -> String {
        hex::encode(&self.data)
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn into_inner(self) -> Vec<u8> {
        self.data
    }
}

impl From<Vec<u8>> for Blob {
    fn from(data: Vec<u8>) -> Self {
        Self { data }
    }
}

impl From<&[u8]> for Blob {
    fn from(data: &[u8]) -> Self {
        Self {
            data: data.to_vec(),
        }
    }
}

#[derive(Serialize)]
struct BlobWire<'a> {
    data: &'a str,
}

#[derive(Deserialize)]
struct BlobWireOwned {
    data: String,
}

impl Serialize for Blob {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let data = self.to_hex();
        BlobWire { data: &data }.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Blob {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let wire = BlobWireOwned::deserialize(deserializer)?;
        Blob::from_hex(&wire.data).map_err(serde::de::Error::custom)
    }
}

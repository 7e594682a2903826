//! Blob references returned by the sidecar
//!
//! A reference is the 32-byte transaction id under which the sidecar
//! submitted a blob. On the wire it is always lowercase hex.

use crate::error::{Result, SidecarError};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Size of a transaction id in bytes
pub const TRANSACTION_ID_LEN: usize = 32;

/// Reference to a blob stored by the sidecar
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BlobRef {
    transaction_id: [u8; TRANSACTION_ID_LEN],
}

impl BlobRef {
    /// Build a reference from raw bytes, copying them.
    ///
    /// Fails with `InvalidLength` unless exactly 32 bytes are given.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let transaction_id: [u8; TRANSACTION_ID_LEN] =
            bytes.try_into().map_err(|_| SidecarError::InvalidLength {
                expected: TRANSACTION_ID_LEN,
                actual: bytes.len(),
            })?;
        Ok(Self { transaction_id })
    }

    /// Parse a reference from its hex form
    pub fn from_hex(s: &str) -> Result<Self> {
        let bytes = hex::decode(s)?;
        Self::from_bytes(&bytes)
    }

    /// Lowercase hex of the transaction id (64 chars)
    pub fn id(&self) -> String {
        hex::encode(self.transaction_id)
    }

    pub fn as_bytes(&self) -> &[u8; TRANSACTION_ID_LEN] {
        &self.transaction_id
    }
}

impl From<[u8; TRANSACTION_ID_LEN]> for BlobRef {
    fn from(transaction_id: [u8; TRANSACTION_ID_LEN]) -> Self {
        Self { transaction_id }
    }
}

impl TryFrom<&[u8]> for BlobRef {
    type Error = SidecarError;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        Self::from_bytes(bytes)
    }
}

impl AsRef<[u8]> for BlobRef {
    fn as_ref(&self) -> &[u8] {
        &self.transaction_id
    }
}

impl FromStr for BlobRef {
    type Err = SidecarError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl fmt::Display for BlobRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.id())
    }
}

impl fmt::Debug for BlobRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("BlobRef").field(&self.id()).finish()
    }
}

#[derive(Serialize)]
struct BlobRefWire<'a> {
    transaction_id: &'a str,
}

#[derive(Deserialize)]
struct BlobRefWireOwned {
    transaction_id: String,
}

impl Serialize for BlobRef {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let id = self.id();
        BlobRefWire {
            transaction_id: &id,
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for BlobRef {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let wire = BlobRefWireOwned::deserialize(deserializer)?;
        BlobRef::from_hex(&wire.transaction_id).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KNOWN_ID: &str = "5d0472abe8eef76f9a44a3695d584af4de6e2ddde82dabfa5c8f29e5aec1270d";

    #[test]
    fn test_hex_round_trip() {
        let blob_ref = BlobRef::from_hex(KNOWN_ID).unwrap();
        assert_eq!(blob_ref.id(), KNOWN_ID);
        assert_eq!(blob_ref.to_string(), KNOWN_ID);

        let bytes: [u8; 32] = std::array::from_fn(|i| (i * 7) as u8);
        let decoded = BlobRef::from_hex(&BlobRef::from(bytes).id()).unwrap();
        assert_eq!(decoded.as_bytes(), &bytes);
    }

    #[test]
    fn test_id_is_lowercase_64_chars() {
        let blob_ref = BlobRef::from([0xAB; 32]);
        let id = blob_ref.id();
        assert_eq!(id.len(), 64);
        assert_eq!(id, "ab".repeat(32));
    }

    #[test]
    fn test_from_bytes_rejects_wrong_lengths() {
        for len in [0, 31, 33] {
            let err = BlobRef::from_bytes(&vec![1u8; len]).unwrap_err();
            assert!(matches!(
                err,
                SidecarError::InvalidLength { expected: 32, actual } if actual == len
            ));
        }
    }

    #[test]
    fn test_from_bytes_copies_input() {
        let mut buf = vec![9u8; 32];
        let blob_ref = BlobRef::from_bytes(&buf).unwrap();
        buf[0] = 0;
        assert_eq!(blob_ref.as_bytes()[0], 9);
    }

    #[test]
    fn test_from_bytes_rejects_invalid_transaction_id() {
        let err = BlobRef::from_bytes(b"invalid_transaction_id").unwrap_err();
        assert!(matches!(err, SidecarError::InvalidLength { .. }));
    }

    #[test]
    fn test_from_hex_errors() {
        // odd length
        assert!(matches!(
            BlobRef::from_hex("abc"),
            Err(SidecarError::InvalidEncoding(_))
        ));
        // non-hex characters
        assert!(matches!(
            BlobRef::from_hex(&"zz".repeat(32)),
            Err(SidecarError::InvalidEncoding(_))
        ));
        // valid hex, wrong size
        assert!(matches!(
            BlobRef::from_hex("abcd"),
            Err(SidecarError::InvalidLength { actual: 2, .. })
        ));
    }

    #[test]
    fn test_json_uses_hex_transaction_id() {
        let blob_ref = BlobRef::from_hex(KNOWN_ID).unwrap();
        let json = serde_json::to_value(blob_ref).unwrap();
        assert_eq!(json, serde_json::json!({ "transaction_id": KNOWN_ID }));

        let parsed: BlobRef = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, blob_ref);
    }

    #[test]
    fn test_json_rejects_short_transaction_id() {
        let result: std::result::Result<BlobRef, _> =
            serde_json::from_str(r#"{"transaction_id":"abcd"}"#);
        assert!(result.is_err());
    }
}

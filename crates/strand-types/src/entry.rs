use serde::{Deserialize, Serialize};

use crate::error::TypeError;
use crate::hash::Hash256;
use crate::params::{ENTRY_HEADER_LEN, ENTRY_VERSION};

/// Smallest content-addressed unit in the ledger.
///
/// An entry belongs to one chain, carries an ordered list of external IDs
/// (opaque byte strings, order-significant) and an opaque content blob. Its
/// identity is a digest of the marshaled binary form, recomputed on demand —
/// the hash is never cached on the struct.
///
/// The JSON shape matches the node interface: all byte fields are lowercase
/// hex.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    #[serde(rename = "chainid")]
    pub chain_id: Hash256,
    #[serde(rename = "extids", with = "hex_ext_ids")]
    pub ext_ids: Vec<Vec<u8>>,
    #[serde(with = "hex_bytes")]
    pub content: Vec<u8>,
}

impl Entry {
    /// Create an entry for an existing chain.
    pub fn new(chain_id: Hash256, ext_ids: Vec<Vec<u8>>, content: Vec<u8>) -> Self {
        Self {
            chain_id,
            ext_ids,
            content,
        }
    }

    /// Convenience constructor from string slices.
    pub fn from_strings(chain_id: Hash256, content: &str, ext_ids: &[&str]) -> Self {
        Self {
            chain_id,
            ext_ids: ext_ids.iter().map(|s| s.as_bytes().to_vec()).collect(),
            content: content.as_bytes().to_vec(),
        }
    }

    /// Marshal to the wire layout.
    ///
    /// Layout, big-endian throughout: 1 version byte, 32-byte chain ID, u16
    /// total external-ID section length, then each external ID as a u16
    /// length prefix plus bytes, then the raw content.
    pub fn marshal_binary(&self) -> Result<Vec<u8>, TypeError> {
        let mut ext_total: usize = 0;
        for id in &self.ext_ids {
            if id.len() > u16::MAX as usize {
                return Err(TypeError::ExternalIdsTooLong(id.len()));
            }
            ext_total += 2 + id.len();
        }
        if ext_total > u16::MAX as usize {
            return Err(TypeError::ExternalIdsTooLong(ext_total));
        }

        let mut buf = Vec::with_capacity(ENTRY_HEADER_LEN + ext_total + self.content.len());
        buf.push(ENTRY_VERSION);
        buf.extend_from_slice(self.chain_id.as_bytes());
        buf.extend_from_slice(&(ext_total as u16).to_be_bytes());
        for id in &self.ext_ids {
            buf.extend_from_slice(&(id.len() as u16).to_be_bytes());
            buf.extend_from_slice(id);
        }
        buf.extend_from_slice(&self.content);
        Ok(buf)
    }

    /// Parse an entry from its wire layout.
    pub fn unmarshal_binary(data: &[u8]) -> Result<Self, TypeError> {
        if data.len() < ENTRY_HEADER_LEN {
            return Err(TypeError::Truncated {
                needed: ENTRY_HEADER_LEN,
                have: data.len(),
            });
        }
        if data[0] != ENTRY_VERSION {
            return Err(TypeError::UnsupportedVersion(data[0]));
        }

        let mut chain = [0u8; 32];
        chain.copy_from_slice(&data[1..33]);

        let ext_total = u16::from_be_bytes([data[33], data[34]]) as usize;
        let ext_end = ENTRY_HEADER_LEN + ext_total;
        if data.len() < ext_end {
            return Err(TypeError::Truncated {
                needed: ext_end,
                have: data.len(),
            });
        }

        let mut ext_ids = Vec::new();
        let mut off = ENTRY_HEADER_LEN;
        while off < ext_end {
            if off + 2 > ext_end {
                return Err(TypeError::MalformedExternalIds(
                    "length prefix crosses the section boundary".into(),
                ));
            }
            let len = u16::from_be_bytes([data[off], data[off + 1]]) as usize;
            off += 2;
            if off + len > ext_end {
                return Err(TypeError::MalformedExternalIds(format!(
                    "external id of {len} bytes overruns the section"
                )));
            }
            ext_ids.push(data[off..off + len].to_vec());
            off += len;
        }

        Ok(Self {
            chain_id: Hash256::from_bytes(chain),
            ext_ids,
            content: data[ext_end..].to_vec(),
        })
    }
}

mod hex_bytes {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(data: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&hex::encode(data))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        let s = String::deserialize(deserializer)?;
        hex::decode(&s).map_err(serde::de::Error::custom)
    }
}

mod hex_ext_ids {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(ids: &[Vec<u8>], serializer: S) -> Result<S::Ok, S::Error> {
        let encoded: Vec<String> = ids.iter().map(hex::encode).collect();
        serializer.collect_seq(encoded)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Vec<Vec<u8>>, D::Error> {
        let strings: Vec<String> = Vec::deserialize(deserializer)?;
        strings
            .into_iter()
            .map(|s| hex::decode(&s).map_err(serde::de::Error::custom))
            .collect()
    }
}

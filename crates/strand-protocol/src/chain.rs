use strand_crypto::derive_chain_id;
use strand_types::{Entry, Hash256};

/// A chain and its founding entry.
///
/// The chain ID is a digest of the founding entry's external IDs alone —
/// content is not an input — so construction computes the ID first and
/// stamps it onto the entry as the final step. There is no window in which
/// a caller-supplied chain-ID value is observable.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Chain {
    id: Hash256,
    first_entry: Entry,
}

impl Chain {
    /// Create a chain from its founding external IDs and content.
    pub fn new(ext_ids: Vec<Vec<u8>>, content: Vec<u8>) -> Self {
        let id = derive_chain_id(&ext_ids);
        let first_entry = Entry::new(id, ext_ids, content);
        Self { id, first_entry }
    }

    /// Adopt an existing entry as a chain's founding entry.
    ///
    /// The entry's chain-ID field is advisory input only: whatever the
    /// caller put there is overwritten with the derived value.
    pub fn from_first_entry(mut entry: Entry) -> Self {
        let id = derive_chain_id(&entry.ext_ids);
        entry.chain_id = id;
        Self {
            id,
            first_entry: entry,
        }
    }

    /// Convenience constructor from string slices.
    pub fn from_strings(content: &str, ext_ids: &[&str]) -> Self {
        Self::new(
            ext_ids.iter().map(|s| s.as_bytes().to_vec()).collect(),
            content.as_bytes().to_vec(),
        )
    }

    pub fn id(&self) -> &Hash256 {
        &self.id
    }

    pub fn first_entry(&self) -> &Entry {
        &self.first_entry
    }
}

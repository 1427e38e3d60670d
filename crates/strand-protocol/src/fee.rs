use serde::{Deserialize, Serialize};
use thiserror::Error;

use strand_types::{Entry, TypeError, CREDIT_UNIT, ENTRY_HEADER_LEN, MAX_ENTRY_PAYLOAD};

/// Size-based pricing for entries.
///
/// The defaults are the protocol values; both knobs exist so tools can model
/// alternative networks without patching the calculator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeSchedule {
    /// One credit is charged per started unit of payload.
    pub credit_unit: usize,
    /// Largest payload (external IDs plus content) the network accepts.
    pub max_payload: usize,
}

impl Default for FeeSchedule {
    fn default() -> Self {
        Self {
            credit_unit: CREDIT_UNIT,
            max_payload: MAX_ENTRY_PAYLOAD,
        }
    }
}

impl FeeSchedule {
    /// Credit cost of an entry.
    ///
    /// Priced from the exact marshaled length actually transmitted, minus
    /// the fixed 35-byte header: external-ID length prefixes are billable.
    /// Minimum one credit; payloads above `max_payload` are rejected with a
    /// distinguished error before any network interaction.
    pub fn entry_cost(&self, entry: &Entry) -> Result<u8, FeeError> {
        let marshaled = entry.marshal_binary()?;
        let payload = marshaled.len() - ENTRY_HEADER_LEN;
        if payload > self.max_payload {
            return Err(FeeError::EntryTooLarge {
                size: payload,
                max: self.max_payload,
            });
        }
        let credits = payload.div_ceil(self.credit_unit).max(1);
        u8::try_from(credits).map_err(|_| FeeError::EntryTooLarge {
            size: payload,
            max: self.max_payload,
        })
    }
}

/// Credit cost of an entry under the protocol's default schedule.
pub fn entry_cost(entry: &Entry) -> Result<u8, FeeError> {
    FeeSchedule::default().entry_cost(entry)
}

/// Errors from fee computation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FeeError {
    #[error("entry payload of {size} bytes exceeds the {max} byte maximum")]
    EntryTooLarge { size: usize, max: usize },

    #[error(transparent)]
    Type(#[from] TypeError),
}

#[cfg(test)]
mod tests {
    use strand_types::Hash256;

    use super::*;

    fn entry_with_content(len: usize) -> Entry {
        Entry::new(Hash256::from_bytes([9; 32]), vec![], vec![0u8; len])
    }

    #[test]
    fn empty_entry_costs_one_credit() {
        assert_eq!(entry_cost(&entry_with_content(0)).unwrap(), 1);
    }

    #[test]
    fn one_unit_is_one_credit() {
        assert_eq!(entry_cost(&entry_with_content(1024)).unwrap(), 1);
    }

    #[test]
    fn one_byte_over_a_unit_costs_another_credit() {
        assert_eq!(entry_cost(&entry_with_content(1025)).unwrap(), 2);
    }

    #[test]
    fn maximum_payload_costs_ten() {
        assert_eq!(entry_cost(&entry_with_content(10 * 1024)).unwrap(), 10);
    }

    #[test]
    fn oversize_payload_is_a_distinguished_error() {
        let err = entry_cost(&entry_with_content(10 * 1024 + 1)).unwrap_err();
        assert_eq!(
            err,
            FeeError::EntryTooLarge {
                size: 10 * 1024 + 1,
                max: 10 * 1024
            }
        );
    }

    #[test]
    fn external_id_overhead_is_billable() {
        // 1023 bytes as content: payload 1023, one credit.
        let as_content = entry_with_content(1023);
        // The same 1023 bytes as one external ID: payload 1025 with the
        // length prefix, two credits.
        let as_ext_id = Entry::new(Hash256::from_bytes([9; 32]), vec![vec![0u8; 1023]], vec![]);
        assert_eq!(entry_cost(&as_content).unwrap(), 1);
        assert_eq!(entry_cost(&as_ext_id).unwrap(), 2);
    }

    #[test]
    fn cost_is_monotonic_in_payload_size() {
        let mut last = 0;
        for len in (0..=10 * 1024).step_by(512) {
            let cost = entry_cost(&entry_with_content(len)).unwrap();
            assert!(cost >= last, "cost regressed at payload {len}");
            last = cost;
        }
    }

    #[test]
    fn custom_schedule_is_honored() {
        let schedule = FeeSchedule {
            credit_unit: 100,
            max_payload: 250,
        };
        assert_eq!(schedule.entry_cost(&entry_with_content(150)).unwrap(), 2);
        assert!(schedule.entry_cost(&entry_with_content(251)).is_err());
    }
}

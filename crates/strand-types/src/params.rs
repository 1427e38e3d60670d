//! Protocol parameters.
//!
//! These are wire-format constants of the ledger protocol. Components take
//! them from here (or from a config struct defaulting to them) rather than
//! repeating the literals.

/// Version byte carried by every marshaled entry and commit message.
pub const ENTRY_VERSION: u8 = 0;

/// Fixed prefix of a marshaled entry: version byte, 32-byte chain ID, and
/// the u16 external-ID section length.
pub const ENTRY_HEADER_LEN: usize = 35;

/// Maximum marshaled payload (external IDs plus content) the network accepts
/// for a single entry. The header is not billed and not counted.
pub const MAX_ENTRY_PAYLOAD: usize = 10 * 1024;

/// Billing unit for entry payloads: one credit per started unit.
pub const CREDIT_UNIT: usize = 1024;

/// Extra credits charged on top of the entry cost when the commit creates a
/// new chain. The offset also distinguishes chain commits from entry commits
/// at the byte level for the remote node.
pub const CHAIN_CREATION_FEE: u8 = 10;

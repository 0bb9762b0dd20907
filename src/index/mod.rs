//! Key Index Module
//!
//! Open-addressing hash table mapping integer record keys to arena handles.
//!
//! ## Responsibilities
//! - Bind keys to handles with at most one live entry per key
//! - Double-hashing probe sequence for insert/search
//! - Tombstone deletion so other keys' probe chains stay intact
//! - Resize at load factor 0.5, rehashing with plain linear probing
//!
//! ## Probe Scheme
//! Home slot is `key mod capacity`; the probe step is
//! `((key / capacity) mod (capacity / 2)) * 2 + 1`. The step is always odd
//! and the capacity always a power of two, so every probe sequence visits
//! every slot before repeating. The resize path deliberately uses simple
//! linear probing from `key mod new_capacity` instead — the one asymmetry
//! in the design, kept because it decides where keys land after a resize.

mod table;

pub use table::KeyIndex;

use crate::arena::Handle;

/// One occupied slot in the key index.
///
/// A tombstoned entry keeps its slot occupied for probing purposes but no
/// longer counts as live; tombstones are reclaimed only during resize.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexEntry {
    /// Record key
    pub key: i32,

    /// Arena handle for the record bytes
    pub handle: Handle,

    /// Deleted marker; the slot stays occupied so probe chains for other
    /// keys are not broken
    pub tombstone: bool,
}

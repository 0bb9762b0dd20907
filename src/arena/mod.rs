//! Arena Module
//!
//! The byte arena backing all stored records.
//!
//! ## Responsibilities
//! - Append serialized records into one contiguous buffer
//! - Hand out `Handle`s identifying each stored range
//! - Zero-fill deleted ranges (no interior reuse, see below)
//! - Double the buffer when an insert does not fit
//!
//! ## Allocation Model
//! Inserts always append at the live cursor. Deletion zeroes the record's
//! bytes and credits a free counter, but the interior gap is never handed
//! out again: space freed by deletes is leaked until the arena is dropped.
//! This is deliberate; both the growth timing and the index resize policy
//! are tuned against this simpler model.

mod handle;
mod pool;

pub use handle::Handle;
pub use pool::Arena;

//! # ArenaKV
//!
//! A minimal in-memory record store:
//! - Records are serialized into opaque byte blobs
//! - Blobs are packed into a single growable byte arena
//! - An open-addressing hash index maps integer keys to arena handles
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │                Script Driver                │
//! │        (parses operations, prints)          │
//! └───────────────────┬─────────────────────────┘
//!                     │  (key, bytes)
//! ┌───────────────────▼─────────────────────────┐
//! │                Store Facade                 │
//! └─────────┬─────────────────────────┬─────────┘
//!           │                         │
//!           ▼                         ▼
//!    ┌─────────────┐          ┌──────────────┐
//!    │  Key Index  │  Handle  │    Arena     │
//!    │ (open addr) │ ───────▶ │ (byte pool)  │
//!    └─────────────┘          └──────────────┘
//! ```
//!
//! The store is single-threaded and purely in-memory: every operation runs
//! to completion before the next begins, and nothing is persisted.

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod arena;
pub mod index;
pub mod record;
pub mod script;
pub mod store;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use arena::{Arena, Handle};
pub use config::Config;
pub use error::{Result, StoreError};
pub use index::KeyIndex;
pub use store::Store;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of ArenaKV
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

//! Store Module
//!
//! The facade tying the key index and the arena together.
//!
//! ## Responsibilities
//! - Single entry point for insert/delete/search over a key
//! - Enforce at-most-one record per key
//! - Keep index entries and arena ranges in step
//!
//! Records cross this boundary as opaque byte blobs; serialization happens
//! entirely on the caller side (see the `record` module for the sample
//! codec the driver uses).

use crate::arena::{Arena, Handle};
use crate::config::Config;
use crate::error::{Result, StoreError};
use crate::index::KeyIndex;

/// The in-memory record store.
///
/// Owns exactly one arena and one key index; neither is reachable mutably
/// from outside. Single-threaded by design: every operation runs to
/// completion before the next begins.
pub struct Store {
    /// Byte pool holding the serialized records
    arena: Arena,

    /// Key -> handle index
    index: KeyIndex,
}

impl Store {
    /// Create a store from a validated configuration
    pub fn new(config: &Config) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            arena: Arena::new(config.initial_arena_size),
            index: KeyIndex::new(config.initial_index_capacity),
        })
    }

    /// Store `bytes` under `key` and return the issued handle.
    ///
    /// Fails with [`StoreError::DuplicateKey`] if `key` is already bound.
    /// The duplicate check runs before the arena allocation and the index
    /// insert reports it independently; in this single-threaded design the
    /// second check can never fire, but the contract requires it.
    pub fn insert(&mut self, key: i32, bytes: &[u8]) -> Result<Handle> {
        if self.index.search(key).is_some() {
            return Err(StoreError::DuplicateKey(key));
        }

        let handle = self.arena.insert(bytes);

        if !self.index.insert(key, handle) {
            return Err(StoreError::DuplicateKey(key));
        }

        tracing::debug!(key, offset = handle.offset(), length = handle.length(), "record inserted");
        Ok(handle)
    }

    /// Delete the record bound to `key`.
    ///
    /// Zeroes the arena range, then tombstones the index entry. Fails with
    /// [`StoreError::NotFound`] if `key` has no live entry.
    pub fn delete(&mut self, key: i32) -> Result<()> {
        let handle = self.index.search(key).ok_or(StoreError::NotFound(key))?;

        self.arena.remove(handle);
        self.index.delete(key);

        tracing::debug!(key, "record deleted");
        Ok(())
    }

    /// Return a copy of the bytes stored under `key`.
    ///
    /// Fails with [`StoreError::NotFound`] if `key` has no live entry.
    pub fn search(&self, key: i32) -> Result<Vec<u8>> {
        let handle = self.index.search(key).ok_or(StoreError::NotFound(key))?;
        let bytes = self.arena.get(handle, handle.length())?;
        Ok(bytes.to_vec())
    }

    /// Diagnostic dump of the index: occupied slots plus live-record total
    pub fn dump_index(&self) -> String {
        self.index.dump()
    }

    /// Read access to the arena, for inspection and tests
    pub fn arena(&self) -> &Arena {
        &self.arena
    }

    /// Read access to the key index, for inspection and tests
    pub fn index(&self) -> &KeyIndex {
        &self.index
    }
}

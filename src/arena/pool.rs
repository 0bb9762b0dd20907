//! Arena implementation
//!
//! Append-only byte pool with doubling growth and zero-fill deletion.

use crate::error::{Result, StoreError};

use super::Handle;

/// The growable byte pool backing all stored records.
///
/// Layout invariant: `[0, cursor)` holds live or zeroed (deleted) record
/// bytes, `[cursor, capacity)` is untouched free space. Inserts append at
/// `cursor`; nothing is ever written inside the prefix again except the
/// zero-fill performed by [`Arena::remove`].
pub struct Arena {
    /// The backing buffer; its length is the arena capacity
    pool: Vec<u8>,

    /// Next free offset to append at
    cursor: u32,

    /// Bytes counted as free. Decremented on insert, credited back on
    /// remove, reset to the tail size on growth. Because removal credits
    /// interior bytes that can never be re-issued, this may exceed the
    /// usable tail `capacity - cursor`.
    free_size: u32,

    /// Lowest offset ever zeroed by a remove, `None` until the first delete.
    /// Diagnostic only: freed ranges are not reused.
    freed_low_watermark: Option<u32>,
}

impl Arena {
    /// Create an arena with the given initial capacity in bytes
    pub fn new(initial_size: u32) -> Self {
        Self {
            pool: vec![0; initial_size as usize],
            cursor: 0,
            free_size: initial_size,
            freed_low_watermark: None,
        }
    }

    /// Append a record and return a handle to it.
    ///
    /// Grows the pool by doubling until the record fits. The returned
    /// handle's offset is the cursor position before the append.
    pub fn insert(&mut self, data: &[u8]) -> Handle {
        let length = data.len() as u32;

        // Tail check in addition to the free counter: deletes credit
        // `free_size` with interior bytes the append cursor cannot use.
        if length > self.free_size || self.cursor + length > self.capacity() {
            self.expand(length);
        }

        let handle = Handle::new(self.cursor, length);
        let start = self.cursor as usize;
        self.pool[start..start + data.len()].copy_from_slice(data);
        self.cursor += length;
        self.free_size -= length;

        handle
    }

    /// Read the record bytes for `handle`.
    ///
    /// `length` must match the handle's length exactly; anything else is a
    /// [`StoreError::LengthMismatch`]. No liveness check is performed — the
    /// caller only presents handles for currently indexed keys.
    pub fn get(&self, handle: Handle, length: u32) -> Result<&[u8]> {
        if handle.length() != length {
            return Err(StoreError::LengthMismatch {
                expected: handle.length(),
                requested: length,
            });
        }

        let start = handle.offset() as usize;
        Ok(&self.pool[start..start + length as usize])
    }

    /// Remove the record behind `handle` by zero-filling its range.
    ///
    /// The freed bytes are credited to `free_size` and tracked via the low
    /// watermark, but later inserts still append at the cursor — the gap is
    /// leaked for the lifetime of the arena.
    pub fn remove(&mut self, handle: Handle) {
        let start = handle.offset() as usize;
        let end = start + handle.length() as usize;
        self.pool[start..end].fill(0);

        self.free_size += handle.length();
        self.freed_low_watermark = Some(match self.freed_low_watermark {
            Some(low) => low.min(handle.offset()),
            None => handle.offset(),
        });
    }

    /// Current capacity of the pool in bytes
    pub fn capacity(&self) -> u32 {
        self.pool.len() as u32
    }

    /// Next append offset
    pub fn cursor(&self) -> u32 {
        self.cursor
    }

    /// Bytes currently counted as free (tail space plus zeroed gaps)
    pub fn free_size(&self) -> u32 {
        self.free_size
    }

    /// Lowest offset ever freed by a remove, if any
    pub fn freed_low_watermark(&self) -> Option<u32> {
        self.freed_low_watermark
    }

    /// Double the pool until `cursor + required` fits, preserving contents.
    fn expand(&mut self, required: u32) {
        let mut new_size = self.capacity();
        while new_size < self.cursor + required {
            new_size *= 2;
        }

        // Vec::resize keeps the prefix byte-for-byte and zero-fills the rest
        self.pool.resize(new_size as usize, 0);
        self.free_size = new_size - self.cursor;

        tracing::info!(new_size, "arena expanded");
    }
}

//! Handle definition
//!
//! A `Handle` identifies one stored record's byte range inside the arena.

/// Reference to a byte range `[offset, offset + length)` in the arena.
///
/// Handles are plain values: copying one does not share anything, and a
/// handle is only meaningful to the arena that issued it. The handle itself
/// performs no validation; the key index only presents handles for keys it
/// currently holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Handle {
    offset: u32,
    length: u32,
}

impl Handle {
    /// Create a handle for the range `[offset, offset + length)`
    pub fn new(offset: u32, length: u32) -> Self {
        Self { offset, length }
    }

    /// Starting offset of the record in the arena
    pub fn offset(&self) -> u32 {
        self.offset
    }

    /// Length of the record in bytes
    pub fn length(&self) -> u32 {
        self.length
    }

    /// Update the offset.
    ///
    /// Never called on the normal insert/search/delete paths; retained for
    /// relocation-free maintenance where the same handle value is carried
    /// forward unchanged.
    pub fn set_offset(&mut self, offset: u32) {
        self.offset = offset;
    }

    /// Update the length
    pub fn set_length(&mut self, length: u32) {
        self.length = length;
    }
}

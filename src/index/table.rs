//! KeyIndex implementation
//!
//! Double-hashing open addressing over a power-of-two slot array.

use std::fmt::Write as _;

use crate::arena::Handle;

use super::IndexEntry;

/// Maximum tolerated load factor (live entries / slots)
const LOAD_FACTOR: f64 = 0.5;

/// Open-addressing hash table mapping `i32` keys to [`Handle`]s.
///
/// Capacity is a power of two (the caller validates the initial value and
/// resize only ever doubles), which together with the odd probe step
/// guarantees full-table probe coverage.
pub struct KeyIndex {
    /// Slot array; `None` is a never-used slot, a tombstoned entry is a
    /// deleted slot that still blocks probe termination
    slots: Vec<Option<IndexEntry>>,

    /// Count of live (non-tombstone) entries
    live: usize,
}

impl KeyIndex {
    /// Create an index with the given slot count (power of two, >= 2)
    pub fn new(initial_capacity: usize) -> Self {
        Self {
            slots: vec![None; initial_capacity],
            live: 0,
        }
    }

    /// Bind `key` to `handle`.
    ///
    /// Returns `false` without changing anything if `key` already has a
    /// live entry. Resizes first when the load factor would be exceeded.
    pub fn insert(&mut self, key: i32, handle: Handle) -> bool {
        if self.find(key).is_some() {
            return false;
        }

        if self.live as f64 >= self.capacity() as f64 * LOAD_FACTOR {
            self.resize();
        }

        let slot = self.find_free_slot(key);
        self.slots[slot] = Some(IndexEntry {
            key,
            handle,
            tombstone: false,
        });
        self.live += 1;

        true
    }

    /// Tombstone the entry for `key`.
    ///
    /// Returns `false` if `key` has no live entry. The slot stays occupied
    /// until the next resize; other entries are never relocated.
    pub fn delete(&mut self, key: i32) -> bool {
        match self.find(key) {
            Some(index) => {
                if let Some(Some(entry)) = self.slots.get_mut(index) {
                    entry.tombstone = true;
                }
                self.live -= 1;
                true
            }
            None => false,
        }
    }

    /// Handle for the live entry of `key`, if any
    pub fn search(&self, key: i32) -> Option<Handle> {
        self.find(key)
            .and_then(|index| self.slots[index])
            .map(|entry| entry.handle)
    }

    /// Current slot count
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of live entries
    pub fn len(&self) -> usize {
        self.live
    }

    /// Whether the index holds no live entries
    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    /// Occupied slots (live and tombstoned), in slot order
    pub fn entries(&self) -> impl Iterator<Item = (usize, &IndexEntry)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_ref().map(|entry| (i, entry)))
    }

    /// Render the slot array for diagnostics: one line per occupied slot
    /// (`index: key` or `index: TOMBSTONE`) plus the live-record total.
    pub fn dump(&self) -> String {
        let mut out = String::from("Hashtable:\n");
        for (i, entry) in self.entries() {
            if entry.tombstone {
                let _ = writeln!(out, "{i}: TOMBSTONE");
            } else {
                let _ = writeln!(out, "{i}: {}", entry.key);
            }
        }
        let _ = write!(out, "total records: {}", self.live);
        out
    }

    /// Locate the slot holding the live entry for `key`.
    ///
    /// Probes `home, home + step, home + 2*step, ...` (mod capacity) until
    /// an empty slot (miss), a live slot with the key (hit), or the probe
    /// wraps back to `home` (table effectively full of collisions, miss).
    fn find(&self, key: i32) -> Option<usize> {
        let (home, step) = self.probe_params(key);

        let mut index = home;
        while let Some(entry) = &self.slots[index] {
            if entry.key == key && !entry.tombstone {
                return Some(index);
            }
            index = (index + step) % self.capacity();
            if index == home {
                break;
            }
        }

        None
    }

    /// First slot along the probe sequence usable for storing `key`: empty,
    /// tombstoned, or already holding the key — whichever comes first.
    fn find_free_slot(&self, key: i32) -> usize {
        let (home, step) = self.probe_params(key);

        let mut index = home;
        while let Some(entry) = &self.slots[index] {
            if entry.key == key || entry.tombstone {
                break;
            }
            index = (index + step) % self.capacity();
        }

        index
    }

    /// Home slot and double-hashing step for `key` at the current capacity.
    ///
    /// The step is `((key / capacity) mod (capacity / 2)) * 2 + 1` — always
    /// odd, so with a power-of-two capacity the probe sequence is a full
    /// cycle over the slots. Arithmetic runs in `i64` with euclidean
    /// remainders so negative keys are handled, matching the plain version
    /// exactly for nonnegative keys.
    fn probe_params(&self, key: i32) -> (usize, usize) {
        let cap = self.capacity() as i64;
        let key = i64::from(key);

        let home = key.rem_euclid(cap) as usize;
        let step = ((key / cap).rem_euclid(cap / 2) * 2 + 1) as usize;

        (home, step)
    }

    /// Double the slot array and re-place every live entry.
    ///
    /// Rehashing uses plain linear probing from `key mod new_capacity`, not
    /// the double-hashing step. Tombstones are dropped here and only here.
    fn resize(&mut self) {
        let new_capacity = self.capacity() * 2;
        let mut new_slots: Vec<Option<IndexEntry>> = vec![None; new_capacity];

        for entry in self.slots.iter().flatten() {
            if entry.tombstone {
                continue;
            }

            let mut index = i64::from(entry.key).rem_euclid(new_capacity as i64) as usize;
            while new_slots[index].is_some() {
                index = (index + 1) % new_capacity;
            }
            new_slots[index] = Some(*entry);
        }

        self.slots = new_slots;

        tracing::info!(new_capacity, "key index expanded");
    }
}

//! Configuration for ArenaKV
//!
//! Centralized configuration with sensible defaults.

use crate::error::{Result, StoreError};

/// Main configuration for an ArenaKV store
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Arena Configuration
    // -------------------------------------------------------------------------
    /// Initial size of the byte arena, in bytes. The arena doubles from here
    /// whenever an insert does not fit.
    pub initial_arena_size: u32,

    // -------------------------------------------------------------------------
    // Index Configuration
    // -------------------------------------------------------------------------
    /// Initial slot count of the key index. Must be a power of two (the
    /// probe-step formula depends on it) and at least 2.
    pub initial_index_capacity: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            initial_arena_size: 512,
            initial_index_capacity: 16,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Validate the configuration.
    ///
    /// The index capacity must be a power of two: together with the odd
    /// probe step it guarantees the probe sequence visits every slot.
    pub fn validate(&self) -> Result<()> {
        if self.initial_arena_size == 0 {
            return Err(StoreError::Config(
                "initial arena size must be nonzero".to_string(),
            ));
        }
        if self.initial_index_capacity < 2 || !self.initial_index_capacity.is_power_of_two() {
            return Err(StoreError::Config(format!(
                "initial index capacity must be a power of two >= 2, got {}",
                self.initial_index_capacity
            )));
        }
        Ok(())
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the initial arena size (in bytes)
    pub fn initial_arena_size(mut self, size: u32) -> Self {
        self.config.initial_arena_size = size;
        self
    }

    /// Set the initial index capacity (slot count, power of two)
    pub fn initial_index_capacity(mut self, capacity: usize) -> Self {
        self.config.initial_index_capacity = capacity;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}

//! Record Module
//!
//! The sample record type the driver stores, with its byte codec.
//!
//! The storage core never looks inside these bytes: records are encoded to
//! a blob before `Store::insert` and decoded again after `Store::search`.
//! Any other fixed-format record type could be swapped in without touching
//! the core.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// A seminar record: the variable-length sample payload used by the driver
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Record ID; also the store key
    pub id: i32,

    /// Seminar title
    pub title: String,

    /// Date/time string, e.g. `2405231000`
    pub date: String,

    /// Duration in minutes
    pub duration: i32,

    /// X coordinate of the location
    pub x: i16,

    /// Y coordinate of the location
    pub y: i16,

    /// Cost in whole currency units
    pub cost: i32,

    /// Free-form keywords
    pub keywords: Vec<String>,

    /// Free-form description
    pub description: String,
}

impl Record {
    /// Serialize to the compact binary blob handed to the store
    pub fn encode(&self) -> Result<Vec<u8>> {
        Ok(bincode::serialize(self)?)
    }

    /// Deserialize a blob returned from the store
    pub fn decode(bytes: &[u8]) -> Result<Self> {
        Ok(bincode::deserialize(bytes)?)
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID: {}, Title: {}\nDate: {}, Length: {}, X: {}, Y: {}, Cost: {}\n\
             Description: {}\nKeywords: {}",
            self.id,
            self.title,
            self.date,
            self.duration,
            self.x,
            self.y,
            self.cost,
            self.description,
            self.keywords.join(", "),
        )
    }
}

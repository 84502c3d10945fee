//! Car: the vehicle record
//!
//! A car is keyed by its `id`. The identity fields (`id`, `make`, `model`,
//! `color`, `year`) are fixed at construction; `owner` is the only field
//! that changes over the record's lifetime.
//!
//! ## Wire Format
//!
//! Stored as a JSON object:
//!
//! ```text
//! {"id":"CAR001","make":"Toyota","model":"Corolla","color":"Blue","year":2020,"owner":"John"}
//! ```
//!
//! Unknown fields are rejected on decode.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A vehicle record
///
/// Equality is structural over all six fields.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Car {
    id: String,
    make: String,
    model: String,
    color: String,
    year: i32,
    owner: String,
}

impl Car {
    /// Create a new car record
    pub fn new(
        id: impl Into<String>,
        make: impl Into<String>,
        model: impl Into<String>,
        color: impl Into<String>,
        year: i32,
        owner: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            make: make.into(),
            model: model.into(),
            color: color.into(),
            year,
            owner: owner.into(),
        }
    }

    /// Ledger key and identity of this car
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Manufacturer
    pub fn make(&self) -> &str {
        &self.make
    }

    /// Model name
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Color
    pub fn color(&self) -> &str {
        &self.color
    }

    /// Model year
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Current owner
    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// Replace the owner in place
    pub fn set_owner(&mut self, owner: impl Into<String>) {
        self.owner = owner.into();
    }

    /// Consume and return the same car with a different owner
    pub fn with_owner(mut self, owner: impl Into<String>) -> Self {
        self.set_owner(owner);
        self
    }

    /// Encode for storage
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| Error::Serialization(e.to_string()))
    }

    /// Decode a stored value
    ///
    /// `key` is the ledger key the value was read from and is only used to
    /// report a corrupt entry.
    pub fn from_json(key: &str, json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::CorruptRecord {
            key: key.to_string(),
            reason: e.to_string(),
        })
    }
}

impl fmt::Display for Car {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Car{{id='{}', make='{}', model='{}', color='{}', year={}, owner='{}'}}",
            self.id, self.make, self.model, self.color, self.year, self.owner
        )
    }
}

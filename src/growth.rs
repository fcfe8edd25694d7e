//! Capacity growth configuration.
//!
//! A [`GrowthPolicy`] decides how much storage an array allocates when it runs
//! out of room. Policies are plain serde structs so they can be kept in JSON
//! configuration next to the rest of an application's settings.
//!
//! # Example
//!
//! ```
//! use dynamic_array::GrowthPolicy;
//!
//! let policy = GrowthPolicy::from_json(r#"{"min_capacity": 8, "growth_factor": 3}"#).unwrap();
//! assert_eq!(policy.next_capacity(0, 1).unwrap(), 8);
//! assert_eq!(policy.next_capacity(8, 9).unwrap(), 24);
//! ```

use crate::error::{ArrayError, Result};
use serde::{Deserialize, Serialize};

/// Default allocation when growing from an empty buffer.
pub const DEFAULT_MIN_CAPACITY: usize = 4;

/// Default multiplier applied to a full buffer.
pub const DEFAULT_GROWTH_FACTOR: usize = 2;

/// Geometric capacity growth.
///
/// A factor of at least 2 keeps appends amortized O(1); `validate()` rejects
/// anything weaker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GrowthPolicy {
    /// Capacity allocated when growing from zero
    pub min_capacity: usize,
    /// Multiplier applied to the current capacity
    pub growth_factor: usize,
}

impl Default for GrowthPolicy {
    fn default() -> Self {
        Self {
            min_capacity: DEFAULT_MIN_CAPACITY,
            growth_factor: DEFAULT_GROWTH_FACTOR,
        }
    }
}

impl GrowthPolicy {
    /// Create a validated policy.
    pub fn new(min_capacity: usize, growth_factor: usize) -> Result<Self> {
        let policy = Self {
            min_capacity,
            growth_factor,
        };
        policy.validate()?;
        Ok(policy)
    }

    /// Check the policy guarantees amortized O(1) growth.
    pub fn validate(&self) -> Result<()> {
        if self.min_capacity == 0 {
            return Err(ArrayError::InvalidPolicy(
                "min_capacity must be at least 1".to_string(),
            ));
        }
        if self.growth_factor < 2 {
            return Err(ArrayError::InvalidPolicy(format!(
                "growth_factor must be at least 2, got {}",
                self.growth_factor
            )));
        }
        Ok(())
    }

    /// Parse and validate a policy from JSON.
    ///
    /// Missing fields take their default values.
    pub fn from_json(json: &str) -> Result<Self> {
        let policy: GrowthPolicy = serde_json::from_str(json)?;
        policy.validate()?;
        Ok(policy)
    }

    /// Render the policy as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Smallest capacity this policy reaches from `current` that holds
    /// `required` slots.
    ///
    /// Never returns less than `current`.
    pub fn next_capacity(&self, current: usize, required: usize) -> Result<usize> {
        if required <= current {
            return Ok(current);
        }
        let mut cap = if current == 0 {
            self.min_capacity
        } else {
            current
                .checked_mul(self.growth_factor)
                .ok_or(ArrayError::CapacityOverflow)?
        };
        while cap < required {
            cap = cap
                .checked_mul(self.growth_factor)
                .ok_or(ArrayError::CapacityOverflow)?;
        }
        Ok(cap)
    }
}

/// Reallocation counters kept by every array.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GrowthStats {
    /// Number of times the buffer was reallocated
    pub reallocations: usize,
    /// Total live elements moved across all reallocations
    pub elements_copied: usize,
}

impl GrowthStats {
    #[inline]
    pub(crate) fn record(&mut self, moved: usize) {
        self.reallocations += 1;
        self.elements_copied += moved;
    }
}

/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 */

//! Tank layout parameters injected by the host page.
//!
//! Tanks are identified by their *label index* `n`: `labels[n]` names the
//! tank and the status endpoint reports its level at `levels[n]`. The draw
//! slot (left to right) is `order[n]`.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Immutable tank configuration, fixed for the lifetime of the page.
///
/// ```json
/// { "levelCount": 5, "labels": ["A", "B"], "order": [1, 0] }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TankConfig {
    /// Number of discrete levels a tank can show (capacity + 1).
    pub level_count: usize,
    /// One label per tank, indexed by label index.
    pub labels: Vec<String>,
    /// Draw slot for each label index.
    pub order: Vec<usize>,
}

impl TankConfig {
    pub fn tank_count(&self) -> usize {
        self.labels.len()
    }

    /// Draw slot for label index `n`.
    pub fn slot(&self, n: usize) -> Option<usize> {
        self.order.get(n).copied()
    }

    /// Check that `order` is a permutation of `0..tank_count()` and that the
    /// level scale is non-empty.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.level_count == 0 {
            return Err(ConfigError::NoLevels);
        }
        let tanks = self.tank_count();
        if tanks == 0 {
            return Err(ConfigError::NoTanks);
        }
        if self.order.len() != tanks {
            return Err(ConfigError::OrderLength {
                labels: tanks,
                order: self.order.len(),
            });
        }

        let mut taken = vec![false; tanks];
        for (index, &slot) in self.order.iter().enumerate() {
            if slot >= tanks {
                return Err(ConfigError::SlotOutOfRange { index, slot, tanks });
            }
            if std::mem::replace(&mut taken[slot], true) {
                return Err(ConfigError::DuplicateSlot { slot });
            }
        }
        Ok(())
    }
}

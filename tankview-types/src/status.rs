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

//! Payload of the simulation's `GET /status` endpoint.

use serde::{Deserialize, Deserializer, Serialize};

/// One snapshot of the simulation, as returned by each poll.
///
/// ```json
/// { "levels": [2, 4], "imbalance": -0.5, "action": "fill A" }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusSample {
    /// Current level per tank, indexed by label index. Values outside
    /// `0..=capacity` are allowed here and clamped at display time.
    pub levels: Vec<f64>,
    pub imbalance: f64,
    /// Human readable description of the current action. Empty clears the
    /// header.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub action: String,
}

impl StatusSample {
    /// Level reported for label index `n`, or 0 if the server sent fewer
    /// levels than there are tanks.
    pub fn level(&self, n: usize) -> f64 {
        self.levels.get(n).copied().unwrap_or(0.0)
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

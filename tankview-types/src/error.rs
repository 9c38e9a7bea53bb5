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

//! Error types for tank configuration.

use thiserror::Error;

/// Reasons a [`TankConfig`](crate::TankConfig) cannot be rendered.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// `levelCount` must be at least 1 (capacity + 1).
    #[error("levelCount must be at least 1")]
    NoLevels,

    /// At least one labelled tank is required.
    #[error("at least one tank label is required")]
    NoTanks,

    /// `order` must have one slot per label.
    #[error("order has {order} entries but there are {labels} labels")]
    OrderLength { labels: usize, order: usize },

    /// A slot index points past the last tank.
    #[error("tank {index} is assigned slot {slot}, but only {tanks} slots exist")]
    SlotOutOfRange {
        index: usize,
        slot: usize,
        tanks: usize,
    },

    /// Two tanks claim the same slot.
    #[error("slot {slot} is assigned to more than one tank")]
    DuplicateSlot { slot: usize },
}

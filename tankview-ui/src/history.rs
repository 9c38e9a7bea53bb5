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

//! Imbalance samples collected since page load.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

/// The chart's y axis starts at `[0, -1]` and only ever grows downwards.
pub const INITIAL_FLOOR: f64 = -1.0;

/// Append-only imbalance history. Sample `k` is the imbalance reported by
/// poll `k` (0-based); that index is its x coordinate on the chart.
///
/// With a `limit`, only the most recent samples are retained but they keep
/// their original poll indices. The running-minimum floor always covers
/// every sample ever pushed.
/// One buffer written by the poll loop and read by the chart. Readers use
/// [`HistoryBuffer::total`] to tell whether it changed.
pub type SharedHistory = Rc<RefCell<HistoryBuffer>>;

#[derive(Debug, Clone, PartialEq)]
pub struct HistoryBuffer {
    samples: VecDeque<f64>,
    first_index: usize,
    floor: f64,
    limit: Option<usize>,
}

impl Default for HistoryBuffer {
    fn default() -> Self {
        Self::new(None)
    }
}

impl HistoryBuffer {
    pub fn new(limit: Option<usize>) -> Self {
        Self {
            samples: VecDeque::new(),
            first_index: 0,
            floor: INITIAL_FLOOR,
            limit: limit.map(|l| l.max(1)),
        }
    }

    pub fn push(&mut self, imbalance: f64) {
        self.floor = self.floor.min(imbalance);
        self.samples.push_back(imbalance);
        if let Some(limit) = self.limit {
            while self.samples.len() > limit {
                self.samples.pop_front();
                self.first_index += 1;
            }
        }
    }

    /// Samples currently held.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Samples ever pushed, i.e. the number of successful polls.
    pub fn total(&self) -> usize {
        self.first_index + self.samples.len()
    }

    /// Lowest value the y axis has had to show.
    pub fn floor(&self) -> f64 {
        self.floor
    }

    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.samples.iter().copied()
    }

    /// `(poll index, imbalance)` pairs in insertion order.
    pub fn points(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.samples
            .iter()
            .enumerate()
            .map(move |(i, &v)| (self.first_index + i, v))
    }

    /// Poll indices spanned by the retained samples. Never narrower than one
    /// step so a lone sample does not collapse the axis.
    pub fn x_domain(&self) -> (f64, f64) {
        let first = self.first_index as f64;
        let last = self.total().saturating_sub(1) as f64;
        (first, last.max(first + 1.0))
    }
}

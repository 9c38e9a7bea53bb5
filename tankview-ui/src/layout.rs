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

//! Pixel geometry for the drawing surface.
//!
//! The surface is split vertically into thirds: tanks in the upper band,
//! the imbalance chart in the lower band, separated by gaps of a third of
//! the tank height. Horizontally, tanks are half as wide as an even share of
//! the surface and equally spaced.
//!
//! Geometry is computed once from the viewport at startup and is not
//! recomputed on resize.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    pub width: f64,
    pub height: f64,
    pub tank_width: f64,
    pub tank_height: f64,
    pub gap_x: f64,
    pub gap_y: f64,
    pub tanks: usize,
}

impl Layout {
    pub fn new(width: f64, height: f64, tanks: usize) -> Self {
        let tanks = tanks.max(1);
        let n = tanks as f64;
        let tank_width = width / (2.0 * n);
        let tank_height = height / 3.0;
        let gap_x = (width - n * tank_width) / (n + 1.0);
        let gap_y = tank_height / 3.0;
        Self {
            width,
            height,
            tank_width,
            tank_height,
            gap_x,
            gap_y,
            tanks,
        }
    }

    /// Left edge of draw slot `slot`.
    pub fn slot_x(&self, slot: usize) -> f64 {
        self.gap_x + slot as f64 * (self.tank_width + self.gap_x)
    }

    pub fn tank_top(&self) -> f64 {
        self.gap_y
    }

    pub fn tank_bottom(&self) -> f64 {
        self.gap_y + self.tank_height
    }

    /// Baseline of the tank labels, centred in the gap below the tanks.
    pub fn label_y(&self) -> f64 {
        self.tank_bottom() + self.gap_y / 2.0
    }

    /// The chart spans from the left edge of the first slot to the right
    /// edge of the last one.
    pub fn chart_x(&self) -> f64 {
        self.gap_x
    }

    pub fn chart_width(&self) -> f64 {
        (self.width - 2.0 * self.gap_x).max(0.0)
    }

    pub fn chart_top(&self) -> f64 {
        2.0 * self.gap_y + self.tank_height
    }

    pub fn chart_height(&self) -> f64 {
        self.tank_height
    }
}

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

//! Clamped linear scales from domain values to pixels and colours.

use std::fmt;

use crate::layout::Layout;

/// A linear mapping from `domain` to `range`. Inputs outside the domain
/// saturate at the range ends.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    /// Position of `value` within the domain, clamped to `[0, 1]`.
    /// A degenerate domain and NaN both map to 0.
    fn normalize(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let span = d1 - d0;
        if span.abs() < 1e-12 || value.is_nan() {
            return 0.0;
        }
        ((value - d0) / span).clamp(0.0, 1.0)
    }

    pub fn map(&self, value: f64) -> f64 {
        let (r0, r1) = self.range;
        r0 + self.normalize(value) * (r1 - r0)
    }

    /// `count` evenly spaced values spanning the domain, endpoints included.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        let n = count.max(2);
        let (d0, d1) = self.domain;
        (0..n)
            .map(|i| d0 + (d1 - d0) * i as f64 / (n - 1) as f64)
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const RED: Rgb = Rgb(0xff, 0x00, 0x00);
    pub const BLUE: Rgb = Rgb(0x00, 0x00, 0xff);

    /// Component-wise interpolation, `t` clamped to `[0, 1]`.
    pub fn lerp(self, other: Rgb, t: f64) -> Rgb {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).round() as u8;
        Rgb(
            mix(self.0, other.0),
            mix(self.1, other.1),
            mix(self.2, other.2),
        )
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

/// Linear colour ramp from `low` at the domain start to `high` at its end.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorScale {
    position: LinearScale,
    low: Rgb,
    high: Rgb,
}

impl ColorScale {
    pub fn new(domain: (f64, f64), low: Rgb, high: Rgb) -> Self {
        Self {
            position: LinearScale::new(domain, (0.0, 1.0)),
            low,
            high,
        }
    }

    pub fn map(&self, value: f64) -> Rgb {
        self.low.lerp(self.high, self.position.map(value))
    }
}

/// Level to fill height and fill colour, both over `[0, N-1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LevelScales {
    height: LinearScale,
    color: ColorScale,
}

impl LevelScales {
    pub fn new(level_count: usize, tank_height: f64) -> Self {
        let max_level = level_count.saturating_sub(1) as f64;
        Self {
            height: LinearScale::new((0.0, max_level), (0.0, tank_height)),
            color: ColorScale::new((0.0, max_level), Rgb::RED, Rgb::BLUE),
        }
    }

    pub fn height(&self, level: f64) -> f64 {
        self.height.map(level)
    }

    pub fn color(&self, level: f64) -> Rgb {
        self.color.map(level)
    }
}

/// Chart axes, in coordinates local to the chart's origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartScales {
    pub x: LinearScale,
    pub y: LinearScale,
}

impl ChartScales {
    /// `x_domain` spans the poll indices on screen. The y axis runs from 0 at
    /// the top down to `floor` at the bottom.
    pub fn new(layout: &Layout, x_domain: (f64, f64), floor: f64) -> Self {
        Self {
            x: LinearScale::new(x_domain, (0.0, layout.chart_width())),
            y: LinearScale::new((0.0, floor), (0.0, layout.chart_height())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linear_scale_maps_and_clamps() {
        let s = LinearScale::new((0.0, 4.0), (0.0, 200.0));
        assert_eq!(s.map(0.0), 0.0);
        assert_eq!(s.map(2.0), 100.0);
        assert_eq!(s.map(4.0), 200.0);
        assert_eq!(s.map(-5.0), 0.0);
        assert_eq!(s.map(9.0), 200.0);
        assert_eq!(s.map(f64::NAN), 0.0);
    }

    #[test]
    fn reversed_domain_still_clamps() {
        let s = LinearScale::new((0.0, -2.0), (0.0, 100.0));
        assert_eq!(s.map(-1.0), 50.0);
        assert_eq!(s.map(-3.0), 100.0);
        assert_eq!(s.map(0.5), 0.0);
    }

    #[test]
    fn degenerate_domain_maps_to_range_start() {
        let s = LinearScale::new((3.0, 3.0), (10.0, 20.0));
        assert_eq!(s.map(3.0), 10.0);
        assert_eq!(s.map(100.0), 10.0);
    }

    #[test]
    fn ticks_include_endpoints() {
        let s = LinearScale::new((0.0, -1.0), (0.0, 1.0));
        assert_eq!(s.ticks(5), vec![0.0, -0.25, -0.5, -0.75, -1.0]);
        assert_eq!(s.ticks(0).len(), 2);
    }

    #[test]
    fn colors_run_red_to_blue() {
        let c = ColorScale::new((0.0, 4.0), Rgb::RED, Rgb::BLUE);
        assert_eq!(c.map(0.0), Rgb::RED);
        assert_eq!(c.map(4.0), Rgb::BLUE);
        assert_eq!(c.map(2.0), Rgb(128, 0, 128));
        assert_eq!(c.map(2.0).to_string(), "#800080");
    }

    #[test]
    fn level_scales_are_monotonic() {
        let scales = LevelScales::new(11, 300.0);
        let mut last_height = -1.0;
        let mut last_color = Rgb::RED;
        for level in 0..=10 {
            let h = scales.height(level as f64);
            let c = scales.color(level as f64);
            assert!(h > last_height);
            assert!(c.0 <= last_color.0 && c.2 >= last_color.2);
            last_height = h;
            last_color = c;
        }
    }

    #[test]
    fn out_of_range_levels_render_like_the_bounds() {
        let n = 5;
        let scales = LevelScales::new(n, 200.0);
        assert_eq!(scales.height(-5.0), scales.height(0.0));
        assert_eq!(scales.color(-5.0), scales.color(0.0));
        let top = (n - 1) as f64;
        assert_eq!(scales.height(top + 5.0), scales.height(top));
        assert_eq!(scales.color(top + 5.0), scales.color(top));
    }

    #[test]
    fn single_level_is_always_empty() {
        let scales = LevelScales::new(1, 200.0);
        assert_eq!(scales.height(0.0), 0.0);
        assert_eq!(scales.height(7.0), 0.0);
        assert_eq!(scales.color(7.0), Rgb::RED);
    }

    #[test]
    fn chart_y_axis_puts_zero_on_top() {
        let layout = Layout::new(1200.0, 900.0, 3);
        let scales = ChartScales::new(&layout, (0.0, 4.0), -2.0);
        assert_eq!(scales.y.map(0.0), 0.0);
        assert_eq!(scales.y.map(-2.0), 300.0);
        assert_eq!(scales.y.map(-1.0), 150.0);
        assert_eq!(scales.x.map(4.0), 900.0);
    }
}

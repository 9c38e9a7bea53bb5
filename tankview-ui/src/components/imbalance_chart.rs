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

//! Imbalance time series with self-rescaling axes.
//!
//! The x axis spans the poll indices on screen and grows every poll. The y
//! axis runs from 0 down to the most negative imbalance seen so far and
//! never shrinks back.

use std::rc::Rc;

use yew::prelude::*;

use crate::constants::AXIS_TICKS;
use crate::history::{HistoryBuffer, SharedHistory};
use crate::layout::Layout;
use crate::scale::ChartScales;

const LINE_COLOR: &str = "#8ef";
const AXIS_COLOR: &str = "#666";
const TICK_LABEL_COLOR: &str = "#aaa";
const TICK_SIZE: f64 = 6.0;

#[derive(Debug, Clone, PartialEq)]
pub struct AxisTick {
    /// Pixel offset along the axis.
    pub offset: f64,
    pub label: String,
}

pub fn chart_scales(layout: &Layout, history: &HistoryBuffer) -> ChartScales {
    ChartScales::new(layout, history.x_domain(), history.floor())
}

/// SVG path through every retained sample, `M x,y L x,y ...`. Sample `k`
/// sits at x = k.
pub fn line_path(history: &HistoryBuffer, scales: &ChartScales) -> String {
    history
        .points()
        .enumerate()
        .map(|(i, (index, value))| {
            let command = if i == 0 { 'M' } else { 'L' };
            let x = scales.x.map(index as f64);
            let y = scales.y.map(value);
            format!("{command}{x:.1},{y:.1}")
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Whole-number ticks across the poll index domain.
pub fn x_ticks(scales: &ChartScales) -> Vec<AxisTick> {
    let (first, last) = scales.x.domain();
    let (first, last) = (first.round() as usize, last.round() as usize);
    let span = last.saturating_sub(first);
    let step = span.div_ceil(AXIS_TICKS - 1).max(1);
    (first..=last)
        .step_by(step)
        .map(|index| AxisTick {
            offset: scales.x.map(index as f64),
            label: index.to_string(),
        })
        .collect()
}

pub fn y_ticks(scales: &ChartScales) -> Vec<AxisTick> {
    scales
        .y
        .ticks(AXIS_TICKS)
        .into_iter()
        .map(|value| AxisTick {
            offset: scales.y.map(value),
            label: format!("{value:.2}"),
        })
        .collect()
}

#[derive(Properties)]
pub struct ImbalanceChartProps {
    pub layout: Layout,
    pub history: SharedHistory,
    /// [`HistoryBuffer::total`] when the props were built. The buffer is
    /// shared with the poll loop, so this is what tells renders apart.
    pub revision: usize,
    /// Duration of the axis rescale animation.
    pub transition_ms: u32,
}

impl PartialEq for ImbalanceChartProps {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.history, &other.history)
            && self.revision == other.revision
            && self.layout == other.layout
            && self.transition_ms == other.transition_ms
    }
}

#[function_component(ImbalanceChart)]
pub fn imbalance_chart(props: &ImbalanceChartProps) -> Html {
    let ImbalanceChartProps {
        layout,
        history,
        transition_ms,
        ..
    } = props;
    let history = history.borrow();

    let width = layout.chart_width();
    let height = layout.chart_height();
    let scales = chart_scales(layout, &history);
    let transition = format!("transition: transform {transition_ms}ms;");

    let x_axis = x_ticks(&scales).into_iter().enumerate().map(|(i, tick)| {
        html! {
            <g key={i} class="tick" style={format!("transform: translate({:.1}px, 0px); {transition}", tick.offset)}>
                <line y2={TICK_SIZE.to_string()} stroke={AXIS_COLOR} />
                <text y={(TICK_SIZE + 12.0).to_string()} fill={TICK_LABEL_COLOR} font-size="11" text-anchor="middle">{ tick.label }</text>
            </g>
        }
    });

    let y_axis = y_ticks(&scales).into_iter().enumerate().map(|(i, tick)| {
        html! {
            <g key={i} class="tick" style={format!("transform: translate(0px, {:.1}px); {transition}", tick.offset)}>
                <line x2={(-TICK_SIZE).to_string()} stroke={AXIS_COLOR} />
                <text x={(-TICK_SIZE - 3.0).to_string()} dy="0.32em" fill={TICK_LABEL_COLOR} font-size="11" text-anchor="end">{ tick.label }</text>
            </g>
        }
    });

    html! {
        <g class="imbalance-chart" transform={format!("translate({:.1},{:.1})", layout.chart_x(), layout.chart_top())}>
            <g class="x-axis" transform={format!("translate(0,{height:.1})")}>
                <line x2={format!("{width:.1}")} stroke={AXIS_COLOR} />
                { for x_axis }
            </g>
            <g class="y-axis">
                <line y2={format!("{height:.1}")} stroke={AXIS_COLOR} />
                { for y_axis }
            </g>
            <path class="imbalance-line" d={line_path(&history, &scales)} fill="none" stroke={LINE_COLOR} stroke-width="2" />
        </g>
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;

    fn history_of(values: &[f64]) -> HistoryBuffer {
        let mut history = HistoryBuffer::default();
        for &v in values {
            history.push(v);
        }
        history
    }

    #[test]
    fn empty_history_has_no_path() {
        let layout = Layout::new(1200.0, 900.0, 3);
        let history = HistoryBuffer::default();
        let scales = chart_scales(&layout, &history);
        assert_eq!(line_path(&history, &scales), "");
        assert_eq!(scales.x.domain(), (0.0, 1.0));
        assert_eq!(scales.y.domain(), (0.0, -1.0));
    }

    #[test]
    fn path_uses_poll_index_as_x() {
        // chart is 900 x 300
        let layout = Layout::new(1200.0, 900.0, 3);
        let history = history_of(&[-0.5, -2.0, -1.0]);
        let scales = chart_scales(&layout, &history);
        assert_eq!(
            line_path(&history, &scales),
            "M0.0,75.0 L450.0,300.0 L900.0,150.0"
        );
    }

    #[test]
    fn y_domain_follows_floor() {
        let layout = Layout::new(1200.0, 900.0, 3);
        let history = history_of(&[-0.5]);
        assert_eq!(chart_scales(&layout, &history).y.domain(), (0.0, -1.0));
        let history = history_of(&[-0.5, -2.0]);
        assert_eq!(chart_scales(&layout, &history).y.domain(), (0.0, -2.0));
    }

    #[test]
    fn y_ticks_span_zero_to_floor() {
        let layout = Layout::new(1200.0, 900.0, 3);
        let history = history_of(&[-2.0]);
        let ticks = y_ticks(&chart_scales(&layout, &history));
        let labels: Vec<&str> = ticks.iter().map(|t| t.label.as_str()).collect();
        assert_eq!(labels, vec!["0.00", "-0.50", "-1.00", "-1.50", "-2.00"]);
        assert_eq!(ticks[0].offset, 0.0);
        assert_eq!(ticks[4].offset, 300.0);
    }

    #[test]
    fn default_y_ticks_keep_quarter_steps() {
        let layout = Layout::new(1200.0, 900.0, 3);
        let ticks = y_ticks(&chart_scales(&layout, &HistoryBuffer::default()));
        let labels: Vec<&str> = ticks.iter().map(|t| t.label.as_str()).collect();
        assert_eq!(labels, vec!["0.00", "-0.25", "-0.50", "-0.75", "-1.00"]);
    }

    #[test]
    fn props_change_with_revision_not_contents() {
        let history: SharedHistory = Rc::new(RefCell::new(HistoryBuffer::default()));
        let props = |revision| ImbalanceChartProps {
            layout: Layout::new(1200.0, 900.0, 3),
            history: Rc::clone(&history),
            revision,
            transition_ms: 1000,
        };
        let before = props(0);
        history.borrow_mut().push(-0.5);
        assert!(before == props(0));
        assert!(before != props(history.borrow().total()));

        let other = ImbalanceChartProps {
            history: Rc::new(RefCell::new(HistoryBuffer::default())),
            ..props(0)
        };
        assert!(before != other);
    }

    #[test]
    fn x_ticks_are_whole_polls() {
        let layout = Layout::new(1200.0, 900.0, 3);
        let history = history_of(&[-0.1; 11]);
        let ticks = x_ticks(&chart_scales(&layout, &history));
        let labels: Vec<&str> = ticks.iter().map(|t| t.label.as_str()).collect();
        assert_eq!(labels, vec!["0", "3", "6", "9"]);

        let short = history_of(&[-0.1]);
        let ticks = x_ticks(&chart_scales(&layout, &short));
        let labels: Vec<&str> = ticks.iter().map(|t| t.label.as_str()).collect();
        assert_eq!(labels, vec!["0", "1"]);
    }
}

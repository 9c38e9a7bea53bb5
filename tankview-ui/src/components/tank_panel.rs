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

//! SVG tanks: static outlines and labels plus animated fill rectangles.

use tankview_types::{StatusSample, TankConfig};
use yew::prelude::*;

use crate::layout::Layout;
use crate::scale::LevelScales;

/// Where and how one tank's fill is drawn.
#[derive(Debug, Clone, PartialEq)]
pub struct TankFill {
    /// Label index.
    pub index: usize,
    pub slot: usize,
    pub x: f64,
    pub y: f64,
    pub height: f64,
    pub color: String,
}

/// Fill geometry for every tank. Without a sample, or for tanks the sample
/// has no level for, tanks draw empty. Out-of-range levels are clamped.
pub fn tank_fills(
    config: &TankConfig,
    layout: &Layout,
    sample: Option<&StatusSample>,
) -> Vec<TankFill> {
    let scales = LevelScales::new(config.level_count, layout.tank_height);
    (0..config.tank_count())
        .map(|index| {
            let slot = config.slot(index).unwrap_or(index);
            let level = sample.map_or(0.0, |s| s.level(index));
            let height = scales.height(level);
            TankFill {
                index,
                slot,
                x: layout.slot_x(slot),
                y: layout.tank_bottom() - height,
                height,
                color: scales.color(level).to_string(),
            }
        })
        .collect()
}

#[derive(Properties, PartialEq)]
pub struct TankPanelProps {
    pub config: TankConfig,
    pub layout: Layout,
    /// Latest sample. `None` before the first poll.
    #[prop_or_default]
    pub sample: Option<StatusSample>,
    /// Duration of the fill animation.
    pub transition_ms: u32,
}

#[function_component(TankPanel)]
pub fn tank_panel(props: &TankPanelProps) -> Html {
    let TankPanelProps {
        config,
        layout,
        sample,
        transition_ms,
    } = props;

    // Outlines and labels only depend on the configuration.
    let outlines = use_memo((config.clone(), *layout), |(config, layout)| {
        (0..config.tank_count())
            .map(|index| {
                let slot = config.slot(index).unwrap_or(index);
                let x = layout.slot_x(slot);
                let label_x = x + layout.tank_width / 2.0;
                html! {
                    <g key={index} class="tank" data-slot={slot.to_string()}>
                        <rect
                            class="tank-outline"
                            x={format!("{x:.1}")}
                            y={format!("{:.1}", layout.tank_top())}
                            width={format!("{:.1}", layout.tank_width)}
                            height={format!("{:.1}", layout.tank_height)}
                            fill="none"
                            stroke="#666"
                            stroke-width="2"
                        />
                        <text
                            class="tank-label"
                            x={format!("{label_x:.1}")}
                            y={format!("{:.1}", layout.label_y())}
                            text-anchor="middle"
                            fill="#aaa"
                        >
                            { config.labels[index].clone() }
                        </text>
                    </g>
                }
            })
            .collect::<Vec<Html>>()
    });

    let fills = tank_fills(config, layout, sample.as_ref()).into_iter().map(|fill| {
        let style = format!(
            "y: {:.1}px; height: {:.1}px; fill: {}; transition: y {transition_ms}ms, height {transition_ms}ms, fill {transition_ms}ms;",
            fill.y, fill.height, fill.color
        );
        html! {
            <rect
                key={fill.index}
                class="tank-fill"
                data-tank={fill.index.to_string()}
                data-slot={fill.slot.to_string()}
                x={format!("{:.1}", fill.x)}
                y={format!("{:.1}", fill.y)}
                width={format!("{:.1}", layout.tank_width)}
                height={format!("{:.1}", fill.height)}
                fill={fill.color.clone()}
                {style}
            />
        }
    });

    html! {
        <g class="tank-panel">
            <g class="tank-fills">{ for fills }</g>
            <g class="tank-outlines">{ for outlines.iter().cloned() }</g>
        </g>
    }
}

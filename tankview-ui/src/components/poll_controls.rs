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

//! Start/stop buttons and the poll error banner.

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PollControlsProps {
    pub running: bool,
    pub on_start: Callback<MouseEvent>,
    pub on_stop: Callback<MouseEvent>,
}

/// Both buttons stay enabled; pressing start while running or stop while
/// idle does nothing.
#[function_component(PollControls)]
pub fn poll_controls(props: &PollControlsProps) -> Html {
    let class = classes!(
        "poll-controls",
        if props.running { "running" } else { "idle" }
    );

    html! {
        <div {class}>
            <button type="button" class="start-button" onclick={props.on_start.clone()}>
                <svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="currentColor" stroke="none">
                    <polygon points="6 4 20 12 6 20 6 4"></polygon>
                </svg>
                <span>{"Start"}</span>
            </button>
            <button type="button" class="stop-button" onclick={props.on_stop.clone()}>
                <svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="currentColor" stroke="none">
                    <rect x="6" y="6" width="12" height="12"></rect>
                </svg>
                <span>{"Stop"}</span>
            </button>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct PollErrorProps {
    pub message: AttrValue,
}

#[function_component(PollError)]
pub fn poll_error(props: &PollErrorProps) -> Html {
    html! {
        <div class="poll-error" role="alert">
            <span class="poll-error-message">{ props.message.clone() }</span>
            <span class="poll-error-hint">{" Press Start to try again."}</span>
        </div>
    }
}

/*
 * Copyright 2025 Security Union LLC
 * Licensed under MIT OR Apache-2.0
 */

use yew::prelude::*;

#[derive(Properties, Debug, PartialEq)]
pub struct ConfigErrorProps {
    pub message: String,
}

#[function_component(ConfigError)]
pub fn config_error(props: &ConfigErrorProps) -> Html {
    html! {
        <div class="error-container">
            <h2>{"Dashboard unavailable"}</h2>
            <p class="error-message">{ props.message.clone() }</p>
            <p class="error-hint">
                {"The host page must define window.__APP_CONFIG with levelCount, labels and order."}
            </p>
        </div>
    }
}

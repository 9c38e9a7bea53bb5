/*
 * Copyright 2025 Security Union LLC
 * Licensed under MIT OR Apache-2.0
 */

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ActionHeaderProps {
    /// Current simulation action; empty clears the header.
    #[prop_or_default]
    pub action: AttrValue,
}

#[function_component(ActionHeader)]
pub fn action_header(props: &ActionHeaderProps) -> Html {
    html! {
        <h1 class="action-header">{ props.action.clone() }</h1>
    }
}

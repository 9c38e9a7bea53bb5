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

use tankview_ui::components::config_error::ConfigError;
use tankview_ui::components::dashboard::Dashboard;
use tankview_ui::constants::dashboard_config;
use yew::prelude::*;

#[function_component(App)]
fn app_component() -> Html {
    match dashboard_config() {
        Ok(config) => html! { <Dashboard {config} /> },
        Err(e) => {
            log::error!("{e}");
            html! { <ConfigError message={e} /> }
        }
    }
}

fn main() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    if let Err(e) = console_log::init_with_level(level) {
        web_sys::console::warn_1(&format!("logger already initialized: {e}").into());
    }
    yew::Renderer::<App>::new().render();
}

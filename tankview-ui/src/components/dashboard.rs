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
 *
 * Unless you explicitly state otherwise, any contribution intentionally
 * submitted for inclusion in the work by you, as defined in the Apache-2.0
 * license, shall be dual licensed as above, without any additional terms or
 * conditions.
 */

//! Dashboard root: owns the poll loop and carries out its commands.

use gloo_timers::callback::Timeout;
use tankview_types::{StatusSample, TankConfig};
use yew::prelude::*;

use crate::components::action_header::ActionHeader;
use crate::components::imbalance_chart::ImbalanceChart;
use crate::components::poll_controls::{PollControls, PollError};
use crate::components::tank_panel::TankPanel;
use crate::constants::{status_endpoint, RuntimeConfig};
use crate::layout::Layout;
use crate::poll::{PollCommand, PollLoop};
use crate::status_api::StatusClient;

/// Used when the window size cannot be read.
const FALLBACK_VIEWPORT: (f64, f64) = (960.0, 720.0);

pub enum DashboardMsg {
    Start,
    Stop,
    /// The scheduled delay before the next poll elapsed.
    Tick,
    StatusReceived(StatusSample),
    StatusFailed(String),
}

#[derive(Properties, PartialEq)]
pub struct DashboardProps {
    pub config: RuntimeConfig,
    /// Drawing surface size. Read once from the window when absent.
    #[prop_or_default]
    pub viewport: Option<(f64, f64)>,
}

pub struct Dashboard {
    tanks: TankConfig,
    layout: Layout,
    poll: PollLoop,
    client: Result<StatusClient, String>,
    _timer: Option<Timeout>,
}

impl Component for Dashboard {
    type Message = DashboardMsg;
    type Properties = DashboardProps;

    fn create(ctx: &Context<Self>) -> Self {
        let config = &ctx.props().config;
        let tanks = config.tanks.clone();
        let (width, height) = ctx
            .props()
            .viewport
            .or_else(viewport_size)
            .unwrap_or(FALLBACK_VIEWPORT);
        let layout = Layout::new(width, height, tanks.tank_count());
        let client =
            status_endpoint(config).map(|url| StatusClient::new(&url, config.request_timeout_ms));

        match &client {
            Ok(client) => log::info!(
                "dashboard ready: {} tanks, {} levels, polling {} every {} ms",
                tanks.tank_count(),
                tanks.level_count,
                client.url(),
                config.poll_interval_ms
            ),
            Err(e) => log::error!("status endpoint unavailable: {e}"),
        }

        Self {
            tanks,
            layout,
            poll: PollLoop::new(config.poll_interval_ms, config.history_limit),
            client,
            _timer: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            DashboardMsg::Start => {
                let command = self.poll.start();
                self.run(ctx, command);
                true
            }
            DashboardMsg::Stop => self.poll.stop(),
            DashboardMsg::Tick => {
                self._timer = None;
                let command = self.poll.tick();
                self.run(ctx, command);
                false
            }
            DashboardMsg::StatusReceived(sample) => self.poll.receive(sample),
            DashboardMsg::StatusFailed(error) => {
                self.poll.fail(error);
                true
            }
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, _first_render: bool) {
        // The next poll is paced from the moment the last sample hit the DOM.
        let command = self.poll.rendered();
        self.run(ctx, command);
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let sample = self.poll.latest().cloned();
        let action = sample
            .as_ref()
            .map(|s| AttrValue::from(s.action.clone()))
            .unwrap_or_default();
        let interval_ms = self.poll.interval_ms();
        let (width, height) = (self.layout.width, self.layout.height);

        html! {
            <div class="dashboard">
                <div class="dashboard-header">
                    <ActionHeader {action} />
                    <PollControls
                        running={self.poll.is_running()}
                        on_start={ctx.link().callback(|_: MouseEvent| DashboardMsg::Start)}
                        on_stop={ctx.link().callback(|_: MouseEvent| DashboardMsg::Stop)}
                    />
                    {
                        if let Some(error) = self.poll.error() {
                            html! { <PollError message={AttrValue::from(error.to_string())} /> }
                        } else {
                            html! {}
                        }
                    }
                </div>
                <svg
                    class="surface"
                    width={format!("{width:.0}")}
                    height={format!("{height:.0}")}
                    viewBox={format!("0 0 {width:.0} {height:.0}")}
                >
                    <TankPanel
                        config={self.tanks.clone()}
                        layout={self.layout}
                        {sample}
                        transition_ms={interval_ms / 2}
                    />
                    <ImbalanceChart
                        layout={self.layout}
                        history={self.poll.shared_history()}
                        revision={self.poll.poll_count()}
                        transition_ms={interval_ms}
                    />
                </svg>
            </div>
        }
    }
}

impl Dashboard {
    fn run(&mut self, ctx: &Context<Self>, command: PollCommand) {
        match command {
            PollCommand::None => {}
            PollCommand::Fetch => match &self.client {
                Ok(client) => {
                    let client = client.clone();
                    let link = ctx.link().clone();
                    wasm_bindgen_futures::spawn_local(async move {
                        match client.fetch_status().await {
                            Ok(sample) => link.send_message(DashboardMsg::StatusReceived(sample)),
                            Err(e) => link.send_message(DashboardMsg::StatusFailed(e.to_string())),
                        }
                    });
                }
                Err(e) => ctx.link().send_message(DashboardMsg::StatusFailed(e.clone())),
            },
            PollCommand::Schedule(delay_ms) => {
                let link = ctx.link().clone();
                self._timer = Some(Timeout::new(delay_ms, move || {
                    link.send_message(DashboardMsg::Tick);
                }));
            }
        }
    }
}

fn viewport_size() -> Option<(f64, f64)> {
    let window = gloo_utils::window();
    let width = window.inner_width().ok()?.as_f64()?;
    let height = window.inner_height().ok()?.as_f64()?;
    Some((width, height))
}

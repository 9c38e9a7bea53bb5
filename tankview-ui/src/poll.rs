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

//! Start/stop controlled polling loop.
//!
//! [`PollLoop`] owns every piece of mutable dashboard state (run state,
//! history, latest sample) but never touches timers or the network. Each
//! transition returns a [`PollCommand`] for the caller to carry out, which
//! keeps the loop testable without a browser.
//!
//! One cycle is `Fetch` -> [`PollLoop::receive`] -> render ->
//! [`PollLoop::rendered`] -> `Schedule` -> [`PollLoop::tick`] -> `Fetch`.
//! The next poll is only scheduled once the previous sample has been drawn,
//! so polls never overlap and a slow response pushes the next one out.
//!
//! Stopping is lazy: an outstanding request or timer still runs and renders
//! once, but nothing is scheduled after it.

use std::cell::{Ref, RefCell};
use std::rc::Rc;

use tankview_types::StatusSample;

use crate::history::{HistoryBuffer, SharedHistory};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Idle,
    Running,
}

/// Where the current chain is in its cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Nothing outstanding; `start()` opens a new chain.
    Quiescent,
    /// A status request is in flight.
    Fetching,
    /// A sample was applied and is waiting to be drawn.
    Rendering,
    /// The next poll's timer is armed.
    Waiting,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollCommand {
    None,
    /// Request `/status` now.
    Fetch,
    /// Call [`PollLoop::tick`] after this many milliseconds.
    Schedule(u32),
}

#[derive(Debug)]
pub struct PollLoop {
    state: RunState,
    phase: Phase,
    interval_ms: u32,
    history: SharedHistory,
    latest: Option<StatusSample>,
    error: Option<String>,
}

impl PollLoop {
    pub fn new(interval_ms: u32, history_limit: Option<usize>) -> Self {
        Self {
            state: RunState::Idle,
            phase: Phase::Quiescent,
            interval_ms,
            history: Rc::new(RefCell::new(HistoryBuffer::new(history_limit))),
            latest: None,
            error: None,
        }
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == RunState::Running
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn interval_ms(&self) -> u32 {
        self.interval_ms
    }

    pub fn history(&self) -> Ref<'_, HistoryBuffer> {
        self.history.borrow()
    }

    /// Handle for the chart. Samples are pushed in place, so the handle stays
    /// current and no poll copies the buffer.
    pub fn shared_history(&self) -> SharedHistory {
        Rc::clone(&self.history)
    }

    pub fn poll_count(&self) -> usize {
        self.history.borrow().total()
    }

    pub fn latest(&self) -> Option<&StatusSample> {
        self.latest.as_ref()
    }

    /// Error from the last failed poll, cleared by the next `start()`.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Start polling. No-op while running. If a previous chain still has a
    /// request, render or timer outstanding it is reused instead of opening
    /// a second one.
    pub fn start(&mut self) -> PollCommand {
        if self.state == RunState::Running {
            log::debug!("start ignored: already running");
            return PollCommand::None;
        }
        self.state = RunState::Running;
        self.error = None;
        if self.phase == Phase::Quiescent {
            log::debug!("polling started");
            self.phase = Phase::Fetching;
            PollCommand::Fetch
        } else {
            log::debug!("polling resumed with {:?} outstanding", self.phase);
            PollCommand::None
        }
    }

    /// Stop polling after whatever is outstanding. Returns whether the state
    /// changed.
    pub fn stop(&mut self) -> bool {
        if self.state == RunState::Idle {
            return false;
        }
        log::debug!("polling stopped during {:?}", self.phase);
        self.state = RunState::Idle;
        true
    }

    /// The scheduled delay elapsed. The armed poll runs even if polling was
    /// stopped meanwhile.
    pub fn tick(&mut self) -> PollCommand {
        if self.phase != Phase::Waiting {
            log::warn!("unexpected poll timer in {:?}", self.phase);
            return PollCommand::None;
        }
        self.phase = Phase::Fetching;
        PollCommand::Fetch
    }

    /// Apply a status response. Returns whether there is anything new to
    /// draw.
    pub fn receive(&mut self, sample: StatusSample) -> bool {
        if self.phase != Phase::Fetching {
            log::warn!("dropping status received in {:?}", self.phase);
            return false;
        }
        let mut history = self.history.borrow_mut();
        history.push(sample.imbalance);
        log::debug!(
            "poll {} imbalance={} floor={}",
            history.total(),
            sample.imbalance,
            history.floor()
        );
        drop(history);
        self.latest = Some(sample);
        self.phase = Phase::Rendering;
        true
    }

    /// The request failed. The chain ends and the error is kept for display;
    /// pressing start begins a fresh chain. History is kept.
    pub fn fail(&mut self, error: String) {
        if self.phase != Phase::Fetching {
            log::warn!("dropping poll error received in {:?}: {error}", self.phase);
            return;
        }
        log::error!("status poll failed: {error}");
        self.phase = Phase::Quiescent;
        self.state = RunState::Idle;
        self.error = Some(error);
    }

    /// The applied sample is on screen. Schedules the next poll if still
    /// running, otherwise ends the chain.
    pub fn rendered(&mut self) -> PollCommand {
        if self.phase != Phase::Rendering {
            return PollCommand::None;
        }
        if self.state == RunState::Running {
            self.phase = Phase::Waiting;
            PollCommand::Schedule(self.interval_ms)
        } else {
            log::debug!("polling chain ended after {} polls", self.poll_count());
            self.phase = Phase::Quiescent;
            PollCommand::None
        }
    }
}

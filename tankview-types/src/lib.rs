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

//! Shared types for the tank level dashboard.
//!
//! This crate defines the contract between the host page, the simulation's
//! status endpoint and the browser UI. It is intentionally framework-agnostic:
//! no Yew, no web-sys, so everything here is testable on the host.

pub mod config;
pub mod error;
pub mod status;

pub use config::TankConfig;
pub use error::ConfigError;
pub use status::StatusSample;

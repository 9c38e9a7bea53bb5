pub mod action_header;
pub mod config_error;
pub mod dashboard;
pub mod imbalance_chart;
pub mod poll_controls;
pub mod tank_panel;

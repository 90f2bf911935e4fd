//! Terminal front end: wires the core state machine to the engine and stdout.
mod app;
pub mod cli;
mod config;
mod effects;
mod input;
mod logging;
mod ui;

pub use app::run_app;

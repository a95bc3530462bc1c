//! Noughts - terminal front-end for the noughts and crosses engine.
//!
//! The front-end owns a single [`noughts_core::GameEngine`] through
//! [`App`] and never decides rules itself: key presses become
//! [`Action`]s, actions become engine calls, and [`ui::draw`] renders
//! whatever state the engine reports.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod cli;
mod config;
pub mod input;
pub mod ui;

pub use app::App;
pub use cli::Cli;
pub use config::{Config, ConfigError};
pub use input::Action;

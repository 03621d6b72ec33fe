#![forbid(unsafe_code)]

//! Storefront Runtime
//!
//! Ties the core and render crates together into an Elm-style application
//! loop.
//!
//! # Key Components
//!
//! - [`Model`] - Trait for application state and behavior
//! - [`Cmd`] - Commands for side effects
//! - [`Program`] - Blocking event loop over a real terminal
//! - [`ProgramSimulator`] - Deterministic, terminal-free driver for tests
//!
//! # How it fits in the system
//! Input arrives from `storefront-core` as [`Event`](storefront_core::event::Event)s,
//! is converted into the model's message type and fed to `Model::update`.
//! `Model::view` draws into a [`Frame`](storefront_render::frame::Frame),
//! which the runtime diffs and hands to the presenter.

pub mod program;
pub mod simulator;

pub use program::{Cmd, Model, Program, ProgramConfig};
pub use simulator::{CmdRecord, ProgramSimulator};

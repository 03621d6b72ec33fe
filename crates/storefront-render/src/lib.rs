#![forbid(unsafe_code)]

//! Render kernel: cells, buffers, frames, diffs, and the terminal presenter.
//!
//! # Pipeline
//!
//! 1. `Model::view()` draws into a [`frame::Frame`] (a [`buffer::Buffer`] plus
//!    a [`frame::HitGrid`] for mouse targeting).
//! 2. [`diff::BufferDiff`] compares the new buffer with the previous one.
//! 3. [`presenter::Presenter`] writes only the changed runs to the terminal.

pub mod buffer;
pub mod cell;
pub mod diff;
pub mod frame;
pub mod presenter;
pub mod style;

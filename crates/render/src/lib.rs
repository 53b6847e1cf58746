//! Backend-agnostic frame contract.
//!
//! Each frame the core yields exactly three matrix kinds: one projection
//! matrix, one view matrix, and N model matrices in instance-index order.
//! Backends consume a [`FrameMatrices`] snapshot and never mutate scene or
//! camera state.

mod frame;
mod renderer;

pub use frame::{FrameError, FrameMatrices};
pub use renderer::{DebugTextRenderer, Renderer};

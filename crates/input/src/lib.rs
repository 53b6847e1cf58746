//! Desktop input mapped to logical actions.
//!
//! # Invariants
//! - The scene and camera consume [`Action`]s, never raw key codes.
//! - Movement and scaling are driven by key-held state sampled once per
//!   frame, not by key-down edges.

mod action;
mod bindings;

pub use action::Action;
pub use bindings::{Bindings, HeldKeys};

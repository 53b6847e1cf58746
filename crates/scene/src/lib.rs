//! Scene transform composition for the cube grid.
//!
//! A [`CubeGroup`] owns one base [`Transform`] and a fixed list of
//! per-instance offsets; every instance derives its world matrix from the
//! shared base plus its own static offset.
//!
//! # Invariants
//! - Instance offsets are immutable after construction.
//! - The shared scale is stored once (on the base transform) and never drops
//!   below [`MIN_SCALE`].

mod config;
mod group;
mod transform;

pub use config::SceneConfig;
pub use group::{CubeGroup, MIN_SCALE, SceneError};
pub use transform::Transform;

//! wgpu render backend for the cube grid.
//!
//! Uploads the composed frame matrices and draws a shared non-indexed
//! 36-vertex unit-cube buffer once per instance, depth-tested, optionally in
//! wireframe.
//!
//! # Invariants
//! - The renderer never mutates scene or camera state.
//! - Instances draw in model-matrix index order.

mod gpu;
mod shaders;

pub use gpu::WgpuRenderer;

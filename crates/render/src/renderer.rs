use crate::FrameMatrices;
use std::fmt::Write;

/// Renderer-agnostic interface. All backends implement this trait.
///
/// A renderer consumes the composed frame matrices and produces output. It
/// never mutates scene or camera state.
pub trait Renderer {
    /// The output type produced by this renderer.
    type Output;

    /// Render one frame from the given matrix snapshot.
    fn render(&self, frame: &FrameMatrices) -> Self::Output;
}

/// Debug text renderer for headless use.
///
/// Produces a human-readable description of the frame: instance count and
/// each instance's world translation. Useful for CLI output, logging, and
/// testing the frame contract without a GPU.
#[derive(Debug, Default)]
pub struct DebugTextRenderer;

impl DebugTextRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Renderer for DebugTextRenderer {
    type Output = String;

    fn render(&self, frame: &FrameMatrices) -> String {
        let mut out = format!("=== Frame: {} instances ===\n", frame.models.len());
        for (index, model) in frame.models.iter().enumerate() {
            let t = model.w_axis;
            let _ = writeln!(
                out,
                "  [{index}] world=({:.2}, {:.2}, {:.2})",
                t.x, t.y, t.z
            );
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cubegrid_camera::OrbitFlyCamera;
    use cubegrid_scene::{CubeGroup, SceneConfig};

    #[test]
    fn debug_renderer_lists_every_instance() {
        let camera = OrbitFlyCamera::default();
        let group = CubeGroup::new(SceneConfig::default()).unwrap();
        let frame = FrameMatrices::compose(&camera, &group, 1.0).unwrap();

        let renderer = DebugTextRenderer::new();
        let output = renderer.render(&frame);
        assert!(output.contains("10 instances"));
        assert!(output.contains("[9]"));
    }
}

use cubegrid_camera::{CameraError, OrbitFlyCamera};
use cubegrid_scene::{CubeGroup, SceneError};
use glam::Mat4;

/// Errors surfaced while composing a frame.
#[derive(Debug, thiserror::Error)]
pub enum FrameError {
    #[error(transparent)]
    Scene(#[from] SceneError),
    #[error(transparent)]
    Camera(#[from] CameraError),
}

/// The matrices a backend needs for one frame.
///
/// `models` is ordered by instance index; backends must draw in this order so
/// output stays stable across frames.
#[derive(Debug, Clone)]
pub struct FrameMatrices {
    pub projection: Mat4,
    pub view: Mat4,
    pub models: Vec<Mat4>,
}

impl FrameMatrices {
    /// Query the camera and cube group once and snapshot their matrices.
    ///
    /// Callers apply all of the frame's input before composing, so the
    /// snapshot is consistent with the input that arrived during the frame.
    pub fn compose(
        camera: &OrbitFlyCamera,
        group: &CubeGroup,
        aspect: f32,
    ) -> Result<Self, FrameError> {
        let projection = camera.projection_matrix(aspect)?;
        let view = camera.view_matrix();
        let mut models = Vec::with_capacity(group.len());
        for index in 0..group.len() {
            models.push(group.world_matrix(index)?);
        }
        Ok(Self {
            projection,
            view,
            models,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cubegrid_scene::SceneConfig;
    use glam::Vec3;

    #[test]
    fn compose_yields_one_model_per_instance() {
        let camera = OrbitFlyCamera::default();
        let group = CubeGroup::new(SceneConfig::default()).unwrap();
        let frame = FrameMatrices::compose(&camera, &group, 16.0 / 9.0).unwrap();
        assert_eq!(frame.models.len(), group.len());
    }

    #[test]
    fn models_follow_instance_index_order() {
        let camera = OrbitFlyCamera::default();
        let config = SceneConfig {
            base_position: Vec3::ZERO,
            offsets: vec![Vec3::ZERO, Vec3::new(1.0, 0.0, 0.0), Vec3::new(0.0, 2.0, 0.0)],
            scale_rate: 0.5,
        };
        let group = CubeGroup::new(config.clone()).unwrap();
        let frame = FrameMatrices::compose(&camera, &group, 1.0).unwrap();
        for (index, offset) in config.offsets.iter().enumerate() {
            let placed = frame.models[index].transform_point3(Vec3::ZERO);
            assert!((placed - *offset).length() < 1e-5);
        }
    }

    #[test]
    fn compose_rejects_bad_aspect() {
        let camera = OrbitFlyCamera::default();
        let group = CubeGroup::new(SceneConfig::default()).unwrap();
        let result = FrameMatrices::compose(&camera, &group, 0.0);
        assert!(matches!(result, Err(FrameError::Camera(_))));
    }
}

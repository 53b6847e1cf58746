use crate::config::SceneConfig;
use crate::transform::Transform;
use glam::{Mat4, Vec3};

/// Smallest shared scale the group clamps to. A zero or negative scale would
/// make every instance matrix non-invertible.
pub const MIN_SCALE: f32 = 0.1;

/// Errors from scene construction and instance queries.
#[derive(Debug, thiserror::Error)]
pub enum SceneError {
    #[error("cube group requires at least one instance offset")]
    EmptyOffsets,
    #[error("instance index {index} out of range for {len} instances")]
    IndexOutOfRange { index: usize, len: usize },
}

/// A group of unit cubes sharing one base transform.
///
/// Each instance sits at a static offset in the base's local frame; offsets
/// are never scaled or rotated per instance — only the shared base transform
/// applies. The shared scale lives on the base transform, so every instance
/// sees the same value by construction.
pub struct CubeGroup {
    base: Transform,
    offsets: Vec<Vec3>,
    scale_rate: f32,
}

impl CubeGroup {
    /// Build a group from a scene configuration.
    pub fn new(config: SceneConfig) -> Result<Self, SceneError> {
        if config.offsets.is_empty() {
            return Err(SceneError::EmptyOffsets);
        }
        let mut base = Transform::default();
        base.set_position(config.base_position);
        Ok(Self {
            base,
            offsets: config.offsets,
            scale_rate: config.scale_rate,
        })
    }

    /// Number of cube instances. Fixed at construction.
    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    /// Always false: construction rejects empty offset lists.
    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    /// The shared base transform.
    pub fn base(&self) -> &Transform {
        &self.base
    }

    /// Reposition the whole group by moving its base.
    pub fn set_base_position(&mut self, position: Vec3) {
        self.base.set_position(position);
    }

    /// Uniform scale shared by every instance.
    pub fn shared_scale(&self) -> f32 {
        self.base.scale
    }

    /// World matrix for one instance: the base world matrix times the
    /// instance translation.
    pub fn world_matrix(&self, index: usize) -> Result<Mat4, SceneError> {
        let offset = self
            .offsets
            .get(index)
            .ok_or(SceneError::IndexOutOfRange {
                index,
                len: self.offsets.len(),
            })?;
        Ok(self.base.world_matrix() * Mat4::from_translation(*offset))
    }

    /// Grow the shared scale by `scale_rate * dt`. Negative `dt` is a no-op.
    pub fn scale_up(&mut self, dt: f32) {
        if dt < 0.0 {
            return;
        }
        self.base.scale += self.scale_rate * dt;
    }

    /// Shrink the shared scale by `scale_rate * dt`, clamping at
    /// [`MIN_SCALE`]. Negative `dt` is a no-op.
    pub fn scale_down(&mut self, dt: f32) {
        if dt < 0.0 {
            return;
        }
        self.base.scale = (self.base.scale - self.scale_rate * dt).max(MIN_SCALE);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < 1e-5
    }

    fn two_cube_group() -> CubeGroup {
        CubeGroup::new(SceneConfig {
            base_position: Vec3::ZERO,
            offsets: vec![Vec3::ZERO, Vec3::new(1.0, 0.0, 0.0)],
            scale_rate: 0.5,
        })
        .unwrap()
    }

    #[test]
    fn empty_offsets_rejected() {
        let result = CubeGroup::new(SceneConfig {
            base_position: Vec3::ZERO,
            offsets: vec![],
            scale_rate: 0.5,
        });
        assert!(matches!(result, Err(SceneError::EmptyOffsets)));
    }

    #[test]
    fn index_out_of_range_rejected() {
        let group = two_cube_group();
        let err = group.world_matrix(2).unwrap_err();
        assert!(matches!(err, SceneError::IndexOutOfRange { index: 2, len: 2 }));
    }

    #[test]
    fn instance_matrix_is_base_times_offset() {
        let mut group = CubeGroup::new(SceneConfig::default()).unwrap();
        group.set_base_position(Vec3::new(0.5, 0.0, -1.0));
        group.scale_up(1.0);
        for index in 0..group.len() {
            let expected = group.base().world_matrix()
                * Mat4::from_translation(
                    SceneConfig::default().offsets[index],
                );
            let actual = group.world_matrix(index).unwrap();
            assert!(actual.abs_diff_eq(expected, 1e-5));
        }
    }

    #[test]
    fn second_cube_sits_one_unit_over() {
        let group = two_cube_group();
        let m = group.world_matrix(1).unwrap();
        assert!(close(m.transform_point3(Vec3::ZERO), Vec3::new(1.0, 0.0, 0.0)));
    }

    #[test]
    fn scaling_up_moves_offset_cubes_outward() {
        let mut group = two_cube_group();
        group.scale_up(2.0); // 1.0 + 0.5 * 2.0 = 2.0
        assert_eq!(group.shared_scale(), 2.0);
        let m = group.world_matrix(1).unwrap();
        assert!(close(m.transform_point3(Vec3::ZERO), Vec3::new(2.0, 0.0, 0.0)));
    }

    #[test]
    fn scale_up_is_monotonic() {
        let mut group = two_cube_group();
        let mut last = group.shared_scale();
        for _ in 0..10 {
            group.scale_up(0.1);
            assert!(group.shared_scale() > last);
            last = group.shared_scale();
        }
    }

    #[test]
    fn scale_down_stops_at_floor() {
        let mut group = two_cube_group();
        for _ in 0..10 {
            group.scale_down(1.0);
            assert!(group.shared_scale() >= MIN_SCALE);
        }
        // 1.0 - 10 * 0.5 would be -4.0 without the clamp.
        assert_eq!(group.shared_scale(), MIN_SCALE);
    }

    #[test]
    fn negative_dt_is_a_noop() {
        let mut group = two_cube_group();
        group.scale_up(-1.0);
        group.scale_down(-1.0);
        assert_eq!(group.shared_scale(), 1.0);
    }

    #[test]
    fn shared_scale_mirrors_base() {
        let mut group = two_cube_group();
        group.scale_up(1.0);
        assert_eq!(group.shared_scale(), group.base().scale);
    }
}

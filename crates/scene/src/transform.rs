use glam::{Mat4, Quat, Vec3};

/// Rigid-body pose: position, orientation, uniform scale.
///
/// # Invariants
/// - `orientation` is a unit quaternion.
/// - `scale` is strictly positive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    pub orientation: Quat,
    pub scale: f32,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            orientation: Quat::IDENTITY,
            scale: 1.0,
        }
    }
}

impl Transform {
    /// World matrix composed as translate * rotate * scale.
    pub fn world_matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(
            Vec3::splat(self.scale),
            self.orientation,
            self.position,
        )
    }

    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < 1e-5
    }

    #[test]
    fn default_is_identity() {
        let t = Transform::default();
        assert_eq!(t.position, Vec3::ZERO);
        assert_eq!(t.orientation, Quat::IDENTITY);
        assert_eq!(t.scale, 1.0);
        let m = t.world_matrix();
        assert!(close(m.transform_point3(Vec3::new(1.0, 2.0, 3.0)), Vec3::new(1.0, 2.0, 3.0)));
    }

    #[test]
    fn world_matrix_translates() {
        let mut t = Transform::default();
        t.set_position(Vec3::new(1.0, -2.0, 5.0));
        let m = t.world_matrix();
        assert!(close(m.transform_point3(Vec3::ZERO), Vec3::new(1.0, -2.0, 5.0)));
    }

    #[test]
    fn scale_applies_before_translation() {
        let t = Transform {
            position: Vec3::new(1.0, 0.0, 0.0),
            scale: 2.0,
            ..Transform::default()
        };
        // Local (1,0,0) scales to (2,0,0), then translates to (3,0,0).
        let m = t.world_matrix();
        assert!(close(m.transform_point3(Vec3::X), Vec3::new(3.0, 0.0, 0.0)));
    }

    #[test]
    fn rotation_applies_after_scale() {
        let t = Transform {
            orientation: Quat::from_rotation_y(std::f32::consts::FRAC_PI_2),
            scale: 2.0,
            ..Transform::default()
        };
        // Local +X scales to (2,0,0), then a +90 degree yaw carries it to -Z.
        let m = t.world_matrix();
        assert!(close(m.transform_point3(Vec3::X), Vec3::new(0.0, 0.0, -2.0)));
    }
}

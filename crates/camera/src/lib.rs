//! First-person fly camera: yaw/pitch look from mouse deltas, directional
//! movement from sampled keyboard state, field-of-view zoom from scroll.
//!
//! Angles are radians throughout; degree literals are converted with
//! `.to_radians()` at the call site.
//!
//! # Invariants
//! - Pitch stays strictly inside (-89°, +89°) when constrained, so the view
//!   never flips over the poles.
//! - Field of view stays within [1°, 45°].
//! - Yaw is never wrapped; it accumulates for the whole session.

use glam::{Mat4, Vec3};

/// Near clipping plane, fixed for the whole scene.
pub const NEAR_PLANE: f32 = 0.1;
/// Far clipping plane, fixed for the whole scene.
pub const FAR_PLANE: f32 = 100.0;

/// Margin keeping pitch strictly inside the +/-89 degree bounds.
const PITCH_MARGIN: f32 = 1e-4;

/// Movement directions consumed by [`OrbitFlyCamera::process_keyboard`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveDirection {
    Forward,
    Backward,
    Left,
    Right,
}

/// Errors from camera queries.
#[derive(Debug, thiserror::Error)]
pub enum CameraError {
    #[error("aspect ratio must be positive and finite, got {0}")]
    InvalidAspect(f32),
}

/// First-person fly camera with yaw/pitch orientation and bounded fov zoom.
///
/// Yaw of -90° looks toward -Z; pitch 0 is horizontal. World up is +Y.
#[derive(Debug, Clone)]
pub struct OrbitFlyCamera {
    pub position: Vec3,
    /// Horizontal look angle in radians. Unbounded.
    pub yaw: f32,
    /// Vertical look angle in radians. Clamped by the mouse handler.
    pub pitch: f32,
    /// Vertical field of view in radians. Clamped to [1°, 45°].
    pub fov: f32,
    /// Movement speed in units per second.
    pub speed: f32,
    /// Look sensitivity in radians per mouse count.
    pub sensitivity: f32,
}

impl Default for OrbitFlyCamera {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, 10.0),
            yaw: -90.0_f32.to_radians(),
            pitch: 0.0,
            fov: 45.0_f32.to_radians(),
            speed: 2.5,
            sensitivity: 0.002,
        }
    }
}

impl OrbitFlyCamera {
    /// Camera at `position` with the default orientation and tuning.
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            ..Self::default()
        }
    }

    /// Look direction derived from yaw and pitch.
    pub fn front(&self) -> Vec3 {
        Vec3::new(
            self.yaw.cos() * self.pitch.cos(),
            self.pitch.sin(),
            self.yaw.sin() * self.pitch.cos(),
        )
        .normalize()
    }

    /// Strafe axis: front crossed with world up.
    pub fn right(&self) -> Vec3 {
        self.front().cross(Vec3::Y).normalize()
    }

    /// Camera-space up, orthogonal to front and right.
    pub fn up(&self) -> Vec3 {
        self.right().cross(self.front())
    }

    /// Displace the camera along the look/strafe axes by `speed * dt`.
    ///
    /// Forward and backward motion follow the full look direction, vertical
    /// component included. Negative `dt` is a no-op.
    pub fn process_keyboard(&mut self, direction: MoveDirection, dt: f32) {
        if dt < 0.0 {
            return;
        }
        let velocity = self.speed * dt;
        match direction {
            MoveDirection::Forward => self.position += self.front() * velocity,
            MoveDirection::Backward => self.position -= self.front() * velocity,
            MoveDirection::Left => self.position -= self.right() * velocity,
            MoveDirection::Right => self.position += self.right() * velocity,
        }
    }

    /// Apply a mouse delta to yaw and pitch.
    ///
    /// Moving the mouse toward the bottom of the screen (positive `dy`)
    /// pitches the view down. Yaw accumulates without wrapping. When
    /// `constrain_pitch` is set, pitch is clamped strictly inside +/-89°.
    pub fn process_mouse_movement(&mut self, dx: f32, dy: f32, constrain_pitch: bool) {
        self.yaw += dx * self.sensitivity;
        self.pitch -= dy * self.sensitivity;
        if constrain_pitch {
            let limit = 89.0_f32.to_radians() - PITCH_MARGIN;
            self.pitch = self.pitch.clamp(-limit, limit);
        }
    }

    /// Zoom by narrowing or widening the field of view, one degree per
    /// scroll line, clamped to [1°, 45°].
    pub fn process_mouse_scroll(&mut self, y_offset: f32) {
        self.fov = (self.fov - y_offset.to_radians())
            .clamp(1.0_f32.to_radians(), 45.0_f32.to_radians());
    }

    /// View matrix looking from `position` along the current front vector.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.position + self.front(), self.up())
    }

    /// Perspective projection for the current fov and the given aspect ratio.
    pub fn projection_matrix(&self, aspect: f32) -> Result<Mat4, CameraError> {
        if !aspect.is_finite() || aspect <= 0.0 {
            return Err(CameraError::InvalidAspect(aspect));
        }
        Ok(Mat4::perspective_rh(self.fov, aspect, NEAR_PLANE, FAR_PLANE))
    }
}

/// A logical operation produced by the desktop input layer.
///
/// The frame loop translates actions into camera movement and shared-scale
/// changes, so key bindings can change without touching the core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Move the camera along its look direction.
    MoveForward,
    /// Move the camera against its look direction.
    MoveBackward,
    /// Strafe the camera left.
    MoveLeft,
    /// Strafe the camera right.
    MoveRight,
    /// Grow the cube group's shared scale.
    ScaleUp,
    /// Shrink the cube group's shared scale.
    ScaleDown,
    /// Close the application.
    Quit,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn actions_compare_by_value() {
        assert_eq!(Action::MoveForward, Action::MoveForward);
        assert_ne!(Action::ScaleUp, Action::ScaleDown);
    }
}

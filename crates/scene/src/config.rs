use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Scene layout handed to [`CubeGroup::new`](crate::CubeGroup::new).
///
/// Keeps the authored offset list out of the transform-composition logic, so
/// layouts can be swapped from a file without touching the core.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneConfig {
    /// World position of the group's base transform.
    pub base_position: Vec3,
    /// Per-instance offsets in the base's local frame. Order is draw order.
    pub offsets: Vec<Vec3>,
    /// Shared-scale change per second for scale up/down.
    #[serde(default = "default_scale_rate")]
    pub scale_rate: f32,
}

fn default_scale_rate() -> f32 {
    0.5
}

impl Default for SceneConfig {
    /// The authored staircase layout: two columns of five cubes.
    fn default() -> Self {
        Self {
            base_position: Vec3::ZERO,
            offsets: vec![
                Vec3::new(0.0, 0.0, 0.0),
                Vec3::new(1.0, 0.0, 0.0),
                Vec3::new(1.0, 1.0, 0.0),
                Vec3::new(1.0, 2.0, 0.0),
                Vec3::new(2.0, 2.0, 0.0),
                Vec3::new(0.0, 0.0, -1.0),
                Vec3::new(1.0, 0.0, -1.0),
                Vec3::new(1.0, 1.0, -1.0),
                Vec3::new(1.0, 2.0, -1.0),
                Vec3::new(2.0, 2.0, -1.0),
            ],
            scale_rate: 0.5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_layout_has_ten_cubes() {
        let config = SceneConfig::default();
        assert_eq!(config.offsets.len(), 10);
        assert_eq!(config.base_position, Vec3::ZERO);
        assert_eq!(config.scale_rate, 0.5);
    }

    #[test]
    fn deserializes_from_yaml() {
        let yaml = "
base_position: [0.0, 1.0, 0.0]
offsets:
  - [0.0, 0.0, 0.0]
  - [1.0, 0.0, 0.0]
scale_rate: 0.25
";
        let config: SceneConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.base_position, Vec3::new(0.0, 1.0, 0.0));
        assert_eq!(config.offsets.len(), 2);
        assert_eq!(config.scale_rate, 0.25);
    }

    #[test]
    fn scale_rate_defaults_when_omitted() {
        let yaml = "
base_position: [0.0, 0.0, 0.0]
offsets:
  - [0.0, 0.0, 0.0]
";
        let config: SceneConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.scale_rate, 0.5);
    }

    #[test]
    fn round_trips_through_yaml() {
        let config = SceneConfig::default();
        let yaml = serde_yaml::to_string(&config).unwrap();
        let back: SceneConfig = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(back.offsets, config.offsets);
    }
}

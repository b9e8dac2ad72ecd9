//! Scene configuration loaded from JSON.

use std::path::Path;

use serde::{Deserialize, Serialize};

use spruce_kernel::{Axis, GeometryError, Point3d, Projection, Transformation};

/// Errors during scene configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(String),

    #[error("invalid config value: {0}")]
    Invalid(#[from] GeometryError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectionKind {
    Orthographic,
    Central,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionConfig {
    pub kind: ProjectionKind,
    pub axis: Axis,
    #[serde(default = "default_distance")]
    pub distance_from_screen: f64,
}

fn default_distance() -> f64 {
    200.0
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpruceConfig {
    pub center: [f64; 3],
    pub height: f64,
    pub radius: f64,
    pub levels: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewConfig {
    pub x_rotation: f64,
    pub y_rotation: f64,
    pub scale: f64,
}

/// Everything the demo needs to build and render one scene.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SceneConfig {
    pub spruce: SpruceConfig,
    pub view: ViewConfig,
    pub projection: ProjectionConfig,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            spruce: SpruceConfig {
                center: [0.0, 0.0, 0.0],
                height: 150.0,
                radius: 75.0,
                levels: 3,
            },
            view: ViewConfig {
                x_rotation: 45.0,
                y_rotation: 45.0,
                scale: 1.0,
            },
            projection: ProjectionConfig {
                kind: ProjectionKind::Central,
                axis: Axis::Z,
                distance_from_screen: default_distance(),
            },
        }
    }
}

impl SceneConfig {
    pub fn center(&self) -> Point3d {
        Point3d::from_array(self.spruce.center)
    }

    pub fn transformation(&self) -> Transformation {
        Transformation::new(self.view.x_rotation, self.view.y_rotation, self.view.scale)
    }

    pub fn projection(&self) -> Result<Projection, GeometryError> {
        match self.projection.kind {
            ProjectionKind::Orthographic => Ok(Projection::orthographic(self.projection.axis)),
            ProjectionKind::Central => {
                Projection::central(self.projection.axis, self.projection.distance_from_screen)
            }
        }
    }
}

/// Load a scene configuration from a JSON file.
pub fn load_config(path: &Path) -> Result<SceneConfig, ConfigError> {
    let json = std::fs::read_to_string(path)?;
    let config: SceneConfig =
        serde_json::from_str(&json).map_err(|e| ConfigError::Parse(e.to_string()))?;

    // Surface bad projection parameters at load time, not mid-render.
    config.projection()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_reference_scene() {
        let config = SceneConfig::default();
        assert!((config.spruce.height - 150.0).abs() < 1e-12);
        assert!((config.view.x_rotation - 45.0).abs() < 1e-12);
        assert_eq!(config.projection.kind, ProjectionKind::Central);
        assert!(config.projection().is_ok());
    }

    #[test]
    fn test_json_round_trip() {
        let config = SceneConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let back: SceneConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn test_parse_with_defaults() {
        let json = r#"{
            "spruce": { "center": [0, 0, 0], "height": 90, "radius": 45, "levels": 2 },
            "view": { "x_rotation": 30, "y_rotation": -15, "scale": 1.5 },
            "projection": { "kind": "orthographic", "axis": "y" }
        }"#;
        let config: SceneConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.projection.kind, ProjectionKind::Orthographic);
        assert_eq!(config.projection.axis, Axis::Y);
        assert!((config.projection.distance_from_screen - 200.0).abs() < 1e-12);
    }

    #[test]
    fn test_zero_distance_is_rejected() {
        let mut config = SceneConfig::default();
        config.projection.distance_from_screen = 0.0;
        assert!(config.projection().is_err());
    }
}

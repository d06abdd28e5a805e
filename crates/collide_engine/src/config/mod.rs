//! Configuration system
//!
//! Serde-backed scene configuration with TOML and RON file support. The
//! config structs are plain data; validation happens when the values pass
//! through the primitive constructors during scene construction.

use crate::foundation::math::{Point3, Vec3};
use serde::{Deserialize, Serialize};

/// Configuration trait
pub trait Config: Serialize + for<'de> Deserialize<'de> + Default {
    /// Load configuration from file
    fn load_from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(ConfigError::Io)?;

        // Try different formats
        if path.ends_with(".toml") {
            toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
        } else if path.ends_with(".ron") {
            ron::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
        } else {
            Err(ConfigError::UnsupportedFormat(path.to_string()))
        }
    }

    /// Save configuration to file
    fn save_to_file(&self, path: &str) -> Result<(), ConfigError> {
        let contents = if path.ends_with(".toml") {
            toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?
        } else if path.ends_with(".ron") {
            ron::ser::to_string_pretty(self, Default::default())
                .map_err(|e| ConfigError::Serialize(e.to_string()))?
        } else {
            return Err(ConfigError::UnsupportedFormat(path.to_string()));
        };

        std::fs::write(path, contents).map_err(ConfigError::Io)
    }
}

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// Unsupported format
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
}

/// Initial sphere placement
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SphereConfig {
    /// Initial center position
    pub center: Point3,

    /// Sphere radius (must be positive)
    pub radius: f32,
}

impl Default for SphereConfig {
    fn default() -> Self {
        Self {
            center: Point3::new(0.0, 2.0, 0.0),
            radius: 1.0,
        }
    }
}

/// Static plane placement
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaneConfig {
    /// Unit plane normal
    pub normal: Vec3,

    /// Signed offset from the origin along the normal
    pub distance: f32,
}

impl Default for PlaneConfig {
    fn default() -> Self {
        Self {
            normal: Vec3::y(),
            distance: 0.0,
        }
    }
}

/// Static triangle placement
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TriangleConfig {
    /// First vertex
    pub p0: Point3,

    /// Second vertex
    pub p1: Point3,

    /// Third vertex
    pub p2: Point3,

    /// Supplied unit face normal
    pub normal: Vec3,
}

impl Default for TriangleConfig {
    fn default() -> Self {
        Self {
            p0: Point3::new(-1.0, 0.0, -1.0),
            p1: Point3::new(-1.0, 0.0, 1.0),
            p2: Point3::new(1.0, 0.0, -1.0),
            normal: Vec3::y(),
        }
    }
}

/// Controls configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ControlsConfig {
    /// Displacement applied per frame and axis while a direction is held
    pub move_step: f32,
}

impl Default for ControlsConfig {
    fn default() -> Self {
        Self { move_step: 0.01 }
    }
}

/// Complete scene configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SceneConfig {
    /// Sphere settings
    pub sphere: SphereConfig,

    /// Plane settings
    pub plane: PlaneConfig,

    /// Triangle settings
    pub triangle: TriangleConfig,

    /// Controls settings
    pub controls: ControlsConfig,
}

impl SceneConfig {
    /// Set the initial sphere placement
    pub fn with_sphere(mut self, center: Point3, radius: f32) -> Self {
        self.sphere = SphereConfig { center, radius };
        self
    }

    /// Set the per-frame move step
    pub fn with_move_step(mut self, move_step: f32) -> Self {
        self.controls.move_step = move_step;
        self
    }
}

impl Config for SceneConfig {}

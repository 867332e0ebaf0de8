//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`HM_SECTION__KEY`)

use figment::{Figment, providers::{Format, Toml, Env}};
use serde::{Serialize, Deserialize};
use std::path::Path;

use hypermarch_core::Vec4;
use hypermarch_render::{CameraSettings, MarchSettings};

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Output image configuration
    #[serde(default)]
    pub output: OutputConfig,
    /// Camera configuration
    #[serde(default)]
    pub camera: CameraConfig,
    /// Ray marching configuration
    #[serde(default)]
    pub march: MarchConfig,
    /// Rendering configuration
    #[serde(default)]
    pub render: RenderConfig,
    /// Scene configuration
    #[serde(default)]
    pub scene: SceneConfig,
    /// Debug configuration
    #[serde(default)]
    pub debug: DebugConfig,
}

impl AppConfig {
    /// Load configuration from default locations
    ///
    /// Priority (lowest to highest):
    /// 1. `config/default.toml`
    /// 2. `config/user.toml`
    /// 3. Environment variables (`HM_*`)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific config directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        let mut figment = Figment::new();

        if default_path.exists() {
            figment = figment.merge(Toml::file(&default_path));
        }

        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // Environment variables override everything
        // HM_OUTPUT__PATH=frame.png -> output.path = "frame.png"
        figment = figment.merge(Env::prefixed("HM_").split("__"));

        let config: Self = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values that would make rendering meaningless or endless
    pub fn validate(&self) -> Result<(), ConfigError> {
        let checks = [
            (self.output.width > 0 && self.output.height > 0, "output size must be non-zero"),
            (
                self.camera.width > 0 && self.camera.height > 0 && self.camera.depth > 0,
                "camera resolution must be non-zero",
            ),
            (self.march.hit_threshold > 0.0, "march.hit_threshold must be positive"),
            (self.march.max_ray_length > 0.0, "march.max_ray_length must be positive"),
            (
                self.camera.fov_degrees > 0.0 && self.camera.fov_degrees < 360.0,
                "camera.fov_degrees must be in (0, 360)",
            ),
        ];

        match checks.iter().find(|(ok, _)| !ok) {
            Some((_, message)) => Err(ConfigError::invalid(*message)),
            None => Ok(()),
        }
    }

    /// Projection and marching settings for the camera
    pub fn camera_settings(&self) -> CameraSettings {
        CameraSettings {
            horizontal_fov: self.camera.fov_degrees.to_radians(),
            ana_slope: self.camera.ana_slope,
            march: self.march.to_march_settings(),
            parallel: self.render.parallel,
        }
    }
}

/// Output image configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// PNG file to write
    pub path: String,
    /// Image width in device pixels
    pub width: u32,
    /// Image height in device pixels
    pub height: u32,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: "hypermarch.png".to_string(),
            width: 200,
            height: 100,
        }
    }
}

/// Camera configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CameraConfig {
    /// Logical pixels across
    pub width: u32,
    /// Logical pixels down
    pub height: u32,
    /// Samples per pixel along the view direction
    pub depth: u32,
    /// Heading in degrees clockwise from +y
    pub facing_degrees: f32,
    /// Camera position [x, y, z, w]
    pub location: [f32; 4],
    /// Horizontal field of view in degrees
    pub fov_degrees: f32,
    /// W component of every ray direction before normalization
    pub ana_slope: f32,
}

impl CameraConfig {
    pub fn facing_radians(&self) -> f32 {
        self.facing_degrees.to_radians()
    }

    pub fn location(&self) -> Vec4 {
        Vec4::from_array(self.location)
    }
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            width: 40,
            height: 20,
            depth: 40,
            facing_degrees: -36.0,
            location: [10.0, -10.0, 0.0, 0.0],
            fov_degrees: 90.0,
            ana_slope: 1.0,
        }
    }
}

/// Ray marching configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarchConfig {
    /// Distance below which a ray counts as a hit
    pub hit_threshold: f32,
    /// Distance after which a ray gives up
    pub max_ray_length: f32,
}

impl MarchConfig {
    pub fn to_march_settings(&self) -> MarchSettings {
        MarchSettings {
            hit_threshold: self.hit_threshold,
            max_ray_length: self.max_ray_length,
        }
    }
}

impl Default for MarchConfig {
    fn default() -> Self {
        let defaults = MarchSettings::default();
        Self {
            hit_threshold: defaults.hit_threshold,
            max_ray_length: defaults.max_ray_length,
        }
    }
}

/// Rendering configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Trace pixels on all CPU cores
    pub parallel: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self { parallel: true }
    }
}

/// Scene configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SceneConfig {
    /// RON scene file; the built-in demo scene is used when unset
    #[serde(default)]
    pub path: Option<String>,
}

/// Debug configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DebugConfig {
    /// Log level (error, warn, info, debug, trace)
    pub log_level: String,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Configuration error
#[derive(Debug)]
pub struct ConfigError {
    message: String,
}

impl ConfigError {
    fn invalid(message: &str) -> Self {
        ConfigError {
            message: message.to_string(),
        }
    }
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        ConfigError {
            message: e.to_string(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Configuration error: {}", self.message)
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.camera.width, 40);
        assert_eq!(config.camera.depth, 40);
        assert_eq!(config.output.width, 200);
        assert_eq!(config.march.max_ray_length, 40.0);
        assert!(config.scene.path.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_serialization() {
        let config = AppConfig::default();
        let toml = toml::to_string(&config).unwrap();
        assert!(toml.contains("hit_threshold"));
        assert!(toml.contains("facing_degrees"));
    }

    #[test]
    fn test_camera_settings_conversion() {
        let config = AppConfig::default();
        let settings = config.camera_settings();
        assert!((settings.horizontal_fov - std::f32::consts::FRAC_PI_2).abs() < 1e-6);
        assert_eq!(settings.march, MarchSettings::default());
        assert!((config.camera.facing_radians() + std::f32::consts::PI / 5.0).abs() < 1e-6);
        assert_eq!(config.camera.location(), Vec4::new(10.0, -10.0, 0.0, 0.0));
    }

    #[test]
    fn test_validate_rejects_zero_threshold() {
        let mut config = AppConfig::default();
        config.march.hit_threshold = 0.0;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("hit_threshold"));
    }

    #[test]
    fn test_validate_rejects_empty_output() {
        let mut config = AppConfig::default();
        config.output.height = 0;
        assert!(config.validate().is_err());
    }
}

//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`SCENED_SECTION__KEY`)

use figment::{Figment, providers::{Format, Toml, Env}};
use scened_core::ProjectionType;
use scened_input::EditorController;
use scened_math::Color;
use scened_view::Navigator;
use serde::{Serialize, Deserialize};
use std::path::Path;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Window configuration
    #[serde(default)]
    pub window: WindowConfig,
    /// Editor camera configuration
    #[serde(default)]
    pub camera: CameraConfig,
    /// Input configuration
    #[serde(default)]
    pub input: InputConfig,
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
    /// 3. Environment variables (`SCENED_*`)
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

        // Load user config (optional)
        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // Environment variables override everything
        // SCENED_WINDOW__TITLE=Test -> window.title = "Test"
        figment = figment.merge(Env::prefixed("SCENED_").split("__"));

        figment.extract().map_err(ConfigError::from)
    }

    /// Aspect ratio of the configured window
    pub fn aspect_ratio(&self) -> f32 {
        self.window.width.max(1) as f32 / self.window.height.max(1) as f32
    }

    /// Build the editor camera in its default view, then apply the camera section
    pub fn navigator(&self) -> Navigator {
        let mut navigator = Navigator::new(self.aspect_ratio());
        navigator.set_default_distance(self.camera.default_distance);
        navigator.set_default_view(self.aspect_ratio());
        self.camera.apply(&mut navigator);
        navigator
    }

    /// Build the input controller from the input section
    pub fn controller(&self) -> EditorController {
        EditorController::new()
            .with_camera_res(self.input.camera_res)
            .with_zoom_scale(self.input.zoom_scale)
    }
}

/// Window configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Window title
    pub title: String,
    /// Window width in pixels
    pub width: u32,
    /// Window height in pixels
    pub height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "scened - Scene Editor".to_string(),
            width: 1280,
            height: 720,
        }
    }
}

/// Editor camera configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Distance from the origin along the view axis in the default view
    pub default_distance: f32,
    /// Use a parallel (orthographic) projection instead of perspective
    pub parallel: bool,
    /// Vertical field of view in degrees
    pub view_angle: f32,
    /// View height for parallel projection
    pub height: f32,
    /// Near clipping plane
    pub near: f32,
    /// Far clipping plane
    pub far: f32,
    /// Distance to the point the camera orbits around
    pub orbit_distance: f32,
    /// Draw the ground grid
    pub show_ground: bool,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            default_distance: 10.0,
            parallel: false,
            view_angle: 60.0,
            height: 10.0,
            near: 0.01,
            far: 1000.0,
            orbit_distance: 10.0,
            show_ground: true,
        }
    }
}

impl CameraConfig {
    /// Apply projection and navigation settings to a navigator
    pub fn apply(&self, navigator: &mut Navigator) {
        let camera = navigator.camera_mut();
        camera.set_projection_type(if self.parallel {
            ProjectionType::Parallel
        } else {
            ProjectionType::Perspective
        });
        camera.set_view_angle(self.view_angle);
        camera.set_height(self.height);
        camera.set_clipping_planes(self.near, self.far);
        navigator.set_orbit_distance(self.orbit_distance);
        navigator.show_ground = self.show_ground;
    }
}

/// Input configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Fraction of the orbit distance moved per frame, and of the view
    /// angle turned per pixel of drag
    pub camera_res: f32,
    /// Zoom factor per scroll step
    pub zoom_scale: f32,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            camera_res: 0.01,
            zoom_scale: 1.01,
        }
    }
}

/// Scene configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Name of the start-up scene
    pub name: String,
    /// Background color [r, g, b, a]
    pub background_color: [f32; 4],
    /// Ambient light color [r, g, b, a]
    pub ambient_light: [f32; 4],
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            name: "Scene 1".to_string(),
            background_color: Color::GRAY.to_array(),
            ambient_light: Color::DARK_GRAY.to_array(),
        }
    }
}

/// Debug configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level (error, warn, info, debug, trace)
    pub log_level: String,
    /// Log only visible objects when printing the hierarchy
    pub only_visible: bool,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            only_visible: true,
        }
    }
}

/// Configuration error
#[derive(Debug)]
pub struct ConfigError {
    message: String,
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

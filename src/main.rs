//! scened - Hierarchical scene editor
//!
//! Headless driver: builds the start-up scene, sets up the editor camera,
//! prints the hierarchy and frames the last top-level object.

use scened::config::AppConfig;
use scened::scene::SceneBuilder;
use scened_core::{Color, Mat4, Scene, SceneNode, Vec3};
use scened_view::{FrameTarget, Navigator};

/// Frame target that logs what a renderer would be asked to draw
struct LogTarget;

impl FrameTarget for LogTarget {
    fn clear(&mut self, color: Color) {
        log::debug!("clear {:?}", color.to_array());
    }

    fn set_view(&mut self, eye: Vec3, _view_projection: Mat4) {
        log::debug!("view from {:?}", eye);
    }

    fn draw_ground(&mut self, size: f32, step: f32) {
        log::debug!("ground plane {} x {} (step {})", size, size, step);
    }
}

fn print_hierarchy(scene: &Scene, only_visible: bool) {
    log::info!("Scene '{}':", scene.name());
    for (key, obj) in scene.iter_hierarchy(only_visible) {
        let depth = std::iter::successors(scene.parent(key), |&k| scene.parent(k)).count();
        let kinds: Vec<_> = obj.component_kinds().map(|k| k.name()).collect();
        log::info!("{}{} [{}]", "  ".repeat(depth + 1), obj.name(), kinds.join(", "));
    }
}

fn log_camera(navigator: &Navigator) {
    let camera = navigator.camera();
    log::info!(
        "Camera at {:?} looking {:?} ({:?}, view angle {:.1}, height {:.2})",
        navigator.position(),
        navigator.view_direction(),
        camera.projection_type(),
        camera.view_angle(),
        camera.height()
    );
}

fn main() {
    // Load configuration before logging so the log level can come from it
    let config = AppConfig::load();
    let log_level = config
        .as_ref()
        .map(|c| c.debug.log_level.clone())
        .unwrap_or_else(|_| "info".to_string());
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();
    log::info!("Starting scened");

    let config = config.unwrap_or_else(|e| {
        log::warn!("Failed to load config: {}. Using defaults.", e);
        AppConfig::default()
    });

    let mut scene = SceneBuilder::demo(&config.scene.name);
    scene.background_color = config.scene.background_color.into();
    scene.ambient_light = config.scene.ambient_light.into();

    let mut navigator = config.navigator();
    navigator.new_frame(&scene, &mut LogTarget);
    print_hierarchy(&scene, config.debug.only_visible);
    log_camera(&navigator);

    match scene.active_camera() {
        Some(key) => {
            let eye = scene.local_to_world(key).map(|m| m.transform_point3(Vec3::ZERO));
            log::info!(
                "Previewing through '{}' at {:?}",
                scene.object(key).map_or("?", |o| o.name()),
                eye
            );
            if let Some(view_projection) = scene.camera_view_projection(key) {
                log::debug!("Active camera view-projection: {:?}", view_projection);
            }
        }
        None => log::info!("No active camera, previewing through the editor camera"),
    }

    match scene.top_level_objects().last() {
        Some(&key) => {
            let bounds = scene.bounds(key);
            log::info!(
                "Focusing on '{}' (bounds {:?} to {:?})",
                scene.object(key).map_or("?", |o| o.name()),
                bounds.min,
                bounds.max
            );
            navigator.focus_on(&bounds);
            navigator.new_frame(&scene, &mut LogTarget);
            log_camera(&navigator);
        }
        None => log::info!("Scene is empty, nothing to focus on"),
    }
}

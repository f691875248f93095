//! SceneBuilder - Declarative scene construction
//!
//! Provides a fluent API for building editor scenes. Objects are inserted
//! relative to a working selection, so nesting reads top-down.

use scened_core::{
    Camera, Color, NodeRef, ObjectKey, Scene, SceneNode, Selection, Transform, Vec3,
};

use super::ObjectFactory;

/// Builder for constructing editor scenes
///
/// # Example
/// ```ignore
/// let scene = SceneBuilder::new("Scene 1")
///     .add_main_camera()
///     .add_empty(Vec3::ZERO, true)
///     .add_box(Vec3::new(0.0, 1.0, 0.0), false)
///     .build();
/// ```
pub struct SceneBuilder {
    scene: Scene,
    factory: ObjectFactory,
    selection: Selection,
    last: Option<ObjectKey>,
}

impl SceneBuilder {
    /// Create a builder for an empty scene
    pub fn new(name: &str) -> Self {
        Self::with_factory(name, ObjectFactory::default())
    }

    /// Create a builder that draws objects from the given factory
    pub fn with_factory(name: &str, factory: ObjectFactory) -> Self {
        Self {
            scene: Scene::new(name),
            factory,
            selection: Selection::new(),
            last: None,
        }
    }

    /// Set the background color
    pub fn with_background(mut self, color: Color) -> Self {
        self.scene.background_color = color;
        self
    }

    /// Set the ambient light
    pub fn with_ambient_light(mut self, color: Color) -> Self {
        self.scene.ambient_light = color;
        self
    }

    /// Add the "Main Camera" object at the top level, regardless of the
    /// working selection, and render the scene through it
    pub fn add_main_camera(mut self) -> Self {
        let key = self.scene.create_object("Main Camera");
        if let Some(obj) = self.scene.object_mut(key) {
            if let Err(e) = obj.add_component(Camera::default()) {
                log::warn!("Failed to attach camera to main camera: {}", e);
            }
        }
        let added = self
            .scene
            .set_parent(key, None)
            .and_then(|()| self.scene.set_active_camera(Some(key)));
        match added {
            Ok(()) => self.last = Some(key),
            Err(e) => log::warn!("Failed to add main camera: {}", e),
        }
        self
    }

    /// Add an empty object at a local position
    ///
    /// With `select`, later objects are added beneath it.
    pub fn add_empty(mut self, position: Vec3, select: bool) -> Self {
        let key = self.factory.empty(&mut self.scene);
        self.insert(key, position, select);
        self
    }

    /// Add a box at a local position
    pub fn add_box(mut self, position: Vec3, select: bool) -> Self {
        let key = self.factory.box_object(&mut self.scene);
        self.insert(key, position, select);
        self
    }

    /// Add a sphere at a local position
    pub fn add_sphere(mut self, position: Vec3, select: bool) -> Self {
        let key = self.factory.sphere(&mut self.scene);
        self.insert(key, position, select);
        self
    }

    /// Add an object with a camera component at a local position
    pub fn add_camera(mut self, position: Vec3, select: bool) -> Self {
        let key = self.factory.camera(&mut self.scene);
        self.insert(key, position, select);
        self
    }

    /// Edit the transform of an object added earlier
    pub fn transform(mut self, key: ObjectKey, edit: impl FnOnce(&mut Transform)) -> Self {
        match self.scene.object_mut(key) {
            Some(obj) => edit(obj.transform_mut()),
            None => log::warn!("Cannot edit transform of a removed object"),
        }
        self
    }

    /// Select a node to add subsequent objects under
    pub fn select(mut self, node: impl Into<NodeRef>) -> Self {
        self.selection.select(node);
        self
    }

    /// Add subsequent objects at the top level again
    pub fn select_scene(self) -> Self {
        self.select(NodeRef::Scene)
    }

    /// The most recently added object
    pub fn last_added(&self) -> Option<ObjectKey> {
        self.last
    }

    /// The current working selection
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Build and return the scene
    pub fn build(self) -> Scene {
        log::info!(
            "Built scene '{}' with {} objects",
            self.scene.name(),
            self.scene.object_count()
        );
        self.scene
    }

    /// Build the editor's start-up scene
    ///
    /// ```text
    /// Main Camera
    /// Sphere 1            (4, 0, 0)
    /// Box 1               (-4, 0, 0)
    /// Object 1            (0, 0, 4)
    /// Object 2            (-1, 0, -1.5), euler (0, 45, -70)
    /// ├── Box 2           (0, 2, 1)
    /// ├── Box 3           (0, 1, 1)
    /// └── Box 4           (1, 1, 0)
    ///     └── Sphere 2    (-1, 0, 0)
    ///         └── Sphere 3 (0, 0.5, -1)
    /// ```
    pub fn demo(name: &str) -> Scene {
        let builder = SceneBuilder::new(name)
            .add_main_camera()
            .add_sphere(Vec3::new(4.0, 0.0, 0.0), false)
            .add_box(Vec3::new(-4.0, 0.0, 0.0), false)
            .add_empty(Vec3::new(0.0, 0.0, 4.0), false)
            .add_empty(Vec3::ZERO, true);
        let group = builder.last_added();

        let builder = builder
            .add_box(Vec3::new(0.0, 2.0, 1.0), false)
            .add_box(Vec3::new(0.0, 1.0, 1.0), false)
            .add_box(Vec3::new(1.0, 1.0, 0.0), true)
            .add_sphere(Vec3::new(-1.0, 0.0, 0.0), true)
            .add_sphere(Vec3::new(0.0, 0.5, -1.0), true);

        let builder = match group {
            Some(group) => builder.transform(group, |t| {
                t.set_local_position(Vec3::new(-1.0, 0.0, -1.5));
                t.set_local_euler_angles(Vec3::new(0.0, 45.0, -70.0));
            }),
            None => builder,
        };
        builder.select_scene().build()
    }

    fn insert(&mut self, key: ObjectKey, position: Vec3, select: bool) {
        if let Some(obj) = self.scene.object_mut(key) {
            obj.transform_mut().set_local_position(position);
        }
        match self.selection.add_to_current(&mut self.scene, key, select) {
            Some(key) => self.last = Some(key),
            None => log::warn!("Failed to insert object into scene"),
        }
    }
}

impl Default for SceneBuilder {
    fn default() -> Self {
        Self::new("Scene 1")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(scene: &Scene, keys: &[ObjectKey]) -> Vec<String> {
        keys.iter()
            .map(|&k| scene.object(k).unwrap().name().to_string())
            .collect()
    }

    #[test]
    fn test_empty_scene() {
        let scene = SceneBuilder::new("Empty").build();
        assert_eq!(scene.name(), "Empty");
        assert!(scene.is_empty());
    }

    #[test]
    fn test_scene_colors() {
        let scene = SceneBuilder::default()
            .with_background(Color::BLACK)
            .with_ambient_light(Color::WHITE)
            .build();
        assert_eq!(scene.background_color, Color::BLACK);
        assert_eq!(scene.ambient_light, Color::WHITE);
    }

    #[test]
    fn test_select_nests_objects() {
        let builder = SceneBuilder::default()
            .add_empty(Vec3::ZERO, true)
            .add_box(Vec3::X, true)
            .add_sphere(Vec3::Y, false);
        let sphere = builder.last_added().unwrap();
        let scene = builder.build();

        let root = scene.top_level_objects()[0];
        let cube = scene.children(root)[0];
        assert_eq!(scene.parent(sphere), Some(cube));
        assert_eq!(
            scene.object(sphere).unwrap().transform().local_position(),
            Vec3::Y
        );
    }

    #[test]
    fn test_scene_without_camera_has_no_active_camera() {
        let scene = SceneBuilder::default().add_box(Vec3::ZERO, false).build();
        assert_eq!(scene.active_camera(), None);
    }

    #[test]
    fn test_main_camera_stays_top_level() {
        let scene = SceneBuilder::default()
            .add_empty(Vec3::ZERO, true)
            .add_main_camera()
            .build();
        let top = names(&scene, scene.top_level_objects());
        assert_eq!(top, vec!["Object 1", "Main Camera"]);
    }

    #[test]
    fn test_demo_scene_layout() {
        let scene = SceneBuilder::demo("Scene 1");
        assert_eq!(scene.object_count(), 10);

        let top = names(&scene, scene.top_level_objects());
        assert_eq!(top, vec!["Main Camera", "Sphere 1", "Box 1", "Object 1", "Object 2"]);

        let group = scene.find_by_name("Object 2").unwrap();
        assert_eq!(names(&scene, scene.children(group)), vec!["Box 2", "Box 3", "Box 4"]);

        let order: Vec<_> = scene
            .iter_hierarchy(true)
            .map(|(_, obj)| obj.name().to_string())
            .collect();
        assert_eq!(
            order,
            vec![
                "Main Camera", "Sphere 1", "Box 1", "Object 1", "Object 2",
                "Box 2", "Box 3", "Box 4", "Sphere 2", "Sphere 3",
            ]
        );
    }

    #[test]
    fn test_demo_group_transform() {
        let scene = SceneBuilder::demo("Scene 1");
        let group = scene.find_by_name("Object 2").unwrap();
        let transform = scene.object(group).unwrap().transform();
        assert_eq!(transform.local_position(), Vec3::new(-1.0, 0.0, -1.5));

        let angles = transform.local_euler_angles();
        assert!((angles.y - 45.0).abs() < 1e-3);
        assert!((angles.z + 70.0).abs() < 1e-3);

        let main_camera = scene.find_by_name("Main Camera").unwrap();
        assert!(scene.object(main_camera).unwrap().camera().is_some());
        assert_eq!(scene.active_camera(), Some(main_camera));
        assert!(!scene.bounds(group).is_empty());
    }
}

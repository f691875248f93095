//! ObjectFactory - Numbered editor objects
//!
//! Creates the objects the editor's "Create" menu offers. Each kind keeps
//! its own counter, so names read "Object 1", "Box 1", "Box 2", ...

use scened_core::{Camera, MeshLibrary, ObjectKey, Primitive, Scene, SceneNode};

/// Creates named, detached objects in a scene
pub struct ObjectFactory {
    meshes: MeshLibrary,
    empties: u32,
    boxes: u32,
    spheres: u32,
    cameras: u32,
}

impl ObjectFactory {
    /// Create a factory drawing primitives from the given mesh library
    pub fn new(meshes: MeshLibrary) -> Self {
        Self {
            meshes,
            empties: 0,
            boxes: 0,
            spheres: 0,
            cameras: 0,
        }
    }

    pub fn meshes(&self) -> &MeshLibrary {
        &self.meshes
    }

    /// An object with only a transform
    pub fn empty(&mut self, scene: &mut Scene) -> ObjectKey {
        self.empties += 1;
        scene.create_object(format!("Object {}", self.empties))
    }

    /// An object with a camera component
    pub fn camera(&mut self, scene: &mut Scene) -> ObjectKey {
        self.cameras += 1;
        let key = scene.create_object(format!("Camera {}", self.cameras));
        if let Some(obj) = scene.object_mut(key) {
            if let Err(e) = obj.add_component(Camera::default()) {
                log::warn!("Failed to attach camera to '{}': {}", obj.name(), e);
            }
        }
        key
    }

    /// An object with a box primitive
    pub fn box_object(&mut self, scene: &mut Scene) -> ObjectKey {
        self.boxes += 1;
        let name = format!("Box {}", self.boxes);
        self.primitive_object(scene, name, "Box")
    }

    /// An object with a sphere primitive
    pub fn sphere(&mut self, scene: &mut Scene) -> ObjectKey {
        self.spheres += 1;
        let name = format!("Sphere {}", self.spheres);
        self.primitive_object(scene, name, "Sphere")
    }

    /// An object showing a named mesh from the library
    ///
    /// Unknown names, and names mapped to no mesh, give an object without a
    /// primitive.
    pub fn primitive_object(&self, scene: &mut Scene, name: String, mesh_name: &str) -> ObjectKey {
        let key = scene.create_object(name);
        match self.meshes.get(mesh_name) {
            Some(mesh) => {
                if let Some(obj) = scene.object_mut(key) {
                    if let Err(e) = obj.add_component(Primitive::new(mesh, mesh_name)) {
                        log::warn!(
                            "Failed to attach '{}' mesh to '{}': {}",
                            mesh_name,
                            obj.name(),
                            e
                        );
                    }
                }
            }
            None => log::warn!("No mesh named '{}' in the library", mesh_name),
        }
        key
    }
}

impl Default for ObjectFactory {
    fn default() -> Self {
        Self::new(MeshLibrary::with_defaults())
    }
}

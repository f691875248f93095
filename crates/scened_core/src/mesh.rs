//! Mesh handles
//!
//! Meshes are owned by the asset side of the application. The scene only
//! needs their local bounds and an opaque handle the renderer can draw.

use std::sync::Arc;

use scened_math::{Bounds3, Vec3};

/// Opaque renderer-side identifier for a mesh
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DrawHandle(pub u64);

/// A mesh resource as seen by the scene graph
pub trait Mesh: Send + Sync {
    /// Bounds of the mesh in its own local space
    fn bounds(&self) -> Bounds3;

    /// Handle the renderer uses to draw this mesh
    fn draw_handle(&self) -> DrawHandle;
}

/// A mesh known only by its bounds and draw handle
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StaticMesh {
    pub bounds: Bounds3,
    pub handle: DrawHandle,
}

impl StaticMesh {
    pub fn new(bounds: Bounds3, handle: DrawHandle) -> Self {
        Self { bounds, handle }
    }
}

impl Mesh for StaticMesh {
    fn bounds(&self) -> Bounds3 {
        self.bounds
    }

    fn draw_handle(&self) -> DrawHandle {
        self.handle
    }
}

/// Reference to a mesh - either shared (Arc) or owned (Box)
///
/// Use `Shared` when several primitives draw the same mesh, `Owned` when a
/// primitive carries a mesh nobody else uses.
pub enum MeshRef {
    /// A shared reference to a mesh (multiple primitives can share this)
    Shared(Arc<dyn Mesh>),
    /// An owned mesh (unique to this primitive)
    Owned(Box<dyn Mesh>),
}

impl MeshRef {
    /// Create a shared mesh reference
    pub fn shared<M: Mesh + 'static>(mesh: M) -> Self {
        Self::Shared(Arc::new(mesh))
    }

    /// Create an owned mesh reference
    pub fn owned<M: Mesh + 'static>(mesh: M) -> Self {
        Self::Owned(Box::new(mesh))
    }

    /// Get a reference to the underlying mesh
    pub fn as_mesh(&self) -> &dyn Mesh {
        match self {
            MeshRef::Shared(arc) => arc.as_ref(),
            MeshRef::Owned(boxed) => boxed.as_ref(),
        }
    }
}

impl std::fmt::Debug for MeshRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let kind = match self {
            MeshRef::Shared(_) => "Shared",
            MeshRef::Owned(_) => "Owned",
        };
        f.debug_struct("MeshRef")
            .field("kind", &kind)
            .field("handle", &self.as_mesh().draw_handle())
            .finish()
    }
}

/// Named meshes available to the editor
///
/// Names keep insertion order so UI lists are stable. A name may map to
/// no mesh at all ("None"), which lets a primitive drop its geometry.
#[derive(Default)]
pub struct MeshLibrary {
    entries: Vec<(String, Option<Arc<dyn Mesh>>)>,
}

impl MeshLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    /// The editor's built-in entries: "None", "Box" and "Sphere"
    ///
    /// Both shapes span [-1, 1] on every axis.
    pub fn with_defaults() -> Self {
        let unit = Bounds3::new(Vec3::splat(-1.0), Vec3::splat(1.0));
        let mut library = Self::new();
        library.insert("None", None);
        library.insert("Box", Some(Arc::new(StaticMesh::new(unit, DrawHandle(1)))));
        library.insert("Sphere", Some(Arc::new(StaticMesh::new(unit, DrawHandle(2)))));
        library
    }

    /// Register or replace a named mesh
    pub fn insert(&mut self, name: impl Into<String>, mesh: Option<Arc<dyn Mesh>>) {
        let name = name.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = mesh,
            None => self.entries.push((name, mesh)),
        }
    }

    /// Shared reference to a named mesh
    ///
    /// Returns `None` both for unknown names and for names mapped to no mesh.
    pub fn get(&self, name: &str) -> Option<MeshRef> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .and_then(|(_, mesh)| mesh.clone())
            .map(MeshRef::Shared)
    }

    /// Whether a name is registered
    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|(n, _)| n == name)
    }

    /// Registered names in insertion order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mesh_ref_bounds() {
        let bounds = Bounds3::new(Vec3::ZERO, Vec3::ONE);
        let shared = MeshRef::shared(StaticMesh::new(bounds, DrawHandle(7)));
        let owned = MeshRef::owned(StaticMesh::new(bounds, DrawHandle(8)));
        assert_eq!(shared.as_mesh().bounds(), bounds);
        assert_eq!(owned.as_mesh().draw_handle(), DrawHandle(8));
    }

    #[test]
    fn test_default_library() {
        let library = MeshLibrary::with_defaults();
        let names: Vec<_> = library.names().collect();
        assert_eq!(names, vec!["None", "Box", "Sphere"]);

        assert!(library.contains("None"));
        assert!(library.get("None").is_none());
        assert!(library.get("Teapot").is_none());

        let sphere = library.get("Sphere").unwrap();
        assert_eq!(sphere.as_mesh().bounds().size(), Vec3::splat(2.0));
    }

    #[test]
    fn test_library_shares_meshes() {
        let library = MeshLibrary::with_defaults();
        let (a, b) = (library.get("Box").unwrap(), library.get("Box").unwrap());
        match (a, b) {
            (MeshRef::Shared(a), MeshRef::Shared(b)) => assert!(Arc::ptr_eq(&a, &b)),
            _ => panic!("library meshes should be shared"),
        }
    }

    #[test]
    fn test_insert_replaces() {
        let mut library = MeshLibrary::with_defaults();
        library.insert("Box", None);
        assert!(library.get("Box").is_none());
        assert_eq!(library.names().count(), 3);
    }
}

//! Components attachable to scene objects
//!
//! Every object carries exactly one [`Transform`](crate::Transform), held
//! directly by the object. The optional components live in the object's
//! component list, at most one of each [`ComponentKind`].

use scened_math::{Bounds3, Color};

use crate::camera::Camera;
use crate::mesh::MeshRef;

/// Kinds of component an object can carry
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ComponentKind {
    /// Mandatory, one per object, never removable
    Transform,
    Primitive,
    Camera,
}

impl ComponentKind {
    pub fn name(self) -> &'static str {
        match self {
            ComponentKind::Transform => "Transform",
            ComponentKind::Primitive => "Primitive",
            ComponentKind::Camera => "Camera",
        }
    }
}

impl std::fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Geometry holder: a mesh plus the color to draw it with
#[derive(Debug)]
pub struct Primitive {
    pub mesh: MeshRef,
    pub color: Color,
    /// Name the mesh was picked under (e.g. "Box")
    pub mesh_name: String,
}

impl Primitive {
    pub fn new(mesh: MeshRef, mesh_name: impl Into<String>) -> Self {
        Self {
            mesh,
            color: Color::WHITE,
            mesh_name: mesh_name.into(),
        }
    }

    /// Set the draw color
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Bounds of the mesh in the owning object's local space
    pub fn local_bounds(&self) -> Bounds3 {
        self.mesh.as_mesh().bounds()
    }
}

/// An optional component attached to a scene object
#[derive(Debug)]
pub enum Component {
    Primitive(Primitive),
    Camera(Camera),
}

impl Component {
    pub fn kind(&self) -> ComponentKind {
        match self {
            Component::Primitive(_) => ComponentKind::Primitive,
            Component::Camera(_) => ComponentKind::Camera,
        }
    }

    pub fn as_primitive(&self) -> Option<&Primitive> {
        match self {
            Component::Primitive(p) => Some(p),
            _ => None,
        }
    }

    pub fn as_camera(&self) -> Option<&Camera> {
        match self {
            Component::Camera(c) => Some(c),
            _ => None,
        }
    }
}

impl From<Primitive> for Component {
    fn from(p: Primitive) -> Self {
        Component::Primitive(p)
    }
}

impl From<Camera> for Component {
    fn from(c: Camera) -> Self {
        Component::Camera(c)
    }
}

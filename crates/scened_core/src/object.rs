//! Scene objects
//!
//! A SceneObject is a named node of the hierarchy with a transform, a set
//! of optional components, and child objects. Objects live in the arena of
//! their [`Scene`](crate::Scene) and refer to each other by [`ObjectKey`]:
//! children are owned through the child list, the parent link is a plain
//! key that owns nothing.

use bitflags::bitflags;
use scened_math::Bounds3;
use slotmap::new_key_type;

use crate::camera::Camera;
use crate::component::{Component, ComponentKind, Primitive};
use crate::error::SceneError;
use crate::node::SceneNode;
use crate::transform::Transform;

new_key_type! {
    /// Key to a scene object in its scene
    ///
    /// Uses generational indexing: once an object is deleted, its old keys
    /// resolve to nothing, even after the slot is reused.
    pub struct ObjectKey;
}

bitflags! {
    /// Flags indicating which parts of an object changed since the renderer
    /// last looked
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct DirtyFlags: u8 {
        /// No changes
        const NONE = 0;
        /// Local transform or an ancestor's transform changed
        const TRANSFORM = 1 << 0;
        /// Parent or child list changed
        const HIERARCHY = 1 << 1;
        /// A component was added, removed or edited
        const COMPONENTS = 1 << 2;
        /// All flags set
        const ALL = Self::TRANSFORM.bits() | Self::HIERARCHY.bits() | Self::COMPONENTS.bits();
    }
}

/// The collection that currently owns an object
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Owner {
    /// Created but not yet inserted anywhere
    Detached,
    /// Listed in the scene's top-level collection
    Root,
    /// Listed in this object's child collection
    Parent(ObjectKey),
}

/// A node of the scene hierarchy
#[derive(Debug)]
pub struct SceneObject {
    name: String,
    /// Whether this object (and, for filtered traversals, its subtree) is shown
    pub visible: bool,
    pub(crate) owner: Owner,
    pub(crate) children: Vec<ObjectKey>,
    transform: Transform,
    components: Vec<Component>,
    dirty: DirtyFlags,
}

impl SceneObject {
    pub(crate) fn new(name: String) -> Self {
        Self {
            name,
            visible: true,
            owner: Owner::Detached,
            children: Vec::with_capacity(8),
            transform: Transform::identity(),
            components: Vec::with_capacity(2),
            dirty: DirtyFlags::ALL,
        }
    }

    // --- Hierarchy ---

    #[inline]
    pub fn owner(&self) -> Owner {
        self.owner
    }

    /// The parent object, or `None` for top-level and detached objects
    pub fn parent(&self) -> Option<ObjectKey> {
        match self.owner {
            Owner::Parent(key) => Some(key),
            Owner::Root | Owner::Detached => None,
        }
    }

    /// Whether the object is listed in some collection (top-level or a child list)
    #[inline]
    pub fn is_attached(&self) -> bool {
        self.owner != Owner::Detached
    }

    /// Child objects in insertion order
    #[inline]
    pub fn children(&self) -> &[ObjectKey] {
        &self.children
    }

    // --- Transform ---

    #[inline]
    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    /// Mutable access to the local transform, marking it dirty
    ///
    /// Descendants' world matrices follow automatically since world matrices
    /// are derived from the parent chain on every query.
    pub fn transform_mut(&mut self) -> &mut Transform {
        self.mark_dirty(DirtyFlags::TRANSFORM);
        &mut self.transform
    }

    // --- Components ---

    /// Optional components in attachment order (the transform is not listed)
    #[inline]
    pub fn components(&self) -> &[Component] {
        &self.components
    }

    /// Kinds of every component on this object, transform first
    pub fn component_kinds(&self) -> impl Iterator<Item = ComponentKind> + '_ {
        std::iter::once(ComponentKind::Transform).chain(self.components.iter().map(Component::kind))
    }

    pub fn has_component(&self, kind: ComponentKind) -> bool {
        kind == ComponentKind::Transform || self.components.iter().any(|c| c.kind() == kind)
    }

    /// Attach a component
    ///
    /// Rejected, leaving the object unchanged, when a component of the same
    /// kind is already attached.
    pub fn add_component(&mut self, component: impl Into<Component>) -> Result<(), SceneError> {
        let component = component.into();
        let kind = component.kind();
        if self.has_component(kind) {
            log::debug!("Rejected duplicate {} component on '{}'", kind, self.name);
            return Err(SceneError::DuplicateComponent(kind));
        }
        self.components.push(component);
        self.mark_dirty(DirtyFlags::COMPONENTS);
        Ok(())
    }

    /// Detach and return the component of the given kind
    ///
    /// The transform is mandatory and cannot be removed.
    pub fn remove_component(&mut self, kind: ComponentKind) -> Result<Component, SceneError> {
        if kind == ComponentKind::Transform {
            return Err(SceneError::MandatoryComponent);
        }
        let index = self
            .components
            .iter()
            .position(|c| c.kind() == kind)
            .ok_or(SceneError::MissingComponent(kind))?;
        self.mark_dirty(DirtyFlags::COMPONENTS);
        Ok(self.components.remove(index))
    }

    pub fn primitive(&self) -> Option<&Primitive> {
        self.components.iter().find_map(Component::as_primitive)
    }

    pub fn primitive_mut(&mut self) -> Option<&mut Primitive> {
        let primitive = self.components.iter_mut().find_map(|c| match c {
            Component::Primitive(p) => Some(p),
            _ => None,
        });
        if primitive.is_some() {
            self.dirty |= DirtyFlags::COMPONENTS;
        }
        primitive
    }

    pub fn camera(&self) -> Option<&Camera> {
        self.components.iter().find_map(Component::as_camera)
    }

    pub fn camera_mut(&mut self) -> Option<&mut Camera> {
        let camera = self.components.iter_mut().find_map(|c| match c {
            Component::Camera(cam) => Some(cam),
            _ => None,
        });
        if camera.is_some() {
            self.dirty |= DirtyFlags::COMPONENTS;
        }
        camera
    }

    /// Bounds of this object's own geometry in its local space
    ///
    /// Empty when the object has no primitive.
    pub fn local_bounds(&self) -> Bounds3 {
        self.primitive()
            .map(Primitive::local_bounds)
            .unwrap_or(Bounds3::EMPTY)
    }

    // --- Dirty tracking ---

    #[inline]
    pub fn is_dirty(&self) -> bool {
        !self.dirty.is_empty()
    }

    #[inline]
    pub fn dirty_flags(&self) -> DirtyFlags {
        self.dirty
    }

    #[inline]
    pub fn mark_dirty(&mut self, flags: DirtyFlags) {
        self.dirty |= flags;
    }

    #[inline]
    pub fn clear_dirty(&mut self) {
        self.dirty = DirtyFlags::NONE;
    }
}

impl SceneNode for SceneObject {
    fn name(&self) -> &str {
        &self.name
    }

    fn set_name(&mut self, name: String) {
        self.name = name;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::{DrawHandle, MeshRef, StaticMesh};
    use scened_math::Vec3;

    fn make_primitive() -> Primitive {
        let bounds = Bounds3::new(Vec3::splat(-1.0), Vec3::ONE);
        Primitive::new(MeshRef::shared(StaticMesh::new(bounds, DrawHandle(1))), "Box")
    }

    #[test]
    fn test_new_object_is_detached_and_visible() {
        let obj = SceneObject::new("Object 1".to_string());
        assert_eq!(obj.name(), "Object 1");
        assert!(obj.visible);
        assert_eq!(obj.owner(), Owner::Detached);
        assert!(!obj.is_attached());
        assert!(obj.parent().is_none());
        assert!(obj.children().is_empty());
    }

    #[test]
    fn test_transform_always_present() {
        let obj = SceneObject::new("a".to_string());
        assert!(obj.has_component(ComponentKind::Transform));
        let kinds: Vec<_> = obj.component_kinds().collect();
        assert_eq!(kinds, vec![ComponentKind::Transform]);
    }

    #[test]
    fn test_duplicate_component_rejected() {
        let mut obj = SceneObject::new("a".to_string());
        obj.add_component(Camera::new(1.0)).unwrap();

        let mut second = Camera::new(2.0);
        second.set_view_angle(10.0);
        let result = obj.add_component(second);

        assert_eq!(result, Err(SceneError::DuplicateComponent(ComponentKind::Camera)));
        assert_eq!(obj.components().len(), 1);
        // The first camera is untouched
        assert_eq!(obj.camera().unwrap().aspect_ratio(), 1.0);
    }

    #[test]
    fn test_one_of_each_kind() {
        let mut obj = SceneObject::new("a".to_string());
        obj.add_component(make_primitive()).unwrap();
        obj.add_component(Camera::default()).unwrap();
        let kinds: Vec<_> = obj.component_kinds().collect();
        assert_eq!(
            kinds,
            vec![ComponentKind::Transform, ComponentKind::Primitive, ComponentKind::Camera]
        );
    }

    #[test]
    fn test_remove_component() {
        let mut obj = SceneObject::new("a".to_string());
        obj.add_component(make_primitive()).unwrap();

        assert_eq!(
            obj.remove_component(ComponentKind::Transform).unwrap_err(),
            SceneError::MandatoryComponent
        );
        assert_eq!(
            obj.remove_component(ComponentKind::Camera).unwrap_err(),
            SceneError::MissingComponent(ComponentKind::Camera)
        );

        let removed = obj.remove_component(ComponentKind::Primitive).unwrap();
        assert_eq!(removed.kind(), ComponentKind::Primitive);
        assert!(obj.primitive().is_none());
    }

    #[test]
    fn test_local_bounds() {
        let mut obj = SceneObject::new("a".to_string());
        assert!(obj.local_bounds().is_empty());
        obj.add_component(make_primitive()).unwrap();
        assert_eq!(obj.local_bounds().size(), Vec3::splat(2.0));
    }

    #[test]
    fn test_dirty_tracking() {
        let mut obj = SceneObject::new("a".to_string());
        assert_eq!(obj.dirty_flags(), DirtyFlags::ALL);
        obj.clear_dirty();
        assert!(!obj.is_dirty());

        obj.transform_mut().set_local_position(Vec3::X);
        assert_eq!(obj.dirty_flags(), DirtyFlags::TRANSFORM);

        obj.clear_dirty();
        obj.add_component(Camera::default()).unwrap();
        assert!(obj.dirty_flags().contains(DirtyFlags::COMPONENTS));
    }

    #[test]
    fn test_rename() {
        let mut obj = SceneObject::new("a".to_string());
        obj.set_name("renamed".to_string());
        assert_eq!(obj.name(), "renamed");
    }
}

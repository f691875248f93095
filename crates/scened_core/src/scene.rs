//! The scene: root container of the object hierarchy
//!
//! A Scene owns every object in an arena and lists its top-level objects.
//! All structural changes go through it, which keeps the hierarchy a tree:
//! - each attached object is listed in exactly one collection (the
//!   top-level list or one parent's child list)
//! - no object is its own ancestor
//!
//! World-space matrices and bounds are derived from the parent chain on
//! every query, so they always reflect the current hierarchy.

use scened_math::{Bounds3, Color, Mat4, Quat, Vec3};
use slotmap::SlotMap;

use crate::component::ComponentKind;
use crate::error::SceneError;
use crate::node::{NodeRef, SceneNode};
use crate::object::{DirtyFlags, ObjectKey, Owner, SceneObject};
use crate::traversal::HierarchyIter;

/// Root container of the scene hierarchy
pub struct Scene {
    name: String,
    /// Color the render target is cleared to
    pub background_color: Color,
    /// Ambient light applied to every primitive
    pub ambient_light: Color,
    objects: SlotMap<ObjectKey, SceneObject>,
    top_level: Vec<ObjectKey>,
    active_camera: Option<ObjectKey>,
}

impl Scene {
    /// Create an empty scene
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            background_color: Color::GRAY,
            ambient_light: Color::DARK_GRAY,
            objects: SlotMap::with_key(),
            top_level: Vec::new(),
            active_camera: None,
        }
    }

    // --- Object storage ---

    /// Create a detached object
    ///
    /// The object is stored in the scene but listed nowhere; it joins the
    /// hierarchy through [`Scene::set_parent`].
    pub fn create_object(&mut self, name: impl Into<String>) -> ObjectKey {
        self.objects.insert(SceneObject::new(name.into()))
    }

    #[inline]
    pub fn object(&self, key: ObjectKey) -> Option<&SceneObject> {
        self.objects.get(key)
    }

    #[inline]
    pub fn object_mut(&mut self, key: ObjectKey) -> Option<&mut SceneObject> {
        self.objects.get_mut(key)
    }

    #[inline]
    pub fn contains(&self, key: ObjectKey) -> bool {
        self.objects.contains_key(key)
    }

    /// Number of live objects, detached ones included
    #[inline]
    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Iterate over every live object, detached ones included, in no
    /// particular order
    pub fn objects(&self) -> impl Iterator<Item = (ObjectKey, &SceneObject)> {
        self.objects.iter()
    }

    /// Find the first object with the given name, in hierarchy order
    pub fn find_by_name(&self, name: &str) -> Option<ObjectKey> {
        self.iter_hierarchy(false)
            .find(|(_, obj)| obj.name() == name)
            .map(|(key, _)| key)
    }

    // --- Hierarchy queries ---

    /// Top-level objects in insertion order
    #[inline]
    pub fn top_level_objects(&self) -> &[ObjectKey] {
        &self.top_level
    }

    /// Children of an object in insertion order (empty for stale keys)
    pub fn children(&self, key: ObjectKey) -> &[ObjectKey] {
        match self.objects.get(key) {
            Some(obj) => obj.children(),
            None => &[],
        }
    }

    /// Parent of an object, `None` for top-level, detached or stale objects
    pub fn parent(&self, key: ObjectKey) -> Option<ObjectKey> {
        self.objects.get(key).and_then(SceneObject::parent)
    }

    /// Whether `ancestor` appears on the parent chain above `key`
    ///
    /// An object is not its own ancestor. Walks at most the object's depth.
    pub fn has_ancestor(&self, key: ObjectKey, ancestor: ObjectKey) -> bool {
        let mut current = self.parent(key);
        while let Some(k) = current {
            if k == ancestor {
                return true;
            }
            current = self.parent(k);
        }
        false
    }

    /// Whether the object is reachable from this scene's top-level list
    pub fn is_resident(&self, key: ObjectKey) -> bool {
        let mut current = key;
        loop {
            match self.objects.get(current).map(SceneObject::owner) {
                Some(Owner::Root) => return true,
                Some(Owner::Parent(parent)) => current = parent,
                Some(Owner::Detached) | None => return false,
            }
        }
    }

    /// Depth-first traversal over the whole scene
    pub fn iter_hierarchy(&self, only_visible: bool) -> HierarchyIter<'_> {
        HierarchyIter::new(self, &self.top_level, only_visible)
    }

    /// Depth-first traversal over an object's descendants (the object itself
    /// is not yielded)
    pub fn iter_object_hierarchy(&self, key: ObjectKey, only_visible: bool) -> HierarchyIter<'_> {
        HierarchyIter::new(self, self.children(key), only_visible)
    }

    // --- Hierarchy mutation ---

    /// Move an object under `new_parent`, or to the top level when `None`
    ///
    /// The object leaves whichever collection owned it (if any) and is
    /// appended to the end of the destination. Rejected with
    /// [`SceneError::Cycle`] when `new_parent` is the object itself or one of
    /// its descendants; a rejected call changes nothing.
    pub fn set_parent(
        &mut self,
        key: ObjectKey,
        new_parent: Option<ObjectKey>,
    ) -> Result<(), SceneError> {
        if !self.objects.contains_key(key) {
            return Err(SceneError::StaleObject);
        }
        if let Some(parent) = new_parent {
            if !self.objects.contains_key(parent) {
                return Err(SceneError::StaleObject);
            }
            if parent == key || self.has_ancestor(parent, key) {
                log::debug!(
                    "Rejected reparenting '{}' under its own descendant '{}'",
                    self.objects[key].name(),
                    self.objects[parent].name()
                );
                return Err(SceneError::Cycle);
            }
        }

        self.unlink(key);

        let owner = match new_parent {
            Some(parent) => {
                let parent_obj = &mut self.objects[parent];
                parent_obj.children.push(key);
                parent_obj.mark_dirty(DirtyFlags::HIERARCHY);
                Owner::Parent(parent)
            }
            None => {
                self.top_level.push(key);
                Owner::Root
            }
        };
        let obj = &mut self.objects[key];
        obj.owner = owner;
        obj.mark_dirty(DirtyFlags::HIERARCHY);
        // The ancestor chain changed, so every world matrix below moved
        self.mark_subtree_dirty(key, DirtyFlags::TRANSFORM);
        Ok(())
    }

    /// Delete an object together with its whole subtree
    ///
    /// Returns the node that owned the object (the scene for top-level and
    /// detached objects), so a selection can move up to it. Keys to deleted
    /// objects resolve to `None` from then on.
    pub fn remove_object(&mut self, key: ObjectKey) -> Result<NodeRef, SceneError> {
        let obj = self.objects.get(key).ok_or(SceneError::StaleObject)?;
        let former_owner = NodeRef::from(obj.parent());

        self.unlink(key);

        let mut stack = vec![key];
        let mut removed = 0usize;
        while let Some(k) = stack.pop() {
            if let Some(obj) = self.objects.remove(k) {
                stack.extend_from_slice(&obj.children);
                removed += 1;
            }
        }
        log::info!("Removed {} object(s) from scene '{}'", removed, self.name);

        Ok(former_owner)
    }

    /// Take an object out of its owning collection, leaving it detached
    fn unlink(&mut self, key: ObjectKey) {
        let owner = match self.objects.get(key) {
            Some(obj) => obj.owner,
            None => return,
        };
        match owner {
            Owner::Detached => {}
            Owner::Root => self.top_level.retain(|&k| k != key),
            Owner::Parent(parent) => {
                if let Some(parent_obj) = self.objects.get_mut(parent) {
                    parent_obj.children.retain(|&k| k != key);
                    parent_obj.mark_dirty(DirtyFlags::HIERARCHY);
                }
            }
        }
        self.objects[key].owner = Owner::Detached;
    }

    fn mark_subtree_dirty(&mut self, key: ObjectKey, flags: DirtyFlags) {
        let mut stack = vec![key];
        while let Some(k) = stack.pop() {
            if let Some(obj) = self.objects.get_mut(k) {
                obj.mark_dirty(flags);
                stack.extend_from_slice(&obj.children);
            }
        }
    }

    // --- Active camera ---

    /// The object whose camera the scene is rendered through
    ///
    /// `None` when no camera was chosen, or when the chosen object was
    /// deleted or lost its camera component since.
    pub fn active_camera(&self) -> Option<ObjectKey> {
        self.active_camera
            .filter(|&key| self.objects.get(key).is_some_and(|obj| obj.camera().is_some()))
    }

    /// Choose the object to render the scene through, or clear the choice
    ///
    /// The object must carry a camera component.
    pub fn set_active_camera(&mut self, key: Option<ObjectKey>) -> Result<(), SceneError> {
        if let Some(key) = key {
            let obj = self.objects.get(key).ok_or(SceneError::StaleObject)?;
            if obj.camera().is_none() {
                return Err(SceneError::MissingComponent(ComponentKind::Camera));
            }
            log::info!("Active camera is now '{}'", obj.name());
        }
        self.active_camera = key;
        Ok(())
    }

    /// View-projection matrix of an object's camera, placed at the object's
    /// world pose
    ///
    /// `None` for stale keys and objects without a camera.
    pub fn camera_view_projection(&self, key: ObjectKey) -> Option<Mat4> {
        let camera = self.objects.get(key)?.camera()?;
        let view = self.local_to_world(key)?.inverse();
        Some(camera.projection_matrix() * view)
    }

    // --- World-space transforms ---

    /// Local-to-world matrix of an object: parent.local_to_world * local
    pub fn local_to_world(&self, key: ObjectKey) -> Option<Mat4> {
        let obj = self.objects.get(key)?;
        Some(self.parent_to_world(obj) * obj.transform().local_matrix())
    }

    /// World-to-local matrix of an object
    pub fn world_to_local(&self, key: ObjectKey) -> Option<Mat4> {
        self.local_to_world(key).map(|m| m.inverse())
    }

    /// World-space position of an object's origin
    pub fn world_position(&self, key: ObjectKey) -> Option<Vec3> {
        self.local_to_world(key).map(|m| m.transform_point3(Vec3::ZERO))
    }

    /// World-space rotation of an object
    pub fn world_rotation(&self, key: ObjectKey) -> Option<Quat> {
        let mut obj = self.objects.get(key)?;
        let mut rotation = obj.transform().local_rotation();
        while let Some(parent) = obj.parent().and_then(|p| self.objects.get(p)) {
            rotation = parent.transform().local_rotation() * rotation;
            obj = parent;
        }
        Some(rotation.normalize())
    }

    /// Move an object so its origin lands on a world-space point
    pub fn set_world_position(&mut self, key: ObjectKey, position: Vec3) -> Result<(), SceneError> {
        let obj = self.objects.get(key).ok_or(SceneError::StaleObject)?;
        let local = self.parent_to_world(obj).inverse().transform_point3(position);
        self.objects[key].transform_mut().set_local_position(local);
        Ok(())
    }

    /// Matrix taking the object's parent space to world space
    fn parent_to_world(&self, obj: &SceneObject) -> Mat4 {
        let mut matrix = Mat4::IDENTITY;
        let mut current = obj.parent().and_then(|p| self.objects.get(p));
        while let Some(ancestor) = current {
            matrix = ancestor.transform().local_matrix() * matrix;
            current = ancestor.parent().and_then(|p| self.objects.get(p));
        }
        matrix
    }

    // --- Bounds ---

    /// World-space bounds of an object and its whole subtree
    ///
    /// Recomputed on every call. Hidden descendants count too. Empty when
    /// neither the object nor any descendant has geometry, or for stale keys.
    pub fn bounds(&self, key: ObjectKey) -> Bounds3 {
        match self.objects.get(key) {
            Some(obj) => self.subtree_bounds(obj, self.parent_to_world(obj)),
            None => Bounds3::EMPTY,
        }
    }

    /// World-space bounds of every top-level object
    pub fn scene_bounds(&self) -> Bounds3 {
        self.top_level
            .iter()
            .fold(Bounds3::EMPTY, |acc, &key| acc.union(&self.bounds(key)))
    }

    fn subtree_bounds(&self, obj: &SceneObject, parent_to_world: Mat4) -> Bounds3 {
        let local_to_world = parent_to_world * obj.transform().local_matrix();
        let mut bounds = obj.local_bounds().transformed(&local_to_world);
        for child in obj.children().iter().filter_map(|&k| self.objects.get(k)) {
            bounds.inflate_bounds(&self.subtree_bounds(child, local_to_world));
        }
        bounds
    }
}

impl SceneNode for Scene {
    fn name(&self) -> &str {
        &self.name
    }

    fn set_name(&mut self, name: String) {
        self.name = name;
    }
}

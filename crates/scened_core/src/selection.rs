//! Editor selection
//!
//! Tracks the node the editor is working on: either the scene root or one
//! object. New objects are inserted relative to it and deletion removes it.

use crate::node::NodeRef;
use crate::object::ObjectKey;
use crate::scene::Scene;

/// The editor's current node
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Selection {
    current: NodeRef,
}

impl Default for Selection {
    fn default() -> Self {
        Self { current: NodeRef::Scene }
    }
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// The current node
    #[inline]
    pub fn current(&self) -> NodeRef {
        self.current
    }

    /// The current object, if one is selected and still alive
    pub fn current_object(&self, scene: &Scene) -> Option<ObjectKey> {
        self.current.object().filter(|&key| scene.contains(key))
    }

    pub fn select(&mut self, node: impl Into<NodeRef>) {
        self.current = node.into();
    }

    pub fn is_selected(&self, key: ObjectKey) -> bool {
        self.current == NodeRef::Object(key)
    }

    /// Insert an object under the current node
    ///
    /// With the scene selected the object becomes top-level; otherwise it
    /// becomes the last child of the current object. With `replace`, the
    /// object also becomes the current node. Returns `None` and leaves the
    /// object where it was when it cannot be inserted: a stale key, the
    /// object being the current node or one of its ancestors, or a current
    /// object that no longer exists. In the last case the selection falls
    /// back to the scene.
    pub fn add_to_current(
        &mut self,
        scene: &mut Scene,
        key: ObjectKey,
        replace: bool,
    ) -> Option<ObjectKey> {
        let parent = match self.current {
            NodeRef::Scene => None,
            NodeRef::Object(current) if scene.contains(current) => Some(current),
            NodeRef::Object(_) => {
                log::warn!("Cannot add object: the current object was deleted");
                self.current = NodeRef::Scene;
                return None;
            }
        };
        if let Err(err) = scene.set_parent(key, parent) {
            log::warn!("Cannot add object to current node: {}", err);
            return None;
        }
        if replace {
            self.current = NodeRef::Object(key);
        }
        Some(key)
    }

    /// Delete the current object with its subtree and select its former owner
    ///
    /// Returns `false` when the scene itself (or nothing alive) is selected.
    pub fn delete_current(&mut self, scene: &mut Scene) -> bool {
        let Some(key) = self.current.object() else {
            return false;
        };
        match scene.remove_object(key) {
            Ok(owner) => {
                self.current = owner;
                true
            }
            Err(_) => {
                self.current = NodeRef::Scene;
                false
            }
        }
    }
}

//! Depth-first hierarchy traversal
//!
//! [`HierarchyIter`] walks a scene (from its top-level objects) or a
//! subtree (from one object's children) in pre-order. It keeps a stack of
//! pending keys and pushes each node's children in reverse, so the next
//! object popped is always the first child in sibling order.
//!
//! With `only_visible`, hidden objects are never pushed: they are skipped
//! together with their whole subtree, while already-queued siblings are
//! still yielded.
//!
//! The iterator borrows the scene, so the tree cannot change under it.

use crate::object::{ObjectKey, SceneObject};
use crate::scene::Scene;

/// Single-pass, depth-first iterator over scene objects
pub struct HierarchyIter<'a> {
    scene: &'a Scene,
    remaining: Vec<ObjectKey>,
    only_visible: bool,
}

impl<'a> HierarchyIter<'a> {
    pub(crate) fn new(scene: &'a Scene, start: &[ObjectKey], only_visible: bool) -> Self {
        let mut iter = Self {
            scene,
            remaining: Vec::new(),
            only_visible,
        };
        iter.push_objects(start);
        iter
    }

    /// Whether hidden subtrees are skipped
    pub fn only_visible(&self) -> bool {
        self.only_visible
    }

    /// The object that the next call to `next` yields, if any
    pub fn peek(&self) -> Option<ObjectKey> {
        self.remaining.last().copied()
    }

    fn push_objects(&mut self, keys: &[ObjectKey]) {
        // Reversed so the first sibling ends up on top of the stack
        for &key in keys.iter().rev() {
            if let Some(obj) = self.scene.object(key) {
                if !self.only_visible || obj.visible {
                    self.remaining.push(key);
                }
            }
        }
    }
}

impl<'a> Iterator for HierarchyIter<'a> {
    type Item = (ObjectKey, &'a SceneObject);

    fn next(&mut self) -> Option<Self::Item> {
        let scene = self.scene;
        while let Some(key) = self.remaining.pop() {
            // Keys are checked when pushed; this only skips keys whose
            // object vanished, which cannot happen while `scene` is borrowed.
            if let Some(obj) = scene.object(key) {
                self.push_objects(obj.children());
                return Some((key, obj));
            }
        }
        None
    }
}

impl std::iter::FusedIterator for HierarchyIter<'_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::SceneNode;

    /// Builds:
    /// ```text
    /// a
    /// ├── b
    /// │   └── d
    /// └── c
    /// e
    /// ```
    fn build() -> (Scene, [ObjectKey; 5]) {
        let mut scene = Scene::new("test");
        let keys = ["a", "b", "c", "d", "e"].map(|n| scene.create_object(n));
        let [a, b, c, d, e] = keys;
        scene.set_parent(a, None).unwrap();
        scene.set_parent(b, Some(a)).unwrap();
        scene.set_parent(c, Some(a)).unwrap();
        scene.set_parent(d, Some(b)).unwrap();
        scene.set_parent(e, None).unwrap();
        (scene, keys)
    }

    fn names(iter: HierarchyIter<'_>) -> Vec<String> {
        iter.map(|(_, obj)| obj.name().to_string()).collect()
    }

    #[test]
    fn test_preorder_sibling_order() {
        let (scene, _) = build();
        assert_eq!(names(scene.iter_hierarchy(false)), vec!["a", "b", "d", "c", "e"]);
    }

    #[test]
    fn test_subtree_excludes_start() {
        let (scene, [a, ..]) = build();
        assert_eq!(names(scene.iter_object_hierarchy(a, false)), vec!["b", "d", "c"]);
    }

    #[test]
    fn test_hidden_subtree_skipped() {
        let (mut scene, [_, b, ..]) = build();
        scene.object_mut(b).unwrap().visible = false;

        assert_eq!(names(scene.iter_hierarchy(true)), vec!["a", "c", "e"]);
        // The unfiltered walk still sees everything
        assert_eq!(scene.iter_hierarchy(false).count(), 5);
    }

    #[test]
    fn test_hidden_root_skipped() {
        let (mut scene, [a, ..]) = build();
        scene.object_mut(a).unwrap().visible = false;
        assert_eq!(names(scene.iter_hierarchy(true)), vec!["e"]);
    }

    #[test]
    fn test_peek() {
        let (scene, [a, ..]) = build();
        let mut iter = scene.iter_hierarchy(false);
        assert!(!iter.only_visible());
        assert_eq!(iter.peek(), Some(a));
        iter.next();
        assert_ne!(iter.peek(), Some(a));
    }

    #[test]
    fn test_exhausted_iterator_stays_empty() {
        let scene = Scene::new("empty");
        let mut iter = scene.iter_hierarchy(false);
        assert!(iter.next().is_none());
        assert!(iter.next().is_none());
    }
}

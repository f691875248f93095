//! Named node identity shared by scenes and scene objects

use crate::object::ObjectKey;

/// Anything in the hierarchy that carries an editable name
pub trait SceneNode {
    fn name(&self) -> &str;
    fn set_name(&mut self, name: String);
}

/// Identity of a node in the hierarchy: the scene root or one object
///
/// Used wherever the editor needs to point at "a node", such as the current
/// selection or the former owner of a deleted object.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NodeRef {
    Scene,
    Object(ObjectKey),
}

impl NodeRef {
    /// The object key, if this refers to an object
    pub fn object(self) -> Option<ObjectKey> {
        match self {
            NodeRef::Scene => None,
            NodeRef::Object(key) => Some(key),
        }
    }
}

impl From<ObjectKey> for NodeRef {
    fn from(key: ObjectKey) -> Self {
        NodeRef::Object(key)
    }
}

impl From<Option<ObjectKey>> for NodeRef {
    fn from(key: Option<ObjectKey>) -> Self {
        key.map_or(NodeRef::Scene, NodeRef::Object)
    }
}

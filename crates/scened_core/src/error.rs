//! Scene error types
//!
//! Every operation that fails with a [`SceneError`] leaves the scene exactly
//! as it was, so callers that only care about the happy path may ignore it.

use std::fmt;

use crate::component::ComponentKind;

/// Error type for structural scene operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SceneError {
    /// The object key no longer refers to a live object
    StaleObject,
    /// The requested parent is the object itself or one of its descendants
    Cycle,
    /// The object already carries a component of this kind
    DuplicateComponent(ComponentKind),
    /// The transform cannot be removed
    MandatoryComponent,
    /// The object carries no component of this kind
    MissingComponent(ComponentKind),
}

impl fmt::Display for SceneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SceneError::StaleObject => write!(f, "Scene object no longer exists"),
            SceneError::Cycle => write!(f, "Reparenting would make an object its own ancestor"),
            SceneError::DuplicateComponent(kind) => {
                write!(f, "Object already has a {} component", kind)
            }
            SceneError::MandatoryComponent => write!(f, "The Transform component cannot be removed"),
            SceneError::MissingComponent(kind) => write!(f, "Object has no {} component", kind),
        }
    }
}

impl std::error::Error for SceneError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_component() {
        let msg = format!("{}", SceneError::DuplicateComponent(ComponentKind::Camera));
        assert!(msg.contains("Camera"));
    }

    #[test]
    fn test_cycle_display() {
        let msg = SceneError::Cycle.to_string();
        assert!(msg.contains("ancestor"));
    }
}

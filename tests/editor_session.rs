//! Integration tests for an editing session
//!
//! Builds the start-up scene and drives the navigator and selection the way
//! the editor does.

use scened::config::AppConfig;
use scened::scene::{ObjectFactory, SceneBuilder};
use scened_core::{NodeRef, SceneNode, Selection};
use scened_input::EditorController;
use winit::event::ElementState;
use winit::keyboard::{KeyCode, ModifiersState};

#[test]
fn test_focus_on_selected_group() {
    let scene = SceneBuilder::demo("Scene 1");
    let mut navigator = AppConfig::default().navigator();
    let mut controller = EditorController::new();

    let group = scene.find_by_name("Object 2").unwrap();
    let bounds = scene.bounds(group);

    controller.process_modifiers(ModifiersState::ALT);
    controller.process_keyboard(KeyCode::KeyF, ElementState::Pressed);
    controller.update(&mut navigator, Some(&bounds));

    let to_center = bounds.center() - navigator.position();
    assert!((to_center.normalize() - navigator.view_direction()).length() < 1e-4);
    let half_angle = (navigator.camera().view_angle() * 0.5).to_radians();
    let expected = navigator.camera().near_plane() + 0.5 * bounds.diagonal_length() / half_angle.tan();
    assert!((to_center.length() - expected).abs() < 1e-3);
}

#[test]
fn test_create_and_delete_under_selection() {
    let mut scene = SceneBuilder::demo("Scene 1");
    let mut factory = ObjectFactory::default();
    let mut selection = Selection::new();

    let group = scene.find_by_name("Object 2").unwrap();
    selection.select(group);
    let before = scene.bounds(group);

    let sphere = factory.sphere(&mut scene);
    scene.object_mut(sphere).unwrap().transform_mut().set_local_position(scened_core::Vec3::new(0.0, 8.0, 0.0));
    assert_eq!(selection.add_to_current(&mut scene, sphere, true), Some(sphere));
    assert_eq!(scene.object(sphere).unwrap().name(), "Sphere 1");

    let after = scene.bounds(group);
    assert_eq!(after.union(&before), after);

    assert!(selection.delete_current(&mut scene));
    assert_eq!(selection.current(), NodeRef::Object(group));
    assert!(!scene.contains(sphere));

    assert!(selection.delete_current(&mut scene));
    assert_eq!(selection.current(), NodeRef::Scene);
    assert_eq!(scene.object_count(), 4);
}

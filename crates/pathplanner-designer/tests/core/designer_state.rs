use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use pathplanner_designer::model::{Alliance, Heading, MotionType, Side};
use pathplanner_designer::DesignerState;

#[test]
fn test_new_state_has_one_empty_path() {
    let state = DesignerState::new();
    assert_eq!(state.project().paths.len(), 1);
    assert_eq!(state.current_path().unwrap().name, "New Path");
    assert!(state.current_path().unwrap().is_empty());
    assert!(!state.can_undo());
    assert!(!state.is_modified);
    assert_eq!(state.display_name(), "Untitled");
}

#[test]
fn test_add_waypoint_respects_side() {
    let mut state = DesignerState::new();
    assert_eq!(state.add_waypoint(-24.0, 0.0), Some(0));
    assert_eq!(state.add_waypoint(10.0, 0.0), None);
    assert_eq!(state.current_path().unwrap().len(), 1);
    assert_eq!(state.selected_waypoint(), Some(0));
    assert!(state.is_modified);
    assert_eq!(state.display_name(), "Untitled*");
}

#[test]
fn test_each_edit_is_one_undo_step() {
    let mut state = DesignerState::new();
    state.add_waypoint(-24.0, 0.0);
    state.add_waypoint(-24.0, 24.0);
    state.set_intaking(1, true);
    assert_eq!(state.history_status().undo_count, 3);

    assert!(state.undo());
    assert!(!state.current_path().unwrap().waypoints()[1].intaking);
    assert!(state.undo());
    assert_eq!(state.current_path().unwrap().len(), 1);
    assert!(state.redo());
    assert_eq!(state.current_path().unwrap().len(), 2);
}

#[test]
fn test_undo_clamps_selection() {
    let mut state = DesignerState::new();
    state.add_waypoint(-24.0, 0.0);
    state.add_waypoint(-24.0, 24.0);
    assert_eq!(state.selected_waypoint(), Some(1));
    state.undo();
    assert_eq!(state.selected_waypoint(), None);
}

#[test]
fn test_move_waypoint_clamped_and_validated() {
    let mut state = DesignerState::new();
    state.add_waypoint(-24.0, 0.0);

    assert!(state.move_waypoint(0, -100.0, 100.0));
    let wp = &state.current_path().unwrap().waypoints()[0];
    assert_eq!((wp.x, wp.y), (-72.0, 72.0));

    assert!(!state.move_waypoint(0, 30.0, 0.0));
    assert!(!state.move_waypoint(5, -1.0, 0.0));
}

#[test]
fn test_add_waypoint_clamped_to_field() {
    let mut state = DesignerState::new();
    assert!(state.set_side(Side::Full));

    assert_eq!(state.add_waypoint(500.0, -900.0), Some(0));
    let wp = &state.current_path().unwrap().waypoints()[0];
    assert_eq!((wp.x, wp.y), (72.0, -72.0));
}

#[test]
fn test_non_finite_positions_rejected() {
    let mut state = DesignerState::new();
    assert!(state.set_side(Side::Full));
    let undo_before = state.history_status().undo_count;

    assert_eq!(state.add_waypoint(f64::INFINITY, 200.0), None);
    assert_eq!(state.add_waypoint(0.0, f64::NAN), None);
    assert_eq!(state.add_waypoint(f64::NEG_INFINITY, 0.0), None);
    assert!(state.current_path().unwrap().is_empty());

    assert_eq!(state.add_waypoint(10.0, 10.0), Some(0));
    assert!(!state.move_waypoint(0, f64::NAN, 0.0));
    assert!(!state.move_waypoint(0, 0.0, f64::INFINITY));
    let wp = &state.current_path().unwrap().waypoints()[0];
    assert_eq!((wp.x, wp.y), (10.0, 10.0));
    assert_eq!(state.history_status().undo_count, undo_before + 1);
}

#[test]
fn test_canvas_input() {
    let mut state = DesignerState::new();
    // Canvas 600px: centre (300, 300) is the field origin
    assert_eq!(state.add_waypoint_at_canvas(150.0, 300.0), Some(0));
    let wp = &state.current_path().unwrap().waypoints()[0];
    assert!((wp.x + 36.0).abs() < 1e-9);
    assert!(wp.y.abs() < 1e-9);

    assert_eq!(state.find_waypoint_at(155.0, 305.0), Some(0));
    assert_eq!(state.find_waypoint_at(200.0, 300.0), None);
}

#[test]
fn test_delete_waypoint_promotes_start_and_adjusts_selection() {
    let mut state = DesignerState::new();
    state.add_waypoint(-10.0, 0.0);
    state.add_waypoint(-20.0, 0.0);
    state.add_waypoint(-30.0, 0.0);
    assert!(state.select_waypoint(Some(2)));

    assert!(state.delete_waypoint(0));
    let path = state.current_path().unwrap();
    assert_eq!(path.waypoints()[0].motion_type, MotionType::Start);
    assert_eq!(state.selected_waypoint(), Some(1));
    assert!(!state.delete_waypoint(9));
}

#[test]
fn test_motion_type_edits() {
    let mut state = DesignerState::new();
    state.add_waypoint(-10.0, 0.0);
    state.add_waypoint(-20.0, 0.0);

    assert!(!state.set_motion_type(0, MotionType::RotateTo));
    assert!(!state.set_motion_type(1, MotionType::Start));
    assert!(!state.set_motion_type(1, MotionType::MoveToPose));
    assert!(state.set_motion_type(1, MotionType::RotateTo));
    assert_eq!(state.undo_description(), Some("Change motion type"));
}

#[test]
fn test_waypoint_properties_and_commands() {
    let mut state = DesignerState::new();
    state.add_waypoint(-10.0, 0.0);

    assert!(state.set_heading(0, Heading::Manual(90.0)));
    assert!(state.set_reverse(0, true));
    assert!(state.set_conveyor(0, true));
    assert!(state.add_command(0, "intake_in"));
    assert!(state.add_command(0, "wait_100"));
    assert!(state.move_command(0, 1, 0));
    assert!(state.remove_command(0, 1));
    assert!(!state.remove_command(0, 5));

    let wp = &state.current_path().unwrap().waypoints()[0];
    assert_eq!(wp.heading, Heading::Manual(90.0));
    assert!(wp.reverse && wp.conveyor);
    assert_eq!(wp.commands_after, vec!["wait_100"]);
}

#[test]
fn test_path_edits() {
    let mut state = DesignerState::new();
    assert_eq!(state.add_path("Skills"), 1);
    assert_eq!(state.current_path_index(), 1);

    assert!(state.set_alliance(Alliance::Blue));
    assert!(state.set_side(Side::Right));
    assert!(!state.set_side(Side::Right));
    assert!(state.rename_path(1, "Skills v2"));
    assert_eq!(state.current_path().unwrap().name, "Skills v2");

    assert!(state.select_path(0));
    assert!(!state.select_path(4));

    assert!(state.remove_path(1));
    assert!(!state.remove_path(0));
    assert_eq!(state.project().paths.len(), 1);

    // Undo brings the removed path back
    assert!(state.undo());
    assert_eq!(state.project().paths.len(), 2);
    assert_eq!(state.project().paths[1].alliance, Alliance::Blue);
}

#[test]
fn test_clear_waypoints() {
    let mut state = DesignerState::new();
    assert!(!state.clear_waypoints());
    state.add_waypoint(-10.0, 0.0);
    assert!(state.clear_waypoints());
    assert!(state.current_path().unwrap().is_empty());
    assert!(state.undo());
    assert_eq!(state.current_path().unwrap().len(), 1);
}

#[test]
fn test_generate_code_uses_registry() {
    let mut state = DesignerState::new();
    state.add_waypoint(-10.0, 0.0);
    state.add_command(0, "intake_in");
    let code = state.generate_code();
    assert!(code.contains("void New_Path() {"));
    assert!(code.contains("mech.intakeIn();"));
    assert_eq!(state.effective_headings().len(), 1);
    assert!(!state.generate_body().contains("void"));
}

#[test]
fn test_history_observer() {
    let mut state = DesignerState::new();
    let calls = Arc::new(AtomicUsize::new(0));
    let calls_clone = Arc::clone(&calls);
    let id = state.on_history_change(move |_| {
        calls_clone.fetch_add(1, Ordering::SeqCst);
        Ok(())
    });

    state.add_waypoint(-10.0, 0.0);
    state.undo();
    assert_eq!(calls.load(Ordering::SeqCst), 2);
    assert!(state.remove_history_observer(id));
}

#[test]
fn test_new_project_resets() {
    let mut state = DesignerState::new();
    state.add_waypoint(-10.0, 0.0);
    state.new_project("high_stakes");
    assert_eq!(state.season(), "high_stakes");
    assert!(state.current_path().unwrap().is_empty());
    assert!(!state.can_undo());
    assert!(!state.is_modified);
}

use pathplanner_designer::model::{
    Alliance, Heading, HeadingMode, MotionType, Path, Project, Side, Waypoint,
};

#[test]
fn test_first_waypoint_is_start() {
    let mut path = Path::new("Auto1");
    assert_eq!(path.add_waypoint(0.0, 0.0), 0);
    assert_eq!(path.add_waypoint(-10.0, 24.0), 1);

    assert_eq!(path.waypoints()[0].motion_type, MotionType::Start);
    assert_eq!(path.waypoints()[1].motion_type, MotionType::MoveToPose);
}

#[test]
fn test_concrete_scenario_model() {
    let mut project = Project::new("X");
    let idx = project.add_path("Auto1");
    let path = project.path_mut(idx).unwrap();
    path.alliance = Alliance::Red;
    path.side = Side::Left;

    path.add_waypoint(0.0, 0.0);
    path.add_waypoint(-10.0, 24.0);

    assert_eq!(path.waypoint(0).unwrap().motion_type, MotionType::Start);
    assert_eq!(path.waypoint(1).unwrap().motion_type, MotionType::MoveToPose);
    assert!(!path.is_valid_position(5.0, 5.0));
    assert!(path.is_valid_position(-5.0, 5.0));
}

#[test]
fn test_remove_first_waypoint_promotes_next() {
    let mut path = Path::new("p");
    path.add_waypoint(-1.0, 0.0);
    path.add_waypoint(-2.0, 0.0);
    path.add_waypoint(-3.0, 0.0);

    let removed = path.remove_waypoint(0).unwrap();
    assert_eq!(removed.x, -1.0);
    assert_eq!(path.len(), 2);
    assert_eq!(path.waypoints()[0].motion_type, MotionType::Start);
    assert_eq!(path.waypoints()[0].x, -2.0);
    assert_eq!(path.waypoints()[1].motion_type, MotionType::MoveToPose);
}

#[test]
fn test_remove_out_of_range_is_noop() {
    let mut path = Path::new("p");
    path.add_waypoint(0.0, 0.0);
    assert!(path.remove_waypoint(5).is_none());
    assert_eq!(path.len(), 1);
}

#[test]
fn test_remove_last_remaining_waypoint() {
    let mut path = Path::new("p");
    path.add_waypoint(0.0, 0.0);
    assert!(path.remove_waypoint(0).is_some());
    assert!(path.is_empty());

    // Next add starts over with START
    path.add_waypoint(-1.0, 1.0);
    assert_eq!(path.waypoints()[0].motion_type, MotionType::Start);
}

#[test]
fn test_side_restrictions() {
    assert!(Side::Left.admits(-10.0));
    assert!(Side::Left.admits(0.0));
    assert!(!Side::Left.admits(0.1));
    assert!(Side::Right.admits(10.0));
    assert!(Side::Right.admits(0.0));
    assert!(!Side::Right.admits(-0.1));
    assert!(Side::Full.admits(-72.0));
    assert!(Side::Full.admits(72.0));
}

#[test]
fn test_set_motion_type_protects_start() {
    let mut path = Path::new("p");
    path.add_waypoint(0.0, 0.0);
    path.add_waypoint(-5.0, 5.0);

    assert!(!path.set_motion_type(0, MotionType::RotateTo));
    assert!(!path.set_motion_type(1, MotionType::Start));
    assert!(path.set_motion_type(1, MotionType::MoveVertical));
    assert_eq!(path.waypoints()[1].motion_type, MotionType::MoveVertical);
    assert!(!path.set_motion_type(9, MotionType::RotateTo));
}

#[test]
fn test_waypoint_command_edits() {
    let mut wp = Waypoint::new(0.0, 0.0, MotionType::MoveToPose);
    wp.add_command("intake_in");
    wp.add_command("wait_500");
    wp.insert_command(1, "conveyor_up");
    wp.insert_command(99, "intake_stop");
    assert_eq!(
        wp.commands_after,
        vec!["intake_in", "conveyor_up", "wait_500", "intake_stop"]
    );

    assert!(wp.move_command(3, 0));
    assert_eq!(wp.commands_after[0], "intake_stop");
    assert!(!wp.move_command(0, 4));

    assert_eq!(wp.remove_command_at(1).as_deref(), Some("intake_in"));
    assert!(wp.remove_command_at(10).is_none());

    wp.clear_commands();
    assert!(wp.commands_after.is_empty());
}

#[test]
fn test_heading_union() {
    assert_eq!(Heading::Auto.mode(), HeadingMode::Auto);
    assert_eq!(Heading::Auto.value(), None);
    assert_eq!(Heading::Manual(90.0).mode(), HeadingMode::Manual);
    assert_eq!(Heading::Manual(90.0).value(), Some(90.0));
    assert!(Heading::default().is_auto());
}

#[test]
fn test_enum_literals() {
    assert_eq!(MotionType::Start.to_string(), "start");
    assert_eq!(MotionType::MoveToPose.to_string(), "moveToPose");
    assert_eq!(MotionType::MoveVertical.to_string(), "moveVertical");
    assert_eq!(MotionType::RotateTo.to_string(), "rotateTo");
    assert_eq!("rotateTo".parse::<MotionType>().unwrap(), MotionType::RotateTo);
    assert!("fly".parse::<MotionType>().is_err());

    assert_eq!("BLUE".parse::<Alliance>().unwrap(), Alliance::Blue);
    assert_eq!("full".parse::<Side>().unwrap(), Side::Full);
    assert_eq!("manual".parse::<HeadingMode>().unwrap(), HeadingMode::Manual);
}

#[test]
fn test_enum_defaults() {
    assert_eq!(MotionType::default(), MotionType::MoveToPose);
    assert_eq!(Alliance::default(), Alliance::Red);
    assert_eq!(Side::default(), Side::Left);
    assert_eq!(Heading::default().mode(), HeadingMode::Auto);
}

#[test]
fn test_project_paths() {
    let mut project = Project::with_default_path("pushback_2026");
    assert_eq!(project.paths.len(), 1);
    assert_eq!(project.paths[0].name, "New Path");

    let idx = project.add_path("Skills");
    assert_eq!(idx, 1);
    assert!(project.find_path("Skills").is_some());
    assert!(project.remove_path(7).is_none());
    assert_eq!(project.remove_path(0).unwrap().name, "New Path");
    assert_eq!(project.paths[0].name, "Skills");
}

#[test]
fn test_path_total_length() {
    let mut path = Path::new("p");
    path.side = Side::Full;
    path.add_waypoint(0.0, 0.0);
    path.add_waypoint(3.0, 4.0);
    path.add_waypoint(3.0, 10.0);
    assert!((path.total_length() - 11.0).abs() < 1e-9);
}

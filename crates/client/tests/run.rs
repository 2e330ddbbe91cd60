//! End-to-end checks: parse a command, pre-flight it, then play it back.

use robot_client::{Robot, RunOutcome, TileState, check};
use robot_core::{ParseError, Position, RobotError, traverse};

#[test]
fn reference_command_completes_and_matches_plan() {
    let (command, report) = check("M:-10,10,-10,10;S:-5,5;[W5,E5,N4,E3,S2,W1]")
        .expect("reference command should parse");
    assert!(report.in_bounds);

    let plan = traverse(&command);
    let mut robot = Robot::new(command);
    let summary = robot.run_to_end();

    assert_eq!(summary.outcome, RunOutcome::Completed);
    assert_eq!(summary.trail, plan.path);
    assert_eq!(summary.final_position, Position::new(-3, 7));
    assert_eq!(summary.moves, 20);
    assert_eq!(summary.total_tiles, 400);
    assert_eq!(summary.cleaned_tiles, plan.unique_positions().len());
}

#[test]
fn mover_and_planner_agree_on_exit() {
    let (command, report) = check("M:0,5,0,5;S:4,4;[N2]").expect("command should parse");
    assert_eq!(report.exit_position, Some(Position::new(4, 5)));

    let mut robot = Robot::new(command);
    let summary = robot.run_to_end();

    assert_eq!(
        summary.outcome,
        RunOutcome::Aborted {
            target: Some(Position::new(4, 5))
        }
    );
    assert_eq!(summary.final_position, Position::new(4, 4));
    assert_eq!(summary.moves, 0);
}

#[test]
fn mover_and_planner_agree_at_minimum_coordinate() {
    let (command, report) =
        check("M:-2147483648,0,0,5;S:-2147483646,0;[W5]").expect("command should parse");
    assert_eq!(report.exit_position, Some(Position::new(i32::MIN, 0)));

    let plan = traverse(&command);
    let mut robot = Robot::new(command);
    let summary = robot.run_to_end();

    assert_eq!(summary.outcome, RunOutcome::Aborted { target: None });
    assert_eq!(summary.trail, plan.path);
    assert_eq!(summary.final_position, Position::new(i32::MIN, 0));
}

#[test]
fn mover_and_planner_agree_at_maximum_coordinate() {
    let (command, report) =
        check("M:2147483640,2147483647,0,5;S:2147483645,0;[E5]").expect("command should parse");
    assert_eq!(report.exit_position, Some(Position::new(i32::MAX, 0)));

    let mut robot = Robot::new(command);
    let summary = robot.run_to_end();

    assert_eq!(
        summary.outcome,
        RunOutcome::Aborted {
            target: Some(Position::new(i32::MAX, 0))
        }
    );
    assert_eq!(summary.final_position, Position::new(i32::MAX - 1, 0));
}

#[test]
fn planner_keeps_working_while_robot_is_mid_run() {
    let (command, _) = check("M:0,4,0,4;S:0,0;[E3,N3]").expect("command should parse");
    let mut robot = Robot::new(command);

    robot.tick().expect("first move is in bounds");
    robot.tick().expect("second move is in bounds");

    let plan = traverse(robot.command());
    assert!(plan.in_bounds);
    assert_eq!(plan.path.len(), 7);

    let summary = robot.run_to_end();
    assert_eq!(summary.trail, plan.path);
    assert_eq!(robot.tile(Position::new(3, 3)), Some(TileState::Clean));
    assert_eq!(robot.tile(Position::new(0, 3)), Some(TileState::Dirty));
}

#[test]
fn rejected_commands_surface_typed_errors() {
    let err = check("A:1,2;S:0,0;[]").unwrap_err();
    assert_eq!(
        err,
        ParseError::UnknownSection {
            section: "A:1,2".to_owned()
        }
    );
    assert_eq!(err.error_code(), "unknown_section");

    assert_eq!(
        check("M:1,2,3;S:0,0;[]").unwrap_err(),
        ParseError::MapFormat { found: 3 }
    );
}

#[test]
fn json_report_shape() {
    let (_, report) = check("M:0,5,0,5;S:4,4;[N2]").expect("command should parse");
    let json = serde_json::to_value(&report).expect("report serializes");

    assert_eq!(json["in_bounds"], false);
    assert_eq!(json["exit_position"]["y"], 5);
    assert_eq!(json["bounds"]["max"]["x"], 5);
    assert_eq!(json["command"], "M:0,5,0,5;S:4,4;[N2]");
}

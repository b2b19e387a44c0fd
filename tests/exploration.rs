//! End-to-end exploration scenarios.

use std::io::Write;

use vyuha::explore::{AgentConfig, FrontierAgent, FrontierOrder, Outcome};
use vyuha::io::{load_maze, parse_maze};
use vyuha::render::{render_fog, render_full};
use vyuha::session::{run_interactive, SessionEnd};
use vyuha::{CellKind, GridCoord, MazeError};

/// The normative corridor: start on the top border, goal on the bottom.
const CORRIDOR_3X3: &str = "3 3\n#o#\n#.#\n#*#\n";

#[test]
fn queue_agent_solves_corridor_in_three_reveals() {
    let mut grid = parse_maze(CORRIDOR_3X3).unwrap();
    let run = FrontierAgent::new(FrontierOrder::Fifo).run(&mut grid);

    assert_eq!(
        run.outcome,
        Outcome::GoalFound {
            at: GridCoord::new(2, 1)
        }
    );
    assert_eq!(
        run.reveals,
        vec![
            (GridCoord::new(0, 1), CellKind::Start),
            (GridCoord::new(1, 1), CellKind::Open),
            (GridCoord::new(2, 1), CellKind::Goal),
        ]
    );
}

#[test]
fn queue_agent_reveals_in_layer_order() {
    // Open room with the goal in the far corner of the interior.
    let maze = "7 7\n#######\n#o....#\n#.....#\n#.....#\n#.....#\n#....*#\n#######\n";
    let mut grid = parse_maze(maze).unwrap();
    let start = grid.start();
    let run = FrontierAgent::new(FrontierOrder::Fifo).run(&mut grid);

    assert!(matches!(run.outcome, Outcome::GoalFound { .. }));
    let distances: Vec<i32> = run
        .reveals
        .iter()
        .map(|(c, _)| c.manhattan_distance(&start))
        .collect();
    // Breadth-first reveals never step back to a closer layer.
    assert!(
        distances.windows(2).all(|w| w[1] >= w[0]),
        "distances not monotone: {:?}",
        distances
    );
}

#[test]
fn stack_agent_dives_down_one_branch() {
    // A T junction: the down branch is pushed before the right branch,
    // so the stack agent commits to the right branch first, where the
    // goal sits.
    let maze = "5 5\n#####\n#o..#\n#.#*#\n#.###\n#####\n";
    let mut grid = parse_maze(maze).unwrap();
    let run = FrontierAgent::new(FrontierOrder::Lifo).run(&mut grid);

    assert!(matches!(run.outcome, Outcome::GoalFound { .. }));
    assert!(
        !run.reveals
            .iter()
            .any(|(c, _)| *c == GridCoord::new(3, 1)),
        "first-pushed branch explored before the goal: {:?}",
        run.reveals
    );
}

#[test]
fn both_agents_exhaust_on_sealed_goal() {
    let maze = "7 7\n#######\n#o....#\n#.###.#\n#.#*#.#\n#.###.#\n#.....#\n#######\n";
    for order in [FrontierOrder::Fifo, FrontierOrder::Lifo] {
        let mut grid = parse_maze(maze).unwrap();
        let run = FrontierAgent::new(order).run(&mut grid);
        assert_eq!(run.outcome, Outcome::Exhausted, "{:?} should exhaust", order);
        assert!(!grid.is_explored(grid.goal()).unwrap());
        // Every open cell outside the sealed chamber was revealed.
        assert!(run.reveals.len() >= 12, "too few reveals: {:?}", run.reveals);
    }
}

#[test]
fn step_limit_bounds_a_hopeless_run() {
    let maze = "7 7\n#######\n#o....#\n#.###.#\n#.#*#.#\n#.###.#\n#.....#\n#######\n";
    let mut grid = parse_maze(maze).unwrap();
    let agent = FrontierAgent::with_config(
        FrontierOrder::Fifo,
        AgentConfig { step_limit: Some(5) },
    );
    let run = agent.run(&mut grid);
    assert_eq!(run.outcome, Outcome::StepLimitReached);
    assert_eq!(run.steps, 5);
}

#[test]
fn agents_and_humans_share_reveal_semantics() {
    // Drive the same maze once with the queue agent and once with a
    // scripted human following the agent's reveal order; both end with
    // the same explored region.
    let maze = "5 5\n#####\n#o..#\n#.#.#\n#..*#\n#####\n";
    let mut agent_grid = parse_maze(maze).unwrap();
    let run = FrontierAgent::new(FrontierOrder::Fifo).run(&mut agent_grid);
    assert!(matches!(run.outcome, Outcome::GoalFound { .. }));

    let script: String = run
        .reveals
        .iter()
        .map(|(c, _)| format!("{} {}\n", c.row, c.col))
        .collect();
    let mut human_grid = parse_maze(maze).unwrap();
    let mut out = Vec::new();
    let end = run_interactive(
        &mut human_grid,
        std::io::Cursor::new(script),
        &mut out,
    )
    .unwrap();

    assert_eq!(end, SessionEnd::GoalFound);
    assert_eq!(render_fog(&agent_grid), render_fog(&human_grid));
}

#[test]
fn render_tracks_agent_progress() {
    let mut grid = parse_maze(CORRIDOR_3X3).unwrap();
    assert_eq!(render_fog(&grid), "???\n???\n???\n");

    let run = FrontierAgent::new(FrontierOrder::Fifo).run(&mut grid);
    assert!(matches!(run.outcome, Outcome::GoalFound { .. }));
    // Only the corridor was revealed; the border walls stay fogged.
    assert_eq!(render_fog(&grid), "?o?\n?.?\n?*?\n");
    assert_eq!(render_full(&grid), "#o#\n#.#\n#*#\n");
}

#[test]
fn maze_files_load_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("corridor.maze");
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(CORRIDOR_3X3.as_bytes()).unwrap();
    drop(file);

    let mut grid = load_maze(&path).unwrap();
    assert_eq!(grid.start(), GridCoord::new(0, 1));
    let run = FrontierAgent::new(FrontierOrder::Lifo).run(&mut grid);
    assert!(matches!(run.outcome, Outcome::GoalFound { .. }));
}

#[test]
fn missing_maze_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_maze(dir.path().join("nope.maze")).unwrap_err();
    assert!(matches!(err, MazeError::Io(_)));
}

#[test]
fn malformed_maze_file_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.maze");
    std::fs::write(&path, "3 3\n#o#\n#.#\n").unwrap();
    let err = load_maze(&path).unwrap_err();
    assert!(matches!(err, MazeError::MalformedMaze { .. }));
}

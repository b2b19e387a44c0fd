//! Vyuha command-line entry point.
//!
//! Loads a maze file and hands it to one of the three drivers: the
//! interactive turn loop, the breadth-first queue agent, or the
//! depth-first stack agent.
//!
//! Exit codes: 0 when the goal is revealed, 1 on fatal errors (bad
//! maze file, I/O), 2 when a run ends without reaching the goal.
//!
//! Logging is controlled through `RUST_LOG`, e.g.:
//!   RUST_LOG=vyuha=debug vyuha maps/rooms.maze --mode queue

use clap::{Parser, ValueEnum};
use log::error;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use vyuha::explore::{AgentConfig, FrontierAgent, FrontierOrder, Outcome};
use vyuha::io::load_maze;
use vyuha::render::{render_fog, render_full};
use vyuha::session::{run_interactive, SessionEnd};

/// Fog-of-war maze exploration.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Maze file to load
    maze: PathBuf,

    /// Who drives the exploration
    #[arg(short, long, value_enum, default_value_t = Mode::Human)]
    mode: Mode,

    /// Redraw the fog view after every agent reveal
    #[arg(long)]
    watch: bool,

    /// Cut an agent run off after this many frontier pops
    #[arg(long)]
    step_limit: Option<usize>,

    /// Show the full maze up front (fog disabled)
    #[arg(long)]
    no_fog: bool,
}

/// Exploration driver.
#[derive(ValueEnum, Clone, Copy, Debug)]
enum Mode {
    /// Interactive: you pick the coordinates
    Human,
    /// Breadth-first agent (FIFO frontier)
    Queue,
    /// Depth-first agent (LIFO frontier)
    Stack,
}

impl Mode {
    fn frontier_order(self) -> Option<FrontierOrder> {
        match self {
            Mode::Human => None,
            Mode::Queue => Some(FrontierOrder::Fifo),
            Mode::Stack => Some(FrontierOrder::Lifo),
        }
    }
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    match run(&args) {
        Ok(code) => code,
        Err(err) => {
            error!("{}", err);
            eprintln!("Error: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> vyuha::Result<ExitCode> {
    let mut grid = load_maze(&args.maze)?;

    if args.no_fog {
        println!("{}", render_full(&grid));
    }

    match args.mode.frontier_order() {
        None => {
            let stdin = io::stdin();
            let end = run_interactive(&mut grid, stdin.lock(), &mut io::stdout())?;
            Ok(match end {
                SessionEnd::GoalFound => ExitCode::SUCCESS,
                SessionEnd::InputClosed => {
                    println!("Input closed before the finish was found.");
                    ExitCode::from(2)
                }
            })
        }
        Some(order) => Ok(run_agent(&mut grid, order, args)),
    }
}

fn run_agent(grid: &mut vyuha::MazeGrid, order: FrontierOrder, args: &Args) -> ExitCode {
    println!("{}", render_fog(grid));
    println!("Starting in {}, {}", grid.start().row, grid.start().col);

    let agent = FrontierAgent::with_config(
        order,
        AgentConfig {
            step_limit: args.step_limit,
        },
    );

    let watch = args.watch;
    let run = agent.run_with(grid, |g, coord, kind| {
        if watch {
            println!("Found a {} in {}, {}", kind.as_char(), coord.row, coord.col);
            println!("{}", render_fog(g));
        }
    });

    println!(
        "Revealed {} cells in {} steps.",
        run.reveals.len(),
        run.steps
    );
    match run.outcome {
        Outcome::GoalFound { at } => {
            println!("I found the finish in {}, {}!", at.row, at.col);
            println!("{}", render_full(grid));
            ExitCode::SUCCESS
        }
        Outcome::Exhausted => {
            println!("The frontier emptied before the finish was found.");
            println!("{}", render_fog(grid));
            ExitCode::from(2)
        }
        Outcome::StepLimitReached => {
            println!("Stopped at the step limit before the finish was found.");
            println!("{}", render_fog(grid));
            ExitCode::from(2)
        }
    }
}

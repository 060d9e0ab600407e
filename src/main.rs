//! cost_grid_path - shortest weighted path on a cost grid read from stdin.
//!
//! Input: `<length> <width>`, then `<length>` rows of `<width>` costs in 0..=9 (0 is a wall),
//! then `<start row> <start col> <finish row> <finish col>`. The path is printed as one
//! `row col` line per cell followed by a single `.` line.

use clap::{Parser, ValueEnum};
use cost_grid_pathfinding::solver::{
    astar::AstarSolver, dijkstra::DijkstraSolver, rescan::RescanSolver, GridSolver,
};
use std::io;
use std::process::ExitCode;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum SolverKind {
    /// Heap-based A* with the Manhattan heuristic
    Astar,
    /// Heap-based search without a heuristic
    Dijkstra,
    /// Step-wise search rescanning the open set, stops as soon as the finish is adjacent
    Rescan,
}

/// Shortest weighted path on a 4-connected cost grid
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Search strategy
    #[arg(short, long, value_enum, default_value_t = SolverKind::Astar)]
    solver: SolverKind,

    /// Multiplier for the A* heuristic; values above 1.0 may return suboptimal paths
    #[arg(long, default_value_t = 1.0)]
    heuristic_factor: f32,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();
    log::debug!("{:?}", args);

    let solver: Box<dyn GridSolver> = match args.solver {
        SolverKind::Astar => Box::new(AstarSolver::with_heuristic_factor(args.heuristic_factor)),
        SolverKind::Dijkstra => Box::new(DijkstraSolver),
        SolverKind::Rescan => Box::new(RescanSolver),
    };

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    match cost_grid_pathfinding::run(stdin.lock(), &mut stdout, solver.as_ref()) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}

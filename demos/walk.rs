//! Generate a maze and watch the searches walk it.
//!
//! Run: cargo run --bin walk -- --side 12 --seed 7 --algorithm all
//! Set RUST_LOG=debug to log every step.

use clap::{Parser, ValueEnum};
use mazewalk_demos::{free_blocks, render, walk};
use mazewalk_gen::{MazeConfig, generate};
use mazewalk_paths::{Algorithm, Graph};

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Choice {
    Bfs,
    Dfs,
    Dijkstra,
    Astar,
    All,
}

impl Choice {
    fn algorithms(self) -> &'static [Algorithm] {
        match self {
            Choice::Bfs => &[Algorithm::BreadthFirst],
            Choice::Dfs => &[Algorithm::DepthFirst],
            Choice::Dijkstra => &[Algorithm::Dijkstra],
            Choice::Astar => &[Algorithm::AStar],
            Choice::All => &Algorithm::ALL,
        }
    }
}

#[derive(Parser, Debug)]
#[command(version, about = "Step-by-step graph searches over a generated maze")]
struct Args {
    /// Rooms per maze side
    #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(u16).range(1..))]
    side: u16,

    /// Seed for the maze generator
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Open extra walls so that several routes exist
    #[arg(long)]
    multiple_paths: bool,

    /// Search to run
    #[arg(long, value_enum, default_value_t = Choice::All)]
    algorithm: Choice,

    /// Stop each search after this many steps
    #[arg(long)]
    max_steps: Option<usize>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let config = MazeConfig {
        side: args.side.into(),
        seed: args.seed,
        multiple_paths: args.multiple_paths,
    };
    let maze = generate(&config);
    let graph = Graph::from(&maze);
    let (start, end) = (config.first_room(), config.last_room());
    log::info!(
        "maze {}x{} with {} free blocks, seed {}, walking {start} -> {end}",
        maze.width(),
        maze.height(),
        free_blocks(&maze),
        config.seed
    );

    let mut summaries = Vec::new();
    for &algorithm in args.algorithm.algorithms() {
        let (last, summary) = walk(algorithm, &graph, &maze, start, end, args.max_steps);
        println!("{algorithm}:");
        println!("{}", render(&maze, &last, start, end));
        println!();
        summaries.push(summary);
    }
    for summary in &summaries {
        println!("{summary}");
    }
}

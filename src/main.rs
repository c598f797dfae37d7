use std::fs;
use std::process;

use clap::Parser;

use sokoban_engine::executor::replay;
use sokoban_engine::state::State;
use sokoban_engine::Solve;

#[derive(Parser)]
#[command(name = "sokoban-engine")]
#[command(about = "Sokoban solver - breadth-first search over immutable board states")]
struct Args {
    /// Path to the board file
    #[arg(value_name = "FILE")]
    board_file: String,

    /// Overall depth bound - solves with iterative deepening instead of
    /// unbounded BFS
    #[arg(short = 'd', long)]
    max_depth: Option<usize>,

    /// Print search statistics
    #[arg(short, long)]
    stats: bool,

    /// Print the replayed state history
    #[arg(short = 'H', long)]
    history: bool,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let text = fs::read_to_string(&args.board_file).unwrap_or_else(|err| {
        eprintln!("Can't read file {}: {}", args.board_file, err);
        process::exit(1);
    });

    let initial: State = text.parse().unwrap_or_else(|err| {
        eprintln!("Failed to parse {}: {}", args.board_file, err);
        process::exit(1);
    });

    println!("Solving {}...", args.board_file);
    let solution = match initial.solve(args.max_depth) {
        Ok(solution) => solution,
        Err(err) => {
            // a definitive answer, not an error
            println!("{}", err);
            return;
        }
    };

    println!("Found solution: {}", solution.actions);
    println!("Moves: {}", solution.actions.move_cnt());
    println!("Pushes: {}", solution.actions.push_cnt());
    if args.stats {
        print!("{}", solution.stats);
    }
    if args.history {
        let history = replay(&initial, &solution.actions).unwrap_or_else(|err| {
            eprintln!("Replaying the solution failed: {}", err);
            process::exit(1);
        });
        for state in &history {
            println!("{}", state);
        }
    }
}

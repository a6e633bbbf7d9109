use clap::Parser;
use foreaft_solver::layouts;
use foreaft_solver::solver::{reconstruct_path, solve, SolveError, Solution};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use std::process;
use std::time::Duration;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Board size of the canonical instance (5, 7, 9 or 11)
    #[clap(short, long)]
    size: usize,

    /// Optional wall-clock deadline for the search, in seconds
    #[clap(short, long)]
    timeout_secs: Option<u64>,

    /// Report file path (defaults to AStar<size>.out)
    #[clap(short, long)]
    output: Option<PathBuf>,
}

fn write_report(
    path: &PathBuf,
    instance: &layouts::PuzzleInstance,
    solution: &Solution,
) -> std::io::Result<()> {
    let trail = reconstruct_path(&instance.initial, &solution.moves);

    let file = File::create(path)?;
    let mut out = BufWriter::new(file);

    writeln!(out, "Total number of states: {}\n", trail.len())?;
    for (i, board) in trail.iter().enumerate() {
        writeln!(out, "State {}:", i)?;
        writeln!(out, "{}", board)?;
    }

    writeln!(out, "Final arrangement of the board:")?;
    writeln!(out, "{}", solution.final_board)?;

    writeln!(out, "Solution found in {} steps:", solution.moves.len())?;
    for mv in &solution.moves {
        writeln!(out, "Move from {}", mv)?;
    }
    out.flush()
}

fn main() {
    let args = Args::parse();

    let instance = match layouts::instance(args.size) {
        Ok(instance) => instance,
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    };
    let deadline = args.timeout_secs.map(Duration::from_secs);
    let output = args
        .output
        .unwrap_or_else(|| PathBuf::from(format!("AStar{}.out", args.size)));

    println!("Initial board state:\n{}", instance.initial);
    println!("Searching for a minimal solution...\n");

    match solve(
        &instance.initial,
        &instance.goal,
        instance.empty_anchor,
        deadline,
    ) {
        Ok(solution) => {
            println!(
                "Solution found in {} moves ({} states expanded).",
                solution.moves.len(),
                solution.expanded
            );
            if let Err(e) = write_report(&output, &instance, &solution) {
                eprintln!("Failed to write report to {}: {}", output.display(), e);
                process::exit(1);
            }
            println!("Report written to {}", output.display());
        }
        Err(SolveError::Exhausted { expanded }) => {
            println!(
                "No solution exists for this instance ({} states expanded).",
                expanded
            );
            process::exit(2);
        }
        Err(SolveError::DeadlineExceeded) => {
            println!("Search aborted: deadline exceeded before a solution was found.");
            process::exit(3);
        }
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    }
}

//! labyr — report whether the end of an ASCII maze is reachable from its start.
//!
//! Exit status: 0 when reachable, 1 when not, 2 when the maze cannot be read.

use std::error::Error;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use labyr_solve::{GridMaze, GridSolver, SolveStats};

#[derive(Debug, Parser)]
#[command(name = "labyr", version, about)]
struct Args {
    /// Maze file (`#` wall, `.` floor, `S` start, `E` end), or `-` for stdin.
    maze: PathBuf,

    /// Also print the solver's counters.
    #[arg(long)]
    stats: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();
    match run(&args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            eprintln!("labyr: {e}");
            ExitCode::from(2)
        }
    }
}

fn run(args: &Args) -> Result<bool, Box<dyn Error>> {
    let text = read_maze(&args.maze)?;
    let mut maze: GridMaze = text.parse()?;
    log::info!(
        "loaded {}x{} maze from {}",
        maze.width(),
        maze.height(),
        args.maze.display()
    );

    let mut solver = GridSolver::new();
    let found = solver.solve(&mut maze);
    print!("{}", report(found, args.stats.then(|| solver.stats())));
    Ok(found)
}

fn read_maze(path: &Path) -> io::Result<String> {
    if path == Path::new("-") {
        let mut text = String::new();
        io::stdin().read_to_string(&mut text)?;
        Ok(text)
    } else {
        fs::read_to_string(path)
    }
}

fn report(found: bool, stats: Option<SolveStats>) -> String {
    let mut out = String::from(if found { "reachable\n" } else { "unreachable\n" });
    if let Some(s) = stats {
        out.push_str(&format!(
            "popped {}\nexpanded {}\nenqueued {}\npeak frontier {}\n",
            s.popped, s.expanded, s.enqueued, s.peak_frontier
        ));
    }
    out
}

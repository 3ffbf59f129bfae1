use labyr_core::Point;
use labyr_deque::CircularDeque;

use crate::grid::GridMaze;
use crate::traits::Maze;
use crate::{MazeError, SolveError};

/// Axis neighbours in expansion order: up, down, left, right.
const DIRS: [Point; 4] = [
    Point::new(0, -1),
    Point::new(0, 1),
    Point::new(-1, 0),
    Point::new(1, 0),
];

/// Counters describing the most recent [`GridSolver::solve`] run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolveStats {
    /// Cells taken off the front of the frontier.
    pub popped: usize,
    /// Cells marked visited and expanded.
    pub expanded: usize,
    /// Insertions into the frontier, including the start cell.
    pub enqueued: usize,
    /// Largest frontier length observed.
    pub peak_frontier: usize,
}

/// Reachability solver driven by a greedy-biased double-ended frontier.
///
/// Each expanded cell pushes its open neighbours to the *front* of the
/// frontier when they are strictly closer (Euclidean) to the end than the
/// cell itself, and to the *back* otherwise. The result is a depth-first
/// dash toward the goal that falls back to breadth-first sweeping when
/// blocked. It answers reachability only: no path, no shortest-path
/// guarantee.
///
/// A cell may sit in the frontier several times; it is expanded only on
/// the first pop that finds it unvisited.
///
/// The frontier is owned by the solver and reused across runs.
#[derive(Debug, Default)]
pub struct GridSolver {
    frontier: CircularDeque<Point>,
    stats: SolveStats,
}

impl GridSolver {
    /// Create a solver with an empty frontier.
    pub fn new() -> Self {
        Self::default()
    }

    /// Report whether `maze.end()` is reachable from `maze.start()`
    /// through axis-adjacent, in-bounds, non-wall cells.
    ///
    /// Every expanded cell is marked visited on `maze`; call the maze's
    /// own reset before solving it again.
    pub fn solve<M: Maze + ?Sized>(&mut self, maze: &mut M) -> bool {
        self.frontier.clear();
        self.stats = SolveStats::default();

        let end = maze.end();
        self.frontier.add_first(maze.start());
        self.stats.enqueued = 1;
        self.stats.peak_frontier = 1;

        let found = 'search: loop {
            let Ok(current) = self.frontier.remove_first() else {
                break 'search false;
            };
            self.stats.popped += 1;

            if current == end {
                break 'search true;
            }
            if !maze.in_bounds(current) || maze.is_visited(current) || maze.is_wall(current) {
                continue;
            }

            maze.set_visited(current);
            self.stats.expanded += 1;

            let here = current.distance(end);
            for d in DIRS {
                let Some(n) = current.checked_shift(d.x, d.y) else {
                    continue;
                };
                if !maze.in_bounds(n) || maze.is_wall(n) {
                    continue;
                }
                if n.distance(end) < here {
                    self.frontier.add_first(n);
                } else {
                    self.frontier.add_last(n);
                }
                self.stats.enqueued += 1;
            }
            self.stats.peak_frontier = self.stats.peak_frontier.max(self.frontier.len());
        };

        log::debug!(
            "solve {} -> {}: {} (popped {}, expanded {}, enqueued {}, peak frontier {})",
            maze.start(),
            end,
            if found { "reachable" } else { "unreachable" },
            self.stats.popped,
            self.stats.expanded,
            self.stats.enqueued,
            self.stats.peak_frontier,
        );
        found
    }

    /// Like [`solve`](Self::solve), but rejects a missing maze with
    /// [`SolveError::InvalidArgument`].
    pub fn try_solve<M: Maze + ?Sized>(&mut self, maze: Option<&mut M>) -> Result<bool, SolveError> {
        let maze = maze.ok_or(SolveError::InvalidArgument)?;
        Ok(self.solve(maze))
    }

    /// Parse an ASCII maze (see [`GridMaze::parse`]) and solve it.
    pub fn solve_str(&mut self, text: &str) -> Result<bool, MazeError> {
        let mut maze = GridMaze::parse(text)?;
        Ok(self.solve(&mut maze))
    }

    /// Counters from the most recent run.
    pub fn stats(&self) -> SolveStats {
        self.stats
    }
}

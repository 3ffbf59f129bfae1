//! Grid-maze reachability on top of [`labyr_deque::CircularDeque`].
//!
//! [`GridSolver`] answers one question: can the end of a [`Maze`] be reached
//! from its start by moving between axis-adjacent open cells? Its frontier
//! is a double-ended queue, and each neighbour goes to the front or the back
//! depending on whether it gets closer to the goal.
//!
//! [`GridMaze`] is a ready-made maze, buildable in code or from ASCII art:
//!
//! ```
//! use labyr_solve::{GridMaze, GridSolver};
//!
//! let mut maze: GridMaze = "S.#\n..#\n#.E".parse().unwrap();
//! assert!(GridSolver::new().solve(&mut maze));
//! ```

mod error;
mod grid;
mod solver;
mod traits;

pub use error::{MazeError, SolveError};
pub use grid::GridMaze;
pub use labyr_core::Point;
pub use solver::{GridSolver, SolveStats};
pub use traits::Maze;

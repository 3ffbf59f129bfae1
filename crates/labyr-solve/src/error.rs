use labyr_core::Point;
use std::fmt;

/// Errors returned by [`GridSolver::try_solve`](crate::GridSolver::try_solve).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveError {
    /// No maze was supplied.
    InvalidArgument,
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument => write!(f, "solve: no maze given"),
        }
    }
}

impl std::error::Error for SolveError {}

/// Errors that can occur when parsing an ASCII maze.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MazeError {
    /// The text contains no non-blank line.
    Empty,
    /// A row is wider or narrower than the first row.
    InconsistentSize {
        line: usize,
        expected: usize,
        found: usize,
    },
    /// A character outside `#`, `.`, space, `S`, `E` was found.
    InvalidRune { ch: char, pos: Point },
    /// `S` or `E` appears more than once.
    DuplicateMarker { ch: char, pos: Point },
    /// No `S` cell.
    MissingStart,
    /// No `E` cell.
    MissingEnd,
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "maze: no rows"),
            Self::InconsistentSize {
                line,
                expected,
                found,
            } => write!(
                f,
                "maze: row {line} has width {found}, expected {expected}"
            ),
            Self::InvalidRune { ch, pos } => {
                write!(f, "maze contains invalid rune \u{201c}{ch}\u{201d} at {pos}")
            }
            Self::DuplicateMarker { ch, pos } => {
                write!(f, "maze: second \u{201c}{ch}\u{201d} marker at {pos}")
            }
            Self::MissingStart => write!(f, "maze: no start marker \u{201c}S\u{201d}"),
            Self::MissingEnd => write!(f, "maze: no end marker \u{201c}E\u{201d}"),
        }
    }
}

impl std::error::Error for MazeError {}

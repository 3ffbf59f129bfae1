//! A dense rectangular maze with per-cell wall and visited flags.
//!
//! [`GridMaze`] is the stock [`Maze`] implementation. It can be built
//! programmatically or parsed from ASCII art:
//!
//! ```text
//! #####
//! #S..#
//! #.#E#
//! #####
//! ```
//!
//! `#` is a wall, `.` or a space is open floor, `S` marks the start and
//! `E` the end (both open).

use std::str::FromStr;

use labyr_core::{Point, Range};

use crate::MazeError;
use crate::traits::Maze;

const WALL: char = '#';
const FLOOR: char = '.';
const BLANK: char = ' ';
const START: char = 'S';
const END: char = 'E';

/// A rectangular maze anchored at the origin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridMaze {
    bounds: Range,
    walls: Vec<bool>,
    visited: Vec<bool>,
    start: Point,
    end: Point,
}

impl GridMaze {
    /// Create an open maze (no walls, nothing visited) of the given size.
    ///
    /// Negative dimensions are treated as zero. `start` and `end` are not
    /// required to lie inside the maze.
    pub fn new(width: i32, height: i32, start: Point, end: Point) -> Self {
        let bounds = Range::new(0, 0, width.max(0), height.max(0));
        let len = bounds.len();
        Self {
            bounds,
            walls: vec![false; len],
            visited: vec![false; len],
            start,
            end,
        }
    }

    /// Parse an ASCII maze. See the module docs for the format.
    ///
    /// Blank lines before the first row and after the last row are ignored.
    /// Every row must have the same width.
    pub fn parse(s: &str) -> Result<Self, MazeError> {
        let lines: Vec<&str> = s.lines().collect();
        let Some(first) = lines.iter().position(|l| !l.is_empty()) else {
            return Err(MazeError::Empty);
        };
        let last = lines.iter().rposition(|l| !l.is_empty()).unwrap_or(first);
        let rows = &lines[first..=last];

        let width = rows[0].chars().count();
        for (y, row) in rows.iter().enumerate() {
            let found = row.chars().count();
            if found != width {
                return Err(MazeError::InconsistentSize {
                    line: y,
                    expected: width,
                    found,
                });
            }
        }

        let mut maze = Self::new(width as i32, rows.len() as i32, Point::ZERO, Point::ZERO);
        let mut start = None;
        let mut end = None;

        for (y, row) in rows.iter().enumerate() {
            for (x, ch) in row.chars().enumerate() {
                let pos = Point::new(x as i32, y as i32);
                match ch {
                    WALL => maze.set_wall(pos, true),
                    FLOOR | BLANK => {}
                    START | END => {
                        let slot = if ch == START { &mut start } else { &mut end };
                        if slot.is_some() {
                            return Err(MazeError::DuplicateMarker { ch, pos });
                        }
                        *slot = Some(pos);
                    }
                    _ => return Err(MazeError::InvalidRune { ch, pos }),
                }
            }
        }

        maze.start = start.ok_or(MazeError::MissingStart)?;
        maze.end = end.ok_or(MazeError::MissingEnd)?;
        Ok(maze)
    }

    /// The rectangle covered by the maze.
    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    /// Width of the maze.
    #[inline]
    pub fn width(&self) -> i32 {
        self.bounds.width()
    }

    /// Height of the maze.
    #[inline]
    pub fn height(&self) -> i32 {
        self.bounds.height()
    }

    /// Set or clear a wall. Does nothing if `p` is out of bounds.
    pub fn set_wall(&mut self, p: Point, wall: bool) {
        if let Some(i) = self.idx(p) {
            self.walls[i] = wall;
        }
    }

    /// Forget every visited mark, so the maze can be solved again.
    pub fn reset_visited(&mut self) {
        self.visited.fill(false);
    }

    /// Number of cells currently marked visited.
    pub fn visited_count(&self) -> usize {
        self.visited.iter().filter(|&&v| v).count()
    }

    #[inline]
    fn idx(&self, p: Point) -> Option<usize> {
        if !self.bounds.contains(p) {
            return None;
        }
        let x = (p.x - self.bounds.min.x) as usize;
        let y = (p.y - self.bounds.min.y) as usize;
        Some(y * self.bounds.width() as usize + x)
    }
}

impl FromStr for GridMaze {
    type Err = MazeError;

    fn from_str(s: &str) -> Result<Self, MazeError> {
        Self::parse(s)
    }
}

impl Maze for GridMaze {
    fn start(&self) -> Point {
        self.start
    }

    fn end(&self) -> Point {
        self.end
    }

    fn in_bounds(&self, p: Point) -> bool {
        self.bounds.contains(p)
    }

    fn is_wall(&self, p: Point) -> bool {
        self.idx(p).is_some_and(|i| self.walls[i])
    }

    fn is_visited(&self, p: Point) -> bool {
        self.idx(p).is_some_and(|i| self.visited[i])
    }

    fn set_visited(&mut self, p: Point) {
        if let Some(i) = self.idx(p) {
            self.visited[i] = true;
        }
    }
}

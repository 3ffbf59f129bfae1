use labyr_core::Point;

/// The maze a [`GridSolver`](crate::GridSolver) explores.
///
/// Every query except [`set_visited`](Maze::set_visited) must be pure.
/// Visited marks persist for the lifetime of the maze; the solver never
/// clears them.
pub trait Maze {
    /// Cell the search starts from.
    fn start(&self) -> Point;

    /// Cell the search tries to reach.
    fn end(&self) -> Point;

    /// Whether `p` is inside the maze.
    fn in_bounds(&self, p: Point) -> bool;

    /// Whether `p` is a wall. Only asked for in-bounds points.
    fn is_wall(&self, p: Point) -> bool;

    /// Whether `p` has been marked visited.
    fn is_visited(&self, p: Point) -> bool;

    /// Mark `p` visited.
    fn set_visited(&mut self, p: Point);
}

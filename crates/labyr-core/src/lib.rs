//! **labyr-core** — geometry primitives shared across the *labyr* crates.
//!
//! [`Point`] is a 2D integer coordinate with a Euclidean distance metric;
//! [`Range`] is a half-open rectangle used for maze bounds.

pub mod geom;

pub use geom::{Point, Range, RangeIter};

//! Library error types.

use thiserror::Error;

use crate::index::Point;

/// Errors produced by canvas construction and single-point access.
///
/// Shape and text operations never return these: off-canvas cells are
/// clipped or skipped locally instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// Canvas dimensions must both be positive.
    #[error("invalid canvas size {width}x{height}")]
    InvalidSize { width: i32, height: i32 },

    /// A point write landed outside the canvas extent.
    #[error("point {0} is outside the canvas")]
    OutOfBounds(Point),
}

//! Character-grid drawing engine for inline console diagrams.
//!
//! This crate renders simple vector-like diagrams onto a fixed-size grid
//! of character cells: lines that automatically grow junction glyphs
//! where they cross or meet, rectangles with merged corners, arc and
//! circle approximation, and word-wrapped, justified text blocks. The
//! result serializes to a printable string (`Canvas` implements
//! `Display`) so a diagram can ride along in a single log line emitted by
//! whatever console tooling the caller already has.
//!
//! Coordinates are integer cell indices; there is no float coordinate
//! system, anti-aliasing, or incremental redraw. Off-canvas geometry is
//! clipped per cell, so composing shapes near the edges never fails.
//!
//! ```
//! use glyphgrid::{Canvas, Point};
//!
//! let mut canvas = Canvas::new(9, 5)?;
//! canvas.line(Point::new(0, 2), Point::new(8, 2));
//! canvas.line(Point::new(4, 0), Point::new(4, 4));
//! // The strokes merged into a junction where they cross.
//! assert_eq!(canvas.get(Point::new(4, 2)), Some('+'));
//! # Ok::<(), glyphgrid::Error>(())
//! ```

#![deny(unsafe_code)]

pub mod canvas;
pub mod charset;
pub mod error;
pub mod index;

pub use canvas::text::wrap;
pub use canvas::{Canvas, HAlign, Row, VAlign};
pub use charset::{Charset, Role, RoleTable, Translation};
pub use error::Error;
pub use index::Point;

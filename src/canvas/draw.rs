//! Shape rasterization: lines with junction merging, rectangles, fills,
//! and arcs.
//!
//! Axis-aligned strokes pass every cell through
//! [`RoleTable::substitute`], so crossing and touching lines grow the
//! correct junction and corner glyphs regardless of draw order. Diagonal
//! strokes, fills, and arcs overwrite plainly. Off-canvas cells are
//! silently skipped; shape operations never fail.

use std::f64::consts::TAU;

use crate::charset::{Role, RoleTable, Translation};
use crate::index::Point;

use super::Canvas;

// Translation tables for axis-aligned stroke cells, one per stroke
// position. Each entry is the replacement role when that slot's glyph
// already occupies the cell; -1 keeps the requested stroke glyph.
const HORIZONTAL_FIRST: Translation =
    Translation::new([0, 3, -1, 3, 4, 5, 6, 6, -1, -1, 10, 4, 12, 5]);
const HORIZONTAL_LAST: Translation =
    Translation::new([0, 7, -1, 6, 4, 5, 6, 7, -1, -1, 4, 11, 5, 13]);
const HORIZONTAL_MID: Translation =
    Translation::new([0, 6, -1, 6, 4, 5, 6, 6, -1, -1, 4, 4, 5, 5]);

const VERTICAL_FIRST: Translation =
    Translation::new([4, 1, -1, 3, 4, 6, 6, 7, -1, -1, 10, 11, 3, 7]);
const VERTICAL_LAST: Translation =
    Translation::new([5, 1, -1, 3, 6, 5, 6, 7, -1, -1, 3, 7, 12, 13]);
const VERTICAL_MID: Translation =
    Translation::new([6, 1, -1, 3, 6, 6, 6, 7, -1, -1, 3, 7, 3, 7]);

// Rectangle corner resolution, applied against the cell content captured
// before any of the four edges was drawn.
const CORNER_TOP_LEFT: Translation =
    Translation::new([4, 3, -1, 3, 4, 6, 6, 6, -1, -1, 10, 4, 3, 6]);
const CORNER_TOP_RIGHT: Translation =
    Translation::new([4, 7, -1, 6, 4, 6, 6, 7, -1, -1, 4, 11, 6, 7]);
const CORNER_BOTTOM_LEFT: Translation =
    Translation::new([5, 3, -1, 3, 6, 5, 6, 6, -1, -1, 3, 6, 12, 5]);
const CORNER_BOTTOM_RIGHT: Translation =
    Translation::new([5, 7, -1, 6, 6, 5, 6, 7, -1, -1, 6, 7, 5, 13]);

impl Canvas {
    /// Draw a line using the active charset's role table.
    pub fn line(&mut self, a: Point, b: Point) {
        let roles = *self.charset.roles();
        self.line_with(a, b, &roles);
    }

    /// Draw a line with an explicit role table.
    ///
    /// Horizontal and vertical strokes merge with existing content via
    /// the stroke-position translation tables; their endpoints are
    /// clamped to the canvas extent. Any other slope rasterizes with an
    /// integer error-term walk that plots the diagonal glyph without
    /// merging.
    pub fn line_with(&mut self, a: Point, b: Point, roles: &RoleTable) {
        let step_x = if a.x < b.x { 1 } else { -1 };
        let step_y = if a.y < b.y { 1 } else { -1 };

        if a.y == b.y {
            let x1 = a.x.clamp(0, self.width as i32);
            let x2 = b.x.clamp(0, self.width as i32);
            let glyph = roles.glyph(Role::Horizontal);
            let mut x = x1;
            loop {
                let map = if x == x1 {
                    &HORIZONTAL_FIRST
                } else if x == x2 {
                    &HORIZONTAL_LAST
                } else {
                    &HORIZONTAL_MID
                };
                let p = Point::new(x, a.y);
                let merged = roles.substitute(glyph, self.get(p), map);
                let _ = self.set(p, merged);
                if x == x2 {
                    break;
                }
                x += step_x;
            }
        } else if a.x == b.x {
            let y1 = a.y.clamp(0, self.height as i32);
            let y2 = b.y.clamp(0, self.height as i32);
            let glyph = roles.glyph(Role::Vertical);
            let mut y = y1;
            loop {
                let map = if y == y1 {
                    &VERTICAL_FIRST
                } else if y == y2 {
                    &VERTICAL_LAST
                } else {
                    &VERTICAL_MID
                };
                let p = Point::new(a.x, y);
                let merged = roles.substitute(glyph, self.get(p), map);
                let _ = self.set(p, merged);
                if y == y2 {
                    break;
                }
                y += step_y;
            }
        } else {
            let glyph = roles.glyph(Role::Diagonal);
            let dx = (b.x - a.x).abs();
            let dy = (b.y - a.y).abs();
            let (mut x, mut y) = (a.x, a.y);
            let mut err_x = 0;
            let mut err_y = 0;
            loop {
                let done = x == b.x && y == b.y;
                let _ = self.set(Point::new(x, y), glyph);
                if done {
                    break;
                }
                err_x += dx;
                if x != b.x && err_x > dy {
                    x += step_x;
                    err_x -= dy;
                }
                err_y += dy;
                if y != b.y && err_y > dx {
                    y += step_y;
                    err_y -= dx;
                }
            }
        }
    }

    /// Draw a rectangle outline using the active charset's role table.
    pub fn rect(&mut self, a: Point, b: Point) {
        let roles = *self.charset.roles();
        self.rect_with(a, b, &roles);
    }

    /// Draw a rectangle outline with an explicit role table.
    ///
    /// The four corner cells are re-resolved against a snapshot captured
    /// before any edge is drawn, so a rectangle sharing a corner cell with
    /// prior content merges into the right junction instead of one shape
    /// overwriting the other's corner.
    pub fn rect_with(&mut self, a: Point, b: Point, roles: &RoleTable) {
        let corners = [
            (Point::new(a.x, a.y), Role::CornerTopLeft, &CORNER_TOP_LEFT),
            (Point::new(b.x, a.y), Role::CornerTopRight, &CORNER_TOP_RIGHT),
            (Point::new(a.x, b.y), Role::CornerBottomLeft, &CORNER_BOTTOM_LEFT),
            (Point::new(b.x, b.y), Role::CornerBottomRight, &CORNER_BOTTOM_RIGHT),
        ];
        let before = corners.map(|(p, _, _)| self.get(p));

        self.line_with(Point::new(a.x, a.y), Point::new(b.x, a.y), roles);
        self.line_with(Point::new(b.x, a.y), Point::new(b.x, b.y), roles);
        self.line_with(Point::new(b.x, b.y), Point::new(a.x, b.y), roles);
        self.line_with(Point::new(a.x, b.y), Point::new(a.x, a.y), roles);

        for ((p, role, map), existing) in corners.iter().zip(before) {
            let merged = roles.substitute(roles.glyph(*role), existing, map);
            let _ = self.set(*p, merged);
        }
    }

    /// Fill a rectangle with the charset's fill glyph.
    pub fn fill_rect(&mut self, a: Point, b: Point) {
        self.fill_rect_with(a, b, self.charset.fill());
    }

    /// Fill the half-open cell range `[a.x, b.x) x [a.y, b.y)` with `ch`.
    ///
    /// Coordinates are normalized first. Writes are unconditional (no
    /// junction merging) and clipped to the canvas.
    pub fn fill_rect_with(&mut self, a: Point, b: Point, ch: char) {
        let (x1, x2) = if a.x <= b.x { (a.x, b.x) } else { (b.x, a.x) };
        let (y1, y2) = if a.y <= b.y { (a.y, b.y) } else { (b.y, a.y) };
        for y in y1.max(0)..y2.min(self.height as i32) {
            for x in x1.max(0)..x2.min(self.width as i32) {
                let _ = self.set(Point::new(x, y), ch);
            }
        }
    }

    /// Draw an arc with the charset's plot glyph and the default 2:1
    /// aspect ratio.
    pub fn arc(&mut self, center: Point, radius: i32, start_deg: f64, end_deg: f64) {
        self.arc_with(center, radius, start_deg, end_deg, self.charset.plot(), 2.0);
    }

    /// Draw an arc of `radius` cells around `center`, sweeping from
    /// `start_deg` to `end_deg`.
    ///
    /// The sweep is normalized so the start angle is the smaller one, and
    /// sampled at a point count proportional to `radius` times the angular
    /// span. Each sample plots
    /// `(cx + round(r * cos(t) * aspect), cy + round(r * sin(t)))`
    /// unconditionally, clipped per cell. `aspect` stretches the x axis;
    /// 2.0 compensates for typical cell geometry, 1.0 gives a precise
    /// circle.
    pub fn arc_with(
        &mut self,
        center: Point,
        radius: i32,
        start_deg: f64,
        end_deg: f64,
        ch: char,
        aspect: f64,
    ) {
        let mut start = start_deg.to_radians();
        let mut end = end_deg.to_radians();
        if end < start {
            std::mem::swap(&mut start, &mut end);
        }
        let span = end - start;
        let samples = (radius as f64 * 8.0 * span / TAU) as i64;
        for i in 0..samples {
            let theta = start + i as f64 * span / samples as f64;
            let x = center.x + (radius as f64 * theta.cos() * aspect).round() as i32;
            let y = center.y + (radius as f64 * theta.sin()).round() as i32;
            let _ = self.set(Point::new(x, y), ch);
        }
    }

    /// Draw a full circle with the charset's plot glyph.
    pub fn circle(&mut self, center: Point, radius: i32) {
        self.arc(center, radius, 0.0, 360.0);
    }

    /// Draw a full circle with an explicit glyph and aspect ratio.
    pub fn circle_with(&mut self, center: Point, radius: i32, ch: char, aspect: f64) {
        self.arc_with(center, radius, 0.0, 360.0, ch, aspect);
    }
}

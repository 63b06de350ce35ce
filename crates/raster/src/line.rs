//! Integer line rasterization (Bresenham error accumulation).

use crate::pixel_buffer::PixelBuffer;
use crate::types::{Point, Rgb};

/// Iterator over the pixels of a discrete segment, both endpoints included.
///
/// Endpoints are visited in canonical order (smaller point first), so the
/// pixel set does not depend on the direction the segment was given in.
#[derive(Debug, Clone)]
pub struct LinePoints {
    cur: Point,
    end: Point,
    dx: i64,
    dy: i64,
    sx: i32,
    sy: i32,
    err: i64,
    done: bool,
}

impl LinePoints {
    pub fn new(p0: Point, p1: Point) -> Self {
        let (start, end) = if p1 < p0 { (p1, p0) } else { (p0, p1) };
        // Deltas span up to 2^32, so the error term is kept in i64.
        let dx = i64::from(end.x.abs_diff(start.x));
        let dy = -i64::from(end.y.abs_diff(start.y));
        Self {
            cur: start,
            end,
            dx,
            dy,
            sx: if start.x < end.x { 1 } else { -1 },
            sy: if start.y < end.y { 1 } else { -1 },
            err: dx + dy,
            done: false,
        }
    }
}

impl Iterator for LinePoints {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        if self.done {
            return None;
        }
        let p = self.cur;
        if p == self.end {
            self.done = true;
            return Some(p);
        }

        let e2 = 2 * self.err;
        if e2 >= self.dy {
            self.err += self.dy;
            self.cur.x += self.sx;
        }
        if e2 <= self.dx {
            self.err += self.dx;
            self.cur.y += self.sy;
        }
        Some(p)
    }
}

/// Pixels of the segment `p0`-`p1`.
pub fn line_points(p0: Point, p1: Point) -> LinePoints {
    LinePoints::new(p0, p1)
}

/// Draw the segment `p0`-`p1` in `color`. Off-canvas pixels are dropped.
pub fn draw_line(buf: &mut PixelBuffer, p0: Point, p1: Point, color: Rgb) {
    for p in line_points(p0, p1) {
        buf.set_pixel(p, color);
    }
}

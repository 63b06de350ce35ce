//! Filled disk rasterization using a midpoint circle sweep.

use crate::pixel_buffer::PixelBuffer;
use crate::types::{Point, Rgb};

/// Draw a filled disk of `radius` around `center`.
///
/// Each step of the octant sweep paints four full-width spans: two rows at
/// `cy +/- y` spanning `[-x, x]`, and two columns at `cx +/- y` spanning
/// `[-x, x]`. A radius of 0 paints the center pixel; a negative radius paints
/// nothing.
pub fn draw_filled_circle(buf: &mut PixelBuffer, center: Point, radius: i32, color: Rgb) {
    if radius < 0 {
        return;
    }
    let (cx, cy) = (center.x, center.y);
    let mut x = radius;
    let mut y = 0;
    let mut err = 1 - x;

    while x >= y {
        for i in -x..=x {
            buf.set_pixel(Point::new(cx + i, cy + y), color);
            buf.set_pixel(Point::new(cx + i, cy - y), color);
            buf.set_pixel(Point::new(cx + y, cy + i), color);
            buf.set_pixel(Point::new(cx - y, cy + i), color);
        }
        y += 1;
        if err < 0 {
            err += 2 * y + 1;
        } else {
            x -= 1;
            err += 2 * (y - x + 1);
        }
    }
}

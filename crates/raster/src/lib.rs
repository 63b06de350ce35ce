//! Rasterization primitives for the grid graph renderer.
//!
//! Everything here draws into a [`PixelBuffer`] and never fails: coordinates
//! outside the raster are silently clipped by [`PixelBuffer::set_pixel`], so
//! the rasterizers are free to compute off-canvas points.
//!
//! # Module Structure
//!
//! - [`pixel_buffer`]: owned 24-bit raster in bitmap (BGR) byte order
//! - [`line`]: Bresenham segments, direction independent
//! - [`circle`]: filled disks via a midpoint sweep
//! - [`glyph`]: 5x5 digit font and labeled vertex markers
//!
//! # Example
//!
//! ```
//! use gridgraph_raster::{draw_labeled_circle, draw_line, PixelBuffer};
//! use gridgraph_types::{Point, Rgb};
//!
//! let mut buf = PixelBuffer::new(64, 32, Rgb::WHITE);
//! draw_labeled_circle(&mut buf, Point::new(16, 16), 5, 0, Rgb::RED, Rgb::BLACK);
//! draw_line(&mut buf, Point::new(16, 16), Point::new(48, 16), Rgb::BLACK);
//!
//! assert_eq!(buf.pixel(Point::new(30, 16)), Some(Rgb::BLACK));
//! ```

pub mod circle;
pub mod glyph;
pub mod line;
pub mod pixel_buffer;

pub use gridgraph_types as types;

pub use circle::draw_filled_circle;
pub use glyph::{
    decimal_digits, draw_digit, draw_labeled_circle, glyph, label_origin, GlyphTemplate,
    DIGIT_GLYPHS,
};
pub use line::{draw_line, line_points, LinePoints};
pub use pixel_buffer::PixelBuffer;

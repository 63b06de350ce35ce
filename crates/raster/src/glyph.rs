//! 5x5 bitmap digits and vertex labels.
//!
//! The font covers the decimal digits only. Each template is a 5x5 grid of
//! set/unset cells, row-major from the top-left.

use arrayvec::ArrayVec;

use crate::circle::draw_filled_circle;
use crate::pixel_buffer::PixelBuffer;
use crate::types::{Point, Rgb, DIGIT_PITCH, DIGIT_SIZE, LABEL_OFFSET_Y};

/// One digit cell grid.
pub type GlyphTemplate = [[bool; DIGIT_SIZE]; DIGIT_SIZE];

const O: bool = false;
const X: bool = true;

/// Digit templates indexed by value.
pub static DIGIT_GLYPHS: [GlyphTemplate; 10] = [
    // 0
    [
        [O, X, X, X, O],
        [X, O, O, O, X],
        [X, O, O, O, X],
        [X, O, O, O, X],
        [O, X, X, X, O],
    ],
    // 1
    [
        [O, O, X, O, O],
        [O, X, X, O, O],
        [O, O, X, O, O],
        [O, O, X, O, O],
        [O, X, X, X, O],
    ],
    // 2
    [
        [X, X, X, O, O],
        [O, O, X, O, O],
        [O, X, O, O, O],
        [X, O, O, O, O],
        [X, X, X, X, O],
    ],
    // 3
    [
        [O, X, X, X, O],
        [O, O, O, X, O],
        [O, X, X, X, O],
        [O, O, O, X, O],
        [O, X, X, X, O],
    ],
    // 4
    [
        [O, X, O, X, O],
        [O, X, O, X, O],
        [O, X, X, X, O],
        [O, O, O, X, O],
        [O, O, O, X, O],
    ],
    // 5
    [
        [O, O, X, X, O],
        [O, O, X, O, O],
        [O, O, X, X, O],
        [O, O, O, X, O],
        [O, O, X, X, O],
    ],
    // 6
    [
        [O, X, X, X, O],
        [O, X, O, O, O],
        [O, X, X, X, O],
        [O, X, O, X, O],
        [O, X, X, X, O],
    ],
    // 7
    [
        [O, X, X, X, O],
        [O, X, O, X, O],
        [O, O, O, X, O],
        [O, O, O, X, O],
        [O, O, O, X, O],
    ],
    // 8
    [
        [O, X, X, X, O],
        [O, X, O, X, O],
        [O, X, X, X, O],
        [O, X, O, X, O],
        [O, X, X, X, O],
    ],
    // 9
    [
        [O, X, X, X, O],
        [O, X, O, X, O],
        [O, X, X, X, O],
        [O, O, O, X, O],
        [O, X, X, X, O],
    ],
];

/// Template for `digit`, or `None` if it is not a single decimal digit.
pub fn glyph(digit: u8) -> Option<&'static GlyphTemplate> {
    DIGIT_GLYPHS.get(digit as usize)
}

/// Decimal digits of `n`, most significant first. Never allocates.
pub fn decimal_digits(mut n: u32) -> ArrayVec<u8, 10> {
    let mut digits = ArrayVec::new();
    loop {
        digits.push((n % 10) as u8);
        n /= 10;
        if n == 0 {
            break;
        }
    }
    digits.reverse();
    digits
}

/// Top-left corner of the first label digit for a vertex at `center`.
pub fn label_origin(center: Point, digit_count: usize) -> Point {
    let total_width = DIGIT_PITCH * digit_count as i32;
    Point::new(center.x - total_width / 2, center.y - LABEL_OFFSET_Y)
}

/// Plot every set cell of `digit`'s template relative to `origin`.
pub fn draw_digit(buf: &mut PixelBuffer, origin: Point, digit: u8, color: Rgb) {
    let Some(template) = glyph(digit) else {
        return;
    };
    for (row, cells) in template.iter().enumerate() {
        for (col, &set) in cells.iter().enumerate() {
            if set {
                buf.set_pixel(origin.offset(col as i32, row as i32), color);
            }
        }
    }
}

/// Draw a filled disk and label it with `index` in decimal.
pub fn draw_labeled_circle(
    buf: &mut PixelBuffer,
    center: Point,
    radius: i32,
    index: u32,
    circle_color: Rgb,
    text_color: Rgb,
) {
    draw_filled_circle(buf, center, radius, circle_color);

    let digits = decimal_digits(index);
    let origin = label_origin(center, digits.len());
    for (i, &d) in digits.iter().enumerate() {
        draw_digit(buf, origin.offset(i as i32 * DIGIT_PITCH, 0), d, text_color);
    }
}

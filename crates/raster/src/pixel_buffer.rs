//! In-memory 24-bit raster.

use crate::types::{Point, Rgb, BYTES_PER_PIXEL};

/// Row-major RGB raster stored in bitmap byte order (B, G, R per pixel).
///
/// Writes outside the raster are ignored, so rasterizers can plot transiently
/// off-canvas coordinates without clipping first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Allocate a `width` x `height` raster filled with `background`.
    pub fn new(width: u32, height: u32, background: Rgb) -> Self {
        let len = (width as usize) * (height as usize) * BYTES_PER_PIXEL;
        let mut buf = Self {
            width,
            height,
            data: vec![0; len],
        };
        buf.clear(background);
        buf
    }

    /// Wrap raw BGR bytes. Returns `None` if the length does not match.
    pub fn from_bgr(width: u32, height: u32, data: Vec<u8>) -> Option<Self> {
        let len = (width as usize) * (height as usize) * BYTES_PER_PIXEL;
        if data.len() != len {
            return None;
        }
        Some(Self {
            width,
            height,
            data,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw pixel bytes, row-major, BGR.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    #[inline(always)]
    fn idx(&self, p: Point) -> Option<usize> {
        if p.x < 0 || p.y < 0 || (p.x as u32) >= self.width || (p.y as u32) >= self.height {
            return None;
        }
        Some(((p.y as usize) * (self.width as usize) + (p.x as usize)) * BYTES_PER_PIXEL)
    }

    pub fn pixel(&self, p: Point) -> Option<Rgb> {
        self.idx(p)
            .map(|i| Rgb::from_bgr([self.data[i], self.data[i + 1], self.data[i + 2]]))
    }

    #[inline]
    pub fn set_pixel(&mut self, p: Point, color: Rgb) {
        if let Some(i) = self.idx(p) {
            self.data[i..i + BYTES_PER_PIXEL].copy_from_slice(&color.to_bgr());
        }
    }

    pub fn clear(&mut self, color: Rgb) {
        let bgr = color.to_bgr();
        for px in self.data.chunks_exact_mut(BYTES_PER_PIXEL) {
            px.copy_from_slice(&bgr);
        }
    }

    /// Number of pixels currently holding `color`.
    pub fn count_color(&self, color: Rgb) -> usize {
        let bgr = color.to_bgr();
        self.data
            .chunks_exact(BYTES_PER_PIXEL)
            .filter(|px| *px == bgr)
            .count()
    }

    /// Iterate over every pixel coordinate holding `color`, row by row.
    pub fn points_with_color(&self, color: Rgb) -> impl Iterator<Item = Point> + '_ {
        let bgr = color.to_bgr();
        let width = self.width as usize;
        self.data
            .chunks_exact(BYTES_PER_PIXEL)
            .enumerate()
            .filter(move |(_, px)| *px == bgr)
            .map(move |(i, _)| Point::new((i % width) as i32, (i / width) as i32))
    }
}

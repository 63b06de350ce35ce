//! 24-bit BMP -> PixelBuffer.
//!
//! Reads back what the encoder writes, plus bottom-up images with the same
//! pixel format. Used to verify output files.

use std::path::Path;

use anyhow::{ensure, Context, Result};

use crate::header::BmpHeader;
use crate::raster::PixelBuffer;
use crate::types::BYTES_PER_PIXEL;

pub fn decode(bytes: &[u8]) -> Result<PixelBuffer> {
    let header = BmpHeader::parse(bytes)?;
    let width = header.abs_width();
    let height = header.abs_height();
    let stride = header.row_stride();
    let row_len = width as usize * BYTES_PER_PIXEL;

    let start = header.pixel_offset as usize;
    let needed = stride * height as usize;
    ensure!(
        bytes.len() >= start + needed,
        "bmp: truncated pixel data (have {}, need {})",
        bytes.len().saturating_sub(start),
        needed
    );

    let mut data = Vec::with_capacity(row_len * height as usize);
    for y in 0..height as usize {
        let src_row = if header.is_top_down() {
            y
        } else {
            height as usize - 1 - y
        };
        let off = start + src_row * stride;
        data.extend_from_slice(&bytes[off..off + row_len]);
    }

    PixelBuffer::from_bgr(width, height, data)
        .context("bmp: decoded pixel data does not match dimensions")
}

pub fn load(path: impl AsRef<Path>) -> Result<PixelBuffer> {
    let path = path.as_ref();
    let bytes =
        std::fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    decode(&bytes).with_context(|| format!("failed to decode {}", path.display()))
}

//! BMP file header (`BITMAPFILEHEADER` + `BITMAPINFOHEADER`).
//!
//! Fields are serialized one by one in little-endian order; no struct layout
//! is ever reinterpreted as bytes.

use anyhow::{anyhow, bail, ensure, Result};

use crate::types::BYTES_PER_PIXEL;

/// File signature, "BM".
pub const SIGNATURE: [u8; 2] = *b"BM";

/// Size of the file header in bytes.
pub const FILE_HEADER_SIZE: u32 = 14;

/// Size of the info header in bytes.
pub const INFO_HEADER_SIZE: u32 = 40;

/// Total header size; pixel data starts right after it.
pub const HEADER_SIZE: u32 = FILE_HEADER_SIZE + INFO_HEADER_SIZE;

pub const BITS_PER_PIXEL: u16 = 24;

/// `BI_RGB`, uncompressed.
pub const COMPRESSION_NONE: u32 = 0;

/// Bytes per encoded row: `width * 3` rounded up to a multiple of 4.
pub fn row_stride(width: u32) -> usize {
    (width as usize * BYTES_PER_PIXEL + 3) & !3
}

/// Decoded view of the 54-byte header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BmpHeader {
    pub file_size: u32,
    pub pixel_offset: u32,
    pub info_size: u32,
    pub width: i32,
    /// Negative for top-down row order.
    pub height: i32,
    pub planes: u16,
    pub bits_per_pixel: u16,
    pub compression: u32,
    pub image_size: u32,
    pub x_pixels_per_meter: i32,
    pub y_pixels_per_meter: i32,
    pub colors_used: u32,
    pub colors_important: u32,
}

impl BmpHeader {
    /// Header for a top-down 24-bit image of the given size.
    pub fn top_down(width: u32, height: u32) -> Result<Self> {
        let w = i32::try_from(width).map_err(|_| anyhow!("bmp: width {} too large", width))?;
        let h = i32::try_from(height).map_err(|_| anyhow!("bmp: height {} too large", height))?;
        let image_size = u32::try_from(row_stride(width) as u64 * height as u64)
            .map_err(|_| anyhow!("bmp: image {}x{} exceeds 4 GiB", width, height))?;
        let file_size = image_size
            .checked_add(HEADER_SIZE)
            .ok_or_else(|| anyhow!("bmp: image {}x{} exceeds 4 GiB", width, height))?;

        Ok(Self {
            file_size,
            pixel_offset: HEADER_SIZE,
            info_size: INFO_HEADER_SIZE,
            width: w,
            height: -h,
            planes: 1,
            bits_per_pixel: BITS_PER_PIXEL,
            compression: COMPRESSION_NONE,
            image_size,
            x_pixels_per_meter: 0,
            y_pixels_per_meter: 0,
            colors_used: 0,
            colors_important: 0,
        })
    }

    pub fn is_top_down(&self) -> bool {
        self.height < 0
    }

    pub fn abs_width(&self) -> u32 {
        self.width.unsigned_abs()
    }

    pub fn abs_height(&self) -> u32 {
        self.height.unsigned_abs()
    }

    pub fn row_stride(&self) -> usize {
        row_stride(self.abs_width())
    }

    /// Append the 54 header bytes to `out`.
    pub fn write_into(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&SIGNATURE);
        out.extend_from_slice(&self.file_size.to_le_bytes());
        out.extend_from_slice(&0u16.to_le_bytes());
        out.extend_from_slice(&0u16.to_le_bytes());
        out.extend_from_slice(&self.pixel_offset.to_le_bytes());

        out.extend_from_slice(&self.info_size.to_le_bytes());
        out.extend_from_slice(&self.width.to_le_bytes());
        out.extend_from_slice(&self.height.to_le_bytes());
        out.extend_from_slice(&self.planes.to_le_bytes());
        out.extend_from_slice(&self.bits_per_pixel.to_le_bytes());
        out.extend_from_slice(&self.compression.to_le_bytes());
        out.extend_from_slice(&self.image_size.to_le_bytes());
        out.extend_from_slice(&self.x_pixels_per_meter.to_le_bytes());
        out.extend_from_slice(&self.y_pixels_per_meter.to_le_bytes());
        out.extend_from_slice(&self.colors_used.to_le_bytes());
        out.extend_from_slice(&self.colors_important.to_le_bytes());
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(HEADER_SIZE as usize);
        self.write_into(&mut out);
        out
    }

    /// Parse and validate a header at the start of `bytes`.
    ///
    /// Only uncompressed 24-bit images with a 40-byte info header are accepted.
    pub fn parse(bytes: &[u8]) -> Result<Self> {
        ensure!(
            bytes.len() >= HEADER_SIZE as usize,
            "bmp: truncated header ({} bytes)",
            bytes.len()
        );
        if bytes[0..2] != SIGNATURE {
            bail!("bmp: bad signature {:02X} {:02X}", bytes[0], bytes[1]);
        }

        let u16_at = |o: usize| u16::from_le_bytes([bytes[o], bytes[o + 1]]);
        let u32_at =
            |o: usize| u32::from_le_bytes([bytes[o], bytes[o + 1], bytes[o + 2], bytes[o + 3]]);
        let i32_at =
            |o: usize| i32::from_le_bytes([bytes[o], bytes[o + 1], bytes[o + 2], bytes[o + 3]]);

        let header = Self {
            file_size: u32_at(2),
            pixel_offset: u32_at(10),
            info_size: u32_at(14),
            width: i32_at(18),
            height: i32_at(22),
            planes: u16_at(26),
            bits_per_pixel: u16_at(28),
            compression: u32_at(30),
            image_size: u32_at(34),
            x_pixels_per_meter: i32_at(38),
            y_pixels_per_meter: i32_at(42),
            colors_used: u32_at(46),
            colors_important: u32_at(50),
        };

        ensure!(
            header.info_size == INFO_HEADER_SIZE,
            "bmp: unsupported info header size {}",
            header.info_size
        );
        ensure!(header.planes == 1, "bmp: unsupported plane count {}", header.planes);
        ensure!(
            header.bits_per_pixel == BITS_PER_PIXEL,
            "bmp: unsupported bit depth {}",
            header.bits_per_pixel
        );
        ensure!(
            header.compression == COMPRESSION_NONE,
            "bmp: unsupported compression {}",
            header.compression
        );
        ensure!(header.width >= 0, "bmp: negative width {}", header.width);
        ensure!(
            header.pixel_offset >= HEADER_SIZE,
            "bmp: pixel data offset {} overlaps header",
            header.pixel_offset
        );

        Ok(header)
    }
}

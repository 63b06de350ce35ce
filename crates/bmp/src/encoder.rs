//! PixelBuffer -> 24-bit BMP.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};

use crate::header::{BmpHeader, HEADER_SIZE};
use crate::raster::PixelBuffer;
use crate::types::BYTES_PER_PIXEL;

const PADDING: [u8; 3] = [0; 3];

/// Append a complete BMP file (header + padded top-down rows) to `out`.
pub fn encode_into(buf: &PixelBuffer, out: &mut Vec<u8>) -> Result<()> {
    let header = BmpHeader::top_down(buf.width(), buf.height())?;
    out.reserve(header.file_size as usize);
    header.write_into(out);
    for_each_row(buf, &header, |row, pad| {
        out.extend_from_slice(row);
        out.extend_from_slice(pad);
    });
    Ok(())
}

/// Encode into a freshly allocated byte vector.
pub fn encode(buf: &PixelBuffer) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    encode_into(buf, &mut out)?;
    Ok(out)
}

/// Stream the encoded image to `w`. Returns the number of bytes written.
pub fn write_to<W: Write>(buf: &PixelBuffer, mut w: W) -> Result<u64> {
    let header = BmpHeader::top_down(buf.width(), buf.height())?;
    w.write_all(&header.to_bytes())?;

    let mut result = Ok(());
    for_each_row(buf, &header, |row, pad| {
        if result.is_ok() {
            result = w.write_all(row).and_then(|_| w.write_all(pad));
        }
    });
    result?;
    w.flush()?;
    Ok(header.file_size as u64)
}

/// Write the encoded image to `path`, creating or truncating it.
///
/// The file handle is closed when this returns, on success or error.
pub fn save(buf: &PixelBuffer, path: impl AsRef<Path>) -> Result<u64> {
    let path = path.as_ref();
    let file = File::create(path)
        .with_context(|| format!("failed to create bitmap file {}", path.display()))?;
    let written = write_to(buf, BufWriter::new(file))
        .with_context(|| format!("failed to write bitmap file {}", path.display()))?;
    log::debug!(
        "wrote {}x{} bitmap ({} bytes) to {}",
        buf.width(),
        buf.height(),
        written,
        path.display()
    );
    Ok(written)
}

fn for_each_row<F: FnMut(&[u8], &[u8])>(buf: &PixelBuffer, header: &BmpHeader, mut f: F) {
    let row_len = buf.width() as usize * BYTES_PER_PIXEL;
    let pad = &PADDING[..header.row_stride() - row_len];
    if row_len == 0 {
        return;
    }
    for row in buf.as_bytes().chunks_exact(row_len) {
        f(row, pad);
    }
}

/// Size in bytes of the encoded file for a `width` x `height` image.
pub fn encoded_len(width: u32, height: u32) -> Result<usize> {
    let header = BmpHeader::top_down(width, height)?;
    debug_assert_eq!(
        header.file_size as usize,
        HEADER_SIZE as usize + header.image_size as usize
    );
    Ok(header.file_size as usize)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Point, Rgb};

    #[test]
    fn aligned_width_has_no_padding() {
        let buf = PixelBuffer::new(4, 2, Rgb::WHITE);
        let bytes = encode(&buf).unwrap();
        assert_eq!(bytes.len(), 54 + 4 * 2 * 3);
        assert_eq!(&bytes[54..], buf.as_bytes());
    }

    #[test]
    fn unaligned_width_rows_are_padded() {
        let mut buf = PixelBuffer::new(1, 2, Rgb::WHITE);
        buf.set_pixel(Point::new(0, 1), Rgb::new(1, 2, 3));
        let bytes = encode(&buf).unwrap();
        assert_eq!(bytes.len(), 54 + 2 * 4);
        assert_eq!(&bytes[54..62], &[255, 255, 255, 0, 3, 2, 1, 0]);
    }

    #[test]
    fn write_to_matches_encode() {
        let mut buf = PixelBuffer::new(5, 3, Rgb::BLACK);
        buf.set_pixel(Point::new(4, 2), Rgb::RED);
        let mut streamed = Vec::new();
        let n = write_to(&buf, &mut streamed).unwrap();
        assert_eq!(n as usize, streamed.len());
        assert_eq!(streamed, encode(&buf).unwrap());
        assert_eq!(encoded_len(5, 3).unwrap(), streamed.len());
    }

    #[test]
    fn empty_image_is_header_only() {
        let buf = PixelBuffer::new(0, 0, Rgb::WHITE);
        assert_eq!(encode(&buf).unwrap().len(), 54);
    }
}

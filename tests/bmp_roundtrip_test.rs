use std::path::PathBuf;

use gridgraph::bmp::{self, BmpHeader, HEADER_SIZE};
use gridgraph::raster::{draw_filled_circle, PixelBuffer};
use gridgraph::types::{Point, Rgb};

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("gridgraph-{}-{}", std::process::id(), name))
}

#[test]
fn header_round_trip_recovers_dimensions_and_size() {
    for (w, h) in [(2560, 1480), (4, 4), (1, 1), (7, 3), (33, 2)] {
        let buf = PixelBuffer::new(w, h, Rgb::WHITE);
        let bytes = bmp::encode(&buf).unwrap();
        let header = BmpHeader::parse(&bytes).unwrap();

        assert_eq!(header.abs_width(), w);
        assert_eq!(header.abs_height(), h);
        assert!(header.is_top_down());
        assert_eq!(header.pixel_offset, HEADER_SIZE);
        assert_eq!(header.image_size as usize, header.row_stride() * h as usize);
        assert_eq!(header.file_size as usize, bytes.len());
        assert_eq!(header.planes, 1);
        assert_eq!(header.bits_per_pixel, 24);
        assert_eq!(header.compression, 0);
    }
}

#[test]
fn reference_canvas_pixel_bytes_match_buffer_exactly() {
    let buf = PixelBuffer::new(2560, 1480, Rgb::WHITE);
    let bytes = bmp::encode(&buf).unwrap();
    let header = BmpHeader::parse(&bytes).unwrap();
    assert_eq!(header.image_size as usize, buf.as_bytes().len());
    assert_eq!(&bytes[HEADER_SIZE as usize..], buf.as_bytes());
}

#[test]
fn odd_width_rows_are_padded_to_four_bytes() {
    let buf = PixelBuffer::new(5, 3, Rgb::WHITE);
    let bytes = bmp::encode(&buf).unwrap();
    // 5 * 3 = 15 -> 16 bytes per row.
    assert_eq!(bytes.len(), 54 + 16 * 3);
    for row in bytes[54..].chunks(16) {
        assert_eq!(row[15], 0);
        assert!(row[..15].iter().all(|&b| b == 255));
    }
}

#[test]
fn saved_file_decodes_to_same_pixels() {
    let mut buf = PixelBuffer::new(31, 17, Rgb::WHITE);
    draw_filled_circle(&mut buf, Point::new(15, 8), 6, Rgb::RED);
    buf.set_pixel(Point::new(0, 16), Rgb::new(12, 34, 56));

    let path = temp_path("roundtrip.bmp");
    let written = bmp::save(&buf, &path).unwrap();
    let on_disk = std::fs::metadata(&path).unwrap().len();
    assert_eq!(written, on_disk);

    let decoded = bmp::load(&path).unwrap();
    let _ = std::fs::remove_file(&path);
    assert_eq!(decoded, buf);
}

#[test]
fn save_to_unwritable_path_reports_path() {
    let buf = PixelBuffer::new(2, 2, Rgb::WHITE);
    let path = temp_path("no-such-dir").join("out.bmp");
    let err = bmp::save(&buf, &path).unwrap_err();
    assert!(format!("{:#}", err).contains("out.bmp"));
}

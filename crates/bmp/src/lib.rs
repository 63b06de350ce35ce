//! Uncompressed 24-bit BMP codec.
//!
//! The encoder writes a 54-byte header (`BITMAPFILEHEADER` followed by a
//! 40-byte `BITMAPINFOHEADER`) and then the raw BGR rows of a
//! [`PixelBuffer`](gridgraph_raster::PixelBuffer), top-down (negative height),
//! each row padded with zeros to a multiple of 4 bytes.
//!
//! The decoder exists to verify what the encoder produced; it accepts the same
//! pixel format in either row order.
//!
//! # Example
//!
//! ```
//! use gridgraph_bmp::{decode, encode, BmpHeader};
//! use gridgraph_raster::PixelBuffer;
//! use gridgraph_types::Rgb;
//!
//! let buf = PixelBuffer::new(2560, 4, Rgb::WHITE);
//! let bytes = encode(&buf).unwrap();
//!
//! let header = BmpHeader::parse(&bytes).unwrap();
//! assert_eq!(header.width, 2560);
//! assert_eq!(header.height, -4);
//! assert_eq!(header.image_size as usize, buf.as_bytes().len());
//!
//! assert_eq!(decode(&bytes).unwrap(), buf);
//! ```

pub mod decoder;
pub mod encoder;
pub mod header;

pub use gridgraph_raster as raster;
pub use gridgraph_types as types;

pub use decoder::{decode, load};
pub use encoder::{encode, encode_into, encoded_len, save, write_to};
pub use header::{row_stride, BmpHeader, HEADER_SIZE};

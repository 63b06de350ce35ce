//! Core types module - shared value types and constants
//!
//! This crate defines the small value types used by every other crate in the
//! workspace. All types are plain data with no external dependencies, so they
//! can be used by the rasterizer, the bitmap codec, and the scene layer alike.
//!
//! # Canvas and Grid
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `GRID_SIZE` | 20 | Vertices per grid row/column (20x20 = 400 vertices) |
//! | `CANVAS_WIDTH` | 2560 | Output image width in pixels |
//! | `CANVAS_HEIGHT` | 1480 | Output image height in pixels |
//! | `VERTEX_RADIUS` | 5 | Radius of each vertex disk |
//! | `DIGIT_SIZE` | 5 | Glyph cell width/height |
//! | `DIGIT_PITCH` | 9 | Horizontal advance per label digit |
//! | `LABEL_OFFSET_Y` | 8 | Label top edge, in pixels above the vertex center |
//!
//! # Coordinates
//!
//! Pixel coordinates are signed so that rasterizers can compute off-canvas
//! points freely. (0, 0) is the top-left pixel.
//!
//! # Examples
//!
//! ```
//! use gridgraph_types::{Point, Rgb, Edge, GRID_SIZE};
//!
//! let p = Point::new(3, 4);
//! assert_eq!(p.offset(1, -1), Point::new(4, 3));
//!
//! assert_eq!(Rgb::RED, Rgb::new(255, 0, 0));
//! assert_eq!(Rgb::RED.to_bgr(), [0, 0, 255]);
//!
//! let e = Edge::new(0, 1);
//! assert!(e.is_within(GRID_SIZE * GRID_SIZE));
//! ```

/// Vertices per grid row and column.
pub const GRID_SIZE: u32 = 20;

/// Output canvas width in pixels.
pub const CANVAS_WIDTH: u32 = 2560;

/// Output canvas height in pixels.
pub const CANVAS_HEIGHT: u32 = 1480;

/// Radius of a vertex disk in pixels.
pub const VERTEX_RADIUS: i32 = 5;

/// Glyph templates are `DIGIT_SIZE` x `DIGIT_SIZE` cells.
pub const DIGIT_SIZE: usize = 5;

/// Horizontal advance between consecutive label digits.
pub const DIGIT_PITCH: i32 = 9;

/// Distance from the vertex center up to the top row of its label.
pub const LABEL_OFFSET_Y: i32 = 8;

/// Default edge list file, relative to the working directory.
pub const DEFAULT_EDGES_PATH: &str = "graph_edges.txt";

/// Default output bitmap file, relative to the working directory.
pub const DEFAULT_OUTPUT_PATH: &str = "output_graph.bmp";

/// Bytes per pixel in both the in-memory raster and the encoded bitmap.
pub const BYTES_PER_PIXEL: usize = 3;

/// Index of a vertex in the grid, row-major from the top-left cell.
pub type VertexId = u32;

/// Integer pixel coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Translate by (dx, dy).
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const RED: Rgb = Rgb::new(255, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Channel bytes in bitmap storage order (blue, green, red).
    pub const fn to_bgr(self) -> [u8; 3] {
        [self.b, self.g, self.r]
    }

    pub const fn from_bgr(bgr: [u8; 3]) -> Self {
        Self {
            r: bgr[2],
            g: bgr[1],
            b: bgr[0],
        }
    }
}

/// An edge between two grid vertices.
///
/// Edges are stored in the order read from the input, but are drawn as a
/// single undirected line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge {
    pub u: VertexId,
    pub v: VertexId,
}

impl Edge {
    pub const fn new(u: VertexId, v: VertexId) -> Self {
        Self { u, v }
    }

    /// True when both endpoints index into a graph of `vertex_count` vertices.
    pub const fn is_within(&self, vertex_count: u32) -> bool {
        self.u < vertex_count && self.v < vertex_count
    }
}

//! Grid graph renderer (workspace facade crate).
//!
//! Re-exports the member crates under short module names and hosts the
//! [`app`] pipeline used by the binary.

pub mod app;

pub use gridgraph_bmp as bmp;
pub use gridgraph_raster as raster;
pub use gridgraph_scene as scene;
pub use gridgraph_types as types;

pub use app::{render_graph, render_to_buffer, RenderConfig, RenderReport};

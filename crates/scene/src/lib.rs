//! Scene layer: grid layout, edge ingestion, and composition.
//!
//! - [`layout`]: vertex centers on a regular grid
//! - [`edges`]: whitespace-separated edge list parsing with range filtering
//! - [`composer`]: paints vertices (labeled disks) then edges (lines)

pub mod composer;
pub mod edges;
pub mod layout;

pub use gridgraph_raster as raster;
pub use gridgraph_types as types;

pub use composer::{SceneComposer, SceneStyle};
pub use edges::{load_edges, parse_edges, EdgeList};
pub use layout::GridLayout;

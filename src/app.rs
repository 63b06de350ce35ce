//! Render pipeline: layout -> edges -> compose -> encode.

use std::path::PathBuf;

use anyhow::{ensure, Result};

use crate::bmp;
use crate::raster::PixelBuffer;
use crate::scene::{load_edges, GridLayout, SceneComposer, SceneStyle};
use crate::types::{
    Edge, CANVAS_HEIGHT, CANVAS_WIDTH, DEFAULT_EDGES_PATH, DEFAULT_OUTPUT_PATH, GRID_SIZE,
};

/// Render configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    pub grid_size: u32,
    pub width: u32,
    pub height: u32,
    pub edges_path: PathBuf,
    pub output_path: PathBuf,
    pub style: SceneStyle,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            grid_size: GRID_SIZE,
            width: CANVAS_WIDTH,
            height: CANVAS_HEIGHT,
            edges_path: PathBuf::from(DEFAULT_EDGES_PATH),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            style: SceneStyle::default(),
        }
    }
}

impl RenderConfig {
    pub fn validate(&self) -> Result<()> {
        ensure!(self.grid_size > 0, "grid size must be at least 1");
        ensure!(
            self.grid_size <= self.width && self.grid_size <= self.height,
            "a {0}x{0} grid does not fit a {1}x{2} canvas",
            self.grid_size,
            self.width,
            self.height
        );
        ensure!(
            self.grid_size.checked_mul(self.grid_size).is_some(),
            "a {0}x{0} grid has too many vertices",
            self.grid_size
        );
        ensure!(
            self.width <= i32::MAX as u32 && self.height <= i32::MAX as u32,
            "canvas {}x{} is too large",
            self.width,
            self.height
        );
        Ok(())
    }

    pub fn layout(&self) -> GridLayout {
        GridLayout::new(self.grid_size, self.width, self.height)
    }
}

/// Outcome of a successful render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderReport {
    pub vertex_count: u32,
    pub edges_drawn: usize,
    pub edges_dropped: usize,
    pub output_path: PathBuf,
    pub bytes_written: u64,
}

/// Draw the scene into a new background-filled buffer.
pub fn render_to_buffer(
    layout: &GridLayout,
    edges: &[Edge],
    style: SceneStyle,
    width: u32,
    height: u32,
) -> PixelBuffer {
    let positions = layout.positions();
    SceneComposer::new(style).render(&positions, edges, width, height)
}

/// Run the whole pipeline for `config`.
///
/// A missing or unreadable edge file fails before anything is drawn or
/// written.
pub fn render_graph(config: &RenderConfig) -> Result<RenderReport> {
    config.validate()?;

    let layout = config.layout();
    log::info!(
        "laying out {}x{} grid ({} vertices) on {}x{} canvas",
        config.grid_size,
        config.grid_size,
        layout.vertex_count(),
        config.width,
        config.height
    );

    let edges = load_edges(&config.edges_path, layout.vertex_count())?;
    log::info!(
        "loaded {} edge(s) from {} ({} dropped)",
        edges.len(),
        config.edges_path.display(),
        edges.dropped
    );

    let buf = render_to_buffer(
        &layout,
        &edges.edges,
        config.style,
        config.width,
        config.height,
    );
    let bytes_written = bmp::save(&buf, &config.output_path)?;
    log::info!("graph written to {}", config.output_path.display());

    Ok(RenderReport {
        vertex_count: layout.vertex_count(),
        edges_drawn: edges.len(),
        edges_dropped: edges.dropped,
        output_path: config.output_path.clone(),
        bytes_written,
    })
}

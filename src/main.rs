//! Grid graph renderer (default binary).
//!
//! Reads `graph_edges.txt` from the working directory, draws the 20x20 grid
//! graph, and writes `output_graph.bmp`.

use anyhow::Result;
use env_logger::Env;

use gridgraph::{render_graph, RenderConfig};

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let config = RenderConfig::default();
    let report = render_graph(&config)?;

    println!(
        "Graph written to {} ({} vertices, {} edges)",
        report.output_path.display(),
        report.vertex_count,
        report.edges_drawn
    );
    Ok(())
}

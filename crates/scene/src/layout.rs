//! Grid placement of vertices.

use crate::types::{Point, VertexId};

/// Places `grid_size * grid_size` vertices at the centers of equal cells.
///
/// Vertex `i` sits in row `i / grid_size`, column `i % grid_size`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    grid_size: u32,
    cell_width: u32,
    cell_height: u32,
}

impl GridLayout {
    pub fn new(grid_size: u32, width: u32, height: u32) -> Self {
        let (cell_width, cell_height) = if grid_size == 0 {
            (0, 0)
        } else {
            (width / grid_size, height / grid_size)
        };
        Self {
            grid_size,
            cell_width,
            cell_height,
        }
    }

    pub fn grid_size(&self) -> u32 {
        self.grid_size
    }

    pub fn cell_width(&self) -> u32 {
        self.cell_width
    }

    pub fn cell_height(&self) -> u32 {
        self.cell_height
    }

    /// Number of grid vertices, saturating at `u32::MAX`.
    pub fn vertex_count(&self) -> u32 {
        self.grid_size.saturating_mul(self.grid_size)
    }

    /// Center of vertex `id`, or `None` if it is not in the grid.
    pub fn position(&self, id: VertexId) -> Option<Point> {
        if id >= self.vertex_count() {
            return None;
        }
        let row = id / self.grid_size;
        let col = id % self.grid_size;
        Some(Point::new(
            (col * self.cell_width + self.cell_width / 2) as i32,
            (row * self.cell_height + self.cell_height / 2) as i32,
        ))
    }

    /// All vertex centers, indexed by vertex id.
    pub fn positions(&self) -> Vec<Point> {
        (0..self.vertex_count())
            .filter_map(|id| self.position(id))
            .collect()
    }
}

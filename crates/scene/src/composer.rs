//! SceneComposer: paints a laid-out graph into a pixel buffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::raster::{draw_labeled_circle, draw_line, PixelBuffer};
use crate::types::{Edge, Point, Rgb, VERTEX_RADIUS};

/// Colors and marker size used for a scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SceneStyle {
    pub background: Rgb,
    pub vertex_radius: i32,
    pub vertex_color: Rgb,
    pub label_color: Rgb,
    pub edge_color: Rgb,
}

impl Default for SceneStyle {
    fn default() -> Self {
        Self {
            background: Rgb::WHITE,
            vertex_radius: VERTEX_RADIUS,
            vertex_color: Rgb::RED,
            label_color: Rgb::BLACK,
            edge_color: Rgb::BLACK,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct SceneComposer {
    style: SceneStyle,
}

impl SceneComposer {
    pub fn new(style: SceneStyle) -> Self {
        Self { style }
    }

    pub fn style(&self) -> &SceneStyle {
        &self.style
    }

    /// Paint all vertices, then all edges, onto `buf`.
    ///
    /// Vertex `i` is drawn at `positions[i]`. Edges go on top of the vertex
    /// markers. Edges naming a vertex without a position are skipped. The
    /// buffer is not cleared first, and nothing is allocated.
    pub fn render_into(&self, positions: &[Point], edges: &[Edge], buf: &mut PixelBuffer) {
        let s = &self.style;

        for (i, &center) in positions.iter().enumerate() {
            draw_labeled_circle(
                buf,
                center,
                s.vertex_radius,
                i as u32,
                s.vertex_color,
                s.label_color,
            );
        }

        for edge in edges {
            let (Some(&a), Some(&b)) = (
                positions.get(edge.u as usize),
                positions.get(edge.v as usize),
            ) else {
                continue;
            };
            draw_line(buf, a, b, s.edge_color);
        }
    }

    /// Convenience helper that allocates a background-filled buffer.
    pub fn render(
        &self,
        positions: &[Point],
        edges: &[Edge],
        width: u32,
        height: u32,
    ) -> PixelBuffer {
        let mut buf = PixelBuffer::new(width, height, self.style.background);
        self.render_into(positions, edges, &mut buf);
        buf
    }
}

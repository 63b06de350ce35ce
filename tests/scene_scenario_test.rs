use gridgraph::raster::{label_origin, DIGIT_GLYPHS};
use gridgraph::render_to_buffer;
use gridgraph::scene::{parse_edges, GridLayout, SceneStyle};
use gridgraph::types::{Edge, Point, Rgb};

const W: u32 = 64;
const H: u32 = 64;

fn assert_glyph(buf: &gridgraph::raster::PixelBuffer, origin: Point, digit: usize, color: Rgb) {
    for (row, cells) in DIGIT_GLYPHS[digit].iter().enumerate() {
        for (col, &set) in cells.iter().enumerate() {
            if set {
                let p = origin.offset(col as i32, row as i32);
                assert_eq!(buf.pixel(p), Some(color), "digit {} cell {:?}", digit, p);
            }
        }
    }
}

#[test]
fn two_by_two_grid_with_one_edge() {
    let layout = GridLayout::new(2, W, H);
    let positions = layout.positions();
    assert_eq!(
        positions,
        vec![
            Point::new(16, 16),
            Point::new(48, 16),
            Point::new(16, 48),
            Point::new(48, 48)
        ]
    );

    let edges = parse_edges("0 1\n", layout.vertex_count());
    let buf = render_to_buffer(&layout, &edges.edges, SceneStyle::default(), W, H);

    // Disks around every center.
    for &c in &positions {
        assert_eq!(buf.pixel(c.offset(0, 3)), Some(Rgb::RED), "disk at {:?}", c);
        assert_eq!(buf.pixel(c.offset(-4, 2)), Some(Rgb::RED), "disk at {:?}", c);
    }

    // Labels "0" and "1" above their vertices.
    assert_glyph(&buf, label_origin(positions[0], 1), 0, Rgb::BLACK);
    assert_glyph(&buf, label_origin(positions[1], 1), 1, Rgb::BLACK);
    assert_glyph(&buf, label_origin(positions[2], 1), 2, Rgb::BLACK);
    assert_glyph(&buf, label_origin(positions[3], 1), 3, Rgb::BLACK);

    // Connecting line.
    for x in 16..=48 {
        assert_eq!(buf.pixel(Point::new(x, 16)), Some(Rgb::BLACK), "x={}", x);
    }
    // No line between the lower vertices.
    assert_eq!(buf.pixel(Point::new(32, 48)), Some(Rgb::WHITE));

    // Everything else is background: any non-white pixel belongs to a vertex
    // marker, its label, or the edge row.
    for y in 0..H as i32 {
        for x in 0..W as i32 {
            let p = Point::new(x, y);
            if buf.pixel(p) == Some(Rgb::WHITE) {
                continue;
            }
            let near_vertex = positions
                .iter()
                .any(|c| (p.x - c.x).abs() <= 5 && (-8..=5).contains(&(p.y - c.y)));
            let on_edge = y == 16 && (16..=48).contains(&x);
            assert!(near_vertex || on_edge, "stray pixel at {:?}", p);
        }
    }
}

#[test]
fn out_of_range_edge_does_not_affect_valid_edges() {
    let layout = GridLayout::new(2, W, H);

    let with_bad = parse_edges("0 1\n0 4\n7 2\n2 3\n", layout.vertex_count());
    assert_eq!(with_bad.edges, vec![Edge::new(0, 1), Edge::new(2, 3)]);
    assert_eq!(with_bad.dropped, 2);

    let clean = parse_edges("0 1\n2 3\n", layout.vertex_count());
    let a = render_to_buffer(&layout, &with_bad.edges, SceneStyle::default(), W, H);
    let b = render_to_buffer(&layout, &clean.edges, SceneStyle::default(), W, H);
    assert_eq!(a, b);
}

#[test]
fn vertices_are_drawn_before_edges() {
    let layout = GridLayout::new(2, W, H);
    // Vertical edge 0-2 runs through both disks.
    let buf = render_to_buffer(
        &layout,
        &[Edge::new(0, 2)],
        SceneStyle::default(),
        W,
        H,
    );
    // The line overwrites the red disk pixels it crosses.
    assert_eq!(buf.pixel(Point::new(16, 19)), Some(Rgb::BLACK));
    assert_eq!(buf.pixel(Point::new(16, 45)), Some(Rgb::BLACK));
    assert_eq!(buf.pixel(Point::new(17, 19)), Some(Rgb::RED));
}

#[test]
fn reference_grid_labels_use_multi_digit_pitch() {
    let layout = GridLayout::new(20, 2560, 1480);
    let buf = render_to_buffer(&layout, &[], SceneStyle::default(), 2560, 1480);

    let p = layout.position(123).unwrap();
    let origin = label_origin(p, 3);
    assert_glyph(&buf, origin, 1, Rgb::BLACK);
    assert_glyph(&buf, origin.offset(9, 0), 2, Rgb::BLACK);
    assert_glyph(&buf, origin.offset(18, 0), 3, Rgb::BLACK);
}

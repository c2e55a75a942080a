// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Quadtree viewport.
//!
//! Fills a deeper tree with Kurbo rectangles laid out in rows, then lists the ones
//! anchored inside a viewport and hit-tests a point.
//!
//! Run:
//! - `cargo run -p understory_quadtree_demos --example quadtree_viewport`

use kurbo::{Point, Rect};
use tracing_subscriber::EnvFilter;
use understory_quadtree::{QuadTree, QuadTreeConfig, Rectangle};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let world = Rectangle::try_from(Rect::new(0.0, 0.0, 1000.0, 1000.0))?;
    let mut tree = QuadTree::with_config(
        QuadTreeConfig::default()
            .with_boundary(world)
            .with_capacity(8)
            .with_max_depth(5),
    );

    for row in 0..10_u32 {
        let y = f64::from(row) * 50.0;
        for col in 0..10_u32 {
            let x = f64::from(col) * 90.0;
            let cell = Rect::new(x, y, x + 80.0, y + 40.0);
            let _ = tree.insert_rect(Rectangle::try_from(cell)?);
        }
    }
    println!("stored {} rectangles, depth {}", tree.len(), tree.root().depth());

    let viewport = Rectangle::try_from(Rect::new(0.0, 120.0, 200.0, 220.0))?;
    let visible: Vec<Rect> = tree.query_anchors(viewport).map(|r| Rect::from(*r)).collect();
    println!("anchored in viewport: {visible:?}");

    let probe = Point::new(95.0, 110.0);
    match tree.find(probe.x, probe.y) {
        Some(hit) => println!("hit at {probe:?}: {hit} (anchor {:?})", hit.anchor_point()),
        None => println!("nothing at {probe:?}"),
    }
    Ok(())
}

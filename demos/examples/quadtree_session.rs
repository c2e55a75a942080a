// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Quadtree session.
//!
//! Replays a fixed sequence of inserts, updates, finds and deletes against the default
//! world and prints the dump after each phase. Set `RUST_LOG=understory_quadtree=trace`
//! to see every placement.
//!
//! Run:
//! - `cargo run -p understory_quadtree_demos --example quadtree_session`

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use understory_quadtree::{QuadTree, QuadTreeError};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,understory_quadtree=debug")),
        )
        .init();

    let mut tree = QuadTree::new();
    print!("{tree}");

    for (x, y) in [
        (-40.0, -40.0),
        (40.0, -40.0),
        (-40.0, 40.0),
        (-30.0, 40.0),
        (-35.0, 40.0),
        (-40.0, 30.0),
        (40.0, 40.0),
    ] {
        if !tree.insert(x, y, 10.0, 10.0)? {
            warn!(x, y, "insert dropped");
        }
    }
    print!("{tree}");

    tree.update(40.0, 40.0, 40.0, 40.0, 100.0, 100.0)?;
    print!("{tree}");

    report_find(&tree, 40.0, 40.0);

    for (x, y) in [(40.0, 40.0), (39.0, 40.0), (40.0, 39.0), (39.0, 39.0)] {
        let _ = tree.insert(x, y, 10.0, 10.0)?;
    }
    print!("{tree}");

    for (x, y) in [
        (-40.0, -40.0),
        (40.0, 10.0),
        (-40.0, 40.0),
        (-30.0, 40.0),
        (-35.0, 40.0),
        (-40.0, 30.0),
        (40.0, 40.0),
        (40.0, 40.0),
        (39.0, 40.0),
        (40.0, 39.0),
        (39.0, 39.0),
    ] {
        let removed = tree.delete(x, y);
        info!(x, y, removed, "delete");
    }
    print!("{tree}");

    match tree.update(20.0, 20.0, 0.0, 0.0, 1.0, 1.0) {
        Err(QuadTreeError::NotFound { x, y }) => info!(x, y, "nothing left to update"),
        other => other?,
    }
    info!(remaining = tree.len(), depth = tree.root().depth(), "session finished");
    Ok(())
}

fn report_find(tree: &QuadTree, x: f64, y: f64) {
    match tree.find(x, y) {
        Some(r) => println!("{r}"),
        None => println!("Rectangle not found at ({x}, {y})"),
    }
}

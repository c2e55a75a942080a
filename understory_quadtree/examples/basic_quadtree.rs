// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Basic usage of Understory Quadtree: insert, promote, find, update, delete and dump.

use understory_quadtree::QuadTree;

fn main() {
    let mut tree = QuadTree::new();
    for (x, y) in [(-40.0, -40.0), (40.0, -40.0), (-40.0, 40.0), (-30.0, 40.0)] {
        let _ = tree.insert(x, y, 10.0, 10.0).unwrap();
    }
    println!("{}", tree.dump());

    // Fifth insert promotes the root.
    let _ = tree.insert(-35.0, 40.0, 10.0, 10.0).unwrap();
    println!("{}", tree.dump());

    match tree.find(-25.0, 45.0) {
        Some(r) => println!("find (-25, 45): {r}"),
        None => println!("find (-25, 45): nothing"),
    }

    if let Err(e) = tree.update(0.0, 0.0, 1.0, 1.0, 2.0, 2.0) {
        println!("update failed: {e}");
    }

    let removed = tree.delete(-30.0, 45.0);
    println!("deleted {removed} rectangles at (-30, 45)");
    print!("{tree}");
}

// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Basic usage of Understory Quadtree: insert, query, remove, and dump.

use kurbo::{Point, Rect};
use understory_quadtree::{QuadTree, QuadTreeConfig, QuadTreeElement};

#[derive(Clone, Debug)]
struct Marker {
    id: u32,
    bounds: Rect,
}

impl QuadTreeElement for Marker {
    type Id = u32;

    fn id(&self) -> &u32 {
        &self.id
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }
}

fn main() {
    let config = QuadTreeConfig::default().with_minimum_quad_size(25.0);
    let mut tree = QuadTree::with_config(Rect::new(0.0, 0.0, 100.0, 100.0), config)
        .expect("valid config");

    let markers = [
        Marker {
            id: 1,
            bounds: Rect::new(5.0, 5.0, 15.0, 15.0),
        },
        Marker {
            id: 2,
            bounds: Rect::new(40.0, 40.0, 60.0, 60.0),
        },
        Marker {
            id: 3,
            bounds: Rect::new(80.0, 10.0, 90.0, 20.0),
        },
    ];
    for m in &markers {
        let placed = tree.insert(m.clone());
        println!("marker {} -> {:?}", m.id, placed);
    }

    println!("{}", tree.dump());

    // Query a point
    let hits: Vec<_> = tree.search_point(Point::new(50.0, 50.0)).map(|m| m.id).collect();
    println!("hits at (50,50): {:?}", hits);

    // Query a rectangle
    let hits: Vec<_> = tree
        .search_rect(Rect::new(0.0, 0.0, 100.0, 30.0))
        .map(|m| m.id)
        .collect();
    println!("hits in top band: {:?}", hits);

    // Remove and watch the empty quadrants collapse
    for m in &markers {
        let removed = tree.remove(m);
        println!("removed marker {}: {}", m.id, removed);
    }
    println!("after removal: {:?}", tree);
    println!("{}", tree.dump());
}

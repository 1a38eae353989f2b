//! Benchmarks for verlet2d world stepping.

use criterion::{criterion_group, criterion_main, Criterion};
use verlet2d::*;

fn rope(segments: usize) -> World<f32> {
    let mut world = World::new();
    let mut prev = world.add_node(Node::fixed(Vec2::new(20.0, 20.0)));
    for i in 1..=segments {
        let next = world.add_node(Node::new(Vec2::new(20.0 + 8.0 * i as f32, 20.0)));
        world.add_spring(prev, next, 0.9).unwrap();
        prev = next;
    }
    world.add_behavior(GravityBehavior::new(Vec2::new(0.0, 600.0)));
    world.add_constraint(BoundaryFrictionConstraint::new(800.0, 600.0, 10.0, 0.4));
    world
}

fn cloth(cols: usize, rows: usize, spacing: f32) -> World<f32> {
    let mut world = World::new();
    let mut handles = Vec::with_capacity(cols * rows);
    for row in 0..rows {
        for col in 0..cols {
            let pos = Vec2::new(100.0 + col as f32 * spacing, 40.0 + row as f32 * spacing);
            let node = if row == 0 { Node::fixed(pos) } else { Node::new(pos) };
            handles.push(world.add_node(node));
        }
    }
    for row in 0..rows {
        for col in 0..cols {
            let here = handles[row * cols + col];
            if col + 1 < cols {
                world.add_spring(here, handles[row * cols + col + 1], 0.8).unwrap();
            }
            if row + 1 < rows {
                world.add_spring(here, handles[(row + 1) * cols + col], 0.8).unwrap();
            }
        }
    }
    world.add_behavior(GravityBehavior::new(Vec2::new(0.0, 400.0)));
    world.add_constraint(BoundaryFrictionConstraint::new(800.0, 600.0, 10.0, 0.4));
    world
}

fn bench_rope_simulation(c: &mut Criterion) {
    c.bench_function("rope_50_segments_60_steps", |b| {
        b.iter(|| {
            let mut world = rope(50);
            for _ in 0..60 {
                world.step();
            }
            world.node_count()
        });
    });
}

fn bench_cloth_simulation(c: &mut Criterion) {
    c.bench_function("cloth_20x20_60_steps", |b| {
        b.iter(|| {
            let mut world = cloth(20, 20, 12.0);
            for _ in 0..60 {
                world.step();
            }
            world.spring_count()
        });
    });
}

criterion_group!(benches, bench_rope_simulation, bench_cloth_simulation);
criterion_main!(benches);

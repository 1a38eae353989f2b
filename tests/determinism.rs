use verlet2d::{BoundaryFrictionConstraint, GravityBehavior, Node, Vec2, World};

fn rope(segments: usize) -> World<f32> {
    let mut world = World::new();
    let mut prev = world.add_node(Node::fixed(Vec2::new(100.0, 20.0)));
    for i in 1..=segments {
        let next = world.add_node(Node::new(Vec2::new(100.0 + 12.0 * i as f32, 20.0)));
        world.add_spring(prev, next, 0.9).unwrap();
        prev = next;
    }
    world.add_behavior(GravityBehavior::new(Vec2::new(0.0, 600.0)));
    world.add_constraint(BoundaryFrictionConstraint::new(400.0, 300.0, 10.0, 0.4));
    world
}

#[test]
fn rope_deterministic() {
    let results: Vec<Vec<Vec2<f32>>> = (0..5).map(|_| {
        let mut world = rope(20);
        for _ in 0..240 {
            world.step();
        }
        world.nodes().iter().map(|(_, n)| n.position).collect()
    }).collect();

    for r in &results[1..] {
        for (a, b) in results[0].iter().zip(r.iter()) {
            assert_eq!(a.x, b.x);
            assert_eq!(a.y, b.y);
        }
    }
}

#[test]
fn rope_hangs_below_anchor_and_stays_finite() {
    let mut world = rope(20);
    for _ in 0..600 {
        world.step();
    }
    let positions: Vec<Vec2<f32>> = world.nodes().iter().map(|(_, n)| n.position).collect();
    assert!(positions.iter().all(|p| p.is_finite()));
    assert_eq!(positions[0], Vec2::new(100.0, 20.0));
    let tail = positions[positions.len() - 1];
    assert!(tail.y > 20.0, "rope tail should hang below the anchor, got {:?}", tail);
}

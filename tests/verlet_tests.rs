use verlet2d::{Node, Vec2, World, GravityBehavior};

#[test]
fn free_node_keeps_its_velocity() {
    let mut n: Node<f64> = Node::with_velocity(Vec2::new(0.0, 0.0), Vec2::new(3.0, -2.0));
    let before = n.position;
    n.update_position(1.0 / 60.0);

    assert_eq!(n.position - before, Vec2::new(3.0, -2.0));
    assert_eq!(n.velocity, Vec2::new(3.0, -2.0));
    assert_eq!(n.position_last, before);
    assert_eq!(n.acceleration, Vec2::zero());
}

#[test]
fn acceleration_is_consumed_once() {
    let mut n: Node<f64> = Node::new(Vec2::new(0.0, 0.0));
    let dt = 0.5;
    n.apply_force(Vec2::new(4.0, 0.0));
    n.update_position(dt);
    assert!((n.position.x - 1.0).abs() < 1e-12, "x = {}", n.position.x);
    assert_eq!(n.acceleration, Vec2::zero());

    // Second step only carries momentum.
    n.update_position(dt);
    assert!((n.position.x - 2.0).abs() < 1e-12, "x = {}", n.position.x);
}

#[test]
fn free_fall_gravity() {
    let mut world: World<f32> = World::new();
    let p = world.add_node(Node::new(Vec2::new(0.0, 100.0)));
    world.add_behavior(GravityBehavior::new(Vec2::new(0.0, -9.81)));

    for _ in 0..60 {
        world.step();
    }

    let y = world.node(p).unwrap().position.y;
    let expected_y = 100.0 - 0.5 * 9.81 * 1.0;
    assert!((y - expected_y).abs() < 1.0, "pos.y = {}, expected ~ {}", y, expected_y);
}

#[test]
fn static_node_stays_fixed() {
    let mut p: Node<f32> = Node::fixed(Vec2::new(5.0, 5.0));
    for _ in 0..10 {
        p.apply_force(Vec2::new(1000.0, 1000.0));
        p.apply_impulse(Vec2::new(-3.0, 7.0));
        p.update_position(1.0 / 60.0);
    }
    assert_eq!(p.position, Vec2::new(5.0, 5.0));
    assert_eq!(p.acceleration, Vec2::zero());
}

#[test]
fn dragged_static_node_does_not_fling_when_unpinned() {
    let mut p: Node<f64> = Node::fixed(Vec2::new(0.0, 0.0));
    p.position = Vec2::new(40.0, 0.0);
    p.update_position(1.0 / 60.0);
    assert_eq!(p.position, Vec2::new(40.0, 0.0));

    p.unpin();
    p.update_position(1.0 / 60.0);
    assert_eq!(p.position, Vec2::new(40.0, 0.0));
    assert_eq!(p.velocity, Vec2::zero());
}

#[test]
fn move_to_teleports_without_velocity() {
    let mut p: Node<f64> = Node::with_velocity(Vec2::new(1.0, 1.0), Vec2::new(2.0, 0.0));
    p.move_to(Vec2::new(-5.0, 3.0));
    p.update_position(1.0 / 60.0);
    assert_eq!(p.position, Vec2::new(-5.0, 3.0));
}

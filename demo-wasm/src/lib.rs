use verlet2d::{
    BoundaryFrictionConstraint, DragInteraction, GravityBehavior, InputSnapshot, Node, NodeHandle,
    Vec2, World,
};
use std::collections::HashMap;
use wasm_bindgen::prelude::*;

// ---- Rope-in-a-box Demo ----

#[wasm_bindgen]
pub struct WorldDemo {
    world: World<f32>,
    drag: DragInteraction<f32>,
    width: f32,
    height: f32,
}

#[wasm_bindgen]
impl WorldDemo {
    #[wasm_bindgen(constructor)]
    pub fn new(width: f32, height: f32, segments: usize) -> Self {
        let mut world = World::new();
        let spacing = 14.0f32;
        let mut prev = world.add_node(Node::fixed(Vec2::new(width * 0.5, 40.0)));
        for i in 1..=segments {
            let next = world.add_node(Node::new(Vec2::new(width * 0.5 + spacing * i as f32, 40.0)));
            world.add_spring(prev, next, 0.9).ok();
            prev = next;
        }
        world.add_behavior(GravityBehavior::new(Vec2::new(0.0, 500.0)));
        world.add_constraint(BoundaryFrictionConstraint::new(width, height, 8.0, 0.5));

        WorldDemo {
            world,
            drag: DragInteraction::new(18.0),
            width,
            height,
        }
    }

    /// Feed this tick's pointer state. Call once per frame before `step`.
    pub fn pointer(&mut self, x: f32, y: f32, pressed: bool) {
        self.drag.update(&mut self.world, InputSnapshot::new(Vec2::new(x, y), pressed));
    }

    /// Returns true if a node was pinned or unpinned.
    pub fn toggle_pin(&mut self, x: f32, y: f32) -> bool {
        self.drag.toggle_pin(&mut self.world, Vec2::new(x, y)).is_some()
    }

    pub fn step(&mut self) {
        self.world.step();
    }

    /// Returns flat [x0, y0, x1, y1, ...] positions
    pub fn positions(&self) -> Vec<f32> {
        let mut out = Vec::with_capacity(self.world.node_count() * 2);
        for (_, n) in self.world.nodes().iter() {
            out.push(n.position.x);
            out.push(n.position.y);
        }
        out
    }

    /// Returns 1 for static nodes and 0 otherwise, in `positions` order
    pub fn static_flags(&self) -> Vec<u8> {
        self.world.nodes().iter().map(|(_, n)| n.is_static as u8).collect()
    }

    /// Returns flat [a0, b0, a1, b1, ...] node indices into `positions`
    pub fn springs(&self) -> Vec<u32> {
        let index_of: HashMap<NodeHandle, u32> = self
            .world
            .nodes()
            .iter()
            .enumerate()
            .map(|(i, (h, _))| (h, i as u32))
            .collect();
        let mut out = Vec::with_capacity(self.world.spring_count() * 2);
        for (_, s) in self.world.springs() {
            if let (Some(&a), Some(&b)) = (index_of.get(&s.a), index_of.get(&s.b)) {
                out.push(a);
                out.push(b);
            }
        }
        out
    }

    pub fn node_count(&self) -> usize {
        self.world.node_count()
    }

    /// Returns [width, height]
    pub fn bounds(&self) -> Vec<f32> {
        vec![self.width, self.height]
    }
}

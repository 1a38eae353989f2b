//! Pointer-driven dragging and pinning.
//!
//! The host samples its pointer once per tick and passes an [`InputSnapshot`]
//! by value; nothing here reads global input state.

use crate::float::Float;
use crate::node::NodeHandle;
use crate::vec::Vec2;
use crate::world::World;

/// Pointer state for one tick.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct InputSnapshot<F: Float> {
    pub position: Vec2<F>,
    pub pressed: bool,
}

impl<F: Float> InputSnapshot<F> {
    pub fn new(position: Vec2<F>, pressed: bool) -> Self {
        InputSnapshot { position, pressed }
    }
}

/// Grabs the nearest node under the pointer and drags it while pressed.
#[derive(Clone, Debug)]
pub struct DragInteraction<F: Float> {
    pick_radius: F,
    grabbed: Option<NodeHandle>,
}

impl<F: Float> DragInteraction<F> {
    pub fn new(pick_radius: F) -> Self {
        DragInteraction { pick_radius, grabbed: None }
    }

    pub fn pick_radius(&self) -> F { self.pick_radius }
    pub fn grabbed(&self) -> Option<NodeHandle> { self.grabbed }

    /// Apply one tick of pointer input to `world`.
    ///
    /// The grabbed node's position is overwritten with the pointer position,
    /// so static nodes can be dragged too. Its history is left alone, which
    /// lets a released free node keep the drag velocity.
    pub fn update(&mut self, world: &mut World<F>, input: InputSnapshot<F>) {
        if !input.pressed {
            self.grabbed = None;
            return;
        }
        if self.grabbed.is_none() {
            self.grabbed = world.nearest_node(input.position, self.pick_radius);
        }
        if let Some(handle) = self.grabbed {
            match world.node_mut(handle) {
                Some(node) => node.position = input.position,
                None => self.grabbed = None,
            }
        }
    }

    /// Flip the static flag of the nearest node within the pick radius.
    pub fn toggle_pin(&self, world: &mut World<F>, point: Vec2<F>) -> Option<NodeHandle> {
        let handle = world.nearest_node(point, self.pick_radius)?;
        let node = world.node_mut(handle)?;
        if node.is_static {
            node.unpin();
        } else {
            node.pin();
        }
        Some(handle)
    }
}

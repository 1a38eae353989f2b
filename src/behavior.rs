//! Per-node force generators applied at the start of every step.

use crate::arena::Key;
use crate::float::Float;
use crate::node::Node;
use crate::vec::Vec2;

/// Constant acceleration applied to every free node.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GravityBehavior<F: Float> {
    pub force: Vec2<F>,
}

impl<F: Float> GravityBehavior<F> {
    pub fn new(force: Vec2<F>) -> Self {
        GravityBehavior { force }
    }

    /// Static nodes are filtered by [`Node::apply_force`].
    pub fn apply(&self, node: &mut Node<F>) {
        node.apply_force(self.force);
    }
}

/// A force generator registered with a [`World`](crate::World).
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Behavior<F: Float> {
    Gravity(GravityBehavior<F>),
}

impl<F: Float> Behavior<F> {
    pub fn apply(&self, node: &mut Node<F>) {
        match self {
            Behavior::Gravity(b) => b.apply(node),
        }
    }
}

impl<F: Float> From<GravityBehavior<F>> for Behavior<F> {
    fn from(b: GravityBehavior<F>) -> Self {
        Behavior::Gravity(b)
    }
}

/// Stable reference to a behavior registered with a [`World`](crate::World).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BehaviorHandle(pub(crate) Key);

//! Verlet point masses and the storage that owns them.

use crate::arena::{Arena, Key};
use crate::float::Float;
use crate::vec::Vec2;

/// A Verlet point mass with implicit velocity.
///
/// `velocity` is not integrated on its own. It is the displacement
/// `position - position_last` observed at the start of the most recent
/// [`update_position`](Node::update_position) call.
#[derive(Clone, Debug, PartialEq)]
pub struct Node<F: Float> {
    pub position: Vec2<F>,
    pub position_last: Vec2<F>,
    pub acceleration: Vec2<F>,
    pub velocity: Vec2<F>,
    pub is_static: bool,
}

impl<F: Float> Node<F> {
    /// A free node at rest.
    pub fn new(position: Vec2<F>) -> Self {
        Node {
            position,
            position_last: position,
            acceleration: Vec2::zero(),
            velocity: Vec2::zero(),
            is_static: false,
        }
    }

    /// A static (anchored) node.
    pub fn fixed(position: Vec2<F>) -> Self {
        Node { is_static: true, ..Node::new(position) }
    }

    /// A free node that starts moving by `velocity` per step.
    pub fn with_velocity(position: Vec2<F>, velocity: Vec2<F>) -> Self {
        Node { position_last: position - velocity, ..Node::new(position) }
    }

    pub fn apply_force(&mut self, force: Vec2<F>) {
        if !self.is_static {
            self.acceleration = self.acceleration + force;
        }
    }

    /// Displace the node directly. Ignored for static nodes.
    pub fn apply_impulse(&mut self, impulse: Vec2<F>) {
        if !self.is_static {
            self.position = self.position + impulse;
        }
    }

    /// Advance one Verlet step of length `dt` and clear the accumulated
    /// acceleration.
    ///
    /// Static nodes stay put and have their history resynced, so unpinning
    /// one later does not fling it.
    pub fn update_position(&mut self, dt: F) {
        if self.is_static {
            self.position_last = self.position;
            self.velocity = Vec2::zero();
            self.acceleration = Vec2::zero();
            return;
        }
        self.velocity = self.position - self.position_last;
        self.position_last = self.position;
        self.position = self.position + self.velocity + self.acceleration.scale(dt * dt);
        self.acceleration = Vec2::zero();
    }

    /// Displacement carried into the next step.
    pub fn velocity_raw(&self) -> Vec2<F> {
        self.position - self.position_last
    }

    pub fn pin(&mut self) {
        self.is_static = true;
        self.position_last = self.position;
    }

    pub fn unpin(&mut self) {
        self.is_static = false;
        self.position_last = self.position;
    }

    /// Teleport the node without giving it velocity. Works on static nodes.
    pub fn move_to(&mut self, position: Vec2<F>) {
        self.position = position;
        self.position_last = position;
    }
}

/// Stable reference to a node owned by a [`NodeSet`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeHandle(pub(crate) Key);

/// Owning container for nodes, addressed by [`NodeHandle`].
pub struct NodeSet<F: Float> {
    nodes: Arena<Node<F>>,
}

impl<F: Float> NodeSet<F> {
    pub fn new() -> Self {
        NodeSet { nodes: Arena::new() }
    }

    pub fn insert(&mut self, node: Node<F>) -> NodeHandle {
        NodeHandle(self.nodes.insert(node))
    }

    pub fn remove(&mut self, handle: NodeHandle) -> Option<Node<F>> {
        self.nodes.remove(handle.0)
    }

    pub fn get(&self, handle: NodeHandle) -> Option<&Node<F>> {
        self.nodes.get(handle.0)
    }

    pub fn get_mut(&mut self, handle: NodeHandle) -> Option<&mut Node<F>> {
        self.nodes.get_mut(handle.0)
    }

    pub fn contains(&self, handle: NodeHandle) -> bool {
        self.nodes.contains(handle.0)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = (NodeHandle, &Node<F>)> {
        self.nodes.iter().map(|(k, n)| (NodeHandle(k), n))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (NodeHandle, &mut Node<F>)> {
        self.nodes.iter_mut().map(|(k, n)| (NodeHandle(k), n))
    }
}

impl<F: Float> Default for NodeSet<F> {
    fn default() -> Self {
        Self::new()
    }
}

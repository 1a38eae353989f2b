//! Distance springs between pairs of nodes.

use crate::arena::Key;
use crate::float::Float;
use crate::node::{NodeHandle, NodeSet};

/// Share the free end `a` receives when `b` is static (1/5). Deliberately not
/// the mirror of the `a`-static case, which applies the full correction to `b`.
fn soft_anchor_share<F: Float>() -> F {
    F::one() / F::from_f32(5.0)
}

/// A distance constraint between two nodes.
///
/// `stiffness` in `[0, 1]` converges in a single relaxation; larger values
/// overshoot and may diverge. Nothing validates it.
#[derive(Clone, Debug, PartialEq)]
pub struct Spring<F: Float> {
    pub a: NodeHandle,
    pub b: NodeHandle,
    pub rest_length: F,
    pub stiffness: F,
}

impl<F: Float> Spring<F> {
    pub fn new(a: NodeHandle, b: NodeHandle, rest_length: F, stiffness: F) -> Self {
        Spring { a, b, rest_length, stiffness }
    }

    /// Spring whose rest length is the current distance between `a` and `b`.
    ///
    /// Returns `None` if either handle is stale.
    pub fn from_nodes(a: NodeHandle, b: NodeHandle, nodes: &NodeSet<F>, stiffness: F) -> Option<Self> {
        let rest_length = nodes.get(a)?.position.distance(nodes.get(b)?.position);
        Some(Spring { a, b, rest_length, stiffness })
    }

    pub fn connects(&self, node: NodeHandle) -> bool {
        self.a == node || self.b == node
    }

    /// Current length, or `None` if an end is missing.
    pub fn length(&self, nodes: &NodeSet<F>) -> Option<F> {
        Some(nodes.get(self.a)?.position.distance(nodes.get(self.b)?.position))
    }

    /// One relaxation pass toward `rest_length`.
    ///
    /// Coincident ends have no direction and are left alone this step.
    pub fn relax(&self, nodes: &mut NodeSet<F>) {
        let (a, b) = match (nodes.get(self.a), nodes.get(self.b)) {
            (Some(a), Some(b)) => (a, b),
            _ => return,
        };
        let delta = a.position - b.position;
        if delta.is_zero() {
            return;
        }
        let a_static = a.is_static;
        let b_static = b.is_static;

        let movement = delta.normalize().scale(self.stiffness * (delta.length() - self.rest_length));

        let (share_a, share_b) = match (a_static, b_static) {
            (false, false) => (F::half(), F::half()),
            (true, false) => (F::zero(), F::one()),
            (false, true) => (soft_anchor_share(), F::zero()),
            (true, true) => return,
        };

        if let Some(a) = nodes.get_mut(self.a) {
            if share_a != F::zero() {
                a.apply_impulse(-movement.scale(share_a));
            }
        }
        if let Some(b) = nodes.get_mut(self.b) {
            if share_b != F::zero() {
                b.apply_impulse(movement.scale(share_b));
            }
        }
    }
}

/// Stable reference to a spring registered with a [`World`](crate::World).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SpringHandle(pub(crate) Key);

//! Hard positional constraints applied right after integration.

use crate::arena::Key;
use crate::float::Float;
use crate::node::Node;
use crate::vec::Vec2;

/// Keeps nodes inside the axis-aligned box `[origin, origin + extent]`.
///
/// The correction is applied as an impulse, so static nodes are untouched.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RectangleConstraint<F: Float> {
    pub origin: Vec2<F>,
    pub extent: Vec2<F>,
}

impl<F: Float> RectangleConstraint<F> {
    pub fn new(origin: Vec2<F>, extent: Vec2<F>) -> Self {
        RectangleConstraint { origin, extent }
    }

    pub fn apply(&self, node: &mut Node<F>) {
        let clamped = node.position.clamp(self.origin, self.origin + self.extent);
        node.apply_impulse(clamped - node.position);
    }
}

/// Walls at `margin` from each edge of a `width` x `height` area.
///
/// A node that crosses a wall is put back on it with its normal velocity
/// absorbed (no bounce). Tangential velocity is reduced by
/// `|normal velocity * friction|`, and stops outright when that is enough.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BoundaryFrictionConstraint<F: Float> {
    pub width: F,
    pub height: F,
    pub margin: F,
    pub friction: F,
}

impl<F: Float> BoundaryFrictionConstraint<F> {
    pub fn new(width: F, height: F, margin: F, friction: F) -> Self {
        BoundaryFrictionConstraint { width, height, margin, friction }
    }

    pub fn apply(&self, node: &mut Node<F>) {
        if node.is_static {
            return;
        }
        let min = self.margin;
        let max_x = self.width - self.margin;
        let max_y = self.height - self.margin;

        // Left and right walls: x is the normal, y the tangent.
        if node.position.x < min || node.position.x > max_x {
            let plane = if node.position.x < min { min } else { max_x };
            resolve_contact(
                &mut node.position.x,
                &mut node.position_last.x,
                node.position.y,
                &mut node.position_last.y,
                plane,
                self.friction,
            );
        }
        // Floor and ceiling: y is the normal, x the tangent.
        if node.position.y < min || node.position.y > max_y {
            let plane = if node.position.y < min { min } else { max_y };
            resolve_contact(
                &mut node.position.y,
                &mut node.position_last.y,
                node.position.x,
                &mut node.position_last.x,
                plane,
                self.friction,
            );
        }
    }
}

fn resolve_contact<F: Float>(
    pos_n: &mut F,
    last_n: &mut F,
    pos_t: F,
    last_t: &mut F,
    plane: F,
    friction: F,
) {
    let normal_vel = *pos_n - *last_n;
    let tangent_vel = pos_t - *last_t;

    *pos_n = plane;
    *last_n = plane;

    let k = (normal_vel * friction).abs();
    if tangent_vel.abs() <= k {
        *last_t = pos_t;
    } else {
        let remaining = tangent_vel - tangent_vel.signum() * k;
        *last_t = pos_t - remaining;
    }
}

/// A positional corrector registered with a [`World`](crate::World).
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Constraint<F: Float> {
    Rectangle(RectangleConstraint<F>),
    BoundaryFriction(BoundaryFrictionConstraint<F>),
}

impl<F: Float> Constraint<F> {
    pub fn apply(&self, node: &mut Node<F>) {
        match self {
            Constraint::Rectangle(c) => c.apply(node),
            Constraint::BoundaryFriction(c) => c.apply(node),
        }
    }
}

impl<F: Float> From<RectangleConstraint<F>> for Constraint<F> {
    fn from(c: RectangleConstraint<F>) -> Self {
        Constraint::Rectangle(c)
    }
}

impl<F: Float> From<BoundaryFrictionConstraint<F>> for Constraint<F> {
    fn from(c: BoundaryFrictionConstraint<F>) -> Self {
        Constraint::BoundaryFriction(c)
    }
}

/// Stable reference to a constraint registered with a [`World`](crate::World).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ConstraintHandle(pub(crate) Key);

//! Error types for world registration and lookup.

use core::fmt;

/// Errors returned by [`World`](crate::World) registration and removal calls.
///
/// Stepping never fails; these only cover stale handles and degenerate springs.
#[derive(Debug, Clone, PartialEq)]
pub enum PhysicsError {
    /// The node handle is stale or was never issued by this world.
    NodeNotFound,
    /// The spring handle is stale or was never issued by this world.
    SpringNotFound,
    /// Both ends of a spring refer to the same node.
    DegenerateSpring,
    /// The behavior handle is stale or was never issued by this world.
    BehaviorNotFound,
    /// The constraint handle is stale or was never issued by this world.
    ConstraintNotFound,
}

impl fmt::Display for PhysicsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PhysicsError::NodeNotFound => write!(f, "node handle is not live in this world"),
            PhysicsError::SpringNotFound => write!(f, "spring handle is not live in this world"),
            PhysicsError::DegenerateSpring => write!(f, "spring must connect two distinct nodes"),
            PhysicsError::BehaviorNotFound => write!(f, "behavior handle is not live in this world"),
            PhysicsError::ConstraintNotFound => write!(f, "constraint handle is not live in this world"),
        }
    }
}

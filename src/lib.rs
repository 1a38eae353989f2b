//! 2D point-mass physics with Verlet integration.
//!
//! `verlet2d` simulates nodes (point masses) connected by distance springs,
//! pushed by per-node behaviors such as gravity and kept in place by hard
//! constraints such as a friction box. It does not render or read input: a
//! host calls [`World::step`] once per tick, reads node positions to draw,
//! and may overwrite positions or static flags to drag and pin nodes.
//!
//! # Features
//!
//! - **Verlet integration**: Position-based dynamics with implicit velocity
//! - **Springs**: Single-pass relaxation with soft-anchor weighting
//! - **Boundaries**: Rectangle clamping and walls with Coulomb-like friction
//! - **Stable handles**: Removing a node never leaves a spring dangling
//! - **Observable**: Monitor step phases via the `StepObserver` trait
//! - **`no_std` compatible**: Works in embedded and WASM environments
//!
//! # Example
//! ```
//! use verlet2d::{GravityBehavior, Node, Vec2, World};
//!
//! let mut world: World<f64> = World::new();
//! let anchor = world.add_node(Node::fixed(Vec2::new(0.0, 0.0)));
//! let bob = world.add_node(Node::new(Vec2::new(10.0, 0.0)));
//! world.add_spring(anchor, bob, 0.5).unwrap();
//! world.add_behavior(GravityBehavior::new(Vec2::new(0.0, 98.0)));
//!
//! for _ in 0..60 {
//!     world.step();
//! }
//! assert!(world.node(bob).unwrap().position.y > 0.0);
//! ```

#![no_std]

extern crate alloc;

mod arena;

pub mod float;
pub mod vec;
pub mod node;
pub mod spring;
pub mod behavior;
pub mod constraint;
pub mod world;
pub mod interaction;
pub mod observer;
pub mod config;
pub mod error;

// Re-export primary API
pub use float::Float;
pub use vec::Vec2;
pub use node::{Node, NodeHandle, NodeSet};
pub use spring::{Spring, SpringHandle};
pub use behavior::{Behavior, BehaviorHandle, GravityBehavior};
pub use constraint::{Constraint, ConstraintHandle, RectangleConstraint, BoundaryFrictionConstraint};
pub use world::World;
pub use interaction::{DragInteraction, InputSnapshot};
pub use config::WorldConfig;
pub use observer::{StepObserver, NoOpStepObserver};
pub use error::PhysicsError;

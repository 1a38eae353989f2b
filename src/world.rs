//! The simulation world: owns every node, spring, behavior and constraint.

use crate::arena::Arena;
use crate::behavior::{Behavior, BehaviorHandle};
use crate::config::WorldConfig;
use crate::constraint::{Constraint, ConstraintHandle};
use crate::error::PhysicsError;
use crate::float::Float;
use crate::node::{Node, NodeHandle, NodeSet};
use crate::observer::{NoOpStepObserver, StepObserver};
use crate::spring::{Spring, SpringHandle};
use crate::vec::Vec2;

/// A fixed-timestep Verlet world.
///
/// Each [`step`](World::step) runs, in this order: behaviors, integration,
/// constraints, springs. Constraints correct the free Verlet move before
/// springs relax, so springs always work against legal positions.
pub struct World<F: Float> {
    nodes: NodeSet<F>,
    springs: Arena<Spring<F>>,
    behaviors: Arena<Behavior<F>>,
    constraints: Arena<Constraint<F>>,
    config: WorldConfig<F>,
}

impl<F: Float> World<F> {
    pub fn new() -> Self {
        Self::with_config(WorldConfig::new())
    }

    pub fn with_config(config: WorldConfig<F>) -> Self {
        World {
            nodes: NodeSet::new(),
            springs: Arena::new(),
            behaviors: Arena::new(),
            constraints: Arena::new(),
            config,
        }
    }

    pub fn config(&self) -> &WorldConfig<F> { &self.config }
    pub fn delta_time(&self) -> F { self.config.delta_time }

    // ---- nodes ----

    pub fn add_node(&mut self, node: Node<F>) -> NodeHandle {
        self.nodes.insert(node)
    }

    /// Remove a node together with every spring attached to it.
    pub fn remove_node(&mut self, handle: NodeHandle) -> Result<Node<F>, PhysicsError> {
        let node = self.nodes.remove(handle).ok_or(PhysicsError::NodeNotFound)?;
        self.springs.retain(|s| !s.connects(handle));
        Ok(node)
    }

    pub fn node(&self, handle: NodeHandle) -> Option<&Node<F>> { self.nodes.get(handle) }
    pub fn node_mut(&mut self, handle: NodeHandle) -> Option<&mut Node<F>> { self.nodes.get_mut(handle) }
    pub fn nodes(&self) -> &NodeSet<F> { &self.nodes }
    pub fn node_count(&self) -> usize { self.nodes.len() }

    /// Closest node to `point` no further than `radius` away.
    pub fn nearest_node(&self, point: Vec2<F>, radius: F) -> Option<NodeHandle> {
        let mut best: Option<(NodeHandle, F)> = None;
        for (handle, node) in self.nodes.iter() {
            let d2 = node.position.distance_sq(point);
            if d2 > radius * radius {
                continue;
            }
            match best {
                Some((_, best_d2)) if best_d2 <= d2 => {}
                _ => best = Some((handle, d2)),
            }
        }
        best.map(|(handle, _)| handle)
    }

    // ---- springs ----

    /// Connect two nodes with a spring whose rest length is their current
    /// distance.
    pub fn add_spring(
        &mut self,
        a: NodeHandle,
        b: NodeHandle,
        stiffness: F,
    ) -> Result<SpringHandle, PhysicsError> {
        self.check_spring_ends(a, b)?;
        let spring = Spring::from_nodes(a, b, &self.nodes, stiffness).ok_or(PhysicsError::NodeNotFound)?;
        Ok(SpringHandle(self.springs.insert(spring)))
    }

    pub fn add_spring_with_rest_length(
        &mut self,
        a: NodeHandle,
        b: NodeHandle,
        rest_length: F,
        stiffness: F,
    ) -> Result<SpringHandle, PhysicsError> {
        self.check_spring_ends(a, b)?;
        Ok(SpringHandle(self.springs.insert(Spring::new(a, b, rest_length, stiffness))))
    }

    fn check_spring_ends(&self, a: NodeHandle, b: NodeHandle) -> Result<(), PhysicsError> {
        if !self.nodes.contains(a) || !self.nodes.contains(b) {
            return Err(PhysicsError::NodeNotFound);
        }
        if a == b {
            return Err(PhysicsError::DegenerateSpring);
        }
        Ok(())
    }

    pub fn remove_spring(&mut self, handle: SpringHandle) -> Result<Spring<F>, PhysicsError> {
        self.springs.remove(handle.0).ok_or(PhysicsError::SpringNotFound)
    }

    pub fn spring(&self, handle: SpringHandle) -> Option<&Spring<F>> { self.springs.get(handle.0) }
    pub fn spring_mut(&mut self, handle: SpringHandle) -> Option<&mut Spring<F>> { self.springs.get_mut(handle.0) }
    pub fn spring_count(&self) -> usize { self.springs.len() }

    /// Springs in relaxation order.
    pub fn springs(&self) -> impl Iterator<Item = (SpringHandle, &Spring<F>)> {
        self.springs.iter().map(|(k, s)| (SpringHandle(k), s))
    }

    // ---- behaviors & constraints ----

    pub fn add_behavior(&mut self, behavior: impl Into<Behavior<F>>) -> BehaviorHandle {
        BehaviorHandle(self.behaviors.insert(behavior.into()))
    }

    pub fn remove_behavior(&mut self, handle: BehaviorHandle) -> Result<Behavior<F>, PhysicsError> {
        self.behaviors.remove(handle.0).ok_or(PhysicsError::BehaviorNotFound)
    }

    pub fn behavior(&self, handle: BehaviorHandle) -> Option<&Behavior<F>> { self.behaviors.get(handle.0) }
    pub fn behavior_count(&self) -> usize { self.behaviors.len() }

    /// Behaviors in application order.
    pub fn behaviors(&self) -> impl Iterator<Item = (BehaviorHandle, &Behavior<F>)> {
        self.behaviors.iter().map(|(k, b)| (BehaviorHandle(k), b))
    }

    pub fn add_constraint(&mut self, constraint: impl Into<Constraint<F>>) -> ConstraintHandle {
        ConstraintHandle(self.constraints.insert(constraint.into()))
    }

    pub fn remove_constraint(&mut self, handle: ConstraintHandle) -> Result<Constraint<F>, PhysicsError> {
        self.constraints.remove(handle.0).ok_or(PhysicsError::ConstraintNotFound)
    }

    pub fn constraint(&self, handle: ConstraintHandle) -> Option<&Constraint<F>> { self.constraints.get(handle.0) }
    pub fn constraint_count(&self) -> usize { self.constraints.len() }

    /// Constraints in application order.
    pub fn constraints(&self) -> impl Iterator<Item = (ConstraintHandle, &Constraint<F>)> {
        self.constraints.iter().map(|(k, c)| (ConstraintHandle(k), c))
    }

    // ---- stepping ----

    /// Advance the simulation by one fixed `delta_time`.
    pub fn step(&mut self) {
        self.step_with(&mut NoOpStepObserver);
    }

    pub fn step_with<O: StepObserver>(&mut self, observer: &mut O) {
        let dt = self.config.delta_time;

        for (_, behavior) in self.behaviors.iter() {
            for (_, node) in self.nodes.iter_mut() {
                behavior.apply(node);
            }
        }
        observer.on_behaviors_applied();

        for (_, node) in self.nodes.iter_mut() {
            node.update_position(dt);
        }
        observer.on_integrate();

        for (_, constraint) in self.constraints.iter() {
            for (_, node) in self.nodes.iter_mut() {
                constraint.apply(node);
            }
        }
        observer.on_constraints_applied();

        for (_, spring) in self.springs.iter() {
            spring.relax(&mut self.nodes);
        }
        observer.on_springs_relaxed();

        observer.on_step_complete();
    }
}

impl<F: Float> Default for World<F> {
    fn default() -> Self {
        Self::new()
    }
}

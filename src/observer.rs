//! Step observer trait for monitoring simulation progress.

/// Trait for observing the phases of [`World::step_with`](crate::World::step_with).
///
/// Implement this to count, time or trace steps. All methods default to
/// no-ops, and hooks fire in phase order.
pub trait StepObserver {
    /// Called after every behavior has been applied to every node.
    fn on_behaviors_applied(&mut self) {}

    /// Called after all nodes have been integrated (Verlet step).
    fn on_integrate(&mut self) {}

    /// Called after every constraint has been applied to every node.
    fn on_constraints_applied(&mut self) {}

    /// Called after each spring has been relaxed once.
    fn on_springs_relaxed(&mut self) {}

    /// Called when a simulation step is fully complete.
    fn on_step_complete(&mut self) {}
}

/// A no-op observer. Used by [`World::step`](crate::World::step).
pub struct NoOpStepObserver;

impl StepObserver for NoOpStepObserver {}

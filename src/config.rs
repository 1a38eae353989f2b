//! Configuration types for the world.

use crate::float::Float;

/// Configuration for a [`World`](crate::World).
///
/// # Builder Pattern
/// ```
/// use verlet2d::config::WorldConfig;
///
/// let config: WorldConfig<f32> = WorldConfig::new().with_delta_time(1.0 / 120.0);
/// assert!((config.delta_time - 1.0 / 120.0).abs() < 1e-9);
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct WorldConfig<F: Float> {
    /// Fixed timestep used by every call to `step`. The host accumulates or
    /// drops wall-clock time to match it. Default: 1/60.
    pub delta_time: F,
}

impl<F: Float> WorldConfig<F> {
    /// Create a new config with default values.
    pub fn new() -> Self {
        WorldConfig {
            delta_time: Self::default_delta_time(),
        }
    }

    /// Set the fixed timestep. Non-positive or non-finite values keep the
    /// default.
    pub fn with_delta_time(mut self, delta_time: F) -> Self {
        self.delta_time = if delta_time.is_finite() && delta_time > F::zero() {
            delta_time
        } else {
            Self::default_delta_time()
        };
        self
    }

    fn default_delta_time() -> F {
        F::one() / F::from_f32(60.0)
    }
}

impl<F: Float> Default for WorldConfig<F> {
    fn default() -> Self {
        Self::new()
    }
}

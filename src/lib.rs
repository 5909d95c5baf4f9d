//! A steering-behavior movement library built in Rust
//!
//! This crate provides:
//! - Classic steering behaviors (seek, flee, pursue, evade, arrive, align,
//!   face, wander) as pure kinematic functions
//! - A per-tick motion integrator with speed and rotation limits
//! - A headless phase selector recreating the hunter/wolf chase demo
//!
//! Behaviors take immutable agent and target state and return an
//! acceleration request; the integrator is the only thing that mutates an
//! agent. Wander's random walk is explicitly seeded, so whole runs are
//! reproducible.

pub mod integrator;
pub mod kinematics;
pub mod params;
pub mod scenario;
pub mod steering;

// Re-exports for convenience
pub use glam;

/// Prelude module for common imports
pub mod prelude {
    pub use crate::integrator::integrate;
    pub use crate::kinematics::{Kinematic, orientation_vector, wrap_angle};
    pub use crate::params::{ParamsError, SteeringParams};
    pub use crate::scenario::{Drive, MapState, Npc, Scenario, ScenarioError};
    pub use crate::steering::{
        Align, Arrive, BehaviorKind, Evade, Face, Flee, Pursue, Seek, SteeringBehavior,
        SteeringOutput, Wander, angular_acceleration, linear_acceleration, predicted_position,
    };
    pub use glam::Vec3;
}

//! Steering behaviors for autonomous agents
//!
//! Each behavior converts an agent's kinematic state and a target's state
//! into a linear and/or angular acceleration request. Behaviors read the
//! states passed on every call and never own or cache their target; wander
//! is the only one with internal state. A separate integrator applies the
//! requests to the agent.

mod angular;
mod linear;
mod wander;

pub use angular::{Align, Face};
pub use linear::{Arrive, Evade, Flee, Pursue, Seek, predicted_position};
pub use wander::Wander;

use glam::Vec3;

use crate::kinematics::Kinematic;
use crate::params::SteeringParams;

/// Output from a steering behavior
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SteeringOutput {
    /// Requested linear acceleration
    pub linear: Vec3,
    /// Requested angular acceleration (yaw)
    pub angular: f32,
}

impl SteeringOutput {
    /// Zero steering
    pub const ZERO: Self = Self {
        linear: Vec3::ZERO,
        angular: 0.0,
    };

    /// Linear-only output
    #[must_use]
    pub fn from_linear(linear: Vec3) -> Self {
        Self {
            linear,
            angular: 0.0,
        }
    }

    /// Angular-only output
    #[must_use]
    pub fn from_angular(angular: f32) -> Self {
        Self {
            linear: Vec3::ZERO,
            angular,
        }
    }

    /// Combine with another steering output
    #[must_use]
    pub fn combine(self, other: Self) -> Self {
        Self {
            linear: self.linear + other.linear,
            angular: self.angular + other.angular,
        }
    }

    /// True if both channels are finite
    #[must_use]
    pub fn is_finite(self) -> bool {
        self.linear.is_finite() && self.angular.is_finite()
    }
}

/// Trait for steering behaviors
///
/// `agent` and `target` are immutable snapshots supplied by the caller each
/// invocation. Implementors must return a defined zero result on degenerate
/// geometry rather than NaN.
pub trait SteeringBehavior {
    /// Calculate steering for `agent` against `target`.
    fn steer(
        &mut self,
        agent: &Kinematic,
        target: &Kinematic,
        params: &SteeringParams,
    ) -> SteeringOutput;
}

/// Selector for the linear behaviors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BehaviorKind {
    /// Full acceleration straight at the target
    Seek,
    /// Full acceleration straight away from the target
    Flee,
    /// Seek the target's predicted position
    Pursue,
    /// Flee the target's predicted position
    Evade,
    /// Seek with a deceleration zone around the target
    Arrive,
}

/// Compute the linear acceleration request for one of the linear behaviors.
#[must_use]
pub fn linear_acceleration(
    kind: BehaviorKind,
    agent: &Kinematic,
    target: &Kinematic,
    params: &SteeringParams,
) -> Vec3 {
    let output = match kind {
        BehaviorKind::Seek => Seek.steer(agent, target, params),
        BehaviorKind::Flee => Flee.steer(agent, target, params),
        BehaviorKind::Pursue => Pursue.steer(agent, target, params),
        BehaviorKind::Evade => Evade.steer(agent, target, params),
        BehaviorKind::Arrive => Arrive.steer(agent, target, params),
    };
    output.linear
}

/// Compute the angular acceleration request to match the target's
/// orientation.
///
/// This is Align; use [`Face`] to turn toward the target's position instead
/// of matching its heading.
#[must_use]
pub fn angular_acceleration(agent: &Kinematic, target: &Kinematic, params: &SteeringParams) -> f32 {
    Align.steer(agent, target, params).angular
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_steering_output_combine() {
        let a = SteeringOutput {
            linear: Vec3::X,
            angular: 1.0,
        };
        let b = SteeringOutput {
            linear: Vec3::Y,
            angular: 2.0,
        };

        let combined = a.combine(b);
        assert!((combined.linear - Vec3::new(1.0, 1.0, 0.0)).length() < 0.01);
        assert!((combined.angular - 3.0).abs() < 0.01);
    }

    #[test]
    fn test_steering_output_finite_check() {
        assert!(SteeringOutput::ZERO.is_finite());
        assert!(!SteeringOutput::from_linear(Vec3::NAN).is_finite());
        assert!(!SteeringOutput::from_angular(f32::INFINITY).is_finite());
    }

    #[test]
    fn test_dispatch_matches_behavior_structs() {
        let params = SteeringParams::default();
        let agent = Kinematic::at(Vec3::ZERO);
        let target = Kinematic::at(Vec3::new(3.0, 0.0, 4.0));

        let dispatched = linear_acceleration(BehaviorKind::Seek, &agent, &target, &params);
        let direct = Seek.steer(&agent, &target, &params).linear;

        assert_eq!(dispatched, direct);
    }
}

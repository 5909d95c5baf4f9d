//! Linear steering behaviors: seek, flee, pursue, evade, arrive

use glam::Vec3;

use crate::kinematics::Kinematic;
use crate::params::SteeringParams;

use super::{SteeringBehavior, SteeringOutput};

/// Seek behavior: full acceleration straight at the target.
#[derive(Debug, Clone, Copy, Default)]
pub struct Seek;

impl SteeringBehavior for Seek {
    fn steer(
        &mut self,
        agent: &Kinematic,
        target: &Kinematic,
        params: &SteeringParams,
    ) -> SteeringOutput {
        let direction = (target.position - agent.position).normalize_or_zero();
        SteeringOutput::from_linear(direction * params.max_acceleration)
    }
}

/// Flee behavior: full acceleration straight away from the target.
#[derive(Debug, Clone, Copy, Default)]
pub struct Flee;

impl SteeringBehavior for Flee {
    fn steer(
        &mut self,
        agent: &Kinematic,
        target: &Kinematic,
        params: &SteeringParams,
    ) -> SteeringOutput {
        let direction = (agent.position - target.position).normalize_or_zero();
        SteeringOutput::from_linear(direction * params.max_acceleration)
    }
}

/// Predicted future position of `target`, compensating for its motion.
///
/// The look-ahead shrinks with closing time and is capped at
/// `params.max_prediction` when the agent is slow relative to the distance.
/// A first-order aim point, not a true intercept solve.
#[must_use]
pub fn predicted_position(agent: &Kinematic, target: &Kinematic, params: &SteeringParams) -> Vec3 {
    let distance = (target.position - agent.position).length();
    let speed = agent.speed();

    let prediction = if speed <= distance / params.max_prediction {
        params.max_prediction
    } else {
        distance / speed
    };

    target.position + target.velocity * prediction
}

/// Pursue behavior: seek the target's predicted position.
#[derive(Debug, Clone, Copy, Default)]
pub struct Pursue;

impl SteeringBehavior for Pursue {
    fn steer(
        &mut self,
        agent: &Kinematic,
        target: &Kinematic,
        params: &SteeringParams,
    ) -> SteeringOutput {
        let aim = predicted_position(agent, target, params);
        Seek.steer(agent, &Kinematic::at(aim), params)
    }
}

/// Evade behavior: flee the target's predicted position.
///
/// Not inverse pursue on the raw position; an evading agent still
/// anticipates interception.
#[derive(Debug, Clone, Copy, Default)]
pub struct Evade;

impl SteeringBehavior for Evade {
    fn steer(
        &mut self,
        agent: &Kinematic,
        target: &Kinematic,
        params: &SteeringParams,
    ) -> SteeringOutput {
        let aim = predicted_position(agent, target, params);
        Flee.steer(agent, &Kinematic::at(aim), params)
    }
}

/// Arrive behavior: seek with a deceleration zone around the target.
///
/// Speed ramps down linearly inside `slow_radius` and drops to zero inside
/// `target_radius`; the output chases the ramped velocity over
/// `time_to_target` rather than snapping to it.
#[derive(Debug, Clone, Copy, Default)]
pub struct Arrive;

/// Speed the arrive ramp asks for at a given distance.
fn arrive_target_speed(distance: f32, params: &SteeringParams) -> f32 {
    if distance < params.target_radius {
        0.0
    } else if distance > params.slow_radius {
        params.max_speed
    } else {
        params.max_speed * distance / params.slow_radius
    }
}

impl SteeringBehavior for Arrive {
    fn steer(
        &mut self,
        agent: &Kinematic,
        target: &Kinematic,
        params: &SteeringParams,
    ) -> SteeringOutput {
        let to_target = target.position - agent.position;
        let distance = to_target.length();

        // No direction to ramp along
        if distance == 0.0 {
            return SteeringOutput::ZERO;
        }

        let target_velocity = to_target / distance * arrive_target_speed(distance, params);
        let mut acceleration = (target_velocity - agent.velocity) / params.time_to_target;

        if acceleration.length() > params.max_acceleration {
            acceleration = acceleration.normalize_or_zero() * params.max_acceleration;
        }

        SteeringOutput::from_linear(acceleration)
    }
}

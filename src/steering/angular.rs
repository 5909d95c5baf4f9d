//! Angular steering behaviors: align and face

use glam::Vec3;

use crate::kinematics::{Kinematic, wrap_angle};
use crate::params::SteeringParams;

use super::{SteeringBehavior, SteeringOutput};

/// Align behavior: match the target's orientation with a deceleration zone.
///
/// The angular analogue of arrive. Rotation speed ramps down inside
/// `angular_slow_radius`; inside `angular_target_radius` the behavior
/// returns zero and leaves any residual rotation for the integrator to run
/// out. Align never writes agent state.
#[derive(Debug, Clone, Copy, Default)]
pub struct Align;

impl Align {
    /// Angular acceleration toward an explicit goal orientation.
    #[must_use]
    pub fn toward(agent: &Kinematic, goal_orientation: f32, params: &SteeringParams) -> f32 {
        let rotation = wrap_angle(goal_orientation - agent.orientation);
        let rotation_size = rotation.abs();

        if rotation_size < params.angular_target_radius {
            return 0.0;
        }

        let target_speed = if rotation_size > params.angular_slow_radius {
            params.max_rotation
        } else {
            params.max_rotation * rotation_size / params.angular_slow_radius
        };

        let target_rotation = target_speed * rotation.signum();
        let angular = (target_rotation - agent.rotation) / params.time_to_target;

        if angular.abs() > params.max_angular_acceleration {
            return params.max_angular_acceleration * angular.signum();
        }
        angular
    }
}

impl SteeringBehavior for Align {
    fn steer(
        &mut self,
        agent: &Kinematic,
        target: &Kinematic,
        params: &SteeringParams,
    ) -> SteeringOutput {
        SteeringOutput::from_angular(Self::toward(agent, target.orientation, params))
    }
}

/// Face behavior: align toward the direction of the target's position.
///
/// Composed from align with an orientation synthesized from the direction to
/// the target, not the target's own heading.
#[derive(Debug, Clone, Copy, Default)]
pub struct Face;

impl SteeringBehavior for Face {
    fn steer(
        &mut self,
        agent: &Kinematic,
        target: &Kinematic,
        params: &SteeringParams,
    ) -> SteeringOutput {
        let direction = target.position - agent.position;
        // Coincident positions define no facing
        if direction == Vec3::ZERO {
            return SteeringOutput::ZERO;
        }

        let goal = direction.x.atan2(direction.z);
        SteeringOutput::from_angular(Align::toward(agent, goal, params))
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::PI;

    use super::*;

    fn params() -> SteeringParams {
        SteeringParams::default()
    }

    #[test]
    fn test_align_zero_rotation_yields_zero() {
        let agent = Kinematic::facing(Vec3::ZERO, 1.0);
        let target = Kinematic::facing(Vec3::X, 1.0);

        let output = Align.steer(&agent, &target, &params());
        assert_eq!(output.angular, 0.0);
    }

    #[test]
    fn test_align_does_not_mutate_agent() {
        let mut agent = Kinematic::facing(Vec3::ZERO, 0.0);
        agent.rotation = 2.0;
        let before = agent;
        let target = Kinematic::facing(Vec3::X, 0.001);

        Align.steer(&agent, &target, &params());
        assert_eq!(agent, before);
    }

    #[test]
    fn test_align_takes_shortest_way_around() {
        // From +3 rad to -3 rad the short way is forward through PI
        let agent = Kinematic::facing(Vec3::ZERO, 3.0);
        let target = Kinematic::facing(Vec3::X, -3.0);

        let output = Align.steer(&agent, &target, &params());
        assert!(output.angular > 0.0);
    }

    #[test]
    fn test_align_clamps_to_max_angular_acceleration() {
        let p = params();
        for goal in [-PI, -1.0, -0.1, 0.1, 1.0, PI] {
            let agent = Kinematic::facing(Vec3::ZERO, 0.0);
            let angular = Align::toward(&agent, goal, &p);
            assert!(
                angular.abs() <= p.max_angular_acceleration + 1e-4,
                "goal {goal} produced {angular}"
            );
        }
    }

    #[test]
    fn test_align_ramps_inside_slow_radius() {
        // Well inside the slow zone the requested rotation is proportional
        let p = params()
            .with_rotation_limits(2.0, 100.0)
            .with_angular_radii(0.01, 1.0)
            .with_time_to_target(1.0);
        let agent = Kinematic::facing(Vec3::ZERO, 0.0);

        let half = Align::toward(&agent, 0.5, &p);
        assert!((half - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_face_turns_toward_target_position() {
        // Target due +X of an agent facing +Z: goal orientation is PI/2
        let agent = Kinematic::facing(Vec3::ZERO, 0.0);
        let target = Kinematic::at(Vec3::new(10.0, 0.0, 0.0));

        let output = Face.steer(&agent, &target, &params());
        assert!(output.angular > 0.0);
    }

    #[test]
    fn test_face_ignores_target_heading() {
        let agent = Kinematic::facing(Vec3::ZERO, 0.0);
        let ahead = Kinematic::facing(Vec3::new(0.0, 0.0, 5.0), PI);

        // Already facing the target's position; its own heading is irrelevant
        let output = Face.steer(&agent, &ahead, &params());
        assert_eq!(output.angular, 0.0);
    }

    #[test]
    fn test_face_coincident_returns_zero() {
        let agent = Kinematic::facing(Vec3::ONE, 0.3);
        let target = Kinematic::at(Vec3::ONE);

        let output = Face.steer(&agent, &target, &params());
        assert_eq!(output, SteeringOutput::ZERO);
    }
}

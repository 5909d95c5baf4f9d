//! Kinematic state for steering agents

use std::f32::consts::{PI, TAU};

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Kinematic state of a single agent.
///
/// Orientation is independent state, not derived from velocity: an agent can
/// move in a direction it is not facing. Behaviors read this state; the
/// integrator is the only thing that mutates it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Kinematic {
    /// Position in world space
    pub position: Vec3,
    /// Facing angle in radians (0 faces +Z)
    pub orientation: f32,
    /// Linear velocity
    pub velocity: Vec3,
    /// Rotation rate in radians per second
    pub rotation: f32,
}

impl Kinematic {
    /// Create a kinematic state at rest at the given position.
    #[must_use]
    pub fn at(position: Vec3) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    /// Create a kinematic state at rest with a facing angle.
    #[must_use]
    pub fn facing(position: Vec3, orientation: f32) -> Self {
        Self {
            position,
            orientation,
            ..Default::default()
        }
    }

    /// Current speed.
    #[must_use]
    pub fn speed(&self) -> f32 {
        self.velocity.length()
    }

    /// Unit vector along the current facing.
    #[must_use]
    pub fn heading(&self) -> Vec3 {
        orientation_vector(self.orientation)
    }
}

/// Unit vector for a facing angle: 0 faces +Z, angles grow towards +X.
#[must_use]
pub fn orientation_vector(angle: f32) -> Vec3 {
    Vec3::new(angle.sin(), 0.0, angle.cos())
}

/// Wrap an angle into the `(-PI, PI]` interval.
///
/// Single modulo-based wrap; terminates for any finite input.
#[must_use]
pub fn wrap_angle(angle: f32) -> f32 {
    PI - (PI - angle).rem_euclid(TAU)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orientation_vector_convention() {
        // Zero faces +Z
        assert!((orientation_vector(0.0) - Vec3::Z).length() < 1e-6);
        // A quarter turn faces +X
        assert!((orientation_vector(PI / 2.0) - Vec3::X).length() < 1e-6);
    }

    #[test]
    fn test_wrap_angle_range() {
        for theta in [-10.0, -PI, -1.0, 0.0, 1.0, PI, 10.0, 100.0_f32] {
            let wrapped = wrap_angle(theta);
            assert!(wrapped > -PI && wrapped <= PI, "wrap({theta}) = {wrapped}");
        }
    }

    #[test]
    fn test_wrap_angle_identities() {
        assert_eq!(wrap_angle(0.0), 0.0);
        assert!((wrap_angle(PI) - PI).abs() < 1e-6);
        assert!((wrap_angle(3.0 * PI / 2.0) - (-PI / 2.0)).abs() < 1e-6);
        assert!((wrap_angle(TAU + 0.5) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_heading_follows_orientation() {
        let kin = Kinematic::facing(Vec3::ZERO, PI / 2.0);
        assert!((kin.heading() - Vec3::X).length() < 1e-6);
    }
}

//! Per-tick motion integration
//!
//! Applies a behavior's acceleration request to an agent's kinematic state.
//! This is the only place agent state is mutated; it enforces the same speed
//! and rotation limits the behaviors assume and refuses to pass non-finite
//! steering into shared state.

use crate::kinematics::{Kinematic, wrap_angle};
use crate::params::SteeringParams;
use crate::steering::SteeringOutput;

/// Advance `kin` by `dt` seconds under the requested steering.
///
/// Position and orientation move first, on the current velocities; the
/// acceleration request then updates velocity (clamped to
/// `params.max_speed`) and rotation rate (clamped to `params.max_rotation`).
/// A NaN or infinite request is treated as zero steering.
pub fn integrate(kin: &mut Kinematic, steering: SteeringOutput, params: &SteeringParams, dt: f32) {
    let steering = if steering.is_finite() {
        steering
    } else {
        SteeringOutput::ZERO
    };

    kin.position += kin.velocity * dt;
    kin.orientation = wrap_angle(kin.orientation + kin.rotation * dt);

    kin.velocity = (kin.velocity + steering.linear * dt).clamp_length_max(params.max_speed);
    kin.rotation =
        (kin.rotation + steering.angular * dt).clamp(-params.max_rotation, params.max_rotation);
}

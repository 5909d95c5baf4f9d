//! Wander behavior with a seeded random-walk heading

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::kinematics::{Kinematic, orientation_vector};
use crate::params::SteeringParams;

use super::{Align, SteeringBehavior, SteeringOutput};

/// Wander behavior: a drifting heading offset producing continuous
/// undirected motion.
///
/// The only behavior with cross-tick memory. Each step the heading offset
/// takes a uniform random step, a wander circle is projected
/// `wander_offset` ahead of the agent, and the steering target sits on that
/// circle at the drifted angle. The linear request always has magnitude
/// `max_acceleration`; the angular request aligns the agent with its
/// direction of travel.
///
/// Every instance owns its offset and RNG. Seed per agent for reproducible
/// runs; two instances with the same seed produce identical sequences.
#[derive(Debug, Clone)]
pub struct Wander {
    /// Accumulated random-walk offset from the agent's facing
    wander_orientation: f32,
    rng: SmallRng,
}

impl Wander {
    /// Create a wander state from a seed.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            wander_orientation: 0.0,
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Current heading offset (for debug overlays).
    #[must_use]
    pub fn wander_orientation(&self) -> f32 {
        self.wander_orientation
    }

    /// Advance the random walk and compute this step's steering.
    ///
    /// Returns both channels; the agent itself is not touched.
    pub fn step(&mut self, agent: &Kinematic, params: &SteeringParams) -> SteeringOutput {
        self.wander_orientation += self.rng.gen_range(-1.0..=1.0) * params.wander_rate;

        let target_orientation = agent.orientation + self.wander_orientation;
        let center = agent.position + orientation_vector(agent.orientation) * params.wander_offset;
        let wander_target = center + orientation_vector(target_orientation) * params.wander_radius;

        let steering = wander_target - agent.position;
        let linear = steering.normalize_or_zero() * params.max_acceleration;

        let goal = steering.x.atan2(steering.z);
        let angular = Align::toward(agent, goal, params);

        SteeringOutput { linear, angular }
    }
}

impl SteeringBehavior for Wander {
    /// Wander ignores the supplied target; it synthesizes its own.
    fn steer(
        &mut self,
        agent: &Kinematic,
        _target: &Kinematic,
        params: &SteeringParams,
    ) -> SteeringOutput {
        self.step(agent, params)
    }
}

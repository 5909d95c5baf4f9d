//! Phase selector for the hunter/wolf demo
//!
//! A map (level) moves through numbered states; each state despawns the
//! current cast and spawns a pair of agents wired to chase or flee each
//! other.
//! This is a state variable for the map itself, not for any one agent. The
//! original demo switched states on number-key input; here the state number
//! arrives as a plain argument so any front end can drive it.

use std::f32::consts::PI;

use glam::Vec3;
use rand::rngs::SmallRng;
use rand::{Rng, RngCore, SeedableRng};

use crate::integrator::integrate;
use crate::kinematics::Kinematic;
use crate::params::{ParamsError, SteeringParams};
use crate::steering::{
    Align, Arrive, BehaviorKind, Face, SteeringBehavior, SteeringOutput, Wander,
    linear_acceleration, predicted_position,
};

// ============================================================================
// Map States
// ============================================================================

/// The demo's numbered map states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapState {
    /// Wolf evades while the hunter pursues
    Evade,
    /// Hunter arrives at the wolf's predicted position; the wolf wanders
    PursueArrive,
    /// Hunter seeks a stationary wolf
    Seek,
    /// Wolf flees a stationary hunter
    Flee,
    /// Hunter turns to match the wolf's facing
    Align,
    /// Hunter turns to face a wandering wolf
    Face,
    /// A lone hunter wanders
    Wander,
}

impl MapState {
    /// Map a number key to a state.
    #[must_use]
    pub fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(Self::Evade),
            1 => Some(Self::PursueArrive),
            2 => Some(Self::Seek),
            3 => Some(Self::Flee),
            4 => Some(Self::Align),
            5 => Some(Self::Face),
            6 => Some(Self::Wander),
            _ => None,
        }
    }

    /// Narration line announced when the state is entered.
    #[must_use]
    pub fn narration(self) -> &'static str {
        match self {
            Self::Evade => "The wolf evades the hunter, who is pursuing.",
            Self::PursueArrive => "The hunter pursues the wolf and brakes onto its predicted path.",
            Self::Seek => "The hunter seeks the wolf.",
            Self::Flee => "The wolf flees the hunter.",
            Self::Align => "The hunter turns to match the wolf's facing.",
            Self::Face => "The hunter turns to face the wandering wolf.",
            Self::Wander => "A lone hunter wanders the map.",
        }
    }
}

// ============================================================================
// Agents
// ============================================================================

/// What drives an agent each tick.
#[derive(Debug, Clone)]
pub enum Drive {
    /// No movement
    Idle,
    /// One of the linear behaviors against the agent at the given index
    Linear(BehaviorKind, usize),
    /// Arrive at the predicted position of the agent at the given index
    PursueArrive(usize),
    /// Match the orientation of the agent at the given index
    Align(usize),
    /// Turn toward the position of the agent at the given index
    Face(usize),
    /// Self-directed random walk
    Wander(Wander),
}

/// A spawned agent: kinematic state plus its drive.
#[derive(Debug, Clone)]
pub struct Npc {
    /// Display name for logs
    pub name: &'static str,
    /// Kinematic state, mutated only by the integrator
    pub kinematic: Kinematic,
    /// Behavior assignment
    pub drive: Drive,
}

/// Errors from driving a scenario.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScenarioError {
    /// The requested map state number has no demo attached
    UnknownMapState(u8),
}

impl std::fmt::Display for ScenarioError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownMapState(index) => write!(f, "unknown map state {index}"),
        }
    }
}

impl std::error::Error for ScenarioError {}

// ============================================================================
// Scenario
// ============================================================================

// Stand-ins for the original's spawner objects: two opposite corners, each
// with a small randomized extent.
const SPAWN_A: Vec3 = Vec3::new(-8.0, 0.0, -8.0);
const SPAWN_B: Vec3 = Vec3::new(8.0, 0.0, 8.0);
const SPAWN_EXTENT: f32 = 2.0;

/// The demo simulation: a cast of agents and the map state that spawned
/// them.
///
/// All randomness (spawn placement, wander seeds) derives from the seed
/// given at construction, so a run is reproducible end to end.
pub struct Scenario {
    params: SteeringParams,
    npcs: Vec<Npc>,
    state: Option<MapState>,
    rng: SmallRng,
}

impl Scenario {
    /// Create a scenario with validated parameters and a deterministic seed.
    ///
    /// # Errors
    ///
    /// Returns an error if the parameters fail validation
    pub fn new(params: SteeringParams, seed: u64) -> Result<Self, ParamsError> {
        params.validate()?;
        Ok(Self {
            params,
            npcs: Vec::new(),
            state: None,
            rng: SmallRng::seed_from_u64(seed),
        })
    }

    /// Currently spawned agents.
    #[must_use]
    pub fn npcs(&self) -> &[Npc] {
        &self.npcs
    }

    /// Mutable access for orchestration layers (camera following, recasting).
    pub fn npcs_mut(&mut self) -> &mut Vec<Npc> {
        &mut self.npcs
    }

    /// Current map state, if one has been entered.
    #[must_use]
    pub fn map_state(&self) -> Option<MapState> {
        self.state
    }

    /// The parameters every agent runs under.
    #[must_use]
    pub fn params(&self) -> &SteeringParams {
        &self.params
    }

    /// Switch the map to the numbered state, despawning the current cast.
    ///
    /// # Errors
    ///
    /// Returns an error for numbers with no demo attached; the number comes
    /// straight from user input, so this is recoverable, not a panic.
    pub fn set_map_state(&mut self, index: u8) -> Result<(), ScenarioError> {
        let state = MapState::from_index(index).ok_or(ScenarioError::UnknownMapState(index))?;
        self.enter(state);
        Ok(())
    }

    fn enter(&mut self, state: MapState) {
        self.npcs.clear();
        log::info!("{}", state.narration());

        match state {
            MapState::Evade => {
                let hunter = self.spawn("hunter", SPAWN_B);
                let wolf = self.spawn("wolf", SPAWN_A);
                self.npcs[hunter].drive = Drive::Linear(BehaviorKind::Pursue, wolf);
                self.npcs[wolf].drive = Drive::Linear(BehaviorKind::Evade, hunter);
            }
            MapState::PursueArrive => {
                let hunter = self.spawn("hunter", SPAWN_B);
                let wolf = self.spawn("wolf", SPAWN_A);
                self.npcs[hunter].drive = Drive::PursueArrive(wolf);
                self.npcs[wolf].drive = Drive::Wander(Wander::seeded(self.rng.next_u64()));
            }
            MapState::Seek => {
                let wolf = self.spawn("wolf", SPAWN_A);
                let hunter = self.spawn("hunter", SPAWN_B);
                self.npcs[hunter].drive = Drive::Linear(BehaviorKind::Seek, wolf);
            }
            MapState::Flee => {
                let hunter = self.spawn("hunter", SPAWN_B);
                let wolf = self.spawn("wolf", SPAWN_A);
                self.npcs[wolf].drive = Drive::Linear(BehaviorKind::Flee, hunter);
            }
            MapState::Align => {
                let hunter = self.spawn("hunter", SPAWN_B);
                let wolf = self.spawn("wolf", SPAWN_A);
                self.npcs[wolf].kinematic.orientation = self.rng.gen_range(-PI..PI);
                self.npcs[hunter].drive = Drive::Align(wolf);
            }
            MapState::Face => {
                let hunter = self.spawn("hunter", SPAWN_B);
                let wolf = self.spawn("wolf", SPAWN_A);
                self.npcs[wolf].drive = Drive::Wander(Wander::seeded(self.rng.next_u64()));
                self.npcs[hunter].drive = Drive::Face(wolf);
            }
            MapState::Wander => {
                let hunter = self.spawn("hunter", SPAWN_A);
                self.npcs[hunter].drive = Drive::Wander(Wander::seeded(self.rng.next_u64()));
            }
        }

        self.state = Some(state);
    }

    /// Spawn an idle agent somewhere inside the given spawn area.
    fn spawn(&mut self, name: &'static str, area: Vec3) -> usize {
        let offset = Vec3::new(
            self.rng.gen_range(-SPAWN_EXTENT..=SPAWN_EXTENT),
            0.0,
            self.rng.gen_range(-SPAWN_EXTENT..=SPAWN_EXTENT),
        );
        self.npcs.push(Npc {
            name,
            kinematic: Kinematic::at(area + offset),
            drive: Drive::Idle,
        });
        self.npcs.len() - 1
    }

    /// Advance the simulation one step.
    ///
    /// Steering is computed against a snapshot of all agents taken at the
    /// start of the tick, so mutually-targeting agents read last-tick state
    /// and the outcome does not depend on agent order.
    pub fn tick(&mut self, dt: f32) {
        let snapshot: Vec<Kinematic> = self.npcs.iter().map(|npc| npc.kinematic).collect();
        let params = &self.params;

        for npc in &mut self.npcs {
            let steering = match &mut npc.drive {
                Drive::Idle => SteeringOutput::ZERO,
                Drive::Linear(kind, target) => {
                    let target = bound_target(&snapshot, *target, npc.name);
                    SteeringOutput::from_linear(linear_acceleration(
                        *kind,
                        &npc.kinematic,
                        target,
                        params,
                    ))
                }
                Drive::PursueArrive(target) => {
                    let target = bound_target(&snapshot, *target, npc.name);
                    let aim = predicted_position(&npc.kinematic, target, params);
                    Arrive.steer(&npc.kinematic, &Kinematic::at(aim), params)
                }
                Drive::Align(target) => {
                    let target = bound_target(&snapshot, *target, npc.name);
                    Align.steer(&npc.kinematic, target, params)
                }
                Drive::Face(target) => {
                    let target = bound_target(&snapshot, *target, npc.name);
                    Face.steer(&npc.kinematic, target, params)
                }
                Drive::Wander(wander) => wander.step(&npc.kinematic, params),
            };

            integrate(&mut npc.kinematic, steering, params, dt);
        }
    }
}

/// Resolve a target binding against the tick snapshot.
///
/// A dangling binding is a programming error in the orchestration layer, not
/// a runtime condition, so it fails loudly.
fn bound_target<'a>(snapshot: &'a [Kinematic], index: usize, name: &str) -> &'a Kinematic {
    snapshot
        .get(index)
        .unwrap_or_else(|| panic!("agent {name} is driven by a behavior with no spawned target"))
}

#[cfg(test)]
mod tests {
    use crate::steering::Evade;

    use super::*;

    fn scenario(seed: u64) -> Scenario {
        Scenario::new(SteeringParams::default(), seed).unwrap()
    }

    #[test]
    fn test_unknown_map_state_rejected() {
        let mut sc = scenario(1);
        assert_eq!(sc.set_map_state(9), Err(ScenarioError::UnknownMapState(9)));
        assert_eq!(sc.map_state(), None);
    }

    #[test]
    fn test_invalid_params_rejected_at_construction() {
        let params = SteeringParams::default().with_time_to_target(0.0);
        assert!(Scenario::new(params, 1).is_err());
    }

    #[test]
    fn test_map_states_spawn_their_cast() {
        let mut sc = scenario(1);

        sc.set_map_state(0).unwrap();
        assert_eq!(sc.npcs().len(), 2);
        assert!(matches!(
            sc.npcs()[0].drive,
            Drive::Linear(BehaviorKind::Pursue, 1)
        ));
        assert!(matches!(
            sc.npcs()[1].drive,
            Drive::Linear(BehaviorKind::Evade, 0)
        ));

        sc.set_map_state(6).unwrap();
        assert_eq!(sc.npcs().len(), 1);
        assert_eq!(sc.npcs()[0].name, "hunter");
        assert!(matches!(sc.npcs()[0].drive, Drive::Wander(_)));
    }

    #[test]
    fn test_switching_states_despawns_old_cast() {
        let mut sc = scenario(1);
        sc.set_map_state(0).unwrap();
        sc.set_map_state(6).unwrap();

        assert_eq!(sc.npcs().len(), 1);
        assert_eq!(sc.map_state(), Some(MapState::Wander));
    }

    #[test]
    fn test_same_seed_same_run() {
        let mut a = scenario(77);
        let mut b = scenario(77);
        a.set_map_state(1).unwrap();
        b.set_map_state(1).unwrap();

        for _ in 0..120 {
            a.tick(1.0 / 60.0);
            b.tick(1.0 / 60.0);
        }

        for (na, nb) in a.npcs().iter().zip(b.npcs()) {
            assert_eq!(na.kinematic, nb.kinematic);
        }
    }

    #[test]
    fn test_mutual_targets_read_last_tick_state() {
        // In the evade state the hunter integrates before the wolf; the
        // wolf's steering must still see the hunter's pre-tick state.
        let dt = 1.0 / 60.0;
        let mut sc = scenario(5);
        sc.set_map_state(0).unwrap();

        let params = *sc.params();
        let before: Vec<Kinematic> = sc.npcs().iter().map(|npc| npc.kinematic).collect();

        sc.tick(dt);

        let mut expected_wolf = before[1];
        let steering = Evade.steer(&before[1], &before[0], &params);
        integrate(&mut expected_wolf, steering, &params, dt);

        assert_eq!(sc.npcs()[1].kinematic, expected_wolf);
    }

    #[test]
    fn test_seek_closes_distance() {
        let mut sc = scenario(3);
        sc.set_map_state(2).unwrap();

        let gap = |sc: &Scenario| {
            (sc.npcs()[0].kinematic.position - sc.npcs()[1].kinematic.position).length()
        };
        let start = gap(&sc);

        for _ in 0..300 {
            sc.tick(1.0 / 60.0);
        }

        assert!(gap(&sc) < start);
    }

    #[test]
    fn test_flee_opens_distance() {
        let mut sc = scenario(3);
        sc.set_map_state(3).unwrap();

        let gap = |sc: &Scenario| {
            (sc.npcs()[0].kinematic.position - sc.npcs()[1].kinematic.position).length()
        };
        let start = gap(&sc);

        for _ in 0..300 {
            sc.tick(1.0 / 60.0);
        }

        assert!(gap(&sc) > start);
    }

    #[test]
    fn test_align_converges_on_wolf_orientation() {
        let mut sc = scenario(11);
        sc.set_map_state(4).unwrap();
        let goal = sc.npcs()[1].kinematic.orientation;

        for _ in 0..1200 {
            sc.tick(1.0 / 60.0);
        }

        let hunter = &sc.npcs()[0].kinematic;
        let err = crate::kinematics::wrap_angle(goal - hunter.orientation).abs();
        assert!(err < 0.2, "hunter still {err} rad off after twenty seconds");
    }

    #[test]
    #[should_panic(expected = "no spawned target")]
    fn test_dangling_target_fails_loudly() {
        let mut sc = scenario(1);
        sc.set_map_state(2).unwrap();
        sc.npcs_mut()[1].drive = Drive::Linear(BehaviorKind::Seek, 9);
        sc.tick(1.0 / 60.0);
    }
}

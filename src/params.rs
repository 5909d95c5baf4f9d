//! Behavior parameters: configuration records for steering agents
//!
//! Parameters are plain data, set up once and never mutated during
//! simulation. Validation happens here, at configuration time, so the
//! behaviors can divide by radii and time constants without runtime checks.
//! Supports loading and saving in RON and JSON.

use std::f32::consts::{PI, TAU};
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Per-agent steering configuration.
///
/// One record covers every behavior; agents that only seek simply ignore the
/// angular and wander fields.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SteeringParams {
    /// Upper bound on linear acceleration magnitude
    pub max_acceleration: f32,
    /// Look-ahead cap for pursue/evade prediction, in seconds
    pub max_prediction: f32,
    /// Upper bound on speed, enforced by the integrator
    pub max_speed: f32,
    /// Arrive: distance inside which the agent counts as arrived
    pub target_radius: f32,
    /// Arrive: distance at which deceleration begins
    pub slow_radius: f32,
    /// Response time constant for arrive and align
    pub time_to_target: f32,
    /// Upper bound on rotation rate, in radians per second
    pub max_rotation: f32,
    /// Upper bound on angular acceleration magnitude
    pub max_angular_acceleration: f32,
    /// Align: rotation size inside which the agent counts as aligned
    pub angular_target_radius: f32,
    /// Align: rotation size at which angular deceleration begins
    pub angular_slow_radius: f32,
    /// Wander: distance of the wander circle ahead of the agent
    pub wander_offset: f32,
    /// Wander: radius of the wander circle
    pub wander_radius: f32,
    /// Wander: maximum heading drift per step, in radians
    pub wander_rate: f32,
}

impl Default for SteeringParams {
    fn default() -> Self {
        Self {
            max_acceleration: 5.0,
            max_prediction: 1.0,
            max_speed: 10.0,
            target_radius: 0.5,
            slow_radius: 5.0,
            time_to_target: 0.1,
            max_rotation: PI,
            max_angular_acceleration: TAU,
            angular_target_radius: 0.02,
            angular_slow_radius: 0.5,
            wander_offset: 5.0,
            wander_radius: 2.0,
            wander_rate: 0.5,
        }
    }
}

impl SteeringParams {
    /// Set the linear acceleration cap.
    #[must_use]
    pub fn with_max_acceleration(mut self, max_acceleration: f32) -> Self {
        self.max_acceleration = max_acceleration;
        self
    }

    /// Set the speed cap.
    #[must_use]
    pub fn with_max_speed(mut self, max_speed: f32) -> Self {
        self.max_speed = max_speed;
        self
    }

    /// Set the pursue/evade look-ahead cap.
    #[must_use]
    pub fn with_max_prediction(mut self, max_prediction: f32) -> Self {
        self.max_prediction = max_prediction;
        self
    }

    /// Set the arrive/align response time constant.
    #[must_use]
    pub fn with_time_to_target(mut self, time_to_target: f32) -> Self {
        self.time_to_target = time_to_target;
        self
    }

    /// Set the arrive radii.
    #[must_use]
    pub fn with_linear_radii(mut self, target_radius: f32, slow_radius: f32) -> Self {
        self.target_radius = target_radius;
        self.slow_radius = slow_radius;
        self
    }

    /// Set the rotation rate and angular acceleration caps.
    #[must_use]
    pub fn with_rotation_limits(mut self, max_rotation: f32, max_angular_acceleration: f32) -> Self {
        self.max_rotation = max_rotation;
        self.max_angular_acceleration = max_angular_acceleration;
        self
    }

    /// Set the align radii.
    #[must_use]
    pub fn with_angular_radii(mut self, target_radius: f32, slow_radius: f32) -> Self {
        self.angular_target_radius = target_radius;
        self.angular_slow_radius = slow_radius;
        self
    }

    /// Set the wander circle geometry and drift rate.
    #[must_use]
    pub fn with_wander(mut self, offset: f32, radius: f32, rate: f32) -> Self {
        self.wander_offset = offset;
        self.wander_radius = radius;
        self.wander_rate = rate;
        self
    }

    /// Check every field for validity.
    ///
    /// Radii, the prediction cap, and the time constant are divisors in the
    /// behaviors; a zero here would surface as NaN in the simulation, so it
    /// is rejected up front instead.
    ///
    /// # Errors
    ///
    /// Returns [`ParamsError::Invalid`] naming the first offending field.
    pub fn validate(&self) -> Result<(), ParamsError> {
        let strictly_positive = [
            ("max_prediction", self.max_prediction),
            ("target_radius", self.target_radius),
            ("slow_radius", self.slow_radius),
            ("time_to_target", self.time_to_target),
            ("angular_target_radius", self.angular_target_radius),
            ("angular_slow_radius", self.angular_slow_radius),
        ];
        for (field, value) in strictly_positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(ParamsError::Invalid {
                    field,
                    value,
                    reason: "must be finite and strictly positive",
                });
            }
        }

        let non_negative = [
            ("max_acceleration", self.max_acceleration),
            ("max_speed", self.max_speed),
            ("max_rotation", self.max_rotation),
            ("max_angular_acceleration", self.max_angular_acceleration),
            ("wander_offset", self.wander_offset),
            ("wander_radius", self.wander_radius),
            ("wander_rate", self.wander_rate),
        ];
        for (field, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(ParamsError::Invalid {
                    field,
                    value,
                    reason: "must be finite and non-negative",
                });
            }
        }

        Ok(())
    }

    /// Save the parameters to a RON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written or serialization fails
    pub fn save_ron(&self, path: impl AsRef<Path>) -> Result<(), ParamsError> {
        let ron_string = ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
            .map_err(|e| ParamsError::Serialize(e.to_string()))?;
        fs::write(path, ron_string).map_err(|e| ParamsError::Io(e.to_string()))?;
        Ok(())
    }

    /// Load parameters from a RON file and validate them.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, deserialization fails,
    /// or the loaded values fail validation
    pub fn load_ron(path: impl AsRef<Path>) -> Result<Self, ParamsError> {
        let content = fs::read_to_string(path).map_err(|e| ParamsError::Io(e.to_string()))?;
        let params: SteeringParams =
            ron::from_str(&content).map_err(|e| ParamsError::Deserialize(e.to_string()))?;
        params.validate()?;
        Ok(params)
    }

    /// Save the parameters to a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written or serialization fails
    pub fn save_json(&self, path: impl AsRef<Path>) -> Result<(), ParamsError> {
        let json_string =
            serde_json::to_string_pretty(self).map_err(|e| ParamsError::Serialize(e.to_string()))?;
        fs::write(path, json_string).map_err(|e| ParamsError::Io(e.to_string()))?;
        Ok(())
    }

    /// Load parameters from a JSON file and validate them.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, deserialization fails,
    /// or the loaded values fail validation
    pub fn load_json(path: impl AsRef<Path>) -> Result<Self, ParamsError> {
        let content = fs::read_to_string(path).map_err(|e| ParamsError::Io(e.to_string()))?;
        let params: SteeringParams =
            serde_json::from_str(&content).map_err(|e| ParamsError::Deserialize(e.to_string()))?;
        params.validate()?;
        Ok(params)
    }
}

/// Errors that can occur while configuring steering parameters
#[derive(Debug, Clone)]
pub enum ParamsError {
    /// A field failed validation
    Invalid {
        /// Name of the offending field
        field: &'static str,
        /// The rejected value
        value: f32,
        /// What the field requires
        reason: &'static str,
    },
    /// IO error
    Io(String),
    /// Serialization error
    Serialize(String),
    /// Deserialization error
    Deserialize(String),
}

impl std::fmt::Display for ParamsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Invalid {
                field,
                value,
                reason,
            } => write!(f, "invalid parameter {field} = {value}: {reason}"),
            Self::Io(e) => write!(f, "IO error: {e}"),
            Self::Serialize(e) => write!(f, "Serialization error: {e}"),
            Self::Deserialize(e) => write!(f, "Deserialization error: {e}"),
        }
    }
}

impl std::error::Error for ParamsError {}

//! Lab configuration
//!
//! Geometry and boundary constants for every experiment. All fields are
//! defaulted, so a JSON document only needs to name what it overrides:
//!
//! ```json
//! {
//!   "dt": 0.016,
//!   "projectile": { "ground_level": 0.3, "off_stage_distance": 60.0 },
//!   "collision": { "left_wall": -10.0, "right_wall": null, "sub_step": 0.001 },
//!   "ramp": { "left_slope_degrees": 35.0, "right_slope_degrees": 35.0 }
//! }
//! ```

use serde::{Deserialize, Serialize};

use common::constants::FRAME_DT;

use crate::error::{ensure_finite, ensure_non_negative, ensure_positive, LabError, Result};
use crate::ramp::RampProfile;

/// Top-level configuration for an [`ExperimentSession`](crate::ExperimentSession)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabConfig {
    /// Fixed physics step advanced by every tick (s)
    pub dt: f64,
    pub projectile: ProjectileConfig,
    pub pendulum: PendulumConfig,
    pub collision: CollisionConfig,
    pub ramp: RampConfig,
    pub training: TrainingConfig,
}

impl Default for LabConfig {
    fn default() -> Self {
        Self {
            dt: FRAME_DT,
            projectile: ProjectileConfig::default(),
            pendulum: PendulumConfig::default(),
            collision: CollisionConfig::default(),
            ramp: RampConfig::default(),
            training: TrainingConfig::default(),
        }
    }
}

impl LabConfig {
    /// Parse a (possibly partial) JSON document and validate it
    pub fn from_json(text: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        ensure_positive("dt", self.dt)?;
        self.projectile.validate()?;
        self.pendulum.validate()?;
        self.collision.validate(self.dt)?;
        self.ramp.validate()?;
        self.training.validate()
    }
}

/// Launch point and stopping bounds for the projectile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectileConfig {
    pub launch_x: f64,
    pub launch_height: f64,
    /// Height of the body's centre when it rests on the ground (its radius)
    pub ground_level: f64,
    /// Horizontal displacement from the launch point that counts as off stage
    pub off_stage_distance: f64,
    pub record_trajectory: bool,
}

impl Default for ProjectileConfig {
    fn default() -> Self {
        Self {
            launch_x: -10.0,
            launch_height: 1.0,
            ground_level: 0.3,
            off_stage_distance: 60.0,
            record_trajectory: true,
        }
    }
}

impl ProjectileConfig {
    fn validate(&self) -> Result<()> {
        ensure_finite("projectile.launch_x", self.launch_x)?;
        ensure_finite("projectile.launch_height", self.launch_height)?;
        ensure_finite("projectile.ground_level", self.ground_level)?;
        ensure_positive("projectile.off_stage_distance", self.off_stage_distance)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PendulumConfig {
    pub pivot_height: f64,
    /// Release angle measured from the vertical
    pub initial_angle_degrees: f64,
}

impl Default for PendulumConfig {
    fn default() -> Self {
        Self {
            pivot_height: 5.0,
            initial_angle_degrees: 30.0,
        }
    }
}

impl PendulumConfig {
    fn validate(&self) -> Result<()> {
        ensure_finite("pendulum.pivot_height", self.pivot_height)?;
        ensure_finite("pendulum.initial_angle_degrees", self.initial_angle_degrees)?;
        if self.initial_angle_degrees.abs() >= 180.0 {
            return Err(LabError::InvalidParameter {
                name: "pendulum.initial_angle_degrees",
                value: self.initial_angle_degrees,
                requirement: "strictly between -180 and 180",
            });
        }
        Ok(())
    }
}

/// One-axis track for the two-body collision experiment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CollisionConfig {
    /// Width of each box; two boxes touch when their centres are this close
    pub body_width: f64,
    pub body1_x: f64,
    pub body2_x: f64,
    /// Height the boxes sit at, used for potential energy readouts
    pub track_height: f64,
    /// Wall the left box bounces off, `None` for an open end
    pub left_wall: Option<f64>,
    /// Wall the right box bounces off, `None` for an open end
    pub right_wall: Option<f64>,
    /// Sub-step used inside each tick so fast repeated contacts are not missed
    pub sub_step: f64,
}

impl Default for CollisionConfig {
    fn default() -> Self {
        Self {
            body_width: 1.0,
            body1_x: -5.0,
            body2_x: 5.0,
            track_height: 1.0,
            left_wall: Some(-10.0),
            right_wall: Some(10.0),
            sub_step: 0.001,
        }
    }
}

impl CollisionConfig {
    fn validate(&self, dt: f64) -> Result<()> {
        ensure_positive("collision.body_width", self.body_width)?;
        ensure_finite("collision.body1_x", self.body1_x)?;
        ensure_finite("collision.body2_x", self.body2_x)?;
        ensure_finite("collision.track_height", self.track_height)?;
        ensure_positive("collision.sub_step", self.sub_step)?;

        if self.body2_x - self.body1_x < self.body_width {
            return Err(LabError::InvalidConfig(format!(
                "boxes overlap or are out of order: body1_x = {}, body2_x = {}, width = {}",
                self.body1_x, self.body2_x, self.body_width
            )));
        }

        let half = 0.5 * self.body_width;
        if let Some(wall) = self.left_wall {
            ensure_finite("collision.left_wall", wall)?;
            if wall > self.body1_x - half {
                return Err(LabError::InvalidConfig(format!(
                    "left wall at {wall} cuts through the left box at {}",
                    self.body1_x
                )));
            }
        }
        if let Some(wall) = self.right_wall {
            ensure_finite("collision.right_wall", wall)?;
            if wall < self.body2_x + half {
                return Err(LabError::InvalidConfig(format!(
                    "right wall at {wall} cuts through the right box at {}",
                    self.body2_x
                )));
            }
        }

        if self.sub_step > dt {
            return Err(LabError::InvalidConfig(format!(
                "collision sub-step {} is larger than the frame step {dt}",
                self.sub_step
            )));
        }
        Ok(())
    }

    /// Number of sub-steps that make up one frame step, never coarser
    /// than `sub_step`
    pub fn sub_steps_per_tick(&self, dt: f64) -> u32 {
        // shave off rounding noise so 0.016 / 0.001 counts as 16, not 17
        let ratio = (dt / self.sub_step) * (1.0 - 1e-12);
        ratio.ceil().max(1.0) as u32
    }

    /// Length of each sub-step; the sub-steps add up to exactly one frame
    pub fn sub_step_length(&self, dt: f64) -> f64 {
        dt / f64::from(self.sub_steps_per_tick(dt))
    }
}

/// Piecewise-linear ramp: a left slope, a flat floor and an optional right slope
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RampConfig {
    /// Half-width of the flat floor centred on x = 0
    pub flat_half_width: f64,
    pub flat_height: f64,
    pub left_slope_degrees: f64,
    /// `None` leaves the right side as open floor up to the track end
    pub right_slope_degrees: Option<f64>,
    /// The ball leaves the track once |x| exceeds this
    pub track_half_length: f64,
    pub start_x: f64,
}

impl Default for RampConfig {
    fn default() -> Self {
        Self {
            flat_half_width: 1.5,
            flat_height: 0.0,
            left_slope_degrees: 35.0,
            right_slope_degrees: Some(35.0),
            track_half_length: 10.0,
            start_x: -8.0,
        }
    }
}

impl RampConfig {
    fn validate(&self) -> Result<()> {
        ensure_non_negative("ramp.flat_half_width", self.flat_half_width)?;
        ensure_finite("ramp.flat_height", self.flat_height)?;
        ensure_finite("ramp.start_x", self.start_x)?;
        validate_slope("ramp.left_slope_degrees", self.left_slope_degrees)?;
        if let Some(slope) = self.right_slope_degrees {
            validate_slope("ramp.right_slope_degrees", slope)?;
        }

        ensure_positive("ramp.track_half_length", self.track_half_length)?;
        if self.track_half_length <= self.flat_half_width {
            return Err(LabError::InvalidConfig(format!(
                "track half-length {} must exceed the flat half-width {}",
                self.track_half_length, self.flat_half_width
            )));
        }
        if self.start_x.abs() > self.track_half_length {
            return Err(LabError::InvalidConfig(format!(
                "ramp start x = {} lies outside the track (±{})",
                self.start_x, self.track_half_length
            )));
        }
        Ok(())
    }

    pub fn profile(&self) -> RampProfile {
        RampProfile::new(
            self.flat_half_width,
            self.flat_height,
            self.left_slope_degrees.to_radians().tan(),
            self.right_slope_degrees.map(|deg| deg.to_radians().tan()),
        )
    }
}

fn validate_slope(name: &'static str, degrees: f64) -> Result<()> {
    if degrees.is_finite() && degrees > 0.0 && degrees < 90.0 {
        Ok(())
    } else {
        Err(LabError::InvalidParameter {
            name,
            value: degrees,
            requirement: "strictly between 0 and 90 degrees",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainingConfig {
    /// Samples collected before an attached predictor is trained
    pub min_samples: usize,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self { min_samples: 5 }
    }
}

impl TrainingConfig {
    fn validate(&self) -> Result<()> {
        if self.min_samples == 0 {
            return Err(LabError::InvalidConfig(
                "training.min_samples must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        LabConfig::default().validate().unwrap();
    }

    #[test]
    fn partial_json_keeps_other_defaults() {
        let config = LabConfig::from_json(
            r#"{ "projectile": { "ground_level": 0.5 }, "collision": { "right_wall": null } }"#,
        )
        .unwrap();

        assert_eq!(config.projectile.ground_level, 0.5);
        assert_eq!(config.projectile.launch_x, -10.0);
        assert_eq!(config.collision.right_wall, None);
        assert_eq!(config.collision.left_wall, Some(-10.0));
        assert_eq!(config.dt, FRAME_DT);
    }

    #[test]
    fn malformed_json_is_a_config_error() {
        let err = LabConfig::from_json("{ dt: ").unwrap_err();
        assert!(matches!(err, LabError::Config(_)));
    }

    #[test]
    fn rejects_non_positive_dt() {
        let config = LabConfig {
            dt: 0.0,
            ..LabConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(LabError::InvalidParameter { name: "dt", .. })
        ));
    }

    #[test]
    fn rejects_overlapping_boxes_and_walls_inside_boxes() {
        let mut config = LabConfig::default();
        config.collision.body2_x = config.collision.body1_x + 0.5;
        assert!(matches!(config.validate(), Err(LabError::InvalidConfig(_))));

        let mut config = LabConfig::default();
        config.collision.left_wall = Some(-5.2);
        assert!(matches!(config.validate(), Err(LabError::InvalidConfig(_))));
    }

    #[test]
    fn rejects_sub_step_coarser_than_frame() {
        let mut config = LabConfig::default();
        config.collision.sub_step = 0.1;
        assert!(matches!(config.validate(), Err(LabError::InvalidConfig(_))));
    }

    #[test]
    fn sub_steps_cover_one_frame() {
        let config = CollisionConfig::default();
        assert_eq!(config.sub_steps_per_tick(0.016), 16);
        assert_eq!(config.sub_steps_per_tick(0.0004), 1);
        assert_eq!(config.sub_step_length(0.0004), 0.0004);
    }

    #[test]
    fn uneven_sub_step_is_shortened_to_fit_the_frame() {
        let config = CollisionConfig {
            sub_step: 0.003,
            ..CollisionConfig::default()
        };
        let n = config.sub_steps_per_tick(0.016);
        let length = config.sub_step_length(0.016);

        assert_eq!(n, 6);
        assert!(length <= 0.003);
        assert!((f64::from(n) * length - 0.016).abs() < 1e-15);
    }

    #[test]
    fn rejects_vertical_or_flat_slopes() {
        let mut config = LabConfig::default();
        config.ramp.left_slope_degrees = 90.0;
        assert!(config.validate().is_err());

        let mut config = LabConfig::default();
        config.ramp.right_slope_degrees = Some(0.0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_non_finite_or_short_track() {
        let mut config = LabConfig::default();
        config.ramp.track_half_length = f64::NAN;
        assert!(matches!(
            config.validate(),
            Err(LabError::InvalidParameter { name: "ramp.track_half_length", .. })
        ));

        let mut config = LabConfig::default();
        config.ramp.track_half_length = config.ramp.flat_half_width;
        assert!(matches!(config.validate(), Err(LabError::InvalidConfig(_))));
    }

    #[test]
    fn rejects_ramp_start_off_track() {
        let mut config = LabConfig::default();
        config.ramp.start_x = -12.0;
        assert!(matches!(config.validate(), Err(LabError::InvalidConfig(_))));
    }
}

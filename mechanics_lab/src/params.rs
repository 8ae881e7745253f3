//! Physical parameters supplied by the control panel

use serde::{Deserialize, Serialize};

use common::constants::STANDARD_GRAVITY;

use crate::error::{ensure_finite, ensure_non_negative, ensure_positive, Result};

/// Slider values read by the experiments. The session copies these at
/// `start()`; a run never sees values changed mid-flight.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicalParameters {
    /// Mass of the moving body (left box in the collision experiment), kg
    pub mass: f64,
    /// Mass of the right box in the collision experiment, kg
    pub second_mass: f64,
    /// Launch speed, or closing speed of each box, m/s
    pub speed: f64,
    pub angle_degrees: f64,
    /// Pendulum rope length, m
    pub length: f64,
    pub gravity: f64,
}

impl Default for PhysicalParameters {
    fn default() -> Self {
        Self {
            mass: 1.0,
            second_mass: 1.0,
            speed: 20.0,
            angle_degrees: 45.0,
            length: 2.0,
            gravity: STANDARD_GRAVITY,
        }
    }
}

impl PhysicalParameters {
    pub fn validate(&self) -> Result<()> {
        ensure_positive("mass", self.mass)?;
        ensure_positive("second_mass", self.second_mass)?;
        ensure_non_negative("speed", self.speed)?;
        ensure_finite("angle_degrees", self.angle_degrees)?;
        ensure_positive("length", self.length)?;
        ensure_positive("gravity", self.gravity)
    }

    pub fn angle_radians(&self) -> f64 {
        self.angle_degrees.to_radians()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LabError;

    #[test]
    fn defaults_validate() {
        PhysicalParameters::default().validate().unwrap();
    }

    #[test]
    fn rejects_zero_mass_length_and_gravity() {
        for params in [
            PhysicalParameters { mass: 0.0, ..Default::default() },
            PhysicalParameters { second_mass: -1.0, ..Default::default() },
            PhysicalParameters { length: 0.0, ..Default::default() },
            PhysicalParameters { gravity: 0.0, ..Default::default() },
        ] {
            assert!(matches!(
                params.validate(),
                Err(LabError::InvalidParameter { .. })
            ));
        }
    }

    #[test]
    fn rejects_nan_angle_and_negative_speed() {
        let nan_angle = PhysicalParameters {
            angle_degrees: f64::NAN,
            ..Default::default()
        };
        assert!(nan_angle.validate().is_err());

        let backwards = PhysicalParameters {
            speed: -1.0,
            ..Default::default()
        };
        assert!(backwards.validate().is_err());
    }
}

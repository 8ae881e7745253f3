//! Hook for a learned range/flight-time predictor
//!
//! The lab only collects training data from finished projectile runs and
//! hands it to whatever model is attached. The model itself lives outside
//! this crate.

use serde::{Deserialize, Serialize};

/// Launch settings a prediction is asked for
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LaunchQuery {
    pub speed: f64,
    pub angle_degrees: f64,
    pub mass: f64,
    pub gravity: f64,
}

impl LaunchQuery {
    pub fn to_inputs(&self) -> [f64; 4] {
        [self.speed, self.angle_degrees, self.mass, self.gravity]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub range: f64,
    pub flight_time: f64,
}

/// One observed launch: inputs `[speed, angle°, mass, gravity]`,
/// outputs `[range, flight time]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrainingSample {
    pub inputs: [f64; 4],
    pub outputs: [f64; 2],
}

impl TrainingSample {
    pub fn new(query: LaunchQuery, observed: Prediction) -> Self {
        Self {
            inputs: query.to_inputs(),
            outputs: [observed.range, observed.flight_time],
        }
    }

    pub fn query(&self) -> LaunchQuery {
        let [speed, angle_degrees, mass, gravity] = self.inputs;
        LaunchQuery {
            speed,
            angle_degrees,
            mass,
            gravity,
        }
    }

    pub fn observed(&self) -> Prediction {
        Prediction {
            range: self.outputs[0],
            flight_time: self.outputs[1],
        }
    }
}

/// A model that learns range and flight time from past launches
pub trait TrajectoryPredictor {
    /// Fit on every sample collected so far
    fn train(&mut self, samples: &[TrainingSample]);

    /// `None` when the model cannot answer yet
    fn predict(&self, query: &LaunchQuery) -> Option<Prediction>;
}

/// Samples gathered across runs, in arrival order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrainingSet {
    samples: Vec<TrainingSample>,
}

impl TrainingSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, sample: TrainingSample) {
        self.samples.push(sample);
    }

    pub fn samples(&self) -> &[TrainingSample] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Enough samples collected to train on
    pub fn is_ready(&self, min_samples: usize) -> bool {
        self.samples.len() >= min_samples
    }
}

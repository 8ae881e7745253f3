//! Classical Mechanics Lab
//!
//! Deterministic fixed-step physics for four classroom experiments:
//!
//! - **Projectile Motion**: explicit Euler flight under constant gravity
//! - **Simple Pendulum**: nonlinear swing with semi-implicit Euler
//! - **Elastic Collision**: two boxes and walls on a 1-D track, sub-stepped
//! - **Energy Conservation**: a ball on a piecewise-linear ramp, speed from energy
//!
//! [`ExperimentSession`] is the control-panel state machine that drives one
//! experiment per frame tick and exposes the readouts. Rendering and input
//! handling are left to the caller.

pub mod collision;
pub mod config;
pub mod equations;
pub mod error;
pub mod kinematics;
pub mod params;
pub mod pendulum;
pub mod predictor;
pub mod ramp;
pub mod session;

pub use config::LabConfig;
pub use error::{LabError, Result};
pub use params::PhysicalParameters;
pub use predictor::{LaunchQuery, Prediction, TrainingSample, TrainingSet, TrajectoryPredictor};
pub use session::{
    ExperimentKind, ExperimentSession, ExperimentState, Observables, Pose, RunStatus,
    RunSummary, StopReason,
};

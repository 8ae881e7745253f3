//! Common utilities for the mechanics lab
//!
//! This crate provides the shared pieces used by the lab crate and its
//! headless runner: physical constants, equation reference cards, and
//! logger setup.

pub mod equations;
pub mod logging;

pub use equations::*;
pub use logging::*;

/// Physical constants used in the experiments
pub mod constants {
    /// Standard gravitational acceleration at the Earth's surface (m/s²),
    /// rounded the way introductory courses quote it
    pub const STANDARD_GRAVITY: f64 = 9.8;

    /// Display refresh cadence the lab is tuned for (Hz)
    pub const FRAME_RATE: f64 = 60.0;

    /// Fixed physics step per frame tick (s)
    pub const FRAME_DT: f64 = 0.016;
}

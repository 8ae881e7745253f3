//! Simple pendulum on a rigid massless rope
//!
//! θ is measured from the vertical rest position, positive towards +x.
//! Stepping uses semi-implicit Euler (velocity first), which keeps the
//! energy error bounded over long runs instead of letting it grow.

use glam::DVec2;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PendulumState {
    /// Angle from the vertical (rad)
    pub angle: f64,
    /// Angular velocity (rad/s)
    pub angular_velocity: f64,
}

impl PendulumState {
    /// Hanging straight down, not moving
    pub const REST: Self = Self {
        angle: 0.0,
        angular_velocity: 0.0,
    };

    /// Held at `angle` radians and let go
    pub fn released(angle: f64) -> Self {
        Self {
            angle,
            angular_velocity: 0.0,
        }
    }

    /// Bob position for a pivot at (0, `pivot_height`)
    pub fn bob_position(&self, length: f64, pivot_height: f64) -> DVec2 {
        DVec2::new(
            length * self.angle.sin(),
            pivot_height - length * self.angle.cos(),
        )
    }

    /// Tangential speed of the bob
    pub fn linear_speed(&self, length: f64) -> f64 {
        (self.angular_velocity * length).abs()
    }

    /// Bob velocity vector, tangent to the swing arc
    pub fn bob_velocity(&self, length: f64) -> DVec2 {
        let tangential = self.angular_velocity * length;
        DVec2::new(tangential * self.angle.cos(), tangential * self.angle.sin())
    }
}

/// α = −(g/L)·sin θ; ω' = ω + α·dt; θ' = θ + ω'·dt
pub fn step_pendulum(state: PendulumState, length: f64, gravity: f64, dt: f64) -> PendulumState {
    let angular_acceleration = -(gravity / length) * state.angle.sin();
    let angular_velocity = state.angular_velocity + angular_acceleration * dt;
    let angle = state.angle + angular_velocity * dt;
    PendulumState {
        angle,
        angular_velocity,
    }
}

/// Small-angle period: T = 2π·√(L/g)
pub fn small_angle_period(length: f64, gravity: f64) -> f64 {
    std::f64::consts::TAU * (length / gravity).sqrt()
}

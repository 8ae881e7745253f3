//! Projectile kinematics under constant gravity
//!
//! Explicit Euler with the position update taken before the velocity
//! update, no drag. Horizontal velocity never changes.

use glam::DVec2;

/// Point-mass projectile
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectileState {
    pub position: DVec2,
    pub velocity: DVec2,
}

impl ProjectileState {
    /// Body resting at `position`
    pub fn at_rest(position: DVec2) -> Self {
        Self {
            position,
            velocity: DVec2::ZERO,
        }
    }

    /// Launch from `position` with `speed` at `angle` radians above the horizontal
    pub fn launch(position: DVec2, speed: f64, angle: f64) -> Self {
        Self {
            position,
            velocity: DVec2::new(speed * angle.cos(), speed * angle.sin()),
        }
    }

    pub fn speed(&self) -> f64 {
        self.velocity.length()
    }

    /// The centre has come down to (or below) the resting height
    pub fn has_landed(&self, ground_level: f64) -> bool {
        self.position.y <= ground_level
    }

    /// Horizontal displacement from `origin_x` exceeds `distance`
    pub fn is_off_stage(&self, origin_x: f64, distance: f64) -> bool {
        (self.position.x - origin_x).abs() > distance
    }
}

/// Advance one explicit Euler step
pub fn step_projectile(state: ProjectileState, gravity: f64, dt: f64) -> ProjectileState {
    let position = state.position + state.velocity * dt;
    let velocity = DVec2::new(state.velocity.x, state.velocity.y - gravity * dt);
    ProjectileState { position, velocity }
}

/// Range on level ground: R = v₀²·sin(2θ)/g
pub fn analytic_range(speed: f64, angle: f64, gravity: f64) -> f64 {
    speed * speed * (2.0 * angle).sin() / gravity
}

/// Time of flight on level ground: T = 2·v₀·sin(θ)/g
pub fn analytic_flight_time(speed: f64, angle: f64, gravity: f64) -> f64 {
    2.0 * speed * angle.sin() / gravity
}

#[cfg(test)]
mod tests {
    use super::*;

    const G: f64 = 9.8;
    const GROUND: f64 = 0.3;

    /// Fly from ground level until landing; returns (range, flight time)
    fn fly(speed: f64, angle_deg: f64, dt: f64) -> (f64, f64) {
        let start = DVec2::new(0.0, GROUND);
        let mut state = ProjectileState::launch(start, speed, angle_deg.to_radians());
        let mut ticks = 0u32;
        loop {
            state = step_projectile(state, G, dt);
            ticks += 1;
            if state.has_landed(GROUND) {
                break;
            }
        }
        (state.position.x - start.x, ticks as f64 * dt)
    }

    fn relative_error(actual: f64, expected: f64) -> f64 {
        ((actual - expected) / expected).abs()
    }

    #[test]
    fn single_step_moves_before_accelerating() {
        let state = ProjectileState {
            position: DVec2::new(1.0, 2.0),
            velocity: DVec2::new(3.0, 4.0),
        };
        let next = step_projectile(state, G, 0.5);

        assert_eq!(next.position, DVec2::new(2.5, 4.0));
        assert_eq!(next.velocity, DVec2::new(3.0, 4.0 - G * 0.5));
    }

    #[test]
    fn horizontal_velocity_is_constant() {
        let mut state = ProjectileState::launch(DVec2::ZERO, 15.0, 0.7);
        let vx = state.velocity.x;
        for _ in 0..500 {
            state = step_projectile(state, G, 0.016);
            assert_eq!(state.velocity.x, vx);
        }
    }

    #[test]
    fn euler_run_matches_closed_form_within_two_percent() {
        let angle = 45f64.to_radians();
        let (range, time) = fly(20.0, 45.0, 0.016);

        assert!(relative_error(range, analytic_range(20.0, angle, G)) < 0.02);
        assert!(relative_error(time, analytic_flight_time(20.0, angle, G)) < 0.02);
    }

    #[test]
    fn integration_error_shrinks_with_dt() {
        let angle = 60f64.to_radians();
        let exact = analytic_range(12.0, angle, G);

        let (coarse, _) = fly(12.0, 60.0, 0.016);
        let (fine, _) = fly(12.0, 60.0, 0.001);

        assert!(relative_error(fine, exact) < relative_error(coarse, exact));
        assert!(relative_error(fine, exact) < 0.005);
    }

    #[test]
    fn launch_components() {
        let state = ProjectileState::launch(DVec2::ZERO, 10.0, 90f64.to_radians());
        assert!(state.velocity.x.abs() < 1e-12);
        assert!((state.velocity.y - 10.0).abs() < 1e-12);
        assert!((state.speed() - 10.0).abs() < 1e-12);
    }

    #[test]
    fn off_stage_is_measured_from_the_origin() {
        let state = ProjectileState::at_rest(DVec2::new(25.0, 1.0));
        assert!(!state.is_off_stage(-10.0, 40.0));
        assert!(state.is_off_stage(-20.0, 40.0));
        assert!(state.is_off_stage(70.0, 40.0));
    }
}

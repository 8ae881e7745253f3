//! Ball rolling over a piecewise-linear ramp
//!
//! Speed is reconstructed from conservation of mechanical energy at the
//! current height instead of integrating forces, so the ball needs no
//! normal-force handling and the total energy is exact at every tick.

use glam::DVec2;

/// Which piece of the track a position falls on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RampSegment {
    LeftSlope,
    Flat,
    RightSlope,
}

/// Height profile: left slope down to a flat floor centred on x = 0,
/// optionally climbing again on the right
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RampProfile {
    pub flat_half_width: f64,
    pub flat_height: f64,
    /// Rise per unit run of the left slope (positive)
    pub left_gradient: f64,
    /// Rise per unit run of the right slope, `None` for open floor
    pub right_gradient: Option<f64>,
}

impl RampProfile {
    pub fn new(
        flat_half_width: f64,
        flat_height: f64,
        left_gradient: f64,
        right_gradient: Option<f64>,
    ) -> Self {
        Self {
            flat_half_width,
            flat_height,
            left_gradient,
            right_gradient,
        }
    }

    pub fn segment_at(&self, x: f64) -> RampSegment {
        if x < -self.flat_half_width {
            RampSegment::LeftSlope
        } else if x > self.flat_half_width && self.right_gradient.is_some() {
            RampSegment::RightSlope
        } else {
            RampSegment::Flat
        }
    }

    /// Signed dy/dx of a segment
    pub fn gradient(&self, segment: RampSegment) -> f64 {
        match segment {
            RampSegment::LeftSlope => -self.left_gradient,
            RampSegment::Flat => 0.0,
            RampSegment::RightSlope => self.right_gradient.unwrap_or(0.0),
        }
    }

    pub fn height_at(&self, x: f64) -> f64 {
        match self.segment_at(x) {
            RampSegment::LeftSlope => {
                self.flat_height + self.left_gradient * (-self.flat_half_width - x)
            }
            RampSegment::Flat => self.flat_height,
            RampSegment::RightSlope => {
                self.flat_height + self.right_gradient.unwrap_or(0.0) * (x - self.flat_half_width)
            }
        }
    }

    /// Where on `segment` the track reaches `height`; the floor has no such point
    pub fn x_at_height(&self, segment: RampSegment, height: f64) -> Option<f64> {
        let rise = height - self.flat_height;
        match segment {
            RampSegment::LeftSlope => Some(-self.flat_half_width - rise / self.left_gradient),
            RampSegment::Flat => None,
            RampSegment::RightSlope => self
                .right_gradient
                .map(|gradient| self.flat_half_width + rise / gradient),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RampState {
    pub position: DVec2,
    pub velocity: DVec2,
    /// Speed along the track
    pub speed: f64,
    /// Horizontal direction of travel: -1, +1, or 0 before the first release
    pub direction: f64,
    /// Mechanical energy fixed at release, m·g·h₀ (J)
    pub energy: f64,
}

impl RampState {
    /// Ball held still on the track at `x`
    pub fn at_rest(profile: &RampProfile, x: f64, mass: f64, gravity: f64) -> Self {
        let y = profile.height_at(x);
        Self {
            position: DVec2::new(x, y),
            velocity: DVec2::ZERO,
            speed: 0.0,
            direction: 0.0,
            energy: mass * gravity * y,
        }
    }

    pub fn kinetic_energy(&self, mass: f64) -> f64 {
        0.5 * mass * self.speed * self.speed
    }

    pub fn potential_energy(&self, mass: f64, gravity: f64) -> f64 {
        mass * gravity * self.position.y
    }
}

/// Result of one ramp tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RampStep {
    pub state: RampState,
    /// The ball reversed direction at a turning point this tick
    pub turned: bool,
}

/// Direction cosines of travel along a segment with gradient `gradient`
fn slope_cos_sin(gradient: f64) -> (f64, f64) {
    let norm = (1.0 + gradient * gradient).sqrt();
    (1.0 / norm, gradient.abs() / norm)
}

/// Advance the ball one tick.
///
/// The ball moves at its current speed along its current segment, is
/// re-projected onto the profile, and its new speed follows from
/// `KE = E − m·g·y`. If the move overshoots the height the energy allows, the
/// ball is placed at that turning point with zero speed. A ball at rest on a
/// slope is let go downhill with the speed it would gain in one tick.
pub fn step_ramp(
    state: RampState,
    profile: &RampProfile,
    mass: f64,
    gravity: f64,
    dt: f64,
) -> RampStep {
    let gradient = profile.gradient(profile.segment_at(state.position.x));
    let (cos, sin) = slope_cos_sin(gradient);

    let mut turned = false;
    let (speed, direction) = if state.speed > 0.0 {
        (state.speed, state.direction)
    } else if gradient != 0.0 {
        let downhill = -gradient.signum();
        turned = state.direction != 0.0 && state.direction != downhill;
        (gravity * sin * dt, downhill)
    } else {
        return RampStep {
            state,
            turned: false,
        };
    };

    let mut x = state.position.x + direction * speed * cos * dt;
    let mut y = profile.height_at(x);
    let kinetic = state.energy - mass * gravity * y;

    let new_speed = if kinetic >= 0.0 {
        (2.0 * kinetic / mass).sqrt()
    } else {
        let top = state.energy / (mass * gravity);
        if let Some(turn_x) = profile.x_at_height(profile.segment_at(x), top) {
            x = turn_x;
            y = top;
        }
        0.0
    };

    let gradient = profile.gradient(profile.segment_at(x));
    let (cos, _) = slope_cos_sin(gradient);
    let along = DVec2::new(cos, gradient * cos);

    RampStep {
        state: RampState {
            position: DVec2::new(x, y),
            velocity: along * direction * new_speed,
            speed: new_speed,
            direction,
            energy: state.energy,
        },
        turned,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const G: f64 = 9.8;
    const DT: f64 = 0.016;
    const MASS: f64 = 2.0;

    fn profile(right: Option<f64>) -> RampProfile {
        let tan35 = 35f64.to_radians().tan();
        RampProfile::new(1.5, 0.0, tan35, right.map(|deg: f64| deg.to_radians().tan()))
    }

    #[test]
    fn segments_split_at_flat_edges() {
        let p = profile(Some(35.0));
        assert_eq!(p.segment_at(-1.6), RampSegment::LeftSlope);
        assert_eq!(p.segment_at(-1.5), RampSegment::Flat);
        assert_eq!(p.segment_at(1.5), RampSegment::Flat);
        assert_eq!(p.segment_at(1.6), RampSegment::RightSlope);

        let open = profile(None);
        assert_eq!(open.segment_at(8.0), RampSegment::Flat);
    }

    #[test]
    fn height_is_continuous_across_boundaries() {
        let p = profile(Some(20.0));
        for edge in [-1.5, 1.5] {
            let below = p.height_at(edge - 1e-9);
            let above = p.height_at(edge + 1e-9);
            assert!((below - above).abs() < 1e-8);
        }
        assert!((p.height_at(-8.0) - 6.5 * 35f64.to_radians().tan()).abs() < 1e-12);
    }

    #[test]
    fn x_at_height_inverts_height() {
        let p = profile(Some(20.0));
        for x in [-7.0, -2.0, 2.5, 6.0] {
            let segment = p.segment_at(x);
            let back = p.x_at_height(segment, p.height_at(x)).unwrap();
            assert!((back - x).abs() < 1e-9);
        }
        assert_eq!(p.x_at_height(RampSegment::Flat, 0.0), None);
    }

    #[test]
    fn released_ball_rolls_downhill() {
        let p = profile(Some(35.0));
        let start = RampState::at_rest(&p, -8.0, MASS, G);
        let step = step_ramp(start, &p, MASS, G, DT);

        assert!(step.state.position.x > -8.0);
        assert!(step.state.position.y < start.position.y);
        assert!(step.state.velocity.x > 0.0);
        assert!(step.state.velocity.y < 0.0);
        assert!(!step.turned);
    }

    #[test]
    fn ball_on_the_floor_stays_put() {
        let p = profile(Some(35.0));
        let start = RampState::at_rest(&p, 0.5, MASS, G);
        let step = step_ramp(start, &p, MASS, G, DT);
        assert_eq!(step.state, start);
    }

    #[test]
    fn speed_on_floor_matches_drop_height() {
        let p = profile(Some(35.0));
        let mut state = RampState::at_rest(&p, -8.0, MASS, G);
        let h0 = state.position.y;

        while state.position.x < 0.0 {
            state = step_ramp(state, &p, MASS, G, DT).state;
        }
        assert!((state.speed - (2.0 * G * h0).sqrt()).abs() < 1e-9);
        assert_eq!(state.velocity.y, 0.0);
    }

    #[test]
    fn energy_is_conserved_every_tick() {
        let p = profile(Some(35.0));
        let mut state = RampState::at_rest(&p, -8.0, MASS, G);
        let initial = state.energy;

        for _ in 0..(30.0 / DT) as usize {
            state = step_ramp(state, &p, MASS, G, DT).state;
            let total = state.kinetic_energy(MASS) + state.potential_energy(MASS, G);
            assert!(((total - initial) / initial).abs() < 0.01);
        }
    }

    #[test]
    fn symmetric_ramp_oscillates_between_mirror_points() {
        let p = profile(Some(35.0));
        let mut state = RampState::at_rest(&p, -8.0, MASS, G);
        let mut turns = 0;
        let mut max_x = f64::MIN;

        for _ in 0..(30.0 / DT) as usize {
            let step = step_ramp(state, &p, MASS, G, DT);
            state = step.state;
            turns += u32::from(step.turned);
            max_x = max_x.max(state.position.x);
        }

        assert!(turns >= 4);
        assert!((max_x - 8.0).abs() < 1e-6);
        assert!(state.position.x.abs() <= 8.0 + 1e-6);
    }

    #[test]
    fn single_slope_sends_ball_along_the_floor() {
        let p = profile(None);
        let mut state = RampState::at_rest(&p, -8.0, MASS, G);
        for _ in 0..(10.0 / DT) as usize {
            state = step_ramp(state, &p, MASS, G, DT).state;
        }
        assert!(state.position.x > 10.0);
        assert_eq!(state.position.y, 0.0);
        assert!(state.direction > 0.0);
    }
}

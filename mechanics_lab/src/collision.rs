//! One-dimensional elastic collisions between two boxes on a track
//!
//! Contacts are resolved in closed form. Because a light box squeezed
//! between a wall and a heavy box can bounce many times per frame, the
//! track is advanced in small fixed sub-steps and both contact conditions
//! are re-checked after every one of them.

/// A box sliding along the track
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Body1D {
    pub position: f64,
    pub velocity: f64,
    pub mass: f64,
}

impl Body1D {
    pub fn new(position: f64, velocity: f64, mass: f64) -> Self {
        Self {
            position,
            velocity,
            mass,
        }
    }

    pub fn momentum(&self) -> f64 {
        self.mass * self.velocity
    }

    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.mass * self.velocity * self.velocity
    }
}

/// Post-collision velocities for a perfectly elastic head-on collision.
///
/// Masses must be positive; the session rejects anything else before a run.
pub fn resolve_elastic_collision(m1: f64, v1: f64, m2: f64, v2: f64) -> (f64, f64) {
    let total = m1 + m2;
    let v1_after = (v1 * (m1 - m2) + 2.0 * m2 * v2) / total;
    let v2_after = (v2 * (m2 - m1) + 2.0 * m1 * v1) / total;
    (v1_after, v2_after)
}

/// A wall reflects the velocity regardless of mass
pub fn resolve_wall_bounce(velocity: f64) -> f64 {
    -velocity
}

/// Static geometry of the track
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Track {
    /// Centre-to-centre distance at which the boxes touch
    pub contact_distance: f64,
    /// Left wall position, if any; only the left box can reach it
    pub left_wall: Option<f64>,
    /// Right wall position, if any; only the right box can reach it
    pub right_wall: Option<f64>,
}

impl Track {
    fn half_width(&self) -> f64 {
        0.5 * self.contact_distance
    }
}

/// What happened during a step
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ContactEvents {
    pub collisions: u32,
    pub wall_bounces: u32,
}

impl std::ops::AddAssign for ContactEvents {
    fn add_assign(&mut self, rhs: Self) {
        self.collisions += rhs.collisions;
        self.wall_bounces += rhs.wall_bounces;
    }
}

/// Both boxes, left box first
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionState {
    pub left: Body1D,
    pub right: Body1D,
}

impl CollisionState {
    pub fn new(left: Body1D, right: Body1D) -> Self {
        Self { left, right }
    }

    pub fn total_momentum(&self) -> f64 {
        self.left.momentum() + self.right.momentum()
    }

    pub fn total_kinetic_energy(&self) -> f64 {
        self.left.kinetic_energy() + self.right.kinetic_energy()
    }

    /// Resolve the box-box contact if the boxes touch and are closing.
    /// Touching boxes that are separating are left alone.
    pub fn try_collide(&mut self, track: &Track) -> bool {
        let separation = self.right.position - self.left.position;
        let closing = self.left.velocity > self.right.velocity;
        if separation > track.contact_distance || !closing {
            return false;
        }

        let (v1, v2) = resolve_elastic_collision(
            self.left.mass,
            self.left.velocity,
            self.right.mass,
            self.right.velocity,
        );
        self.left.velocity = v1;
        self.right.velocity = v2;
        true
    }

    /// Reflect boxes that reached a wall while still heading into it
    pub fn try_bounce(&mut self, track: &Track) -> u32 {
        let half = track.half_width();
        let mut bounces = 0;

        if let Some(wall) = track.left_wall {
            if self.left.position - half <= wall && self.left.velocity < 0.0 {
                self.left.velocity = resolve_wall_bounce(self.left.velocity);
                bounces += 1;
            }
        }
        if let Some(wall) = track.right_wall {
            if self.right.position + half >= wall && self.right.velocity > 0.0 {
                self.right.velocity = resolve_wall_bounce(self.right.velocity);
                bounces += 1;
            }
        }

        bounces
    }

    /// Advance by one sub-step: move, then resolve contacts
    pub fn sub_step(&mut self, track: &Track, dt: f64) -> ContactEvents {
        self.left.position += self.left.velocity * dt;
        self.right.position += self.right.velocity * dt;

        let collisions = u32::from(self.try_collide(track));
        let wall_bounces = self.try_bounce(track);
        ContactEvents {
            collisions,
            wall_bounces,
        }
    }
}

/// Advance one frame made of `sub_steps` sub-steps of `sub_dt` each
pub fn step_collision(
    mut state: CollisionState,
    track: &Track,
    sub_dt: f64,
    sub_steps: u32,
) -> (CollisionState, ContactEvents) {
    let mut events = ContactEvents::default();
    for _ in 0..sub_steps {
        events += state.sub_step(track, sub_dt);
    }
    (state, events)
}

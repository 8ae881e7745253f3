//! Experiment session: the control-panel state machine
//!
//! Holds the selected experiment, its live physical state and the derived
//! readouts. Every frame the caller invokes [`ExperimentSession::tick`],
//! which advances the active experiment by one fixed step of `config.dt`.
//! The real frame interval is only accumulated for reporting; leftover
//! time is not carried over, so irregular frame rates stretch or compress
//! simulated time relative to the wall clock.

use std::fmt;

use glam::DVec2;
use log::{debug, info, trace};

use crate::collision::{step_collision, Body1D, CollisionState, Track};
use crate::config::LabConfig;
use crate::error::{LabError, Result};
use crate::kinematics::{step_projectile, ProjectileState};
use crate::params::PhysicalParameters;
use crate::pendulum::{step_pendulum, PendulumState};
use crate::predictor::{LaunchQuery, Prediction, TrainingSample, TrainingSet, TrajectoryPredictor};
use crate::ramp::{step_ramp, RampState};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExperimentKind {
    Projectile,
    Pendulum,
    Collision,
    Energy,
}

impl ExperimentKind {
    pub const ALL: [ExperimentKind; 4] = [
        ExperimentKind::Projectile,
        ExperimentKind::Pendulum,
        ExperimentKind::Collision,
        ExperimentKind::Energy,
    ];

    pub fn title(self) -> &'static str {
        match self {
            ExperimentKind::Projectile => "Projectile Motion",
            ExperimentKind::Pendulum => "Simple Pendulum",
            ExperimentKind::Collision => "Elastic Collision",
            ExperimentKind::Energy => "Energy Conservation",
        }
    }
}

impl fmt::Display for ExperimentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    Idle,
    Running,
}

/// Physical state of the selected experiment; the variant always matches
/// the session's current kind
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ExperimentState {
    Projectile(ProjectileState),
    Pendulum(PendulumState),
    Collision(CollisionState),
    Energy(RampState),
}

impl ExperimentState {
    pub fn kind(&self) -> ExperimentKind {
        match self {
            ExperimentState::Projectile(_) => ExperimentKind::Projectile,
            ExperimentState::Pendulum(_) => ExperimentKind::Pendulum,
            ExperimentState::Collision(_) => ExperimentKind::Collision,
            ExperimentState::Energy(_) => ExperimentKind::Energy,
        }
    }
}

/// Readouts shown on the stats panel
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Observables {
    /// Simulated time, ticks × dt (s)
    pub elapsed_time: f64,
    /// Sum of the frame intervals the caller reported (s)
    pub wall_clock_time: f64,
    /// Speed of the tracked body (left box for collisions), m/s
    pub speed: f64,
    pub height: f64,
    /// Kinetic energy; both boxes together for collisions
    pub kinetic_energy: f64,
    pub potential_energy: f64,
    pub total_energy: f64,
    pub collisions: u32,
    pub wall_bounces: u32,
    /// Direction reversals of the ball on the ramp
    pub turns: u32,
}

/// Where to draw things
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    /// Projectile, pendulum bob, left box or ramp ball
    pub body: DVec2,
    /// Right box in the collision experiment
    pub second_body: Option<DVec2>,
    /// Pendulum pivot; the rope runs from here to `body`
    pub anchor: Option<DVec2>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// Projectile came down to ground level
    Landed,
    /// Projectile flew past the stage bound
    OffStage,
    /// Ball rolled off the end of the ramp track
    LeftTrack,
}

/// Emitted when a run ends on its own
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunSummary {
    pub kind: ExperimentKind,
    pub reason: StopReason,
    pub ticks: u64,
    /// ticks × dt (s)
    pub elapsed_time: f64,
    pub start_position: DVec2,
    pub final_position: DVec2,
    pub parameters: PhysicalParameters,
}

impl RunSummary {
    /// Horizontal distance covered
    pub fn range(&self) -> f64 {
        (self.final_position.x - self.start_position.x).abs()
    }

    pub fn launch_query(&self) -> LaunchQuery {
        LaunchQuery {
            speed: self.parameters.speed,
            angle_degrees: self.parameters.angle_degrees,
            mass: self.parameters.mass,
            gravity: self.parameters.gravity,
        }
    }

    pub fn training_sample(&self) -> TrainingSample {
        TrainingSample::new(
            self.launch_query(),
            Prediction {
                range: self.range(),
                flight_time: self.elapsed_time,
            },
        )
    }
}

pub struct ExperimentSession {
    config: LabConfig,
    /// Latest values from the control panel
    parameters: PhysicalParameters,
    /// Values frozen at `start()` for the current run
    run_parameters: PhysicalParameters,
    kind: ExperimentKind,
    status: RunStatus,
    state: ExperimentState,
    start_position: DVec2,
    ticks: u64,
    observables: Observables,
    trajectory: Vec<DVec2>,
    training: TrainingSet,
    predictor: Option<Box<dyn TrajectoryPredictor>>,
    trained_on: usize,
}

impl fmt::Debug for ExperimentSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExperimentSession")
            .field("kind", &self.kind)
            .field("status", &self.status)
            .field("state", &self.state)
            .field("ticks", &self.ticks)
            .field("observables", &self.observables)
            .field("training_samples", &self.training.len())
            .field("predictor", &self.predictor.is_some())
            .finish()
    }
}

impl ExperimentSession {
    pub fn new(config: LabConfig) -> Result<Self> {
        config.validate()?;
        let parameters = PhysicalParameters::default();
        let kind = ExperimentKind::Projectile;
        let state = rest_state(kind, &config, &parameters);

        Ok(Self {
            start_position: pose_of(&state, &config, &parameters).body,
            config,
            parameters,
            run_parameters: parameters,
            kind,
            status: RunStatus::Idle,
            state,
            ticks: 0,
            observables: Observables::default(),
            trajectory: Vec::new(),
            training: TrainingSet::new(),
            predictor: None,
            trained_on: 0,
        })
    }

    pub fn config(&self) -> &LabConfig {
        &self.config
    }

    /// Replace the configuration; stops and resets the current experiment
    pub fn set_config(&mut self, config: LabConfig) -> Result<()> {
        config.validate()?;
        self.config = config;
        self.reset();
        Ok(())
    }

    pub fn parameters(&self) -> &PhysicalParameters {
        &self.parameters
    }

    /// Store new control-panel values. They are validated by the next
    /// `start()` and never affect a run already in progress.
    pub fn set_parameters(&mut self, parameters: PhysicalParameters) {
        if self.is_running() {
            debug!("parameters changed mid-run; applying from next start: {parameters:?}");
        }
        self.parameters = parameters;
    }

    pub fn kind(&self) -> ExperimentKind {
        self.kind
    }

    pub fn status(&self) -> RunStatus {
        self.status
    }

    pub fn is_running(&self) -> bool {
        self.status == RunStatus::Running
    }

    pub fn state(&self) -> &ExperimentState {
        &self.state
    }

    pub fn observables(&self) -> &Observables {
        &self.observables
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Projectile positions recorded during the current or last run
    pub fn trajectory(&self) -> &[DVec2] {
        &self.trajectory
    }

    pub fn training_set(&self) -> &TrainingSet {
        &self.training
    }

    pub fn pose(&self) -> Pose {
        pose_of(&self.state, &self.config, &self.run_parameters)
    }

    /// Stop whatever is running, select `kind` and put it in its rest state
    pub fn switch_experiment(&mut self, kind: ExperimentKind) {
        self.stop();
        info!("switching experiment: {} -> {}", self.kind, kind);
        self.kind = kind;
        self.reset();
    }

    /// Set up the selected experiment from the configured initial
    /// conditions and the current parameters, and start running.
    /// Does nothing if a run is already in progress.
    pub fn start(&mut self) -> Result<()> {
        if self.is_running() {
            return Ok(());
        }
        self.parameters.validate()?;

        let params = self.parameters;
        self.run_parameters = params;
        self.state = launch_state(self.kind, &self.config, &params);
        self.start_position = pose_of(&self.state, &self.config, &params).body;
        self.ticks = 0;
        self.observables = Observables::default();
        self.trajectory.clear();
        if self.recording() {
            self.trajectory.push(self.start_position);
        }
        self.refresh_observables();
        self.status = RunStatus::Running;

        info!("started {} with {params:?}", self.kind);
        Ok(())
    }

    /// Advance the running experiment by one fixed step.
    ///
    /// `frame_interval` is the real time since the previous frame; it is
    /// only accumulated into `wall_clock_time`. Returns the run summary
    /// when this tick ended the run.
    pub fn tick(&mut self, frame_interval: f64) -> Option<RunSummary> {
        if !self.is_running() {
            return None;
        }

        let params = self.run_parameters;
        let dt = self.config.dt;
        self.ticks += 1;
        self.observables.wall_clock_time += frame_interval.max(0.0);

        let mut stop_reason = None;
        match &mut self.state {
            ExperimentState::Projectile(projectile) => {
                let cfg = &self.config.projectile;
                *projectile = step_projectile(*projectile, params.gravity, dt);
                if cfg.record_trajectory {
                    self.trajectory.push(projectile.position);
                }
                if projectile.has_landed(cfg.ground_level) {
                    stop_reason = Some(StopReason::Landed);
                } else if projectile.is_off_stage(self.start_position.x, cfg.off_stage_distance) {
                    stop_reason = Some(StopReason::OffStage);
                }
            }
            ExperimentState::Pendulum(pendulum) => {
                *pendulum = step_pendulum(*pendulum, params.length, params.gravity, dt);
            }
            ExperimentState::Collision(boxes) => {
                let cfg = &self.config.collision;
                let track = Track {
                    contact_distance: cfg.body_width,
                    left_wall: cfg.left_wall,
                    right_wall: cfg.right_wall,
                };
                let (next, events) = step_collision(
                    *boxes,
                    &track,
                    cfg.sub_step_length(dt),
                    cfg.sub_steps_per_tick(dt),
                );
                *boxes = next;
                self.observables.collisions += events.collisions;
                self.observables.wall_bounces += events.wall_bounces;
            }
            ExperimentState::Energy(ball) => {
                let profile = self.config.ramp.profile();
                let step = step_ramp(*ball, &profile, params.mass, params.gravity, dt);
                *ball = step.state;
                self.observables.turns += u32::from(step.turned);
                if ball.position.x.abs() > self.config.ramp.track_half_length {
                    stop_reason = Some(StopReason::LeftTrack);
                }
            }
        }

        self.refresh_observables();
        trace!("tick {} of {}: {:?}", self.ticks, self.kind, self.state);

        stop_reason.map(|reason| self.complete(reason))
    }

    /// User-initiated stop; the state is left where it is
    pub fn stop(&mut self) {
        if self.is_running() {
            self.status = RunStatus::Idle;
            info!("stopped {} after {} ticks", self.kind, self.ticks);
        }
    }

    /// Stop and return the selected experiment to its rest state with
    /// all readouts cleared
    pub fn reset(&mut self) {
        self.stop();
        self.state = rest_state(self.kind, &self.config, &self.parameters);
        self.run_parameters = self.parameters;
        self.start_position = pose_of(&self.state, &self.config, &self.parameters).body;
        self.ticks = 0;
        self.observables = Observables::default();
        self.trajectory.clear();
        debug!("reset {}", self.kind);
    }

    /// Attach a model; it is trained right away if enough samples exist
    pub fn attach_predictor(&mut self, predictor: Box<dyn TrajectoryPredictor>) {
        self.predictor = Some(predictor);
        self.trained_on = 0;
        self.retrain();
    }

    pub fn detach_predictor(&mut self) -> Option<Box<dyn TrajectoryPredictor>> {
        self.trained_on = 0;
        self.predictor.take()
    }

    /// Ask the attached model for range and flight time. `Ok(None)` means
    /// the model declined to answer.
    pub fn predict(&self, query: &LaunchQuery) -> Result<Option<Prediction>> {
        let predictor = self.predictor.as_ref().ok_or(LabError::NoPredictor)?;
        let need = self.config.training.min_samples;
        if self.trained_on < need {
            return Err(LabError::InsufficientTrainingData {
                have: self.training.len(),
                need,
            });
        }
        Ok(predictor.predict(query))
    }

    fn complete(&mut self, reason: StopReason) -> RunSummary {
        self.status = RunStatus::Idle;
        let summary = RunSummary {
            kind: self.kind,
            reason,
            ticks: self.ticks,
            elapsed_time: self.observables.elapsed_time,
            start_position: self.start_position,
            final_position: pose_of(&self.state, &self.config, &self.run_parameters).body,
            parameters: self.run_parameters,
        };
        info!(
            "{} finished ({reason:?}) after {:.3} s, range {:.3} m",
            self.kind,
            summary.elapsed_time,
            summary.range()
        );

        if self.kind == ExperimentKind::Projectile {
            self.training.push(summary.training_sample());
            debug!("training set now holds {} samples", self.training.len());
            self.retrain();
        }
        summary
    }

    fn retrain(&mut self) {
        let min_samples = self.config.training.min_samples;
        if !self.training.is_ready(min_samples) {
            return;
        }
        if let Some(predictor) = self.predictor.as_mut() {
            predictor.train(self.training.samples());
            self.trained_on = self.training.len();
            info!("predictor trained on {} samples", self.trained_on);
        }
    }

    fn recording(&self) -> bool {
        self.kind == ExperimentKind::Projectile && self.config.projectile.record_trajectory
    }

    fn refresh_observables(&mut self) {
        let p = self.run_parameters;
        let (speed, height, kinetic, potential) = match &self.state {
            ExperimentState::Projectile(projectile) => {
                let speed = projectile.speed();
                let height = projectile.position.y;
                (speed, height, 0.5 * p.mass * speed * speed, p.mass * p.gravity * height)
            }
            ExperimentState::Pendulum(pendulum) => {
                let speed = pendulum.linear_speed(p.length);
                let height = pendulum
                    .bob_position(p.length, self.config.pendulum.pivot_height)
                    .y;
                (speed, height, 0.5 * p.mass * speed * speed, p.mass * p.gravity * height)
            }
            ExperimentState::Collision(boxes) => {
                let height = self.config.collision.track_height;
                let mass = boxes.left.mass + boxes.right.mass;
                (
                    boxes.left.velocity.abs(),
                    height,
                    boxes.total_kinetic_energy(),
                    mass * p.gravity * height,
                )
            }
            ExperimentState::Energy(ball) => (
                ball.speed,
                ball.position.y,
                ball.kinetic_energy(p.mass),
                ball.potential_energy(p.mass, p.gravity),
            ),
        };

        let obs = &mut self.observables;
        obs.elapsed_time = self.ticks as f64 * self.config.dt;
        obs.speed = speed;
        obs.height = height;
        obs.kinetic_energy = kinetic;
        obs.potential_energy = potential;
        obs.total_energy = kinetic + potential;
    }
}

/// State shown before a run: bodies parked at their starting spots
fn rest_state(kind: ExperimentKind, config: &LabConfig, p: &PhysicalParameters) -> ExperimentState {
    match kind {
        ExperimentKind::Projectile => {
            let cfg = &config.projectile;
            ExperimentState::Projectile(ProjectileState::at_rest(DVec2::new(
                cfg.launch_x,
                cfg.launch_height,
            )))
        }
        ExperimentKind::Pendulum => ExperimentState::Pendulum(PendulumState::REST),
        ExperimentKind::Collision => {
            let cfg = &config.collision;
            ExperimentState::Collision(CollisionState::new(
                Body1D::new(cfg.body1_x, 0.0, p.mass),
                Body1D::new(cfg.body2_x, 0.0, p.second_mass),
            ))
        }
        ExperimentKind::Energy => {
            let cfg = &config.ramp;
            ExperimentState::Energy(RampState::at_rest(
                &cfg.profile(),
                cfg.start_x,
                p.mass,
                p.gravity,
            ))
        }
    }
}

/// Initial conditions of a run
fn launch_state(kind: ExperimentKind, config: &LabConfig, p: &PhysicalParameters) -> ExperimentState {
    match kind {
        ExperimentKind::Projectile => {
            let cfg = &config.projectile;
            ExperimentState::Projectile(ProjectileState::launch(
                DVec2::new(cfg.launch_x, cfg.launch_height),
                p.speed,
                p.angle_radians(),
            ))
        }
        ExperimentKind::Pendulum => ExperimentState::Pendulum(PendulumState::released(
            config.pendulum.initial_angle_degrees.to_radians(),
        )),
        ExperimentKind::Collision => {
            let cfg = &config.collision;
            ExperimentState::Collision(CollisionState::new(
                Body1D::new(cfg.body1_x, p.speed, p.mass),
                Body1D::new(cfg.body2_x, -p.speed, p.second_mass),
            ))
        }
        // released from rest; the ramp stepper lets it go downhill
        ExperimentKind::Energy => rest_state(kind, config, p),
    }
}

fn pose_of(state: &ExperimentState, config: &LabConfig, p: &PhysicalParameters) -> Pose {
    match state {
        ExperimentState::Projectile(projectile) => Pose {
            body: projectile.position,
            second_body: None,
            anchor: None,
        },
        ExperimentState::Pendulum(pendulum) => {
            let pivot_height = config.pendulum.pivot_height;
            Pose {
                body: pendulum.bob_position(p.length, pivot_height),
                second_body: None,
                anchor: Some(DVec2::new(0.0, pivot_height)),
            }
        }
        ExperimentState::Collision(boxes) => {
            let height = config.collision.track_height;
            Pose {
                body: DVec2::new(boxes.left.position, height),
                second_body: Some(DVec2::new(boxes.right.position, height)),
                anchor: None,
            }
        }
        ExperimentState::Energy(ball) => Pose {
            body: ball.position,
            second_body: None,
            anchor: None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: f64 = 1.0 / 60.0;

    fn session() -> ExperimentSession {
        ExperimentSession::new(LabConfig::default()).unwrap()
    }

    #[test]
    fn starts_idle_on_projectile() {
        let s = session();
        assert_eq!(s.kind(), ExperimentKind::Projectile);
        assert_eq!(s.status(), RunStatus::Idle);
        assert_eq!(s.state().kind(), ExperimentKind::Projectile);
        assert_eq!(s.pose().body, DVec2::new(-10.0, 1.0));
    }

    #[test]
    fn tick_while_idle_does_nothing() {
        let mut s = session();
        let before = *s.state();
        assert!(s.tick(FRAME).is_none());
        assert_eq!(*s.state(), before);
        assert_eq!(s.ticks(), 0);
    }

    #[test]
    fn start_twice_is_a_no_op() {
        let mut s = session();
        s.start().unwrap();
        s.tick(FRAME);
        let state = *s.state();

        s.start().unwrap();
        assert_eq!(*s.state(), state);
        assert_eq!(s.ticks(), 1);
    }

    #[test]
    fn start_rejects_invalid_parameters() {
        let mut s = session();
        s.set_parameters(PhysicalParameters {
            gravity: 0.0,
            ..Default::default()
        });
        assert!(matches!(
            s.start(),
            Err(LabError::InvalidParameter { name: "gravity", .. })
        ));
        assert!(!s.is_running());
    }

    #[test]
    fn parameter_changes_wait_for_next_start() {
        let mut s = session();
        s.switch_experiment(ExperimentKind::Pendulum);
        s.start().unwrap();
        s.tick(FRAME);

        s.set_parameters(PhysicalParameters {
            length: 4.0,
            ..Default::default()
        });
        s.tick(FRAME);

        let mut expected = PendulumState::released(30f64.to_radians());
        for _ in 0..2 {
            expected = step_pendulum(expected, 2.0, 9.8, 0.016);
        }
        assert_eq!(*s.state(), ExperimentState::Pendulum(expected));
    }

    #[test]
    fn switching_stops_and_resets() {
        let mut s = session();
        s.start().unwrap();
        for _ in 0..10 {
            s.tick(FRAME);
        }

        s.switch_experiment(ExperimentKind::Collision);
        assert!(!s.is_running());
        assert_eq!(s.state().kind(), ExperimentKind::Collision);
        assert_eq!(*s.observables(), Observables::default());
        assert!(s.trajectory().is_empty());
    }

    #[test]
    fn stop_freezes_state() {
        let mut s = session();
        s.switch_experiment(ExperimentKind::Pendulum);
        s.start().unwrap();
        s.tick(FRAME);
        s.stop();
        let frozen = *s.state();

        s.tick(FRAME);
        assert_eq!(*s.state(), frozen);
        assert_eq!(s.status(), RunStatus::Idle);
    }

    #[test]
    fn reset_is_idempotent() {
        let mut s = session();
        s.switch_experiment(ExperimentKind::Energy);
        s.start().unwrap();
        for _ in 0..50 {
            s.tick(FRAME);
        }

        s.reset();
        let once = (*s.state(), *s.observables(), s.status(), s.trajectory().to_vec());
        s.reset();
        let twice = (*s.state(), *s.observables(), s.status(), s.trajectory().to_vec());

        assert_eq!(once, twice);
        assert_eq!(once.1, Observables::default());
    }

    #[test]
    fn pendulum_pose_has_anchor() {
        let mut s = session();
        s.switch_experiment(ExperimentKind::Pendulum);
        s.start().unwrap();

        let pose = s.pose();
        assert_eq!(pose.anchor, Some(DVec2::new(0.0, 5.0)));
        assert!((pose.body.distance(DVec2::new(0.0, 5.0)) - 2.0).abs() < 1e-12);
    }

    #[test]
    fn collision_counts_contacts() {
        let mut s = session();
        s.switch_experiment(ExperimentKind::Collision);
        s.set_parameters(PhysicalParameters {
            mass: 1.0,
            second_mass: 3.0,
            speed: 5.0,
            ..Default::default()
        });
        s.start().unwrap();

        // boxes 10 m apart close at 10 m/s and touch after 0.9 s
        for _ in 0..60 {
            s.tick(FRAME);
        }
        assert_eq!(s.observables().collisions, 1);
        match s.state() {
            ExperimentState::Collision(boxes) => {
                assert!((boxes.left.velocity + 10.0).abs() < 1e-12);
                assert!(boxes.right.velocity.abs() < 1e-12);
            }
            other => panic!("unexpected state {other:?}"),
        }
    }

    #[test]
    fn stopped_pendulum_pose_ignores_new_parameters() {
        let mut s = session();
        s.switch_experiment(ExperimentKind::Pendulum);
        s.start().unwrap();
        for _ in 0..10 {
            s.tick(FRAME);
        }
        s.stop();

        let before = s.pose();
        s.set_parameters(PhysicalParameters {
            length: 4.0,
            ..Default::default()
        });

        assert_eq!(s.pose(), before);
        assert!((s.pose().body.y - s.observables().height).abs() < 1e-12);

        // the new length shows up once the experiment is reset
        s.reset();
        assert_eq!(s.pose().body, DVec2::new(0.0, 1.0));
    }

    #[test]
    fn collision_clock_matches_motion_with_uneven_sub_step() {
        let mut config = LabConfig::default();
        config.collision.sub_step = 0.003;
        config.collision.left_wall = None;
        config.collision.right_wall = None;
        let mut s = ExperimentSession::new(config).unwrap();
        s.switch_experiment(ExperimentKind::Collision);
        s.set_parameters(PhysicalParameters {
            speed: 1.0,
            ..Default::default()
        });
        s.start().unwrap();

        for _ in 0..100 {
            s.tick(FRAME);
        }

        let moved = s.pose().body.x - (-5.0);
        let elapsed = s.observables().elapsed_time;
        assert!((elapsed - 1.6).abs() < 1e-9);
        assert!((moved - elapsed).abs() < 1e-9);
    }

    #[test]
    fn wall_clock_is_tracked_separately() {
        let mut s = session();
        s.switch_experiment(ExperimentKind::Pendulum);
        s.start().unwrap();
        for interval in [0.010, 0.030, 0.020] {
            s.tick(interval);
        }

        let obs = s.observables();
        assert!((obs.elapsed_time - 3.0 * 0.016).abs() < 1e-12);
        assert!((obs.wall_clock_time - 0.060).abs() < 1e-12);
    }
}

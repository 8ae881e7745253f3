//! Headless Mechanics Lab
//!
//! Drives every experiment at a simulated 60 Hz frame rate and logs the
//! stats panel, the way the interactive lab would display it. Frame
//! intervals are jittered to show how simulated time drifts from wall time.
//!
//! Usage: `mechanics_lab [config.json]`
//! Set `RUST_LOG=debug` for state transitions, `trace` for every tick.

use std::process::ExitCode;

use common::constants::FRAME_RATE;
use log::{error, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use mechanics_lab::{
    ExperimentKind, ExperimentSession, LabConfig, LabError, PhysicalParameters, Result,
};

/// Simulated seconds each open-ended experiment runs for
const DEMO_SECONDS: f64 = 10.0;
/// Log the stats panel every this many frames
const REPORT_EVERY: u64 = 60;
/// Random launches used to fill the training set
const SWEEP_LAUNCHES: usize = 8;

fn load_config() -> Result<LabConfig> {
    match std::env::args().nth(1) {
        Some(path) => {
            let text = std::fs::read_to_string(&path)
                .map_err(|e| LabError::InvalidConfig(format!("cannot read {path}: {e}")))?;
            info!("loaded configuration from {path}");
            LabConfig::from_json(&text)
        }
        None => Ok(LabConfig::default()),
    }
}

/// Real frame interval around the nominal 60 Hz, ±25%
fn frame_interval(rng: &mut StdRng) -> f64 {
    (1.0 / FRAME_RATE) * rng.gen_range(0.75..1.25)
}

fn run_experiment(
    session: &mut ExperimentSession,
    kind: ExperimentKind,
    rng: &mut StdRng,
) -> Result<()> {
    session.switch_experiment(kind);
    info!("\n{}", kind.equation_card());
    session.start()?;

    let max_frames = (DEMO_SECONDS * FRAME_RATE) as u64;
    for frame in 1..=max_frames {
        if let Some(summary) = session.tick(frame_interval(rng)) {
            info!(
                "{kind}: {:?} at t = {:.3} s, range = {:.3} m",
                summary.reason,
                summary.elapsed_time,
                summary.range()
            );
            break;
        }
        if frame % REPORT_EVERY == 0 {
            report(session);
        }
    }

    session.stop();
    report(session);
    Ok(())
}

fn report(session: &ExperimentSession) {
    let obs = session.observables();
    let pose = session.pose();
    info!(
        "[{}] t = {:.2} s (wall {:.2} s) | v = {:.2} m/s | h = {:.2} m | KE = {:.2} J | PE = {:.2} J | E = {:.2} J | pos = ({:.2}, {:.2})",
        session.kind(),
        obs.elapsed_time,
        obs.wall_clock_time,
        obs.speed,
        obs.height,
        obs.kinetic_energy,
        obs.potential_energy,
        obs.total_energy,
        pose.body.x,
        pose.body.y,
    );
    match session.kind() {
        ExperimentKind::Collision => info!(
            "    collisions = {}, wall bounces = {}",
            obs.collisions, obs.wall_bounces
        ),
        ExperimentKind::Energy => info!("    turning points = {}", obs.turns),
        _ => {}
    }
}

/// Launch with random speed and angle until each run lands
fn projectile_sweep(session: &mut ExperimentSession, rng: &mut StdRng) -> Result<()> {
    session.switch_experiment(ExperimentKind::Projectile);
    let base = *session.parameters();

    for _ in 0..SWEEP_LAUNCHES {
        session.set_parameters(PhysicalParameters {
            speed: rng.gen_range(5.0..25.0),
            angle_degrees: rng.gen_range(15.0..75.0),
            ..base
        });
        session.start()?;
        while session.tick(frame_interval(rng)).is_none() {}
    }
    session.set_parameters(base);

    let samples = session.training_set();
    info!("collected {} training samples", samples.len());
    for sample in samples.samples() {
        info!("    inputs = {:?} -> outputs = {:?}", sample.inputs, sample.outputs);
    }
    Ok(())
}

fn run() -> Result<()> {
    let config = load_config()?;
    let mut session = ExperimentSession::new(config)?;
    let mut rng = StdRng::seed_from_u64(2024);

    for kind in ExperimentKind::ALL {
        run_experiment(&mut session, kind, &mut rng)?;
    }
    projectile_sweep(&mut session, &mut rng)
}

fn main() -> ExitCode {
    common::init_logging();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

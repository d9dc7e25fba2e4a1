//! Headless orbit simulation
//!
//! Runs one of the engine presets for a fixed number of frames, five
//! micro-steps per frame, and logs the energy as it goes. Useful for checking
//! a preset's stability without a renderer.
//!
//! Examples:
//! - `orbit_sim --scenario solar --frames 3000 --probes 3`
//! - `RUST_LOG=debug orbit_sim --scenario figure8 --gravity 10`

use std::f64::consts::TAU;

use anyhow::{Context, Result};
use clap::Parser;
use log::{info, warn};
use orbit_core::analytics::{self, escape_velocity};
use orbit_core::scenarios::{self, Scenario};
use orbit_core::{BodyId, GravityEngine};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[derive(Parser, Debug)]
#[command(about = "Run an n-body preset without a window")]
struct Args {
    /// Preset to load: figure8, random, hierarchical, solar or disk
    #[arg(short, long, default_value = "figure8")]
    scenario: String,

    /// Rendered frames to simulate
    #[arg(short, long, default_value_t = 600)]
    frames: usize,

    /// Multiplier on the micro-step size
    #[arg(short, long, default_value_t = 1.0)]
    time_scale: f64,

    /// Override the preset's gravitational constant
    #[arg(short, long)]
    gravity: Option<f64>,

    /// Probes to launch, spread evenly over the run
    #[arg(long, default_value_t = 0)]
    probes: usize,

    /// Seed for probe headings
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Log energy every this many frames
    #[arg(long, default_value_t = 60)]
    report_every: usize,
}

struct App {
    engine: GravityEngine,
    scenario: Scenario,
    time_scale: f64,
    rng: StdRng,
    probe_log: Vec<String>,
    frame: usize,
}

impl App {
    fn new(scenario: Scenario, args: &Args) -> Result<Self> {
        let mut engine = scenario
            .engine()
            .with_context(|| format!("failed to build scenario {}", scenario))?;
        if let Some(g) = args.gravity {
            engine.set_gravity(g);
        }

        Ok(Self {
            engine,
            scenario,
            time_scale: args.time_scale,
            rng: StdRng::seed_from_u64(args.seed),
            probe_log: Vec::new(),
            frame: 0,
        })
    }

    fn update(&mut self) -> Result<()> {
        self.engine
            .step_frame(self.time_scale)
            .with_context(|| format!("frame {} of {}", self.frame, self.scenario))?;
        self.frame += 1;
        Ok(())
    }

    /// Launch a probe from the first dynamic body at an escape-ish speed
    fn launch_probe(&mut self) -> Option<BodyId> {
        let anchor_mass = self.engine.bodies().first()?.mass;
        let anchor_position = self.engine.bodies().first()?.position;
        let launcher = self.engine.bodies().iter().skip(1).find(|b| !b.is_static)?.clone();

        let distance = launcher.position.distance(anchor_position).max(1.0);
        let speed = 0.5 * escape_velocity(self.engine.gravity(), anchor_mass, distance);
        let heading = self.rng.gen::<f64>() * TAU;

        let id = self
            .engine
            .add_body(scenarios::probe(&launcher, heading, speed, 0.01));
        let entry = format!(
            "frame {}: probe {} launched from body {} at {:.1} u/s, heading {:.2} rad",
            self.frame, id, launcher.id, speed, heading
        );
        info!("{}", entry);
        self.probe_log.push(entry);
        Some(id)
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let scenario: Scenario = args.scenario.parse().with_context(|| {
        format!("expected one of: {}", Scenario::NAMES.join(", "))
    })?;
    let mut app = App::new(scenario, &args)?;

    let start = app.engine.energy();
    info!(
        "{}: {} bodies, G = {}, initial energy {:.3}",
        scenario,
        app.engine.bodies().len(),
        app.engine.gravity(),
        start.total
    );

    let probe_every = match args.probes {
        0 => None,
        n => Some((args.frames / (n + 1)).max(1)),
    };
    let report_every = args.report_every.max(1);

    for frame in 1..=args.frames {
        app.update()?;

        if let Some(every) = probe_every {
            let due = frame % every == 0 && app.probe_log.len() < args.probes;
            if due && app.launch_probe().is_none() {
                warn!("no dynamic body to launch a probe from");
            }
        }

        if frame % report_every == 0 {
            let energy = app.engine.energy();
            info!(
                "frame {:>6}  kinetic {:>14.3}  potential {:>14.3}  total {:>14.3}",
                frame, energy.kinetic, energy.potential, energy.total
            );
        }
    }

    let end = app.engine.energy();
    let drift = if start.total != 0.0 {
        (end.total - start.total) / start.total.abs() * 100.0
    } else {
        0.0
    };

    println!("scenario      {}", scenario);
    println!("frames        {}", args.frames);
    println!("micro-steps   {}", app.engine.step_count());
    println!("bodies        {}", app.engine.bodies().len());
    println!("energy        {:.3} -> {:.3} ({:+.3}%)", start.total, end.total, drift);

    let insights = analytics::orbital_insights(app.engine.bodies(), app.engine.gravity());
    for insight in &insights {
        println!(
            "  {:<10} around {:<8} r = {:>8.1}  v = {:>7.2}  T = {:>8.2}",
            insight.label, insight.parent, insight.distance, insight.speed, insight.period
        );
    }
    let mut around_primary: Vec<_> = insights
        .iter()
        .filter(|i| insights.first().map(|f| &f.parent) == Some(&i.parent))
        .collect();
    around_primary.sort_by(|a, b| a.distance.total_cmp(&b.distance));
    if let [.., inner, outer] = around_primary.as_slice() {
        let r = analytics::resonance(outer.period, inner.period);
        println!(
            "{}:{} period ratio {:.3} (nearest {}:{})",
            outer.label, inner.label, r.ratio, r.numerator, r.denominator
        );
    }
    if let Some(mean) = analytics::mean_orbital_speed(&insights) {
        println!("mean orbital speed {:.2}", mean);
    }
    for entry in &app.probe_log {
        println!("  {}", entry);
    }

    Ok(())
}

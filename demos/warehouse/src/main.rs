//! warehouse — end-to-end demo of the patrol framework.
//!
//! Four guards walk a small warehouse floor: two on the perimeter loop, two
//! bouncing along the centre aisle.  Sixty seconds in, a scripted pallet
//! crash near the dock door diverts one guard from each beat to investigate
//! the noise trail.  Agent snapshots, walk sounds, and per-tick summaries
//! are written as CSV under `out/`.
//!
//! Run with `cargo run --release -p warehouse`.

mod floorplan;

use std::fs;
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;
use patrol_behavior::{AgentProfile, BehaviorController};
use patrol_core::{SimClock, SimConfig, SimRng, Tick, Vec2};
use patrol_output::{CsvWriter, OutputWriter, SimOutputObserver};
use patrol_sim::{SimBuilder, SimObserver};
use patrol_sound::{NullSoundField, SoundEvent};

/// Scenario seed; change it to reshuffle the spawn jitter.
const SEED: u64 = 42;
/// 100 ms ticks.
const DT_SECS: f32 = 0.1;
/// Two minutes of simulated time.
const SIM_SECS: f32 = 120.0;
/// One snapshot per simulated second.
const SNAPSHOT_INTERVAL_TICKS: u64 = 10;
/// The pallet crash lands at t = 60 s.
const DIVERSION_TICK: u64 = 600;
/// (route index, anchor waypoint) for each guard post.
const GUARD_POSTS: [(usize, usize); 4] = [(0, 0), (0, 2), (1, 0), (1, 2)];
const OUT_DIR: &str = "out";

fn guard_profile() -> AgentProfile {
    AgentProfile {
        patrol_speed: 1.4,
        search_speed: 2.2,
        wait_secs: 3.0,
        emits_sound: true,
        volume: 1.0,
    }
}

/// Wraps [`SimOutputObserver`] to count rows as they stream past, so the
/// demo can report how much it wrote without re-reading the files.
struct CountingObserver<W: OutputWriter> {
    inner: SimOutputObserver<W>,
    snapshot_rows: usize,
    sound_rows: usize,
    summary_rows: usize,
}

impl<W: OutputWriter> CountingObserver<W> {
    fn new(inner: SimOutputObserver<W>) -> Self {
        CountingObserver {
            inner,
            snapshot_rows: 0,
            sound_rows: 0,
            summary_rows: 0,
        }
    }
}

impl<W: OutputWriter> SimObserver for CountingObserver<W> {
    fn on_tick_end(&mut self, tick: Tick, sounds: usize) {
        self.summary_rows += 1;
        self.inner.on_tick_end(tick, sounds);
    }

    fn on_sounds(&mut self, tick: Tick, events: &[SoundEvent]) {
        self.sound_rows += events.len();
        self.inner.on_sounds(tick, events);
    }

    fn on_snapshot(&mut self, tick: Tick, positions: &[Vec2], controllers: &[BehaviorController]) {
        self.snapshot_rows += positions.len();
        self.inner.on_snapshot(tick, positions, controllers);
    }

    fn on_sim_end(&mut self, tick: Tick) {
        self.inner.on_sim_end(tick);
    }
}

fn main() -> Result<()> {
    println!("=== warehouse — guard patrol demo ===");

    // 1. Load the floor plan.
    let routes = floorplan::load_floor_routes()?;
    let waypoints: usize = routes.iter().map(|r| r.len()).sum();
    println!("Floor plan: {} routes, {} waypoints", routes.len(), waypoints);

    // 2. Simulation config.
    let total_ticks = SimClock::new(DT_SECS).ticks_for_secs(SIM_SECS);
    let config = SimConfig {
        dt_secs: DT_SECS,
        total_ticks,
        seed: SEED,
        num_threads: None,
        snapshot_interval_ticks: SNAPSHOT_INTERVAL_TICKS,
    };
    println!(
        "Config: {} ticks of {} ms ({:.0} s simulated), seed {}",
        config.total_ticks,
        (DT_SECS * 1000.0) as u64,
        SIM_SECS,
        config.seed,
    );

    // 3. CSV output under out/.
    fs::create_dir_all(OUT_DIR)?;
    let writer = CsvWriter::new(Path::new(OUT_DIR))?;
    let mut obs = CountingObserver::new(SimOutputObserver::new(writer, &config));
    println!("Writing CSV output to {OUT_DIR}/");

    // 4. Spawn guards at jittered posts.
    let mut rng = SimRng::new(config.seed);
    let mut builder = SimBuilder::new(config, NullSoundField);
    let mut guards = Vec::with_capacity(GUARD_POSTS.len());
    for (route_idx, anchor) in GUARD_POSTS {
        let route = &routes[route_idx];
        let start = floorplan::jittered_start(route, anchor, &mut rng);
        let guard = builder.spawn(guard_profile(), Arc::clone(route), start)?;
        println!("  {guard}: route {route_idx}, starting near {start}");
        guards.push(guard);
    }
    let mut sim = builder.build()?;

    // 5. Quiet stretch up to the incident.
    println!("Running {DIVERSION_TICK} quiet ticks...");
    let started = Instant::now();
    sim.run_ticks(DIVERSION_TICK, &mut obs);

    // 6. Scripted incident: a pallet crash near the dock door.  The
    //    perimeter guard hears the full trail, the aisle guard a faint echo.
    println!(
        "t = {:>5.1} s: pallet crash at the dock door — {} and {} divert",
        sim.clock.sim_time_secs(),
        guards[0],
        guards[2],
    );
    sim.notify_sound_source(guards[0], floorplan::breach_path())?;
    sim.notify_sound_source(guards[2], floorplan::echo_path())?;

    // 7. Run out the remaining ticks.
    sim.run(&mut obs);
    let elapsed = started.elapsed();
    println!(
        "t = {:>5.1} s: simulation complete in {:.2?}",
        sim.clock.sim_time_secs(),
        elapsed,
    );

    // 8. Report what was written and where everyone ended up.
    if let Some(err) = obs.inner.take_error() {
        eprintln!("output error: {err}");
    }
    println!();
    println!(
        "Wrote {} snapshot rows, {} sound rows, {} tick summaries",
        obs.snapshot_rows, obs.sound_rows, obs.summary_rows,
    );
    println!();
    println!("{:<12} {:<12} {}", "Guard", "Activity", "Position");
    println!("{}", "-".repeat(44));
    for (i, controller) in sim.controllers.iter().enumerate() {
        println!(
            "{:<12} {:<12} {}",
            i,
            controller.activity().as_str(),
            sim.positions[i],
        );
    }

    Ok(())
}

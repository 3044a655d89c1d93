//! city — the two-route sample city on the transit fleet simulator.
//!
//! Live mode (default) ticks the fleet in real time on a scheduler thread and
//! redraws the arrivals board for one stop every second.  `--ticks N` runs a
//! batch of N ticks as fast as possible instead, optionally recording CSV
//! output.

mod routes;

use std::path::PathBuf;
use std::thread::sleep;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use log::info;

use ts_core::{SimConfig, StopId};
use ts_eta::{Arrival, ArrivalScope, DEFAULT_ARRIVALS};
use ts_fleet::Vehicle;
use ts_network::{RouteNetwork, load_routes_json};
use ts_output::{CsvWriter, SimOutputObserver};
use ts_sim::{NoopObserver, Scheduler, SharedSimulation, SimBuilder, Simulation};

use routes::sample_network;

#[derive(Copy, Clone, Debug, ValueEnum)]
enum Scope {
    /// Every bus on every route competes for the board.
    All,
    /// Only buses whose route serves the stop.
    Serving,
}

impl From<Scope> for ArrivalScope {
    fn from(scope: Scope) -> Self {
        match scope {
            Scope::All => ArrivalScope::AllRoutes,
            Scope::Serving => ArrivalScope::ServingRoutes,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "city", version, about = "Simulated bus fleet with live arrival estimates")]
struct Args {
    /// Route network JSON (defaults to the embedded two-route sample)
    #[arg(short, long)]
    routes: Option<PathBuf>,

    /// Simulation config JSON; missing fields take their defaults
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the config's RNG seed
    #[arg(long)]
    seed: Option<u64>,

    /// Stop code whose arrivals board is printed
    #[arg(long, default_value = "S3")]
    stop: String,

    /// Which buses may appear on the board
    #[arg(long, value_enum, default_value_t = Scope::All)]
    scope: Scope,

    /// Live mode: how many seconds to run before stopping
    #[arg(long, default_value_t = 10)]
    seconds: u64,

    /// Batch mode: run this many ticks without waiting on real time
    #[arg(long)]
    ticks: Option<u64>,

    /// Write vehicle_snapshots.csv and tick_summaries.csv to this directory
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Verbose output (show debug messages)
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(if args.verbose { "debug" } else { "info" }),
    )
    .format_timestamp(None)
    .init();

    let network = match &args.routes {
        Some(path) => load_routes_json(path)
            .with_context(|| format!("loading routes from {}", path.display()))?,
        None => sample_network().context("loading embedded sample routes")?,
    };

    let mut config = match &args.config {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            serde_json::from_str::<SimConfig>(&text)
                .with_context(|| format!("parsing {}", path.display()))?
        }
        None => SimConfig::default(),
    };
    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    if config.start_unix_ms == 0 {
        config.start_unix_ms = now_unix_ms()?;
    }
    if let Some(ticks) = args.ticks {
        config.total_ticks = ticks;
    }

    let Some(stop) = network.stop_by_code(&args.stop).map(|s| s.id) else {
        bail!("unknown stop {:?}", args.stop);
    };

    println!("=== city — transit fleet simulator ===");
    println!(
        "Routes: {}  |  Stops: {}  |  Seed: {}",
        network.route_count(),
        network.stop_count(),
        config.seed
    );
    println!();

    let sim = SimBuilder::new(config, network).build()?;

    match args.ticks {
        Some(_) => run_batch(sim, &args, stop),
        None => run_live(sim, &args, stop),
    }
}

/// Tick as fast as possible, then print the final fleet and board.
fn run_batch(mut sim: Simulation, args: &Args, stop: StopId) -> Result<()> {
    let t0 = Instant::now();
    match &args.output {
        Some(dir) => {
            let mut obs = SimOutputObserver::new(CsvWriter::new(dir)?);
            sim.run(&mut obs)?;
            if let Some(e) = obs.take_error() {
                eprintln!("output error: {e}");
            }
        }
        None => sim.run(&mut NoopObserver)?,
    }
    info!(
        "batch of {} ticks done in {:.3} s",
        sim.config.total_ticks,
        t0.elapsed().as_secs_f64()
    );

    println!("After {} ({})", sim.clock.current_tick, sim.clock);
    print_fleet(&sim.network, sim.vehicles());
    println!();
    print_board(&sim.network, stop, &sim.arrivals(stop, DEFAULT_ARRIVALS, args.scope.into()));
    Ok(())
}

/// Tick in real time on the scheduler thread, redrawing the board each second.
fn run_live(sim: Simulation, args: &Args, stop: StopId) -> Result<()> {
    let shared = SharedSimulation::new(sim);
    let refresh = Duration::from_secs(1);

    match &args.output {
        Some(dir) => {
            let obs = SimOutputObserver::new(CsvWriter::new(dir)?);
            let handle = Scheduler::spawn(shared.clone(), obs)?;
            watch(&shared, args, stop, refresh)?;
            if let Some(e) = handle.stop()?.take_error() {
                eprintln!("output error: {e}");
            }
        }
        None => {
            let handle = Scheduler::spawn(shared.clone(), NoopObserver)?;
            watch(&shared, args, stop, refresh)?;
            handle.stop()?;
        }
    }

    shared.read(|sim| {
        println!();
        print_fleet(&sim.network, sim.vehicles());
    })?;
    Ok(())
}

fn watch(shared: &SharedSimulation, args: &Args, stop: StopId, refresh: Duration) -> Result<()> {
    for _ in 0..args.seconds {
        sleep(refresh);
        shared.read(|sim| {
            println!("── {} ──", sim.clock);
            print_board(&sim.network, stop, &sim.arrivals(stop, DEFAULT_ARRIVALS, args.scope.into()));
        })?;
    }
    Ok(())
}

fn print_fleet(network: &RouteNetwork, vehicles: &[Vehicle]) {
    println!(
        "{:<8} {:<6} {:>10} {:>10} {:>8} {:>4} {:>8}  {:<8}",
        "Bus", "Route", "Lat", "Lon", "Progress", "Dir", "km/h", "Crowd"
    );
    println!("{}", "-".repeat(72));
    for v in vehicles {
        let route = network.route(v.route).map_or("?", |r| r.code.as_str());
        println!(
            "{:<8} {:<6} {:>10.5} {:>10.5} {:>8.3} {:>4} {:>8.1}  {:<8}",
            v.label,
            route,
            v.position.lat,
            v.position.lon,
            v.progress,
            v.direction.to_string(),
            v.speed_kmh,
            v.crowd.label(),
        );
    }
}

fn print_board(network: &RouteNetwork, stop: StopId, arrivals: &[Arrival]) {
    let name = network.stop(stop).map_or("?", |s| s.name.as_str());
    println!("Next arrivals at {name}:");
    if arrivals.is_empty() {
        println!("  (none)");
    }
    for a in arrivals {
        let route = network.route(a.route).map_or("?", |r| r.name.as_str());
        println!("  {:<8} {:<10} {:>12}  {}", a.label, route, a.eta.to_string(), a.crowd);
    }
}

fn now_unix_ms() -> Result<i64> {
    let since = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .context("system clock before Unix epoch")?;
    Ok(since.as_millis() as i64)
}

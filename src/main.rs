use std::error::Error;
use std::path::PathBuf;

use clap::Parser;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use evtolsim::aircraft::BernoulliSampler;
use evtolsim::config::SimConfig;
use evtolsim::fleet::{self, Composition};
use evtolsim::report;
use evtolsim::sim::kernel::Simulation;

#[derive(Parser)]
#[command(name = "evtolsim", version, about = "eVTOL fleet simulator with a shared charger pool")]
struct Args {
    /// Path to a JSON scenario file
    #[arg(short, long, value_name = "FILE")]
    scenario: Option<PathBuf>,

    /// Number of aircraft in the fleet
    #[arg(long, value_name = "N")]
    fleet_size: Option<usize>,

    /// Number of charger slots shared by the fleet
    #[arg(long, value_name = "N")]
    chargers: Option<usize>,

    /// Simulated horizon in hours
    #[arg(long, value_name = "HOURS")]
    hours: Option<f64>,

    /// RNG seed; a random one is drawn (and printed) when omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Fleet composition rule
    #[arg(long, value_enum)]
    composition: Option<Composition>,

    /// Log verbosity (-v: info, -vv: debug, -vvv: trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    init_logging(args.verbose);

    let mut config = match &args.scenario {
        Some(path) => SimConfig::load_from_file(path)?,
        None => SimConfig::default(),
    };
    if let Some(n) = args.fleet_size {
        config.fleet_size = n;
    }
    if let Some(n) = args.chargers {
        config.num_chargers = n;
    }
    if let Some(hours) = args.hours {
        config.horizon_hours = hours;
    }
    if let Some(seed) = args.seed {
        config.seed = Some(seed);
    }
    if let Some(composition) = args.composition {
        config.composition = composition;
    }
    config.validate()?;

    let seed = config.seed.unwrap_or_else(rand::random);

    println!("========== eVTOL Aircraft Simulation ==========");
    println!("Fleet size:  {} aircraft", config.fleet_size);
    println!("Chargers:    {}", config.num_chargers);
    println!("Horizon:     {} hours", config.horizon_hours);
    println!("Seed:        {seed}");

    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let fleet = fleet::build(config.fleet_size, config.composition, &mut rng);
    debug!("fleet built, starting event loop");

    let mut simulation = Simulation::new(
        fleet,
        config.num_chargers,
        config.horizon_hours,
        BernoulliSampler::new(rng),
    );
    simulation.run();
    debug!("run complete at {:.3}h", simulation.current_time());

    println!("{}", report::render(simulation.stats()));
    Ok(())
}

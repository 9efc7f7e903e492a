use std::cmp::Ordering;
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use stargen_calendar::{compare_dates, minutes_between, parse_date};
use stargen_config::{GeneratorConfig, load_generator_config};
use stargen_export::{ephemeris, system as system_export, writer_for_path};
use stargen_generator::{GenerationRequest, StarSystem, generate_system_with};
use stargen_orbits::{OrbitQuery, OrbitalSystem, orbital_state};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Deterministic star system generator and orbit calculator"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate a system and print its bodies
    Generate {
        #[command(flatten)]
        system: SystemArgs,

        /// Print the system as JSON instead of a table
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Show planet bearings at a campaign date
    Orbits {
        #[command(flatten)]
        system: SystemArgs,

        /// Campaign date, `YYYY-DDD[ HH:MM]` or `DDD-YYYY[ HH:MM]`
        #[arg(long, default_value = "")]
        date: String,

        /// Days between samples when tabulating
        #[arg(long, default_value_t = 1.0)]
        step_days: f64,

        /// Number of samples in the CSV table
        #[arg(long, default_value_t = 1)]
        steps: usize,

        /// Write the bearing table as CSV (`-` for stdout)
        #[arg(long)]
        csv: Option<PathBuf>,
    },
    /// Compare two canonical campaign dates (`YYYY-DDD HH:MM`)
    Date {
        #[arg(long)]
        from: String,

        #[arg(long)]
        to: String,
    },
}

#[derive(Args)]
struct SystemArgs {
    /// Sector hex coordinate, e.g. 1910
    #[arg(long)]
    hex: String,

    /// World statistics profile, e.g. A867974-C
    #[arg(long, default_value = "")]
    uwp: String,

    /// Primary stellar classification, e.g. "G2 V"
    #[arg(long, default_value = "G2 V")]
    stellar: String,

    /// Number of gas giants (none when omitted)
    #[arg(long)]
    gas_giants: Option<u32>,

    /// Number of planetoid belts (none when omitted)
    #[arg(long)]
    belts: Option<u32>,

    /// System name used to seed live bearings (defaults to the hex)
    #[arg(long)]
    name: Option<String>,

    /// Generator tunables (TOML or YAML file, or a directory of TOML files)
    #[arg(long)]
    config: Option<PathBuf>,
}

impl SystemArgs {
    fn build(&self) -> anyhow::Result<StarSystem> {
        let config = match &self.config {
            Some(path) => load_generator_config(path)
                .with_context(|| format!("loading generator config {}", path.display()))?,
            None => GeneratorConfig::default(),
        };
        let request = GenerationRequest {
            hex: self.hex.clone(),
            world_stats: self.uwp.clone(),
            stellar_class: self.stellar.clone(),
            gas_giants: self.gas_giants,
            belts: self.belts,
        };
        let system = generate_system_with(&request, &config);
        tracing::info!(
            hex = %system.hex,
            bodies = system.objects().len(),
            "generated system"
        );
        Ok(match &self.name {
            Some(name) => system.named(name.clone()),
            None => system,
        })
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Generate { system, json } => run_generate(&system, json),
        Command::Orbits {
            system,
            date,
            step_days,
            steps,
            csv,
        } => run_orbits(&system, &date, step_days, steps, csv),
        Command::Date { from, to } => run_date(&from, &to),
    }
}

fn run_generate(args: &SystemArgs, json: bool) -> anyhow::Result<()> {
    let system = args.build()?;
    if json {
        let stdout = io::stdout();
        system_export::write_json(stdout.lock(), &system)?;
        println!();
        return Ok(());
    }

    println!("=== System {} ===", system.system_name());
    println!("World stats : {}", system.world_stats);
    println!("Stellar     : {}", system.stellar_class);
    println!(
        "{:<44} {:<10} {:<18} {:>10} {:>12} {:>8}",
        "id", "type", "subtype", "orbit", "radius km", "bearing"
    );
    for body in system.objects() {
        let orbit = match (body.orbit_au(), body.orbit_radii()) {
            (Some(au), _) => format!("{au:.3} AU"),
            (None, Some(radii)) => format!("{radii:.1} R"),
            (None, None) => String::new(),
        };
        let marker = if body.is_mainworld { " *" } else { "" };
        println!(
            "{:<44} {:<10} {:<18} {:>10} {:>12.0} {:>8.1}{}",
            body.id,
            body.body_type.as_str(),
            body.subtype,
            orbit,
            body.radius_km,
            body.bearing,
            marker
        );
    }
    Ok(())
}

fn run_orbits(
    args: &SystemArgs,
    date: &str,
    step_days: f64,
    steps: usize,
    csv: Option<PathBuf>,
) -> anyhow::Result<()> {
    let system = args.build()?;
    let start = parse_date(date).with_context(|| format!("parsing date {date:?}"))?;
    let planets: Vec<_> = system.planets().collect();

    if let Some(path) = csv {
        let labels: Vec<String> = planets.iter().map(|p| p.id.clone()).collect();
        let rows = ephemeris::sample_bearings(&system, &start, step_days, steps.max(1));
        let writer = writer_for_path(&path)
            .with_context(|| format!("opening {}", path.display()))?;
        ephemeris::write_csv(writer, &labels, &rows)?;
        return Ok(());
    }

    let mut out = io::stdout().lock();
    writeln!(out, "=== {} at {} ===", system.system_name(), start)?;
    writeln!(
        out,
        "{:>3} {:<44} {:>9} {:>12} {:>9}",
        "#", "id", "orbit AU", "period days", "bearing"
    )?;
    for (planet_index, planet) in planets.iter().enumerate() {
        let Some(orbit_au) = planet.orbit_au() else {
            continue;
        };
        let state = orbital_state(&OrbitQuery {
            system_name: system.system_name(),
            planet_index,
            orbit_au,
            current_date: &start,
        });
        writeln!(
            out,
            "{:>3} {:<44} {:>9.3} {:>12.1} {:>9.3}",
            planet_index, planet.id, orbit_au, state.period_days, state.bearing_deg
        )?;
    }
    Ok(())
}

fn run_date(from: &str, to: &str) -> anyhow::Result<()> {
    let ordering = compare_dates(from, to)?;
    let minutes = minutes_between(from, to)?;
    let symbol = match ordering {
        Ordering::Less => "<",
        Ordering::Equal => "=",
        Ordering::Greater => ">",
    };
    println!("{from} {symbol} {to}");
    println!("minutes: {minutes}");
    println!("days   : {:.4}", minutes as f64 / 1_440.0);
    Ok(())
}

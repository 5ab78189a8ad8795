use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use satellite_hops::config::{
    AltitudeModelConfig, RouteConfig, SearchStrategyConfig, load_route_config,
};
use satellite_hops::export::hops::write_hops;
use satellite_hops::export::report::{RouteReport, write_report};
use satellite_hops::route::Completion;
use satellite_hops::session::plan_route;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

/// Find a relay route between two ground points through a satellite constellation.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Line-of-sight satellite relay route finder"
)]
struct Cli {
    /// Data file with the seed line, route row, and satellite rows
    datafile: PathBuf,

    /// Optional route configuration (TOML or YAML)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Dead-end handling during the search (overrides config)
    #[arg(long, value_enum)]
    strategy: Option<StrategyArg>,

    /// Whether altitude raises a location off the sphere (overrides config)
    #[arg(long, value_enum)]
    altitude_model: Option<AltitudeArg>,

    /// Maximum number of relays accepted from the data file (overrides config)
    #[arg(long, value_parser = clap::value_parser!(u16).range(1..))]
    relay_capacity: Option<u16>,

    /// Write a JSON route report (use '-' for stdout)
    #[arg(long)]
    json: Option<PathBuf>,
}

#[derive(Copy, Clone, ValueEnum, Debug)]
enum StrategyArg {
    FirstFit,
    Backtracking,
}

#[derive(Copy, Clone, ValueEnum, Debug)]
enum AltitudeArg {
    Surface,
    Raised,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // --help and --version also arrive here and are not failures.
            let code = if err.use_stderr() { 1 } else { 0 };
            let _ = err.print();
            return ExitCode::from(code);
        }
    };

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = match &cli.config {
        Some(path) => load_route_config(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => RouteConfig::default(),
    };
    if let Some(strategy) = cli.strategy {
        config.strategy = match strategy {
            StrategyArg::FirstFit => SearchStrategyConfig::FirstFit,
            StrategyArg::Backtracking => SearchStrategyConfig::Backtracking,
        };
    }
    if let Some(model) = cli.altitude_model {
        config.altitude_model = match model {
            AltitudeArg::Surface => AltitudeModelConfig::Surface,
            AltitudeArg::Raised => AltitudeModelConfig::Raised,
        };
    }
    if let Some(capacity) = cli.relay_capacity {
        config.relay_capacity = usize::from(capacity);
    }

    init_logging(&config.log_level);

    let plan = plan_route(&config, &cli.datafile)?;
    let registry = &plan.dataset.registry;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if let Some(start) = registry.start() {
        writeln!(
            out,
            "{:.5}, {:.5}",
            start.latlon.latitude_deg, start.latlon.longitude_deg
        )?;
    }
    write_hops(&mut out, &plan.search.route, registry)?;
    out.flush()?;
    drop(out);

    if let Some(path) = &cli.json {
        let report = RouteReport::new(plan.dataset.seed, &plan.search, registry);
        write_report(path, &report)
            .with_context(|| format!("writing report {}", path.display()))?;
    }

    match plan.search.completion {
        Some(Completion::LineOfSight) => {}
        Some(Completion::HopLimit) => {
            eprintln!("[warn] hop limit reached; final leg is not in line of sight")
        }
        None => eprintln!("No complete route found"),
    }

    Ok(())
}

fn init_logging(level: &str) {
    let level = match level.parse::<LevelFilter>() {
        Ok(level) => level,
        Err(_) => {
            eprintln!("[warn] invalid log level '{level}', defaulting to 'warn'");
            LevelFilter::WARN
        }
    };
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .parse_lossy(std::env::var("RUST_LOG").unwrap_or_default());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

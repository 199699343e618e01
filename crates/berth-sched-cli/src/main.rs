// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use berth_sched_core::prelude::{TimePoint, TimestampParseError, format_timestamp, parse_timestamp};
use berth_sched_model::prelude::{
    AssignmentRecord, BerthIdentifier, BerthPool, BerthPoolError, ConfigError, TerminalConfig,
    VesselLoader, VesselLoaderError,
};
use berth_sched_solver::prelude::{BerthAvailability, berth_availability};
use berth_sched_solver::scheduling::{greedy::GreedyScheduler, traits::Scheduler};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::format::FmtSpan;

const USAGE: &str = "usage: berth-sched --vessels <file.csv|file.json> [--config <file.json>] \
                     [--berths <n>] [--at <timestamp>]... [--out <file.json>] [--skip-invalid]";

fn enable_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_span_events(FmtSpan::CLOSE)
        .with_writer(std::io::stderr)
        .init();
}

#[derive(Debug, Default, PartialEq)]
struct Cli {
    vessels: Option<PathBuf>,
    config: Option<PathBuf>,
    berths: Option<usize>,
    at: Vec<String>,
    out: Option<PathBuf>,
    skip_invalid: bool,
    help: bool,
}

fn parse_args<I>(args: I) -> Cli
where
    I: IntoIterator<Item = String>,
{
    let mut args = args.into_iter();
    let mut cli = Cli::default();

    while let Some(a) = args.next() {
        match a.as_str() {
            "--vessels" => cli.vessels = args.next().map(PathBuf::from),
            "--config" => cli.config = args.next().map(PathBuf::from),
            "--berths" => cli.berths = args.next().and_then(|x| x.parse().ok()).or(cli.berths),
            "--at" => cli.at.extend(args.next()),
            "--out" => cli.out = args.next().map(PathBuf::from),
            "--skip-invalid" => cli.skip_invalid = true,
            "-h" | "--help" => cli.help = true,
            other => tracing::warn!("Ignoring unknown argument {}", other),
        }
    }
    cli
}

fn parse_cli() -> Cli {
    parse_args(std::env::args().skip(1))
}

#[derive(Debug)]
enum CliError {
    MissingVessels,
    Config(ConfigError),
    Pool(BerthPoolError),
    Loader(VesselLoaderError),
    Timestamp(TimestampParseError),
    Serialize(serde_json::Error),
    Output(std::io::Error),
}

impl CliError {
    fn exit_code(&self) -> u8 {
        match self {
            CliError::MissingVessels | CliError::Timestamp(_) => 2,
            CliError::Config(_) | CliError::Pool(_) | CliError::Loader(_) => 1,
            CliError::Serialize(_) | CliError::Output(_) => 3,
        }
    }
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::MissingVessels => write!(f, "No vessel file given. {}", USAGE),
            CliError::Config(e) => write!(f, "Configuration error: {}", e),
            CliError::Pool(e) => write!(f, "Berth pool error: {}", e),
            CliError::Loader(e) => write!(f, "Could not load vessels: {}", e),
            CliError::Timestamp(e) => write!(f, "Invalid --at value: {}", e),
            CliError::Serialize(e) => write!(f, "Could not serialize report: {}", e),
            CliError::Output(e) => write!(f, "Could not write report: {}", e),
        }
    }
}

impl std::error::Error for CliError {}

impl From<ConfigError> for CliError {
    fn from(e: ConfigError) -> Self {
        CliError::Config(e)
    }
}

impl From<BerthPoolError> for CliError {
    fn from(e: BerthPoolError) -> Self {
        CliError::Pool(e)
    }
}

impl From<VesselLoaderError> for CliError {
    fn from(e: VesselLoaderError) -> Self {
        CliError::Loader(e)
    }
}

impl From<TimestampParseError> for CliError {
    fn from(e: TimestampParseError) -> Self {
        CliError::Timestamp(e)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Serialize(e)
    }
}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        CliError::Output(e)
    }
}

#[derive(Serialize)]
struct BerthReport<'a> {
    berth_id: BerthIdentifier,
    name: &'a str,
    #[serde(with = "berth_sched_model::common::ts")]
    available_time: TimePoint<i64>,
    assignments: usize,
    next_assignments: &'a [AssignmentRecord],
}

#[derive(Serialize)]
struct AvailabilityReport {
    at: String,
    berths: Vec<BerthAvailability>,
}

#[derive(Serialize)]
struct RunReport<'a> {
    start_ts: DateTime<Utc>,
    end_ts: DateTime<Utc>,
    runtime_ms: u128,
    vessels: usize,
    berths: Vec<BerthReport<'a>>,
    availability: Vec<AvailabilityReport>,
}

fn build_report<'a>(
    pool: &'a BerthPool,
    vessels: usize,
    at: &[TimePoint<i64>],
    start_ts: DateTime<Utc>,
    end_ts: DateTime<Utc>,
    runtime_ms: u128,
) -> RunReport<'a> {
    let berths = pool
        .iter()
        .map(|b| BerthReport {
            berth_id: b.id(),
            name: b.name(),
            available_time: b.available_time(),
            assignments: b.assignment_count(),
            next_assignments: b.next_assignments(pool.preview_len()),
        })
        .collect();

    let availability = at
        .iter()
        .map(|&t| AvailabilityReport {
            at: format_timestamp(t),
            berths: berth_availability(pool, t),
        })
        .collect();

    RunReport {
        start_ts,
        end_ts,
        runtime_ms,
        vessels,
        berths,
        availability,
    }
}

fn load_config(cli: &Cli) -> Result<TerminalConfig, ConfigError> {
    let mut config = match &cli.config {
        Some(path) => TerminalConfig::from_path(path)?,
        None => TerminalConfig::default(),
    };
    if let Some(n) = cli.berths {
        config.berth_count = n;
        config.validate()?;
    }
    Ok(config)
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let vessels_path = cli.vessels.as_ref().ok_or(CliError::MissingVessels)?;
    let at = cli
        .at
        .iter()
        .map(|s| parse_timestamp(s))
        .collect::<Result<Vec<_>, _>>()?;

    let config = load_config(cli)?;
    let mut pool = BerthPool::from_config(&config)?;
    let vessels = VesselLoader::from_config(&config)
        .skip_invalid(cli.skip_invalid)
        .from_path(vessels_path)?;

    tracing::info!(
        "Scheduling {} vessels from {} onto {} berths",
        vessels.len(),
        vessels_path.display(),
        pool.len()
    );

    let start_ts = Utc::now();
    let t0 = Instant::now();
    let scheduler = GreedyScheduler;
    let plan = scheduler.assign_all(&vessels, &mut pool);
    let runtime = t0.elapsed();
    let end_ts = Utc::now();

    tracing::info!(
        "{} placed {} vessels, last departure {}, runtime={:?}",
        scheduler.name(),
        plan.len(),
        plan.makespan_end()
            .map(format_timestamp)
            .unwrap_or_else(|| "-".to_string()),
        runtime
    );

    let report = build_report(
        &pool,
        vessels.len(),
        &at,
        start_ts,
        end_ts,
        runtime.as_millis(),
    );
    let json = serde_json::to_string_pretty(&report)?;

    match &cli.out {
        Some(path) => {
            File::create(path)?.write_all(json.as_bytes())?;
            tracing::info!("Wrote report to {}", path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(json.as_bytes())?;
            stdout.write_all(b"\n")?;
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    enable_tracing();

    let cli = parse_cli();
    if cli.help {
        println!("{}", USAGE);
        return ExitCode::SUCCESS;
    }

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{}", e);
            ExitCode::from(e.exit_code())
        }
    }
}

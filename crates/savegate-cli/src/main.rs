use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use tracing::debug;

use savegate_core::domain::{
    ClusterProperties, ha_config_map_name, is_high_availability_enabled, time::parse_timestamp,
};
use savegate_core::{Clock, FixedClock, JobSnapshot, LifecycleReport, SystemClock};

/// savegate - inspect lifecycle decisions for a recorded job snapshot.
#[derive(Parser, Debug)]
#[command(name = "savegate")]
#[command(about = "Evaluate restart/update/HA decisions for a streaming job snapshot")]
struct Args {
    /// Log level (overridden by RUST_LOG).
    #[arg(long, default_value = "warn", env = "SAVEGATE_LOG_LEVEL", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Evaluate every decision for a JSON job snapshot ("-" reads stdin).
    Evaluate {
        snapshot: PathBuf,

        /// Reference time (RFC 3339) when the snapshot has no observedAt.
        #[arg(long)]
        now: Option<String>,

        /// Pretty-print the JSON report.
        #[arg(long)]
        pretty: bool,
    },

    /// Check a JSON map of cluster properties for a complete HA setup.
    Ha { properties: PathBuf },
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&args.log_level)),
        )
        .init();

    match args.command {
        Command::Evaluate {
            snapshot,
            now,
            pretty,
        } => evaluate(&snapshot, now.as_deref(), pretty),
        Command::Ha { properties } => ha(&properties),
    }
}

fn evaluate(path: &Path, now: Option<&str>, pretty: bool) -> Result<()> {
    let raw = read_input(path)?;
    let snapshot = JobSnapshot::from_json(&raw)
        .with_context(|| format!("failed to decode snapshot {}", path.display()))?;

    // (A) 基準時刻: --now があれば固定、なければシステム時計
    let clock: Box<dyn Clock> = match now {
        Some(now) => {
            let now: DateTime<Utc> =
                parse_timestamp(now).context("--now must be an RFC 3339 timestamp")?;
            Box::new(FixedClock::new(now))
        }
        None => Box::new(SystemClock),
    };

    // (B) 判定してそのまま JSON で出力
    let report = LifecycleReport::evaluate(&snapshot, clock.as_ref());
    debug!(observed_at = %report.observed_at, "report ready");

    let out = if pretty {
        serde_json::to_string_pretty(&report)?
    } else {
        serde_json::to_string(&report)?
    };
    println!("{out}");
    Ok(())
}

fn ha(path: &Path) -> Result<()> {
    let raw = read_input(path)?;
    let properties: ClusterProperties = serde_json::from_str(&raw)
        .with_context(|| format!("failed to decode properties {}", path.display()))?;

    let enabled = is_high_availability_enabled(Some(&properties));
    let out = serde_json::json!({
        "highAvailabilityEnabled": enabled,
        "haConfigMapName": ha_config_map_name(Some(&properties)),
    });
    println!("{out}");
    Ok(())
}

fn read_input(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read stdin")?;
        return Ok(buf);
    }
    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

//! trip: plan one trip under Hours-of-Service limits and print the log.
//!
//! ```text
//! trip --legs data/legs.csv --rules data/rules.toml --cycle-used 24 --out out/
//! ```
//!
//! Without `--legs` a built-in two-leg trip is planned.  Set `RUST_LOG=debug`
//! to see every inserted rest.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use hos_core::{DutyStatus, HosRules};
use hos_output::{CsvWriter, PlanWriter, write_plan};
use hos_plan::{Leg, Plan, PlanError, generate, load_legs_csv};

// ── CLI ───────────────────────────────────────────────────────────────────────

#[derive(Parser)]
#[command(name = "trip", about = "Hours-of-Service duty planner")]
struct Cli {
    /// Leg CSV (`drive_hours,load_hours,unload_hours,label`).
    #[arg(long)]
    legs: Option<PathBuf>,

    /// TOML file overriding rule constants.
    #[arg(long)]
    rules: Option<PathBuf>,

    /// Hours already used in the current cycle.
    #[arg(long, default_value_t = 0.0)]
    cycle_used: f64,

    /// Write `events.csv` and `daily_totals.csv` into this directory.
    #[arg(long)]
    out: Option<PathBuf>,

    /// Print the plan as JSON instead of tables.
    #[arg(long)]
    json: bool,
}

fn builtin_legs() -> Vec<Leg> {
    vec![
        Leg::drive(1.0).with_load(1.0).with_label("Yard to shipper"),
        Leg::drive(13.0).with_unload(1.0).with_label("Shipper to consignee"),
    ]
}

// ── Main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let legs = match &cli.legs {
        Some(path) => load_legs_csv(path)
            .with_context(|| format!("loading legs from {}", path.display()))?,
        None => builtin_legs(),
    };
    let rules = match &cli.rules {
        Some(path) => HosRules::load(path)
            .with_context(|| format!("loading rules from {}", path.display()))?,
        None => HosRules::default(),
    };
    info!(legs = legs.len(), cycle_used = cli.cycle_used, "planning trip");

    let plan = match generate(&legs, cli.cycle_used, &rules) {
        Ok(plan) => plan,
        Err(e @ PlanError::IterationLimit { .. }) => {
            anyhow::bail!("{e}; check the rule constants for zero-length windows or rests")
        }
        Err(e) => return Err(e.into()),
    };

    if let Some(dir) = &cli.out {
        let mut writer = CsvWriter::new(dir)
            .with_context(|| format!("creating output in {}", dir.display()))?;
        write_plan(&mut writer, &plan)?;
        writer.finish()?;
        info!(dir = %dir.display(), "plan exported");
    }

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&plan)?);
    } else {
        print_plan(&plan);
    }
    Ok(())
}

// ── Report ────────────────────────────────────────────────────────────────────

fn print_plan(plan: &Plan) {
    if !plan.notes.is_empty() {
        println!("Notes:");
        for note in &plan.notes {
            println!("  - {note}");
        }
        println!();
    }

    for (day, totals) in plan.per_day.iter().zip(plan.daily_totals()) {
        println!("Day {}", day.day + 1);
        println!("  {:<10} {:>6} {:>6}", "Status", "Start", "End");
        println!("  {}", "-".repeat(24));
        for e in &day.events {
            println!("  {:<10} {:>6.2} {:>6.2}", e.status.as_str(), e.start_hour, e.end_hour);
        }
        let summary: Vec<String> = DutyStatus::ALL
            .iter()
            .map(|&s| format!("{} {:.2}h", s.as_str(), totals.hours(s)))
            .collect();
        println!("  {}", summary.join("  |  "));
        println!();
    }

    let t = plan.total_hours();
    println!(
        "Total: driving {:.2}h  on-duty {:.2}h  off-duty {:.2}h",
        t.driving, t.on_duty, t.off_duty
    );
    println!("Cycle used at end: {:.2}h", plan.final_cycle_used_hours);
}

//! Planner entry point: YAML plan in, JSON report out.
//!
//! The binary stands in for the surrounding application: it loads the
//! static catalogs, replays a recorded planning session through the
//! core, and prints every display output (quotas, candidates, usage,
//! legend, sketch markers) as one JSON document on stdout.
//!
//! ```text
//! VERDANT_CONFIG=verdant.yaml verdant-planner plan.yaml
//! ```

mod error;
mod plan;
mod report;

use std::path::PathBuf;

use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;

use verdant_catalog::Catalog;
use verdant_core::PlannerConfig;

use crate::plan::PlanRequest;
use crate::report::PlanReport;

/// Application entry point.
///
/// Loads configuration (from `VERDANT_CONFIG` when set, defaults
/// otherwise), initializes logging, loads and validates the catalogs,
/// replays the plan file named by the first argument, and prints the
/// report.
///
/// # Errors
///
/// Returns an error for a missing plan argument, unreadable files, or
/// malformed YAML. An unknown profile inside a well-formed plan is not
/// an error; the report degrades to empty results.
fn main() -> anyhow::Result<()> {
    let config = std::env::var_os("VERDANT_CONFIG").map_or_else(
        || Ok(PlannerConfig::default()),
        |path| {
            let path = PathBuf::from(path);
            PlannerConfig::from_file(&path)
                .with_context(|| format!("loading config from {}", path.display()))
        },
    )?;

    // Initialize structured logging; RUST_LOG wins over the config level.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.logging.level)),
        )
        .with_target(true)
        .init();

    info!("verdant-planner starting");

    let plan_path = std::env::args()
        .nth(1)
        .context("usage: verdant-planner <plan.yaml>")?;
    let plan_path = PathBuf::from(plan_path);

    let catalog = Catalog::load().context("loading reference catalogs")?;
    let request = PlanRequest::from_file(&plan_path)
        .with_context(|| format!("loading plan from {}", plan_path.display()))?;
    info!(
        profile = %request.profile,
        area = %request.area,
        commands = request.selections.len(),
        "plan request loaded"
    );

    let report = PlanReport::assemble(&catalog, &config, &request);
    let body = serde_json::to_string_pretty(&report).context("serializing report")?;
    println!("{body}");

    Ok(())
}

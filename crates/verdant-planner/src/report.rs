//! Assembling the planning report: replay the plan through the core
//! and collect every display output the UI would render.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{debug, info};

use verdant_catalog::Catalog;
use verdant_core::{
    PlannerConfig, QuotaTable, SelectionLedger, compatible_plants, generate, legend,
};
use verdant_types::{Category, CategoryUsage, LayoutMarker, LegendEntry, PlantId, PlotShape, ProfileId};

use crate::plan::PlanRequest;

/// Everything the planner produces for one session, JSON-ready.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanReport {
    /// The requested profile identifier.
    pub profile: ProfileId,
    /// Display name of the profile, when the identifier resolved.
    pub profile_name: Option<String>,
    /// The plot area used for quota computation.
    pub area: Decimal,
    /// The plot shape used for the sketch.
    pub shape: PlotShape,
    /// Per-tier planting caps.
    pub quotas: QuotaTable,
    /// Candidate species for the profile, in catalog order.
    pub candidates: Vec<PlantId>,
    /// Selected-versus-quota usage per tier.
    pub usage: BTreeMap<Category, CategoryUsage>,
    /// Deterministic species swatches for the candidates.
    pub legend: Vec<LegendEntry>,
    /// The randomized layout sketch.
    pub markers: Vec<LayoutMarker>,
}

impl PlanReport {
    /// Replay a plan request against the catalog and assemble the
    /// report.
    ///
    /// An unknown profile degrades exactly as the UI does: empty
    /// quotas, no candidates, no markers. Never an error.
    pub fn assemble(catalog: &Catalog, config: &PlannerConfig, request: &PlanRequest) -> Self {
        let profile = catalog.profile(&request.profile);
        let quotas = QuotaTable::compute(profile, request.area);
        let shape = request.shape.unwrap_or(config.canvas.shape);

        let candidates = compatible_plants(catalog.plants(), catalog.tags_for(&request.profile));
        let swatches = legend(&candidates);

        let mut ledger = SelectionLedger::new(quotas);
        for command in &request.selections {
            let quantity =
                ledger.change_quantity(command.category, &command.plant, command.delta);
            debug!(
                plant = %command.plant,
                category = ?command.category,
                delta = command.delta,
                quantity,
                "selection command replayed"
            );
        }

        let markers = generate(&ledger, &config.styles, shape, config.canvas.size);
        info!(
            profile = %request.profile,
            resolved = profile.is_some(),
            candidates = candidates.len(),
            selected = ledger.total(),
            markers = markers.len(),
            "plan replayed"
        );

        Self {
            profile: request.profile.clone(),
            profile_name: profile.map(|p| p.name.clone()),
            area: request.area,
            shape,
            quotas: ledger.quotas().clone(),
            candidates: candidates.iter().map(|plant| plant.id.clone()).collect(),
            usage: ledger.per_category_totals(),
            legend: swatches,
            markers,
        }
    }
}

//! The selection ledger: quota-constrained bookkeeping of chosen
//! species quantities.
//!
//! One ledger exists per active profile. Choosing a different profile
//! replaces the ledger wholesale (never merges); clearing the profile
//! discards it. The single transition is [`SelectionLedger::change_quantity`];
//! every other method is a read.
//!
//! # Invariant
//!
//! After every transition, for every tier `c`:
//! `sum of quantities under c <= quota cap for c`, and every individual
//! quantity is non-negative. The empty ledger satisfies this trivially;
//! increments are capped by remaining headroom and decrements only
//! reduce the sum, so the invariant holds for any command sequence.

use std::collections::BTreeMap;

use tracing::debug;
use verdant_types::{Category, CategoryUsage, PlantId};

use crate::quota::QuotaTable;

/// Quantities chosen per tier and species, bounded by a quota table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionLedger {
    /// The caps in force for this ledger's lifetime.
    quotas: QuotaTable,
    /// Chosen quantities: tier -> species -> count. Zero-count entries
    /// are pruned.
    chosen: BTreeMap<Category, BTreeMap<PlantId, u32>>,
}

impl SelectionLedger {
    /// Create an empty ledger bounded by the given quotas.
    pub const fn new(quotas: QuotaTable) -> Self {
        Self {
            quotas,
            chosen: BTreeMap::new(),
        }
    }

    /// The quota table this ledger enforces.
    pub const fn quotas(&self) -> &QuotaTable {
        &self.quotas
    }

    /// Quantity currently selected for one species under one tier.
    pub fn quantity(&self, category: Category, plant: &PlantId) -> u32 {
        self.chosen
            .get(&category)
            .and_then(|species| species.get(plant))
            .copied()
            .unwrap_or(0)
    }

    /// Sum of quantities across all species under one tier.
    pub fn total_for(&self, category: Category) -> u32 {
        self.chosen.get(&category).map_or(0, |species| {
            species
                .values()
                .fold(0_u32, |sum, qty| sum.saturating_add(*qty))
        })
    }

    /// Remaining headroom under one tier's cap.
    pub fn remaining(&self, category: Category) -> u32 {
        self.quotas
            .cap(category)
            .saturating_sub(self.total_for(category))
    }

    /// Grand total of selected units across every tier.
    pub fn total(&self) -> u32 {
        self.chosen
            .keys()
            .fold(0_u32, |sum, category| {
                sum.saturating_add(self.total_for(*category))
            })
    }

    /// Apply a signed quantity change for one (tier, species) pair.
    ///
    /// This is the quota-enforcement boundary. Increments apply at most
    /// the tier's remaining headroom: at zero headroom the command is a
    /// silent no-op, and an oversized delta fills the tier exactly to
    /// its cap. Decrements floor at zero. The method never fails;
    /// the returned value is the species quantity after the transition.
    pub fn change_quantity(&mut self, category: Category, plant: &PlantId, delta: i64) -> u32 {
        let current = self.quantity(category, plant);

        let updated = if delta >= 0 {
            let headroom = self.remaining(category);
            let requested = u32::try_from(delta).unwrap_or(u32::MAX);
            let applied = requested.min(headroom);
            if applied < requested {
                debug!(
                    %plant,
                    ?category,
                    requested,
                    applied,
                    "increment clipped at tier quota"
                );
            }
            current.saturating_add(applied)
        } else {
            let step = u32::try_from(delta.unsigned_abs()).unwrap_or(u32::MAX);
            current.saturating_sub(step)
        };

        if updated == 0 {
            if let Some(species) = self.chosen.get_mut(&category) {
                species.remove(plant);
                if species.is_empty() {
                    self.chosen.remove(&category);
                }
            }
        } else {
            self.chosen
                .entry(category)
                .or_default()
                .insert(plant.clone(), updated);
        }

        updated
    }

    /// Iterate `(tier, species, quantity)` triples in tier order.
    ///
    /// Only live entries appear; quantities are always positive.
    pub fn entries(&self) -> impl Iterator<Item = (Category, &PlantId, u32)> + '_ {
        self.chosen.iter().flat_map(|(category, species)| {
            species
                .iter()
                .map(move |(plant, qty)| (*category, plant, *qty))
        })
    }

    /// Selected-versus-quota usage per tier, for the totals display.
    ///
    /// Covers every tier the quota table knows, including tiers with
    /// nothing selected yet.
    pub fn per_category_totals(&self) -> BTreeMap<Category, CategoryUsage> {
        self.quotas
            .entries()
            .map(|(category, quota)| {
                (
                    category,
                    CategoryUsage {
                        selected: self.total_for(category),
                        quota,
                    },
                )
            })
            .collect()
    }

    /// Verify the per-tier cap invariant.
    ///
    /// Holds by construction; this exists as defense-in-depth for
    /// integrity assertions, not as part of the transition path.
    pub fn within_quota(&self) -> bool {
        self.chosen
            .keys()
            .all(|category| self.total_for(*category) <= self.quotas.cap(*category))
    }
}

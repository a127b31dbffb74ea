//! Quota computation: turning a profile and a plot area into per-tier
//! planting caps.
//!
//! The density map expresses plants per 10 area units, so the cap for
//! tier `c` is `floor((area / 10) * density[c])`. All arithmetic is
//! exact decimal math; binary floating point would round 0.75 * 10
//! unpredictably at larger scales.
//!
//! Quotas are derived, never stored: recompute whenever the profile or
//! the area changes.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::Serialize;
use tracing::warn;
use verdant_types::{Category, Profile};

/// Per-tier planting caps for one (profile, area) pair.
///
/// Tiers the profile leaves out have no entry and are treated as zero
/// everywhere.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct QuotaTable(BTreeMap<Category, u32>);

impl QuotaTable {
    /// Compute the quota table for a profile and plot area.
    ///
    /// With no profile selected the result is empty: the UI shows
    /// "nothing computed yet", not an error. Negative areas are clamped
    /// to zero before computing rather than producing negative caps.
    ///
    /// Caps that overflow `u32` saturate.
    pub fn compute(profile: Option<&Profile>, area: Decimal) -> Self {
        let Some(profile) = profile else {
            return Self::default();
        };

        let area = if area < Decimal::ZERO {
            warn!(%area, "negative plot area clamped to zero");
            Decimal::ZERO
        } else {
            area
        };

        // Decimal::TEN is non-zero, so the division cannot fail.
        let units = area.checked_div(Decimal::TEN).unwrap_or(Decimal::ZERO);

        let mut caps = BTreeMap::new();
        for (category, density) in &profile.densities {
            let cap = match units.checked_mul(*density) {
                Some(raw) if raw <= Decimal::ZERO => 0,
                Some(raw) => raw.floor().to_u32().unwrap_or(u32::MAX),
                None => u32::MAX,
            };
            caps.insert(*category, cap);
        }
        Self(caps)
    }

    /// The cap for a tier; zero for tiers without an entry.
    pub fn cap(&self, category: Category) -> u32 {
        self.0.get(&category).copied().unwrap_or(0)
    }

    /// Whether the table has no entries (no profile selected).
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of tiers with an entry.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterate `(tier, cap)` entries in tier order.
    pub fn entries(&self) -> impl Iterator<Item = (Category, u32)> + '_ {
        self.0.iter().map(|(category, cap)| (*category, *cap))
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;
    use verdant_types::{Profile, ProfileId};

    use super::*;

    fn profile_with(densities: &[(Category, Decimal)]) -> Profile {
        Profile {
            id: ProfileId::new("test"),
            name: String::from("Test"),
            description: String::new(),
            image: String::new(),
            densities: densities.iter().copied().collect(),
            categories: densities.iter().map(|(c, _)| *c).collect(),
        }
    }

    #[test]
    fn reference_scenario() {
        // Densities {Canopy: 0.75, Shrub: 0.75, Subtree: 1, Tree: 1} at
        // area 100: 100/10 = 10 units; 10*0.75 = 7.5 -> 7; 10*1 = 10.
        let profile = profile_with(&[
            (Category::Canopy, dec!(0.75)),
            (Category::Shrub, dec!(0.75)),
            (Category::Subtree, dec!(1)),
            (Category::Tree, dec!(1)),
        ]);
        let quotas = QuotaTable::compute(Some(&profile), dec!(100));
        assert_eq!(quotas.cap(Category::Canopy), 7);
        assert_eq!(quotas.cap(Category::Shrub), 7);
        assert_eq!(quotas.cap(Category::Subtree), 10);
        assert_eq!(quotas.cap(Category::Tree), 10);
    }

    #[test]
    fn no_profile_means_empty_table() {
        let quotas = QuotaTable::compute(None, dec!(250));
        assert!(quotas.is_empty());
        assert_eq!(quotas.cap(Category::Tree), 0);
    }

    #[test]
    fn absent_tier_caps_at_zero() {
        let profile = profile_with(&[(Category::Shrub, dec!(2))]);
        let quotas = QuotaTable::compute(Some(&profile), dec!(50));
        assert_eq!(quotas.cap(Category::Shrub), 10);
        assert_eq!(quotas.cap(Category::Canopy), 0);
        assert_eq!(quotas.len(), 1);
    }

    #[test]
    fn negative_area_clamps_to_zero() {
        let profile = profile_with(&[(Category::Tree, dec!(1))]);
        let quotas = QuotaTable::compute(Some(&profile), dec!(-40));
        assert_eq!(quotas.cap(Category::Tree), 0);
    }

    #[test]
    fn zero_area_yields_zero_caps() {
        let profile = profile_with(&[(Category::Tree, dec!(1.5))]);
        let quotas = QuotaTable::compute(Some(&profile), Decimal::ZERO);
        assert_eq!(quotas.cap(Category::Tree), 0);
    }

    #[test]
    fn floor_truncates_toward_zero() {
        let profile = profile_with(&[(Category::Shrub, dec!(0.99))]);
        // 9.9 units * 0.99 = 9.801 -> 9.
        let quotas = QuotaTable::compute(Some(&profile), dec!(99));
        assert_eq!(quotas.cap(Category::Shrub), 9);
    }

    #[test]
    fn quota_is_monotonic_in_area() {
        let profile = profile_with(&[
            (Category::Tree, dec!(0.75)),
            (Category::Shrub, dec!(1.25)),
        ]);
        let mut previous = (0, 0);
        for area in 0_i64..400 {
            let quotas = QuotaTable::compute(Some(&profile), Decimal::from(area));
            let current = (quotas.cap(Category::Tree), quotas.cap(Category::Shrub));
            assert!(
                current.0 >= previous.0 && current.1 >= previous.1,
                "quota regressed at area {area}"
            );
            previous = current;
        }
    }

    #[test]
    fn serializes_as_plain_map() {
        let profile = profile_with(&[(Category::Tree, dec!(1))]);
        let quotas = QuotaTable::compute(Some(&profile), dec!(30));
        let json = serde_json::to_string(&quotas).ok();
        assert_eq!(json.as_deref(), Some("{\"Tree\":3}"));
    }
}

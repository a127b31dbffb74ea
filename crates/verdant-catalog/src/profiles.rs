//! The static profile catalog: ecological planting templates and the
//! fixed profile-identifier to compatibility-tag mapping.
//!
//! Each profile carries a density map in plants per 10 area units. The
//! quota engine turns those densities into per-tier caps for a given
//! plot area. Tiers a profile leaves out (a windswept edge has no
//! closed canopy) simply get no quota entry.

use std::collections::{BTreeMap, BTreeSet};

use rust_decimal::Decimal;
use verdant_types::{Category, Profile, ProfileId, ProfileTag};

/// Helper to build a [`Profile`] from a slug and density pairs.
///
/// Display order of `density_pairs` becomes the profile's category
/// order.
fn profile(
    slug: &str,
    name: &str,
    description: &str,
    density_pairs: &[(Category, Decimal)],
) -> Profile {
    Profile {
        id: ProfileId::new(slug),
        name: name.to_string(),
        description: description.to_string(),
        image: format!("images/profiles/{slug}.jpg"),
        densities: density_pairs.iter().copied().collect(),
        categories: density_pairs.iter().map(|(category, _)| *category).collect(),
    }
}

/// Build the full profile table, in catalog display order.
pub fn create_profile_catalog() -> Vec<Profile> {
    vec![
        profile(
            "damp_clay",
            "Damp clay lowland",
            "Heavy, water-retentive ground that puddles in winter. \
             Moisture-loving pioneers and a full four-layer structure.",
            &[
                (Category::Canopy, Decimal::new(75, 2)), // 0.75
                (Category::Tree, Decimal::ONE),
                (Category::Subtree, Decimal::ONE),
                (Category::Shrub, Decimal::new(75, 2)), // 0.75
            ],
        ),
        profile(
            "free_draining",
            "Free-draining sandy",
            "Light soil that dries fast in summer. Leans on deep-rooted \
             pioneers and a generous understory.",
            &[
                (Category::Canopy, Decimal::new(5, 1)), // 0.5
                (Category::Tree, Decimal::ONE),
                (Category::Subtree, Decimal::new(125, 2)), // 1.25
                (Category::Shrub, Decimal::ONE),
            ],
        ),
        profile(
            "windswept",
            "Windswept upland edge",
            "Exposed ground where a closed canopy never forms. Dense \
             shrub layer as a windbreak, hardy small trees inside it.",
            &[
                (Category::Tree, Decimal::new(75, 2)), // 0.75
                (Category::Subtree, Decimal::ONE),
                (Category::Shrub, Decimal::new(15, 1)), // 1.5
            ],
        ),
        profile(
            "chalk_down",
            "Chalk downland",
            "Shallow lime-rich soil over chalk. Smaller trees, plenty of \
             berrying shrubs.",
            &[
                (Category::Tree, Decimal::new(5, 1)), // 0.5
                (Category::Subtree, Decimal::ONE),
                (Category::Shrub, Decimal::new(125, 2)), // 1.25
            ],
        ),
        profile(
            "urban_yard",
            "Urban courtyard",
            "A compact paved-over plot. No room for big trees; the \
             planting works at subtree height and below.",
            &[
                (Category::Subtree, Decimal::ONE),
                (Category::Shrub, Decimal::TWO),
            ],
        ),
    ]
}

/// The fixed identifier-to-tag mapping the plant filter resolves
/// profiles through.
///
/// A species is a candidate for a profile when its own tag set
/// intersects the profile's resolved set here.
pub fn profile_tag_map() -> BTreeMap<ProfileId, BTreeSet<ProfileTag>> {
    let mut map = BTreeMap::new();
    map.insert(ProfileId::new("damp_clay"), tags(&["damp"]));
    map.insert(ProfileId::new("free_draining"), tags(&["dry"]));
    map.insert(ProfileId::new("windswept"), tags(&["exposed"]));
    map.insert(ProfileId::new("chalk_down"), tags(&["lime", "dry"]));
    map.insert(ProfileId::new("urban_yard"), tags(&["compact"]));
    map
}

/// Collect tag slugs into a [`ProfileTag`] set.
fn tags(items: &[&str]) -> BTreeSet<ProfileTag> {
    items.iter().map(|tag| ProfileTag::new(*tag)).collect()
}

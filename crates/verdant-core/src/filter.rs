//! Candidate filtering: which catalog species suit the chosen profile.
//!
//! A profile identifier resolves (through the catalog's fixed mapping)
//! to a canonical tag set; a species is a candidate when its own tag
//! set intersects it. Pure set intersection, no scoring, no polymorphic
//! dispatch.

use std::collections::BTreeSet;

use verdant_types::{Plant, ProfileTag};

/// Select the species compatible with a resolved profile tag set.
///
/// `tags` is `None` when the profile has no entry in the identifier
/// mapping; the result is then empty rather than an error. Result order
/// preserves catalog order, so the candidate list renders identically
/// across re-renders.
pub fn compatible_plants<'a>(
    plants: &'a [Plant],
    tags: Option<&BTreeSet<ProfileTag>>,
) -> Vec<&'a Plant> {
    tags.map_or_else(Vec::new, |tags| {
        plants
            .iter()
            .filter(|plant| !plant.profile_tags.is_disjoint(tags))
            .collect()
    })
}

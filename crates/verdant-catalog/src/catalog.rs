//! The validated, read-only catalog facade.
//!
//! [`Catalog::load`] assembles the hard-coded tables, checks their
//! integrity once, and hands out immutable lookups from then on. The
//! planning core never sees unvalidated data and never mutates it.

use std::collections::{BTreeMap, BTreeSet};

use tracing::info;
use verdant_types::{Category, Plant, PlantId, Profile, ProfileId, ProfileTag};

use crate::error::CatalogError;
use crate::plants::{KNOWN_TAGS, create_plant_catalog};
use crate::profiles::{create_profile_catalog, profile_tag_map};

/// The two reference tables plus the profile tag mapping, validated and
/// frozen.
#[derive(Debug, Clone)]
pub struct Catalog {
    /// Species records in catalog display order.
    plants: Vec<Plant>,
    /// Profile records in catalog display order.
    profiles: Vec<Profile>,
    /// Fixed profile-identifier to tag-set mapping.
    tag_map: BTreeMap<ProfileId, BTreeSet<ProfileTag>>,
}

impl Catalog {
    /// Build and validate the standard catalogs.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] if the hard-coded tables are
    /// inconsistent (duplicate identifiers, unmapped profiles, tags
    /// outside the vocabulary, or density/category mismatches).
    pub fn load() -> Result<Self, CatalogError> {
        let catalog = Self::from_parts(
            create_plant_catalog(),
            create_profile_catalog(),
            profile_tag_map(),
        )?;
        info!(
            plants = catalog.plants.len(),
            profiles = catalog.profiles.len(),
            "reference catalogs loaded"
        );
        Ok(catalog)
    }

    /// Assemble a catalog from custom tables, running the same
    /// integrity checks as [`Catalog::load`].
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] on the first integrity violation found.
    pub fn from_parts(
        plants: Vec<Plant>,
        profiles: Vec<Profile>,
        tag_map: BTreeMap<ProfileId, BTreeSet<ProfileTag>>,
    ) -> Result<Self, CatalogError> {
        let known: BTreeSet<ProfileTag> =
            KNOWN_TAGS.iter().map(|tag| ProfileTag::new(*tag)).collect();

        let mut seen_plants = BTreeSet::new();
        for plant in &plants {
            if !seen_plants.insert(plant.id.clone()) {
                return Err(CatalogError::DuplicatePlant(plant.id.clone()));
            }
            for tag in &plant.profile_tags {
                if !known.contains(tag) {
                    return Err(CatalogError::UnknownProfileTag {
                        plant: plant.id.clone(),
                        tag: tag.clone(),
                    });
                }
            }
        }

        let mut seen_profiles = BTreeSet::new();
        for profile in &profiles {
            if !seen_profiles.insert(profile.id.clone()) {
                return Err(CatalogError::DuplicateProfile(profile.id.clone()));
            }
            let Some(tags) = tag_map.get(&profile.id) else {
                return Err(CatalogError::MissingTagMapping(profile.id.clone()));
            };
            for tag in tags {
                if !known.contains(tag) {
                    return Err(CatalogError::UnknownMappedTag {
                        profile: profile.id.clone(),
                        tag: tag.clone(),
                    });
                }
            }
            let listed: BTreeSet<Category> = profile.categories.iter().copied().collect();
            let keyed: BTreeSet<Category> = profile.densities.keys().copied().collect();
            if listed != keyed {
                return Err(CatalogError::DensityMismatch(profile.id.clone()));
            }
        }

        Ok(Self {
            plants,
            profiles,
            tag_map,
        })
    }

    /// All species records, in catalog display order.
    pub fn plants(&self) -> &[Plant] {
        &self.plants
    }

    /// All profile records, in catalog display order.
    pub fn profiles(&self) -> &[Profile] {
        &self.profiles
    }

    /// Look up one species by identifier.
    pub fn plant(&self, id: &PlantId) -> Option<&Plant> {
        self.plants.iter().find(|plant| plant.id == *id)
    }

    /// Look up one profile by identifier.
    pub fn profile(&self, id: &ProfileId) -> Option<&Profile> {
        self.profiles.iter().find(|profile| profile.id == *id)
    }

    /// Resolve a profile identifier to its canonical tag set.
    ///
    /// Returns `None` for identifiers absent from the mapping; callers
    /// degrade to an empty candidate list rather than erroring.
    pub fn tags_for(&self, id: &ProfileId) -> Option<&BTreeSet<ProfileTag>> {
        self.tag_map.get(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal_plant(slug: &str) -> Plant {
        let plants = create_plant_catalog();
        let template = plants.first().cloned();
        #[allow(clippy::unwrap_used)]
        let mut plant = template.unwrap();
        plant.id = PlantId::new(slug);
        plant
    }

    #[test]
    fn standard_catalog_loads() {
        let catalog = Catalog::load();
        assert!(catalog.is_ok());
    }

    #[test]
    fn lookups_resolve_known_ids() {
        let Ok(catalog) = Catalog::load() else {
            return;
        };
        assert!(catalog.plant(&PlantId::new("hazel")).is_some());
        assert!(catalog.profile(&ProfileId::new("damp_clay")).is_some());
        assert!(catalog.tags_for(&ProfileId::new("windswept")).is_some());
    }

    #[test]
    fn unknown_ids_resolve_to_none() {
        let Ok(catalog) = Catalog::load() else {
            return;
        };
        assert!(catalog.plant(&PlantId::new("baobab")).is_none());
        assert!(catalog.profile(&ProfileId::new("rainforest")).is_none());
        assert!(catalog.tags_for(&ProfileId::new("rainforest")).is_none());
    }

    #[test]
    fn duplicate_plant_rejected() {
        let plants = vec![minimal_plant("twice"), minimal_plant("twice")];
        let result = Catalog::from_parts(plants, create_profile_catalog(), profile_tag_map());
        assert!(matches!(result, Err(CatalogError::DuplicatePlant(_))));
    }

    #[test]
    fn unmapped_profile_rejected() {
        let mut tag_map = profile_tag_map();
        tag_map.remove(&ProfileId::new("damp_clay"));
        let result = Catalog::from_parts(create_plant_catalog(), create_profile_catalog(), tag_map);
        assert!(matches!(result, Err(CatalogError::MissingTagMapping(_))));
    }

    #[test]
    fn unknown_plant_tag_rejected() {
        let mut plant = minimal_plant("mystery");
        plant.profile_tags = [ProfileTag::new("volcanic")].into_iter().collect();
        let result =
            Catalog::from_parts(vec![plant], create_profile_catalog(), profile_tag_map());
        assert!(matches!(result, Err(CatalogError::UnknownProfileTag { .. })));
    }

    #[test]
    fn density_category_mismatch_rejected() {
        let mut profiles = create_profile_catalog();
        if let Some(first) = profiles.first_mut() {
            first.categories.clear();
        }
        let result = Catalog::from_parts(create_plant_catalog(), profiles, profile_tag_map());
        assert!(matches!(result, Err(CatalogError::DensityMismatch(_))));
    }
}

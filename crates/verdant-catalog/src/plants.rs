//! The static plant catalog: 20 species suited to small multi-layer
//! plantings, with the ecological attributes the filter and the
//! selection UI read.
//!
//! Records are hard-coded, built once at startup, and never mutated.
//! Tier membership is a set, not a single class: a mature oak belongs
//! to both the canopy and the tree layer.

use std::collections::BTreeSet;

use verdant_types::{
    Category, Drainage, Edibility, PhBand, Plant, PlantId, ProfileTag, Resistance, SoilType,
    SunExposure,
};

/// The canonical profile-tag vocabulary. Plants and the profile tag
/// mapping may only use tags listed here; [`Catalog::load`] enforces it.
///
/// [`Catalog::load`]: crate::Catalog::load
pub const KNOWN_TAGS: [&str; 5] = ["compact", "damp", "dry", "exposed", "lime"];

/// Collect a slice of copyable values into a set.
fn set<T: Ord + Copy>(items: &[T]) -> BTreeSet<T> {
    items.iter().copied().collect()
}

/// Collect tag slugs into a [`ProfileTag`] set.
fn tag_set(items: &[&str]) -> BTreeSet<ProfileTag> {
    items.iter().map(|tag| ProfileTag::new(*tag)).collect()
}

/// Catalog-relative image path for a species photograph.
fn image(slug: &str) -> String {
    format!("images/plants/{slug}.jpg")
}

/// Build the full species table, in catalog display order.
///
/// The order is stable and meaningful: the candidate list shown to the
/// user preserves it across re-renders.
#[allow(clippy::too_many_lines)]
pub fn create_plant_catalog() -> Vec<Plant> {
    vec![
        Plant {
            id: PlantId::new("pedunculate_oak"),
            name: String::from("Pedunculate oak"),
            scientific_name: String::from("Quercus robur"),
            categories: set(&[Category::Canopy, Category::Tree]),
            sun: set(&[SunExposure::Full, SunExposure::Partial]),
            soil: set(&[SoilType::Clay, SoilType::Loam]),
            drainage: set(&[Drainage::Wet, Drainage::Moist]),
            ph: set(&[PhBand::Acid, PhBand::Neutral]),
            resistance: Resistance::High,
            edibility: Edibility::PartlyEdible,
            profile_tags: tag_set(&["damp"]),
            image: image("pedunculate_oak"),
            attribution: String::from("Photo: Commons Tree Survey, CC BY-SA 4.0"),
            notes: String::from(
                "Long-lived anchor for the canopy layer. Give it the \
                 wettest corner of the plot.",
            ),
        },
        Plant {
            id: PlantId::new("sessile_oak"),
            name: String::from("Sessile oak"),
            scientific_name: String::from("Quercus petraea"),
            categories: set(&[Category::Canopy, Category::Tree]),
            sun: set(&[SunExposure::Full]),
            soil: set(&[SoilType::Loam, SoilType::Sand]),
            drainage: set(&[Drainage::Moist, Drainage::FreeDraining]),
            ph: set(&[PhBand::Acid, PhBand::Neutral]),
            resistance: Resistance::High,
            edibility: Edibility::PartlyEdible,
            profile_tags: tag_set(&["dry", "exposed"]),
            image: image("sessile_oak"),
            attribution: String::from("Photo: Commons Tree Survey, CC BY-SA 4.0"),
            notes: String::from("The upland oak. Happier than Q. robur on thin, drier ground."),
        },
        Plant {
            id: PlantId::new("silver_birch"),
            name: String::from("Silver birch"),
            scientific_name: String::from("Betula pendula"),
            categories: set(&[Category::Tree]),
            sun: set(&[SunExposure::Full]),
            soil: set(&[SoilType::Sand, SoilType::Loam]),
            drainage: set(&[Drainage::Moist, Drainage::FreeDraining]),
            ph: set(&[PhBand::Acid, PhBand::Neutral]),
            resistance: Resistance::High,
            edibility: Edibility::PartlyEdible,
            profile_tags: tag_set(&["dry", "exposed", "compact"]),
            image: image("silver_birch"),
            attribution: String::from("Photo: Hedgerow Archive, CC BY 2.0"),
            notes: String::from(
                "Fast pioneer with light shade, so understory layers \
                 establish well beneath it.",
            ),
        },
        Plant {
            id: PlantId::new("downy_birch"),
            name: String::from("Downy birch"),
            scientific_name: String::from("Betula pubescens"),
            categories: set(&[Category::Tree]),
            sun: set(&[SunExposure::Full, SunExposure::Partial]),
            soil: set(&[SoilType::Clay, SoilType::Loam]),
            drainage: set(&[Drainage::Wet, Drainage::Moist]),
            ph: set(&[PhBand::Acid]),
            resistance: Resistance::High,
            edibility: Edibility::PartlyEdible,
            profile_tags: tag_set(&["damp", "exposed"]),
            image: image("downy_birch"),
            attribution: String::from("Photo: Hedgerow Archive, CC BY 2.0"),
            notes: String::from("Takes waterlogging that would kill silver birch."),
        },
        Plant {
            id: PlantId::new("common_alder"),
            name: String::from("Common alder"),
            scientific_name: String::from("Alnus glutinosa"),
            categories: set(&[Category::Tree]),
            sun: set(&[SunExposure::Full, SunExposure::Partial]),
            soil: set(&[SoilType::Clay]),
            drainage: set(&[Drainage::Wet, Drainage::Moist]),
            ph: set(&[PhBand::Acid, PhBand::Neutral]),
            resistance: Resistance::High,
            edibility: Edibility::NotEdible,
            profile_tags: tag_set(&["damp"]),
            image: image("common_alder"),
            attribution: String::from("Photo: Commons Tree Survey, CC BY-SA 4.0"),
            notes: String::from("Fixes nitrogen; a nurse tree for hungry clay sites."),
        },
        Plant {
            id: PlantId::new("aspen"),
            name: String::from("Aspen"),
            scientific_name: String::from("Populus tremula"),
            categories: set(&[Category::Tree]),
            sun: set(&[SunExposure::Full]),
            soil: set(&[SoilType::Clay, SoilType::Loam, SoilType::Sand]),
            drainage: set(&[Drainage::Moist]),
            ph: set(&[PhBand::Neutral]),
            resistance: Resistance::Moderate,
            edibility: Edibility::NotEdible,
            profile_tags: tag_set(&["damp", "exposed"]),
            image: image("aspen"),
            attribution: String::from("Photo: Hedgerow Archive, CC BY 2.0"),
            notes: String::from("Suckers freely; allow room or mow the runners."),
        },
        Plant {
            id: PlantId::new("wild_cherry"),
            name: String::from("Wild cherry"),
            scientific_name: String::from("Prunus avium"),
            categories: set(&[Category::Tree, Category::Subtree]),
            sun: set(&[SunExposure::Full, SunExposure::Partial]),
            soil: set(&[SoilType::Loam, SoilType::Chalk]),
            drainage: set(&[Drainage::Moist, Drainage::FreeDraining]),
            ph: set(&[PhBand::Neutral, PhBand::Alkaline]),
            resistance: Resistance::Moderate,
            edibility: Edibility::Edible,
            profile_tags: tag_set(&["lime", "dry"]),
            image: image("wild_cherry"),
            attribution: String::from("Photo: Orchard Commons, CC BY-SA 3.0"),
            notes: String::from("Spring blossom for pollinators, fruit for birds and people."),
        },
        Plant {
            id: PlantId::new("rowan"),
            name: String::from("Rowan"),
            scientific_name: String::from("Sorbus aucuparia"),
            categories: set(&[Category::Tree, Category::Subtree]),
            sun: set(&[SunExposure::Full, SunExposure::Partial]),
            soil: set(&[SoilType::Loam, SoilType::Sand]),
            drainage: set(&[Drainage::Moist, Drainage::FreeDraining]),
            ph: set(&[PhBand::Acid, PhBand::Neutral]),
            resistance: Resistance::High,
            edibility: Edibility::PartlyEdible,
            profile_tags: tag_set(&["exposed", "dry", "compact"]),
            image: image("rowan"),
            attribution: String::from("Photo: Hedgerow Archive, CC BY 2.0"),
            notes: String::from("Berries are edible cooked. Thrives where winters bite."),
        },
        Plant {
            id: PlantId::new("field_maple"),
            name: String::from("Field maple"),
            scientific_name: String::from("Acer campestre"),
            categories: set(&[Category::Tree, Category::Subtree]),
            sun: set(&[SunExposure::Full, SunExposure::Partial]),
            soil: set(&[SoilType::Clay, SoilType::Loam, SoilType::Chalk]),
            drainage: set(&[Drainage::Moist, Drainage::FreeDraining]),
            ph: set(&[PhBand::Neutral, PhBand::Alkaline]),
            resistance: Resistance::High,
            edibility: Edibility::NotEdible,
            profile_tags: tag_set(&["lime", "compact", "dry"]),
            image: image("field_maple"),
            attribution: String::from("Photo: Commons Tree Survey, CC BY-SA 4.0"),
            notes: String::from("Tidy habit and tolerant of pruning; good near boundaries."),
        },
        Plant {
            id: PlantId::new("crab_apple"),
            name: String::from("Crab apple"),
            scientific_name: String::from("Malus sylvestris"),
            categories: set(&[Category::Subtree]),
            sun: set(&[SunExposure::Full, SunExposure::Partial]),
            soil: set(&[SoilType::Clay, SoilType::Loam]),
            drainage: set(&[Drainage::Moist]),
            ph: set(&[PhBand::Acid, PhBand::Neutral]),
            resistance: Resistance::Moderate,
            edibility: Edibility::Edible,
            profile_tags: tag_set(&["damp", "compact", "lime"]),
            image: image("crab_apple"),
            attribution: String::from("Photo: Orchard Commons, CC BY-SA 3.0"),
            notes: String::from("Sharp fruit, superb for jelly; a key pollination partner."),
        },
        Plant {
            id: PlantId::new("hazel"),
            name: String::from("Hazel"),
            scientific_name: String::from("Corylus avellana"),
            categories: set(&[Category::Subtree, Category::Shrub]),
            sun: set(&[SunExposure::Full, SunExposure::Partial, SunExposure::Shade]),
            soil: set(&[SoilType::Clay, SoilType::Loam, SoilType::Chalk]),
            drainage: set(&[Drainage::Moist, Drainage::FreeDraining]),
            ph: set(&[PhBand::Neutral, PhBand::Alkaline]),
            resistance: Resistance::High,
            edibility: Edibility::Edible,
            profile_tags: tag_set(&["damp", "lime", "compact", "dry"]),
            image: image("hazel"),
            attribution: String::from("Photo: Hedgerow Archive, CC BY 2.0"),
            notes: String::from("Coppices forever. Nuts if the squirrels are slow."),
        },
        Plant {
            id: PlantId::new("hawthorn"),
            name: String::from("Hawthorn"),
            scientific_name: String::from("Crataegus monogyna"),
            categories: set(&[Category::Subtree, Category::Shrub]),
            sun: set(&[SunExposure::Full, SunExposure::Partial]),
            soil: set(&[SoilType::Clay, SoilType::Loam, SoilType::Sand, SoilType::Chalk]),
            drainage: set(&[Drainage::Moist, Drainage::FreeDraining]),
            ph: set(&[PhBand::Acid, PhBand::Neutral, PhBand::Alkaline]),
            resistance: Resistance::High,
            edibility: Edibility::PartlyEdible,
            profile_tags: tag_set(&["damp", "dry", "exposed", "lime", "compact"]),
            image: image("hawthorn"),
            attribution: String::from("Photo: Hedgerow Archive, CC BY 2.0"),
            notes: String::from("Grows almost anywhere; the backbone of the shrub layer."),
        },
        Plant {
            id: PlantId::new("blackthorn"),
            name: String::from("Blackthorn"),
            scientific_name: String::from("Prunus spinosa"),
            categories: set(&[Category::Shrub]),
            sun: set(&[SunExposure::Full]),
            soil: set(&[SoilType::Clay, SoilType::Loam]),
            drainage: set(&[Drainage::Moist]),
            ph: set(&[PhBand::Neutral]),
            resistance: Resistance::High,
            edibility: Edibility::PartlyEdible,
            profile_tags: tag_set(&["exposed", "damp", "lime"]),
            image: image("blackthorn"),
            attribution: String::from("Photo: Hedgerow Archive, CC BY 2.0"),
            notes: String::from("Sloes after the first frost. Spiny; keep it off paths."),
        },
        Plant {
            id: PlantId::new("elder"),
            name: String::from("Elder"),
            scientific_name: String::from("Sambucus nigra"),
            categories: set(&[Category::Subtree, Category::Shrub]),
            sun: set(&[SunExposure::Full, SunExposure::Partial]),
            soil: set(&[SoilType::Loam, SoilType::Chalk]),
            drainage: set(&[Drainage::Moist, Drainage::FreeDraining]),
            ph: set(&[PhBand::Neutral, PhBand::Alkaline]),
            resistance: Resistance::Moderate,
            edibility: Edibility::PartlyEdible,
            profile_tags: tag_set(&["lime", "compact", "damp"]),
            image: image("elder"),
            attribution: String::from("Photo: Orchard Commons, CC BY-SA 3.0"),
            notes: String::from("Flowers and berries both usable, cooked."),
        },
        Plant {
            id: PlantId::new("guelder_rose"),
            name: String::from("Guelder rose"),
            scientific_name: String::from("Viburnum opulus"),
            categories: set(&[Category::Shrub]),
            sun: set(&[SunExposure::Full, SunExposure::Partial, SunExposure::Shade]),
            soil: set(&[SoilType::Clay, SoilType::Loam]),
            drainage: set(&[Drainage::Wet, Drainage::Moist]),
            ph: set(&[PhBand::Neutral, PhBand::Alkaline]),
            resistance: Resistance::Moderate,
            edibility: Edibility::PartlyEdible,
            profile_tags: tag_set(&["damp", "lime"]),
            image: image("guelder_rose"),
            attribution: String::from("Photo: Wetland Flora Group, CC BY-SA 4.0"),
            notes: String::from("Lacecap flowers, translucent berries; loves damp feet."),
        },
        Plant {
            id: PlantId::new("dog_rose"),
            name: String::from("Dog rose"),
            scientific_name: String::from("Rosa canina"),
            categories: set(&[Category::Shrub]),
            sun: set(&[SunExposure::Full, SunExposure::Partial]),
            soil: set(&[SoilType::Loam, SoilType::Sand, SoilType::Chalk]),
            drainage: set(&[Drainage::Moist, Drainage::FreeDraining]),
            ph: set(&[PhBand::Neutral, PhBand::Alkaline]),
            resistance: Resistance::Moderate,
            edibility: Edibility::PartlyEdible,
            profile_tags: tag_set(&["dry", "lime", "compact"]),
            image: image("dog_rose"),
            attribution: String::from("Photo: Hedgerow Archive, CC BY 2.0"),
            notes: String::from("Hips for syrup. Scrambles through neighbours; plant at edges."),
        },
        Plant {
            id: PlantId::new("holly"),
            name: String::from("Holly"),
            scientific_name: String::from("Ilex aquifolium"),
            categories: set(&[Category::Subtree, Category::Shrub]),
            sun: set(&[SunExposure::Partial, SunExposure::Shade]),
            soil: set(&[SoilType::Loam, SoilType::Sand]),
            drainage: set(&[Drainage::Moist, Drainage::FreeDraining]),
            ph: set(&[PhBand::Acid, PhBand::Neutral]),
            resistance: Resistance::High,
            edibility: Edibility::NotEdible,
            profile_tags: tag_set(&["dry", "exposed", "compact"]),
            image: image("holly"),
            attribution: String::from("Photo: Commons Tree Survey, CC BY-SA 4.0"),
            notes: String::from(
                "Evergreen structure and winter shelter. Slow, but worth \
                 the wait.",
            ),
        },
        Plant {
            id: PlantId::new("goat_willow"),
            name: String::from("Goat willow"),
            scientific_name: String::from("Salix caprea"),
            categories: set(&[Category::Tree, Category::Subtree]),
            sun: set(&[SunExposure::Full, SunExposure::Partial]),
            soil: set(&[SoilType::Clay, SoilType::Loam]),
            drainage: set(&[Drainage::Wet, Drainage::Moist]),
            ph: set(&[PhBand::Neutral]),
            resistance: Resistance::High,
            edibility: Edibility::NotEdible,
            profile_tags: tag_set(&["damp", "compact"]),
            image: image("goat_willow"),
            attribution: String::from("Photo: Wetland Flora Group, CC BY-SA 4.0"),
            notes: String::from("Earliest pollen of the year; catkins before the leaves."),
        },
        Plant {
            id: PlantId::new("spindle"),
            name: String::from("Spindle"),
            scientific_name: String::from("Euonymus europaeus"),
            categories: set(&[Category::Shrub]),
            sun: set(&[SunExposure::Full, SunExposure::Partial]),
            soil: set(&[SoilType::Loam, SoilType::Chalk]),
            drainage: set(&[Drainage::FreeDraining]),
            ph: set(&[PhBand::Neutral, PhBand::Alkaline]),
            resistance: Resistance::Moderate,
            edibility: Edibility::NotEdible,
            profile_tags: tag_set(&["lime", "dry"]),
            image: image("spindle"),
            attribution: String::from("Photo: Orchard Commons, CC BY-SA 3.0"),
            notes: String::from("Shocking pink autumn fruit. All parts poisonous."),
        },
        Plant {
            id: PlantId::new("juniper"),
            name: String::from("Common juniper"),
            scientific_name: String::from("Juniperus communis"),
            categories: set(&[Category::Shrub]),
            sun: set(&[SunExposure::Full]),
            soil: set(&[SoilType::Sand, SoilType::Chalk]),
            drainage: set(&[Drainage::FreeDraining]),
            ph: set(&[PhBand::Acid, PhBand::Alkaline]),
            resistance: Resistance::High,
            edibility: Edibility::PartlyEdible,
            profile_tags: tag_set(&["dry", "exposed", "lime"]),
            image: image("juniper"),
            attribution: String::from("Photo: Commons Tree Survey, CC BY-SA 4.0"),
            notes: String::from("Evergreen, aromatic, unbothered by wind or thin soil."),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_twenty_species() {
        assert_eq!(create_plant_catalog().len(), 20);
    }

    #[test]
    fn every_species_has_at_least_one_tier() {
        for plant in create_plant_catalog() {
            assert!(
                !plant.categories.is_empty(),
                "{} has no tier membership",
                plant.id
            );
        }
    }

    #[test]
    fn multi_tier_membership_exists() {
        // Oaks span canopy and tree; hazel spans subtree and shrub.
        let plants = create_plant_catalog();
        let oak = plants.iter().find(|p| p.id.as_str() == "pedunculate_oak");
        assert!(oak.is_some_and(|p| {
            p.categories.contains(&Category::Canopy) && p.categories.contains(&Category::Tree)
        }));
        let hazel = plants.iter().find(|p| p.id.as_str() == "hazel");
        assert!(hazel.is_some_and(|p| {
            p.categories.contains(&Category::Subtree) && p.categories.contains(&Category::Shrub)
        }));
    }

    #[test]
    fn every_tag_is_in_the_vocabulary() {
        for plant in create_plant_catalog() {
            for tag in &plant.profile_tags {
                assert!(
                    KNOWN_TAGS.contains(&tag.as_str()),
                    "{} lists unknown tag {tag}",
                    plant.id
                );
            }
        }
    }

    #[test]
    fn every_species_carries_display_data() {
        for plant in create_plant_catalog() {
            assert!(!plant.name.is_empty());
            assert!(!plant.scientific_name.is_empty());
            assert!(!plant.image.is_empty());
            assert!(!plant.attribution.is_empty());
        }
    }
}

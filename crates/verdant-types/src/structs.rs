//! Core entity structs for the Verdant planner.
//!
//! Covers the two static catalog records ([`Plant`], [`Profile`]), the
//! display color model ([`Hsl`]), and the sketch output types
//! ([`MarkerStyle`], [`LayoutMarker`], [`LegendEntry`],
//! [`CategoryUsage`]) consumed by the planner UI.

use std::collections::{BTreeMap, BTreeSet};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::enums::{Category, Drainage, Edibility, PhBand, Resistance, SoilType, SunExposure};
use crate::ids::{PlantId, ProfileId, ProfileTag};

// ---------------------------------------------------------------------------
// Plant
// ---------------------------------------------------------------------------

/// A species record from the static plant catalog.
///
/// Loaded once at startup and never mutated by the planning core.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Plant {
    /// Unique catalog identifier (slug).
    pub id: PlantId,
    /// Common display name.
    pub name: String,
    /// Botanical name.
    pub scientific_name: String,
    /// Tiers this species can occupy. A species may span several
    /// tiers; membership checks are set intersections.
    pub categories: BTreeSet<Category>,
    /// Sunlight levels tolerated.
    pub sun: BTreeSet<SunExposure>,
    /// Soil compositions tolerated.
    pub soil: BTreeSet<SoilType>,
    /// Drainage regimes tolerated.
    pub drainage: BTreeSet<Drainage>,
    /// Soil pH bands tolerated.
    pub ph: BTreeSet<PhBand>,
    /// Hardiness against exposure, browsing, and disease.
    pub resistance: Resistance,
    /// Whether any part of the species is edible.
    pub edibility: Edibility,
    /// Profiles this species suits, as canonical tags.
    pub profile_tags: BTreeSet<ProfileTag>,
    /// Relative path or URL of the species photograph.
    pub image: String,
    /// Photograph attribution text.
    pub attribution: String,
    /// Free-text planting notes.
    pub notes: String,
}

// ---------------------------------------------------------------------------
// Profile
// ---------------------------------------------------------------------------

/// An ecological planting template from the static profile catalog.
///
/// The density map expresses plants-per-10-area-units for each tier the
/// profile uses; tiers absent from the map get no quota entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Profile {
    /// Unique catalog identifier (slug).
    pub id: ProfileId,
    /// Display name.
    pub name: String,
    /// Short description shown alongside the profile picker.
    pub description: String,
    /// Relative path or URL of the profile illustration.
    pub image: String,
    /// Planting density per tier, in plants per 10 area units.
    #[ts(as = "BTreeMap<Category, String>")]
    pub densities: BTreeMap<Category, Decimal>,
    /// Tiers this profile uses, in display order.
    pub categories: Vec<Category>,
}

// ---------------------------------------------------------------------------
// Color
// ---------------------------------------------------------------------------

/// A display color in HSL space.
///
/// Hue is kept as a float so deterministic hue assignment survives the
/// round trip to CSS unquantized; saturation and lightness are whole
/// percentages.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Hsl {
    /// Hue angle in degrees, always within `[0, 360)`.
    pub hue: f64,
    /// Saturation percentage.
    pub saturation: u8,
    /// Lightness percentage.
    pub lightness: u8,
}

impl Hsl {
    /// Create a color from components.
    pub const fn new(hue: f64, saturation: u8, lightness: u8) -> Self {
        Self {
            hue,
            saturation,
            lightness,
        }
    }

    /// Render the color as a CSS `hsl()` function string.
    pub fn css(&self) -> String {
        let Self {
            hue,
            saturation,
            lightness,
        } = self;
        format!("hsl({hue:.2}, {saturation}%, {lightness}%)")
    }
}

// ---------------------------------------------------------------------------
// Sketch output
// ---------------------------------------------------------------------------

/// Rendering style for markers of one tier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct MarkerStyle {
    /// Marker radius in canvas units.
    pub radius: f64,
    /// Marker fill color.
    pub fill: Hsl,
}

impl Default for MarkerStyle {
    /// The fallback style for tiers with no configured style: a small
    /// neutral-gray dot.
    fn default() -> Self {
        Self {
            radius: 5.0,
            fill: Hsl::new(0.0, 0, 60),
        }
    }
}

/// One rendered point in the layout sketch, representing a single
/// physical plant instance.
///
/// Markers are ephemeral: every layout generation produces a fresh set
/// and no identity carries over between generations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct LayoutMarker {
    /// The species this marker stands for.
    pub plant: PlantId,
    /// Horizontal canvas coordinate.
    pub x: f64,
    /// Vertical canvas coordinate.
    pub y: f64,
    /// Marker radius in canvas units.
    pub radius: f64,
    /// Marker fill color.
    pub color: Hsl,
}

/// A species swatch for the sketch legend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct LegendEntry {
    /// The species.
    pub plant: PlantId,
    /// Its deterministic display color.
    pub color: Hsl,
}

/// Selected-versus-quota usage for one tier, for the totals display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct CategoryUsage {
    /// Units currently selected in the tier.
    pub selected: u32,
    /// The tier's quota cap.
    pub quota: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hsl_css_rendering() {
        let color = Hsl::new(137.5, 70, 50);
        assert_eq!(color.css(), "hsl(137.50, 70%, 50%)");
    }

    #[test]
    fn marker_style_default_is_neutral_gray() {
        let style = MarkerStyle::default();
        assert!((style.radius - 5.0).abs() < f64::EPSILON);
        assert_eq!(style.fill.saturation, 0);
    }

    #[test]
    fn layout_marker_roundtrip_serde() {
        let marker = LayoutMarker {
            plant: PlantId::new("hazel"),
            x: 120.0,
            y: 44.5,
            radius: 6.0,
            color: Hsl::new(90.0, 70, 50),
        };
        let json = serde_json::to_string(&marker).ok();
        assert!(json.is_some());
        let restored: Result<LayoutMarker, _> =
            serde_json::from_str(json.as_deref().unwrap_or("{}"));
        assert_eq!(restored.ok(), Some(marker));
    }

    #[test]
    fn profile_densities_key_by_tier() {
        let mut densities = BTreeMap::new();
        densities.insert(Category::Tree, Decimal::ONE);
        let profile = Profile {
            id: ProfileId::new("open_glade"),
            name: String::from("Open glade"),
            description: String::new(),
            image: String::new(),
            densities,
            categories: vec![Category::Tree],
        };
        assert_eq!(profile.densities.get(&Category::Tree), Some(&Decimal::ONE));
        assert_eq!(profile.densities.get(&Category::Canopy), None);
    }
}

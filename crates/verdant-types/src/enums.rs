//! Enumeration types for the Verdant planner.
//!
//! Plant tiers, plot shapes, and the tolerated-condition attribute
//! scales used for profile compatibility filtering.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// ---------------------------------------------------------------------------
// Plant tiers
// ---------------------------------------------------------------------------

/// A plant tier (size class) within the layered planting.
///
/// Tiers behave as tags, not as an exclusive classification: a species
/// may belong to several tiers at once (a mature oak is both a tree and
/// part of the canopy). Compatibility checks are set-intersection tests
/// over tier sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum Category {
    /// The tallest layer, closing over the planting.
    Canopy,
    /// Full-size trees below the canopy.
    Tree,
    /// Smaller understory trees.
    Subtree,
    /// The shrub layer.
    Shrub,
}

impl Category {
    /// All tiers, tallest first. The fixed display order for quota
    /// tables and layout styling.
    pub const ALL: [Self; 4] = [Self::Canopy, Self::Tree, Self::Subtree, Self::Shrub];
}

// ---------------------------------------------------------------------------
// Plot shape
// ---------------------------------------------------------------------------

/// The plot's presentation boundary, used to bound random placement.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize, TS,
)]
#[ts(export, export_to = "bindings/")]
pub enum PlotShape {
    /// Square plot filling the canvas (the default).
    #[default]
    Square,
    /// Circular plot inscribed in the canvas.
    Circle,
}

// ---------------------------------------------------------------------------
// Tolerated conditions
// ---------------------------------------------------------------------------

/// Sunlight levels a species tolerates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum SunExposure {
    /// Open, unshaded position.
    Full,
    /// Dappled or part-day shade.
    Partial,
    /// Deep shade under taller layers.
    Shade,
}

/// Soil compositions a species tolerates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum SoilType {
    /// Heavy, water-retentive clay.
    Clay,
    /// Balanced loam.
    Loam,
    /// Light, fast-draining sand.
    Sand,
    /// Shallow, lime-rich chalk.
    Chalk,
}

/// Drainage regimes a species tolerates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum Drainage {
    /// Ground that stays waterlogged for long spells.
    Wet,
    /// Moist but not waterlogged.
    Moist,
    /// Free-draining ground that dries quickly.
    FreeDraining,
}

/// Soil pH bands a species tolerates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum PhBand {
    /// Below neutral.
    Acid,
    /// Around neutral.
    Neutral,
    /// Above neutral.
    Alkaline,
}

// ---------------------------------------------------------------------------
// Attribute scales
// ---------------------------------------------------------------------------

/// How well a species stands up to exposure, browsing, and disease.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum Resistance {
    /// Needs shelter and establishment care.
    Low,
    /// Copes with typical site stress.
    Moderate,
    /// Thrives on harsh or exposed sites.
    High,
}

/// Whether any part of the species is usable as food.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum Edibility {
    /// No edible parts.
    NotEdible,
    /// Edible after preparation, or only some parts.
    PartlyEdible,
    /// Fruit, nuts, or leaves eaten as-is.
    Edible,
}

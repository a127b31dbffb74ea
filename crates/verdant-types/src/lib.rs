//! Shared type definitions for the Verdant pocket-forest planner.
//!
//! This crate is the single source of truth for all types used across
//! the Verdant workspace. Types defined here flow downstream to
//! `TypeScript` via `ts-rs` for the planner web UI.
//!
//! # Modules
//!
//! - [`ids`] -- Type-safe string-slug wrappers for catalog identifiers
//! - [`enums`] -- Enumeration types (tiers, plot shapes, condition scales)
//! - [`structs`] -- Catalog records and sketch output types

pub mod enums;
pub mod ids;
pub mod structs;

// Re-export all public types at crate root for convenience.
pub use enums::{
    Category, Drainage, Edibility, PhBand, PlotShape, Resistance, SoilType, SunExposure,
};
pub use ids::{PlantId, ProfileId, ProfileTag};
pub use structs::{
    CategoryUsage, Hsl, LayoutMarker, LegendEntry, MarkerStyle, Plant, Profile,
};

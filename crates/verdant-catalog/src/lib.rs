//! Static plant and profile reference catalogs for the Verdant planner.
//!
//! The surrounding application supplies exactly two pieces of reference
//! data: a species table and a profile table. Both are hard-coded,
//! loaded once at startup, validated for integrity, and read-only from
//! then on. The planning core treats them as external collaborators.
//!
//! # Modules
//!
//! - [`catalog`] -- The validated [`Catalog`] facade and its lookups.
//! - [`error`] -- Integrity errors surfaced at load time.
//! - [`plants`] -- The species table and the canonical tag vocabulary.
//! - [`profiles`] -- The profile table and the profile-to-tag mapping.

pub mod catalog;
pub mod error;
pub mod plants;
pub mod profiles;

// Re-export primary types at crate root.
pub use catalog::Catalog;
pub use error::CatalogError;
pub use plants::{KNOWN_TAGS, create_plant_catalog};
pub use profiles::{create_profile_catalog, profile_tag_map};

//! Error types for the `verdant-catalog` crate.
//!
//! Catalog data is hard-coded, so these errors can only surface when
//! the tables themselves are inconsistent. [`Catalog::load`] runs the
//! checks once at startup; after a successful load the data is
//! immutable and no further failure is possible.
//!
//! [`Catalog::load`]: crate::Catalog::load

use verdant_types::{PlantId, ProfileId, ProfileTag};

/// Errors raised by catalog integrity validation.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// Two plant records share an identifier.
    #[error("duplicate plant id: {0}")]
    DuplicatePlant(PlantId),

    /// Two profile records share an identifier.
    #[error("duplicate profile id: {0}")]
    DuplicateProfile(ProfileId),

    /// A profile has no entry in the identifier-to-tag mapping.
    #[error("profile {0} has no tag mapping")]
    MissingTagMapping(ProfileId),

    /// A plant lists a tag outside the canonical vocabulary.
    #[error("plant {plant} lists unknown profile tag {tag}")]
    UnknownProfileTag {
        /// The offending plant.
        plant: PlantId,
        /// The unrecognized tag.
        tag: ProfileTag,
    },

    /// The tag mapping resolves a profile to a tag outside the
    /// canonical vocabulary.
    #[error("profile {profile} maps to unknown tag {tag}")]
    UnknownMappedTag {
        /// The offending profile.
        profile: ProfileId,
        /// The unrecognized tag.
        tag: ProfileTag,
    },

    /// A profile's display category list disagrees with the keys of
    /// its density map.
    #[error("profile {0} category list does not match its densities")]
    DensityMismatch(ProfileId),
}

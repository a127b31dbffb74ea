//! Type-safe identifier wrappers around plain string slugs.
//!
//! Every catalog entity is keyed by a short human-readable slug (for
//! example `red_oak` or `damp_clay`). The slugs double as the input to
//! deterministic color assignment, so they stay strings rather than
//! opaque numeric handles. Strongly-typed wrappers prevent accidental
//! mixing of plant, profile, and tag identifiers at compile time.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Generates a newtype wrapper around [`String`] with standard derives.
macro_rules! define_key {
    (
        $(#[$meta:meta])*
        $name:ident
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
        #[ts(export, export_to = "bindings/")]
        pub struct $name(String);

        impl $name {
            /// Create an identifier from a slug.
            pub fn new(slug: impl Into<String>) -> Self {
                Self(slug.into())
            }

            /// Return the slug as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl core::fmt::Display for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<&str> for $name {
            fn from(slug: &str) -> Self {
                Self(slug.to_string())
            }
        }

        impl From<String> for $name {
            fn from(slug: String) -> Self {
                Self(slug)
            }
        }
    };
}

define_key! {
    /// Unique identifier for a plant species in the catalog.
    PlantId
}

define_key! {
    /// Unique identifier for an ecological planting profile.
    ProfileId
}

define_key! {
    /// A canonical profile compatibility tag.
    ///
    /// Plants list the tags they suit; each profile identifier resolves
    /// to a tag set through the fixed mapping in the catalog crate.
    ProfileTag
}

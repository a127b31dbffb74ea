//! The Verdant planning core: quotas, selection bookkeeping, species
//! filtering, deterministic colors, and the layout sketch generator.
//!
//! The core is a single-actor, synchronous library: every operation
//! runs to completion on the calling thread, there is no I/O, and the
//! only impurity is the unseeded randomness inside the layout
//! generator. The surrounding application owns the render loop and
//! feeds the core discrete commands.
//!
//! # Modules
//!
//! - [`quota`] -- [`QuotaTable`]: per-tier caps from (profile, area).
//! - [`filter`] -- Candidate species for a resolved profile tag set.
//! - [`selection`] -- [`SelectionLedger`]: quota-constrained quantity
//!   bookkeeping with a single no-fail transition.
//! - [`color`] -- Deterministic identifier-to-hue assignment and the
//!   sketch legend.
//! - [`layout`] -- Randomized marker placement within the plot shape.
//! - [`config`] -- Typed planner configuration loaded from YAML.
//!
//! # Pipeline
//!
//! ```text
//! profile + area -> QuotaTable -> SelectionLedger <- user commands
//! catalog + profile tags -> compatible_plants -> candidate list
//! ledger + styles + shape -> generate -> markers    (color_for -> legend)
//! ```

pub mod color;
pub mod config;
pub mod filter;
pub mod layout;
pub mod quota;
pub mod selection;

// Re-export primary types at crate root.
pub use color::{color_for, legend};
pub use config::{CanvasConfig, ConfigError, LoggingConfig, PlannerConfig};
pub use filter::compatible_plants;
pub use layout::generate;
pub use quota::QuotaTable;
pub use selection::SelectionLedger;

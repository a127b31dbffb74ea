//! Plan requests: the ordered command stream the binary replays.
//!
//! A plan file captures one planning session as data: the chosen
//! profile, the plot area and shape, and the increment/decrement
//! commands the user would have clicked, in order. Replaying the
//! commands through the selection ledger reproduces the session's
//! final state.

use std::path::Path;

use rust_decimal::Decimal;
use serde::Deserialize;

use verdant_types::{Category, PlantId, PlotShape, ProfileId};

use crate::error::PlanError;

/// One increment/decrement command for a (tier, species) pair.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SelectionCommand {
    /// The tier the command applies under.
    pub category: Category,
    /// The species being adjusted.
    pub plant: PlantId,
    /// Signed quantity change, typically +1 or -1.
    pub delta: i64,
}

/// A full planning session, loaded from YAML.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PlanRequest {
    /// The ecological profile to plan against.
    pub profile: ProfileId,

    /// Plot area in area units. Defaults to zero, matching a fresh
    /// session before the user types anything.
    #[serde(default)]
    pub area: Decimal,

    /// Plot shape; falls back to the configured default when absent.
    #[serde(default)]
    pub shape: Option<PlotShape>,

    /// Ordered selection commands to replay.
    #[serde(default)]
    pub selections: Vec<SelectionCommand>,
}

impl PlanRequest {
    /// Load a plan request from a YAML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns [`PlanError::Io`] if the file cannot be read, or
    /// [`PlanError::Yaml`] if the content is not valid YAML.
    pub fn from_file(path: &Path) -> Result<Self, PlanError> {
        let contents = std::fs::read_to_string(path)?;
        Ok(serde_yml::from_str(&contents)?)
    }

    /// Parse a plan request from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns [`PlanError::Yaml`] if the string is not valid YAML.
    pub fn parse(yaml: &str) -> Result<Self, PlanError> {
        Ok(serde_yml::from_str(yaml)?)
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn full_plan_parses() {
        let yaml = "\
profile: damp_clay
area: 100
shape: Circle
selections:
  - { category: Canopy, plant: pedunculate_oak, delta: 1 }
  - { category: Shrub, plant: hawthorn, delta: 3 }
  - { category: Shrub, plant: hawthorn, delta: -1 }
";
        let plan = PlanRequest::parse(yaml).ok();
        assert!(plan.is_some());
        let Some(plan) = plan else {
            return;
        };
        assert_eq!(plan.profile, ProfileId::new("damp_clay"));
        assert_eq!(plan.area, dec!(100));
        assert_eq!(plan.shape, Some(PlotShape::Circle));
        assert_eq!(plan.selections.len(), 3);
        assert_eq!(
            plan.selections.first(),
            Some(&SelectionCommand {
                category: Category::Canopy,
                plant: PlantId::new("pedunculate_oak"),
                delta: 1,
            })
        );
    }

    #[test]
    fn minimal_plan_defaults_area_and_shape() {
        let plan = PlanRequest::parse("profile: windswept\n").ok();
        assert!(plan.is_some());
        let Some(plan) = plan else {
            return;
        };
        assert_eq!(plan.area, Decimal::ZERO);
        assert_eq!(plan.shape, None);
        assert!(plan.selections.is_empty());
    }

    #[test]
    fn malformed_plan_is_a_yaml_error() {
        let result = PlanRequest::parse("profile: [unclosed");
        assert!(matches!(result, Err(PlanError::Yaml { .. })));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let result = PlanRequest::from_file(Path::new("/definitely/not/here.yaml"));
        assert!(matches!(result, Err(PlanError::Io { .. })));
    }
}

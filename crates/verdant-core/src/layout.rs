//! The layout sketch generator: a finalized selection becomes a set of
//! randomly placed, styled markers.
//!
//! This is a sketch tool, not a packing solver: markers may overlap,
//! and there is no minimum-spacing rule. The generator is impure by
//! design (unseeded randomness) and is re-invoked from scratch whenever
//! its inputs change; no marker identity survives between calls.

use std::collections::BTreeMap;
use std::f64::consts::TAU;

use rand::Rng;
use verdant_types::{Category, LayoutMarker, MarkerStyle, PlotShape};

use crate::selection::SelectionLedger;

/// Produce one marker per selected plant unit, placed within the plot
/// shape.
///
/// Styles come from `styles` per tier; unstyled tiers fall back to
/// [`MarkerStyle::default`]. Placement per marker:
///
/// - [`PlotShape::Circle`]: uniform angle in `[0, 2π)` and uniform
///   radius in `[0, shape_size/2 - marker_radius)`, offset from the
///   canvas center.
/// - [`PlotShape::Square`]: `x` and `y` independently uniform in
///   `[marker_radius, shape_size - marker_radius]`.
///
/// Markers whose radius leaves no room inside the shape pin to the
/// canvas center instead of sampling an empty range.
pub fn generate(
    ledger: &SelectionLedger,
    styles: &BTreeMap<Category, MarkerStyle>,
    shape: PlotShape,
    shape_size: f64,
) -> Vec<LayoutMarker> {
    let mut rng = rand::rng();
    let mut markers = Vec::new();

    for (category, plant, quantity) in ledger.entries() {
        let style = styles.get(&category).copied().unwrap_or_default();
        for _ in 0..quantity {
            let (x, y) = match shape {
                PlotShape::Circle => sample_disc(&mut rng, shape_size, style.radius),
                PlotShape::Square => sample_square(&mut rng, shape_size, style.radius),
            };
            markers.push(LayoutMarker {
                plant: plant.clone(),
                x,
                y,
                radius: style.radius,
                color: style.fill,
            });
        }
    }

    markers
}

/// Sample a point uniformly-by-radius inside the inscribed disc,
/// keeping the whole marker within the rim.
fn sample_disc<R: Rng>(rng: &mut R, shape_size: f64, marker_radius: f64) -> (f64, f64) {
    let center = shape_size / 2.0;
    let max_r = center - marker_radius;
    if max_r <= 0.0 {
        return (center, center);
    }
    let angle = rng.random_range(0.0..TAU);
    let r = rng.random_range(0.0..max_r);
    (
        r.mul_add(angle.cos(), center),
        r.mul_add(angle.sin(), center),
    )
}

/// Sample a point uniformly over the square, inset by the marker
/// radius on every side.
fn sample_square<R: Rng>(rng: &mut R, shape_size: f64, marker_radius: f64) -> (f64, f64) {
    let hi = shape_size - marker_radius;
    if hi <= marker_radius {
        let center = shape_size / 2.0;
        return (center, center);
    }
    (
        rng.random_range(marker_radius..=hi),
        rng.random_range(marker_radius..=hi),
    )
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;
    use verdant_types::{Hsl, PlantId, Profile, ProfileId};

    use super::*;
    use crate::quota::QuotaTable;

    const CANVAS: f64 = 500.0;

    fn styles() -> BTreeMap<Category, MarkerStyle> {
        let mut styles = BTreeMap::new();
        styles.insert(
            Category::Tree,
            MarkerStyle {
                radius: 11.0,
                fill: Hsl::new(130.0, 50, 38),
            },
        );
        styles.insert(
            Category::Shrub,
            MarkerStyle {
                radius: 6.0,
                fill: Hsl::new(90.0, 60, 52),
            },
        );
        styles
    }

    /// A ledger holding 8 trees and 4 shrubs (12 units total).
    fn twelve_unit_ledger() -> SelectionLedger {
        let profile = Profile {
            id: ProfileId::new("test"),
            name: String::from("Test"),
            description: String::new(),
            image: String::new(),
            densities: [(Category::Tree, dec!(1)), (Category::Shrub, dec!(1))]
                .into_iter()
                .collect(),
            categories: vec![Category::Tree, Category::Shrub],
        };
        let mut ledger = SelectionLedger::new(QuotaTable::compute(Some(&profile), dec!(100)));
        ledger.change_quantity(Category::Tree, &PlantId::new("silver_birch"), 5);
        ledger.change_quantity(Category::Tree, &PlantId::new("rowan"), 3);
        ledger.change_quantity(Category::Shrub, &PlantId::new("hawthorn"), 4);
        ledger
    }

    #[test]
    fn marker_count_matches_selection_total() {
        let ledger = twelve_unit_ledger();
        let markers = generate(&ledger, &styles(), PlotShape::Square, CANVAS);
        assert_eq!(markers.len(), 12);
    }

    #[test]
    fn square_markers_respect_the_inset_bounds() {
        let ledger = twelve_unit_ledger();
        for _ in 0..50 {
            let markers = generate(&ledger, &styles(), PlotShape::Square, CANVAS);
            for marker in &markers {
                assert!(marker.x >= marker.radius && marker.x <= CANVAS - marker.radius);
                assert!(marker.y >= marker.radius && marker.y <= CANVAS - marker.radius);
            }
        }
    }

    #[test]
    fn circle_markers_stay_inside_the_rim() {
        let ledger = twelve_unit_ledger();
        let center = CANVAS / 2.0;
        for _ in 0..50 {
            let markers = generate(&ledger, &styles(), PlotShape::Circle, CANVAS);
            for marker in &markers {
                let distance = (marker.x - center).hypot(marker.y - center);
                assert!(
                    distance <= center - marker.radius + 1e-9,
                    "marker at distance {distance} with radius {}",
                    marker.radius
                );
            }
        }
    }

    #[test]
    fn unstyled_tier_uses_the_default_style() {
        let ledger = twelve_unit_ledger();
        let markers = generate(&ledger, &BTreeMap::new(), PlotShape::Square, CANVAS);
        let default = MarkerStyle::default();
        for marker in &markers {
            assert!((marker.radius - default.radius).abs() < f64::EPSILON);
            assert_eq!(marker.color, default.fill);
        }
    }

    #[test]
    fn styles_follow_the_tier() {
        let ledger = twelve_unit_ledger();
        let markers = generate(&ledger, &styles(), PlotShape::Square, CANVAS);
        let tree_markers = markers
            .iter()
            .filter(|m| (m.radius - 11.0).abs() < f64::EPSILON)
            .count();
        let shrub_markers = markers
            .iter()
            .filter(|m| (m.radius - 6.0).abs() < f64::EPSILON)
            .count();
        assert_eq!(tree_markers, 8);
        assert_eq!(shrub_markers, 4);
    }

    #[test]
    fn empty_selection_generates_no_markers() {
        let ledger = SelectionLedger::new(QuotaTable::default());
        assert!(generate(&ledger, &styles(), PlotShape::Circle, CANVAS).is_empty());
    }

    #[test]
    fn oversized_marker_pins_to_the_center() {
        let ledger = twelve_unit_ledger();
        let mut giant = BTreeMap::new();
        let style = MarkerStyle {
            radius: 400.0,
            fill: Hsl::new(0.0, 0, 60),
        };
        giant.insert(Category::Tree, style);
        giant.insert(Category::Shrub, style);
        for shape in [PlotShape::Square, PlotShape::Circle] {
            let markers = generate(&ledger, &giant, shape, CANVAS);
            for marker in &markers {
                assert!((marker.x - 250.0).abs() < f64::EPSILON);
                assert!((marker.y - 250.0).abs() < f64::EPSILON);
            }
        }
    }

    #[test]
    fn successive_generations_are_fresh() {
        // Coordinates are continuous; two independent 12-marker sets
        // agreeing everywhere would mean the generator reused markers.
        let ledger = twelve_unit_ledger();
        let first = generate(&ledger, &styles(), PlotShape::Square, CANVAS);
        let second = generate(&ledger, &styles(), PlotShape::Square, CANVAS);
        assert_eq!(first.len(), second.len());
        assert_ne!(first, second);
    }
}

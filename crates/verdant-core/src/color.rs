//! Deterministic species colors: identifier in, stable hue out.
//!
//! The identifier's UTF-16 code units fold into a 32-bit signed hash
//! with explicit wraparound (`hash = code + ((hash << 5) - hash)`,
//! the classic 31-multiplier string hash). The hash then lands on the
//! hue wheel with a golden-angle stride, so nearby identifiers spread
//! apart instead of clustering. Wrapping arithmetic on a fixed-width
//! integer is load-bearing here: the web UI computes the same hash over
//! the same identifiers, and both sides must agree bit for bit.

use verdant_types::{Hsl, LegendEntry, Plant};

/// Degrees between consecutive hash values on the hue wheel.
const HUE_STRIDE: f64 = 137.508;

/// Fixed saturation percentage for species colors.
const SATURATION: u8 = 70;

/// Fixed lightness percentage for species colors.
const LIGHTNESS: u8 = 50;

/// Map an identifier to its display color.
///
/// Total and referentially transparent: the same identifier yields the
/// same color on every call, in every process, on every platform. Hue
/// is always within `[0, 360)`.
pub fn color_for(identifier: &str) -> Hsl {
    let mut hash: i32 = 0;
    for code in identifier.encode_utf16() {
        hash = hash
            .wrapping_shl(5)
            .wrapping_sub(hash)
            .wrapping_add(i32::from(code));
    }
    let hue = (f64::from(hash) * HUE_STRIDE).rem_euclid(360.0);
    Hsl::new(hue, SATURATION, LIGHTNESS)
}

/// Build the sketch legend for a candidate list.
///
/// One swatch per species, colored by [`color_for`] over the species
/// identifier, in the order given (catalog order when fed from the
/// filter).
pub fn legend(plants: &[&Plant]) -> Vec<LegendEntry> {
    plants
        .iter()
        .map(|plant| LegendEntry {
            plant: plant.id.clone(),
            color: color_for(plant.id.as_str()),
        })
        .collect()
}

use palette::{Hsl, IntoColor, Srgb};

use crate::chart::geometry::lerp;

// Red hsl(0, 100%, 58%) at an empty score sheet, green hsl(130, 100%, 45%)
// at a full one.
const HUE_LOW: f64 = 0.0;
const HUE_HIGH: f64 = 130.0;
const LIGHTNESS_LOW: f64 = 0.58;
const LIGHTNESS_HIGH: f64 = 0.45;

/// Blob color for an aggregate score, as HSL. Hue and lightness move
/// linearly with the score ratio; saturation stays pegged at 100%.
/// `max_aggregate` must be positive (caller contract).
pub fn blob_hsl(aggregate: u32, max_aggregate: u32) -> Hsl<palette::encoding::Srgb, f64> {
    let t = (aggregate as f64 / max_aggregate as f64).clamp(0.0, 1.0);
    Hsl::new(
        lerp(HUE_LOW, HUE_HIGH, t),
        1.0,
        lerp(LIGHTNESS_LOW, LIGHTNESS_HIGH, t),
    )
}

/// Same color converted for the drawing surface.
pub fn blob_color(aggregate: u32, max_aggregate: u32) -> Srgb<f64> {
    blob_hsl(aggregate, max_aggregate).into_color()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::MAX_AGGREGATE;
    use approx::assert_relative_eq;

    #[test]
    fn test_color_endpoints() {
        let red = blob_hsl(0, MAX_AGGREGATE);
        assert_relative_eq!(red.hue.into_positive_degrees(), 0.0);
        assert_relative_eq!(red.saturation, 1.0);
        assert_relative_eq!(red.lightness, 0.58);

        let green = blob_hsl(MAX_AGGREGATE, MAX_AGGREGATE);
        assert_relative_eq!(green.hue.into_positive_degrees(), 130.0);
        assert_relative_eq!(green.lightness, 0.45);
    }

    #[test]
    fn test_color_for_demo_scores() {
        // scores [3, 7, 5, 7, 1] -> aggregate 23 of 35
        let hsl = blob_hsl(23, MAX_AGGREGATE);
        assert_relative_eq!(hsl.hue.into_positive_degrees(), 85.43, epsilon = 0.01);
        assert_relative_eq!(hsl.lightness, 0.4946, epsilon = 0.0001);
    }

    #[test]
    fn test_hue_and_lightness_monotonic() {
        let mut last_hue = -1.0;
        let mut last_lightness = f64::MAX;
        for aggregate in 0..=MAX_AGGREGATE {
            let hsl = blob_hsl(aggregate, MAX_AGGREGATE);
            let hue = hsl.hue.into_positive_degrees();
            assert!(hue >= last_hue);
            assert!(hsl.lightness <= last_lightness);
            last_hue = hue;
            last_lightness = hsl.lightness;
        }
    }

    #[test]
    fn test_ratio_clamped() {
        let over = blob_hsl(100, MAX_AGGREGATE);
        let full = blob_hsl(MAX_AGGREGATE, MAX_AGGREGATE);
        assert_relative_eq!(
            over.hue.into_positive_degrees(),
            full.hue.into_positive_degrees()
        );
    }
}

//! Ring and button sizes derived from the drawing area.
//!
//! ## Usage
//!
//! Compute once per layout pass, then place both rings and the button from
//! the result.

use chimely_ui::{Dp, DpPosition};

use crate::palette::TimerPalette;

/// Layout of the two rings and the central button inside a square.
///
/// Every length is non-negative. Positions are relative to the square's
/// top-left corner.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct IndicatorGeometry {
    /// Side of the square the indicator occupies.
    pub size: Dp,
    /// Stroke width shared by both rings.
    pub line_width: Dp,
    /// Space between the rings, and between the inner ring and the button.
    pub gap: Dp,
    /// Inset of the duration ring's path from the square edge.
    pub outer_padding: Dp,
    /// Inset of the interval ring's path from the square edge.
    pub inner_padding: Dp,
    /// Radius of the inner edge of the interval ring's stroke.
    pub inner_ring_inner_radius: Dp,
    /// Diameter of the central button.
    pub button_diameter: Dp,
}

impl IndicatorGeometry {
    /// Computes the layout for a square of side `side` with the default palette.
    ///
    /// ```
    /// use chimely_components::geometry::IndicatorGeometry;
    /// use chimely_ui::Dp;
    ///
    /// let geometry = IndicatorGeometry::compute(Dp(0.0));
    /// assert_eq!(geometry.line_width, Dp(4.0));
    /// assert_eq!(geometry.button_diameter, Dp(0.0));
    /// ```
    pub fn compute(side: Dp) -> Self {
        Self::compute_with(side, &TimerPalette::default())
    }

    /// Computes the layout for a square of side `side` using the ratios of `palette`.
    ///
    /// Negative and non-finite sides count as zero.
    pub fn compute_with(side: Dp, palette: &TimerPalette) -> Self {
        let size = side.non_negative();
        let line_width = (size * palette.line_width_ratio).max(palette.minimum_line_width);
        let gap = (size * palette.gap_ratio()).max(palette.minimum_gap());
        let outer_padding = line_width / 2.0;
        let inner_padding = outer_padding + line_width + gap;
        let inner_ring_inner_radius = (size / 2.0 - inner_padding - line_width / 2.0).non_negative();
        let button_radius = (inner_ring_inner_radius - gap).non_negative();

        Self {
            size,
            line_width,
            gap,
            outer_padding,
            inner_padding,
            inner_ring_inner_radius,
            button_diameter: button_radius * 2.0,
        }
    }

    /// Center of the square.
    pub fn center(&self) -> DpPosition {
        DpPosition::new(self.size / 2.0, self.size / 2.0)
    }

    /// Radius of the duration ring's stroke path.
    pub fn duration_ring_radius(&self) -> Dp {
        (self.size / 2.0 - self.outer_padding).non_negative()
    }

    /// Radius of the interval ring's stroke path.
    pub fn interval_ring_radius(&self) -> Dp {
        (self.size / 2.0 - self.inner_padding).non_negative()
    }

    /// Radius of the central button.
    pub fn button_radius(&self) -> Dp {
        self.button_diameter / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: Dp, b: f64) -> bool {
        (a.0 - b).abs() < 1e-9
    }

    #[test]
    fn zero_side_keeps_minimums() {
        let geometry = IndicatorGeometry::compute(Dp(0.0));
        assert_eq!(geometry.line_width, Dp(4.0));
        assert!(approx_eq(geometry.gap, 1.28));
        assert_eq!(geometry.outer_padding, Dp(2.0));
        assert!(approx_eq(geometry.inner_padding, 7.28));
        assert_eq!(geometry.inner_ring_inner_radius, Dp(0.0));
        assert_eq!(geometry.button_diameter, Dp(0.0));
    }

    #[test]
    fn negative_and_nan_sides_degrade_to_zero() {
        let zero = IndicatorGeometry::compute(Dp(0.0));
        assert_eq!(IndicatorGeometry::compute(Dp(-50.0)), zero);
        assert_eq!(IndicatorGeometry::compute(Dp(f64::NAN)), zero);
        assert_eq!(IndicatorGeometry::compute(Dp(f64::INFINITY)), zero);
    }

    #[test]
    fn three_hundred_point_square() {
        let geometry = IndicatorGeometry::compute(Dp(300.0));
        assert!(approx_eq(geometry.line_width, 25.5));
        assert!(approx_eq(geometry.gap, 11.52));
        assert!(approx_eq(geometry.outer_padding, 12.75));
        assert!(approx_eq(geometry.inner_padding, 49.77));
        assert!(approx_eq(geometry.inner_ring_inner_radius, 87.48));
        assert!(approx_eq(geometry.button_diameter, 151.92));
        assert!(approx_eq(geometry.duration_ring_radius(), 137.25));
        assert!(approx_eq(geometry.interval_ring_radius(), 100.23));
    }

    #[test]
    fn is_idempotent() {
        assert_eq!(
            IndicatorGeometry::compute(Dp(217.0)),
            IndicatorGeometry::compute(Dp(217.0))
        );
    }

    #[test]
    fn grows_monotonically() {
        let mut previous = IndicatorGeometry::compute(Dp(0.0));
        for step in 1..=400 {
            let current = IndicatorGeometry::compute(Dp(step as f64 * 1.5));
            assert!(current.line_width >= previous.line_width);
            assert!(current.gap >= previous.gap);
            assert!(current.button_diameter >= previous.button_diameter);
            assert!(current.button_diameter >= Dp::ZERO);
            previous = current;
        }
    }
}

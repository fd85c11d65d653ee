// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Typographic unit conversion.
//!
//! Font sizes and measured text widths are in points (1/72 inch). Layout happens in
//! device pixels, so every text-derived length goes through [`points_to_pixels`] at the
//! backend's reported resolution.

/// Resolution assumed by backends that have no better idea, in dots per inch.
pub const DEFAULT_DPI: f64 = 92.0;

const POINTS_PER_INCH: f64 = 72.0;

/// Converts a length in points to pixels at `dpi`.
#[must_use]
pub fn points_to_pixels(dpi: f64, points: f64) -> f64 {
    points * dpi / POINTS_PER_INCH
}

/// Converts a length in pixels to points at `dpi`.
///
/// Returns `0` for a non-positive `dpi`.
#[must_use]
pub fn pixels_to_points(dpi: f64, pixels: f64) -> f64 {
    if dpi <= 0.0 {
        return 0.0;
    }
    pixels * POINTS_PER_INCH / dpi
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seventy_two_dpi_is_identity() {
        assert_eq!(points_to_pixels(72.0, 13.5), 13.5);
        assert_eq!(pixels_to_points(72.0, 13.5), 13.5);
    }

    #[test]
    fn conversion_scales_with_dpi() {
        assert_eq!(points_to_pixels(144.0, 10.0), 20.0);
        assert_eq!(pixels_to_points(144.0, 20.0), 10.0);
        let px = points_to_pixels(DEFAULT_DPI, 12.0);
        assert!((pixels_to_points(DEFAULT_DPI, px) - 12.0).abs() < 1e-12);
    }

    #[test]
    fn zero_dpi_does_not_divide_by_zero() {
        assert_eq!(pixels_to_points(0.0, 10.0), 0.0);
        assert_eq!(points_to_pixels(0.0, 10.0), 0.0);
    }
}

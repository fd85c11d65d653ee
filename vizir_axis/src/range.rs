// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Data-space to pixel-space mapping for one axis.

use crate::RangeError;

/// A continuous data interval `[min, max]` mapped onto `domain` pixels.
///
/// The mapping is linear and monotonic: `min` lands at offset `0` and `max` at offset
/// `domain`. A `Range` is validated on construction, so `min <= max` and all three values
/// are finite for every value of this type.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Range {
    min: f64,
    max: f64,
    domain: f64,
}

impl Range {
    /// Creates a range over `[min, max]` spanning `domain` pixels.
    pub fn new(min: f64, max: f64, domain: f64) -> Result<Self, RangeError> {
        if !(min.is_finite() && max.is_finite() && domain.is_finite()) {
            return Err(RangeError::NonFinite);
        }
        if max < min {
            return Err(RangeError::Inverted { min, max });
        }
        if domain < 0.0 {
            return Err(RangeError::NegativeDomain(domain));
        }
        Ok(Self { min, max, domain })
    }

    /// Lower bound of the data interval.
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Upper bound of the data interval.
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Available width in pixels.
    pub fn domain(&self) -> f64 {
        self.domain
    }

    /// `max - min`.
    pub fn delta(&self) -> f64 {
        self.max - self.min
    }

    /// Returns `true` if the data interval has zero width.
    pub fn is_empty(&self) -> bool {
        self.delta() == 0.0
    }

    /// Returns a copy spanning `[min, max]` with the same pixel domain.
    pub fn with_bounds(&self, min: f64, max: f64) -> Result<Self, RangeError> {
        Self::new(min, max, self.domain)
    }

    /// Returns a copy with a different pixel domain.
    pub fn with_domain(&self, domain: f64) -> Result<Self, RangeError> {
        Self::new(self.min, self.max, domain)
    }

    /// Maps a data value to a pixel offset from the start of the domain.
    ///
    /// Values outside `[min, max]` extrapolate linearly. An empty range maps everything
    /// to `0`.
    pub fn translate(&self, value: f64) -> f64 {
        let delta = self.delta();
        if delta == 0.0 {
            return 0.0;
        }
        (value - self.min) / delta * self.domain
    }
}

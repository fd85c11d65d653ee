// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use thiserror::Error;

/// Reasons a [`Range`](crate::Range) cannot be constructed.
#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum RangeError {
    /// One of `min`, `max` or `domain` is NaN or infinite.
    #[error("range bounds and domain must be finite")]
    NonFinite,
    /// `max` is smaller than `min`.
    #[error("range is inverted: max {max} < min {min}")]
    Inverted {
        /// The requested minimum.
        min: f64,
        /// The requested maximum.
        max: f64,
    },
    /// The pixel domain is negative.
    #[error("pixel domain must not be negative, got {0}")]
    NegativeDomain(f64),
}

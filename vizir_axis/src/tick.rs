// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

extern crate alloc;

use alloc::string::String;
use core::cmp::Ordering;

/// A labeled reference point on an axis.
#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    /// Position in data space.
    pub value: f64,
    /// Text drawn at the tick.
    pub label: String,
}

impl Tick {
    /// Creates a tick.
    pub fn new(value: f64, label: impl Into<String>) -> Self {
        Self {
            value,
            label: label.into(),
        }
    }

    /// Canonical draw order: ascending value, then label.
    ///
    /// Total over all floats (NaN sorts last), so sorting is deterministic for any input.
    pub fn draw_order(&self, other: &Self) -> Ordering {
        self.value
            .total_cmp(&other.value)
            .then_with(|| self.label.cmp(&other.label))
    }
}

/// Sorts ticks into canonical draw order in place.
pub fn sort_ticks(ticks: &mut [Tick]) {
    ticks.sort_by(Tick::draw_order);
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;

    use super::*;

    #[test]
    fn sorts_by_value_then_label() {
        let mut ticks = vec![
            Tick::new(2.0, "b"),
            Tick::new(-1.0, "z"),
            Tick::new(2.0, "a"),
            Tick::new(0.5, "m"),
        ];
        sort_ticks(&mut ticks);
        let order: std::vec::Vec<_> = ticks.iter().map(|t| (t.value, t.label.as_str())).collect();
        assert_eq!(order, [(-1.0, "z"), (0.5, "m"), (2.0, "a"), (2.0, "b")]);
    }

    #[test]
    fn nan_sorts_after_finite_values() {
        let mut ticks = vec![Tick::new(f64::NAN, "nan"), Tick::new(1.0, "one")];
        sort_ticks(&mut ticks);
        assert_eq!(ticks[0].label, "one");
        assert_eq!(ticks[1].label, "nan");
    }
}

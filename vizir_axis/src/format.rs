// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tick label formatting.

extern crate alloc;

use alloc::format;
use alloc::string::String;
use alloc::sync::Arc;

/// Converts a data value into tick label text.
///
/// Formatters are treated as opaque and may produce labels of any length.
pub type ValueFormatter = Arc<dyn Fn(f64) -> String>;

/// Formats a value with two decimal places.
///
/// This is the formatter an [`XAxis`](crate::XAxis) uses when none is set.
pub fn format_float(v: f64) -> String {
    format!("{v:.2}")
}

/// Returns a formatter that prints `precision` decimal places.
pub fn float_formatter(precision: usize) -> ValueFormatter {
    Arc::new(move |v| format!("{v:.precision$}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_format_has_two_decimals() {
        assert_eq!(format_float(0.0), "0.00");
        assert_eq!(format_float(1.005), "1.00");
        assert_eq!(format_float(-12.5), "-12.50");
    }

    #[test]
    fn precision_is_respected() {
        assert_eq!(float_formatter(0)(3.7), "4");
        assert_eq!(float_formatter(3)(1.0), "1.000");
    }
}

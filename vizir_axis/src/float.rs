// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Float helpers for `no_std` builds.
//!
//! `f64::ceil` is not available in `core`; dispatch to `libm` instead.

pub(crate) trait FloatExt {
    fn ceil(self) -> Self;
}

#[cfg(feature = "libm")]
impl FloatExt for f64 {
    fn ceil(self) -> Self {
        libm::ceil(self)
    }
}

#[cfg(not(feature = "libm"))]
compile_error!("vizir_axis requires either the `std` or `libm` feature");

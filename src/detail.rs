// This file is part of the xfloat32 project.
//
// Copyright (C) 2025 Chen-Pang He <jdh8@skymizer.com>
//
// This Source Code Form is subject to the terms of the Mozilla
// Public License v. 2.0. If a copy of the MPL was not distributed
// with this file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Implementation details
//!
//! Bit-level primitives shared by both storage types.  Symbols here are
//! public for macros and downstream kernels that operate on raw buffers.

/// Explicit mantissa bits kept by xfloat32
pub const MANTISSA_BITS: u32 = 9;

/// Number of low mantissa bits discarded from [`f32`]
pub const SHIFT: u32 = f32::MANTISSA_DIGITS - 1 - MANTISSA_BITS;

/// Bits that survive conversion from [`f32`]
pub const PRECISION_MASK: u32 = !((1 << SHIFT) - 1);

pub const SIGN_MASK: u32 = 0x8000_0000;
pub const EXPONENT_MASK: u32 = 0x7F80_0000;

/// Mantissa bits that survive conversion from [`f32`]
pub const MANTISSA_MASK: u32 = 0x007F_FFFF & PRECISION_MASK;

/// Everything but the sign and the discarded bits
pub const MAGNITUDE_MASK: u32 = EXPONENT_MASK | MANTISSA_MASK;

/// Clear the bits below `M` explicit bits of precision
#[must_use]
pub const fn truncate_to_precision<const M: u32>(x: u32) -> u32 {
    let shift = f32::MANTISSA_DIGITS - 1 - M;
    x & !((1 << shift) - 1)
}

/// Round to the nearest value with `M` explicit bits of precision, ties to even
///
/// Finite inputs are rounded by integer addition on the whole bit pattern, so
/// a mantissa carry bumps the exponent, and the largest finite values round
/// up to infinity.  Infinities pass through.  A NaN whose payload would be
/// discarded entirely gets its lowest surviving bit set so that it cannot
/// decay into an infinity.
#[must_use]
pub const fn round_to_precision<const M: u32>(x: u32) -> u32 {
    let shift = f32::MANTISSA_DIGITS - 1 - M;
    let ulp = 1 << shift;
    let low = ulp - 1;

    let x = if x & EXPONENT_MASK != EXPONENT_MASK {
        let bias = (ulp >> 1) - (!(x >> shift) & 1);
        x.wrapping_add(bias)
    } else if x & low != 0 {
        x | ulp
    } else {
        x
    };

    x & !low
}

/// Check for ±0 ignoring the discarded bits
#[must_use]
pub const fn is_zero_bits(x: u32) -> bool {
    x & MAGNITUDE_MASK == 0
}

/// Check for NaN by the exponent and the surviving mantissa
#[must_use]
pub const fn is_nan_bits(x: u32) -> bool {
    x & EXPONENT_MASK == EXPONENT_MASK && x & MANTISSA_MASK != 0
}

/// Check for ±∞ by the exponent and the surviving mantissa
#[must_use]
pub const fn is_infinite_bits(x: u32) -> bool {
    x & EXPONENT_MASK == EXPONENT_MASK && x & MANTISSA_MASK == 0
}

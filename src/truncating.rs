// This file is part of the xfloat32 project.
//
// Copyright (C) 2024-2025 Chen-Pang He <jdh8@skymizer.com>
//
// This Source Code Form is subject to the terms of the Mozilla
// Public License v. 2.0. If a copy of the MPL was not distributed
// with this file, You can obtain one at http://mozilla.org/MPL/2.0/.

use crate::detail;

/// Truncating xfloat32
///
/// Narrowing from [`f32`] drops the low 14 mantissa bits without rounding,
/// so the magnitude never grows.  Every NaN narrows to the same quiet NaN,
/// [`XFloat32::NAN`].  The default value is +0.
#[repr(transparent)]
#[cfg_attr(feature = "bytemuck", derive(bytemuck::Pod, bytemuck::Zeroable))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, Default)]
pub struct XFloat32(u32);

impl XFloat32 {
    /// Canonical quiet NaN, the image of every NaN
    pub const NAN: Self = Self(0xFFC1_0000);

    /// Raw transmutation from `u32`
    #[must_use]
    pub const fn from_bits(v: u32) -> Self {
        Self(v)
    }

    /// Raw transmutation to `u32`
    #[must_use]
    pub const fn to_bits(self) -> u32 {
        self.0
    }

    /// Truncate an [`f32`]
    ///
    /// NaNs map to [`XFloat32::NAN`].  Other values keep their sign, their
    /// exponent, and the upper 9 bits of their mantissa.
    #[must_use]
    pub const fn from_f32(x: f32) -> Self {
        if x.is_nan() {
            return Self::NAN;
        }
        Self(detail::truncate_to_precision::<{ detail::MANTISSA_BITS }>(x.to_bits()))
    }

    /// Zero-extend to [`f32`]
    ///
    /// This conversion is exact.
    #[must_use]
    pub const fn to_f32(self) -> f32 {
        f32::from_bits(self.0)
    }

    /// Check if the value is NaN
    #[must_use]
    pub const fn is_nan(self) -> bool {
        self.to_f32().is_nan()
    }

    /// Check if the value is positive or negative infinity
    #[must_use]
    pub const fn is_infinite(self) -> bool {
        self.to_f32().is_infinite()
    }

    /// Absolute value, computed in [`f32`]
    #[must_use]
    pub fn abs(self) -> Self {
        Self::from_f32(libm::fabsf(self.to_f32()))
    }
}

impl core::ops::Neg for XFloat32 {
    type Output = Self;

    fn neg(self) -> Self {
        Self::from_f32(-self.to_f32())
    }
}

crate::derive_xfloat!(XFloat32);

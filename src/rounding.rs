// This file is part of the xfloat32 project.
//
// Copyright (C) 2024-2025 Chen-Pang He <jdh8@skymizer.com>
//
// This Source Code Form is subject to the terms of the Mozilla
// Public License v. 2.0. If a copy of the MPL was not distributed
// with this file, You can obtain one at http://mozilla.org/MPL/2.0/.

use core::mem::MaybeUninit;

/// Rounding xfloat32
///
/// Narrowing from [`f32`] rounds to nearest, ties to even.  NaNs stay
/// distinct, and a NaN whose payload lives only in the discarded bits is
/// kept a NaN by forcing the lowest surviving mantissa bit.
///
/// There is deliberately no [`Default`].  Buffers that must not be
/// initialized, such as shared scratch memory, take their storage from
/// [`RoundingXFloat32::uninit`] or [`RoundingXFloat32::uninit_array`].
///
/// Without the `arithmetic` feature this is a storage-only wrapper around
/// the bits, with the same layout.
#[repr(transparent)]
#[cfg_attr(feature = "bytemuck", derive(bytemuck::Pod, bytemuck::Zeroable))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy)]
pub struct RoundingXFloat32(u32);

impl RoundingXFloat32 {
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

    /// Storage for one value, left uninitialized
    #[must_use]
    pub const fn uninit() -> MaybeUninit<Self> {
        MaybeUninit::uninit()
    }

    /// Storage for `N` values, left uninitialized
    #[must_use]
    pub const fn uninit_array<const N: usize>() -> [MaybeUninit<Self>; N] {
        [const { MaybeUninit::uninit() }; N]
    }
}

#[cfg(feature = "arithmetic")]
mod arithmetic {
    use super::RoundingXFloat32;
    use crate::detail;

    impl RoundingXFloat32 {
        /// Default quiet NaN
        pub const NAN: Self = Self::from_bits(0x7FC0_0000);

        /// Round an [`f32`] to nearest, ties to even
        ///
        /// Values past [`RoundingXFloat32::MAX`] round to infinity.
        /// Infinities pass through.  NaNs stay NaNs, signaling or not.
        #[must_use]
        pub const fn from_f32(x: f32) -> Self {
            Self::from_bits(detail::round_to_precision::<{ detail::MANTISSA_BITS }>(x.to_bits()))
        }

        /// Reinterpret as [`f32`]
        ///
        /// This conversion is exact.
        #[must_use]
        pub const fn to_f32(self) -> f32 {
            f32::from_bits(self.to_bits())
        }

        /// Check if the value is NaN
        ///
        /// Only the surviving mantissa bits are inspected.
        #[must_use]
        pub const fn is_nan(self) -> bool {
            detail::is_nan_bits(self.to_bits())
        }

        /// Check if the value is positive or negative infinity
        ///
        /// Only the surviving mantissa bits are inspected.
        #[must_use]
        pub const fn is_infinite(self) -> bool {
            detail::is_infinite_bits(self.to_bits())
        }

        /// Absolute value by clearing the sign bit
        #[must_use]
        pub const fn abs(self) -> Self {
            Self::from_bits(self.to_bits() & !detail::SIGN_MASK)
        }
    }

    impl core::ops::Neg for RoundingXFloat32 {
        type Output = Self;

        fn neg(self) -> Self {
            Self::from_bits(self.to_bits() ^ detail::SIGN_MASK)
        }
    }

    crate::derive_xfloat!(RoundingXFloat32);
}

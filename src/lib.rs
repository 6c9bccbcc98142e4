// This file is part of the xfloat32 project.
//
// Copyright (C) 2024-2025 Chen-Pang He <jdh8@skymizer.com>
//
// This Source Code Form is subject to the terms of the Mozilla
// Public License v. 2.0. If a copy of the MPL was not distributed
// with this file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Reduced-precision float32 storage
//!
//! An xfloat32 has the layout of an IEEE 754 binary32, but only the upper
//! 18 bits carry information: the sign, the 8-bit exponent, and 9 explicit
//! mantissa bits.  The low 14 bits are always zero after conversion from
//! [`f32`], so widening back to [`f32`] is a plain bit cast.
//!
//! Two types with different narrowing policies live side by side:
//!
//! - [`XFloat32`] truncates the discarded bits and collapses every NaN to
//!   one canonical quiet NaN.  Its [`Default`] is +0.
//! - [`RoundingXFloat32`] rounds to nearest, ties to even, and keeps NaNs
//!   distinct.  It has no [`Default`]: [`RoundingXFloat32::uninit`] hands out
//!   uninitialized storage instead.
//!
//! Arithmetic is never native.  Every operator widens its operands to
//! [`f32`], computes in [`f32`], and narrows the result with the type's own
//! conversion.
#![no_std]

pub mod detail;

use core::fmt::Debug;

/// Explicit and implicit mantissa bits of an xfloat32
pub const MANTISSA_DIGITS: u32 = detail::MANTISSA_BITS + 1;

/// Common interface of xfloat32 types
///
/// Both storage types implement this trait, so generic code can work with
/// either narrowing policy.
pub trait XFloat: Copy + PartialEq + PartialOrd + Debug {
    /// The radix or base of the internal representation
    const RADIX: u32 = 2;

    /// The number of digits in the significand, including the implicit bit
    const MANTISSA_DIGITS: u32 = MANTISSA_DIGITS;

    /// Maximum possible power of 2 exponent
    const MAX_EXP: i32 = f32::MAX_EXP;

    /// One greater than the minimum normal power of 2 exponent
    const MIN_EXP: i32 = f32::MIN_EXP;

    /// The NaN produced when narrowing a NaN without a payload to keep
    const NAN: Self;

    /// Positive infinity (∞)
    const INFINITY: Self;

    /// Negative infinity (−∞)
    const NEG_INFINITY: Self;

    /// Positive zero (+0)
    const ZERO: Self;

    /// Negative zero (−0)
    const NEG_ZERO: Self;

    /// One (1)
    const ONE: Self;

    /// Largest finite value
    const MAX: Self;

    /// Smallest finite value
    const MIN: Self;

    /// Smallest positive normal value
    const MIN_POSITIVE: Self;

    /// [Machine epsilon](https://en.wikipedia.org/wiki/Machine_epsilon)
    const EPSILON: Self;

    /// Raw transmutation from `u32`
    #[must_use]
    fn from_bits(v: u32) -> Self;

    /// Raw transmutation to `u32`
    #[must_use]
    fn to_bits(self) -> u32;

    /// Narrow from [`f32`] with the type's own policy
    #[must_use]
    fn from_f32(x: f32) -> Self;

    /// Widen to [`f32`]
    #[must_use]
    fn to_f32(self) -> f32;

    /// Narrow from [`f64`] through [`f32`]
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    fn from_f64(x: f64) -> Self {
        Self::from_f32(x as f32)
    }

    /// Widen to [`f64`]
    #[must_use]
    fn to_f64(self) -> f64 {
        f64::from(self.to_f32())
    }

    /// Check if the value is NaN
    #[must_use]
    fn is_nan(self) -> bool;

    /// Check if the value is positive or negative infinity
    #[must_use]
    fn is_infinite(self) -> bool;

    /// Check if the value is finite, i.e. neither infinite nor NaN
    #[must_use]
    fn is_finite(self) -> bool {
        !self.is_nan() && !self.is_infinite()
    }

    /// Check if the value is ±0
    #[must_use]
    fn is_zero(self) -> bool {
        detail::is_zero_bits(self.to_bits())
    }

    /// Check if the sign bit is set
    #[must_use]
    fn is_sign_negative(self) -> bool {
        self.to_bits() & detail::SIGN_MASK != 0
    }

    /// Check if the sign bit is clear
    #[must_use]
    fn is_sign_positive(self) -> bool {
        !self.is_sign_negative()
    }
}

/// Forward a binary operator through [`f32`]
macro_rules! forward_binop {
    ($name:ident, $trait:ident, $method:ident, $assign:ident, $assign_method:ident) => {
        impl core::ops::$trait for $name {
            type Output = Self;

            fn $method(self, rhs: Self) -> Self {
                Self::from_f32(core::ops::$trait::$method(self.to_f32(), rhs.to_f32()))
            }
        }

        impl core::ops::$trait<i32> for $name {
            type Output = Self;

            #[allow(clippy::cast_precision_loss)]
            fn $method(self, rhs: i32) -> Self {
                Self::from_f32(core::ops::$trait::$method(self.to_f32(), rhs as f32))
            }
        }

        impl core::ops::$trait<$name> for i32 {
            type Output = $name;

            #[allow(clippy::cast_precision_loss)]
            fn $method(self, rhs: $name) -> $name {
                $name::from_f32(core::ops::$trait::$method(self as f32, rhs.to_f32()))
            }
        }

        impl core::ops::$assign for $name {
            fn $assign_method(&mut self, rhs: Self) {
                *self = core::ops::$trait::$method(*self, rhs);
            }
        }

        impl core::ops::$assign<i32> for $name {
            fn $assign_method(&mut self, rhs: i32) {
                *self = core::ops::$trait::$method(*self, rhs);
            }
        }
    };
}

/// Derive everything that is defined through the conversion primitives
///
/// The type must provide `from_bits`, `to_bits`, `from_f32`, `to_f32`,
/// `is_nan`, `is_infinite`, and the `NAN` constant as inherent items.
macro_rules! derive_xfloat {
    ($name:ident) => {
        impl $name {
            /// Positive infinity (∞)
            pub const INFINITY: Self = Self::from_bits($crate::detail::EXPONENT_MASK);

            /// Negative infinity (−∞)
            pub const NEG_INFINITY: Self =
                Self::from_bits($crate::detail::SIGN_MASK | $crate::detail::EXPONENT_MASK);

            /// Positive zero (+0)
            pub const ZERO: Self = Self::from_bits(0);

            /// Negative zero (−0)
            pub const NEG_ZERO: Self = Self::from_bits($crate::detail::SIGN_MASK);

            /// One (1)
            pub const ONE: Self = Self::from_bits(0x3F80_0000);

            /// Largest finite value
            pub const MAX: Self = Self::from_bits(0x7F7F_FFFF & $crate::detail::PRECISION_MASK);

            /// Smallest finite value
            pub const MIN: Self = Self::from_bits(0xFF7F_FFFF & $crate::detail::PRECISION_MASK);

            /// Smallest positive normal value
            pub const MIN_POSITIVE: Self = Self::from_bits(0x0080_0000);

            /// Difference between 1 and the next larger representable value
            pub const EPSILON: Self = Self::from_bits((127 - $crate::detail::MANTISSA_BITS) << 23);

            /// Check if the value is ±0
            ///
            /// This is a structural test on the bit pattern and ignores the
            /// discarded bits.
            #[must_use]
            pub const fn is_zero(self) -> bool {
                $crate::detail::is_zero_bits(self.to_bits())
            }

            /// Check if the value is finite, i.e. neither infinite nor NaN
            #[must_use]
            pub const fn is_finite(self) -> bool {
                !self.is_nan() && !self.is_infinite()
            }

            /// Check if the sign bit is set
            #[must_use]
            pub const fn is_sign_negative(self) -> bool {
                self.to_bits() & $crate::detail::SIGN_MASK != 0
            }

            /// Check if the sign bit is clear
            #[must_use]
            pub const fn is_sign_positive(self) -> bool {
                !self.is_sign_negative()
            }

            /// Narrow any primitive through an `as` cast to [`f32`]
            #[must_use]
            pub fn from_primitive<T: num_traits::AsPrimitive<f32>>(x: T) -> Self {
                Self::from_f32(x.as_())
            }

            /// Add one in place and return the new value, like prefix `++`
            pub fn increment(&mut self) -> Self {
                *self += Self::ONE;
                *self
            }

            /// Subtract one in place and return the new value, like prefix `--`
            pub fn decrement(&mut self) -> Self {
                *self -= Self::ONE;
                *self
            }

            /// Sine in radians, computed in [`f32`]
            #[must_use]
            pub fn sin(self) -> Self {
                Self::from_f32(libm::sinf(self.to_f32()))
            }

            /// Cosine in radians, computed in [`f32`]
            #[must_use]
            pub fn cos(self) -> Self {
                Self::from_f32(libm::cosf(self.to_f32()))
            }
        }

        impl $crate::XFloat for $name {
            const NAN: Self = Self::NAN;
            const INFINITY: Self = Self::INFINITY;
            const NEG_INFINITY: Self = Self::NEG_INFINITY;
            const ZERO: Self = Self::ZERO;
            const NEG_ZERO: Self = Self::NEG_ZERO;
            const ONE: Self = Self::ONE;
            const MAX: Self = Self::MAX;
            const MIN: Self = Self::MIN;
            const MIN_POSITIVE: Self = Self::MIN_POSITIVE;
            const EPSILON: Self = Self::EPSILON;

            fn from_bits(v: u32) -> Self {
                Self::from_bits(v)
            }

            fn to_bits(self) -> u32 {
                self.to_bits()
            }

            fn from_f32(x: f32) -> Self {
                Self::from_f32(x)
            }

            fn to_f32(self) -> f32 {
                self.to_f32()
            }

            fn is_nan(self) -> bool {
                self.is_nan()
            }

            fn is_infinite(self) -> bool {
                self.is_infinite()
            }

            fn is_zero(self) -> bool {
                self.is_zero()
            }
        }

        impl PartialEq for $name {
            fn eq(&self, other: &Self) -> bool {
                self.to_f32() == other.to_f32()
            }
        }

        impl PartialOrd for $name {
            fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
                self.to_f32().partial_cmp(&other.to_f32())
            }
        }

        $crate::forward_binop!($name, Add, add, AddAssign, add_assign);
        $crate::forward_binop!($name, Sub, sub, SubAssign, sub_assign);
        $crate::forward_binop!($name, Mul, mul, MulAssign, mul_assign);
        $crate::forward_binop!($name, Div, div, DivAssign, div_assign);
        $crate::forward_binop!($name, Rem, rem, RemAssign, rem_assign);

        impl core::iter::Sum for $name {
            fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
                iter.fold(Self::ZERO, |a, b| a + b)
            }
        }

        impl<'a> core::iter::Sum<&'a $name> for $name {
            fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
                iter.copied().sum()
            }
        }

        impl core::iter::Product for $name {
            fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
                iter.fold(Self::ONE, |a, b| a * b)
            }
        }

        impl<'a> core::iter::Product<&'a $name> for $name {
            fn product<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
                iter.copied().product()
            }
        }

        impl From<f32> for $name {
            fn from(x: f32) -> Self {
                Self::from_f32(x)
            }
        }

        impl From<i8> for $name {
            fn from(x: i8) -> Self {
                Self::from_f32(x.into())
            }
        }

        impl From<u8> for $name {
            fn from(x: u8) -> Self {
                Self::from_f32(x.into())
            }
        }

        impl From<i16> for $name {
            fn from(x: i16) -> Self {
                Self::from_f32(x.into())
            }
        }

        impl From<u16> for $name {
            fn from(x: u16) -> Self {
                Self::from_f32(x.into())
            }
        }

        impl From<$name> for f32 {
            fn from(x: $name) -> Self {
                x.to_f32()
            }
        }

        impl From<$name> for f64 {
            fn from(x: $name) -> Self {
                x.to_f32().into()
            }
        }

        impl core::str::FromStr for $name {
            type Err = core::num::ParseFloatError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.parse::<f32>().map(Self::from_f32)
            }
        }

        impl core::fmt::Display for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                core::fmt::Display::fmt(&self.to_f32(), f)
            }
        }

        impl core::fmt::LowerExp for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                core::fmt::LowerExp::fmt(&self.to_f32(), f)
            }
        }

        impl core::fmt::UpperExp for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                core::fmt::UpperExp::fmt(&self.to_f32(), f)
            }
        }

        impl num_traits::Zero for $name {
            fn zero() -> Self {
                Self::ZERO
            }

            fn is_zero(&self) -> bool {
                $name::is_zero(*self)
            }
        }

        impl num_traits::One for $name {
            fn one() -> Self {
                Self::ONE
            }
        }

        impl num_traits::Num for $name {
            type FromStrRadixErr = num_traits::ParseFloatError;

            fn from_str_radix(s: &str, radix: u32) -> Result<Self, Self::FromStrRadixErr> {
                <f32 as num_traits::Num>::from_str_radix(s, radix).map(Self::from_f32)
            }
        }

        impl num_traits::ToPrimitive for $name {
            fn to_i64(&self) -> Option<i64> {
                num_traits::ToPrimitive::to_i64(&$name::to_f32(*self))
            }

            fn to_u64(&self) -> Option<u64> {
                num_traits::ToPrimitive::to_u64(&$name::to_f32(*self))
            }

            fn to_f32(&self) -> Option<f32> {
                Some($name::to_f32(*self))
            }

            fn to_f64(&self) -> Option<f64> {
                Some($name::to_f32(*self).into())
            }
        }

        impl num_traits::FromPrimitive for $name {
            #[allow(clippy::cast_precision_loss)]
            fn from_i64(n: i64) -> Option<Self> {
                Some(Self::from_f32(n as f32))
            }

            #[allow(clippy::cast_precision_loss)]
            fn from_u64(n: u64) -> Option<Self> {
                Some(Self::from_f32(n as f32))
            }

            fn from_f32(n: f32) -> Option<Self> {
                Some($name::from_f32(n))
            }

            #[allow(clippy::cast_possible_truncation)]
            fn from_f64(n: f64) -> Option<Self> {
                Some($name::from_f32(n as f32))
            }
        }

        impl num_traits::NumCast for $name {
            fn from<T: num_traits::ToPrimitive>(n: T) -> Option<Self> {
                num_traits::ToPrimitive::to_f32(&n).map(Self::from_f32)
            }
        }
    };
}

pub(crate) use forward_binop;
pub(crate) use derive_xfloat;

mod rounding;
mod truncating;

pub use rounding::RoundingXFloat32;
pub use truncating::XFloat32;

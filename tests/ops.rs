// This file is part of the xfloat32 project.
//
// Copyright (C) 2024-2025 Chen-Pang He <jdh8@skymizer.com>
//
// This Source Code Form is subject to the terms of the Mozilla
// Public License v. 2.0. If a copy of the MPL was not distributed
// with this file, You can obtain one at http://mozilla.org/MPL/2.0/.
#![cfg(feature = "arithmetic")]
#![allow(clippy::float_cmp)]

use num_traits::{FromPrimitive, Num, One, ToPrimitive, Zero};
use xfloat32::{RoundingXFloat32, XFloat32};

#[test]
fn test_construction() {
    assert_eq!(XFloat32::from(3u8).to_f32(), 3.0);
    assert_eq!(XFloat32::from(-7i16).to_f32(), -7.0);
    assert_eq!(XFloat32::from_primitive(2.5f64).to_f32(), 2.5);
    assert_eq!(XFloat32::from_primitive(1025i32).to_f32(), 1024.0);
    assert_eq!(XFloat32::from_primitive(1027u64).to_f32(), 1026.0);
    assert_eq!(<XFloat32 as num_traits::NumCast>::from(12u32).map(XFloat32::to_f32), Some(12.0));
    assert_eq!(XFloat32::from_f64(0.5).map(XFloat32::to_f32), Some(0.5));

    assert_eq!(RoundingXFloat32::from(1.0f32).to_f32(), 1.0);
    // Ties go to the even neighbor
    assert_eq!(RoundingXFloat32::from_primitive(1025i32).to_f32(), 1024.0);
    assert_eq!(RoundingXFloat32::from_primitive(1027u64).to_f32(), 1028.0);
    assert_eq!(RoundingXFloat32::from_i64(-2047).map(RoundingXFloat32::to_f32), Some(-2048.0));
}

#[test]
fn test_widening() {
    let x = XFloat32::from_f32(-2.75);
    assert_eq!(f32::from(x), -2.75);
    assert_eq!(f64::from(x), -2.75);
    assert_eq!(x.to_i32(), Some(-2));
    assert_eq!(x.to_u32(), None);
    assert_eq!(XFloat32::NAN.to_i32(), None);

    let y = RoundingXFloat32::from_f32(7.5);
    assert_eq!(y.to_u32(), Some(7));
    assert_eq!(ToPrimitive::to_f64(&y), Some(7.5));
}

#[test]
fn test_arithmetic() {
    let a = XFloat32::from_f32(1.5);
    let b = XFloat32::from_f32(0.25);
    assert_eq!((a + b).to_f32(), 1.75);
    assert_eq!((a - b).to_f32(), 1.25);
    assert_eq!((a * b).to_f32(), 0.375);
    assert_eq!((a / b).to_f32(), 6.0);
    assert_eq!((a % b).to_f32(), 0.0);
    assert_eq!((a + 1).to_f32(), 2.5);
    assert_eq!((2 * a).to_f32(), 3.0);

    // Each operation narrows its own result
    let third = XFloat32::ONE / XFloat32::from_f32(3.0);
    assert_eq!(third.to_bits() & 0x3FFF, 0);
    assert!(third.to_f32() < 1.0 / 3.0);
    let third = RoundingXFloat32::ONE / RoundingXFloat32::from_f32(3.0);
    assert_eq!(third.to_bits(), RoundingXFloat32::from_f32(1.0 / 3.0).to_bits());

    let mut c = RoundingXFloat32::from_f32(2.0);
    c += RoundingXFloat32::ONE;
    c *= 4;
    c -= RoundingXFloat32::from_f32(2.0);
    c /= 5;
    assert_eq!(c.to_f32(), 2.0);
}

#[test]
fn test_increment() {
    let mut x = XFloat32::ZERO;
    assert_eq!(x.increment().to_f32(), 1.0);
    assert_eq!(x.increment().to_f32(), 2.0);
    assert_eq!(x.decrement().to_f32(), 1.0);
    assert_eq!(x.to_f32(), 1.0);

    let mut y = RoundingXFloat32::from_f32(-1.0);
    assert!(y.increment().is_zero());
    assert_eq!(y.decrement().to_f32(), -1.0);
}

#[test]
fn test_negation() {
    let x = RoundingXFloat32::from_f32(1.5);
    assert_eq!((-x).to_bits(), x.to_bits() ^ 0x8000_0000);
    assert_eq!((-RoundingXFloat32::ZERO).to_bits(), 0x8000_0000);

    // The sign of a NaN flips without touching the payload
    let nan = RoundingXFloat32::from_bits(0x7F80_4000);
    assert_eq!((-nan).to_bits(), 0xFF80_4000);
    assert_eq!(nan.abs().to_bits(), 0x7F80_4000);
    assert_eq!((-nan).abs().to_bits(), 0x7F80_4000);

    assert_eq!((-XFloat32::from_f32(1.5)).to_f32(), -1.5);
    assert_eq!((-XFloat32::NAN).to_bits(), XFloat32::NAN.to_bits());
    assert_eq!(XFloat32::from_f32(-4.0).abs().to_f32(), 4.0);
    assert_eq!(XFloat32::NAN.abs().to_bits(), XFloat32::NAN.to_bits());
}

#[test]
fn test_math() {
    let x = XFloat32::from_f32(0.5);
    assert_eq!(x.sin().to_bits(), XFloat32::from_f32(libm::sinf(0.5)).to_bits());
    assert_eq!(x.cos().to_bits(), XFloat32::from_f32(libm::cosf(0.5)).to_bits());
    assert!(XFloat32::ZERO.sin().is_zero());
    assert_eq!(XFloat32::ZERO.cos().to_f32(), 1.0);

    let y = RoundingXFloat32::from_f32(0.5);
    assert_eq!(y.sin().to_bits(), RoundingXFloat32::from_f32(libm::sinf(0.5)).to_bits());
    assert_eq!(y.cos().to_bits(), RoundingXFloat32::from_f32(libm::cosf(0.5)).to_bits());
    assert!(RoundingXFloat32::INFINITY.sin().is_nan());
}

#[test]
fn test_comparison() {
    let a = XFloat32::from_f32(1.0);
    let b = XFloat32::from_f32(2.0);
    assert!(a < b && a <= b && b > a && b >= a && a != b);
    assert_eq!(XFloat32::ZERO, XFloat32::NEG_ZERO);
    assert!(XFloat32::NEG_INFINITY < XFloat32::MIN);

    let c = RoundingXFloat32::from_f32(1.0);
    let d = RoundingXFloat32::from_f32(1.0 + 1e-5);
    assert_eq!(c, d);
}

#[test]
fn test_format() {
    assert_eq!(XFloat32::from_f32(1.5).to_string(), "1.5");
    assert_eq!(XFloat32::NAN.to_string(), "NaN");
    assert_eq!(format!("{:.2}", XFloat32::ONE), "1.00");
    assert_eq!(format!("{:e}", RoundingXFloat32::from_f32(1024.0)), "1.024e3");
    assert_eq!(format!("{}", RoundingXFloat32::NEG_INFINITY), "-inf");
}

#[test]
fn test_parse() {
    assert_eq!("0.5".parse::<XFloat32>().map(XFloat32::to_f32), Ok(0.5));
    assert!("nan".parse::<XFloat32>().is_ok_and(|x| x.to_bits() == 0xFFC1_0000));
    assert!("x".parse::<RoundingXFloat32>().is_err());
    assert_eq!("1025".parse::<RoundingXFloat32>().map(RoundingXFloat32::to_f32), Ok(1024.0));
    assert_eq!(RoundingXFloat32::from_str_radix("1.5", 10).ok().map(RoundingXFloat32::to_f32), Some(1.5));
    assert!(XFloat32::from_str_radix("x", 10).is_err());
}

#[test]
fn test_num_traits() {
    assert!(<XFloat32 as Zero>::zero().is_zero());
    assert!(Zero::is_zero(&XFloat32::NEG_ZERO));
    assert_eq!(<RoundingXFloat32 as One>::one().to_f32(), 1.0);

    let xs = [1.0, 2.0, 3.0].map(XFloat32::from_f32);
    assert_eq!(xs.iter().sum::<XFloat32>().to_f32(), 6.0);
    assert_eq!(xs.into_iter().product::<XFloat32>().to_f32(), 6.0);
}

#[cfg(feature = "bytemuck")]
#[test]
fn test_bytemuck() {
    let bits = [0x3F80_0000_u32, 0x4000_0000];
    let xs: &[XFloat32] = bytemuck::cast_slice(&bits);
    assert_eq!(xs[1].to_bits(), 0x4000_0000);
    let ys: [RoundingXFloat32; 2] = bytemuck::cast(bits);
    assert_eq!(ys[0].to_bits(), 0x3F80_0000);
    let zero: RoundingXFloat32 = bytemuck::Zeroable::zeroed();
    assert!(zero.is_zero());
}

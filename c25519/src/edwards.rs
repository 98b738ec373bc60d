// -*- mode: rust; -*-
//
// This file is part of c25519.
// Copyright (c) 2016-2021 isis lovecruft
// Copyright (c) 2016-2020 Henry de Valence
// See LICENSE for licensing information.
//
// Authors:
// - isis agora lovecruft <isis@patternsinthevoid.net>
// - Henry de Valence <hdevalence@hdevalence.ca>

//! The twisted Edwards form of curve25519,
//! \\( -x\^2 + y\^2 = 1 + d x\^2 y\^2 \\), used by Ed25519.
//!
//! Points travel as 32-byte [`CompressedEdwardsY`] values: \\( y \\) in
//! little-endian with the parity of \\( x \\) in bit 255.
//! [`CompressedEdwardsY::decompress`] is the only way in from bytes, and it
//! refuses any \\( y \\) with no matching \\( x \\), so an [`EdwardsPoint`]
//! is always on the curve.
//!
//! The full group has order \\( 8\ell \\).  [`EdwardsPoint::is_small_order`]
//! tests for membership in the 8-torsion, [`EdwardsPoint::is_torsion_free`]
//! for membership in the prime-order subgroup.
//!
//! Multiplying by a [`Scalar`] with `*`, [`EdwardsPoint::mul_base`] and
//! the clamped variants runs in constant time with a signed radix-16
//! window.  [`EdwardsPoint::vartime_double_scalar_mul_basepoint`] is for
//! signature verification only: its running time depends on both scalars.
//! There are no precomputed basepoint tables; each multiplication builds
//! its table on the stack.

// Projective coordinates are upper case, affine ones lower case.
#![allow(non_snake_case)]

use core::array::TryFromSliceError;
use core::borrow::Borrow;
use core::fmt::Debug;
use core::iter::Sum;
use core::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use subtle::{Choice, ConditionallyNegatable, ConditionallySelectable, ConstantTimeEq};
#[cfg(feature = "zeroize")]
use zeroize::Zeroize;

use crate::constants;
use crate::field::FieldElement;
use crate::models::{CachedPoint, ProjectivePoint};
use crate::montgomery::MontgomeryPoint;
use crate::scalar::{clamp_integer, Scalar};
use crate::window::{LookupTable, NafLookupTable5};

/// A point in compressed form: \\( y \\) in little-endian, with the sign
/// of \\( x \\) in the top bit.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct CompressedEdwardsY(pub [u8; 32]);

impl CompressedEdwardsY {
    /// The encoding of the identity, \\( (0, 1) \\).
    pub const fn identity() -> CompressedEdwardsY {
        let mut bytes = [0u8; 32];
        bytes[0] = 1;
        CompressedEdwardsY(bytes)
    }

    /// View as bytes.
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Copy out the bytes.
    pub const fn to_bytes(&self) -> [u8; 32] {
        self.0
    }

    /// Build from a slice, which must be exactly 32 bytes long.
    pub fn from_slice(bytes: &[u8]) -> Result<CompressedEdwardsY, TryFromSliceError> {
        bytes.try_into().map(CompressedEdwardsY)
    }

    /// Recover the point, or `None` if no point has this \\( y \\).
    ///
    /// Solves \\( x\^2 = (y\^2 - 1)/(d y\^2 + 1) \\) and picks the root whose
    /// parity matches bit 255.  A \\( y \ge p \\) is reduced rather than
    /// rejected.
    pub fn decompress(&self) -> Option<EdwardsPoint> {
        let Y = FieldElement::from_bytes(&self.0);
        let Z = FieldElement::ONE;
        let YY = Y.square();
        let u = &YY - &Z;
        let v = &(&YY * &constants::EDWARDS_D) + &Z;

        let (is_square, mut X) = FieldElement::sqrt_ratio_i(&u, &v);
        if !bool::from(is_square) {
            return None;
        }
        // sqrt_ratio_i returned the non-negative root.
        X.conditional_negate(Choice::from(self.0[31] >> 7));

        Some(EdwardsPoint {
            X,
            Y,
            Z,
            T: &X * &Y,
        })
    }
}

impl Debug for CompressedEdwardsY {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "CompressedEdwardsY({:02x?})", self.0)
    }
}

impl Default for CompressedEdwardsY {
    fn default() -> CompressedEdwardsY {
        CompressedEdwardsY::identity()
    }
}

impl ConstantTimeEq for CompressedEdwardsY {
    fn ct_eq(&self, other: &CompressedEdwardsY) -> Choice {
        self.0.ct_eq(&other.0)
    }
}

impl TryFrom<&[u8]> for CompressedEdwardsY {
    type Error = TryFromSliceError;

    fn try_from(bytes: &[u8]) -> Result<CompressedEdwardsY, TryFromSliceError> {
        CompressedEdwardsY::from_slice(bytes)
    }
}

#[cfg(feature = "zeroize")]
impl Zeroize for CompressedEdwardsY {
    /// Reset to the identity encoding.
    fn zeroize(&mut self) {
        self.0.zeroize();
        self.0[0] = 1;
    }
}

/// A point in extended coordinates \\( (X : Y : Z : T) \\), with
/// \\( x = X/Z \\), \\( y = Y/Z \\) and \\( xy = T/Z \\).
#[derive(Copy, Clone, Debug)]
pub struct EdwardsPoint {
    pub(crate) X: FieldElement,
    pub(crate) Y: FieldElement,
    pub(crate) Z: FieldElement,
    pub(crate) T: FieldElement,
}

impl EdwardsPoint {
    /// The neutral element \\( (0, 1) \\).
    pub const fn identity() -> EdwardsPoint {
        EdwardsPoint {
            X: FieldElement::ZERO,
            Y: FieldElement::ONE,
            Z: FieldElement::ONE,
            T: FieldElement::ZERO,
        }
    }

    /// Whether this is the neutral element.
    pub fn is_identity(&self) -> bool {
        self.ct_eq(&EdwardsPoint::identity()).into()
    }

    /// Encode as 32 bytes.  Costs one field inversion.
    pub fn compress(&self) -> CompressedEdwardsY {
        let z_inv = self.Z.invert();
        let x = &self.X * &z_inv;
        let y = &self.Y * &z_inv;
        let mut bytes = y.to_bytes();
        bytes[31] ^= x.is_negative().unwrap_u8() << 7;
        CompressedEdwardsY(bytes)
    }

    /// The birationally equivalent Montgomery \\( u = (1 + y)/(1 - y) \\).
    ///
    /// The identity, whose \\( 1 - y \\) is zero, maps to \\( u = 0 \\).
    pub fn to_montgomery(&self) -> MontgomeryPoint {
        let num = &self.Z + &self.Y;
        let den = &self.Z - &self.Y;
        MontgomeryPoint((&num * &den.invert()).to_bytes())
    }

    /// Check the curve equation and the extended-coordinate relation
    /// \\( XY = ZT \\).
    pub(crate) fn is_on_curve(&self) -> bool {
        let XX = self.X.square();
        let YY = self.Y.square();
        let ZZ = self.Z.square();
        let lhs = &(&YY - &XX) * &ZZ;
        let rhs = &ZZ.square() + &(&constants::EDWARDS_D * &(&XX * &YY));
        lhs == rhs && &self.X * &self.Y == &self.Z * &self.T
    }

    pub(crate) const fn as_projective(&self) -> ProjectivePoint {
        ProjectivePoint {
            X: self.X,
            Y: self.Y,
            Z: self.Z,
        }
    }

    pub(crate) fn double(&self) -> EdwardsPoint {
        self.as_projective().double().to_extended()
    }

    /// \\( 2\^k P \\) for \\( k \geq 1 \\), staying in projective
    /// coordinates between doublings.
    pub(crate) fn mul_by_pow_2(&self, k: u32) -> EdwardsPoint {
        debug_assert!(k > 0);
        let mut acc = self.as_projective().double();
        for _ in 1..k {
            acc = acc.to_projective().double();
        }
        acc.to_extended()
    }

    /// \\( 8P \\).
    pub fn mul_by_cofactor(&self) -> EdwardsPoint {
        self.mul_by_pow_2(3)
    }

    /// Whether \\( 8P \\) is the identity, i.e. \\( P \\) lies in the
    /// 8-torsion subgroup.
    pub fn is_small_order(&self) -> bool {
        self.mul_by_cofactor().is_identity()
    }

    /// Whether \\( \ell P \\) is the identity, i.e. \\( P \\) has no
    /// torsion component.
    pub fn is_torsion_free(&self) -> bool {
        (self * constants::BASEPOINT_ORDER).is_identity()
    }

    /// \\( sB \\) for the Ed25519 basepoint \\( B \\), in constant time.
    pub fn mul_base(scalar: &Scalar) -> EdwardsPoint {
        &constants::ED25519_BASEPOINT_POINT * scalar
    }

    /// Multiply by `clamp_integer(bytes)`, in constant time.
    ///
    /// The clamped integer is used as is, without reduction modulo
    /// \\( \ell \\), so the torsion component of `self` is cleared.
    pub fn mul_clamped(self, bytes: [u8; 32]) -> EdwardsPoint {
        // Bit 255 of a clamped integer is clear, as the radix-16 recoding
        // requires.
        let clamped = Scalar {
            bytes: clamp_integer(bytes),
        };
        &self * &clamped
    }

    /// \\( B \\) times `clamp_integer(bytes)`, in constant time.
    pub fn mul_base_clamped(bytes: [u8; 32]) -> EdwardsPoint {
        constants::ED25519_BASEPOINT_POINT.mul_clamped(bytes)
    }

    /// \\( aA + bB \\) for the Ed25519 basepoint \\( B \\).
    ///
    /// Variable time in `a`, `A` and `b`: only for public inputs, as in
    /// signature verification.
    pub fn vartime_double_scalar_mul_basepoint(
        a: &Scalar,
        A: &EdwardsPoint,
        b: &Scalar,
    ) -> EdwardsPoint {
        let a_digits = a.non_adjacent_form();
        let b_digits = b.non_adjacent_form();

        let top = (0..256).rev().find(|&i| a_digits[i] != 0 || b_digits[i] != 0);
        let Some(top) = top else {
            return EdwardsPoint::identity();
        };

        let table_A = NafLookupTable5::from(A);
        let table_B = NafLookupTable5::from(&constants::ED25519_BASEPOINT_POINT);

        let mut acc = ProjectivePoint::IDENTITY;
        for i in (0..=top).rev() {
            let mut sum = acc.double();
            for (digit, table) in [(a_digits[i], &table_A), (b_digits[i], &table_B)] {
                let magnitude = digit.unsigned_abs() as usize;
                if digit > 0 {
                    sum = &sum.to_extended() + &table.select(magnitude);
                } else if digit < 0 {
                    sum = &sum.to_extended() - &table.select(magnitude);
                }
            }
            acc = sum.to_projective();
        }
        acc.to_extended()
    }
}

/// Constant-time \\( sP \\): 64 signed radix-16 digits, four doublings and
/// one table lookup per digit.
fn mul_constant_time(point: &EdwardsPoint, scalar: &Scalar) -> EdwardsPoint {
    let table = LookupTable::from(point);
    let digits = scalar.as_radix_16();

    let mut acc = EdwardsPoint::identity();
    for &digit in digits.iter().rev() {
        acc = acc.mul_by_pow_2(4);
        acc = (&acc + &table.select(digit)).to_extended();
    }
    acc
}

impl Default for EdwardsPoint {
    fn default() -> EdwardsPoint {
        EdwardsPoint::identity()
    }
}

impl ConstantTimeEq for EdwardsPoint {
    /// Compare \\( X\_1 Z\_2 = X\_2 Z\_1 \\) and \\( Y\_1 Z\_2 = Y\_2 Z\_1 \\),
    /// which is equality of the affine points.
    fn ct_eq(&self, other: &EdwardsPoint) -> Choice {
        (&self.X * &other.Z).ct_eq(&(&other.X * &self.Z))
            & (&self.Y * &other.Z).ct_eq(&(&other.Y * &self.Z))
    }
}

impl PartialEq for EdwardsPoint {
    fn eq(&self, other: &EdwardsPoint) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for EdwardsPoint {}

impl ConditionallySelectable for EdwardsPoint {
    fn conditional_select(a: &EdwardsPoint, b: &EdwardsPoint, choice: Choice) -> EdwardsPoint {
        EdwardsPoint {
            X: FieldElement::conditional_select(&a.X, &b.X, choice),
            Y: FieldElement::conditional_select(&a.Y, &b.Y, choice),
            Z: FieldElement::conditional_select(&a.Z, &b.Z, choice),
            T: FieldElement::conditional_select(&a.T, &b.T, choice),
        }
    }
}

#[cfg(feature = "zeroize")]
impl Zeroize for EdwardsPoint {
    /// Reset to the identity.
    fn zeroize(&mut self) {
        self.X.zeroize();
        self.Y = FieldElement::ONE;
        self.Z = FieldElement::ONE;
        self.T.zeroize();
    }
}

impl<'a, 'b> Add<&'b EdwardsPoint> for &'a EdwardsPoint {
    type Output = EdwardsPoint;
    fn add(self, other: &'b EdwardsPoint) -> EdwardsPoint {
        (self + &CachedPoint::from(other)).to_extended()
    }
}

impl<'a, 'b> Sub<&'b EdwardsPoint> for &'a EdwardsPoint {
    type Output = EdwardsPoint;
    fn sub(self, other: &'b EdwardsPoint) -> EdwardsPoint {
        (self - &CachedPoint::from(other)).to_extended()
    }
}

impl<'a> Neg for &'a EdwardsPoint {
    type Output = EdwardsPoint;
    fn neg(self) -> EdwardsPoint {
        EdwardsPoint {
            X: -&self.X,
            Y: self.Y,
            Z: self.Z,
            T: -&self.T,
        }
    }
}

impl Neg for EdwardsPoint {
    type Output = EdwardsPoint;
    fn neg(self) -> EdwardsPoint {
        -&self
    }
}

impl<'a, 'b> Mul<&'b Scalar> for &'a EdwardsPoint {
    type Output = EdwardsPoint;
    /// Constant-time variable-base multiplication.
    fn mul(self, scalar: &'b Scalar) -> EdwardsPoint {
        mul_constant_time(self, scalar)
    }
}

impl<'a, 'b> Mul<&'b EdwardsPoint> for &'a Scalar {
    type Output = EdwardsPoint;
    fn mul(self, point: &'b EdwardsPoint) -> EdwardsPoint {
        point * self
    }
}

forward_binop!(Add, add, EdwardsPoint, EdwardsPoint => EdwardsPoint);
forward_binop!(Sub, sub, EdwardsPoint, EdwardsPoint => EdwardsPoint);
forward_binop!(Mul, mul, EdwardsPoint, Scalar => EdwardsPoint);
forward_binop!(Mul, mul, Scalar, EdwardsPoint => EdwardsPoint);
forward_assign_op!(AddAssign, add_assign, add, EdwardsPoint, EdwardsPoint);
forward_assign_op!(SubAssign, sub_assign, sub, EdwardsPoint, EdwardsPoint);
forward_assign_op!(MulAssign, mul_assign, mul, EdwardsPoint, Scalar);

impl<T: Borrow<EdwardsPoint>> Sum<T> for EdwardsPoint {
    fn sum<I: Iterator<Item = T>>(iter: I) -> EdwardsPoint {
        iter.fold(EdwardsPoint::identity(), |acc, p| &acc + p.borrow())
    }
}

#[cfg(feature = "serde")]
impl Serialize for CompressedEdwardsY {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for CompressedEdwardsY {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<CompressedEdwardsY, D::Error> {
        <[u8; 32]>::deserialize(deserializer).map(CompressedEdwardsY)
    }
}

#[cfg(feature = "serde")]
impl Serialize for EdwardsPoint {
    /// Serialized in compressed form.
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.compress().serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for EdwardsPoint {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<EdwardsPoint, D::Error> {
        CompressedEdwardsY::deserialize(deserializer)?
            .decompress()
            .ok_or_else(|| serde::de::Error::custom("bytes do not decode to a curve point"))
    }
}

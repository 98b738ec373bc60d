// -*- mode: rust; -*-
//
// This file is part of c25519.
// Copyright (c) 2016-2021 isis lovecruft
// Copyright (c) 2016-2019 Henry de Valence
// See LICENSE for licensing information.
//
// Authors:
// - isis agora lovecruft <isis@patternsinthevoid.net>
// - Henry de Valence <hdevalence@hdevalence.ca>

//! The Montgomery form of curve25519, \\( v\^2 = u\^3 + 486662 u\^2 + u \\),
//! used by X25519.
//!
//! A [`MontgomeryPoint`] is only a \\( u \\)-coordinate.  Every
//! \\( u \in \mathbb F\_p \\) belongs either to the curve or to its quadratic
//! twist, and the ladder works the same on both, so no decoding step can
//! fail.  [`MontgomeryPoint::to_edwards`] is the exception: it needs a real
//! curve point and returns `None` for the twist.
//!
//! Multiplication is the Montgomery ladder over raw integer bits.  Clamped
//! X25519 secrets are therefore used as given, not reduced modulo
//! \\( \ell \\).

use core::hash::{Hash, Hasher};
use core::ops::{Mul, MulAssign};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};
#[cfg(feature = "zeroize")]
use zeroize::Zeroize;

use crate::constants;
use crate::edwards::{CompressedEdwardsY, EdwardsPoint};
use crate::field::FieldElement;
use crate::scalar::{clamp_integer, Scalar};

/// The \\( u \\)-coordinate of a point on the curve or its twist, as 32
/// little-endian bytes.
#[derive(Copy, Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MontgomeryPoint(pub [u8; 32]);

impl MontgomeryPoint {
    /// View as bytes.
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Copy out the bytes.
    pub const fn to_bytes(&self) -> [u8; 32] {
        self.0
    }

    /// \\( u(sB) \\) for the Ed25519 basepoint, computed on the Edwards side.
    pub fn mul_base(scalar: &Scalar) -> MontgomeryPoint {
        EdwardsPoint::mul_base(scalar).to_montgomery()
    }

    /// \\( u \\) times `clamp_integer(bytes)`: the X25519 function.
    pub fn mul_clamped(self, bytes: [u8; 32]) -> MontgomeryPoint {
        let clamped = clamp_integer(bytes);
        // Bit 255 of a clamped integer is always clear.
        let bits = (0..255).rev().map(|i| (clamped[i >> 3] >> (i & 7)) & 1 == 1);
        self.mul_bits_be(bits)
    }

    /// The X25519 public key for `bytes`: the basepoint \\( u = 9 \\) times
    /// `clamp_integer(bytes)`.
    pub fn mul_base_clamped(bytes: [u8; 32]) -> MontgomeryPoint {
        EdwardsPoint::mul_base_clamped(bytes).to_montgomery()
    }

    /// Run the ladder over `bits`, most significant first.
    ///
    /// Constant time in the bit values; the number of bits is public.
    pub fn mul_bits_be(&self, bits: impl Iterator<Item = bool>) -> MontgomeryPoint {
        let u = FieldElement::from_bytes(&self.0);

        // (x2 : z2) holds kP and (x3 : z3) holds (k + 1)P.
        let (mut x2, mut z2) = (FieldElement::ONE, FieldElement::ZERO);
        let (mut x3, mut z3) = (u, FieldElement::ONE);
        let mut swapped = Choice::from(0);

        for bit in bits {
            let bit = Choice::from(bit as u8);
            let swap = swapped ^ bit;
            FieldElement::conditional_swap(&mut x2, &mut x3, swap);
            FieldElement::conditional_swap(&mut z2, &mut z3, swap);
            swapped = bit;

            ladder_step(&u, &mut x2, &mut z2, &mut x3, &mut z3);
        }
        FieldElement::conditional_swap(&mut x2, &mut x3, swapped);
        FieldElement::conditional_swap(&mut z2, &mut z3, swapped);

        MontgomeryPoint((&x2 * &z2.invert()).to_bytes())
    }

    /// Lift to the Edwards curve, choosing the \\( x \\) whose parity is
    /// `sign & 1`, through \\( y = (u - 1)/(u + 1) \\).
    ///
    /// Returns `None` when \\( u = -1 \\), which has no image, and when
    /// \\( u \\) lies on the twist.
    pub fn to_edwards(&self, sign: u8) -> Option<EdwardsPoint> {
        let u = FieldElement::from_bytes(&self.0);
        let u_plus_one = &u + &FieldElement::ONE;
        if bool::from(u_plus_one.is_zero()) {
            return None;
        }
        let y = &(&u - &FieldElement::ONE) * &u_plus_one.invert();

        let mut bytes = y.to_bytes();
        bytes[31] ^= sign << 7;
        CompressedEdwardsY(bytes).decompress()
    }
}

/// One combined doubling and differential addition, RFC 7748 section 5:
/// \\( (x\_2, z\_2) \gets 2 (x\_2, z\_2) \\) and
/// \\( (x\_3, z\_3) \gets (x\_2, z\_2) + (x\_3, z\_3) \\), where the
/// difference of the two inputs is \\( u \\).
fn ladder_step(
    u: &FieldElement,
    x2: &mut FieldElement,
    z2: &mut FieldElement,
    x3: &mut FieldElement,
    z3: &mut FieldElement,
) {
    let a = &*x2 + &*z2;
    let b = &*x2 - &*z2;
    let c = &*x3 + &*z3;
    let d = &*x3 - &*z3;
    let aa = a.square();
    let bb = b.square();
    let e = &aa - &bb;
    let da = &d * &a;
    let cb = &c * &b;

    *x3 = (&da + &cb).square();
    *z3 = u * &(&da - &cb).square();
    *x2 = &aa * &bb;
    // AA + 121665 E = BB + 121666 E.
    *z2 = &e * &(&bb + &(&constants::A24 * &e));
}

impl ConstantTimeEq for MontgomeryPoint {
    /// Compares the field elements, so unreduced encodings of the same
    /// \\( u \\) are equal.
    fn ct_eq(&self, other: &MontgomeryPoint) -> Choice {
        FieldElement::from_bytes(&self.0).ct_eq(&FieldElement::from_bytes(&other.0))
    }
}

impl PartialEq for MontgomeryPoint {
    fn eq(&self, other: &MontgomeryPoint) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for MontgomeryPoint {}

impl Hash for MontgomeryPoint {
    /// Hashes the canonical encoding, agreeing with `Eq`.
    fn hash<H: Hasher>(&self, state: &mut H) {
        FieldElement::from_bytes(&self.0).to_bytes().hash(state);
    }
}

#[cfg(feature = "zeroize")]
impl Zeroize for MontgomeryPoint {
    fn zeroize(&mut self) {
        self.0.zeroize();
    }
}

impl<'a, 'b> Mul<&'b Scalar> for &'a MontgomeryPoint {
    type Output = MontgomeryPoint;
    fn mul(self, scalar: &'b Scalar) -> MontgomeryPoint {
        self.mul_bits_be(scalar.bits_le().rev())
    }
}

impl<'a, 'b> Mul<&'b MontgomeryPoint> for &'a Scalar {
    type Output = MontgomeryPoint;
    fn mul(self, point: &'b MontgomeryPoint) -> MontgomeryPoint {
        point * self
    }
}

forward_binop!(Mul, mul, MontgomeryPoint, Scalar => MontgomeryPoint);
forward_binop!(Mul, mul, Scalar, MontgomeryPoint => MontgomeryPoint);
forward_assign_op!(MulAssign, mul_assign, mul, MontgomeryPoint, Scalar);

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

//! Arithmetic in \\( \mathbb F\_p \\), \\( p = 2\^{255} - 19 \\).
//!
//! An element is five unsigned 64-bit limbs in radix \\( 2\^{51} \\):
//! \\( x = \sum\_i x\_i 2\^{51 i} \\).  Limbs are allowed to drift a few
//! bits above 51 between operations; multiplication accepts limbs up to
//! \\( 2\^{54} \\) and every product, difference and negation comes back
//! with limbs below \\( 2\^{52} \\).  Only [`FieldElement::to_bytes`]
//! produces the unique representative in \\( [0, p) \\).
//!
//! Nothing in this module branches on, or indexes memory by, the value of
//! an element.

use core::fmt::Debug;
use core::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use subtle::{Choice, ConditionallyNegatable, ConditionallySelectable, ConstantTimeEq};

#[cfg(feature = "zeroize")]
use zeroize::Zeroize;

use crate::constants;

const LOW_51_BITS: u64 = (1 << 51) - 1;

/// Limbs of \\( 16p \\), added before a subtraction so no limb underflows.
const SIXTEEN_P: [u64; 5] = [
    16 * (LOW_51_BITS - 18),
    16 * LOW_51_BITS,
    16 * LOW_51_BITS,
    16 * LOW_51_BITS,
    16 * LOW_51_BITS,
];

/// An element of \\( \mathbb F\_p \\).
#[derive(Copy, Clone)]
pub(crate) struct FieldElement(pub(crate) [u64; 5]);

impl Debug for FieldElement {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "FieldElement({:02x?})", self.to_bytes())
    }
}

#[cfg(feature = "zeroize")]
impl Zeroize for FieldElement {
    fn zeroize(&mut self) {
        self.0.zeroize();
    }
}

impl FieldElement {
    pub(crate) const ZERO: FieldElement = FieldElement([0; 5]);
    pub(crate) const ONE: FieldElement = FieldElement([1, 0, 0, 0, 0]);
    pub(crate) const MINUS_ONE: FieldElement = FieldElement([
        LOW_51_BITS - 19,
        LOW_51_BITS,
        LOW_51_BITS,
        LOW_51_BITS,
        LOW_51_BITS,
    ]);

    /// Parse 32 little-endian bytes.  Bit 255 is ignored and values in
    /// \\( [p, 2\^{255}) \\) are accepted; they reduce on the next operation.
    pub(crate) const fn from_bytes(bytes: &[u8; 32]) -> FieldElement {
        let mut words = [0u64; 4];
        let mut i = 0;
        while i < 32 {
            words[i / 8] |= (bytes[i] as u64) << (8 * (i % 8));
            i += 1;
        }
        FieldElement([
            words[0] & LOW_51_BITS,
            ((words[0] >> 51) | (words[1] << 13)) & LOW_51_BITS,
            ((words[1] >> 38) | (words[2] << 26)) & LOW_51_BITS,
            ((words[2] >> 25) | (words[3] << 39)) & LOW_51_BITS,
            (words[3] >> 12) & LOW_51_BITS,
        ])
    }

    /// The canonical encoding: 32 little-endian bytes of the representative
    /// in \\( [0, p) \\), with bit 255 clear.
    pub(crate) fn to_bytes(self) -> [u8; 32] {
        let mut limbs = FieldElement::carry(self.0).0;

        // Every limb is now below 2^52, so the value is below 2p and
        // (value + 19) >> 255 is 1 exactly when value >= p.
        let mut q = (limbs[0] + 19) >> 51;
        for limb in &limbs[1..] {
            q = (limb + q) >> 51;
        }

        // Subtract qp by adding 19q and dropping bit 255.
        limbs[0] += 19 * q;
        for i in 0..4 {
            limbs[i + 1] += limbs[i] >> 51;
            limbs[i] &= LOW_51_BITS;
        }
        limbs[4] &= LOW_51_BITS;

        let mut out = [0u8; 32];
        let mut acc: u64 = 0;
        let mut acc_bits = 0;
        let mut pos = 0;
        for limb in limbs {
            acc |= limb << acc_bits;
            acc_bits += 51;
            while acc_bits >= 8 {
                out[pos] = acc as u8;
                acc >>= 8;
                acc_bits -= 8;
                pos += 1;
            }
        }
        out[31] = acc as u8;
        out
    }

    /// Propagate the bits above 51 of each limb into the next limb, folding
    /// the overflow of the top limb back into the bottom one times 19.
    #[inline(always)]
    fn carry(mut limbs: [u64; 5]) -> FieldElement {
        let overflow: [u64; 5] = core::array::from_fn(|i| limbs[i] >> 51);
        for limb in limbs.iter_mut() {
            *limb &= LOW_51_BITS;
        }
        limbs[0] += 19 * overflow[4];
        for i in 1..5 {
            limbs[i] += overflow[i - 1];
        }
        FieldElement(limbs)
    }

    /// Reduce a 5-coefficient product of limbs below \\( 2\^{54} \\): each
    /// coefficient is below \\( 2\^{115} \\) and the top one, which has no
    /// wrapped terms, is below \\( 5 \cdot 2\^{108} \\).
    #[inline(always)]
    fn carry_wide(wide: [u128; 5]) -> FieldElement {
        let mut limbs = [0u64; 5];
        let mut carry: u128 = 0;
        for (limb, coeff) in limbs.iter_mut().zip(wide) {
            let v = coeff + carry;
            *limb = (v as u64) & LOW_51_BITS;
            carry = v >> 51;
        }
        // carry < 2^59.4 so 19 * carry still fits in a u64.
        limbs[0] += 19 * (carry as u64);
        limbs[1] += limbs[0] >> 51;
        limbs[0] &= LOW_51_BITS;
        FieldElement(limbs)
    }

    /// Whether the canonical encoding is odd, which is how the sign of
    /// \\( x \\) is recorded in a compressed point.
    pub(crate) fn is_negative(&self) -> Choice {
        Choice::from(self.to_bytes()[0] & 1)
    }

    pub(crate) fn is_zero(&self) -> Choice {
        self.to_bytes().ct_eq(&[0u8; 32])
    }

    pub(crate) fn square(&self) -> FieldElement {
        self * self
    }

    /// \\( 2 x\^2 \\).
    pub(crate) fn square2(&self) -> FieldElement {
        let sq = self.square();
        FieldElement::carry(core::array::from_fn(|i| sq.0[i] << 1))
    }

    /// \\( x\^{2\^k} \\) for \\( k \geq 1 \\).
    pub(crate) fn pow2k(&self, k: u32) -> FieldElement {
        debug_assert!(k > 0);
        let mut acc = self.square();
        for _ in 1..k {
            acc = acc.square();
        }
        acc
    }

    /// Returns \\( (x\^{2\^{250} - 1}, x\^{11}) \\), the shared prefix of
    /// both exponentiations below.
    fn pow22501(&self) -> (FieldElement, FieldElement) {
        let x2 = self.square();
        let x9 = &x2.pow2k(2) * self;
        let x11 = &x9 * &x2;
        let e5 = &x11.square() * &x9;
        let e10 = &e5.pow2k(5) * &e5;
        let e20 = &e10.pow2k(10) * &e10;
        let e40 = &e20.pow2k(20) * &e20;
        let e50 = &e40.pow2k(10) * &e10;
        let e100 = &e50.pow2k(50) * &e50;
        let e200 = &e100.pow2k(100) * &e100;
        let e250 = &e200.pow2k(50) * &e50;
        (e250, x11)
    }

    /// \\( x\^{p-2} \\), which is \\( 1/x \\) for nonzero \\( x \\) and
    /// zero for zero.
    pub(crate) fn invert(&self) -> FieldElement {
        // p - 2 = (2^250 - 1) * 2^5 + 11
        let (e250, x11) = self.pow22501();
        &e250.pow2k(5) * &x11
    }

    /// \\( x\^{(p-5)/8} \\).
    fn pow_p58(&self) -> FieldElement {
        // (p - 5) / 8 = (2^250 - 1) * 2^2 + 1
        let (e250, _) = self.pow22501();
        &e250.pow2k(2) * self
    }

    /// Compute a square root of \\( u/v \\) without inverting \\( v \\).
    ///
    /// | input                              | result                          |
    /// |------------------------------------|---------------------------------|
    /// | \\( u = 0 \\)                      | `(1, 0)`                        |
    /// | \\( v = 0 \\), \\( u \neq 0 \\)    | `(0, 0)`                        |
    /// | \\( u/v \\) square                 | `(1, +sqrt(u/v))`               |
    /// | \\( u/v \\) nonsquare              | `(0, +sqrt(i u/v))`             |
    ///
    /// The returned root is always the non-negative one.
    pub(crate) fn sqrt_ratio_i(u: &FieldElement, v: &FieldElement) -> (Choice, FieldElement) {
        // r = u v^3 (u v^7)^((p-5)/8) satisfies v r^2 = ±u or ±iu.
        let v3 = &v.square() * v;
        let v7 = &v3.square() * v;
        let mut r = &(u * &v3) * &(u * &v7).pow_p58();
        let check = v * &r.square();

        let minus_u = -u;
        let minus_u_i = &minus_u * &constants::SQRT_M1;
        let is_root = check.ct_eq(u);
        let is_minus_root = check.ct_eq(&minus_u);
        let is_minus_i_root = check.ct_eq(&minus_u_i);

        let rotated = &r * &constants::SQRT_M1;
        r.conditional_assign(&rotated, is_minus_root | is_minus_i_root);
        let r_is_negative = r.is_negative();
        r.conditional_negate(r_is_negative);

        (is_root | is_minus_root, r)
    }
}

impl ConstantTimeEq for FieldElement {
    fn ct_eq(&self, other: &FieldElement) -> Choice {
        self.to_bytes().ct_eq(&other.to_bytes())
    }
}

impl PartialEq for FieldElement {
    fn eq(&self, other: &FieldElement) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for FieldElement {}

impl ConditionallySelectable for FieldElement {
    fn conditional_select(a: &FieldElement, b: &FieldElement, choice: Choice) -> FieldElement {
        FieldElement(core::array::from_fn(|i| {
            u64::conditional_select(&a.0[i], &b.0[i], choice)
        }))
    }
}

impl<'a, 'b> Add<&'b FieldElement> for &'a FieldElement {
    type Output = FieldElement;
    fn add(self, other: &'b FieldElement) -> FieldElement {
        FieldElement(core::array::from_fn(|i| self.0[i] + other.0[i]))
    }
}

impl<'a, 'b> Sub<&'b FieldElement> for &'a FieldElement {
    type Output = FieldElement;
    fn sub(self, other: &'b FieldElement) -> FieldElement {
        FieldElement::carry(core::array::from_fn(|i| {
            (self.0[i] + SIXTEEN_P[i]) - other.0[i]
        }))
    }
}

impl<'a, 'b> Mul<&'b FieldElement> for &'a FieldElement {
    type Output = FieldElement;
    fn mul(self, other: &'b FieldElement) -> FieldElement {
        let (a, b) = (&self.0, &other.0);
        // Terms landing at 2^(51 * (i + j)) with i + j >= 5 wrap around
        // to position i + j - 5, picking up a factor 2^255 = 19.
        let b19: [u64; 5] = core::array::from_fn(|j| 19 * b[j]);

        let mut wide = [0u128; 5];
        for i in 0..5 {
            for j in 0..5 {
                let bj = if i + j < 5 { b[j] } else { b19[j] };
                wide[(i + j) % 5] += (a[i] as u128) * (bj as u128);
            }
        }
        FieldElement::carry_wide(wide)
    }
}

impl<'a> Neg for &'a FieldElement {
    type Output = FieldElement;
    fn neg(self) -> FieldElement {
        &FieldElement::ZERO - self
    }
}

impl Neg for FieldElement {
    type Output = FieldElement;
    fn neg(self) -> FieldElement {
        -&self
    }
}

forward_binop!(Add, add, FieldElement, FieldElement => FieldElement);
forward_binop!(Sub, sub, FieldElement, FieldElement => FieldElement);
forward_binop!(Mul, mul, FieldElement, FieldElement => FieldElement);
forward_assign_op!(AddAssign, add_assign, add, FieldElement, FieldElement);
forward_assign_op!(SubAssign, sub_assign, sub, FieldElement, FieldElement);
forward_assign_op!(MulAssign, mul_assign, mul, FieldElement, FieldElement);

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

//! Integers modulo the order of the Ed25519 basepoint,
//! \\( \ell = 2\^{252} + 27742317777372353535851937790883648493 \\).
//!
//! Every secret key, nonce and signature component is a [`Scalar`].  A
//! `Scalar` is always reduced, and the three byte constructors differ only
//! in what they do with an out-of-range input:
//!
//! * [`Scalar::from_bytes_mod_order`] reduces a 256-bit integer;
//! * [`Scalar::from_bytes_mod_order_wide`] reduces a 512-bit integer, which
//!   is how SHA-512 output becomes a nonce or a challenge;
//! * [`Scalar::from_canonical_bytes`] refuses anything \\( \geq \ell \\), which
//!   is how a verifier rejects a malleable `s`.
//!
//! Clamped integers are not reduced and therefore are not `Scalar`s; see
//! [`clamp_integer`].
//!
//! Arithmetic unpacks into five 52-bit limbs and multiplies with Montgomery
//! reduction, \\( R = 2\^{260} \\).  No operation branches on a scalar value.

use core::borrow::Borrow;
use core::fmt::Debug;
use core::hash::{Hash, Hasher};
use core::iter::Sum;
use core::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

#[cfg(feature = "digest")]
use digest::{generic_array::typenum::U64, Digest};
#[cfg(feature = "rand_core")]
use rand_core::CryptoRngCore;
#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq, CtOption};
#[cfg(feature = "zeroize")]
use zeroize::Zeroize;

/// An integer modulo \\( \ell \\), stored as its 32-byte little-endian
/// encoding.
#[derive(Copy, Clone)]
pub struct Scalar {
    /// Always below \\( \ell \\), except for the crate-private
    /// `BASEPOINT_ORDER`, which is only ever used as a multiplier.
    pub(crate) bytes: [u8; 32],
}

impl Scalar {
    /// Zero.
    pub const ZERO: Scalar = Scalar { bytes: [0; 32] };

    /// One.
    pub const ONE: Scalar = Scalar {
        bytes: {
            let mut one = [0u8; 32];
            one[0] = 1;
            one
        },
    };

    /// Reduce a 256-bit little-endian integer modulo \\( \ell \\).
    pub fn from_bytes_mod_order(bytes: [u8; 32]) -> Scalar {
        let mut wide = [0u8; 64];
        wide[..32].copy_from_slice(&bytes);
        Scalar::from_bytes_mod_order_wide(&wide)
    }

    /// Reduce a 512-bit little-endian integer modulo \\( \ell \\).
    pub fn from_bytes_mod_order_wide(input: &[u8; 64]) -> Scalar {
        UnpackedScalar::from_bytes_wide(input).pack()
    }

    /// Accept `bytes` only if they encode an integer below \\( \ell \\).
    pub fn from_canonical_bytes(bytes: [u8; 32]) -> CtOption<Scalar> {
        let candidate = Scalar { bytes };
        let reduced = Scalar::from_bytes_mod_order(bytes);
        CtOption::new(candidate, candidate.ct_eq(&reduced))
    }

    /// A uniformly random scalar, drawn as 64 bytes and reduced so the
    /// bias is negligible.
    #[cfg(feature = "rand_core")]
    pub fn random<R: CryptoRngCore + ?Sized>(rng: &mut R) -> Scalar {
        let mut wide = [0u8; 64];
        rng.fill_bytes(&mut wide);
        Scalar::from_bytes_mod_order_wide(&wide)
    }

    /// Finalize a 64-byte-output hash and reduce it modulo \\( \ell \\).
    ///
    /// Signing feeds `R || A || M` into the hash incrementally and then
    /// calls this.
    #[cfg(feature = "digest")]
    pub fn from_hash<D>(hash: D) -> Scalar
    where
        D: Digest<OutputSize = U64>,
    {
        let mut output = [0u8; 64];
        output.copy_from_slice(&hash.finalize());
        Scalar::from_bytes_mod_order_wide(&output)
    }

    /// The little-endian encoding.
    pub const fn to_bytes(&self) -> [u8; 32] {
        self.bytes
    }

    /// A view of the little-endian encoding.
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.bytes
    }

    /// The 256 bits of the encoding, least significant first.
    pub(crate) fn bits_le(&self) -> impl DoubleEndedIterator<Item = bool> + '_ {
        (0..256).map(move |i| (self.bytes[i >> 3] >> (i & 7)) & 1 == 1)
    }

    /// Signed radix-16 digits \\( d\_i \in [-8, 8) \\) with
    /// \\( \sum d\_i 16\^i \\) equal to this scalar.
    ///
    /// Requires the top bit to be clear, so the last digit stays in range.
    pub(crate) fn as_radix_16(&self) -> [i8; 64] {
        debug_assert!(self.bytes[31] <= 127);
        let mut digits = [0i8; 64];
        for (i, byte) in self.bytes.iter().enumerate() {
            digits[2 * i] = (byte & 15) as i8;
            digits[2 * i + 1] = (byte >> 4) as i8;
        }
        // Shift each digit from [0, 16) into [-8, 8), pushing the excess up.
        for i in 0..63 {
            let carry = (digits[i] + 8) >> 4;
            digits[i] -= carry << 4;
            digits[i + 1] += carry;
        }
        digits
    }

    /// Sliding-window signed digits: every nonzero digit is odd with
    /// absolute value at most 15, and \\( \sum d\_i 2\^i \\) equals this
    /// scalar.
    ///
    /// Runs in variable time; only call this on public scalars.
    pub(crate) fn non_adjacent_form(&self) -> [i8; 256] {
        let mut digits = [0i8; 256];
        for (i, bit) in self.bits_le().enumerate() {
            digits[i] = bit as i8;
        }

        for i in 0..256 {
            if digits[i] == 0 {
                continue;
            }
            for shift in 1..6 {
                if i + shift >= 256 {
                    break;
                }
                let next = digits[i + shift];
                if next == 0 {
                    continue;
                }
                let folded = next << shift;
                if digits[i] + folded <= 15 {
                    digits[i] += folded;
                    digits[i + shift] = 0;
                } else if digits[i] - folded >= -15 {
                    digits[i] -= folded;
                    // Add 2^(i + shift) back in by rippling a carry upwards.
                    for digit in digits[i + shift..].iter_mut() {
                        if *digit == 0 {
                            *digit = 1;
                            break;
                        }
                        *digit = 0;
                    }
                } else {
                    break;
                }
            }
        }
        digits
    }

    fn unpack(&self) -> UnpackedScalar {
        UnpackedScalar::from_bytes(&self.bytes)
    }
}

impl Debug for Scalar {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Scalar({:02x?})", self.bytes)
    }
}

impl ConstantTimeEq for Scalar {
    fn ct_eq(&self, other: &Scalar) -> Choice {
        self.bytes.ct_eq(&other.bytes)
    }
}

impl PartialEq for Scalar {
    fn eq(&self, other: &Scalar) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for Scalar {}

impl Hash for Scalar {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.bytes.hash(state);
    }
}

impl ConditionallySelectable for Scalar {
    fn conditional_select(a: &Scalar, b: &Scalar, choice: Choice) -> Scalar {
        Scalar {
            bytes: core::array::from_fn(|i| u8::conditional_select(&a.bytes[i], &b.bytes[i], choice)),
        }
    }
}

impl Default for Scalar {
    fn default() -> Scalar {
        Scalar::ZERO
    }
}

#[cfg(feature = "zeroize")]
impl Zeroize for Scalar {
    fn zeroize(&mut self) {
        self.bytes.zeroize();
    }
}

impl From<u8> for Scalar {
    fn from(x: u8) -> Scalar {
        Scalar::from(x as u64)
    }
}

impl From<u64> for Scalar {
    fn from(x: u64) -> Scalar {
        let mut bytes = [0u8; 32];
        bytes[..8].copy_from_slice(&x.to_le_bytes());
        Scalar { bytes }
    }
}

impl<'a, 'b> Add<&'b Scalar> for &'a Scalar {
    type Output = Scalar;
    fn add(self, other: &'b Scalar) -> Scalar {
        UnpackedScalar::add(&self.unpack(), &other.unpack()).pack()
    }
}

impl<'a, 'b> Sub<&'b Scalar> for &'a Scalar {
    type Output = Scalar;
    fn sub(self, other: &'b Scalar) -> Scalar {
        UnpackedScalar::sub(&self.unpack(), &other.unpack()).pack()
    }
}

impl<'a, 'b> Mul<&'b Scalar> for &'a Scalar {
    type Output = Scalar;
    fn mul(self, other: &'b Scalar) -> Scalar {
        UnpackedScalar::mul(&self.unpack(), &other.unpack()).pack()
    }
}

impl<'a> Neg for &'a Scalar {
    type Output = Scalar;
    fn neg(self) -> Scalar {
        &Scalar::ZERO - self
    }
}

impl Neg for Scalar {
    type Output = Scalar;
    fn neg(self) -> Scalar {
        -&self
    }
}

forward_binop!(Add, add, Scalar, Scalar => Scalar);
forward_binop!(Sub, sub, Scalar, Scalar => Scalar);
forward_binop!(Mul, mul, Scalar, Scalar => Scalar);
forward_assign_op!(AddAssign, add_assign, add, Scalar, Scalar);
forward_assign_op!(SubAssign, sub_assign, sub, Scalar, Scalar);
forward_assign_op!(MulAssign, mul_assign, mul, Scalar, Scalar);

impl<T: Borrow<Scalar>> Sum<T> for Scalar {
    fn sum<I: Iterator<Item = T>>(iter: I) -> Scalar {
        iter.fold(Scalar::ZERO, |acc, x| &acc + x.borrow())
    }
}

#[cfg(feature = "serde")]
impl Serialize for Scalar {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.bytes.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for Scalar {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Scalar, D::Error> {
        let bytes = <[u8; 32]>::deserialize(deserializer)?;
        Option::from(Scalar::from_canonical_bytes(bytes))
            .ok_or_else(|| serde::de::Error::custom("scalar is not reduced modulo the group order"))
    }
}

/// Clamp 32 bytes the way Ed25519 and X25519 do: clear bits 0, 1, 2 and
/// 255, set bit 254.
///
/// The result is \\( 2\^{254} + 8k \\) for some \\( 0 \le k < 2\^{251} \\), a
/// multiple of the cofactor with a fixed bit length.  It is generally not
/// reduced modulo \\( \ell \\), so use it through
/// [`EdwardsPoint::mul_clamped`](crate::EdwardsPoint::mul_clamped) and
/// [`MontgomeryPoint::mul_clamped`](crate::MontgomeryPoint::mul_clamped)
/// rather than as a [`Scalar`].
#[must_use]
pub const fn clamp_integer(mut bytes: [u8; 32]) -> [u8; 32] {
    bytes[0] &= 0b1111_1000;
    bytes[31] &= 0b0111_1111;
    bytes[31] |= 0b0100_0000;
    bytes
}

const LOW_52_BITS: u64 = (1 << 52) - 1;

/// \\( \ell \\) in 52-bit limbs.
const L: UnpackedScalar = UnpackedScalar([0x2631a5cf5d3ed, 0xdea2f79cd6581, 0x14def9, 0, 0x100000000000]);

/// \\( -\ell\^{-1} \bmod 2\^{52} \\).
const L_FACTOR: u64 = 0x51da312547e1b;

/// \\( R = 2\^{260} \bmod \ell \\).
const R: UnpackedScalar = UnpackedScalar([
    0xf48bd6721e6ed, 0x3bab5ac67e45a, 0xfffffeb35e51b, 0xfffffffffffff, 0xfffffffffff,
]);

/// \\( R\^2 \bmod \ell \\).
const RR: UnpackedScalar = UnpackedScalar([
    0x9d265e952d13b, 0xd63c715bea69f, 0x5be65cb687604, 0x3dceec73d217f, 0x9411b7c309a,
]);

/// A scalar as five 52-bit limbs.
#[derive(Copy, Clone, Debug)]
struct UnpackedScalar([u64; 5]);

impl UnpackedScalar {
    /// The 52 bits of `words` starting at bit `start`.
    fn bits_52(words: &[u64], start: usize) -> u64 {
        let (index, shift) = (start / 64, start % 64);
        let mut v = words[index] >> shift;
        if shift > 12 && index + 1 < words.len() {
            v |= words[index + 1] << (64 - shift);
        }
        v & LOW_52_BITS
    }

    fn from_bytes(bytes: &[u8; 32]) -> UnpackedScalar {
        let mut words = [0u64; 4];
        for (word, chunk) in words.iter_mut().zip(bytes.chunks_exact(8)) {
            *word = u64::from_le_bytes([
                chunk[0], chunk[1], chunk[2], chunk[3], chunk[4], chunk[5], chunk[6], chunk[7],
            ]);
        }
        UnpackedScalar(core::array::from_fn(|i| Self::bits_52(&words, 52 * i)))
    }

    /// Reduce a 512-bit integer by splitting it at bit 260:
    /// \\( lo + hi \cdot 2\^{260} \equiv lo R / R + hi R\^2 / R \\).
    fn from_bytes_wide(bytes: &[u8; 64]) -> UnpackedScalar {
        let mut words = [0u64; 8];
        for (word, chunk) in words.iter_mut().zip(bytes.chunks_exact(8)) {
            *word = u64::from_le_bytes([
                chunk[0], chunk[1], chunk[2], chunk[3], chunk[4], chunk[5], chunk[6], chunk[7],
            ]);
        }
        let lo = UnpackedScalar(core::array::from_fn(|i| Self::bits_52(&words, 52 * i)));
        let hi = UnpackedScalar(core::array::from_fn(|i| Self::bits_52(&words, 260 + 52 * i)));
        UnpackedScalar::add(
            &UnpackedScalar::montgomery_mul(&lo, &R),
            &UnpackedScalar::montgomery_mul(&hi, &RR),
        )
    }

    fn to_bytes(&self) -> [u8; 32] {
        let mut out = [0u8; 32];
        let mut acc: u64 = 0;
        let mut acc_bits = 0;
        let mut pos = 0;
        for limb in self.0 {
            acc |= limb << acc_bits;
            acc_bits += 52;
            while acc_bits >= 8 && pos < 32 {
                out[pos] = acc as u8;
                acc >>= 8;
                acc_bits -= 8;
                pos += 1;
            }
        }
        out
    }

    fn pack(&self) -> Scalar {
        Scalar {
            bytes: self.to_bytes(),
        }
    }

    /// \\( a + b \bmod \ell \\), for \\( a, b < \ell \\).
    fn add(a: &UnpackedScalar, b: &UnpackedScalar) -> UnpackedScalar {
        let mut sum = [0u64; 5];
        let mut carry = 0u64;
        for i in 0..5 {
            carry = a.0[i] + b.0[i] + (carry >> 52);
            sum[i] = carry & LOW_52_BITS;
        }
        UnpackedScalar::sub(&UnpackedScalar(sum), &L)
    }

    /// \\( a - b \bmod \ell \\), for \\( -\ell \le a - b < \ell \\).
    fn sub(a: &UnpackedScalar, b: &UnpackedScalar) -> UnpackedScalar {
        let mut diff = [0u64; 5];
        let mut borrow = 0u64;
        for i in 0..5 {
            borrow = a.0[i].wrapping_sub(b.0[i] + (borrow >> 63));
            diff[i] = borrow & LOW_52_BITS;
        }

        // All ones when the subtraction went negative.
        let add_back = 0u64.wrapping_sub(borrow >> 63);
        let mut carry = 0u64;
        for i in 0..5 {
            carry = diff[i] + (L.0[i] & add_back) + (carry >> 52);
            diff[i] = carry & LOW_52_BITS;
        }
        UnpackedScalar(diff)
    }

    fn mul_wide(a: &UnpackedScalar, b: &UnpackedScalar) -> [u128; 9] {
        let mut z = [0u128; 9];
        for i in 0..5 {
            for j in 0..5 {
                z[i + j] += (a.0[i] as u128) * (b.0[j] as u128);
            }
        }
        z
    }

    /// \\( z / R \bmod \ell \\), for \\( z < \ell R \\).
    fn montgomery_reduce(z: &[u128; 9]) -> UnpackedScalar {
        let mut z = *z;
        let mut carry: u128 = 0;

        // Clear the low 260 bits one limb at a time by adding multiples of l.
        for i in 0..5 {
            let v = z[i] + carry;
            let n = (v as u64).wrapping_mul(L_FACTOR) & LOW_52_BITS;
            carry = (v + (n as u128) * (L.0[0] as u128)) >> 52;
            for j in 1..5 {
                z[i + j] += (n as u128) * (L.0[j] as u128);
            }
        }

        // What is left is below 2l.
        let mut r = [0u64; 5];
        for (limb, coeff) in r.iter_mut().zip(&z[5..]) {
            let v = coeff + carry;
            *limb = (v as u64) & LOW_52_BITS;
            carry = v >> 52;
        }
        r[4] = carry as u64;
        UnpackedScalar::sub(&UnpackedScalar(r), &L)
    }

    fn montgomery_mul(a: &UnpackedScalar, b: &UnpackedScalar) -> UnpackedScalar {
        UnpackedScalar::montgomery_reduce(&UnpackedScalar::mul_wide(a, b))
    }

    /// \\( ab \bmod \ell \\): \\( (ab/R) \cdot R\^2 / R \\).
    fn mul(a: &UnpackedScalar, b: &UnpackedScalar) -> UnpackedScalar {
        UnpackedScalar::montgomery_mul(&UnpackedScalar::montgomery_mul(a, b), &RR)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::constants::{self, hex32};

    use rand::{rngs::OsRng, RngCore};

    const X: &str = "28c4e4c6a640349f3e0a2704e28ad5f4c4f3caaff22abe4ae818658ab52eaa04";
    const Y: &str = "09de70cf701abe31f02dae56230db84718d6a374d956f77d71da7c439cc99100";
    const X_TIMES_Y: &str = "2ac78e465050e6814c29a9b2e391a895b361c755e9cc6ce7f559f02a4352fd08";
    const X_PLUS_Y: &str = "31a25596175bf2d02e38d55a05988d3cddc96e24cc81b5c859f3e1cd51f83b05";
    const X_MINUS_Y: &str = "1fe673f73526766d4edc78adbe7d1dadac1d273b19d4c6cc763ee84619651804";
    const MINUS_X: &str = "c50f11967322deb89792d09efc6e09203b0c35500dd541b517e79a754ad1550b";
    const L_MINUS_ONE: &str = "ecd3f55c1a631258d69cf7a2def9de1400000000000000000000000000000010";

    fn scalar(hex: &str) -> Scalar {
        Scalar { bytes: hex32(hex) }
    }

    fn random_scalar() -> Scalar {
        let mut wide = [0u8; 64];
        OsRng.fill_bytes(&mut wide);
        Scalar::from_bytes_mod_order_wide(&wide)
    }

    #[test]
    fn arithmetic_vectors() {
        let (x, y) = (scalar(X), scalar(Y));
        assert_eq!(&x * &y, scalar(X_TIMES_Y));
        assert_eq!(&x + &y, scalar(X_PLUS_Y));
        assert_eq!(&x - &y, scalar(X_MINUS_Y));
        assert_eq!(-&x, scalar(MINUS_X));
        assert_eq!(&(-&x) + &x, Scalar::ZERO);
    }

    #[test]
    fn assign_ops_match_binary_ops() {
        let mut acc = scalar(X);
        acc *= scalar(Y);
        assert_eq!(acc, scalar(X_TIMES_Y));
        acc -= &scalar(X_TIMES_Y);
        acc += Scalar::ONE;
        assert_eq!(acc, Scalar::ONE);
    }

    #[test]
    fn sum_folds_with_add() {
        let total: Scalar = [scalar(X), scalar(Y)].iter().sum();
        assert_eq!(total, scalar(X_PLUS_Y));
    }

    #[test]
    fn mul_is_commutative_and_associative() {
        for _ in 0..16 {
            let (a, b, c) = (random_scalar(), random_scalar(), random_scalar());
            assert_eq!(&a * &b, &b * &a);
            assert_eq!(&(&a * &b) * &c, &a * &(&b * &c));
            assert_eq!(&(&a + &b) - &b, a);
        }
    }

    #[test]
    fn wide_reduction_vector() {
        let mut wide = [0u8; 64];
        wide[..32].copy_from_slice(&hex32(
            "e29997d00ee40bc78f2b85bbee63b41ac9173cf6b8de4dc5ed50be98fadd8643",
        ));
        wide[32..].copy_from_slice(&hex32(
            "d7457ea6066f037e666470c1286b47badcba23cbd954d1146f61b6bae6301448",
        ));
        assert_eq!(
            Scalar::from_bytes_mod_order_wide(&wide),
            scalar("084d78eb0d7e23877165d8f5696d9ee4a966eaea64b11e585d37aa197a578b0b")
        );
    }

    #[test]
    fn reduction_of_edge_values() {
        assert_eq!(Scalar::from_bytes_mod_order(constants::BASEPOINT_ORDER.bytes), Scalar::ZERO);
        assert_eq!(Scalar::from_bytes_mod_order(hex32(L_MINUS_ONE)), scalar(L_MINUS_ONE));
        assert_eq!(
            Scalar::from_bytes_mod_order([0xff; 32]),
            scalar("1c95988d7431ecd670cf7d73f45befc6feffffffffffffffffffffffffffff0f")
        );
    }

    #[test]
    fn canonical_bytes_stop_at_l() {
        assert!(bool::from(Scalar::from_canonical_bytes(hex32(L_MINUS_ONE)).is_some()));
        assert!(bool::from(Scalar::from_canonical_bytes(constants::BASEPOINT_ORDER.bytes).is_none()));
        assert!(bool::from(Scalar::from_canonical_bytes([0xff; 32]).is_none()));

        let mut high_bit = [0u8; 32];
        high_bit[31] = 0x80;
        assert!(bool::from(Scalar::from_canonical_bytes(high_bit).is_none()));
    }

    /// Rebuild \\( \sum d\_i b\^i \\) by Horner's rule.
    fn recombine(digits: &[i8], base: u64) -> Scalar {
        let base = Scalar::from(base);
        digits.iter().rev().fold(Scalar::ZERO, |acc, &d| {
            let digit = Scalar::from(d.unsigned_abs() as u64);
            let digit = if d < 0 { -digit } else { digit };
            &(&acc * &base) + &digit
        })
    }

    #[test]
    fn radix_16_digits_rebuild_the_scalar() {
        for s in [scalar(X), scalar(L_MINUS_ONE), random_scalar()] {
            let digits = s.as_radix_16();
            assert!(digits.iter().all(|&d| (-8..8).contains(&d)));
            assert_eq!(recombine(&digits, 16), s);
        }
    }

    #[test]
    fn sliding_window_digits_rebuild_the_scalar() {
        for s in [scalar(X), scalar(L_MINUS_ONE), random_scalar()] {
            let digits = s.non_adjacent_form();
            assert!(digits.iter().all(|&d| d == 0 || (d % 2 != 0 && (-15..=15).contains(&d))));
            assert_eq!(recombine(&digits, 2), s);
        }
    }

    #[test]
    fn bits_le_follow_the_bytes() {
        let s = scalar(X);
        let mut rebuilt = [0u8; 32];
        for (i, bit) in s.bits_le().enumerate() {
            rebuilt[i / 8] |= (bit as u8) << (i % 8);
        }
        assert_eq!(rebuilt, s.bytes);
    }

    #[test]
    fn clamping_sets_the_expected_bits() {
        let clamped = clamp_integer([0xff; 32]);
        assert_eq!(clamped[0], 0xf8);
        assert_eq!(clamped[31], 0x7f);
        assert_eq!(&clamped[1..31], &[0xff; 30]);

        let clamped = clamp_integer([0; 32]);
        assert_eq!(clamped[0], 0);
        assert_eq!(clamped[31], 0x40);
    }

    #[test]
    #[cfg(feature = "digest")]
    fn from_hash_reduces_sha512() {
        use sha2::{Digest, Sha512};

        let mut hasher = Sha512::new();
        hasher.update(b"c25519");
        let expected = {
            let mut wide = [0u8; 64];
            wide.copy_from_slice(&Sha512::digest(b"c25519"));
            Scalar::from_bytes_mod_order_wide(&wide)
        };
        assert_eq!(Scalar::from_hash(hasher), expected);
    }

    #[test]
    #[cfg(feature = "serde")]
    fn serde_bincode_round_trip() {
        let encoded = bincode::serialize(&scalar(X)).unwrap();
        assert_eq!(encoded, hex32(X));
        let decoded: Scalar = bincode::deserialize(&encoded).unwrap();
        assert_eq!(decoded, scalar(X));

        let unreduced = bincode::serialize(&constants::BASEPOINT_ORDER).unwrap();
        assert!(bincode::deserialize::<Scalar>(&unreduced).is_err());
    }

    #[test]
    fn debug_shows_the_bytes() {
        let shown = format!("{:?}", Scalar::ONE);
        assert!(shown.starts_with("Scalar([01, 00"));
    }
}

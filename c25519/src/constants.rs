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

//! Curve constants: the basepoints, the small-order points, and the field
//! elements the formulas need.
//!
//! Everything here is written as little-endian hex and decoded at compile
//! time.

#![allow(non_snake_case)]

use crate::edwards::{CompressedEdwardsY, EdwardsPoint};
use crate::field::FieldElement;
use crate::montgomery::MontgomeryPoint;
use crate::scalar::Scalar;

/// Decode 64 lowercase hex digits.  Only meant for constants: a malformed
/// string fails compilation.
pub(crate) const fn hex32(hex: &str) -> [u8; 32] {
    const fn nibble(c: u8) -> u8 {
        match c {
            b'0'..=b'9' => c - b'0',
            b'a'..=b'f' => c - b'a' + 10,
            _ => panic!("not a lowercase hex digit"),
        }
    }

    let hex = hex.as_bytes();
    assert!(hex.len() == 64);
    let mut out = [0u8; 32];
    let mut i = 0;
    while i < 32 {
        out[i] = (nibble(hex[2 * i]) << 4) | nibble(hex[2 * i + 1]);
        i += 1;
    }
    out
}

const fn fe(hex: &str) -> FieldElement {
    FieldElement::from_bytes(&hex32(hex))
}

/// An affine point \\( (x, y) \\) in extended coordinates with \\( Z = 1 \\).
const fn affine(x: &str, y: &str, xy: &str) -> EdwardsPoint {
    EdwardsPoint {
        X: fe(x),
        Y: fe(y),
        Z: FieldElement::ONE,
        T: fe(xy),
    }
}

/// The Ed25519 basepoint \\( B \\), compressed: \\( y = 4/5 \\), \\( x \\)
/// even.
pub const ED25519_BASEPOINT_COMPRESSED: CompressedEdwardsY = CompressedEdwardsY(hex32(
    "5866666666666666666666666666666666666666666666666666666666666666",
));

/// The Ed25519 basepoint \\( B \\).
pub const ED25519_BASEPOINT_POINT: EdwardsPoint = affine(
    "1ad5258f602d56c9b2a7259560c72c695cdcd6fd31e2a4c0fe536ecdd3366921",
    "5866666666666666666666666666666666666666666666666666666666666666",
    "a3ddb7a5b38ade6df5525177809ff0207de3ab648e4eea6665768bd70f5f8767",
);

/// The X25519 basepoint, \\( u = 9 \\).
pub const X25519_BASEPOINT: MontgomeryPoint = MontgomeryPoint(hex32(
    "0900000000000000000000000000000000000000000000000000000000000000",
));

/// The order \\( \ell \\) of the basepoint.  Not reduced, so it is only
/// valid as a multiplier.
pub(crate) const BASEPOINT_ORDER: Scalar = Scalar {
    bytes: hex32("edd3f55c1a631258d69cf7a2def9de1400000000000000000000000000000010"),
};

/// \\( i \cdot T \\) for \\( i = 0, \ldots, 7 \\), where \\( T \\) generates
/// the 8-torsion subgroup.
pub const EIGHT_TORSION: [EdwardsPoint; 8] = [
    affine(
        "0000000000000000000000000000000000000000000000000000000000000000",
        "0100000000000000000000000000000000000000000000000000000000000000",
        "0000000000000000000000000000000000000000000000000000000000000000",
    ),
    affine(
        "4ad145c54646a1de38e2e513703c195cbb4ade38329933e9284a3906a0b9d51f",
        "26e8958fc2b227b045c3f489f2ef98f0d5dfac05d3c63339b13802886d53fc05",
        "6c788121c1daf2d2697a05328bc26645f550076d2e89cdcf14945d9f3cbb1d13",
    ),
    affine(
        "b0a00e4a271beec478e42fad0618432fa7d7fb3d99004d2b0bdfc14f8024832b",
        "0000000000000000000000000000000000000000000000000000000000000000",
        "0000000000000000000000000000000000000000000000000000000000000000",
    ),
    affine(
        "4ad145c54646a1de38e2e513703c195cbb4ade38329933e9284a3906a0b9d51f",
        "c7176a703d4dd84fba3c0b760d10670f2a2053fa2c39ccc64ec7fd7792ac037a",
        "81877ede3e250d2d9685facd743d99ba0aaff892d1763230eb6ba260c344e26c",
    ),
    affine(
        "0000000000000000000000000000000000000000000000000000000000000000",
        "ecffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff7f",
        "0000000000000000000000000000000000000000000000000000000000000000",
    ),
    affine(
        "a32eba3ab9b95e21c71d1aec8fc3e6a344b521c7cd66cc16d7b5c6f95f462a60",
        "c7176a703d4dd84fba3c0b760d10670f2a2053fa2c39ccc64ec7fd7792ac037a",
        "6c788121c1daf2d2697a05328bc26645f550076d2e89cdcf14945d9f3cbb1d13",
    ),
    affine(
        "3d5ff1b5d8e4113b871bd052f9e7bcd0582804c266ffb2d4f4203eb07fdb7c54",
        "0000000000000000000000000000000000000000000000000000000000000000",
        "0000000000000000000000000000000000000000000000000000000000000000",
    ),
    affine(
        "a32eba3ab9b95e21c71d1aec8fc3e6a344b521c7cd66cc16d7b5c6f95f462a60",
        "26e8958fc2b227b045c3f489f2ef98f0d5dfac05d3c63339b13802886d53fc05",
        "81877ede3e250d2d9685facd743d99ba0aaff892d1763230eb6ba260c344e26c",
    ),
];

/// Montgomery \\( u \\)-coordinates for which every clamped scalar
/// multiple is zero.  A peer offering one of these does not contribute to
/// a shared secret.  Encodings follow <https://cr.yp.to/ecdh.html>.
pub const X25519_LOW_ORDER_POINTS: [MontgomeryPoint; 7] = [
    // 0, order 4
    MontgomeryPoint(hex32("0000000000000000000000000000000000000000000000000000000000000000")),
    // 1, order 1
    MontgomeryPoint(hex32("0100000000000000000000000000000000000000000000000000000000000000")),
    // order 8
    MontgomeryPoint(hex32("e0eb7a7c3b41b8ae1656e3faf19fc46ada098deb9c32b1fd866205165f49b800")),
    // order 8
    MontgomeryPoint(hex32("5f9c95bca3508c24b1d0b1559c83ef5b04445cc4581c8e86d8224eddd09f1157")),
    // p - 1, order 2
    MontgomeryPoint(hex32("ecffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff7f")),
    // p, order 4
    MontgomeryPoint(hex32("edffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff7f")),
    // p + 1, order 1
    MontgomeryPoint(hex32("eeffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff7f")),
];

/// \\( d = -121665/121666 \\), the Edwards curve coefficient.
pub(crate) const EDWARDS_D: FieldElement =
    fe("a3785913ca4deb75abd841414d0a700098e879777940c78c73fe6f2bee6c0352");

/// \\( 2d \\).
pub(crate) const EDWARDS_D2: FieldElement =
    fe("59f1b226949bd6eb56b183829a14e00030d1f3eef2808e19e7fcdf56dcd90624");

/// The non-negative square root of \\( -1 \\).
pub(crate) const SQRT_M1: FieldElement =
    fe("b0a00e4a271beec478e42fad0618432fa7d7fb3d99004d2b0bdfc14f8024832b");

/// \\( (A + 2)/4 = 121666 \\) for the Montgomery coefficient
/// \\( A = 486662 \\).
pub(crate) const A24: FieldElement = FieldElement([121666, 0, 0, 0, 0]);

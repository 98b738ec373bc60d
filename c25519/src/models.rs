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

//! Intermediate point representations used inside the Edwards formulas.
//!
//! The curve is \\( -x\^2 + y\^2 = 1 + d x\^2 y\^2 \\).  Besides the
//! extended coordinates of [`EdwardsPoint`], the formulas of Hisil, Wong,
//! Carter and Dawson ("Twisted Edwards curves revisited", 2008) pass through
//! three other models:
//!
//! * [`ProjectivePoint`], \\( (X : Y : Z) \\) with \\( x = X/Z \\),
//!   \\( y = Y/Z \\).  Doubling only needs these three coordinates.
//! * [`CompletedPoint`], \\( ((X : Z), (Y : T)) \\) with \\( x = X/Z \\),
//!   \\( y = Y/T \\).  Both doubling and addition produce this, and it
//!   converts to either of the other models with three or four
//!   multiplications.
//! * [`CachedPoint`], \\( (Y + X, Y - X, Z, 2dT) \\), the right-hand
//!   operand of an addition, precomputed so that tables of multiples can
//!   be built once and added many times.
//!
//! Doubling and addition here are complete: they have no exceptional
//! inputs, so scalar multiplication never needs a branch on the point.

#![allow(non_snake_case)]

use core::fmt::Debug;
use core::ops::{Add, Neg, Sub};

use subtle::{Choice, ConditionallySelectable};

#[cfg(feature = "zeroize")]
use zeroize::Zeroize;

use crate::constants;
use crate::edwards::EdwardsPoint;
use crate::field::FieldElement;

#[derive(Copy, Clone, Debug)]
pub(crate) struct ProjectivePoint {
    pub X: FieldElement,
    pub Y: FieldElement,
    pub Z: FieldElement,
}

#[derive(Copy, Clone, Debug)]
pub(crate) struct CompletedPoint {
    pub X: FieldElement,
    pub Y: FieldElement,
    pub Z: FieldElement,
    pub T: FieldElement,
}

#[derive(Copy, Clone, Debug)]
pub(crate) struct CachedPoint {
    pub Y_plus_X: FieldElement,
    pub Y_minus_X: FieldElement,
    pub Z: FieldElement,
    pub T2d: FieldElement,
}

#[cfg(feature = "zeroize")]
impl Zeroize for CachedPoint {
    fn zeroize(&mut self) {
        self.Y_plus_X.zeroize();
        self.Y_minus_X.zeroize();
        self.Z.zeroize();
        self.T2d.zeroize();
    }
}

impl ProjectivePoint {
    pub(crate) const IDENTITY: ProjectivePoint = ProjectivePoint {
        X: FieldElement::ZERO,
        Y: FieldElement::ONE,
        Z: FieldElement::ONE,
    };

    /// Doubling, "dbl-2008-hwcd" with \\( a = -1 \\):
    ///
    /// \\( E = (X + Y)\^2 - X\^2 - Y\^2 \\), \\( G = Y\^2 - X\^2 \\),
    /// \\( F = G - 2Z\^2 \\), \\( H = -X\^2 - Y\^2 \\), and
    /// \\( 2P = (E/G, H/F) \\).
    pub(crate) fn double(&self) -> CompletedPoint {
        let xx = self.X.square();
        let yy = self.Y.square();
        let two_zz = self.Z.square2();
        let xx_plus_yy = &xx + &yy;

        let e = &(&self.X + &self.Y).square() - &xx_plus_yy;
        let g = &yy - &xx;
        let f = &g - &two_zz;
        let h = -&xx_plus_yy;

        CompletedPoint {
            X: e,
            Z: g,
            Y: h,
            T: f,
        }
    }

    pub(crate) fn to_extended(&self) -> EdwardsPoint {
        EdwardsPoint {
            X: &self.X * &self.Z,
            Y: &self.Y * &self.Z,
            Z: self.Z.square(),
            T: &self.X * &self.Y,
        }
    }
}

impl CompletedPoint {
    pub(crate) fn to_projective(&self) -> ProjectivePoint {
        ProjectivePoint {
            X: &self.X * &self.T,
            Y: &self.Y * &self.Z,
            Z: &self.Z * &self.T,
        }
    }

    pub(crate) fn to_extended(&self) -> EdwardsPoint {
        EdwardsPoint {
            X: &self.X * &self.T,
            Y: &self.Y * &self.Z,
            Z: &self.Z * &self.T,
            T: &self.X * &self.Y,
        }
    }
}

impl CachedPoint {
    pub(crate) const IDENTITY: CachedPoint = CachedPoint {
        Y_plus_X: FieldElement::ONE,
        Y_minus_X: FieldElement::ONE,
        Z: FieldElement::ONE,
        T2d: FieldElement::ZERO,
    };
}

impl<'a> From<&'a EdwardsPoint> for CachedPoint {
    fn from(P: &'a EdwardsPoint) -> CachedPoint {
        CachedPoint {
            Y_plus_X: &P.Y + &P.X,
            Y_minus_X: &P.Y - &P.X,
            Z: P.Z,
            T2d: &P.T * &constants::EDWARDS_D2,
        }
    }
}

impl ConditionallySelectable for CachedPoint {
    fn conditional_select(a: &CachedPoint, b: &CachedPoint, choice: Choice) -> CachedPoint {
        CachedPoint {
            Y_plus_X: FieldElement::conditional_select(&a.Y_plus_X, &b.Y_plus_X, choice),
            Y_minus_X: FieldElement::conditional_select(&a.Y_minus_X, &b.Y_minus_X, choice),
            Z: FieldElement::conditional_select(&a.Z, &b.Z, choice),
            T2d: FieldElement::conditional_select(&a.T2d, &b.T2d, choice),
        }
    }
}

impl<'a> Neg for &'a CachedPoint {
    type Output = CachedPoint;

    /// \\( -(x, y) = (-x, y) \\): swap \\( Y \pm X \\) and negate \\( T \\).
    fn neg(self) -> CachedPoint {
        CachedPoint {
            Y_plus_X: self.Y_minus_X,
            Y_minus_X: self.Y_plus_X,
            Z: self.Z,
            T2d: -&self.T2d,
        }
    }
}

impl<'a, 'b> Add<&'b CachedPoint> for &'a EdwardsPoint {
    type Output = CompletedPoint;

    /// Addition, "add-2008-hwcd-3":
    ///
    /// \\( A = (Y\_1 - X\_1)(Y\_2 - X\_2) \\),
    /// \\( B = (Y\_1 + X\_1)(Y\_2 + X\_2) \\),
    /// \\( C = 2d T\_1 T\_2 \\), \\( D = 2 Z\_1 Z\_2 \\), and the sum is
    /// \\( ((B - A)/(D + C), (B + A)/(D - C)) \\).
    fn add(self, Q: &'b CachedPoint) -> CompletedPoint {
        let a = &(&self.Y - &self.X) * &Q.Y_minus_X;
        let b = &(&self.Y + &self.X) * &Q.Y_plus_X;
        let c = &self.T * &Q.T2d;
        let zz = &self.Z * &Q.Z;
        let d = &zz + &zz;

        CompletedPoint {
            X: &b - &a,
            Z: &d + &c,
            Y: &b + &a,
            T: &d - &c,
        }
    }
}

impl<'a, 'b> Sub<&'b CachedPoint> for &'a EdwardsPoint {
    type Output = CompletedPoint;

    fn sub(self, Q: &'b CachedPoint) -> CompletedPoint {
        self + &(-Q)
    }
}

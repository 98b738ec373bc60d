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

//! Tables of small multiples of a point, for windowed scalar multiplication.

#![allow(non_snake_case)]

use subtle::{Choice, ConditionallyNegatable, ConditionallySelectable, ConstantTimeEq};

#[cfg(feature = "zeroize")]
use zeroize::Zeroize;

use crate::edwards::EdwardsPoint;
use crate::models::CachedPoint;

/// \\( [P, 2P, \ldots, 8P] \\), read with a constant-time [`select`](Self::select).
#[derive(Copy, Clone, Debug)]
pub(crate) struct LookupTable([CachedPoint; 8]);

impl LookupTable {
    /// \\( xP \\) for \\( -8 \le x \le 8 \\).
    ///
    /// Every entry is read and the sign is applied with a conditional
    /// negation, so neither timing nor memory access depends on `x`.
    pub(crate) fn select(&self, x: i8) -> CachedPoint {
        debug_assert!((-8..=8).contains(&x));

        let negative = (x as u8) >> 7;
        // |x| without a branch: flip the bits and add one when negative.
        let mask = 0u8.wrapping_sub(negative);
        let magnitude = ((x as u8) ^ mask).wrapping_add(negative);

        let mut selected = CachedPoint::IDENTITY;
        for (multiple, entry) in (1u8..).zip(self.0.iter()) {
            selected.conditional_assign(entry, multiple.ct_eq(&magnitude));
        }
        selected.conditional_negate(Choice::from(negative));
        selected
    }
}

impl<'a> From<&'a EdwardsPoint> for LookupTable {
    fn from(P: &'a EdwardsPoint) -> LookupTable {
        let first = CachedPoint::from(P);
        let mut entries = [first; 8];
        for i in 1..8 {
            entries[i] = CachedPoint::from(&(P + &entries[i - 1]).to_extended());
        }
        LookupTable(entries)
    }
}

#[cfg(feature = "zeroize")]
impl Zeroize for LookupTable {
    fn zeroize(&mut self) {
        for entry in self.0.iter_mut() {
            entry.zeroize();
        }
    }
}

/// The odd multiples \\( [P, 3P, 5P, \ldots, 15P] \\), indexed directly.
///
/// Only for public points and public digits.
#[derive(Copy, Clone, Debug)]
pub(crate) struct NafLookupTable5([CachedPoint; 8]);

impl NafLookupTable5 {
    /// \\( xP \\) for odd \\( 0 < x < 16 \\).
    pub(crate) fn select(&self, x: usize) -> CachedPoint {
        debug_assert!(x % 2 == 1 && x < 16);
        self.0[x / 2]
    }
}

impl<'a> From<&'a EdwardsPoint> for NafLookupTable5 {
    fn from(P: &'a EdwardsPoint) -> NafLookupTable5 {
        let P2 = CachedPoint::from(&P.double());
        let mut entries = [CachedPoint::from(P); 8];
        let mut current = *P;
        for entry in entries.iter_mut().skip(1) {
            current = (&current + &P2).to_extended();
            *entry = CachedPoint::from(&current);
        }
        NafLookupTable5(entries)
    }
}

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

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![warn(
    clippy::unwrap_used,
    missing_docs,
    rust_2018_idioms,
    unused_lifetimes,
    unused_qualifications
)]
#![doc(html_logo_url = "https://cdn.jsdelivr.net/gh/dalek-cryptography/curve25519-dalek/docs/assets/dalek-logo-clear.png")]

//! Arithmetic on curve25519 for the `edsign` signature scheme.
//!
//! The crate provides:
//!
//! * constant-time field arithmetic mod p = 2^255 - 19;
//! * scalar arithmetic mod ℓ = 2^252 + 27742317777372353535851937790883648493;
//! * the twisted Edwards form of the curve, used for Ed25519 signatures;
//! * the Montgomery form of the curve, used for X25519 key agreement.
//!
//! Code paths that may receive secret data (field and scalar arithmetic,
//! [`EdwardsPoint`](edwards::EdwardsPoint) multiplication by a [`Scalar`](scalar::Scalar),
//! the Montgomery ladder) run in constant time.  Functions whose name
//! contains `vartime` do not, and must only ever see public inputs.

#[cfg(any(feature = "std", test))]
#[macro_use]
extern crate std;

#[cfg(feature = "digest")]
pub use digest;

// Operator-forwarding macros, used by every arithmetic module below.
#[macro_use]
mod macros;

pub mod constants;
pub mod edwards;
pub mod montgomery;
pub mod scalar;

// Arithmetic in GF(2^255 - 19).
mod field;
// Projective, completed and cached point models for the Edwards formulas.
mod models;
// Tables of small multiples for windowed scalar multiplication.
mod window;

pub use crate::{
    edwards::{CompressedEdwardsY, EdwardsPoint},
    montgomery::MontgomeryPoint,
    scalar::{clamp_integer, Scalar},
};

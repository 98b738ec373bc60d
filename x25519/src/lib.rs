// -*- mode: rust; -*-
//
// This file is part of c25519-x25519.
// Copyright (c) 2017-2021 isis lovecruft
// Copyright (c) 2019-2021 DebugSteven
// See LICENSE for licensing information.
//
// Authors:
// - isis agora lovecruft <isis@patternsinthevoid.net>
// - DebugSteven <debugsteven@gmail.com>

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![deny(missing_docs)]
#![doc(
    html_logo_url = "https://cdn.jsdelivr.net/gh/dalek-cryptography/curve25519-dalek/docs/assets/dalek-logo-clear.png"
)]
// The README examples run as doctests.
#![doc = include_str!("../README.md")]

mod x25519;

/// `extern "C"` entry points over [`x25519`] and [`x25519_base`].
#[cfg(feature = "ffi")]
pub mod ffi;

pub use crate::x25519::{
    x25519, x25519_base, EphemeralSecret, PublicKey, SharedSecret, X25519_BASEPOINT_BYTES,
};

#[cfg(feature = "static_secrets")]
pub use crate::x25519::StaticSecret;

// -*- mode: rust; -*-
//
// This file is part of c25519-edsign.
// Copyright (c) 2017-2019 isis lovecruft
// See LICENSE for licensing information.
//
// Authors:
// - isis agora lovecruft <isis@patternsinthevoid.net>

//! The error type returned by key and signature operations.

use core::fmt;

/// What went wrong, in more detail than callers are meant to match on.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub(crate) enum InternalError {
    /// Bytes that should encode a curve point do not.
    PointDecompression,
    /// A signature's `s` is not reduced modulo \\( \ell \\).
    ScalarFormat,
    /// A constructor named `name` wanted exactly `length` bytes.
    BytesLength { name: &'static str, length: usize },
    /// \\( [s]B - [k]A \\) did not encode to `R`.
    Verify,
    /// Strict verification met a small-order key or `R`.
    WeakKey,
}

impl fmt::Display for InternalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InternalError::PointDecompression => f.write_str("bytes do not encode a curve point"),
            InternalError::ScalarFormat => f.write_str("signature scalar is not reduced"),
            InternalError::BytesLength { name, length } => {
                write!(f, "{} must be {} bytes long", name, length)
            }
            InternalError::Verify => f.write_str("signature does not verify"),
            InternalError::WeakKey => f.write_str("small-order point refused by strict verification"),
        }
    }
}

impl core::error::Error for InternalError {}

/// The single error type of this crate.
///
/// It is returned for input of the wrong length, for keys or signature `R`
/// values that are not curve points, for an unreduced signature scalar,
/// for a signature that fails to verify, and for the extra refusals of
/// [`VerifyingKey::verify_strict`](crate::VerifyingKey::verify_strict).
/// The cause is available through `Display` and
/// [`source`](core::error::Error::source) but is deliberately not an enum
/// callers can match on.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct SignatureError(pub(crate) InternalError);

impl fmt::Display for SignatureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl core::error::Error for SignatureError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        Some(&self.0)
    }
}

impl From<InternalError> for SignatureError {
    fn from(cause: InternalError) -> SignatureError {
        SignatureError(cause)
    }
}

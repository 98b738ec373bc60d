// -*- mode: rust; -*-
//
// This file is part of c25519-edsign.
// Copyright (c) 2017-2019 isis lovecruft
// See LICENSE for licensing information.
//
// Authors:
// - isis agora lovecruft <isis@patternsinthevoid.net>

//! An ed25519 signature.

use core::fmt::Debug;

use c25519::edwards::CompressedEdwardsY;
use c25519::scalar::Scalar;

#[cfg(feature = "serde")]
use serde::de::Error as SerdeError;
#[cfg(feature = "serde")]
use serde::de::{SeqAccess, Visitor};
#[cfg(feature = "serde")]
use serde::ser::SerializeTuple;
#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::constants::*;
use crate::errors::*;

/// An ed25519 signature.
///
/// # Note
///
/// These signatures are "detached": they do **not** include a copy of the
/// message which has been signed.
///
/// Parsing a `Signature` never fails for well-sized input.  Whether `s` is
/// canonically reduced is only checked when the signature is verified, so
/// that a malformed signature surfaces as a verification failure.
#[allow(non_snake_case)]
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct Signature {
    /// The packed nonce commitment \\( R = rB \\).
    R: [u8; 32],
    /// The response \\( s = r + H(R \| A \| M) a \\), little-endian.
    s: [u8; 32],
}

impl Debug for Signature {
    fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
        write!(f, "Signature( R: {:?}, s: {:?} )", &self.R, &self.s)
    }
}

impl Signature {
    /// Parse an Ed25519 signature from a byte array.
    #[allow(non_snake_case)]
    pub fn from_bytes(bytes: &[u8; SIGNATURE_LENGTH]) -> Signature {
        let mut R = [0u8; 32];
        let mut s = [0u8; 32];
        R.copy_from_slice(&bytes[..32]);
        s.copy_from_slice(&bytes[32..]);
        Signature { R, s }
    }

    /// Build a signature from its `R` and `s` halves.
    #[allow(non_snake_case)]
    pub fn from_components(R: [u8; 32], s: [u8; 32]) -> Signature {
        Signature { R, s }
    }

    /// Parse an Ed25519 signature from a byte slice.
    pub fn from_slice(bytes: &[u8]) -> Result<Signature, SignatureError> {
        let bytes: &[u8; SIGNATURE_LENGTH] = bytes.try_into().map_err(|_| {
            SignatureError::from(InternalError::BytesLength {
                name: "Signature",
                length: SIGNATURE_LENGTH,
            })
        })?;
        Ok(Signature::from_bytes(bytes))
    }

    /// Convert this `Signature` to a byte array.
    #[inline]
    pub fn to_bytes(&self) -> [u8; SIGNATURE_LENGTH] {
        let mut signature_bytes = [0u8; SIGNATURE_LENGTH];
        signature_bytes[..32].copy_from_slice(&self.R);
        signature_bytes[32..].copy_from_slice(&self.s);
        signature_bytes
    }

    /// The packed point `R`.
    pub fn r_bytes(&self) -> &[u8; 32] {
        &self.R
    }

    /// The scalar `s`, exactly as it appeared on the wire.
    pub fn s_bytes(&self) -> &[u8; 32] {
        &self.s
    }
}

impl From<[u8; SIGNATURE_LENGTH]> for Signature {
    fn from(bytes: [u8; SIGNATURE_LENGTH]) -> Signature {
        Signature::from_bytes(&bytes)
    }
}

impl From<&[u8; SIGNATURE_LENGTH]> for Signature {
    fn from(bytes: &[u8; SIGNATURE_LENGTH]) -> Signature {
        Signature::from_bytes(bytes)
    }
}

impl From<Signature> for [u8; SIGNATURE_LENGTH] {
    fn from(sig: Signature) -> [u8; SIGNATURE_LENGTH] {
        sig.to_bytes()
    }
}

impl TryFrom<&[u8]> for Signature {
    type Error = SignatureError;

    fn try_from(bytes: &[u8]) -> Result<Signature, SignatureError> {
        Signature::from_slice(bytes)
    }
}

/// A signature with its scalar checked for canonicity, ready for the
/// verification equation.
#[allow(non_snake_case)]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) struct InternalSignature {
    pub(crate) R: CompressedEdwardsY,
    pub(crate) s: Scalar,
}

/// Ensures that the scalar `s` of a signature is within the bounds \\( [0, \ell) \\).
///
/// Accepting `s + \ell` as well as `s` would make every signature malleable,
/// so anything that is not the unique reduced representative is rejected.
#[inline(always)]
fn check_scalar(bytes: [u8; 32]) -> Result<Scalar, SignatureError> {
    Option::from(Scalar::from_canonical_bytes(bytes))
        .ok_or_else(|| SignatureError::from(InternalError::ScalarFormat))
}

impl InternalSignature {
    /// Construct an `InternalSignature`, rejecting a non-canonical `s`.
    ///
    /// `R` is left packed; decoding it is the verifier's business.
    #[inline]
    #[allow(non_snake_case)]
    pub(crate) fn from_bytes(bytes: &[u8; SIGNATURE_LENGTH]) -> Result<Self, SignatureError> {
        let mut R_bytes = [0u8; 32];
        let mut s_bytes = [0u8; 32];
        R_bytes.copy_from_slice(&bytes[00..32]);
        s_bytes.copy_from_slice(&bytes[32..64]);

        Ok(InternalSignature {
            R: CompressedEdwardsY(R_bytes),
            s: check_scalar(s_bytes)?,
        })
    }
}

impl TryFrom<&Signature> for InternalSignature {
    type Error = SignatureError;

    fn try_from(sig: &Signature) -> Result<InternalSignature, SignatureError> {
        InternalSignature::from_bytes(&sig.to_bytes())
    }
}

impl From<InternalSignature> for Signature {
    fn from(sig: InternalSignature) -> Signature {
        Signature::from_components(sig.R.to_bytes(), sig.s.to_bytes())
    }
}

#[cfg(feature = "serde")]
impl Serialize for Signature {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_tuple(SIGNATURE_LENGTH)?;
        for byte in self.to_bytes().iter() {
            seq.serialize_element(byte)?;
        }
        seq.end()
    }
}

#[cfg(feature = "serde")]
impl<'d> Deserialize<'d> for Signature {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'d>,
    {
        struct SignatureVisitor;

        impl<'d> Visitor<'d> for SignatureVisitor {
            type Value = Signature;

            fn expecting(&self, formatter: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                formatter.write_str("An ed25519 signature as 64 bytes, as specified in RFC8032.")
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Signature, A::Error>
            where
                A: SeqAccess<'d>,
            {
                let mut bytes = [0u8; SIGNATURE_LENGTH];
                #[allow(clippy::needless_range_loop)]
                for i in 0..SIGNATURE_LENGTH {
                    bytes[i] = seq
                        .next_element()?
                        .ok_or_else(|| SerdeError::invalid_length(i, &"expected 64 bytes"))?;
                }
                Ok(Signature::from_bytes(&bytes))
            }
        }

        deserializer.deserialize_tuple(SIGNATURE_LENGTH, SignatureVisitor)
    }
}

#[cfg(test)]
mod test {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn scalar_equal_to_group_order_is_rejected() {
        let mut bytes = [0u8; SIGNATURE_LENGTH];
        // l = 2^252 + 27742317777372353535851937790883648493, little-endian
        bytes[32..].copy_from_slice(&[
            0xed, 0xd3, 0xf5, 0x5c, 0x1a, 0x63, 0x12, 0x58, 0xd6, 0x9c, 0xf7, 0xa2, 0xde, 0xf9,
            0xde, 0x14, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
            0x00, 0x00, 0x00, 0x10,
        ]);
        let sig = Signature::from_bytes(&bytes);
        assert_eq!(
            InternalSignature::try_from(&sig),
            Err(SignatureError(InternalError::ScalarFormat))
        );
    }

    #[test]
    fn high_bit_scalar_is_rejected() {
        let mut bytes = [0u8; SIGNATURE_LENGTH];
        bytes[63] = 0x80;
        assert!(InternalSignature::from_bytes(&bytes).is_err());
    }

    #[test]
    fn reduced_scalar_is_accepted() {
        let mut bytes = [0u8; SIGNATURE_LENGTH];
        bytes[32] = 1;
        let sig = InternalSignature::from_bytes(&bytes).unwrap();
        assert_eq!(sig.s, Scalar::ONE);
        assert_eq!(Signature::from(sig).to_bytes(), bytes);
    }

    #[test]
    fn from_slice_wrong_length() {
        assert!(Signature::from_slice(&[0u8; 63]).is_err());
        assert!(Signature::from_slice(&[0u8; 65]).is_err());
        assert!(Signature::from_slice(&[0u8; 64]).is_ok());
    }

    #[test]
    fn halves_are_kept_apart() {
        let mut bytes = [0u8; SIGNATURE_LENGTH];
        bytes[..32].copy_from_slice(&[0xaa; 32]);
        bytes[32..].copy_from_slice(&[0x05; 32]);
        let sig = Signature::from_bytes(&bytes);
        assert_eq!(sig.r_bytes(), &[0xaa; 32]);
        assert_eq!(sig.s_bytes(), &[0x05; 32]);
        assert_eq!(<[u8; 64]>::from(sig), bytes);
    }
}

// -*- mode: rust; -*-
//
// This file is part of c25519-edsign.
// Copyright (c) 2017-2019 isis lovecruft
// See LICENSE for licensing information.
//
// Authors:
// - isis agora lovecruft <isis@patternsinthevoid.net>

//! Ed25519 public keys and signature verification.

use core::fmt;
use core::hash::{Hash, Hasher};

use c25519::digest::{generic_array::typenum::U64, Digest};
use c25519::edwards::{CompressedEdwardsY, EdwardsPoint};
use c25519::montgomery::MontgomeryPoint;
use c25519::scalar::Scalar;

use sha2::Sha512;
use subtle::ConstantTimeEq;

#[cfg(feature = "serde")]
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::constants::*;
use crate::errors::*;
use crate::hazmat::ExpandedSecretKey;
use crate::signature::*;
use crate::signing::*;

/// The challenge \\( k = H(R \| A \| M) \bmod \ell \\), shared by signing
/// and verification.
#[allow(non_snake_case)]
pub(crate) fn challenge<D>(R: &CompressedEdwardsY, A: &CompressedEdwardsY, message: &[u8]) -> Scalar
where
    D: Digest<OutputSize = U64>,
{
    Scalar::from_hash(
        D::new()
            .chain_update(R.as_bytes())
            .chain_update(A.as_bytes())
            .chain_update(message),
    )
}

/// An Ed25519 public key \\( A \\).
///
/// The key remembers the exact 32 bytes it was built from.  Those bytes are
/// what gets hashed into the challenge, and they also drive `Eq` and
/// `Hash`: two non-canonical encodings of the same point are different
/// keys.
#[derive(Copy, Clone, Default, Eq)]
pub struct VerifyingKey {
    /// As supplied; `point` is always its decompression.
    pub(crate) compressed: CompressedEdwardsY,
    pub(crate) point: EdwardsPoint,
}

impl fmt::Debug for VerifyingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("VerifyingKey")
            .field(&self.compressed)
            .finish()
    }
}

impl PartialEq for VerifyingKey {
    fn eq(&self, other: &VerifyingKey) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl Hash for VerifyingKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_bytes().hash(state);
    }
}

impl AsRef<[u8]> for VerifyingKey {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl From<EdwardsPoint> for VerifyingKey {
    fn from(point: EdwardsPoint) -> VerifyingKey {
        VerifyingKey {
            compressed: point.compress(),
            point,
        }
    }
}

impl From<&ExpandedSecretKey> for VerifyingKey {
    fn from(expanded: &ExpandedSecretKey) -> VerifyingKey {
        EdwardsPoint::mul_base(&expanded.scalar).into()
    }
}

impl From<&SigningKey> for VerifyingKey {
    fn from(signing_key: &SigningKey) -> VerifyingKey {
        signing_key.verifying_key()
    }
}

impl From<VerifyingKey> for EdwardsPoint {
    fn from(key: VerifyingKey) -> EdwardsPoint {
        key.point
    }
}

impl TryFrom<&[u8]> for VerifyingKey {
    type Error = SignatureError;

    fn try_from(bytes: &[u8]) -> Result<VerifyingKey, SignatureError> {
        let bytes: &[u8; PUBLIC_KEY_LENGTH] =
            bytes.try_into().map_err(|_| InternalError::BytesLength {
                name: "VerifyingKey",
                length: PUBLIC_KEY_LENGTH,
            })?;
        VerifyingKey::from_bytes(bytes)
    }
}

impl VerifyingKey {
    /// Decode a public key.
    ///
    /// Fails with a point-decompression error when `bytes` is not the
    /// encoding of a curve point.  Nothing else is checked here; see
    /// [`is_weak`](Self::is_weak).
    ///
    /// ```
    /// use c25519_edsign::VerifyingKey;
    /// use hex_literal::hex;
    ///
    /// let bytes = hex!("d75a980182b10ab7d54bfed3c964073a0ee172f3daa62325af021a68f707511a");
    /// assert!(VerifyingKey::from_bytes(&bytes).is_ok());
    ///
    /// // No point on the curve has y = 2.
    /// let mut not_a_point = [0u8; 32];
    /// not_a_point[0] = 2;
    /// assert!(VerifyingKey::from_bytes(&not_a_point).is_err());
    /// ```
    pub fn from_bytes(bytes: &[u8; PUBLIC_KEY_LENGTH]) -> Result<VerifyingKey, SignatureError> {
        let compressed = CompressedEdwardsY(*bytes);
        match compressed.decompress() {
            Some(point) => Ok(VerifyingKey { compressed, point }),
            None => Err(InternalError::PointDecompression.into()),
        }
    }

    /// The 32 bytes this key was decoded from.
    pub fn to_bytes(&self) -> [u8; PUBLIC_KEY_LENGTH] {
        self.compressed.to_bytes()
    }

    /// A view of the 32 bytes this key was decoded from.
    pub fn as_bytes(&self) -> &[u8; PUBLIC_KEY_LENGTH] {
        self.compressed.as_bytes()
    }

    /// Whether \\( A \\) lies in the 8-torsion subgroup.
    ///
    /// A signature under such a key can be made to verify for many messages
    /// at once.  [`verify_strict`](Self::verify_strict) refuses these keys.
    pub fn is_weak(&self) -> bool {
        self.point.is_small_order()
    }

    /// The point \\( A \\) itself.
    pub fn to_edwards(&self) -> EdwardsPoint {
        self.point
    }

    /// The birational image of \\( A \\) on the Montgomery curve, usable as
    /// an X25519 public key whose secret is
    /// [`SigningKey::to_scalar_bytes`].
    ///
    /// Using one key for both signing and key agreement is discouraged.
    pub fn to_montgomery(&self) -> MontgomeryPoint {
        self.point.to_montgomery()
    }

    /// Check `signature` on `message`, hashing with `D`.
    ///
    /// In order:
    ///
    /// 1. `s` must be reduced modulo \\( \ell \\);
    /// 2. `R` must decode to a curve point;
    /// 3. \\( [s]B - [k]A \\) must encode to the same 32 bytes as the
    ///    decoded `R`, compared in constant time.
    ///
    /// Comparing re-encodings rather than the raw `R` bytes makes a
    /// non-canonical encoding of a valid `R` acceptable.
    #[allow(non_snake_case)]
    pub(crate) fn raw_verify<D>(
        &self,
        message: &[u8],
        signature: &Signature,
    ) -> Result<(), SignatureError>
    where
        D: Digest<OutputSize = U64>,
    {
        let InternalSignature { R, s } = InternalSignature::try_from(signature)?;
        let R_point = R.decompress().ok_or(InternalError::PointDecompression)?;

        let k = challenge::<D>(&R, &self.compressed, message);
        let minus_A = -self.point;
        // Every input here is public, so the variable-time path is fine.
        let recomputed = EdwardsPoint::vartime_double_scalar_mul_basepoint(&k, &minus_A, &s);

        if recomputed.compress().ct_eq(&R_point.compress()).into() {
            Ok(())
        } else {
            Err(InternalError::Verify.into())
        }
    }

    /// Verify an Ed25519 signature on `message`, following RFC 8032
    /// section 5.1.7 without the cofactor.
    pub fn verify(&self, message: &[u8], signature: &Signature) -> Result<(), SignatureError> {
        self.raw_verify::<Sha512>(message, signature)
    }

    /// [`verify`](Self::verify), additionally refusing a weak key and a
    /// small-order `R`.
    ///
    /// RFC 8032 already requires rejecting an unreduced `s`, which every
    /// verification here does.  What is left is torsion: with a small-order
    /// \\( A \\) or \\( R \\), one signature can be valid for several
    /// messages, so its signer can later repudiate any one of them.  This
    /// method closes that hole at the cost of rejecting some signatures the
    /// RFC accepts.
    #[allow(non_snake_case)]
    pub fn verify_strict(
        &self,
        message: &[u8],
        signature: &Signature,
    ) -> Result<(), SignatureError> {
        let R_point = CompressedEdwardsY(*signature.r_bytes())
            .decompress()
            .ok_or(InternalError::PointDecompression)?;
        if self.is_weak() || R_point.is_small_order() {
            return Err(InternalError::WeakKey.into());
        }
        self.raw_verify::<Sha512>(message, signature)
    }
}

#[cfg(feature = "serde")]
impl Serialize for VerifyingKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_bytes(self.as_bytes())
    }
}

#[cfg(feature = "serde")]
impl<'d> Deserialize<'d> for VerifyingKey {
    fn deserialize<D: Deserializer<'d>>(deserializer: D) -> Result<VerifyingKey, D::Error> {
        struct KeyBytes;

        impl<'v> de::Visitor<'v> for KeyBytes {
            type Value = VerifyingKey;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("32 bytes encoding an Ed25519 public key")
            }

            fn visit_bytes<E: de::Error>(self, bytes: &[u8]) -> Result<VerifyingKey, E> {
                VerifyingKey::try_from(bytes).map_err(E::custom)
            }

            // Formats without a native byte string hand the key over as a
            // sequence of integers.
            fn visit_seq<A: de::SeqAccess<'v>>(self, mut seq: A) -> Result<VerifyingKey, A::Error> {
                let mut bytes = [0u8; PUBLIC_KEY_LENGTH];
                let mut len = 0;
                while let Some(byte) = seq.next_element::<u8>()? {
                    if len == PUBLIC_KEY_LENGTH {
                        return Err(de::Error::invalid_length(len + 1, &self));
                    }
                    bytes[len] = byte;
                    len += 1;
                }
                if len != PUBLIC_KEY_LENGTH {
                    return Err(de::Error::invalid_length(len, &self));
                }
                VerifyingKey::from_bytes(&bytes).map_err(de::Error::custom)
            }
        }

        deserializer.deserialize_bytes(KeyBytes)
    }
}

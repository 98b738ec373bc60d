// -*- mode: rust; -*-
//
// This file is part of c25519-edsign.
// Copyright (c) 2017-2019 isis lovecruft
// See LICENSE for licensing information.
//
// Authors:
// - isis agora lovecruft <isis@patternsinthevoid.net>

//! Low-level interfaces to ed25519 functions
//!
//! # ⚠️ Warning: Hazmat
//!
//! These primitives are easy-to-misuse low-level interfaces.
//!
//! If you are an end user / non-expert cryptographer, **do not use any of these functions**.
//! Failure to use them correctly can lead to catastrophic failures including **full private key
//! recovery.**

use crate::{InternalError, SignatureError};

use c25519::digest::{generic_array::typenum::U64, Digest};
use c25519::scalar::{clamp_integer, Scalar};

#[cfg(feature = "zeroize")]
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::{Signature, VerifyingKey};

/// Contains the secret scalar and domain separator used for generating signatures.
///
/// This is used internally for signing.
///
/// In the usual Ed25519 signing algorithm, `scalar` and `hash_prefix` are defined such that
/// `scalar || hash_prefix = H(sk)` where `sk` is the signing key and `H` is SHA-512.
/// **WARNING:** Deriving the values for these fields in any other way can lead to full key
/// recovery, as documented in [`raw_sign`].
///
/// Instances of this secret are automatically overwritten with zeroes when they fall out of scope.
pub struct ExpandedSecretKey {
    /// The secret scalar used for signing
    pub scalar: Scalar,
    /// The domain separator used when hashing the message to generate the pseudorandom `r` value
    pub hash_prefix: [u8; 32],
}

#[cfg(feature = "zeroize")]
impl Drop for ExpandedSecretKey {
    fn drop(&mut self) {
        self.scalar.zeroize();
        self.hash_prefix.zeroize()
    }
}

#[cfg(feature = "zeroize")]
impl ZeroizeOnDrop for ExpandedSecretKey {}

// Some conversion methods for `ExpandedSecretKey`. The signing methods are defined in
// `signing.rs`, next to the `SigningKey` that uses them.
impl ExpandedSecretKey {
    /// Construct an `ExpandedSecretKey` from an array of 64 bytes. In RFC 8032, the bytes are the
    /// output of a SHA-512 hash. This clamps the first 32 bytes and uses it as a scalar, and uses
    /// the second 32 bytes as a domain separator for hashing.
    pub fn from_bytes(bytes: &[u8; 64]) -> Self {
        let mut scalar_bytes: [u8; 32] = [0u8; 32];
        let mut hash_prefix: [u8; 32] = [0u8; 32];
        scalar_bytes.copy_from_slice(&bytes[00..32]);
        hash_prefix.copy_from_slice(&bytes[32..64]);

        // For signing, we'll need the integer, clamped, and converted to a Scalar. See
        // PureEdDSA.keygen in RFC 8032 Appendix A.
        let scalar = Scalar::from_bytes_mod_order(clamp_integer(scalar_bytes));

        #[cfg(feature = "zeroize")]
        scalar_bytes.zeroize();

        ExpandedSecretKey {
            scalar,
            hash_prefix,
        }
    }

    /// Construct an `ExpandedSecretKey` from a slice of 64 bytes.
    ///
    /// # Returns
    ///
    /// A `Result` whose okay value is an EdDSA `ExpandedSecretKey` or whose error value is an
    /// `SignatureError` describing the error that occurred, namely that the given slice's length
    /// is not 64.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, SignatureError> {
        // Try to coerce bytes to a [u8; 64]
        bytes.try_into().map(Self::from_bytes).map_err(|_| {
            InternalError::BytesLength {
                name: "ExpandedSecretKey",
                length: 64,
            }
            .into()
        })
    }
}

impl TryFrom<&[u8]> for ExpandedSecretKey {
    type Error = SignatureError;

    fn try_from(bytes: &[u8]) -> Result<ExpandedSecretKey, SignatureError> {
        Self::from_slice(bytes)
    }
}

/// Compute an ordinary Ed25519 signature over the given message. `CtxDigest` is the digest used to
/// calculate the pseudorandomness needed for signing. RFC 8032 fixes `CtxDigest = Sha512`.
///
/// # ⚠️  Unsafe
///
/// Do NOT use this function unless you absolutely must. Using the wrong values in
/// `ExpandedSecretKey` can leak your signing key. See
/// [here](https://github.com/MystenLabs/ed25519-unsafe-libs) for more details on this attack.
pub fn raw_sign<CtxDigest>(
    esk: &ExpandedSecretKey,
    message: &[u8],
    verifying_key: &VerifyingKey,
) -> Signature
where
    CtxDigest: Digest<OutputSize = U64>,
{
    esk.raw_sign::<CtxDigest>(message, &verifying_key.compressed)
}

/// The ordinary non-batched Ed25519 verification check, rejecting non-canonical `s` and
/// undecodable `R`. `CtxDigest` is the digest used to compute the challenge. RFC 8032 fixes
/// `CtxDigest = Sha512`.
pub fn raw_verify<CtxDigest>(
    vk: &VerifyingKey,
    message: &[u8],
    signature: &Signature,
) -> Result<(), SignatureError>
where
    CtxDigest: Digest<OutputSize = U64>,
{
    vk.raw_verify::<CtxDigest>(message, signature)
}

#[cfg(test)]
mod test {
    #![allow(clippy::unwrap_used)]

    use super::*;

    use rand::{rngs::OsRng, CryptoRng, RngCore};
    use sha2::Sha512;

    // Pick a random Scalar
    fn non_null_scalar() -> Scalar {
        let mut rng = OsRng;
        let mut s_candidate = Scalar::random(&mut rng);
        while s_candidate == Scalar::ZERO {
            s_candidate = Scalar::random(&mut rng);
        }
        s_candidate
    }

    impl ExpandedSecretKey {
        // Generates a random ExpandedSecretKey whose scalar is a reduced, nonzero value.
        fn random<R: RngCore + CryptoRng>(mut rng: R) -> Self {
            // The lower half is overwritten below; it only has to exist.
            let mut bytes = [0u8; 64];
            rng.fill_bytes(&mut bytes);
            let mut esk = ExpandedSecretKey::from_bytes(&bytes);
            esk.scalar = non_null_scalar();
            esk
        }
    }

    #[test]
    fn sign_verify_random_expanded_key() {
        // Generate the keypair
        let rng = OsRng;
        let esk = ExpandedSecretKey::random(rng);
        let vk = VerifyingKey::from(&esk);

        let msg = b"Then one day, a piano fell on my head";

        // Sign and verify
        let sig = raw_sign::<Sha512>(&esk, msg, &vk);
        raw_verify::<Sha512>(&vk, msg, &sig).unwrap();
    }

    #[test]
    fn from_bytes_clamps_and_keeps_prefix() {
        let mut bytes = [0xffu8; 64];
        bytes[32..].copy_from_slice(&[0x42; 32]);
        let esk = ExpandedSecretKey::from_bytes(&bytes);
        assert_eq!(esk.hash_prefix, [0x42; 32]);
        assert_eq!(
            esk.scalar,
            Scalar::from_bytes_mod_order(clamp_integer([0xff; 32]))
        );
    }

    #[test]
    fn from_secret_key_matches_from_hash_bytes() {
        let secret = [7u8; 32];
        let hash = Sha512::digest(secret);
        let mut bytes = [0u8; 64];
        bytes.copy_from_slice(hash.as_slice());

        let a = ExpandedSecretKey::from(&secret);
        let b = ExpandedSecretKey::from_bytes(&bytes);
        assert_eq!(a.scalar, b.scalar);
        assert_eq!(a.hash_prefix, b.hash_prefix);
    }

    #[test]
    fn from_slice_rejects_bad_length() {
        assert!(ExpandedSecretKey::from_slice(&[0u8; 63]).is_err());
        assert!(ExpandedSecretKey::from_slice(&[0u8; 64]).is_ok());
    }
}

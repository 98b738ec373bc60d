// -*- mode: rust; -*-
//
// This file is part of c25519-edsign.
// Copyright (c) 2017-2019 isis lovecruft
// See LICENSE for licensing information.
//
// Authors:
// - isis agora lovecruft <isis@patternsinthevoid.net>

//! The bare, byte-oriented Ed25519 operations.
//!
//! These three functions take and return fixed-size byte arrays and never
//! fail.  They are meant for callers sitting on the far side of a narrow
//! boundary (a C ABI, a WASM export table) who cannot hold on to typed keys.
//! Everyone else should prefer [`SigningKey`](crate::SigningKey) and
//! [`VerifyingKey`](crate::VerifyingKey).
//!
//! # Example
//!
//! ```
//! use c25519_edsign::edsign;
//!
//! let secret = [0x42u8; 32];
//! let public = edsign::derive_public_key(&secret);
//!
//! let signature = edsign::sign(&public, &secret, b"hello");
//! assert!(edsign::verify(&signature, &public, b"hello"));
//! assert!(!edsign::verify(&signature, &public, b"hullo"));
//! ```

use c25519::edwards::{CompressedEdwardsY, EdwardsPoint};
use sha2::Sha512;

use crate::constants::*;
use crate::hazmat::ExpandedSecretKey;
use crate::signature::Signature;
use crate::signing::SecretKey;
use crate::verifying::VerifyingKey;

/// Derive the packed public key \\( aB \\) of a 32-byte secret key.
///
/// Any 32 bytes are a valid secret key.
pub fn derive_public_key(secret: &SecretKey) -> [u8; PUBLIC_KEY_LENGTH] {
    let expanded = ExpandedSecretKey::from(secret);
    EdwardsPoint::mul_base(&expanded.scalar).compress().to_bytes()
}

/// Produce the 64-byte signature `R || s` of `message`.
///
/// `public` is hashed into the challenge as given, without being checked
/// against `secret`.  Passing anything other than
/// `derive_public_key(secret)` yields a signature nobody can verify, and,
/// repeated over several public keys for one message, leaks the secret
/// scalar.
pub fn sign(
    public: &[u8; PUBLIC_KEY_LENGTH],
    secret: &SecretKey,
    message: &[u8],
) -> [u8; SIGNATURE_LENGTH] {
    let expanded = ExpandedSecretKey::from(secret);
    expanded
        .raw_sign::<Sha512>(message, &CompressedEdwardsY(*public))
        .to_bytes()
}

/// Check `signature` on `message` under `public`.
///
/// An undecodable public key or `R`, a non-canonical `s`, and a failed
/// verification equation all return `false`.
pub fn verify(
    signature: &[u8; SIGNATURE_LENGTH],
    public: &[u8; PUBLIC_KEY_LENGTH],
    message: &[u8],
) -> bool {
    VerifyingKey::from_bytes(public)
        .and_then(|vk| vk.verify(message, &Signature::from_bytes(signature)))
        .is_ok()
}

#[cfg(test)]
mod test {
    #![allow(clippy::unwrap_used)]

    use super::*;

    use crate::SigningKey;

    #[test]
    fn boundary_agrees_with_typed_keys() {
        let secret = [0x9du8; 32];
        let signing_key = SigningKey::from_bytes(&secret);
        let public = derive_public_key(&secret);
        assert_eq!(public, signing_key.verifying_key().to_bytes());

        let message = b"boundary";
        let signature = sign(&public, &secret, message);
        assert_eq!(signature, signing_key.sign(message).to_bytes());
        assert!(verify(&signature, &public, message));
    }

    #[test]
    fn derive_public_key_is_deterministic() {
        let secret = [0x01u8; 32];
        assert_eq!(derive_public_key(&secret), derive_public_key(&secret));
    }

    #[test]
    fn mismatched_public_key_does_not_verify() {
        let secret = [0x21u8; 32];
        let other = derive_public_key(&[0x22u8; 32]);
        let signature = sign(&other, &secret, b"m");
        assert!(!verify(&signature, &other, b"m"));
        assert!(!verify(&signature, &derive_public_key(&secret), b"m"));
    }
}

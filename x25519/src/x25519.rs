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

//! Key types and the byte-level function for X25519 (RFC 7748).

use c25519::{constants, edwards::EdwardsPoint, montgomery::MontgomeryPoint};

use rand_core::CryptoRngCore;

#[cfg(feature = "zeroize")]
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Thirty-two bytes from `csprng`.  Secrets are stored unclamped; clamping
/// happens inside every multiplication.
fn fresh_secret<R: CryptoRngCore + ?Sized>(csprng: &mut R) -> [u8; 32] {
    let mut secret = [0u8; 32];
    csprng.fill_bytes(&mut secret);
    secret
}

/// \\( u \\)-coordinate of \\( \operatorname{clamp}(k) \cdot 9 \\).
fn public_from_secret(k: [u8; 32]) -> MontgomeryPoint {
    EdwardsPoint::mul_base_clamped(k).to_montgomery()
}

/// An X25519 public key: a Montgomery \\( u \\)-coordinate.
///
/// Public keys are not wiped on drop.  `Zeroize` is still implemented so
/// that callers who want that can arrange it.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct PublicKey(pub(crate) MontgomeryPoint);

impl PublicKey {
    /// The 32-byte encoding of this key.
    pub fn to_bytes(&self) -> [u8; 32] {
        self.0.to_bytes()
    }

    /// A view of the 32-byte encoding of this key.
    pub fn as_bytes(&self) -> &[u8; 32] {
        self.0.as_bytes()
    }
}

impl From<[u8; 32]> for PublicKey {
    fn from(u: [u8; 32]) -> PublicKey {
        PublicKey(MontgomeryPoint(u))
    }
}

impl AsRef<[u8]> for PublicKey {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

#[cfg(feature = "zeroize")]
impl Zeroize for PublicKey {
    fn zeroize(&mut self) {
        self.0.zeroize();
    }
}

/// A secret key good for exactly one exchange.
///
/// [`EphemeralSecret::diffie_hellman`] takes `self` by value, so the compiler
/// rejects a second use.  There is no way to import or export the bytes:
/// the only constructor draws them from an RNG.
pub struct EphemeralSecret(pub(crate) [u8; 32]);

impl EphemeralSecret {
    /// Draw a new secret from `csprng`.
    pub fn random_from_rng<R: CryptoRngCore + ?Sized>(csprng: &mut R) -> Self {
        EphemeralSecret(fresh_secret(csprng))
    }

    /// Agree on a [`SharedSecret`] with the holder of `their_public`,
    /// consuming this secret.
    pub fn diffie_hellman(self, their_public: &PublicKey) -> SharedSecret {
        SharedSecret(their_public.0.mul_clamped(self.0))
    }
}

impl<'a> From<&'a EphemeralSecret> for PublicKey {
    fn from(secret: &'a EphemeralSecret) -> PublicKey {
        PublicKey(public_from_secret(secret.0))
    }
}

impl Drop for EphemeralSecret {
    fn drop(&mut self) {
        #[cfg(feature = "zeroize")]
        self.0.zeroize();
    }
}

#[cfg(feature = "zeroize")]
impl ZeroizeOnDrop for EphemeralSecret {}

/// A secret key that may be used for any number of exchanges, and that can
/// be saved and restored.
///
/// Reusing a Diffie-Hellman secret weakens many protocols.  Reach for
/// [`EphemeralSecret`] unless the protocol at hand calls for a long-term
/// key.
#[cfg(feature = "static_secrets")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone)]
pub struct StaticSecret([u8; 32]);

#[cfg(feature = "static_secrets")]
impl StaticSecret {
    /// Draw a new secret from `csprng`.
    pub fn random_from_rng<R: CryptoRngCore + ?Sized>(csprng: &mut R) -> Self {
        StaticSecret(fresh_secret(csprng))
    }

    /// Agree on a [`SharedSecret`] with the holder of `their_public`.
    pub fn diffie_hellman(&self, their_public: &PublicKey) -> SharedSecret {
        SharedSecret(their_public.0.mul_clamped(self.0))
    }

    /// The stored, unclamped secret bytes.
    pub fn to_bytes(&self) -> [u8; 32] {
        self.0
    }

    /// A view of the stored, unclamped secret bytes.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

#[cfg(feature = "static_secrets")]
impl From<[u8; 32]> for StaticSecret {
    fn from(k: [u8; 32]) -> StaticSecret {
        StaticSecret(k)
    }
}

#[cfg(feature = "static_secrets")]
impl<'a> From<&'a StaticSecret> for PublicKey {
    fn from(secret: &'a StaticSecret) -> PublicKey {
        PublicKey(public_from_secret(secret.0))
    }
}

#[cfg(feature = "static_secrets")]
impl AsRef<[u8]> for StaticSecret {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

#[cfg(feature = "static_secrets")]
impl Drop for StaticSecret {
    fn drop(&mut self) {
        #[cfg(feature = "zeroize")]
        self.0.zeroize();
    }
}

#[cfg(all(feature = "static_secrets", feature = "zeroize"))]
impl ZeroizeOnDrop for StaticSecret {}

/// The output of an exchange.  Both sides compute the same value.
///
/// Hash this before using it as a key: it is a curve point, not a uniform
/// bit string.
pub struct SharedSecret(pub(crate) MontgomeryPoint);

impl SharedSecret {
    /// The 32-byte encoding of the shared point.
    pub fn to_bytes(&self) -> [u8; 32] {
        self.0.to_bytes()
    }

    /// A view of the 32-byte encoding of the shared point.
    pub fn as_bytes(&self) -> &[u8; 32] {
        self.0.as_bytes()
    }

    /// Whether the peer's public key actually influenced the result.
    ///
    /// A peer who sends one of
    /// [`X25519_LOW_ORDER_POINTS`](c25519::constants::X25519_LOW_ORDER_POINTS)
    /// forces the result to zero whatever our secret was.  The comparison
    /// runs in constant time.  Protocols differ on whether this matters;
    /// see [RFC 7748, section 6.1](https://tools.ietf.org/html/rfc7748#section-6.1).
    #[must_use]
    pub fn was_contributory(&self) -> bool {
        self.0 != MontgomeryPoint::default()
    }
}

impl AsRef<[u8]> for SharedSecret {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl Drop for SharedSecret {
    fn drop(&mut self) {
        #[cfg(feature = "zeroize")]
        self.0.zeroize();
    }
}

#[cfg(feature = "zeroize")]
impl ZeroizeOnDrop for SharedSecret {}

/// The X25519 function of RFC 7748: the \\( u \\)-coordinate of
/// \\( \operatorname{clamp}(k) \cdot u \\).
///
/// Clamping clears bits 0, 1, 2 and 255 of `k` and sets bit 254.  Bit 255
/// of `u` is ignored.  Prefer the key types above when you can: they keep
/// secrets out of plain arrays and wipe them after use.
///
/// # Example
///
/// ```
/// use c25519_x25519::{x25519, x25519_base};
///
/// let alice = [0x3au8; 32];
/// let bob = [0xc5u8; 32];
/// let from_alice = x25519(alice, x25519_base(bob));
/// let from_bob = x25519(bob, x25519_base(alice));
/// assert_eq!(from_alice, from_bob);
/// ```
pub fn x25519(k: [u8; 32], u: [u8; 32]) -> [u8; 32] {
    MontgomeryPoint(u).mul_clamped(k).to_bytes()
}

/// [`x25519`] with \\( u = 9 \\): the public key of `k`.
pub fn x25519_base(k: [u8; 32]) -> [u8; 32] {
    public_from_secret(k).to_bytes()
}

/// The encoding of \\( u = 9 \\).
pub const X25519_BASEPOINT_BYTES: [u8; 32] = constants::X25519_BASEPOINT.0;

#[cfg(test)]
mod test {
    use super::*;

    use hex_literal::hex;

    #[test]
    fn rfc7748_scalar_multiplication() {
        let cases = [
            (
                hex!("a546e36bf0527c9d3b16154b82465edd62144c0ac1fc5a18506a2244ba449ac4"),
                hex!("e6db6867583030db3594c1a424b15f7c726624ec26b3353b10a903a6d0ab1c4c"),
                hex!("c3da55379de9c6908e94ea4df28d084f32eccf03491c71f754b4075577a28552"),
            ),
            (
                hex!("4b66e9d4d1b4673c5ad22691957d6af5c11b6421e0ea01d42ca4169e7918ba0d"),
                hex!("e5210f12786811d3f4b7959d0538ae2c31dbe7106fc03c3efc4cd549c715a493"),
                hex!("95cbde9476e8907d7aade45cb4b873f88b595a68799fa152e6f8f7647aac7957"),
            ),
        ];
        for (k, u, out) in cases {
            assert_eq!(x25519(k, u), out);
        }
    }

    /// RFC 7748 section 5.2: feed each output back as the next scalar.
    #[test]
    fn rfc7748_iterated_one_thousand_times() {
        let mut k = X25519_BASEPOINT_BYTES;
        let mut u = X25519_BASEPOINT_BYTES;
        for round in 1..=1000 {
            let next = x25519(k, u);
            u = k;
            k = next;
            if round == 1 {
                assert_eq!(
                    k,
                    hex!("422c8e7a6227d7bca1350b3e2bb7279f7897b87bb6854b783c60e80311ae3079")
                );
            }
        }
        assert_eq!(
            k,
            hex!("684cf59ba83309552800ef566f2f4d3c1c3887c49360e3875f2eb94d99532c51")
        );
    }

    #[test]
    fn base_agrees_with_generic_ladder() {
        let k = [0x5du8; 32];
        assert_eq!(x25519_base(k), x25519(k, X25519_BASEPOINT_BYTES));
    }

    #[test]
    fn ephemeral_exchange_is_symmetric() {
        let alice = EphemeralSecret([0x11u8; 32]);
        let bob = EphemeralSecret([0x22u8; 32]);
        let alice_public = PublicKey::from(&alice);
        let bob_public = PublicKey::from(&bob);

        let alice_shared = alice.diffie_hellman(&bob_public);
        let bob_shared = bob.diffie_hellman(&alice_public);
        assert_eq!(alice_shared.as_bytes(), bob_shared.as_bytes());
        assert!(alice_shared.was_contributory());
    }

    #[test]
    fn low_order_public_key_is_not_contributory() {
        for point in constants::X25519_LOW_ORDER_POINTS {
            let shared = EphemeralSecret([0x33u8; 32]).diffie_hellman(&PublicKey(point));
            assert!(!shared.was_contributory());
        }
    }
}

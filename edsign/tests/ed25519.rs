// -*- mode: rust; -*-
//
// This file is part of c25519-edsign.
// Copyright (c) 2017-2019 isis lovecruft
// See LICENSE for licensing information.
//
// Authors:
// - isis agora lovecruft <isis@patternsinthevoid.net>

//! Signing and verification against published vectors and hostile input.

use c25519_edsign::*;

use hex_literal::hex;

/// One RFC 8032 section 7.1 test case.
struct Rfc8032 {
    secret: [u8; 32],
    public: [u8; 32],
    message: &'static [u8],
    signature: [u8; 64],
}

const RFC8032: [Rfc8032; 4] = [
    Rfc8032 {
        secret: hex!("9d61b19deffd5a60ba844af492ec2cc44449c5697b326919703bac031cae7f60"),
        public: hex!("d75a980182b10ab7d54bfed3c964073a0ee172f3daa62325af021a68f707511a"),
        message: b"",
        signature: hex!(
            "e5564300c360ac729086e2cc806e828a84877f1eb8e5d974d873e065224901555fb8821590a33bacc61e39701cf9b46bd25bf5f0595bbe24655141438e7a100b"
        ),
    },
    Rfc8032 {
        secret: hex!("4ccd089b28ff96da9db6c346ec114e0f5b8a319f35aba624da8cf6ed4fb8a6fb"),
        public: hex!("3d4017c3e843895a92b70aa74d1b7ebc9c982ccf2ec4968cc0cd55f12af4660c"),
        message: &hex!("72"),
        signature: hex!(
            "92a009a9f0d4cab8720e820b5f642540a2b27b5416503f8fb3762223ebdb69da085ac1e43e15996e458f3613d0f11d8c387b2eaeb4302aeeb00d291612bb0c00"
        ),
    },
    Rfc8032 {
        secret: hex!("c5aa8df43f9f837bedb7442f31dcb7b166d38535076f094b85ce3a2e0b4458f7"),
        public: hex!("fc51cd8e6218a1a38da47ed00230f0580816ed13ba3303ac5deb911548908025"),
        message: &hex!("af82"),
        signature: hex!(
            "6291d657deec24024827e69c3abe01a30ce548a284743a445e3680d7db5ac3ac18ff9b538d16f290ae67f760984dc6594a7c15e9716ed28dc027beceea1ec40a"
        ),
    },
    // TEST SHA(abc): the message is the SHA-512 digest of "abc".
    Rfc8032 {
        secret: hex!("833fe62409237b9d62ec77587520911e9a759cec1d19755b7da901b96dca3d42"),
        public: hex!("ec172b93ad5e563bf4932c70e1245034c35467ef2efd4d64ebf819683467e2bf"),
        message: &hex!(
            "ddaf35a193617abacc417349ae20413112e6fa4e89a97ea20a9eeee64b55d39a2192992a274fc1a836ba3c23a3feebbd454d4423643ce80e2a9ac94fa54ca49f"
        ),
        signature: hex!(
            "dc2a4459e7369633a52b1bf277839a00201009a3efbf3ecb69bea2186c26b58909351fc9ac90b3ecfdfbc7c66431e0303dca179c138ac17ad9bef1177331a704"
        ),
    },
];

/// \\( \ell \\), little-endian.
const ELL: [u8; 32] = hex!("edd3f55c1a631258d69cf7a2def9de1400000000000000000000000000000010");

mod typed_keys {
    use super::*;

    #[test]
    fn rfc8032() {
        for (n, case) in RFC8032.iter().enumerate() {
            let signing_key = SigningKey::from_bytes(&case.secret);
            let verifying_key = VerifyingKey::from_bytes(&case.public).unwrap();
            assert_eq!(signing_key.verifying_key(), verifying_key, "case {}", n);

            let signature = signing_key.sign(case.message);
            assert_eq!(signature.to_bytes(), case.signature, "case {}", n);
            assert_eq!(signature, Signature::from_bytes(&case.signature));

            assert!(verifying_key.verify(case.message, &signature).is_ok(), "case {}", n);
            assert!(
                verifying_key.verify_strict(case.message, &signature).is_ok(),
                "case {}",
                n
            );
            assert!(signing_key.verify(case.message, &signature).is_ok());
        }
    }

    #[test]
    fn keypair_bytes_are_secret_then_public() {
        let case = &RFC8032[1];
        let keypair = SigningKey::from_bytes(&case.secret).to_keypair_bytes();
        assert_eq!(keypair[..32], case.secret);
        assert_eq!(keypair[32..], case.public);
    }

    #[test]
    fn signature_from_slice_checks_length() {
        let case = &RFC8032[0];
        assert!(Signature::try_from(&case.signature[..]).is_ok());
        assert!(Signature::try_from(&case.signature[..63]).is_err());
    }
}

mod byte_boundary {
    use super::*;

    #[test]
    fn rfc8032() {
        for case in RFC8032.iter() {
            assert_eq!(edsign::derive_public_key(&case.secret), case.public);
            assert_eq!(
                edsign::sign(&case.public, &case.secret, case.message),
                case.signature
            );
            assert!(edsign::verify(&case.signature, &case.public, case.message));
        }
    }

    #[test]
    fn repeated_calls_agree() {
        let case = &RFC8032[2];
        assert_eq!(
            edsign::sign(&case.public, &case.secret, case.message),
            edsign::sign(&case.public, &case.secret, case.message)
        );
    }

    #[test]
    fn every_single_bit_flip_is_rejected() {
        let case = &RFC8032[2];

        let mut message = case.message.to_vec();
        for bit in 0..message.len() * 8 {
            message[bit / 8] ^= 1 << (bit % 8);
            assert!(!edsign::verify(&case.signature, &case.public, &message), "message bit {}", bit);
            message[bit / 8] ^= 1 << (bit % 8);
        }

        let mut public = case.public;
        for bit in 0..256 {
            public[bit / 8] ^= 1 << (bit % 8);
            assert!(!edsign::verify(&case.signature, &public, case.message), "key bit {}", bit);
            public[bit / 8] ^= 1 << (bit % 8);
        }

        let mut signature = case.signature;
        for bit in 0..512 {
            signature[bit / 8] ^= 1 << (bit % 8);
            assert!(!edsign::verify(&signature, &case.public, case.message), "signature bit {}", bit);
            signature[bit / 8] ^= 1 << (bit % 8);
        }

        assert!(edsign::verify(&signature, &public, &message));
    }
}

mod malformed {
    use super::*;

    /// `a + b` on little-endian 256-bit integers that do not overflow.
    fn add(a: &[u8; 32], b: &[u8; 32]) -> [u8; 32] {
        let mut sum = [0u8; 32];
        let mut carry = 0u16;
        for i in 0..32 {
            let t = a[i] as u16 + b[i] as u16 + carry;
            sum[i] = t as u8;
            carry = t >> 8;
        }
        assert_eq!(carry, 0);
        sum
    }

    #[test]
    fn unreduced_s_is_rejected() {
        let case = &RFC8032[0];
        let key = VerifyingKey::from_bytes(&case.public).unwrap();
        let genuine = Signature::from_bytes(&case.signature);

        // s + l satisfies the same group equation as s.
        let shifted = Signature::from_components(*genuine.r_bytes(), add(genuine.s_bytes(), &ELL));
        assert!(key.verify(case.message, &shifted).is_err());
        assert!(key.verify_strict(case.message, &shifted).is_err());
        assert!(!edsign::verify(&shifted.to_bytes(), &case.public, case.message));

        let s_is_ell = Signature::from_components(*genuine.r_bytes(), ELL);
        assert!(key.verify(case.message, &s_is_ell).is_err());
    }

    #[test]
    fn points_that_do_not_decode_are_rejected() {
        let case = &RFC8032[1];
        // No curve point has y = 2.
        let mut bogus = [0u8; 32];
        bogus[0] = 2;

        assert!(VerifyingKey::from_bytes(&bogus).is_err());
        assert!(!edsign::verify(&case.signature, &bogus, case.message));

        let mut signature = case.signature;
        signature[..32].copy_from_slice(&bogus);
        let key = VerifyingKey::from_bytes(&case.public).unwrap();
        assert!(key.verify(case.message, &Signature::from_bytes(&signature)).is_err());
        assert!(!edsign::verify(&signature, &case.public, case.message));
    }
}

mod torsion {
    use super::*;

    use c25519::constants::{ED25519_BASEPOINT_POINT, EIGHT_TORSION};
    use c25519::edwards::EdwardsPoint;
    use c25519::scalar::Scalar;
    use sha2::{Digest, Sha512};

    fn challenge(r: &EdwardsPoint, a: &EdwardsPoint, message: &[u8]) -> Scalar {
        Scalar::from_hash(
            Sha512::new()
                .chain_update(r.compress().as_bytes())
                .chain_update(a.compress().as_bytes())
                .chain_update(message),
        )
    }

    /// With \\( A = (0, -1) \\), of order two, \\( [k]A = A \\) for odd
    /// \\( k \\).  So once both challenges are odd, \\( R = [s]B + A \\)
    /// satisfies \\( [s]B = R + [k]A \\) for both messages.
    #[test]
    fn one_signature_for_two_messages_needs_a_weak_key() {
        let first = b"Send 100 USD to Alice";
        let second = b"Send 100000 USD to Alice";
        let a = EIGHT_TORSION[4];

        let (r, s) = (1u64..)
            .map(|n| {
                let s = Scalar::from(n);
                (&(&s * &ED25519_BASEPOINT_POINT) + &a, s)
            })
            .find(|(r, _)| {
                challenge(r, &a, first).as_bytes()[0] & 1 == 1
                    && challenge(r, &a, second).as_bytes()[0] & 1 == 1
            })
            .unwrap();

        let key = VerifyingKey::from_bytes(a.compress().as_bytes()).unwrap();
        let signature = Signature::from_components(r.compress().to_bytes(), s.to_bytes());

        assert!(key.is_weak());
        assert!(key.verify(first, &signature).is_ok());
        assert!(key.verify(second, &signature).is_ok());
        assert!(key.verify_strict(first, &signature).is_err());
        assert!(key.verify_strict(second, &signature).is_err());
    }
}

#[cfg(feature = "rand_core")]
mod random_keys {
    use super::*;

    use rand::rngs::OsRng;
    use std::collections::HashSet;

    #[test]
    fn sign_and_verify() {
        let signing_key = SigningKey::generate(&mut OsRng);
        let verifying_key = signing_key.verifying_key();
        let signature = signing_key.sign(b"correct message");

        assert!(!verifying_key.is_weak());
        assert!(verifying_key.verify(b"correct message", &signature).is_ok());
        assert!(verifying_key.verify_strict(b"correct message", &signature).is_ok());
        assert!(verifying_key.verify(b"other message", &signature).is_err());
        assert!(verifying_key.verify_strict(b"other message", &signature).is_err());
    }

    #[test]
    fn typed_and_byte_apis_agree_across_lengths() {
        let signing_key = SigningKey::generate(&mut OsRng);
        let public = signing_key.verifying_key().to_bytes();
        let message: Vec<u8> = (0..1031u32).map(|i| (i * 7) as u8).collect();

        for len in [0usize, 1, 63, 64, 65, 127, 128, 129, 1031] {
            let signature = edsign::sign(&public, signing_key.as_bytes(), &message[..len]);
            assert_eq!(signature, signing_key.sign(&message[..len]).to_bytes());
            assert!(edsign::verify(&signature, &public, &message[..len]));
        }
    }

    #[test]
    fn verifying_keys_hash_by_encoding() {
        let first = SigningKey::generate(&mut OsRng).verifying_key();
        let second = SigningKey::generate(&mut OsRng).verifying_key();

        let mut keys = HashSet::new();
        assert!(keys.insert(first));
        assert!(!keys.insert(first));
        assert!(keys.insert(second));
        assert_eq!(keys.len(), 2);
    }

    #[test]
    fn montgomery_image_recovers_the_point() {
        let verifying_key = SigningKey::generate(&mut OsRng).verifying_key();
        let point = verifying_key.to_edwards();
        assert_eq!(verifying_key.to_bytes(), point.compress().to_bytes());

        let u = verifying_key.to_montgomery();
        let even = u.to_edwards(0).unwrap();
        let odd = u.to_edwards(1).unwrap();
        assert_ne!(even, odd);
        assert!(point == even || point == odd);
    }
}

#[cfg(feature = "serde")]
mod serialisation {
    use super::*;

    #[derive(Debug, PartialEq, serde::Serialize, serde::Deserialize)]
    struct Stored {
        key: SigningKey,
        public: VerifyingKey,
        signature: Signature,
    }

    #[test]
    fn bincode_lengths() {
        let case = &RFC8032[3];
        let signing_key = SigningKey::from_bytes(&case.secret);
        // Byte strings carry a u64 length prefix; the signature is a tuple.
        assert_eq!(bincode::serialized_size(&signing_key).unwrap(), 8 + 32);
        assert_eq!(bincode::serialized_size(&signing_key.verifying_key()).unwrap(), 8 + 32);
        assert_eq!(
            bincode::serialized_size(&Signature::from_bytes(&case.signature)).unwrap(),
            64
        );

        let encoded = bincode::serialize(&signing_key.verifying_key()).unwrap();
        assert_eq!(encoded[8..], case.public);
    }

    #[test]
    fn bincode_struct_round_trip() {
        let case = &RFC8032[3];
        let stored = Stored {
            key: SigningKey::from_bytes(&case.secret),
            public: VerifyingKey::from_bytes(&case.public).unwrap(),
            signature: Signature::from_bytes(&case.signature),
        };
        let encoded = bincode::serialize(&stored).unwrap();
        let decoded: Stored = bincode::deserialize(&encoded).unwrap();
        assert_eq!(decoded, stored);
        assert_eq!(decoded.key.to_bytes(), case.secret);
    }

    #[test]
    fn undecodable_public_key_fails_to_deserialize() {
        let mut encoded = bincode::serialize(&VerifyingKey::from_bytes(&RFC8032[0].public).unwrap())
            .unwrap();
        encoded[8..].copy_from_slice(&[0u8; 32]);
        encoded[8] = 2;
        assert!(bincode::deserialize::<VerifyingKey>(&encoded).is_err());
    }
}

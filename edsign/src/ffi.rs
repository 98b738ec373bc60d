// -*- mode: rust; -*-
//
// This file is part of c25519-edsign.
// Copyright (c) 2017-2019 isis lovecruft
// See LICENSE for licensing information.
//
// Authors:
// - isis agora lovecruft <isis@patternsinthevoid.net>

//! C ABI exports of the [`edsign`](crate::edsign) operations.
//!
//! The prototypes are
//!
//! ```c
//! void edsign_sec_to_pub(uint8_t *pub, const uint8_t *secret);
//! void edsign_sign(uint8_t *signature, const uint8_t *pub,
//!                  const uint8_t *secret,
//!                  const uint8_t *message, size_t len);
//! uint8_t edsign_verify(const uint8_t *signature, const uint8_t *pub,
//!                       const uint8_t *message, size_t len);
//! ```
//!
//! Secret keys and public keys are 32 bytes, signatures 64 bytes.  A null
//! pointer makes the two writers do nothing and makes `edsign_verify`
//! report failure.  `message` may be null when `len` is zero.

use core::{ptr, slice};

use crate::constants::*;
use crate::edsign;

/// Borrow `len` bytes at `ptr`, treating a null pointer as the empty message when `len == 0`.
///
/// # Safety
///
/// A non-null `ptr` must be valid for reads of `len` bytes.
unsafe fn message<'a>(ptr: *const u8, len: usize) -> Option<&'a [u8]> {
    if len == 0 {
        Some(&[])
    } else if ptr.is_null() {
        None
    } else {
        Some(slice::from_raw_parts(ptr, len))
    }
}

/// Copy `N` bytes out of `ptr`, or `None` if it is null.  No alignment is
/// assumed.
///
/// # Safety
///
/// A non-null `ptr` must be valid for reads of `N` bytes.
unsafe fn read_array<const N: usize>(ptr: *const u8) -> Option<[u8; N]> {
    if ptr.is_null() {
        None
    } else {
        Some(ptr::read_unaligned(ptr as *const [u8; N]))
    }
}

/// Write the public key of `secret` to `public`.
///
/// # Safety
///
/// `public` must be valid for writes of 32 bytes and `secret` valid for reads of 32 bytes.
#[no_mangle]
pub unsafe extern "C" fn edsign_sec_to_pub(public: *mut u8, secret: *const u8) {
    if public.is_null() {
        return;
    }
    if let Some(secret) = read_array::<SECRET_KEY_LENGTH>(secret) {
        let derived = edsign::derive_public_key(&secret);
        ptr::copy_nonoverlapping(derived.as_ptr(), public, PUBLIC_KEY_LENGTH);
    }
}

/// Write the signature of `message[..len]` under (`public`, `secret`) to `signature`.
///
/// # Safety
///
/// `signature` must be valid for writes of 64 bytes, `public` and `secret` valid for reads of 32
/// bytes, and `message` valid for reads of `len` bytes.
#[no_mangle]
pub unsafe extern "C" fn edsign_sign(
    signature: *mut u8,
    public: *const u8,
    secret: *const u8,
    message_ptr: *const u8,
    len: usize,
) {
    if signature.is_null() {
        return;
    }
    let (Some(public), Some(secret), Some(message)) = (
        read_array::<PUBLIC_KEY_LENGTH>(public),
        read_array::<SECRET_KEY_LENGTH>(secret),
        message(message_ptr, len),
    ) else {
        return;
    };
    let sig = edsign::sign(&public, &secret, message);
    ptr::copy_nonoverlapping(sig.as_ptr(), signature, SIGNATURE_LENGTH);
}

/// Return `1` if `signature` is a valid signature on `message[..len]` under `public`, `0`
/// otherwise.
///
/// # Safety
///
/// `signature` must be valid for reads of 64 bytes, `public` valid for reads of 32 bytes, and
/// `message` valid for reads of `len` bytes.
#[no_mangle]
pub unsafe extern "C" fn edsign_verify(
    signature: *const u8,
    public: *const u8,
    message_ptr: *const u8,
    len: usize,
) -> u8 {
    match (
        read_array::<SIGNATURE_LENGTH>(signature),
        read_array::<PUBLIC_KEY_LENGTH>(public),
        message(message_ptr, len),
    ) {
        (Some(signature), Some(public), Some(message)) => {
            edsign::verify(&signature, &public, message) as u8
        }
        _ => 0,
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn exports_round_trip() {
        let secret = [0x77u8; 32];
        let message = b"over the boundary";
        let mut public = [0u8; 32];
        let mut signature = [0u8; 64];

        unsafe {
            edsign_sec_to_pub(public.as_mut_ptr(), secret.as_ptr());
            edsign_sign(
                signature.as_mut_ptr(),
                public.as_ptr(),
                secret.as_ptr(),
                message.as_ptr(),
                message.len(),
            );
            assert_eq!(
                edsign_verify(
                    signature.as_ptr(),
                    public.as_ptr(),
                    message.as_ptr(),
                    message.len()
                ),
                1
            );
            assert_eq!(
                edsign_verify(signature.as_ptr(), public.as_ptr(), message.as_ptr(), 4),
                0
            );
        }
        assert_eq!(public, edsign::derive_public_key(&secret));
        assert_eq!(signature, edsign::sign(&public, &secret, message));
    }

    #[test]
    fn empty_message_may_be_null() {
        let secret = [0x01u8; 32];
        let public = edsign::derive_public_key(&secret);
        let mut signature = [0u8; 64];
        unsafe {
            edsign_sign(
                signature.as_mut_ptr(),
                public.as_ptr(),
                secret.as_ptr(),
                ptr::null(),
                0,
            );
            assert_eq!(
                edsign_verify(signature.as_ptr(), public.as_ptr(), ptr::null(), 0),
                1
            );
        }
    }

    #[test]
    fn null_pointers_fail_closed() {
        let mut out = [0xaau8; 64];
        unsafe {
            edsign_sec_to_pub(out.as_mut_ptr(), ptr::null());
            edsign_sign(out.as_mut_ptr(), ptr::null(), ptr::null(), ptr::null(), 0);
            assert_eq!(edsign_verify(ptr::null(), ptr::null(), ptr::null(), 0), 0);
            assert_eq!(
                edsign_verify(out.as_ptr(), out.as_ptr(), ptr::null(), 10),
                0
            );
        }
        assert_eq!(out, [0xaau8; 64]);
    }

    #[test]
    fn keys_and_signatures_may_be_unaligned() {
        let secret = [0x5cu8; 32];
        let public = edsign::derive_public_key(&secret);
        let message = b"odd offsets";
        let signature = edsign::sign(&public, &secret, message);

        // One spare byte in front puts every buffer at an odd address.
        let mut secret_buf = [0u8; 33];
        let mut public_buf = [0u8; 33];
        let mut signature_buf = [0u8; 65];
        secret_buf[1..].copy_from_slice(&secret);
        signature_buf[1..].copy_from_slice(&signature);

        unsafe {
            edsign_sec_to_pub(public_buf[1..].as_mut_ptr(), secret_buf[1..].as_ptr());
            assert_eq!(
                edsign_verify(
                    signature_buf[1..].as_ptr(),
                    public_buf[1..].as_ptr(),
                    message.as_ptr(),
                    message.len()
                ),
                1
            );
        }
        assert_eq!(public_buf[1..], public);
    }
}

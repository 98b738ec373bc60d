// -*- mode: rust; -*-
//
// This file is part of c25519-x25519.
// Copyright (c) 2017-2021 isis lovecruft
// See LICENSE for licensing information.
//
// Authors:
// - isis agora lovecruft <isis@patternsinthevoid.net>

//! C ABI exports of the byte-oriented x25519 function.
//!
//! The prototypes are
//!
//! ```c
//! void c25519_smult(uint8_t *shared, const uint8_t *public, const uint8_t *private);
//! void c25519_sbasemult(uint8_t *public, const uint8_t *private);
//! ```
//!
//! Every buffer is 32 bytes.  Private keys are clamped before use, so callers
//! may hand over raw random bytes.  A null pointer makes the call a no-op.

use core::ptr;

use crate::x25519::{x25519, x25519_base};

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

/// Write the Diffie-Hellman shared secret of `private` and `public` to `shared`.
///
/// # Safety
///
/// `shared` must be valid for writes of 32 bytes, `public` and `private` valid for reads of 32
/// bytes.
#[no_mangle]
pub unsafe extern "C" fn c25519_smult(shared: *mut u8, public: *const u8, private: *const u8) {
    if shared.is_null() {
        return;
    }
    let (Some(u), Some(k)) = (read_array::<32>(public), read_array::<32>(private)) else {
        return;
    };
    let out = x25519(k, u);
    ptr::copy_nonoverlapping(out.as_ptr(), shared, 32);
}

/// Write the public key of `private` to `public`.
///
/// # Safety
///
/// `public` must be valid for writes of 32 bytes and `private` valid for reads of 32 bytes.
#[no_mangle]
pub unsafe extern "C" fn c25519_sbasemult(public: *mut u8, private: *const u8) {
    if public.is_null() {
        return;
    }
    let Some(k) = read_array::<32>(private) else {
        return;
    };
    let out = x25519_base(k);
    ptr::copy_nonoverlapping(out.as_ptr(), public, 32);
}

#[cfg(test)]
mod test {
    use super::*;

    use crate::X25519_BASEPOINT_BYTES;

    #[test]
    fn exports_agree_with_x25519() {
        let alice = [0x0au8; 32];
        let bob = [0xb0u8; 32];
        let mut alice_public = [0u8; 32];
        let mut bob_public = [0u8; 32];
        let mut alice_shared = [0u8; 32];
        let mut bob_shared = [0u8; 32];

        unsafe {
            c25519_sbasemult(alice_public.as_mut_ptr(), alice.as_ptr());
            c25519_sbasemult(bob_public.as_mut_ptr(), bob.as_ptr());
            c25519_smult(alice_shared.as_mut_ptr(), bob_public.as_ptr(), alice.as_ptr());
            c25519_smult(bob_shared.as_mut_ptr(), alice_public.as_ptr(), bob.as_ptr());
        }

        assert_eq!(alice_public, x25519(alice, X25519_BASEPOINT_BYTES));
        assert_eq!(alice_shared, bob_shared);
        assert_eq!(alice_shared, x25519(alice, bob_public));
    }

    #[test]
    fn null_pointers_are_ignored() {
        let mut out = [0x55u8; 32];
        unsafe {
            c25519_sbasemult(out.as_mut_ptr(), ptr::null());
            c25519_smult(out.as_mut_ptr(), ptr::null(), out.as_ptr());
            c25519_sbasemult(ptr::null_mut(), out.as_ptr());
        }
        assert_eq!(out, [0x55u8; 32]);
    }

    #[test]
    fn keys_may_be_unaligned() {
        let private = [0x9eu8; 32];
        let public = x25519(private, X25519_BASEPOINT_BYTES);

        // One spare byte in front puts every buffer at an odd address.
        let mut private_buf = [0u8; 33];
        let mut public_buf = [0u8; 33];
        let mut shared_buf = [0u8; 33];
        private_buf[1..].copy_from_slice(&private);
        public_buf[1..].copy_from_slice(&public);

        unsafe {
            c25519_smult(
                shared_buf[1..].as_mut_ptr(),
                public_buf[1..].as_ptr(),
                private_buf[1..].as_ptr(),
            );
        }
        assert_eq!(shared_buf[1..], x25519(private, public));
    }
}

// -*- mode: rust; -*-
//
// This file is part of c25519.
// Copyright (c) 2016-2021 isis lovecruft
// Copyright (c) 2016-2019 Henry de Valence
// See LICENSE for licensing information.
//
// Authors:
// - isis agora lovecruft <isis@patternsinthevoid.net>
// - Henry de Valence <hdevalence@hdevalence.ca>

//! Operator plumbing shared by the arithmetic types.
//!
//! Every binary operator is written once, as `&Lhs op &Rhs`.  These macros
//! derive the remaining owned/borrowed combinations from that impl.

/// Forward `Lhs op Rhs`, `Lhs op &Rhs` and `&Lhs op Rhs` to `&Lhs op &Rhs`.
macro_rules! forward_binop {
    ($Op:ident, $op:ident, $Lhs:ty, $Rhs:ty => $Out:ty) => {
        impl $Op<$Rhs> for $Lhs {
            type Output = $Out;
            fn $op(self, other: $Rhs) -> $Out {
                (&self).$op(&other)
            }
        }

        impl<'r> $Op<&'r $Rhs> for $Lhs {
            type Output = $Out;
            fn $op(self, other: &'r $Rhs) -> $Out {
                (&self).$op(other)
            }
        }

        impl<'l> $Op<$Rhs> for &'l $Lhs {
            type Output = $Out;
            fn $op(self, other: $Rhs) -> $Out {
                self.$op(&other)
            }
        }
    };
}

/// Implement `Lhs op= &Rhs` and `Lhs op= Rhs` through `&Lhs op &Rhs`.
macro_rules! forward_assign_op {
    ($OpAssign:ident, $op_assign:ident, $op:ident, $Lhs:ty, $Rhs:ty) => {
        impl<'r> $OpAssign<&'r $Rhs> for $Lhs {
            fn $op_assign(&mut self, other: &'r $Rhs) {
                *self = (&*self).$op(other);
            }
        }

        impl $OpAssign<$Rhs> for $Lhs {
            fn $op_assign(&mut self, other: $Rhs) {
                *self = (&*self).$op(&other);
            }
        }
    };
}

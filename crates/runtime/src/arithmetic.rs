//! Arithmetic functions: ADD, MUL, SUB, DIV, MOD, EXPT, MOVE
//!
//! # Overflow Behavior
//!
//! Integer arithmetic uses **wrapping semantics**, the native two's
//! complement behavior of the representation:
//! - `ADD`: `INT#32767 + 1` wraps to `-32768`
//! - `SUB`: `SINT#-128 - 1` wraps to `127`
//! - `MUL`: overflow wraps around
//! - `DIV`: `MIN / -1` wraps to `MIN`
//!
//! Reals follow IEEE 754.
//!
//! # Division by zero
//!
//! `DIV` by zero is a fault (init value, `ENO = FALSE`) for every numeric
//! type, reals included. `MOD` by zero is *not* a fault: it yields `0` and
//! still reports success.

use iec_core::types::*;
use iec_core::{Fault, Outcome, Scalar};
use paste::paste;

use crate::extensible::{fold_extensible, operands};
use crate::numeric::Real;

/// Binary arithmetic of one numeric type.
pub trait Arithmetic: Scalar {
    fn plus(self, rhs: Self) -> Self;
    fn minus(self, rhs: Self) -> Self;
    fn times(self, rhs: Self) -> Self;
    /// `rhs` is never zero here.
    fn divided_by(self, rhs: Self) -> Self;
}

/// Integer remainder, with the sign of the dividend.
pub trait Modulo: Arithmetic {
    /// `rhs` is never zero here.
    fn modulo(self, rhs: Self) -> Self;
}

macro_rules! impl_integer_arithmetic {
    ($($t:ty),*) => {
        $(
            impl Arithmetic for $t {
                #[inline]
                fn plus(self, rhs: Self) -> Self { self.wrapping_add(rhs) }
                #[inline]
                fn minus(self, rhs: Self) -> Self { self.wrapping_sub(rhs) }
                #[inline]
                fn times(self, rhs: Self) -> Self { self.wrapping_mul(rhs) }
                #[inline]
                fn divided_by(self, rhs: Self) -> Self { self.wrapping_div(rhs) }
            }

            impl Modulo for $t {
                #[inline]
                fn modulo(self, rhs: Self) -> Self { self.wrapping_rem(rhs) }
            }
        )*
    };
}

impl_integer_arithmetic!(i8, i16, i32, i64, u8, u16, u32, u64);

macro_rules! impl_real_arithmetic {
    ($($t:ty),*) => {
        $(impl Arithmetic for $t {
            #[inline]
            fn plus(self, rhs: Self) -> Self { self + rhs }
            #[inline]
            fn minus(self, rhs: Self) -> Self { self - rhs }
            #[inline]
            fn times(self, rhs: Self) -> Self { self * rhs }
            #[inline]
            fn divided_by(self, rhs: Self) -> Self { self / rhs }
        })*
    };
}

impl_real_arithmetic!(f32, f64);

// =============================================================================
// Generic API
// =============================================================================

/// Extensible ADD.
pub fn add<T: Arithmetic>(ops: &[T]) -> Outcome<T> {
    fold_extensible(ops, T::plus)
}

/// Extensible MUL.
pub fn mul<T: Arithmetic>(ops: &[T]) -> Outcome<T> {
    fold_extensible(ops, T::times)
}

pub fn sub<T: Arithmetic>(in1: T, in2: T) -> T {
    in1.minus(in2)
}

pub fn div<T: Arithmetic>(in1: T, in2: T) -> Outcome<T> {
    if in2.is_zero() {
        return Err(Fault::DivisionByZero);
    }
    Ok(in1.divided_by(in2))
}

/// MOD; a zero divisor yields zero, not a fault.
pub fn modulo<T: Modulo>(in1: T, in2: T) -> T {
    if in2.is_zero() {
        return T::default();
    }
    in1.modulo(in2)
}

/// EXPT: real base raised to any numeric exponent, computed in LREAL.
pub fn expt<B: Real, E: Scalar>(base: B, exponent: E) -> B {
    B::from_f64(base.to_f64().powf(exponent.to_f64()))
}

// =============================================================================
// Exported surface
// =============================================================================

macro_rules! num_surface {
    ($t:ident) => {
        paste! {
            entry! { fn [<ADD_ $t>](count: UINT, ops: *const $t) -> $t {
                add(unsafe { operands(count, ops)? })
            } }
            entry! { fn [<ADD__ $t __ $t>](count: UINT, ops: *const $t) -> $t {
                add(unsafe { operands(count, ops)? })
            } }
            entry! { fn [<MUL_ $t>](count: UINT, ops: *const $t) -> $t {
                mul(unsafe { operands(count, ops)? })
            } }
            entry! { fn [<MUL__ $t __ $t>](count: UINT, ops: *const $t) -> $t {
                mul(unsafe { operands(count, ops)? })
            } }
            entry! { fn [<SUB_ $t>](in1: $t, in2: $t) -> $t { Ok(sub(in1, in2)) } }
            entry! { fn [<SUB__ $t __ $t __ $t>](in1: $t, in2: $t) -> $t { Ok(sub(in1, in2)) } }
            entry! { fn [<DIV_ $t>](in1: $t, in2: $t) -> $t { div(in1, in2) } }
            entry! { fn [<DIV__ $t __ $t __ $t>](in1: $t, in2: $t) -> $t { div(in1, in2) } }
        }
    };
}

with_types!(ANY_NUM: num_surface);

macro_rules! mod_surface {
    ($t:ident) => {
        paste! {
            entry! { fn [<MOD_ $t>](in1: $t, in2: $t) -> $t { Ok(modulo(in1, in2)) } }
            entry! { fn [<MOD__ $t __ $t __ $t>](in1: $t, in2: $t) -> $t { Ok(modulo(in1, in2)) } }
        }
    };
}

with_types!(ANY_INT: mod_surface);

// `with_types!` hands the family member first, so the base comes first here.
macro_rules! expt_surface {
    ($base:ident, $exponent:ident) => {
        paste! {
            entry! { fn [<EXPT__ $base __ $base __ $exponent>](in1: $base, in2: $exponent) -> $base {
                Ok(expt(in1, in2))
            } }
        }
    };
}

macro_rules! expt_bases {
    ($exponent:ident) => {
        with_types!(ANY_REAL: expt_surface, $exponent);
    };
}

with_types!(ANY_NUM: expt_bases);

macro_rules! move_surface {
    ($t:ident) => {
        paste! {
            entry! { fn [<MOVE_ $t>](op: $t) -> $t { Ok(op) } }
            entry! { fn [<MOVE__ $t __ $t>](op: $t) -> $t { Ok(op) } }
        }
    };
}

with_types!(ANY: move_surface);

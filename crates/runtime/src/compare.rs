//! Comparison functions: GT, GE, EQ, LE, LT (extensible) and NE (binary)
//!
//! `GT(a, b, c)` means `a > b AND b > c`: every consecutive pair must
//! satisfy the relation, and evaluation stops at the first pair that does
//! not.
//!
//! One [`Comparator`] per type family decides the order, and MAX, MIN and
//! LIMIT use the same one:
//! - numbers and bit strings: natural order; a NaN is unordered, so every
//!   relation involving it is false except NE
//! - TIME, DATE, TOD, DT: [`time_cmp`]
//! - STRING: byte order of the first `min(len1, len2)` bytes only, so a
//!   string compares equal to each of its prefixes

use std::cmp::Ordering;

use iec_core::types::*;
use iec_core::{FixedString, Fault, Outcome, time_cmp};
use paste::paste;

use crate::extensible::operands;

/// Three-way comparison used by every comparison and selection function.
pub trait Comparator: Copy {
    /// `None` when the values are unordered (NaN).
    fn compare(&self, other: &Self) -> Option<Ordering>;
}

macro_rules! impl_scalar_comparator {
    ($($t:ty),*) => {
        $(impl Comparator for $t {
            #[inline]
            fn compare(&self, other: &Self) -> Option<Ordering> {
                self.partial_cmp(other)
            }
        })*
    };
}

impl_scalar_comparator!(bool, i8, i16, i32, i64, u8, u16, u32, u64, f32, f64);

macro_rules! impl_time_comparator {
    ($($t:ty),*) => {
        $(impl Comparator for $t {
            #[inline]
            fn compare(&self, other: &Self) -> Option<Ordering> {
                Some(time_cmp(&self.0, &other.0))
            }
        })*
    };
}

impl_time_comparator!(TIME, DATE, TOD, DT);

impl<const N: usize> Comparator for FixedString<N> {
    #[inline]
    fn compare(&self, other: &Self) -> Option<Ordering> {
        Some(self.prefix_cmp(other))
    }
}

// =============================================================================
// Generic API
// =============================================================================

fn chain<T: Comparator>(ops: &[T], accept: impl Fn(Ordering) -> bool) -> Outcome<bool> {
    if ops.is_empty() {
        return Err(Fault::MissingOperand);
    }
    Ok(ops
        .windows(2)
        .all(|pair| pair[0].compare(&pair[1]).is_some_and(&accept)))
}

pub fn gt<T: Comparator>(ops: &[T]) -> Outcome<bool> {
    chain(ops, Ordering::is_gt)
}

pub fn ge<T: Comparator>(ops: &[T]) -> Outcome<bool> {
    chain(ops, Ordering::is_ge)
}

pub fn eq<T: Comparator>(ops: &[T]) -> Outcome<bool> {
    chain(ops, Ordering::is_eq)
}

pub fn le<T: Comparator>(ops: &[T]) -> Outcome<bool> {
    chain(ops, Ordering::is_le)
}

pub fn lt<T: Comparator>(ops: &[T]) -> Outcome<bool> {
    chain(ops, Ordering::is_lt)
}

/// Binary inequality; unordered values are unequal.
pub fn ne<T: Comparator>(in1: T, in2: T) -> bool {
    in1.compare(&in2) != Some(Ordering::Equal)
}

// =============================================================================
// Exported surface
// =============================================================================

macro_rules! compare_surface {
    ($t:ident) => {
        paste! {
            entry! { fn [<GT_ $t>](count: UINT, ops: *const $t) -> BOOL {
                gt(unsafe { operands(count, ops)? })
            } }
            entry! { fn [<GT__BOOL__ $t>](count: UINT, ops: *const $t) -> BOOL {
                gt(unsafe { operands(count, ops)? })
            } }
            entry! { fn [<GE_ $t>](count: UINT, ops: *const $t) -> BOOL {
                ge(unsafe { operands(count, ops)? })
            } }
            entry! { fn [<GE__BOOL__ $t>](count: UINT, ops: *const $t) -> BOOL {
                ge(unsafe { operands(count, ops)? })
            } }
            entry! { fn [<EQ_ $t>](count: UINT, ops: *const $t) -> BOOL {
                eq(unsafe { operands(count, ops)? })
            } }
            entry! { fn [<EQ__BOOL__ $t>](count: UINT, ops: *const $t) -> BOOL {
                eq(unsafe { operands(count, ops)? })
            } }
            entry! { fn [<LE_ $t>](count: UINT, ops: *const $t) -> BOOL {
                le(unsafe { operands(count, ops)? })
            } }
            entry! { fn [<LE__BOOL__ $t>](count: UINT, ops: *const $t) -> BOOL {
                le(unsafe { operands(count, ops)? })
            } }
            entry! { fn [<LT_ $t>](count: UINT, ops: *const $t) -> BOOL {
                lt(unsafe { operands(count, ops)? })
            } }
            entry! { fn [<LT__BOOL__ $t>](count: UINT, ops: *const $t) -> BOOL {
                lt(unsafe { operands(count, ops)? })
            } }
            entry! { fn [<NE_ $t>](in1: $t, in2: $t) -> BOOL { Ok(ne(in1, in2)) } }
            entry! { fn [<NE__BOOL__ $t __ $t>](in1: $t, in2: $t) -> BOOL { Ok(ne(in1, in2)) } }
        }
    };
}

with_types!(ANY: compare_surface);

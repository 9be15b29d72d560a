//! Selection functions: SEL, MUX, MAX, MIN, LIMIT
//!
//! SEL and MUX number their inputs from 0. MAX, MIN and LIMIT order values
//! with the [`Comparator`] of their type, the same one the comparison
//! functions use.

use std::cmp::Ordering;

use iec_core::types::*;
use iec_core::{Fault, Outcome, Scalar};
use paste::paste;

use crate::compare::Comparator;
use crate::extensible::{fold_extensible, operands};

/// `in1` when `g` is TRUE, `in0` otherwise.
pub fn sel<T>(g: bool, in0: T, in1: T) -> T {
    if g { in1 } else { in0 }
}

/// The `k`-th input, counting from 0.
pub fn mux<K: Scalar, T: Copy>(k: K, inputs: &[T]) -> Outcome<T> {
    let selector = k.to_i128();
    usize::try_from(selector)
        .ok()
        .and_then(|index| inputs.get(index))
        .copied()
        .ok_or(Fault::SelectorOutOfRange {
            selector,
            count: inputs.len(),
        })
}

fn larger<T: Comparator>(acc: T, op: T) -> T {
    if acc.compare(&op) == Some(Ordering::Less) { op } else { acc }
}

fn smaller<T: Comparator>(acc: T, op: T) -> T {
    if acc.compare(&op) == Some(Ordering::Greater) { op } else { acc }
}

/// Extensible MAX; the earliest operand wins ties and unordered pairs.
pub fn max<T: Comparator>(ops: &[T]) -> Outcome<T> {
    fold_extensible(ops, larger)
}

/// Extensible MIN; the earliest operand wins ties and unordered pairs.
pub fn min<T: Comparator>(ops: &[T]) -> Outcome<T> {
    fold_extensible(ops, smaller)
}

/// Clamp `input` into `[mn, mx]`, evaluated as `MIN(MAX(input, mn), mx)`.
///
/// An inverted range (`mn > mx`) therefore always yields `mx`.
pub fn limit<T: Comparator>(mn: T, input: T, mx: T) -> T {
    smaller(larger(input, mn), mx)
}

// =============================================================================
// Exported surface
// =============================================================================

macro_rules! select_surface {
    ($t:ident) => {
        paste! {
            entry! { fn [<SEL_ $t>](g: BOOL, in0: $t, in1: $t) -> $t { Ok(sel(g, in0, in1)) } }
            entry! { fn [<SEL__ $t __BOOL__ $t __ $t>](g: BOOL, in0: $t, in1: $t) -> $t {
                Ok(sel(g, in0, in1))
            } }
            entry! { fn [<MAX_ $t>](count: UINT, ops: *const $t) -> $t {
                max(unsafe { operands(count, ops)? })
            } }
            entry! { fn [<MAX__ $t __ $t>](count: UINT, ops: *const $t) -> $t {
                max(unsafe { operands(count, ops)? })
            } }
            entry! { fn [<MIN_ $t>](count: UINT, ops: *const $t) -> $t {
                min(unsafe { operands(count, ops)? })
            } }
            entry! { fn [<MIN__ $t __ $t>](count: UINT, ops: *const $t) -> $t {
                min(unsafe { operands(count, ops)? })
            } }
            entry! { fn [<LIMIT_ $t>](mn: $t, input: $t, mx: $t) -> $t { Ok(limit(mn, input, mx)) } }
            entry! { fn [<LIMIT__ $t __ $t __ $t __ $t>](mn: $t, input: $t, mx: $t) -> $t {
                Ok(limit(mn, input, mx))
            } }

            // explicitly typed MUX takes an INT selector
            entry! { fn [<MUX_ $t>](k: INT, count: UINT, inputs: *const $t) -> $t {
                mux(k, unsafe { operands(count, inputs)? })
            } }
        }
    };
}

with_types!(ANY: select_surface);

macro_rules! mux_surface {
    ($t:ident, $k:ident) => {
        paste! {
            entry! { fn [<MUX__ $t __ $k __ $t>](k: $k, count: UINT, inputs: *const $t) -> $t {
                mux(k, unsafe { operands(count, inputs)? })
            } }
        }
    };
}

macro_rules! mux_selectors {
    ($k:ident) => {
        with_types!(ANY: mux_surface, $k);
    };
}

with_types!(ANY_INT: mux_selectors);

//! Extensible (N-ary) operator folding
//!
//! ADD, MUL, AND, OR, XOR, MAX and MIN accept any number of operands and
//! reduce them left to right with their binary form. Floating point is not
//! associative, so the fold order is part of the contract.
//!
//! Operand counts up to [`MAX_INLINE_PARAM_COUNT`] go through an unrolled
//! fold, longer lists through the general one. Both produce the same value
//! for the same operands.

use iec_core::config::MAX_INLINE_PARAM_COUNT;
use iec_core::types::UINT;
use iec_core::{Fault, Outcome};

/// Unrolled fold for 1..=8 operands; `None` for any other count.
#[inline]
pub fn fold_inline<T: Copy>(ops: &[T], f: impl Fn(T, T) -> T) -> Option<T> {
    let folded = match *ops {
        [a] => a,
        [a, b] => f(a, b),
        [a, b, c] => f(f(a, b), c),
        [a, b, c, d] => f(f(f(a, b), c), d),
        [a, b, c, d, e] => f(f(f(f(a, b), c), d), e),
        [a, b, c, d, e, g] => f(f(f(f(f(a, b), c), d), e), g),
        [a, b, c, d, e, g, h] => f(f(f(f(f(f(a, b), c), d), e), g), h),
        [a, b, c, d, e, g, h, i] => f(f(f(f(f(f(f(a, b), c), d), e), g), h), i),
        _ => return None,
    };
    Some(folded)
}

/// General fold for any non-empty operand list.
pub fn fold_variadic<T: Copy>(ops: &[T], f: impl Fn(T, T) -> T) -> Option<T> {
    let (&first, rest) = ops.split_first()?;
    Some(rest.iter().fold(first, |acc, &op| f(acc, op)))
}

/// Fold `ops` left to right, picking the unrolled path for short lists.
#[inline]
pub fn fold_extensible<T: Copy>(ops: &[T], f: impl Fn(T, T) -> T) -> Outcome<T> {
    let folded = if ops.len() <= MAX_INLINE_PARAM_COUNT {
        fold_inline(ops, &f)
    } else {
        fold_variadic(ops, &f)
    };
    folded.ok_or(Fault::MissingOperand)
}

/// View the operand array of an N-ary entry point.
///
/// A zero count or a null pointer means no operands were supplied.
///
/// # Safety
///
/// `ops` must be null or valid for reads of `count` consecutive values
/// that outlive `'a`.
#[inline]
pub unsafe fn operands<'a, T>(count: UINT, ops: *const T) -> Outcome<&'a [T]> {
    if count == 0 || ops.is_null() {
        return Err(Fault::MissingOperand);
    }
    Ok(unsafe { std::slice::from_raw_parts(ops, count as usize) })
}

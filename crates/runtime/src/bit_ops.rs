//! Bit-string functions: AND, OR, XOR, NOT, SHL, SHR, ROL, ROR
//!
//! BOOL is the one-bit bit string. AND/OR/XOR/NOT act on it logically; a
//! shift by any non-zero count empties it, a rotation never changes it.
//!
//! Shift counts are not reduced modulo the width: shifting by the width or
//! more yields zero, and so does a negative count. Rotation counts are
//! reduced modulo the width, negative counts rotating the other way.

use iec_core::types::*;
use iec_core::{Outcome, Scalar};
use paste::paste;

use crate::extensible::{fold_extensible, operands};

/// Operations of one bit-string width.
pub trait BitString: Scalar {
    fn bit_and(self, rhs: Self) -> Self;
    fn bit_or(self, rhs: Self) -> Self;
    fn bit_xor(self, rhs: Self) -> Self;
    fn complement(self) -> Self;
    /// `n` is in `1..Self::BITS`
    fn shift_left(self, n: u32) -> Self;
    /// `n` is in `1..Self::BITS`
    fn shift_right(self, n: u32) -> Self;
    /// `n` is in `0..Self::BITS`
    fn rotl(self, n: u32) -> Self;
    /// `n` is in `0..Self::BITS`
    fn rotr(self, n: u32) -> Self;
}

macro_rules! impl_bit_string {
    ($($t:ty),*) => {
        $(impl BitString for $t {
            #[inline]
            fn bit_and(self, rhs: Self) -> Self { self & rhs }
            #[inline]
            fn bit_or(self, rhs: Self) -> Self { self | rhs }
            #[inline]
            fn bit_xor(self, rhs: Self) -> Self { self ^ rhs }
            #[inline]
            fn complement(self) -> Self { !self }
            #[inline]
            fn shift_left(self, n: u32) -> Self { self << n }
            #[inline]
            fn shift_right(self, n: u32) -> Self { self >> n }
            #[inline]
            fn rotl(self, n: u32) -> Self { self.rotate_left(n) }
            #[inline]
            fn rotr(self, n: u32) -> Self { self.rotate_right(n) }
        })*
    };
}

impl_bit_string!(u8, u16, u32, u64);

impl BitString for bool {
    #[inline]
    fn bit_and(self, rhs: Self) -> Self {
        self && rhs
    }
    #[inline]
    fn bit_or(self, rhs: Self) -> Self {
        self || rhs
    }
    #[inline]
    fn bit_xor(self, rhs: Self) -> Self {
        self != rhs
    }
    #[inline]
    fn complement(self) -> Self {
        !self
    }
    #[inline]
    fn shift_left(self, _n: u32) -> Self {
        false
    }
    #[inline]
    fn shift_right(self, _n: u32) -> Self {
        false
    }
    #[inline]
    fn rotl(self, _n: u32) -> Self {
        self
    }
    #[inline]
    fn rotr(self, _n: u32) -> Self {
        self
    }
}

// =============================================================================
// Generic API
// =============================================================================

pub fn and<T: BitString>(ops: &[T]) -> Outcome<T> {
    fold_extensible(ops, T::bit_and)
}

pub fn or<T: BitString>(ops: &[T]) -> Outcome<T> {
    fold_extensible(ops, T::bit_or)
}

/// Extensible XOR; on BOOL this is true when an odd number of operands are.
pub fn xor<T: BitString>(ops: &[T]) -> Outcome<T> {
    fold_extensible(ops, T::bit_xor)
}

pub fn not<T: BitString>(op: T) -> T {
    op.complement()
}

/// Shift count as an in-range bit count, `None` when everything shifts out.
fn shift_count<T: BitString>(count: i128) -> Option<u32> {
    (0..T::BITS as i128).contains(&count).then_some(count as u32)
}

pub fn shl<T: BitString, N: Scalar>(value: T, count: N) -> T {
    match shift_count::<T>(count.to_i128()) {
        Some(0) => value,
        Some(n) => value.shift_left(n),
        None => T::default(),
    }
}

pub fn shr<T: BitString, N: Scalar>(value: T, count: N) -> T {
    match shift_count::<T>(count.to_i128()) {
        Some(0) => value,
        Some(n) => value.shift_right(n),
        None => T::default(),
    }
}

pub fn rol<T: BitString, N: Scalar>(value: T, count: N) -> T {
    value.rotl(count.to_i128().rem_euclid(T::BITS as i128) as u32)
}

pub fn ror<T: BitString, N: Scalar>(value: T, count: N) -> T {
    value.rotr(count.to_i128().rem_euclid(T::BITS as i128) as u32)
}

// =============================================================================
// Exported surface
// =============================================================================

macro_rules! logic_surface {
    ($t:ident) => {
        paste! {
            entry! { fn [<AND_ $t>](count: UINT, ops: *const $t) -> $t {
                and(unsafe { operands(count, ops)? })
            } }
            entry! { fn [<AND__ $t __ $t>](count: UINT, ops: *const $t) -> $t {
                and(unsafe { operands(count, ops)? })
            } }
            entry! { fn [<OR_ $t>](count: UINT, ops: *const $t) -> $t {
                or(unsafe { operands(count, ops)? })
            } }
            entry! { fn [<OR__ $t __ $t>](count: UINT, ops: *const $t) -> $t {
                or(unsafe { operands(count, ops)? })
            } }
            entry! { fn [<XOR_ $t>](count: UINT, ops: *const $t) -> $t {
                xor(unsafe { operands(count, ops)? })
            } }
            entry! { fn [<XOR__ $t __ $t>](count: UINT, ops: *const $t) -> $t {
                xor(unsafe { operands(count, ops)? })
            } }
            entry! { fn [<NOT_ $t>](op: $t) -> $t { Ok(not(op)) } }
            entry! { fn [<NOT__ $t __ $t>](op: $t) -> $t { Ok(not(op)) } }

            // explicitly typed shifts take an INT count
            entry! { fn [<SHL_ $t>](in1: $t, n: INT) -> $t { Ok(shl(in1, n)) } }
            entry! { fn [<SHR_ $t>](in1: $t, n: INT) -> $t { Ok(shr(in1, n)) } }
            entry! { fn [<ROL_ $t>](in1: $t, n: INT) -> $t { Ok(rol(in1, n)) } }
            entry! { fn [<ROR_ $t>](in1: $t, n: INT) -> $t { Ok(ror(in1, n)) } }
        }
    };
}

with_types!(ANY_BIT: logic_surface);

macro_rules! bool_shift_surface {
    ($n:ident) => {
        paste! {
            entry! { fn [<SHL__BOOL__ $n>](in1: BOOL, n: $n) -> BOOL { Ok(shl(in1, n)) } }
            entry! { fn [<SHR__BOOL__ $n>](in1: BOOL, n: $n) -> BOOL { Ok(shr(in1, n)) } }
            entry! { fn [<ROL__BOOL__ $n>](in1: BOOL, n: $n) -> BOOL { Ok(rol(in1, n)) } }
            entry! { fn [<ROR__BOOL__ $n>](in1: BOOL, n: $n) -> BOOL { Ok(ror(in1, n)) } }
        }
    };
}

with_types!(ANY_INT: bool_shift_surface);

macro_rules! shift_surface {
    ($t:ident, $n:ident) => {
        paste! {
            entry! { fn [<SHL__ $t __ $t __ $n>](in1: $t, n: $n) -> $t { Ok(shl(in1, n)) } }
            entry! { fn [<SHR__ $t __ $t __ $n>](in1: $t, n: $n) -> $t { Ok(shr(in1, n)) } }
            entry! { fn [<ROL__ $t __ $t __ $n>](in1: $t, n: $n) -> $t { Ok(rol(in1, n)) } }
            entry! { fn [<ROR__ $t __ $t __ $n>](in1: $t, n: $n) -> $t { Ok(ror(in1, n)) } }
        }
    };
}

macro_rules! shift_counts {
    ($n:ident) => {
        with_types!(ANY_NBIT: shift_surface, $n);
    };
}

with_types!(ANY_INT: shift_counts);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logic_folds() {
        assert_eq!(and(&[0xF0u8, 0x3C, 0xFF]), Ok(0x30));
        assert_eq!(or(&[0x01u16, 0x10, 0x100]), Ok(0x111));
        assert_eq!(xor(&[0xFFu8, 0x0F]), Ok(0xF0));
        assert_eq!(and(&[true, true, false]), Ok(false));
        assert_eq!(or(&[false, false, true]), Ok(true));
    }

    #[test]
    fn test_bool_xor_is_parity() {
        assert_eq!(xor(&[true, true, true]), Ok(true));
        assert_eq!(xor(&[true, false, true, false]), Ok(false));
        assert_eq!(xor(&[true]), Ok(true));
    }

    #[test]
    fn test_not() {
        assert_eq!(not(0x0Fu8), 0xF0);
        assert_eq!(not(0u64), u64::MAX);
        assert!(not(false));
    }

    #[test]
    fn test_shift_does_not_wrap_count() {
        assert_eq!(shl(0x81u8, 1i16), 0x02);
        assert_eq!(shr(0x81u8, 7u8), 0x01);
        assert_eq!(shl(0xFFFFu16, 16i32), 0);
        assert_eq!(shr(u64::MAX, 200u32), 0);
        assert_eq!(shl(0xABu8, 0i8), 0xAB);
        assert_eq!(shl(0xABu8, -1i8), 0);
    }

    #[test]
    fn test_bool_shift_and_rotate() {
        for n in 1..=70i32 {
            assert!(!shl(true, n), "SHL(TRUE, {})", n);
            assert!(!shr(true, n), "SHR(TRUE, {})", n);
        }
        assert!(shl(true, 0i32));
        for n in [-3i64, 0, 1, 2, 63, 64, 1000] {
            assert!(rol(true, n));
            assert!(!rol(false, n));
            assert!(ror(true, n));
        }
    }

    #[test]
    fn test_rotate_wraps_count() {
        assert_eq!(rol(0x81u8, 1i16), 0x03);
        assert_eq!(ror(0x81u8, 1i16), 0xC0);
        assert_eq!(rol(0x1234u16, 16u8), 0x1234);
        assert_eq!(rol(0x1234u16, 20u8), 0x2341);
        assert_eq!(ror(0x0000_0001u32, 33u64), 0x8000_0000);
        assert_eq!(rol(0x81u8, -1i8), ror(0x81u8, 1i8));
    }

    #[test]
    fn test_surface_names() {
        let ops = [0b1100u8, 0b1010];
        assert_eq!(call!(AND_BYTE(2, ops.as_ptr())), 0b1000);
        assert_eq!(call!(OR__BYTE__BYTE(2, ops.as_ptr())), 0b1110);
        assert_eq!(call!(XOR_BYTE(2, ops.as_ptr())), 0b0110);
        assert_eq!(call!(NOT__WORD__WORD(0)), 0xFFFF);
        assert!(!call!(SHL__BOOL__DINT(true, 3)));
        assert!(call!(ROL__BOOL__USINT(true, 9)));
        assert_eq!(call!(SHL__WORD__WORD__UINT(1, 15)), 0x8000);
        assert_eq!(call!(ROR__DWORD__DWORD__SINT(1, 1)), 0x8000_0000);
        assert_eq!(call!(SHR_LWORD(0x100, 8)), 1);
        assert!(!call!(SHR_BOOL(true, 1)));
    }
}

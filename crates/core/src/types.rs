//! IEC 61131-3 elementary data types
//!
//! The elementary types map onto Rust primitives (and, for TIME/DATE/TOD/DT
//! and STRING, onto the value types of this crate). Bit strings and unsigned
//! integers of the same width share a representation: `BYTE` and `USINT` are
//! both `u8`, they differ only in which standard functions accept them.
//!
//! [`Scalar`] is the closed trait over every numeric and bit-string type. It
//! carries the two canonical carriers used by conversions, `i128` for the
//! integer/bit family and `f64` for reals, so a conversion between any two
//! scalars is a single generic function ([`convert`]).

#![allow(non_camel_case_types)]

use std::fmt;

use crate::iecstring::IecString;
use crate::timespec::{Date, Dt, Time, Tod};

pub type BOOL = bool;
pub type BYTE = u8;
pub type WORD = u16;
pub type DWORD = u32;
pub type LWORD = u64;

pub type SINT = i8;
pub type INT = i16;
pub type DINT = i32;
pub type LINT = i64;

pub type USINT = u8;
pub type UINT = u16;
pub type UDINT = u32;
pub type ULINT = u64;

pub type REAL = f32;
pub type LREAL = f64;

pub type TIME = Time;
pub type DATE = Date;
pub type TOD = Tod;
pub type DT = Dt;

pub type STRING = IecString;

/// Alternative long names the standard allows for the time-of-day types.
pub type TIME_OF_DAY = Tod;
pub type DATE_AND_TIME = Dt;

/// A numeric or bit-string value.
///
/// `from_i128` narrows with two's-complement truncation (C-style), and
/// `from_f64` truncates toward zero, saturating at the bounds of the target
/// (NaN becomes zero). Neither ever traps.
pub trait Scalar: Copy + Default + PartialEq + PartialOrd + fmt::Debug + 'static {
    /// `true` for REAL and LREAL
    const IS_REAL: bool;

    /// Width of the representation in bits (1 for BOOL)
    const BITS: u32;

    fn to_i128(self) -> i128;
    fn to_f64(self) -> f64;
    fn from_i128(value: i128) -> Self;
    fn from_f64(value: f64) -> Self;

    fn is_zero(self) -> bool;
}

macro_rules! impl_scalar_int {
    ($($t:ty),* $(,)?) => {
        $(
            impl Scalar for $t {
                const IS_REAL: bool = false;
                const BITS: u32 = <$t>::BITS;

                #[inline]
                fn to_i128(self) -> i128 {
                    self as i128
                }
                #[inline]
                fn to_f64(self) -> f64 {
                    self as f64
                }
                #[inline]
                fn from_i128(value: i128) -> Self {
                    value as $t
                }
                #[inline]
                fn from_f64(value: f64) -> Self {
                    value as $t
                }
                #[inline]
                fn is_zero(self) -> bool {
                    self == 0
                }
            }
        )*
    };
}

impl_scalar_int!(i8, i16, i32, i64, u8, u16, u32, u64);

macro_rules! impl_scalar_real {
    ($($t:ty => $bits:expr),* $(,)?) => {
        $(
            impl Scalar for $t {
                const IS_REAL: bool = true;
                const BITS: u32 = $bits;

                #[inline]
                fn to_i128(self) -> i128 {
                    self as i128
                }
                #[inline]
                fn to_f64(self) -> f64 {
                    self as f64
                }
                #[inline]
                fn from_i128(value: i128) -> Self {
                    value as $t
                }
                #[inline]
                fn from_f64(value: f64) -> Self {
                    value as $t
                }
                #[inline]
                fn is_zero(self) -> bool {
                    self == 0.0
                }
            }
        )*
    };
}

impl_scalar_real!(f32 => 32, f64 => 64);

impl Scalar for bool {
    const IS_REAL: bool = false;
    const BITS: u32 = 1;

    #[inline]
    fn to_i128(self) -> i128 {
        self as i128
    }
    #[inline]
    fn to_f64(self) -> f64 {
        if self { 1.0 } else { 0.0 }
    }
    #[inline]
    fn from_i128(value: i128) -> Self {
        value != 0
    }
    #[inline]
    fn from_f64(value: f64) -> Self {
        value != 0.0
    }
    #[inline]
    fn is_zero(self) -> bool {
        !self
    }
}

/// Convert between any two scalars.
///
/// Integer and bit-string sources go through `i128`, so widening is exact and
/// narrowing keeps the low-order bits. Real sources go through `f64`, so
/// real-to-integer drops the fractional part. Anything to BOOL is
/// "non-zero".
#[inline]
pub fn convert<F: Scalar, T: Scalar>(value: F) -> T {
    if F::IS_REAL {
        T::from_f64(value.to_f64())
    } else {
        T::from_i128(value.to_i128())
    }
}

/// Strip the first matching typed-literal prefix (`INT#`, `T#`, ...),
/// compared ASCII case-insensitively. List longer prefixes first.
pub fn strip_type_prefix<'a>(literal: &'a str, prefixes: &[&str]) -> &'a str {
    for prefix in prefixes {
        if literal
            .get(..prefix.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
        {
            return &literal[prefix.len()..];
        }
    }
    literal
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_type_prefix() {
        assert_eq!(strip_type_prefix("INT#42", &["INT#"]), "42");
        assert_eq!(strip_type_prefix("time#1s", &["TIME#", "T#"]), "1s");
        assert_eq!(strip_type_prefix("t#1s", &["TIME#", "T#"]), "1s");
        assert_eq!(strip_type_prefix("42", &["INT#"]), "42");
        assert_eq!(strip_type_prefix("ü#", &["DT#"]), "ü#");
    }

    #[test]
    fn test_widening_is_exact() {
        assert_eq!(convert::<SINT, LINT>(-128), -128);
        assert_eq!(convert::<USINT, INT>(255), 255);
        assert_eq!(convert::<UDINT, ULINT>(u32::MAX), u32::MAX as u64);
        assert_eq!(convert::<DINT, LREAL>(-7), -7.0);
    }

    #[test]
    fn test_narrowing_keeps_low_bits() {
        assert_eq!(convert::<INT, SINT>(300), 44);
        assert_eq!(convert::<INT, USINT>(-1), 255);
        assert_eq!(convert::<ULINT, WORD>(0x1_2345), 0x2345);
    }

    #[test]
    fn test_real_to_int_truncates_toward_zero() {
        assert_eq!(convert::<REAL, INT>(2.9), 2);
        assert_eq!(convert::<LREAL, DINT>(-2.9), -2);
        assert_eq!(convert::<LREAL, USINT>(-3.5), 0);
        assert_eq!(convert::<LREAL, SINT>(1000.0), i8::MAX);
        assert_eq!(convert::<LREAL, LINT>(f64::NAN), 0);
    }

    #[test]
    fn test_bool_conversions() {
        assert!(convert::<INT, BOOL>(-5));
        assert!(!convert::<LREAL, BOOL>(0.0));
        assert!(convert::<REAL, BOOL>(0.25));
        assert_eq!(convert::<BOOL, WORD>(true), 1);
        assert_eq!(convert::<BOOL, REAL>(true), 1.0);
    }

    #[test]
    fn test_bits() {
        assert_eq!(<BOOL as Scalar>::BITS, 1);
        assert_eq!(<BYTE as Scalar>::BITS, 8);
        assert_eq!(<LWORD as Scalar>::BITS, 64);
        assert_eq!(<REAL as Scalar>::BITS, 32);
    }
}

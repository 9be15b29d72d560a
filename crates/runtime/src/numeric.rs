//! Functions of one numeric variable
//!
//! ABS over every number; SQRT, LN, LOG, EXP and the trigonometric
//! functions over REAL and LREAL, computed by the platform math routines of
//! the operand's own width. Results follow IEEE 754 (a negative SQRT is NaN,
//! LN of zero is -inf); none of these functions fails.

use iec_core::Scalar;
use iec_core::types::*;
use paste::paste;

/// Absolute value.
///
/// Signed integers negate with wraparound, so `ABS(-128)` on SINT stays
/// `-128`. Unsigned integers are returned unchanged.
pub trait Abs: Scalar {
    fn abs(self) -> Self;
}

macro_rules! impl_abs {
    (signed: $($t:ty),*) => {
        $(impl Abs for $t {
            #[inline]
            fn abs(self) -> Self {
                if self < 0 { self.wrapping_neg() } else { self }
            }
        })*
    };
    (unsigned: $($t:ty),*) => {
        $(impl Abs for $t {
            #[inline]
            fn abs(self) -> Self {
                self
            }
        })*
    };
    (real: $($t:ty),*) => {
        $(impl Abs for $t {
            #[inline]
            fn abs(self) -> Self {
                <$t>::abs(self)
            }
        })*
    };
}

impl_abs!(signed: i8, i16, i32, i64);
impl_abs!(unsigned: u8, u16, u32, u64);
impl_abs!(real: f32, f64);

/// REAL or LREAL.
pub trait Real: Abs {
    fn sqrt(self) -> Self;
    /// Natural logarithm
    fn ln(self) -> Self;
    /// Base-10 logarithm
    fn log(self) -> Self;
    fn exp(self) -> Self;
    fn sin(self) -> Self;
    fn cos(self) -> Self;
    fn tan(self) -> Self;
    fn asin(self) -> Self;
    fn acos(self) -> Self;
    fn atan(self) -> Self;
}

macro_rules! impl_real {
    ($($t:ty),*) => {
        $(impl Real for $t {
            #[inline]
            fn sqrt(self) -> Self { <$t>::sqrt(self) }
            #[inline]
            fn ln(self) -> Self { <$t>::ln(self) }
            #[inline]
            fn log(self) -> Self { <$t>::log10(self) }
            #[inline]
            fn exp(self) -> Self { <$t>::exp(self) }
            #[inline]
            fn sin(self) -> Self { <$t>::sin(self) }
            #[inline]
            fn cos(self) -> Self { <$t>::cos(self) }
            #[inline]
            fn tan(self) -> Self { <$t>::tan(self) }
            #[inline]
            fn asin(self) -> Self { <$t>::asin(self) }
            #[inline]
            fn acos(self) -> Self { <$t>::acos(self) }
            #[inline]
            fn atan(self) -> Self { <$t>::atan(self) }
        })*
    };
}

impl_real!(f32, f64);

// =============================================================================
// Exported surface
// =============================================================================

macro_rules! abs_surface {
    ($t:ident) => {
        paste! {
            entry! { fn [<ABS_ $t>](op: $t) -> $t { Ok(Abs::abs(op)) } }
            entry! { fn [<ABS__ $t __ $t>](op: $t) -> $t { Ok(Abs::abs(op)) } }
        }
    };
}

with_types!(ANY_NUM: abs_surface);

macro_rules! real_surface {
    ($t:ident, $name:ident, $method:ident) => {
        paste! {
            entry! { fn [<$name _ $t>](op: $t) -> $t { Ok(Real::$method(op)) } }
            entry! { fn [<$name __ $t __ $t>](op: $t) -> $t { Ok(Real::$method(op)) } }
        }
    };
}

macro_rules! real_functions {
    ($t:ident) => {
        real_surface!($t, SQRT, sqrt);
        real_surface!($t, LN, ln);
        real_surface!($t, LOG, log);
        real_surface!($t, EXP, exp);
        real_surface!($t, SIN, sin);
        real_surface!($t, COS, cos);
        real_surface!($t, TAN, tan);
        real_surface!($t, ASIN, asin);
        real_surface!($t, ACOS, acos);
        real_surface!($t, ATAN, atan);
    };
}

with_types!(ANY_REAL: real_functions);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_abs_signed_wraps_at_min() {
        assert_eq!(Abs::abs(-5i16), 5);
        assert_eq!(Abs::abs(7i32), 7);
        assert_eq!(Abs::abs(i8::MIN), i8::MIN);
    }

    #[test]
    fn test_abs_unsigned_is_identity() {
        assert_eq!(Abs::abs(200u8), 200);
        assert_eq!(Abs::abs(u64::MAX), u64::MAX);
    }

    #[test]
    fn test_abs_surface() {
        assert_eq!(call!(ABS_INT(-300)), 300);
        assert_eq!(call!(ABS__LREAL__LREAL(-2.5)), 2.5);
        assert_eq!(call!(ABS_UDINT(17)), 17);
    }

    #[test]
    fn test_real_functions() {
        assert_eq!(call!(SQRT_LREAL(16.0)), 4.0);
        assert_eq!(call!(SQRT__REAL__REAL(2.25)), 1.5);
        assert_eq!(call!(LOG_LREAL(1000.0)), 3.0);
        assert_eq!(call!(LN_LREAL(1.0)), 0.0);
        assert_eq!(call!(EXP_REAL(0.0)), 1.0);
        assert!((call!(SIN_LREAL(std::f64::consts::FRAC_PI_2)) - 1.0).abs() < 1e-12);
        assert!((call!(COS__LREAL__LREAL(0.0)) - 1.0).abs() < 1e-12);
        assert!(call!(TAN_LREAL(0.0)).abs() < 1e-12);
        assert!((call!(ASIN_LREAL(1.0)) - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
        assert!(call!(ACOS_REAL(1.0)).abs() < 1e-6);
        assert!((call!(ATAN__LREAL__LREAL(1.0)) - std::f64::consts::FRAC_PI_4).abs() < 1e-12);
    }

    #[test]
    fn test_domain_errors_are_ieee_not_faults() {
        assert!(call!(SQRT_LREAL(-1.0)).is_nan());
        assert_eq!(call!(LN_LREAL(0.0)), f64::NEG_INFINITY);
    }

    #[cfg(feature = "en-eno")]
    #[test]
    fn test_disabled_call_returns_init() {
        let mut eno = true;
        let value = unsafe { SQRT_LREAL(false, &mut eno, 9.0) };
        assert_eq!(value, 0.0);
        assert!(!eno);
    }
}

//! Type conversion functions: `<FROM>_TO_<TO>`, TRUNC, ROUND
//!
//! | From                  | To                            | Rule                         |
//! |-----------------------|-------------------------------|------------------------------|
//! | numbers, bit strings  | numbers, BYTE..LWORD          | [`convert`]: C-style cast    |
//! | numbers, BYTE..LWORD  | BOOL                          | non-zero                     |
//! | integers, bit strings | TIME, DATE, TOD, DT           | value in seconds             |
//! | reals                 | TIME, DATE, TOD, DT           | seconds, fraction kept       |
//! | TIME, DATE, TOD, DT   | integers, BYTE..LWORD         | whole seconds, toward zero   |
//! | TIME, DATE, TOD, DT   | reals                         | fractional seconds           |
//! | TIME, DATE, TOD, DT   | BOOL                          | not the zero instant         |
//! | DT                    | DATE, TOD                     | calendar split               |
//! | anything              | STRING                        | literal text ([`literal`])   |
//! | STRING                | anything                      | literal grammar, or a fault  |
//!
//! There is no conversion between TIME and the date types, nor from DATE or
//! TOD to any other date type.
//!
//! [`literal`]: crate::literal

use iec_core::types::*;
use iec_core::{Scalar, Temporal, Timespec, convert};
use paste::paste;

use crate::literal::{
    BoolLiteral, General, Hex, parse_bool, parse_integer, parse_real, parse_temporal, render,
};

/// Seconds (integer or real) as a time value.
pub fn scalar_to_temporal<F: Scalar, T: Temporal>(value: F) -> T {
    let ts = if F::IS_REAL {
        Timespec::from_secs_f64(value.to_f64())
    } else {
        Timespec::new(value.to_i128() as i64, 0)
    };
    T::from_timespec(ts)
}

/// A time value in seconds; integer targets drop the fraction.
pub fn temporal_to_scalar<F: Temporal, T: Scalar>(value: F) -> T {
    let ts = value.timespec();
    if T::IS_REAL {
        T::from_f64(ts.as_secs_f64())
    } else {
        T::from_i128(ts.trunc_secs() as i128)
    }
}

pub fn temporal_to_bool<F: Temporal>(value: F) -> bool {
    !value.timespec().is_zero()
}

/// Real to integer, dropping the fraction.
pub fn trunc<R: Scalar, I: Scalar>(value: R) -> I {
    I::from_f64(value.to_f64().trunc())
}

/// Real to integer, rounding half away from zero.
pub fn round<R: Scalar, I: Scalar>(value: R) -> I {
    I::from_f64(value.to_f64().round())
}

// =============================================================================
// Exported surface
// =============================================================================

macro_rules! scalar_conversion {
    ($to:ident, $from:ident) => {
        paste! {
            entry! { fn [<$from _TO_ $to>](op: $from) -> $to { Ok(convert(op)) } }
        }
    };
}

macro_rules! scalar_targets {
    ($from:ident) => {
        with_types!(ANY_NUM: scalar_conversion, $from);
        with_types!(ANY_NBIT: scalar_conversion, $from);
    };
}

with_types!(ANY_SCALAR: scalar_targets);

macro_rules! to_bool {
    ($from:ident) => {
        paste! {
            entry! { fn [<$from _TO_BOOL>](op: $from) -> BOOL { Ok(!op.is_zero()) } }
        }
    };
}

with_types!(ANY_NUM: to_bool);
with_types!(ANY_NBIT: to_bool);

macro_rules! to_temporal {
    ($to:ident, $from:ident) => {
        paste! {
            entry! { fn [<$from _TO_ $to>](op: $from) -> $to { Ok(scalar_to_temporal(op)) } }
        }
    };
}

macro_rules! temporal_targets {
    ($from:ident) => {
        with_types!(ANY_TEMPORAL: to_temporal, $from);
    };
}

with_types!(ANY_SCALAR: temporal_targets);

macro_rules! from_temporal {
    ($to:ident, $from:ident) => {
        paste! {
            entry! { fn [<$from _TO_ $to>](op: $from) -> $to { Ok(temporal_to_scalar(op)) } }
        }
    };
}

macro_rules! temporal_sources {
    ($from:ident) => {
        with_types!(ANY_NUM: from_temporal, $from);
        with_types!(ANY_NBIT: from_temporal, $from);
        paste! {
            entry! { fn [<$from _TO_BOOL>](op: $from) -> BOOL { Ok(temporal_to_bool(op)) } }
            entry! { fn [<$from _TO_ $from>](op: $from) -> $from { Ok(op) } }
        }
    };
}

with_types!(ANY_TEMPORAL: temporal_sources);

entry! { fn DT_TO_DATE(op: DT) -> DATE { Ok(op.date()) } }
entry! { fn DT_TO_TOD(op: DT) -> TOD { Ok(op.time_of_day()) } }
entry! { fn DATE_AND_TIME_TO_DATE(op: DATE_AND_TIME) -> DATE { Ok(op.date()) } }
entry! { fn DATE_AND_TIME_TO_TIME_OF_DAY(op: DATE_AND_TIME) -> TIME_OF_DAY { Ok(op.time_of_day()) } }

entry! { fn BOOL_TO_STRING(op: BOOL) -> STRING { Ok(render(BoolLiteral(op))) } }
entry! { fn STRING_TO_BOOL(op: STRING) -> BOOL { parse_bool(&op.to_string_lossy()) } }

macro_rules! bit_string_text {
    ($t:ident) => {
        paste! {
            entry! { fn [<$t _TO_STRING>](op: $t) -> STRING { Ok(render(Hex(op.into()))) } }
            entry! { fn [<STRING_TO_ $t>](op: STRING) -> $t {
                parse_integer(&op.to_string_lossy(), stringify!($t))
            } }
        }
    };
}

with_types!(ANY_NBIT: bit_string_text);

macro_rules! integer_text {
    ($t:ident) => {
        paste! {
            entry! { fn [<$t _TO_STRING>](op: $t) -> STRING { Ok(render(op)) } }
            entry! { fn [<STRING_TO_ $t>](op: STRING) -> $t {
                parse_integer(&op.to_string_lossy(), stringify!($t))
            } }
        }
    };
}

with_types!(ANY_INT: integer_text);

macro_rules! real_text {
    ($t:ident) => {
        paste! {
            entry! { fn [<$t _TO_STRING>](op: $t) -> STRING { Ok(render(General(op.into()))) } }
            entry! { fn [<STRING_TO_ $t>](op: STRING) -> $t {
                parse_real(&op.to_string_lossy(), stringify!($t))
            } }
        }
    };
}

with_types!(ANY_REAL: real_text);

macro_rules! temporal_text {
    ($t:ident) => {
        paste! {
            entry! { fn [<$t _TO_STRING>](op: $t) -> STRING { Ok(render(op)) } }
            entry! { fn [<STRING_TO_ $t>](op: STRING) -> $t { parse_temporal(&op.to_string_lossy()) } }
        }
    };
}

with_types!(ANY_TEMPORAL: temporal_text);

macro_rules! rounding {
    ($to:ident, $from:ident) => {
        paste! {
            entry! { fn [<TRUNC__ $to __ $from>](op: $from) -> $to { Ok(trunc(op)) } }
            entry! { fn [<ROUND__ $to __ $from>](op: $from) -> $to { Ok(round(op)) } }
        }
    };
}

macro_rules! rounding_sources {
    ($from:ident) => {
        with_types!(ANY_INT: rounding, $from);
    };
}

with_types!(ANY_REAL: rounding_sources);

#[cfg(test)]
mod tests {
    use super::*;
    use iec_core::{Date, Dt, Time, Tod};

    #[test]
    fn test_scalar_to_temporal() {
        assert_eq!(scalar_to_temporal::<DINT, Time>(90), Time::from_secs(90));
        assert_eq!(scalar_to_temporal::<LREAL, Time>(-1.5), Time::from_millis(-1_500));
        assert_eq!(scalar_to_temporal::<BOOL, Time>(true), Time::from_secs(1));
        let dt: Dt = scalar_to_temporal(86_400u32 + 3_600);
        assert_eq!(dt, Dt::from_ymd_hms(1970, 1, 2, 1, 0, 0).unwrap());
    }

    #[test]
    fn test_temporal_to_scalar_truncates() {
        let t = Time::from_millis(-2_750);
        assert_eq!(temporal_to_scalar::<_, DINT>(t), -2);
        assert_eq!(temporal_to_scalar::<_, LREAL>(t), -2.75);
        let noon = Tod::from_hms(12, 0, 0).unwrap();
        assert_eq!(temporal_to_scalar::<_, UDINT>(noon), 43_200);
        assert_eq!(temporal_to_scalar::<_, BYTE>(noon), (43_200 % 256) as u8);
    }

    #[test]
    fn test_temporal_to_bool() {
        assert!(!temporal_to_bool(Time::default()));
        assert!(temporal_to_bool(Time::from_nanos(1)));
        assert!(!temporal_to_bool(Date::from_ymd(1970, 1, 1).unwrap()));
    }

    #[test]
    fn test_trunc_and_round() {
        assert_eq!(trunc::<LREAL, INT>(2.7), 2);
        assert_eq!(trunc::<LREAL, INT>(-2.7), -2);
        assert_eq!(round::<LREAL, INT>(2.5), 3);
        assert_eq!(round::<LREAL, INT>(-2.5), -3);
        assert_eq!(round::<REAL, DINT>(1.49), 1);
    }

    #[test]
    fn test_scalar_surface() {
        assert_eq!(call!(INT_TO_SINT(300)), 44);
        assert_eq!(call!(REAL_TO_INT(-3.9)), -3);
        assert_eq!(call!(BOOL_TO_LREAL(true)), 1.0);
        assert_eq!(call!(LWORD_TO_BYTE(0x1234)), 0x34);
        assert!(call!(LREAL_TO_BOOL(0.001)));
        assert!(!call!(WORD_TO_BOOL(0)));
        assert_eq!(call!(TRUNC__DINT__LREAL(-7.9)), -7);
        assert_eq!(call!(ROUND__DINT__LREAL(-7.5)), -8);
    }

    #[test]
    fn test_temporal_surface() {
        assert_eq!(call!(DINT_TO_TIME(60)), Time::from_secs(60));
        assert_eq!(call!(TIME_TO_LREAL(Time::from_millis(250))), 0.25);
        assert!(call!(TIME_TO_BOOL(Time::from_millis(1))));
        let dt = Dt::from_ymd_hms(2024, 3, 1, 10, 30, 0).unwrap();
        assert_eq!(call!(DT_TO_DATE(dt)), Date::from_ymd(2024, 3, 1).unwrap());
        assert_eq!(call!(DATE_AND_TIME_TO_TIME_OF_DAY(dt)), Tod::from_hms(10, 30, 0).unwrap());
        assert_eq!(call!(TOD_TO_TOD(Tod::from_hms(1, 2, 3).unwrap())), Tod::from_hms(1, 2, 3).unwrap());
    }

    #[test]
    fn test_to_string_surface() {
        assert_eq!(call!(BOOL_TO_STRING(true)), STRING::from("TRUE"));
        assert_eq!(call!(WORD_TO_STRING(0xBEEF)), STRING::from("16#beef"));
        assert_eq!(call!(SINT_TO_STRING(-128)), STRING::from("-128"));
        assert_eq!(call!(ULINT_TO_STRING(u64::MAX)), STRING::from("18446744073709551615"));
        assert_eq!(call!(LREAL_TO_STRING(2.5)), STRING::from("2.5"));
        assert_eq!(call!(TIME_TO_STRING(Time::from_hms(1, 30, 0))), STRING::from("T#1h30m"));
        assert_eq!(
            call!(DATE_TO_STRING(Date::from_ymd(2024, 3, 1).unwrap())),
            STRING::from("D#2024-03-01")
        );
    }

    #[test]
    fn test_from_string_surface() {
        assert!(call!(STRING_TO_BOOL(STRING::from("TRUE"))));
        assert_eq!(call!(STRING_TO_BYTE(STRING::from("16#7F"))), 0x7F);
        assert_eq!(call!(STRING_TO_INT(STRING::from("-42"))), -42);
        assert_eq!(call!(STRING_TO_REAL(STRING::from("2.5E1"))), 25.0);
        assert_eq!(call!(STRING_TO_TIME(STRING::from("T#1m"))), Time::from_secs(60));
        assert_eq!(call!(STRING_TO_TOD(STRING::from("TOD#11:30:00"))), Tod::from_hms(11, 30, 0).unwrap());
    }

    #[test]
    fn test_unparsable_strings_fail_whole() {
        assert_eq!(call_failing!(STRING_TO_INT(STRING::from("12abc"))), 0);
        assert!(!call_failing!(STRING_TO_BOOL(STRING::from("maybe"))));
        assert_eq!(call_failing!(STRING_TO_LREAL(STRING::from("1.5x"))), 0.0);
        assert_eq!(call_failing!(STRING_TO_DT(STRING::from("DT#2024-03-01"))), Dt::default());
    }

    #[test]
    fn test_string_to_time_out_of_range_fails() {
        assert_eq!(call_failing!(STRING_TO_TIME(STRING::from("T#999999999999999999d"))), Time::default());
        assert_eq!(call_failing!(STRING_TO_TIME(STRING::from("T#-999999999999999999d"))), Time::default());
    }
}

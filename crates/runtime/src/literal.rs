//! Literal text for *_TO_STRING and STRING_TO_*
//!
//! Output formats:
//! - BOOL: `TRUE` / `FALSE`
//! - BYTE, WORD, DWORD, LWORD: `16#` followed by lowercase hex digits
//! - integers: plain decimal
//! - reals: 10 significant digits, trailing zeros trimmed, exponent form for
//!   very small or very large magnitudes (as C's `%.10g`)
//! - TIME, DATE, TOD, DT: their `Display` (`T#1h30m`, `D#2024-03-01`, ...)
//!
//! Input accepts the literal grammar: an optional type prefix (`INT#`,
//! `REAL#`, `T#`, ...), an optional sign, base prefixes `2#`, `8#` and `16#`,
//! `_` digit separators and real exponents. Anything else is rejected
//! whole, never partially converted.

use std::fmt::{self, Write};

use iec_core::{Fault, FixedString, Outcome, Scalar, Temporal, strip_type_prefix};

/// Significant digits of a formatted real.
const REAL_DIGITS: usize = 10;

/// `TRUE` or `FALSE`.
pub struct BoolLiteral(pub bool);

impl fmt::Display for BoolLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(if self.0 { "TRUE" } else { "FALSE" })
    }
}

/// A bit string as `16#ff`.
pub struct Hex(pub u64);

impl fmt::Display for Hex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "16#{:x}", self.0)
    }
}

/// A real with [`REAL_DIGITS`] significant digits.
pub struct General(pub f64);

fn trim_fraction(digits: &str) -> &str {
    if digits.contains('.') {
        digits.trim_end_matches('0').trim_end_matches('.')
    } else {
        digits
    }
}

impl fmt::Display for General {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = self.0;
        if value.is_nan() {
            return f.write_str("nan");
        }
        if value.is_infinite() {
            return f.write_str(if value < 0.0 { "-inf" } else { "inf" });
        }
        if value == 0.0 {
            return f.write_str(if value.is_sign_negative() { "-0" } else { "0" });
        }

        // the exponent after rounding to the requested precision decides
        // between fixed and exponent notation
        let scientific = format!("{:.*e}", REAL_DIGITS - 1, value);
        let (mantissa, exponent) = scientific.split_once('e').ok_or(fmt::Error)?;
        let exponent: i32 = exponent.parse().map_err(|_| fmt::Error)?;

        if exponent < -4 || exponent >= REAL_DIGITS as i32 {
            let sign = if exponent < 0 { '-' } else { '+' };
            write!(f, "{}e{}{:02}", trim_fraction(mantissa), sign, exponent.unsigned_abs())
        } else {
            let decimals = (REAL_DIGITS as i32 - 1 - exponent) as usize;
            let fixed = format!("{:.*}", decimals, value);
            f.write_str(trim_fraction(&fixed))
        }
    }
}

/// Format any displayable value into a STRING, truncating at capacity.
pub fn render<const N: usize>(value: impl fmt::Display) -> FixedString<N> {
    let mut out = FixedString::new();
    // a FixedString sink truncates instead of failing
    let _ = write!(out, "{}", value);
    out
}

fn rejected<T>(text: &str, target: &'static str) -> Outcome<T> {
    tracing::trace!(literal = text, type_name = target, "rejected literal");
    Err(Fault::Unparsable(target))
}

/// Strip a leading `TYPE#` whose type name is alphabetic, leaving base
/// prefixes such as `16#` alone.
fn strip_named_prefix(text: &str) -> &str {
    match text.split_once('#') {
        Some((name, rest))
            if !name.is_empty() && name.bytes().all(|b| b.is_ascii_alphabetic() || b == b'_') =>
        {
            rest
        }
        _ => text,
    }
}

/// `TRUE`, `FALSE`, `1` or `0`, optionally prefixed with `BOOL#`.
pub fn parse_bool(text: &str) -> Outcome<bool> {
    let body = strip_type_prefix(text.trim(), &["BOOL#"]);
    if body.eq_ignore_ascii_case("TRUE") || body == "1" {
        Ok(true)
    } else if body.eq_ignore_ascii_case("FALSE") || body == "0" {
        Ok(false)
    } else {
        rejected(text, "BOOL")
    }
}

/// Integer or bit-string literal, narrowed like a C cast to `T`.
pub fn parse_integer<T: Scalar>(text: &str, target: &'static str) -> Outcome<T> {
    let body = strip_named_prefix(text.trim());
    let (negative, body) = match body.as_bytes().first() {
        Some(b'-') => (true, &body[1..]),
        Some(b'+') => (false, &body[1..]),
        _ => (false, body),
    };
    let (radix, digits) = match body.split_once('#') {
        Some(("2", digits)) => (2, digits),
        Some(("8", digits)) => (8, digits),
        Some(("16", digits)) => (16, digits),
        Some(_) => return rejected(text, target),
        None => (10, body),
    };
    let digits: String = digits.chars().filter(|c| *c != '_').collect();
    // from_str_radix would accept a second sign here
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_alphanumeric()) {
        return rejected(text, target);
    }
    match i128::from_str_radix(&digits, radix) {
        Ok(magnitude) => {
            let value = if negative { magnitude.wrapping_neg() } else { magnitude };
            Ok(T::from_i128(value))
        }
        Err(_) => rejected(text, target),
    }
}

/// Real literal (`1.5`, `-2.5E-3`, `REAL#1_000.0`, or an integer).
pub fn parse_real<T: Scalar>(text: &str, target: &'static str) -> Outcome<T> {
    let body = strip_named_prefix(text.trim());
    let body: String = body.chars().filter(|c| *c != '_').collect();
    let well_formed = !body.is_empty()
        && body
            .bytes()
            .all(|b| b.is_ascii_digit() || matches!(b, b'.' | b'e' | b'E' | b'+' | b'-'));
    if !well_formed {
        return rejected(text, target);
    }
    match body.parse::<f64>() {
        Ok(value) => Ok(T::from_f64(value)),
        Err(_) => rejected(text, target),
    }
}

/// TIME, DATE, TOD or DT literal.
pub fn parse_temporal<T: Temporal>(text: &str) -> Outcome<T> {
    text.parse::<T>().inspect_err(|fault| {
        tracing::trace!(literal = text, %fault, "rejected literal");
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use iec_core::types::*;
    use iec_core::{Date, Time};

    fn text<T: fmt::Display>(value: T) -> String {
        value.to_string()
    }

    #[test]
    fn test_general_fixed_notation() {
        assert_eq!(text(General(1.5)), "1.5");
        assert_eq!(text(General(-42.0)), "-42");
        assert_eq!(text(General(0.1)), "0.1");
        assert_eq!(text(General(0.1f32 as f64)), "0.1000000015");
        assert_eq!(text(General(1234567890.0)), "1234567890");
        assert_eq!(text(General(0.0001)), "0.0001");
        assert_eq!(text(General(1.0 / 3.0)), "0.3333333333");
    }

    #[test]
    fn test_general_exponent_notation() {
        assert_eq!(text(General(12345678901.0)), "1.23456789e+10");
        assert_eq!(text(General(0.00001)), "1e-05");
        assert_eq!(text(General(-2.5e-300)), "-2.5e-300");
        assert_eq!(text(General(9_999_999_999.9)), "1e+10");
    }

    #[test]
    fn test_general_special_values() {
        assert_eq!(text(General(0.0)), "0");
        assert_eq!(text(General(-0.0)), "-0");
        assert_eq!(text(General(f64::NAN)), "nan");
        assert_eq!(text(General(f64::NEG_INFINITY)), "-inf");
    }

    #[test]
    fn test_render_truncates() {
        let out: FixedString<4> = render(BoolLiteral(false));
        assert_eq!(out.as_bytes(), b"FALS");
        let out: STRING = render(Hex(0xBEEF));
        assert_eq!(out, STRING::from("16#beef"));
    }

    #[test]
    fn test_parse_bool() {
        assert_eq!(parse_bool("TRUE"), Ok(true));
        assert_eq!(parse_bool(" false "), Ok(false));
        assert_eq!(parse_bool("BOOL#1"), Ok(true));
        assert_eq!(parse_bool("bool#FALSE"), Ok(false));
        assert_eq!(parse_bool("yes"), Err(Fault::Unparsable("BOOL")));
    }

    #[test]
    fn test_parse_integer() {
        assert_eq!(parse_integer::<INT>("42", "INT"), Ok(42));
        assert_eq!(parse_integer::<INT>("-1_000", "INT"), Ok(-1000));
        assert_eq!(parse_integer::<DINT>("DINT#+7", "DINT"), Ok(7));
        assert_eq!(parse_integer::<BYTE>("16#FF", "BYTE"), Ok(0xFF));
        assert_eq!(parse_integer::<WORD>("WORD#2#1010_1010", "WORD"), Ok(0xAA));
        assert_eq!(parse_integer::<USINT>("8#17", "USINT"), Ok(15));
        assert_eq!(parse_integer::<SINT>("300", "SINT"), Ok(44));
    }

    #[test]
    fn test_parse_integer_rejects() {
        for bad in ["", "-", "12a", "1.5", "3#12", "16#", "--1", "+-1", "INT#"] {
            assert_eq!(
                parse_integer::<INT>(bad, "INT"),
                Err(Fault::Unparsable("INT")),
                "{:?}",
                bad
            );
        }
    }

    #[test]
    fn test_parse_real() {
        assert_eq!(parse_real::<LREAL>("1.5", "LREAL"), Ok(1.5));
        assert_eq!(parse_real::<LREAL>("-2.5E-3", "LREAL"), Ok(-0.0025));
        assert_eq!(parse_real::<REAL>("REAL#1_000.25", "REAL"), Ok(1000.25));
        assert_eq!(parse_real::<LREAL>("7", "LREAL"), Ok(7.0));
        assert_eq!(parse_real::<LREAL>("inf", "LREAL"), Err(Fault::Unparsable("LREAL")));
        assert_eq!(parse_real::<LREAL>("1.2.3", "LREAL"), Err(Fault::Unparsable("LREAL")));
    }

    #[test]
    fn test_parse_temporal() {
        assert_eq!(parse_temporal::<Time>("T#1h30m"), Ok(Time::from_hms(1, 30, 0)));
        assert_eq!(parse_temporal::<Date>("D#2024-03-01"), Date::from_ymd(2024, 3, 1).ok_or(Fault::Unparsable("DATE")));
        assert_eq!(parse_temporal::<Date>("D#2024-13-01"), Err(Fault::Unparsable("DATE")));
    }
}

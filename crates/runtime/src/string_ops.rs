//! Character-string functions: LEN, LEFT, RIGHT, MID, CONCAT, INSERT,
//! DELETE, REPLACE, FIND
//!
//! Positions are 1-based; a position of 0 addresses the first character.
//! Lengths and positions arrive as any integer type and are checked here: a
//! negative value is a fault, an oversized one is clamped to the string.
//! Results longer than the capacity are truncated, never rejected.
//!
//! Everything is generic over the capacity `N`, so the same code serves
//! `STRING` and any other `FixedString<N>`.

use iec_core::types::*;
use iec_core::{Fault, FixedString, Outcome, Scalar};
use paste::paste;

use crate::extensible::operands;

/// A length or position argument as an index, rejecting negatives.
fn count_arg(value: i128, what: &'static str) -> Outcome<usize> {
    if value < 0 {
        return Err(Fault::NegativeArgument(what));
    }
    Ok(usize::try_from(value).unwrap_or(usize::MAX))
}

/// Byte index of 1-based position `p`, clamped to `len`.
fn start_index(p: usize, len: usize) -> usize {
    p.saturating_sub(1).min(len)
}

fn assemble<const N: usize>(parts: &[&[u8]]) -> FixedString<N> {
    let mut out = FixedString::new();
    for part in parts {
        out.push_bytes(part);
    }
    out
}

pub fn len<const N: usize>(s: &FixedString<N>) -> usize {
    s.len()
}

/// The first `l` characters.
pub fn left<const N: usize>(s: &FixedString<N>, l: i128) -> Outcome<FixedString<N>> {
    let bytes = s.as_bytes();
    let l = count_arg(l, "length")?.min(bytes.len());
    Ok(FixedString::from_bytes_truncating(&bytes[..l]))
}

/// The last `l` characters.
pub fn right<const N: usize>(s: &FixedString<N>, l: i128) -> Outcome<FixedString<N>> {
    let bytes = s.as_bytes();
    let l = count_arg(l, "length")?.min(bytes.len());
    Ok(FixedString::from_bytes_truncating(&bytes[bytes.len() - l..]))
}

/// `l` characters starting at position `p`; empty when `p` is past the end.
pub fn mid<const N: usize>(s: &FixedString<N>, l: i128, p: i128) -> Outcome<FixedString<N>> {
    let l = count_arg(l, "length")?;
    let p = count_arg(p, "position")?;
    let bytes = s.as_bytes();
    if p > bytes.len() {
        return Ok(FixedString::new());
    }
    let start = start_index(p, bytes.len());
    let end = start.saturating_add(l).min(bytes.len());
    Ok(FixedString::from_bytes_truncating(&bytes[start..end]))
}

/// Extensible CONCAT, stopping once the capacity is reached.
pub fn concat<const N: usize>(ops: &[FixedString<N>]) -> Outcome<FixedString<N>> {
    if ops.is_empty() {
        return Err(Fault::MissingOperand);
    }
    let mut out = FixedString::new();
    for op in ops {
        if out.len() == out.capacity() {
            break;
        }
        out.push_bytes(op.as_bytes());
    }
    Ok(out)
}

/// Insert `s2` after the first `p` characters of `s1`.
pub fn insert<const N: usize>(
    s1: &FixedString<N>,
    s2: &FixedString<N>,
    p: i128,
) -> Outcome<FixedString<N>> {
    let bytes = s1.as_bytes();
    let at = count_arg(p, "position")?.min(bytes.len());
    Ok(assemble(&[&bytes[..at], s2.as_bytes(), &bytes[at..]]))
}

/// Remove `l` characters starting at position `p`.
pub fn delete<const N: usize>(s: &FixedString<N>, l: i128, p: i128) -> Outcome<FixedString<N>> {
    let l = count_arg(l, "length")?;
    let p = count_arg(p, "position")?;
    let bytes = s.as_bytes();
    let start = start_index(p, bytes.len());
    let end = start.saturating_add(l).min(bytes.len());
    Ok(assemble(&[&bytes[..start], &bytes[end..]]))
}

/// Remove `l` characters at position `p` and put all of `s2` in their place.
pub fn replace<const N: usize>(
    s1: &FixedString<N>,
    s2: &FixedString<N>,
    l: i128,
    p: i128,
) -> Outcome<FixedString<N>> {
    let l = count_arg(l, "length")?;
    let p = count_arg(p, "position")?;
    let bytes = s1.as_bytes();
    let start = start_index(p, bytes.len());
    let end = start.saturating_add(l).min(bytes.len());
    Ok(assemble(&[&bytes[..start], s2.as_bytes(), &bytes[end..]]))
}

/// 1-based position of the first occurrence of `s2` in `s1`, 0 if absent.
/// An empty `s2` is found at position 1.
pub fn find<const N: usize>(s1: &FixedString<N>, s2: &FixedString<N>) -> usize {
    let (haystack, needle) = (s1.as_bytes(), s2.as_bytes());
    if needle.is_empty() {
        return 1;
    }
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
        .map_or(0, |index| index + 1)
}

// =============================================================================
// Exported surface
// =============================================================================

macro_rules! int_arg_surface {
    ($i:ident) => {
        paste! {
            entry! { fn [<LEN__ $i __STRING>](in1: STRING) -> $i {
                Ok(<$i as Scalar>::from_i128(len(&in1) as i128))
            } }
            entry! { fn [<LEFT__STRING__STRING__ $i>](in1: STRING, l: $i) -> STRING {
                left(&in1, l.to_i128())
            } }
            entry! { fn [<RIGHT__STRING__STRING__ $i>](in1: STRING, l: $i) -> STRING {
                right(&in1, l.to_i128())
            } }
            entry! { fn [<MID__STRING__STRING__ $i __ $i>](in1: STRING, l: $i, p: $i) -> STRING {
                mid(&in1, l.to_i128(), p.to_i128())
            } }
            entry! { fn [<INSERT__STRING__STRING__STRING__ $i>](in1: STRING, in2: STRING, p: $i) -> STRING {
                insert(&in1, &in2, p.to_i128())
            } }
            entry! { fn [<DELETE__STRING__STRING__ $i __ $i>](in1: STRING, l: $i, p: $i) -> STRING {
                delete(&in1, l.to_i128(), p.to_i128())
            } }
            entry! { fn [<REPLACE__STRING__STRING__STRING__ $i __ $i>](
                in1: STRING,
                in2: STRING,
                l: $i,
                p: $i,
            ) -> STRING {
                replace(&in1, &in2, l.to_i128(), p.to_i128())
            } }
            entry! { fn [<FIND__ $i __STRING__STRING>](in1: STRING, in2: STRING) -> $i {
                Ok(<$i as Scalar>::from_i128(find(&in1, &in2) as i128))
            } }
        }
    };
}

with_types!(ANY_INT: int_arg_surface);

// explicitly typed forms take INT lengths and positions
entry! { fn LEN_STRING(in1: STRING) -> INT { Ok(len(&in1) as INT) } }
entry! { fn LEFT_STRING(in1: STRING, l: INT) -> STRING { left(&in1, l.into()) } }
entry! { fn RIGHT_STRING(in1: STRING, l: INT) -> STRING { right(&in1, l.into()) } }
entry! { fn MID_STRING(in1: STRING, l: INT, p: INT) -> STRING { mid(&in1, l.into(), p.into()) } }
entry! { fn INSERT_STRING(in1: STRING, in2: STRING, p: INT) -> STRING {
    insert(&in1, &in2, p.into())
} }
entry! { fn DELETE_STRING(in1: STRING, l: INT, p: INT) -> STRING {
    delete(&in1, l.into(), p.into())
} }
entry! { fn REPLACE_STRING(in1: STRING, in2: STRING, l: INT, p: INT) -> STRING {
    replace(&in1, &in2, l.into(), p.into())
} }
entry! { fn FIND_STRING(in1: STRING, in2: STRING) -> INT { Ok(find(&in1, &in2) as INT) } }

entry! { fn CONCAT(count: UINT, ops: *const STRING) -> STRING {
    concat(unsafe { operands(count, ops)? })
} }
entry! { fn CONCAT_STRING(count: UINT, ops: *const STRING) -> STRING {
    concat(unsafe { operands(count, ops)? })
} }
entry! { fn CONCAT__STRING__STRING(count: UINT, ops: *const STRING) -> STRING {
    concat(unsafe { operands(count, ops)? })
} }

#[cfg(test)]
mod tests {
    use super::*;

    fn s(text: &str) -> STRING {
        STRING::from(text)
    }

    #[test]
    fn test_left_right_mid() {
        assert_eq!(left(&s("HELLO"), 3), Ok(s("HEL")));
        assert_eq!(right(&s("HELLO"), 3), Ok(s("LLO")));
        assert_eq!(mid(&s("HELLO"), 2, 2), Ok(s("EL")));
    }

    #[test]
    fn test_lengths_clamp() {
        assert_eq!(left(&s("HELLO"), 99), Ok(s("HELLO")));
        assert_eq!(right(&s("HELLO"), 99), Ok(s("HELLO")));
        assert_eq!(mid(&s("HELLO"), 99, 4), Ok(s("LO")));
        assert_eq!(left(&s("HELLO"), 0), Ok(s("")));
    }

    #[test]
    fn test_mid_positions() {
        assert_eq!(mid(&s("HELLO"), 2, 0), Ok(s("HE")));
        assert_eq!(mid(&s("HELLO"), 2, 5), Ok(s("O")));
        assert_eq!(mid(&s("HELLO"), 2, 6), Ok(s("")));
    }

    #[test]
    fn test_negative_arguments_fault() {
        assert_eq!(left(&s("HELLO"), -1), Err(Fault::NegativeArgument("length")));
        assert_eq!(right(&s("HELLO"), -1), Err(Fault::NegativeArgument("length")));
        assert_eq!(mid(&s("HELLO"), 1, -1), Err(Fault::NegativeArgument("position")));
        assert_eq!(insert(&s("A"), &s("B"), -1), Err(Fault::NegativeArgument("position")));
        assert_eq!(delete(&s("A"), -1, 1), Err(Fault::NegativeArgument("length")));
        assert_eq!(replace(&s("A"), &s("B"), 1, -2), Err(Fault::NegativeArgument("position")));
    }

    #[test]
    fn test_concat_truncates_at_capacity() {
        let ops = [
            FixedString::<4>::from("AB"),
            FixedString::<4>::from("CD"),
            FixedString::<4>::from("EF"),
        ];
        let joined = concat(&ops).unwrap();
        assert_eq!(joined.as_bytes(), b"ABCD");
        assert_eq!(joined.len(), 4);
        assert_eq!(concat(&[s("x"), s("y"), s("z")]), Ok(s("xyz")));
        assert_eq!(concat::<4>(&[]), Err(Fault::MissingOperand));
    }

    #[test]
    fn test_insert() {
        assert_eq!(insert(&s("ABCD"), &s("xy"), 2), Ok(s("ABxyCD")));
        assert_eq!(insert(&s("ABCD"), &s("xy"), 0), Ok(s("xyABCD")));
        assert_eq!(insert(&s("ABCD"), &s("xy"), 10), Ok(s("ABCDxy")));
        let small = insert(&FixedString::<5>::from("ABCD"), &FixedString::from("xy"), 2).unwrap();
        assert_eq!(small.as_bytes(), b"ABxyC");
    }

    #[test]
    fn test_delete() {
        assert_eq!(delete(&s("ABCDEF"), 2, 3), Ok(s("ABEF")));
        assert_eq!(delete(&s("ABCDEF"), 2, 0), Ok(s("CDEF")));
        assert_eq!(delete(&s("ABCDEF"), 10, 5), Ok(s("ABCD")));
        assert_eq!(delete(&s("ABCDEF"), 1, 9), Ok(s("ABCDEF")));
    }

    #[test]
    fn test_replace() {
        assert_eq!(replace(&s("ABCDEF"), &s("xyz"), 2, 3), Ok(s("ABxyzEF")));
        assert_eq!(replace(&s("ABCDEF"), &s("x"), 3, 1), Ok(s("xDEF")));
        assert_eq!(replace(&s("ABC"), &s("xy"), 0, 2), Ok(s("AxyBC")));
        let small = replace(&FixedString::<4>::from("ABCD"), &FixedString::from("wxyz"), 1, 2).unwrap();
        assert_eq!(small.as_bytes(), b"Awxy");
    }

    #[test]
    fn test_find() {
        assert_eq!(find(&s("HELLOWORLD"), &s("WORLD")), 6);
        assert_eq!(find(&s("HELLO"), &s("X")), 0);
        assert_eq!(find(&s("HELLO"), &s("H")), 1);
        assert_eq!(find(&s("HELLO"), &s("O")), 5);
        assert_eq!(find(&s("HELLO"), &s("XY")), 0);
        assert_eq!(find(&s("AAB"), &s("AB")), 2);
        assert_eq!(find(&s("AB"), &s("ABC")), 0);
        assert_eq!(find(&s("ABC"), &s("")), 1);
    }

    #[test]
    fn test_surface_names() {
        assert_eq!(call!(LEN__DINT__STRING(s("HELLO"))), 5);
        assert_eq!(call!(LEN_STRING(s(""))), 0);
        assert_eq!(call!(LEFT__STRING__STRING__ULINT(s("HELLO"), 3)), s("HEL"));
        assert_eq!(call!(RIGHT_STRING(s("HELLO"), 3)), s("LLO"));
        assert_eq!(call!(MID__STRING__STRING__SINT__SINT(s("HELLO"), 2, 2)), s("EL"));
        assert_eq!(call!(INSERT_STRING(s("AC"), s("B"), 1)), s("ABC"));
        assert_eq!(call!(DELETE__STRING__STRING__INT__INT(s("ABC"), 1, 2)), s("AC"));
        assert_eq!(call!(REPLACE_STRING(s("ABC"), s("x"), 1, 2)), s("AxC"));
        assert_eq!(call!(FIND__UINT__STRING__STRING(s("HELLOWORLD"), s("WORLD"))), 6);
        let parts = [s("AB"), s("CD")];
        assert_eq!(call!(CONCAT(2, parts.as_ptr())), s("ABCD"));
        assert_eq!(call!(CONCAT__STRING__STRING(1, parts.as_ptr())), s("AB"));
    }

    #[test]
    fn test_surface_faults() {
        assert_eq!(call_failing!(LEFT__STRING__STRING__INT(s("HELLO"), -1)), s(""));
        assert_eq!(call_failing!(MID_STRING(s("HELLO"), 1, -1)), s(""));
        assert_eq!(call_failing!(CONCAT_STRING(0, std::ptr::null())), s(""));
    }
}

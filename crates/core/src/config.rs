//! Build-wide constants shared by every standard function.
//!
//! These are compile-time values: the generated program, the runtime and this
//! library must all agree on them, so they are never read from the
//! environment at run time.

/// Capacity, in bytes, of every `STRING` value.
///
/// The length prefix of [`crate::FixedString`] is a single byte, so the
/// capacity can never exceed 255.
pub const STR_MAX_LEN: usize = 126;

/// Largest operand count that the extensible (N-ary) functions fold with
/// unrolled code. Longer operand lists take the general variadic path.
pub const MAX_INLINE_PARAM_COUNT: usize = 8;

/// Seconds in one day, used by DATE/TOD/DT splitting.
pub const SECONDS_PER_DAY: i64 = 86_400;

/// Nanoseconds in one second.
pub const NANOS_PER_SECOND: i64 = 1_000_000_000;

/// Day number of 1970-01-01 counted from 0001-01-01 (day 1) in the
/// proleptic Gregorian calendar. DATE and DT are stored relative to it.
pub const UNIX_EPOCH_DAYS_FROM_CE: i32 = 719_163;

const _: () = assert!(STR_MAX_LEN <= u8::MAX as usize);

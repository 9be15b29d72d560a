//! TIME, DATE, TIME_OF_DAY and DATE_AND_TIME values
//!
//! All four share one representation, [`Timespec`]: whole seconds plus a
//! nanosecond part normalised into `0..1_000_000_000` (floor
//! normalisation, so `-0.5 s` is `(-1 s, 500_000_000 ns)`).
//!
//! - `TIME` is a signed duration.
//! - `TOD` is the duration since midnight.
//! - `DATE` is the instant of midnight, in seconds since 1970-01-01.
//! - `DT` is an instant, in seconds since 1970-01-01.
//!
//! Every comparison on these types (`<`, MAX, MIN, LIMIT, GT..NE) goes
//! through [`time_cmp`], so the order is total and consistent everywhere.
//!
//! Arithmetic never traps: seconds wrap on overflow like the native integer
//! representation would.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::config::{NANOS_PER_SECOND, SECONDS_PER_DAY, UNIX_EPOCH_DAYS_FROM_CE};
use crate::error::Fault;
use crate::types::strip_type_prefix;

const NANOS: i128 = NANOS_PER_SECOND as i128;

/// Seconds + nanoseconds pair.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Timespec {
    secs: i64,
    nanos: i32,
}

/// Three-way comparison shared by every ordering on time values.
#[inline]
pub fn time_cmp(a: &Timespec, b: &Timespec) -> Ordering {
    a.secs.cmp(&b.secs).then(a.nanos.cmp(&b.nanos))
}

impl Timespec {
    pub const ZERO: Timespec = Timespec { secs: 0, nanos: 0 };

    /// Build from possibly unnormalised parts.
    pub fn new(secs: i64, nanos: i64) -> Self {
        Self::from_total_nanos(secs as i128 * NANOS + nanos as i128)
    }

    pub fn from_total_nanos(total: i128) -> Self {
        Timespec {
            secs: total.div_euclid(NANOS) as i64,
            nanos: total.rem_euclid(NANOS) as i32,
        }
    }

    /// Like [`Self::from_total_nanos`], but `None` when the seconds do not
    /// fit in an `i64`.
    pub fn checked_from_total_nanos(total: i128) -> Option<Self> {
        let secs = i64::try_from(total.div_euclid(NANOS)).ok()?;
        Some(Timespec {
            secs,
            nanos: total.rem_euclid(NANOS) as i32,
        })
    }

    pub fn total_nanos(self) -> i128 {
        self.secs as i128 * NANOS + self.nanos as i128
    }

    /// Whole seconds, rounded toward negative infinity.
    pub fn secs(self) -> i64 {
        self.secs
    }

    /// Nanoseconds past [`Self::secs`], always in `0..1_000_000_000`.
    pub fn subsec_nanos(self) -> u32 {
        self.nanos as u32
    }

    /// Whole seconds, truncated toward zero.
    pub fn trunc_secs(self) -> i64 {
        if self.secs < 0 && self.nanos > 0 {
            self.secs.wrapping_add(1)
        } else {
            self.secs
        }
    }

    pub fn as_secs_f64(self) -> f64 {
        self.secs as f64 + self.nanos as f64 / NANOS_PER_SECOND as f64
    }

    pub fn from_secs_f64(secs: f64) -> Self {
        let whole = secs.trunc();
        let nanos = (secs - whole) * NANOS_PER_SECOND as f64;
        Self::new(whole as i64, nanos as i64)
    }

    pub fn is_zero(self) -> bool {
        self.secs == 0 && self.nanos == 0
    }

    pub fn wrapping_add(self, other: Timespec) -> Self {
        let nanos = self.nanos as i64 + other.nanos as i64;
        Self::new(self.secs.wrapping_add(other.secs), nanos)
    }

    pub fn wrapping_sub(self, other: Timespec) -> Self {
        let nanos = self.nanos as i64 - other.nanos as i64;
        Self::new(self.secs.wrapping_sub(other.secs), nanos)
    }

    /// Scale by a real factor.
    ///
    /// The seconds are scaled in floating point and the fractional seconds
    /// that produces are carried into the nanosecond part, so long durations
    /// keep full second precision.
    pub fn scale(self, factor: f64) -> Self {
        let secs = self.secs as f64 * factor;
        let whole = secs.trunc();
        let nanos = self.nanos as f64 * factor + (secs - whole) * NANOS_PER_SECOND as f64;
        Self::new(whole as i64, nanos as i64)
    }

    /// Divide by a real divisor. The caller rejects a zero divisor.
    pub fn divide(self, divisor: f64) -> Self {
        let secs = self.secs as f64 / divisor;
        let whole = secs.trunc();
        let nanos = self.nanos as f64 / divisor + (secs - whole) * NANOS_PER_SECOND as f64;
        Self::new(whole as i64, nanos as i64)
    }

    /// Seconds since midnight of the day this instant falls in.
    fn second_of_day(self) -> i64 {
        self.secs.rem_euclid(SECONDS_PER_DAY)
    }

    /// Days since 1970-01-01 of the day this instant falls in.
    fn day_number(self) -> i64 {
        self.secs.div_euclid(SECONDS_PER_DAY)
    }
}

impl PartialOrd for Timespec {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Timespec {
    fn cmp(&self, other: &Self) -> Ordering {
        time_cmp(self, other)
    }
}

/// Behaviour shared by TIME, DATE, TOD and DT.
pub trait Temporal: Copy + Default + Ord + fmt::Display + FromStr<Err = Fault> + 'static {
    fn from_timespec(ts: Timespec) -> Self;
    fn timespec(self) -> Timespec;
}

macro_rules! time_value {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[repr(transparent)]
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub Timespec);

        impl $name {
            pub const fn from_timespec(ts: Timespec) -> Self {
                $name(ts)
            }

            pub const fn timespec(self) -> Timespec {
                self.0
            }

            pub fn new(secs: i64, nanos: i64) -> Self {
                $name(Timespec::new(secs, nanos))
            }
        }

        impl Temporal for $name {
            fn from_timespec(ts: Timespec) -> Self {
                $name(ts)
            }

            fn timespec(self) -> Timespec {
                self.0
            }
        }

        impl From<Timespec> for $name {
            fn from(ts: Timespec) -> Self {
                $name(ts)
            }
        }

        impl PartialOrd for $name {
            fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
                Some(self.cmp(other))
            }
        }

        impl Ord for $name {
            fn cmp(&self, other: &Self) -> Ordering {
                time_cmp(&self.0, &other.0)
            }
        }
    };
}

time_value!(
    /// TIME: a signed duration
    Time
);
time_value!(
    /// DATE: midnight of a calendar day
    Date
);
time_value!(
    /// TIME_OF_DAY: duration since midnight
    Tod
);
time_value!(
    /// DATE_AND_TIME: a calendar instant
    Dt
);

impl Time {
    pub fn from_secs(secs: i64) -> Self {
        Time::new(secs, 0)
    }

    pub fn from_millis(millis: i64) -> Self {
        Time(Timespec::from_total_nanos(millis as i128 * 1_000_000))
    }

    pub fn from_nanos(nanos: i128) -> Self {
        Time(Timespec::from_total_nanos(nanos))
    }

    pub fn from_hms(hours: i64, minutes: i64, seconds: i64) -> Self {
        Time::from_secs(hours * 3_600 + minutes * 60 + seconds)
    }

    pub fn from_days(days: i64) -> Self {
        Time::from_secs(days * SECONDS_PER_DAY)
    }
}

impl Tod {
    pub fn from_hms(hour: u32, min: u32, sec: u32) -> Option<Self> {
        Self::from_hms_nano(hour, min, sec, 0)
    }

    pub fn from_hms_nano(hour: u32, min: u32, sec: u32, nano: u32) -> Option<Self> {
        if nano >= NANOS_PER_SECOND as u32 {
            return None;
        }
        let time = NaiveTime::from_hms_nano_opt(hour, min, sec, nano)?;
        Some(Tod::new(time.num_seconds_from_midnight() as i64, nano as i64))
    }

    /// (hour, minute, second, nanosecond), wrapping values past midnight
    /// back into the day.
    pub fn hms(self) -> (u32, u32, u32, u32) {
        let secs = self.0.second_of_day();
        (
            (secs / 3_600) as u32,
            (secs / 60 % 60) as u32,
            (secs % 60) as u32,
            self.0.subsec_nanos(),
        )
    }
}

impl Date {
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        let date = NaiveDate::from_ymd_opt(year, month, day)?;
        Some(Self::from_naive(date))
    }

    fn from_naive(date: NaiveDate) -> Self {
        let days = (date.num_days_from_ce() - UNIX_EPOCH_DAYS_FROM_CE) as i64;
        Date::new(days * SECONDS_PER_DAY, 0)
    }

    /// Calendar (year, month, day), `None` outside chrono's range.
    pub fn ymd(self) -> Option<(i32, u32, u32)> {
        naive_date(self.0).map(|d| (d.year(), d.month(), d.day()))
    }
}

impl Dt {
    pub fn from_ymd_hms(year: i32, month: u32, day: u32, hour: u32, min: u32, sec: u32) -> Option<Self> {
        let date = Date::from_ymd(year, month, day)?;
        let tod = Tod::from_hms(hour, min, sec)?;
        Some(Dt::from_date_tod(date, tod))
    }

    pub fn from_date_tod(date: Date, tod: Tod) -> Self {
        Dt(date.0.wrapping_add(tod.0))
    }

    /// Midnight of the day this instant falls in.
    pub fn date(self) -> Date {
        Date::new(self.0.day_number() * SECONDS_PER_DAY, 0)
    }

    pub fn time_of_day(self) -> Tod {
        Tod::new(self.0.second_of_day(), self.0.subsec_nanos() as i64)
    }
}

fn naive_date(ts: Timespec) -> Option<NaiveDate> {
    let days = i32::try_from(ts.day_number()).ok()?;
    NaiveDate::from_num_days_from_ce_opt(days.checked_add(UNIX_EPOCH_DAYS_FROM_CE)?)
}

/// Writes `.ddd` with trailing zeros trimmed, nothing for zero.
fn write_fraction(f: &mut fmt::Formatter<'_>, nanos: u32) -> fmt::Result {
    if nanos == 0 {
        return Ok(());
    }
    let digits = format!("{:09}", nanos);
    write!(f, ".{}", digits.trim_end_matches('0'))
}

impl fmt::Display for Time {
    /// `T#1d2h3m4s500ms`, printing units from the first to the last non-zero
    /// one; sub-millisecond parts become a fractional millisecond count.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let total = self.0.total_nanos();
        write!(f, "T#")?;
        if total < 0 {
            write!(f, "-")?;
        }
        let magnitude = total.unsigned_abs();
        let nanos = (magnitude % NANOS as u128) as u64;
        let secs = magnitude / NANOS as u128;
        let units = [
            (secs / SECONDS_PER_DAY as u128, "d"),
            (secs / 3_600 % 24, "h"),
            (secs / 60 % 60, "m"),
            (secs % 60, "s"),
            ((nanos / 1_000_000) as u128, "ms"),
        ];
        let sub_milli = nanos % 1_000_000;
        let first = units.iter().position(|(v, _)| *v != 0);
        let last = if sub_milli != 0 {
            Some(units.len() - 1)
        } else {
            units.iter().rposition(|(v, _)| *v != 0)
        };
        let (Some(first), Some(last)) = (first.or(last), last) else {
            return write!(f, "0s");
        };
        for (index, (value, unit)) in units.iter().enumerate().take(last + 1).skip(first) {
            if index == units.len() - 1 && sub_milli != 0 {
                let digits = format!("{:06}", sub_milli);
                write!(f, "{}.{}{}", value, digits.trim_end_matches('0'), unit)?;
            } else {
                write!(f, "{}{}", value, unit)?;
            }
        }
        Ok(())
    }
}

impl fmt::Display for Tod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (hour, min, sec, nanos) = self.hms();
        write!(f, "TOD#{:02}:{:02}:{:02}", hour, min, sec)?;
        write_fraction(f, nanos)
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.ymd() {
            Some((year, month, day)) => write!(f, "D#{}-{:02}-{:02}", year, month, day),
            None => write!(f, "D#?"),
        }
    }
}

impl fmt::Display for Dt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some((year, month, day)) = self.date().ymd() else {
            return write!(f, "DT#?");
        };
        let (hour, min, sec, nanos) = self.time_of_day().hms();
        write!(
            f,
            "DT#{}-{:02}-{:02}-{:02}:{:02}:{:02}",
            year, month, day, hour, min, sec
        )?;
        write_fraction(f, nanos)
    }
}

fn all_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// Nanoseconds represented by the decimal fraction `digits` of one `unit`.
fn fraction_of(digits: &str, unit_nanos: i128) -> Option<i128> {
    if !all_digits(digits) {
        return None;
    }
    let digits = &digits[..digits.len().min(18)];
    let numerator: i128 = digits.parse().ok()?;
    Some(numerator * unit_nanos / 10i128.pow(digits.len() as u32))
}

fn duration_unit(tail: &str) -> Option<(i128, usize)> {
    const UNITS: [(&str, i128); 7] = [
        ("ms", 1_000_000),
        ("us", 1_000),
        ("ns", 1),
        ("d", SECONDS_PER_DAY as i128 * NANOS),
        ("h", 3_600 * NANOS),
        ("m", 60 * NANOS),
        ("s", NANOS),
    ];
    UNITS
        .iter()
        .find(|(unit, _)| tail.starts_with(unit))
        .map(|(unit, nanos)| (*nanos, unit.len()))
}

/// `1h30m`, `-2.5s`, `1d_2h`: total nanoseconds.
fn parse_duration(body: &str) -> Option<i128> {
    let cleaned: String = body
        .chars()
        .filter(|c| *c != '_')
        .collect::<String>()
        .to_ascii_lowercase();
    let (negative, mut rest) = match cleaned.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, cleaned.strip_prefix('+').unwrap_or(&cleaned)),
    };
    if rest.is_empty() {
        return None;
    }
    let mut total: i128 = 0;
    let mut fractional = false;
    while !rest.is_empty() {
        // a fractional component must be the last one
        if fractional {
            return None;
        }
        let number_end = rest.find(|c: char| !(c.is_ascii_digit() || c == '.'))?;
        let (number, tail) = rest.split_at(number_end);
        let (unit_nanos, unit_len) = duration_unit(tail)?;
        rest = &tail[unit_len..];

        let (whole, fraction) = match number.split_once('.') {
            Some((whole, fraction)) => (whole, Some(fraction)),
            None => (number, None),
        };
        if !all_digits(whole) {
            return None;
        }
        let whole: i128 = whole.parse().ok()?;
        total = total.checked_add(whole.checked_mul(unit_nanos)?)?;
        if let Some(fraction) = fraction {
            fractional = true;
            total = total.checked_add(fraction_of(fraction, unit_nanos)?)?;
        }
    }
    Some(if negative { -total } else { total })
}

fn parse_ymd(body: &str) -> Option<Date> {
    let mut parts = body.split('-');
    let (year, month, day) = (parts.next()?, parts.next()?, parts.next()?);
    if parts.next().is_some() || !all_digits(year) || !all_digits(month) || !all_digits(day) {
        return None;
    }
    Date::from_ymd(year.parse().ok()?, month.parse().ok()?, day.parse().ok()?)
}

fn parse_hms(body: &str) -> Option<Tod> {
    let mut parts = body.split(':');
    let (hour, min, sec) = (parts.next()?, parts.next()?, parts.next()?);
    if parts.next().is_some() || !all_digits(hour) || !all_digits(min) {
        return None;
    }
    let (sec, nanos) = match sec.split_once('.') {
        Some((whole, fraction)) => (whole, fraction_of(fraction, NANOS)? as u32),
        None => (sec, 0),
    };
    if !all_digits(sec) {
        return None;
    }
    Tod::from_hms_nano(hour.parse().ok()?, min.parse().ok()?, sec.parse().ok()?, nanos)
}

impl FromStr for Time {
    type Err = Fault;

    fn from_str(literal: &str) -> Result<Self, Fault> {
        let body = strip_type_prefix(literal.trim(), &["TIME#", "T#"]);
        parse_duration(body)
            .and_then(Timespec::checked_from_total_nanos)
            .map(Time)
            .ok_or(Fault::Unparsable("TIME"))
    }
}

impl FromStr for Date {
    type Err = Fault;

    fn from_str(literal: &str) -> Result<Self, Fault> {
        let body = strip_type_prefix(literal.trim(), &["DATE#", "D#"]);
        parse_ymd(body).ok_or(Fault::Unparsable("DATE"))
    }
}

impl FromStr for Tod {
    type Err = Fault;

    fn from_str(literal: &str) -> Result<Self, Fault> {
        let body = strip_type_prefix(literal.trim(), &["TIME_OF_DAY#", "TOD#"]);
        parse_hms(body).ok_or(Fault::Unparsable("TOD"))
    }
}

impl FromStr for Dt {
    type Err = Fault;

    fn from_str(literal: &str) -> Result<Self, Fault> {
        let body = strip_type_prefix(literal.trim(), &["DATE_AND_TIME#", "DT#"]);
        let parse = || {
            let mut parts = body.splitn(4, '-');
            let date = format!("{}-{}-{}", parts.next()?, parts.next()?, parts.next()?);
            let date = parse_ymd(&date)?;
            let tod = parse_hms(parts.next()?)?;
            Some(Dt::from_date_tod(date, tod))
        };
        parse().ok_or(Fault::Unparsable("DT"))
    }
}

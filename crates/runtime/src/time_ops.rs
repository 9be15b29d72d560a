//! Time and date arithmetic
//!
//! Every legal operand combination reduces to adding or subtracting
//! [`Timespec`](iec_core::Timespec) values:
//!
//! | Function      | Result | Operands    |
//! |---------------|--------|-------------|
//! | ADD_TIME      | TIME   | TIME, TIME  |
//! | ADD_TOD_TIME  | TOD    | TOD, TIME   |
//! | ADD_DT_TIME   | DT     | DT, TIME    |
//! | SUB_TIME      | TIME   | TIME, TIME  |
//! | SUB_DATE_DATE | TIME   | DATE, DATE  |
//! | SUB_TOD_TIME  | TOD    | TOD, TIME   |
//! | SUB_TOD_TOD   | TIME   | TOD, TOD    |
//! | SUB_DT_TIME   | DT     | DT, TIME    |
//! | SUB_DT_DT     | TIME   | DT, DT      |
//!
//! MUL and DIV scale a TIME by any number, going through LREAL for the
//! factor. A TOD result is not wrapped back into one day.

use iec_core::types::*;
use iec_core::{Fault, Outcome, Scalar};
use paste::paste;

pub fn add_time(in1: TIME, in2: TIME) -> TIME {
    TIME::from_timespec(in1.0.wrapping_add(in2.0))
}

pub fn add_tod_time(in1: TOD, in2: TIME) -> TOD {
    TOD::from_timespec(in1.0.wrapping_add(in2.0))
}

pub fn add_dt_time(in1: DT, in2: TIME) -> DT {
    DT::from_timespec(in1.0.wrapping_add(in2.0))
}

pub fn sub_time(in1: TIME, in2: TIME) -> TIME {
    TIME::from_timespec(in1.0.wrapping_sub(in2.0))
}

pub fn sub_date_date(in1: DATE, in2: DATE) -> TIME {
    TIME::from_timespec(in1.0.wrapping_sub(in2.0))
}

pub fn sub_tod_time(in1: TOD, in2: TIME) -> TOD {
    TOD::from_timespec(in1.0.wrapping_sub(in2.0))
}

pub fn sub_tod_tod(in1: TOD, in2: TOD) -> TIME {
    TIME::from_timespec(in1.0.wrapping_sub(in2.0))
}

pub fn sub_dt_time(in1: DT, in2: TIME) -> DT {
    DT::from_timespec(in1.0.wrapping_sub(in2.0))
}

pub fn sub_dt_dt(in1: DT, in2: DT) -> TIME {
    TIME::from_timespec(in1.0.wrapping_sub(in2.0))
}

/// Scale a duration by any numeric factor.
pub fn mul_time<N: Scalar>(in1: TIME, in2: N) -> TIME {
    TIME::from_timespec(in1.0.scale(in2.to_f64()))
}

/// Divide a duration by any numeric divisor; zero is a fault.
pub fn div_time<N: Scalar>(in1: TIME, in2: N) -> Outcome<TIME> {
    if in2.is_zero() {
        return Err(Fault::DivisionByZero);
    }
    Ok(TIME::from_timespec(in1.0.divide(in2.to_f64())))
}

/// The DT at time of day `in2` on day `in1`.
pub fn concat_date_tod(in1: DATE, in2: TOD) -> DT {
    DT::from_date_tod(in1, in2)
}

// =============================================================================
// Exported surface
// =============================================================================

macro_rules! time_binary {
    ($explicit:ident, $overloaded:ident, $f:ident, $ret:ident, $a:ident, $b:ident) => {
        entry! { fn $explicit(in1: $a, in2: $b) -> $ret { Ok($f(in1, in2)) } }
        entry! { fn $overloaded(in1: $a, in2: $b) -> $ret { Ok($f(in1, in2)) } }
    };
}

time_binary!(ADD_TIME, ADD__TIME__TIME__TIME, add_time, TIME, TIME, TIME);
time_binary!(ADD_TOD_TIME, ADD__TOD__TOD__TIME, add_tod_time, TOD, TOD, TIME);
time_binary!(ADD_DT_TIME, ADD__DT__DT__TIME, add_dt_time, DT, DT, TIME);
time_binary!(SUB_TIME, SUB__TIME__TIME__TIME, sub_time, TIME, TIME, TIME);
time_binary!(SUB_DATE_DATE, SUB__TIME__DATE__DATE, sub_date_date, TIME, DATE, DATE);
time_binary!(SUB_TOD_TIME, SUB__TOD__TOD__TIME, sub_tod_time, TOD, TOD, TIME);
time_binary!(SUB_TOD_TOD, SUB__TIME__TOD__TOD, sub_tod_tod, TIME, TOD, TOD);
time_binary!(SUB_DT_TIME, SUB__DT__DT__TIME, sub_dt_time, DT, DT, TIME);
time_binary!(SUB_DT_DT, SUB__TIME__DT__DT, sub_dt_dt, TIME, DT, DT);
time_binary!(CONCAT_DATE_TOD, CONCAT_DATE_TOD__DT__DATE__TOD, concat_date_tod, DT, DATE, TOD);

macro_rules! scale_surface {
    ($n:ident) => {
        paste! {
            entry! { fn [<MULTIME__TIME__TIME__ $n>](in1: TIME, in2: $n) -> TIME { Ok(mul_time(in1, in2)) } }
            entry! { fn [<MUL__TIME__TIME__ $n>](in1: TIME, in2: $n) -> TIME { Ok(mul_time(in1, in2)) } }
            entry! { fn [<DIVTIME__TIME__TIME__ $n>](in1: TIME, in2: $n) -> TIME { div_time(in1, in2) } }
            entry! { fn [<DIV__TIME__TIME__ $n>](in1: TIME, in2: $n) -> TIME { div_time(in1, in2) } }
        }
    };
}

with_types!(ANY_NUM: scale_surface);

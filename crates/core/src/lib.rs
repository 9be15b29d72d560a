//! IEC Core: value model shared by the IEC 61131-3 standard function library
//!
//! This crate holds everything the standard functions operate on but that is
//! not itself a standard function:
//!
//! - the elementary data types and the scalar conversion carrier
//! - fixed-capacity STRING values
//! - the seconds+nanoseconds time model behind TIME, DATE, TOD and DT
//! - the fault type and the EN/ENO gate that turns faults into init values
//!
//! # Modules
//!
//! - `config`: Build-wide constants (string capacity, inline fold width)
//! - `enable`: EN/ENO gating
//! - `error`: Domain faults of the standard functions
//! - `iecstring`: Fixed-capacity STRING
//! - `timespec`: TIME/DATE/TOD/DT values, literals and ordering
//! - `types`: Elementary type aliases and the `Scalar` trait

pub mod config;
pub mod enable;
pub mod error;
pub mod iecstring;
pub mod timespec;
pub mod types;

pub use config::{MAX_INLINE_PARAM_COUNT, STR_MAX_LEN};
pub use enable::{gated, gated_pair, ungated};
pub use error::{Fault, Outcome};
pub use iecstring::{FixedString, IecString};
pub use timespec::{Date, Dt, Temporal, Time, Timespec, Tod, time_cmp};
pub use types::{Scalar, convert, strip_type_prefix};

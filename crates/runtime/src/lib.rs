//! IEC Stdlib: the IEC 61131-3 standard function library
//!
//! Generated PLC code calls into this crate for every standard function:
//! type conversions, arithmetic, bit strings, selection and comparison,
//! character strings and time arithmetic. Each function is pure: no state
//! survives a call, nothing is shared, nothing blocks.
//!
//! Every function exists twice:
//! - as generic Rust (`arithmetic::add`, `string_ops::mid`, ...) returning
//!   an [`Outcome`](iec_core::Outcome), and
//! - as `extern "C"` symbols under both IEC names: explicitly typed
//!   (`ADD_INT`) and overload resolved (`ADD__INT__INT`).
//!
//! The `en-eno` feature (on by default) gives every exported symbol leading
//! `EN: BOOL, ENO: *mut BOOL` parameters; see [`config::ENABLE_MODE`].
//! Extensible functions take `count: UINT, ops: *const T`.
//!
//! # Modules
//!
//! - `arithmetic`: ADD, MUL, SUB, DIV, MOD, EXPT, MOVE
//! - `bcd`: packed BCD conversions
//! - `bit_ops`: AND, OR, XOR, NOT, SHL, SHR, ROL, ROR
//! - `compare`: GT, GE, EQ, LE, LT, NE
//! - `config`: Enable mode and build constants
//! - `convert`: `*_TO_*`, TRUNC, ROUND
//! - `extensible`: N-ary folding
//! - `literal`: Literal text for string conversions
//! - `numeric`: ABS and the real math functions
//! - `select`: SEL, MUX, MAX, MIN, LIMIT
//! - `string_ops`: LEN, LEFT, RIGHT, MID, CONCAT, INSERT, DELETE, REPLACE, FIND
//! - `time_ops`: TIME/DATE/TOD/DT arithmetic

#![allow(non_snake_case)]

#[macro_use]
mod macros;

pub mod arithmetic;
pub mod bcd;
pub mod bit_ops;
pub mod compare;
pub mod config;
pub mod convert;
pub mod extensible;
pub mod literal;
pub mod numeric;
pub mod select;
pub mod string_ops;
pub mod time_ops;

pub use config::{ENABLE_MODE, EnableMode};
pub use iec_core::{Fault, FixedString, IecString, Outcome, STR_MAX_LEN, gated, ungated};

pub use compare::Comparator;
pub use extensible::{fold_extensible, fold_inline, fold_variadic};

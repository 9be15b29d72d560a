//! EN/ENO gating
//!
//! Every standard function is wrapped by the enable contract:
//!
//! - **gated**: the caller passes an `EN` flag and (optionally) an `ENO`
//!   flag to write back. `EN = FALSE` skips the operation, writes
//!   `ENO = FALSE` and yields the init value. With `EN = TRUE` the operation
//!   runs; success writes `ENO = TRUE`, a [`Fault`] writes `ENO = FALSE` and
//!   yields the init value.
//! - **ungated**: no flags at all. The operation always runs and a fault
//!   silently degrades to the init value.
//!
//! Which of the two the exported symbols use is a build-wide choice made by
//! the `en-eno` feature of the function library. Both wrappers are always
//! available here, and for an enabled, non-failing call they return the
//! same payload.
//!
//! The init value of every IEC type is its `Default` (zero, `FALSE`, the
//! empty string, the zero instant).

use crate::error::{Fault, Outcome};

/// Run `op` under the gated contract.
///
/// `eno` is `None` when the caller did not wire the output (a null `ENO`
/// pointer on the C surface).
#[inline]
pub fn gated<T: Default>(en: bool, eno: Option<&mut bool>, op: impl FnOnce() -> Outcome<T>) -> T {
    if !en {
        set_eno(eno, false);
        return T::default();
    }
    match op() {
        Ok(value) => {
            set_eno(eno, true);
            value
        }
        Err(fault) => {
            report(fault);
            set_eno(eno, false);
            T::default()
        }
    }
}

/// Run `op` under the ungated contract.
#[inline]
pub fn ungated<T: Default>(op: impl FnOnce() -> Outcome<T>) -> T {
    op().unwrap_or_else(|fault| {
        report(fault);
        T::default()
    })
}

/// Evaluate `op` gated and return the payload together with the ENO flag.
///
/// Convenience for Rust callers that want both halves of the contract.
pub fn gated_pair<T: Default>(en: bool, op: impl FnOnce() -> Outcome<T>) -> (T, bool) {
    let mut eno = false;
    let value = gated(en, Some(&mut eno), op);
    (value, eno)
}

#[inline]
fn set_eno(eno: Option<&mut bool>, value: bool) {
    if let Some(flag) = eno {
        *flag = value;
    }
}

#[cold]
fn report(fault: Fault) {
    tracing::debug!(%fault, "standard function failed, returning init value");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_returns_init_and_clears_eno() {
        let mut eno = true;
        let mut ran = false;
        let value: i32 = gated(false, Some(&mut eno), || {
            ran = true;
            Ok(42)
        });
        assert_eq!(value, 0);
        assert!(!eno);
        assert!(!ran, "disabled call must not run the operation");
    }

    #[test]
    fn test_enabled_success_sets_eno() {
        let mut eno = false;
        let value: i32 = gated(true, Some(&mut eno), || Ok(42));
        assert_eq!(value, 42);
        assert!(eno);
    }

    #[test]
    fn test_enabled_fault_clears_eno() {
        let mut eno = true;
        let value: i32 = gated(true, Some(&mut eno), || Err(Fault::DivisionByZero));
        assert_eq!(value, 0);
        assert!(!eno);
    }

    #[test]
    fn test_missing_eno_is_tolerated() {
        let value: u8 = gated(true, None, || Ok(9));
        assert_eq!(value, 9);
        let value: u8 = gated(false, None, || Ok(9));
        assert_eq!(value, 0);
    }

    #[test]
    fn test_ungated_fault_falls_back_to_init() {
        let value: f64 = ungated(|| Err(Fault::DivisionByZero));
        assert_eq!(value, 0.0);
        let value: bool = ungated(|| Ok(true));
        assert!(value);
    }

    #[test]
    fn test_gated_and_ungated_payloads_agree() {
        for x in [-3i16, 0, 7, i16::MAX] {
            let op = || Ok(x.wrapping_mul(3));
            let (gated_value, eno) = gated_pair(true, op);
            assert!(eno);
            assert_eq!(gated_value, ungated(op));
        }
    }
}

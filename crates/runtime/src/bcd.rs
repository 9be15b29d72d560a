//! Packed BCD conversions: `<UINT>_TO_BCD_<NBIT>` and `<NBIT>_BCD_TO_<UINT>`
//!
//! Each nibble holds one decimal digit, least significant digit in the low
//! nibble. Encoding keeps at most 16 digits and then truncates to the width
//! of the target bit string. Decoding rejects any nibble above 9.

use iec_core::types::*;
use iec_core::{Fault, Outcome, Scalar};
use paste::paste;

/// Decimal digits a 64-bit packed value can hold.
const MAX_DIGITS: u32 = 16;

pub fn to_bcd<F: Scalar, T: Scalar>(value: F) -> T {
    let mut decimal = value.to_i128().unsigned_abs();
    let mut packed: u64 = 0;
    for digit in 0..MAX_DIGITS {
        if decimal == 0 {
            break;
        }
        packed |= ((decimal % 10) as u64) << (4 * digit);
        decimal /= 10;
    }
    T::from_i128(packed as i128)
}

pub fn from_bcd<F: Scalar, T: Scalar>(value: F) -> Outcome<T> {
    let bits = value.to_i128() as u64;
    let mut decimal: u64 = 0;
    for shift in (0..F::BITS).step_by(4).rev() {
        let nibble = (bits >> shift) & 0xF;
        if nibble > 9 {
            return Err(Fault::InvalidBcd(bits));
        }
        decimal = decimal * 10 + nibble;
    }
    Ok(T::from_i128(decimal as i128))
}

// =============================================================================
// Exported surface
// =============================================================================

macro_rules! bcd_pair {
    ($nbit:ident, $uint:ident) => {
        paste! {
            entry! { fn [<$uint _TO_BCD_ $nbit>](op: $uint) -> $nbit { Ok(to_bcd(op)) } }
            entry! { fn [<$uint _TO_BCD__ $nbit __ $uint>](op: $uint) -> $nbit { Ok(to_bcd(op)) } }
            entry! { fn [<$nbit _BCD_TO_ $uint>](op: $nbit) -> $uint { from_bcd(op) } }
            entry! { fn [<BCD_TO_ $uint __ $uint __ $nbit>](op: $nbit) -> $uint { from_bcd(op) } }
        }
    };
}

macro_rules! bcd_widths {
    ($uint:ident) => {
        with_types!(ANY_NBIT: bcd_pair, $uint);
    };
}

with_types!(ANY_UINT: bcd_widths);

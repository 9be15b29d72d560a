//! Code generation for the exported name surfaces
//!
//! Each standard function exists once as generic Rust code and is then
//! stamped out per concrete type with `paste` building the IEC names:
//!
//! - `with_types!(ANY_INT: callback, extra...)` invokes `callback!(T, extra...)`
//!   for every member of a generic type family.
//! - `entry!` emits one `extern "C"` symbol whose parameter list depends on
//!   the `en-eno` feature, routing the body through the EN/ENO gate.

/// Expand a callback once per member of an IEC generic type family.
macro_rules! with_types {
    (ANY_SINT: $mac:ident $(, $extra:ident)*) => {
        $mac!(SINT $(, $extra)*);
        $mac!(INT $(, $extra)*);
        $mac!(DINT $(, $extra)*);
        $mac!(LINT $(, $extra)*);
    };
    (ANY_UINT: $mac:ident $(, $extra:ident)*) => {
        $mac!(USINT $(, $extra)*);
        $mac!(UINT $(, $extra)*);
        $mac!(UDINT $(, $extra)*);
        $mac!(ULINT $(, $extra)*);
    };
    (ANY_INT: $mac:ident $(, $extra:ident)*) => {
        with_types!(ANY_SINT: $mac $(, $extra)*);
        with_types!(ANY_UINT: $mac $(, $extra)*);
    };
    (ANY_REAL: $mac:ident $(, $extra:ident)*) => {
        $mac!(REAL $(, $extra)*);
        $mac!(LREAL $(, $extra)*);
    };
    (ANY_NUM: $mac:ident $(, $extra:ident)*) => {
        with_types!(ANY_INT: $mac $(, $extra)*);
        with_types!(ANY_REAL: $mac $(, $extra)*);
    };
    (ANY_NBIT: $mac:ident $(, $extra:ident)*) => {
        $mac!(BYTE $(, $extra)*);
        $mac!(WORD $(, $extra)*);
        $mac!(DWORD $(, $extra)*);
        $mac!(LWORD $(, $extra)*);
    };
    (ANY_BIT: $mac:ident $(, $extra:ident)*) => {
        $mac!(BOOL $(, $extra)*);
        with_types!(ANY_NBIT: $mac $(, $extra)*);
    };
    (ANY_DATE: $mac:ident $(, $extra:ident)*) => {
        $mac!(DATE $(, $extra)*);
        $mac!(TOD $(, $extra)*);
        $mac!(DT $(, $extra)*);
    };
    // TIME plus the date family: everything backed by a Timespec
    (ANY_TEMPORAL: $mac:ident $(, $extra:ident)*) => {
        $mac!(TIME $(, $extra)*);
        with_types!(ANY_DATE: $mac $(, $extra)*);
    };
    // numbers and bit strings: everything implementing Scalar
    (ANY_SCALAR: $mac:ident $(, $extra:ident)*) => {
        with_types!(ANY_NUM: $mac $(, $extra)*);
        with_types!(ANY_BIT: $mac $(, $extra)*);
    };
    (ANY: $mac:ident $(, $extra:ident)*) => {
        with_types!(ANY_SCALAR: $mac $(, $extra)*);
        with_types!(ANY_TEMPORAL: $mac $(, $extra)*);
        $mac!(STRING $(, $extra)*);
    };
}

/// Emit one exported standard function.
///
/// The body evaluates to `Outcome<ret>`. With `en-eno` the symbol takes
/// `EN` and `ENO` first and runs the body through [`iec_core::gated`];
/// without it the body runs through [`iec_core::ungated`].
macro_rules! entry {
    (fn $name:ident($($arg:ident: $ty:ty),* $(,)?) -> $ret:ty $body:block) => {
        /// # Safety
        ///
        /// `ENO` must be null or valid for writes. Operand pointers must be
        /// null or valid for reads of `count` values.
        #[cfg(feature = "en-eno")]
        #[unsafe(no_mangle)]
        pub unsafe extern "C" fn $name(
            en: iec_core::types::BOOL,
            eno: *mut iec_core::types::BOOL,
            $($arg: $ty),*
        ) -> $ret {
            let eno = unsafe { eno.as_mut() };
            iec_core::gated(en, eno, || -> iec_core::Outcome<$ret> { $body })
        }

        /// # Safety
        ///
        /// Operand pointers must be null or valid for reads of `count`
        /// values.
        #[cfg(not(feature = "en-eno"))]
        #[unsafe(no_mangle)]
        pub unsafe extern "C" fn $name($($arg: $ty),*) -> $ret {
            iec_core::ungated(|| -> iec_core::Outcome<$ret> { $body })
        }
    };
}

/// Call an exported function with `EN = TRUE`, asserting `ENO = TRUE`.
#[cfg(test)]
macro_rules! call {
    ($f:ident($($arg:expr),* $(,)?)) => {{
        #[cfg(feature = "en-eno")]
        let value = {
            let mut eno = false;
            #[allow(unused_unsafe)]
            let value = unsafe { $f(true, &mut eno, $($arg),*) };
            assert!(eno, concat!(stringify!($f), " cleared ENO"));
            value
        };
        #[cfg(not(feature = "en-eno"))]
        #[allow(unused_unsafe)]
        let value = unsafe { $f($($arg),*) };
        value
    }};
}

/// Call an exported function with `EN = TRUE`, asserting that it fails.
#[cfg(test)]
macro_rules! call_failing {
    ($f:ident($($arg:expr),* $(,)?)) => {{
        #[cfg(feature = "en-eno")]
        let value = {
            let mut eno = true;
            #[allow(unused_unsafe)]
            let value = unsafe { $f(true, &mut eno, $($arg),*) };
            assert!(!eno, concat!(stringify!($f), " should clear ENO"));
            value
        };
        #[cfg(not(feature = "en-eno"))]
        #[allow(unused_unsafe)]
        let value = unsafe { $f($($arg),*) };
        value
    }};
}

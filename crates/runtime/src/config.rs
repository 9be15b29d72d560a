//! Build configuration of the exported surface.

pub use iec_core::config::{MAX_INLINE_PARAM_COUNT, STR_MAX_LEN};

/// Which enable contract the exported symbols follow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnableMode {
    /// `EN: BOOL, ENO: *mut BOOL` lead every parameter list
    Gated,
    /// No enable parameters; faults degrade silently to the init value
    Ungated,
}

impl EnableMode {
    pub const fn has_en_eno(self) -> bool {
        matches!(self, EnableMode::Gated)
    }
}

/// Fixed at compile time by the `en-eno` feature.
pub const ENABLE_MODE: EnableMode = if cfg!(feature = "en-eno") {
    EnableMode::Gated
} else {
    EnableMode::Ungated
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_follows_feature() {
        assert_eq!(ENABLE_MODE.has_en_eno(), cfg!(feature = "en-eno"));
    }
}

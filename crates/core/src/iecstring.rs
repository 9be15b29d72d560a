//! Fixed-capacity STRING values
//!
//! A STRING is a plain value: a one-byte length followed by an inline byte
//! buffer, passed and returned by copy. Nothing is heap allocated, so the
//! type can cross the C boundary unchanged.
//!
//! Every operation that could produce more than `N` bytes silently
//! truncates to the capacity. The bytes are not required to be UTF-8.

use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::config::STR_MAX_LEN;

/// STRING with room for `N` bytes.
#[repr(C)]
#[derive(Clone, Copy)]
pub struct FixedString<const N: usize> {
    len: u8,
    body: [u8; N],
}

/// The STRING type used by the exported function surface.
pub type IecString = FixedString<STR_MAX_LEN>;

impl<const N: usize> FixedString<N> {
    const CAPACITY_FITS: () = assert!(N <= u8::MAX as usize, "STRING capacity exceeds 255");

    pub const fn new() -> Self {
        let () = Self::CAPACITY_FITS;
        FixedString { len: 0, body: [0; N] }
    }

    pub fn from_bytes_truncating(bytes: &[u8]) -> Self {
        let mut s = Self::new();
        s.push_bytes(bytes);
        s
    }

    pub fn from_str_truncating(text: &str) -> Self {
        Self::from_bytes_truncating(text.as_bytes())
    }

    pub const fn capacity(&self) -> usize {
        N
    }

    /// Current length, clamped to the capacity in case the length byte
    /// came from foreign memory.
    pub fn len(&self) -> usize {
        (self.len as usize).min(N)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.body[..self.len()]
    }

    /// Append as many bytes as still fit; returns how many were taken.
    pub fn push_bytes(&mut self, bytes: &[u8]) -> usize {
        let start = self.len();
        let taken = bytes.len().min(N - start);
        self.body[start..start + taken].copy_from_slice(&bytes[..taken]);
        self.len = (start + taken) as u8;
        taken
    }

    pub fn to_string_lossy(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(self.as_bytes())
    }

    /// Order used by the comparison functions: the common prefix
    /// (`min(len)` bytes) decides, lengths are not consulted.
    pub fn prefix_cmp(&self, other: &Self) -> Ordering {
        let common = self.len().min(other.len());
        self.as_bytes()[..common].cmp(&other.as_bytes()[..common])
    }
}

impl<const N: usize> Default for FixedString<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> PartialEq for FixedString<N> {
    fn eq(&self, other: &Self) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl<const N: usize> Eq for FixedString<N> {}

impl<const N: usize> From<&str> for FixedString<N> {
    fn from(text: &str) -> Self {
        Self::from_str_truncating(text)
    }
}

impl<const N: usize> fmt::Debug for FixedString<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.to_string_lossy(), f)
    }
}

impl<const N: usize> fmt::Display for FixedString<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_lossy())
    }
}

/// Formatting into a STRING truncates instead of failing.
impl<const N: usize> fmt::Write for FixedString<N> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.push_bytes(s.as_bytes());
        Ok(())
    }
}

impl<const N: usize> Serialize for FixedString<N> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string_lossy())
    }
}

impl<'de, const N: usize> Deserialize<'de> for FixedString<N> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = Cow::<'de, str>::deserialize(deserializer)?;
        Ok(Self::from_str_truncating(&text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fmt::Write;

    #[test]
    fn test_default_is_empty() {
        let s = IecString::default();
        assert!(s.is_empty());
        assert_eq!(s.capacity(), STR_MAX_LEN);
        assert_eq!(s.as_bytes(), b"");
    }

    #[test]
    fn test_truncates_at_capacity() {
        let s = FixedString::<4>::from("HELLO");
        assert_eq!(s.as_bytes(), b"HELL");

        let mut s = FixedString::<4>::from("AB");
        assert_eq!(s.push_bytes(b"CDEF"), 2);
        assert_eq!(s.as_bytes(), b"ABCD");
        assert_eq!(s.push_bytes(b"X"), 0);
    }

    #[test]
    fn test_write_truncates() {
        let mut s = FixedString::<5>::new();
        write!(s, "{}-{}", 1234, 5678).unwrap();
        assert_eq!(s.as_bytes(), b"1234-");
    }

    #[test]
    fn test_prefix_cmp() {
        let a = IecString::from("ABC");
        let b = IecString::from("ABD");
        let prefix = IecString::from("AB");
        assert_eq!(a.prefix_cmp(&b), Ordering::Less);
        assert_eq!(b.prefix_cmp(&a), Ordering::Greater);
        assert_eq!(a.prefix_cmp(&prefix), Ordering::Equal);
        assert_ne!(a, prefix);
    }

    #[test]
    fn test_length_byte_is_clamped() {
        let mut s = FixedString::<3>::from("abc");
        s.len = 200;
        assert_eq!(s.len(), 3);
        assert_eq!(s.as_bytes(), b"abc");
    }

    #[test]
    fn test_serde_as_plain_string() {
        let s = IecString::from("motor on");
        let json = serde_json::to_string(&s).unwrap();
        assert_eq!(json, r#""motor on""#);
        let back: FixedString<5> = serde_json::from_str(&json).unwrap();
        assert_eq!(back.as_bytes(), b"motor");
    }
}

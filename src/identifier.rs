use crate::generator;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr, sync::Arc};

/// identity of a stream participant (publisher, subscriber or subscription)
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct CombineIdentifier(u64);

impl CombineIdentifier {
    /// a fresh identifier from the process-wide generator
    pub fn new() -> Self {
        Self(generator::next())
    }

    /// derive the identifier from the shared allocation behind `obj`
    ///
    /// every clone of the `Arc` agrees, wherever the handle is moved.
    /// each allocation carries its reference counts, so zero-sized values
    /// still get distinct addresses while they are alive.
    pub fn from_object<T: ?Sized>(obj: &Arc<T>) -> Self {
        let addr = Arc::as_ptr(obj).cast::<()>() as usize;
        Self(addr as u64)
    }

    #[inline]
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl Default for CombineIdentifier {
    fn default() -> Self {
        Self::new()
    }
}

impl From<CombineIdentifier> for u64 {
    fn from(id: CombineIdentifier) -> Self {
        id.0
    }
}

impl fmt::Display for CombineIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:x}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseIdentifierError {
    MissingPrefix,
    InvalidHex(String),
}

impl fmt::Display for ParseIdentifierError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseIdentifierError::MissingPrefix => write!(f, "identifier must start with `0x`"),
            ParseIdentifierError::InvalidHex(s) => write!(f, "{s} is not a valid identifier"),
        }
    }
}

impl std::error::Error for ParseIdentifierError {}

impl FromStr for CombineIdentifier {
    type Err = ParseIdentifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s
            .strip_prefix("0x")
            .ok_or(ParseIdentifierError::MissingPrefix)?;

        // only the exact `Display` form: lowercase, no sign, no leading zeros
        let lowercase_hex = digits
            .bytes()
            .all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b));
        let padded = digits.len() > 1 && digits.starts_with('0');
        if digits.is_empty() || !lowercase_hex || padded {
            return Err(ParseIdentifierError::InvalidHex(s.to_owned()));
        }

        u64::from_str_radix(digits, 16)
            .map(Self)
            .map_err(|_| ParseIdentifierError::InvalidHex(s.to_owned()))
    }
}

impl<'de> Deserialize<'de> for CombineIdentifier {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

impl Serialize for CombineIdentifier {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

/// implemented by everything that takes part in a stream
///
/// participants usually store a `CombineIdentifier::new()` taken at
/// construction. ones that stand in for another participant (e.g. an
/// operator forwarding to its upstream subscription) return that one's id.
pub trait CustomCombineIdentifierConvertible {
    fn combine_identifier(&self) -> CombineIdentifier;
}

impl<T: CustomCombineIdentifierConvertible + ?Sized> CustomCombineIdentifierConvertible for Arc<T> {
    fn combine_identifier(&self) -> CombineIdentifier {
        (**self).combine_identifier()
    }
}

//! Error types for the crate.
//!
//! Following the teacher's convention (`types/errors.rs`): plain enums with
//! a hand-written `Display` and `std::error::Error` impl, no `thiserror`.

use std::fmt;

/// A requested trie operation found no matching entry.
///
/// Signaled by `get_exact`, `erase`, and `best_match`. Only `best_match`'s
/// case is user-visible, translated to the literal output `-`; the other
/// two surface this to their callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotFound;

impl fmt::Display for NotFound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "no matching entry")
    }
}

impl std::error::Error for NotFound {}

/// Errors raised by [`crate::bitstring::BitString`] construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BitStringError {
    /// The requested bit length exceeds the type's fixed capacity.
    TooLong { requested: usize, capacity: usize },
    /// The supplied byte buffer is shorter than the requested bit length
    /// requires.
    BufferTooShort { needed: usize, got: usize },
}

impl fmt::Display for BitStringError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            BitStringError::TooLong {
                requested,
                capacity,
            } => write!(
                f,
                "Error: requested {requested} bits exceeds capacity of {capacity} bits."
            ),
            BitStringError::BufferTooShort { needed, got } => write!(
                f,
                "Error: need {needed} bytes to cover the requested bit length, got {got}."
            ),
        }
    }
}

impl std::error::Error for BitStringError {}

/// An input line is not a valid IPv4 or IPv6 literal, or exceeds the
/// family's prefix-length cap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddrParseError {
    /// The text is not a parseable IPv4 or IPv6 address.
    Invalid(String),
    /// The declared prefix length exceeds the family's cap (32 for IPv4,
    /// 128 for IPv6).
    PrefixLenOutOfRange {
        family: &'static str,
        len: u32,
        max: u8,
    },
}

impl fmt::Display for AddrParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AddrParseError::Invalid(text) => {
                write!(f, "Error: '{text}' is not a valid IPv4 or IPv6 address.")
            }
            AddrParseError::PrefixLenOutOfRange { family, len, max } => write!(
                f,
                "Error: prefix length {len} exceeds the {family} cap of {max} bits."
            ),
        }
    }
}

impl std::error::Error for AddrParseError {}

/// A fatal error while loading the subnet table.
#[derive(Debug)]
pub enum LoadError {
    /// The input file could not be read.
    Io(std::io::Error),
    /// A `<prefix>/<len> <tag>` pair is missing its tag.
    MissingTagToken { entry: usize },
    /// The prefix token is not of the form `<address>/<len>`.
    BadPrefixToken { entry: usize, token: String },
    /// The prefix failed to parse, or its length exceeds the family cap.
    BadPrefix {
        entry: usize,
        source: AddrParseError,
    },
    /// The tag token is not a valid signed decimal integer.
    BadTag { entry: usize, token: String },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Io(e) => write!(f, "Error: failed to read input file: {e}"),
            LoadError::MissingTagToken { entry } => {
                write!(f, "Error: entry {entry} is missing its tag token.")
            }
            LoadError::BadPrefixToken { entry, token } => write!(
                f,
                "Error: entry {entry}'s prefix token '{token}' is not of the form <address>/<len>."
            ),
            LoadError::BadPrefix { entry, source } => {
                write!(f, "Error: entry {entry}'s prefix is invalid: {source}")
            }
            LoadError::BadTag { entry, token } => write!(
                f,
                "Error: entry {entry}'s tag '{token}' is not a signed decimal integer."
            ),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Io(e) => Some(e),
            LoadError::BadPrefix { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<std::io::Error> for LoadError {
    fn from(e: std::io::Error) -> Self {
        LoadError::Io(e)
    }
}

/// A fatal error while reading the query stream.
#[derive(Debug)]
pub enum QueryError {
    /// Reading or writing the stream failed.
    Io(std::io::Error),
    /// A query line failed to parse as an IPv4 or IPv6 address.
    Parse(AddrParseError),
    /// A query line exceeded the 63-character bound (spec.md §6.3).
    LineTooLong { len: usize },
}

impl fmt::Display for QueryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryError::Io(e) => write!(f, "Error: query stream I/O failed: {e}"),
            QueryError::Parse(e) => write!(f, "Error: {e}"),
            QueryError::LineTooLong { len } => {
                write!(f, "Error: query line of {len} characters exceeds the 63-character bound.")
            }
        }
    }
}

impl std::error::Error for QueryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            QueryError::Io(e) => Some(e),
            QueryError::Parse(e) => Some(e),
            QueryError::LineTooLong { .. } => None,
        }
    }
}

impl From<std::io::Error> for QueryError {
    fn from(e: std::io::Error) -> Self {
        QueryError::Io(e)
    }
}

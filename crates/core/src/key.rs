//! Row keys and their canonical byte encoding
//!
//! A [`Key`] identifies a row. Applications build keys from whatever
//! identifier they have at hand and the store only ever sees the bytes
//! produced by [`Key::to_bytes`].
//!
//! ## Contract
//!
//! These encodings are FROZEN; the store's comparators depend on them:
//! - `Bytes`: verbatim
//! - `Integer`: 4 bytes, big-endian two's complement
//! - `Long`: 8 bytes, big-endian two's complement
//! - `String`: UTF-8, no length prefix
//! - `TimeUuid`: 16 bytes, time fields most-significant first
//! - `Composite`: children's encodings concatenated, no delimiters
//!
//! Composite encodings carry no framing. Callers that need to split a
//! composite back into its parts must pick fixed-width children or children
//! that delimit themselves.

use crate::time_uuid::TimeUuid;
use std::fmt;
use thiserror::Error;

/// Identifier of a row
///
/// Equality and hashing follow the logical value, not the encoding:
/// `Key::Integer(42)` and `Key::Long(42)` are different rows even though
/// both are "42".
///
/// Composite keys can only be built through [`Key::composite`], which
/// rejects an empty child list.
///
/// # Examples
///
/// ```
/// use colbatch_core::Key;
///
/// let user = Key::string("alice");
/// assert_eq!(user.to_bytes(), b"alice");
///
/// let scoped = Key::composite(vec![Key::integer(7), Key::string("alice")]).unwrap();
/// assert_eq!(scoped.to_bytes(), b"\x00\x00\x00\x07alice");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Key {
    /// Opaque bytes, passed through unchanged
    Bytes(Vec<u8>),
    /// 32-bit signed integer
    Integer(i32),
    /// 64-bit signed integer
    Long(i64),
    /// UTF-8 string
    String(String),
    /// Version-1 UUID in time-ordered layout
    TimeUuid(TimeUuid),
    /// Ordered, non-empty sequence of child keys
    Composite(CompositeKey),
}

/// Children of a composite key
///
/// Never empty. The only way to obtain one is [`Key::composite`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CompositeKey(Vec<Key>);

impl CompositeKey {
    /// The child keys, in order
    pub fn as_slice(&self) -> &[Key] {
        &self.0
    }

    /// Number of children; at least one
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always `false`
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Key {
    /// Opaque byte key
    pub fn bytes(value: impl Into<Vec<u8>>) -> Self {
        Key::Bytes(value.into())
    }

    /// 32-bit integer key
    pub fn integer(value: i32) -> Self {
        Key::Integer(value)
    }

    /// 64-bit integer key
    pub fn long(value: i64) -> Self {
        Key::Long(value)
    }

    /// UTF-8 string key
    pub fn string(value: impl Into<String>) -> Self {
        Key::String(value.into())
    }

    /// Time-UUID key
    pub fn time_uuid(value: TimeUuid) -> Self {
        Key::TimeUuid(value)
    }

    /// Time-UUID key from its textual form
    ///
    /// # Errors
    ///
    /// Fails if `s` is not a UUID or is not version 1.
    pub fn parse_time_uuid(s: &str) -> Result<Self, KeyError> {
        TimeUuid::parse(s).map(Key::TimeUuid)
    }

    /// Composite key over `children`, in order
    ///
    /// # Errors
    ///
    /// Returns [`KeyError::EmptyComposite`] if there are no children.
    pub fn composite(children: impl IntoIterator<Item = Key>) -> Result<Self, KeyError> {
        let children: Vec<Key> = children.into_iter().collect();
        if children.is_empty() {
            return Err(KeyError::EmptyComposite);
        }
        Ok(Key::Composite(CompositeKey(children)))
    }

    /// Canonical byte encoding
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.encoded_len());
        self.encode_into(&mut out);
        out
    }

    /// Append the canonical encoding to `out`
    pub fn encode_into(&self, out: &mut Vec<u8>) {
        match self {
            Key::Bytes(bytes) => out.extend_from_slice(bytes),
            Key::Integer(v) => out.extend_from_slice(&v.to_be_bytes()),
            Key::Long(v) => out.extend_from_slice(&v.to_be_bytes()),
            Key::String(s) => out.extend_from_slice(s.as_bytes()),
            Key::TimeUuid(id) => out.extend_from_slice(&id.to_ordered_bytes()),
            Key::Composite(children) => {
                for child in children.as_slice() {
                    child.encode_into(out);
                }
            }
        }
    }

    /// Length of [`Key::to_bytes`] without allocating
    pub fn encoded_len(&self) -> usize {
        match self {
            Key::Bytes(bytes) => bytes.len(),
            Key::Integer(_) => 4,
            Key::Long(_) => 8,
            Key::String(s) => s.len(),
            Key::TimeUuid(_) => 16,
            Key::Composite(children) => children.as_slice().iter().map(Key::encoded_len).sum(),
        }
    }

    /// The value of a `Long` key
    pub fn as_long(&self) -> Option<i64> {
        match self {
            Key::Long(v) => Some(*v),
            _ => None,
        }
    }

    /// The UUID of a `TimeUuid` key
    pub fn as_time_uuid(&self) -> Option<&TimeUuid> {
        match self {
            Key::TimeUuid(id) => Some(id),
            _ => None,
        }
    }

    /// The children of a `Composite` key
    pub fn children(&self) -> Option<&[Key]> {
        match self {
            Key::Composite(children) => Some(children.as_slice()),
            _ => None,
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Bytes(bytes) => write!(f, "{:?}", bytes),
            Key::Integer(v) => write!(f, "{}", v),
            Key::Long(v) => write!(f, "{}", v),
            Key::String(s) => f.write_str(s),
            Key::TimeUuid(id) => write!(f, "{}", id),
            Key::Composite(children) => {
                for (i, child) in children.as_slice().iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", child)?;
                }
                Ok(())
            }
        }
    }
}

impl From<&str> for Key {
    fn from(s: &str) -> Self {
        Key::String(s.to_string())
    }
}

impl From<String> for Key {
    fn from(s: String) -> Self {
        Key::String(s)
    }
}

impl From<i32> for Key {
    fn from(v: i32) -> Self {
        Key::Integer(v)
    }
}

impl From<i64> for Key {
    fn from(v: i64) -> Self {
        Key::Long(v)
    }
}

impl From<TimeUuid> for Key {
    fn from(id: TimeUuid) -> Self {
        Key::TimeUuid(id)
    }
}

/// Precondition violations when constructing keys
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum KeyError {
    /// Composite key with no children
    #[error("Composite key requires at least one child key")]
    EmptyComposite,

    /// String could not be parsed as a UUID
    #[error("Invalid UUID '{input}': {reason}")]
    InvalidUuid {
        /// The rejected input
        input: String,
        /// Parser diagnostic
        reason: String,
    },

    /// UUID is well-formed but not time-based
    #[error("Expected a version 1 (time-based) UUID, got version {version}")]
    NotTimeUuid {
        /// Version nibble of the rejected UUID
        version: usize,
    },
}

impl KeyError {
    /// Stable reason code for diagnostics
    pub fn reason_code(&self) -> &'static str {
        match self {
            KeyError::EmptyComposite => "empty_composite",
            KeyError::InvalidUuid { .. } => "invalid_uuid",
            KeyError::NotTimeUuid { .. } => "not_time_uuid",
        }
    }
}

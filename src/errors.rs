//! Errors produced by the structural and dynamic codecs.
//!
//! Every failure is terminal for the call that produced it. An [`Error`] carries the
//! [`ErrorKind`] that caused it and the path (record fields, sequence indices,
//! dictionary keys) from the outermost value down to the place it failed.
//!
//! # Example
//!
//! ```
//! use vellum::prelude::*;
//!
//! // a string that claims five bytes but only carries two
//! let err = decode_full::<String>(&[5, b'h', b'i']).unwrap_err();
//!
//! match err.kind() {
//!     ErrorKind::EndOfBuffer { needed, remaining } => {
//!         assert_eq!(*needed, 5);
//!         assert_eq!(*remaining, 2);
//!     }
//!     other => panic!("unexpected error: {}", other),
//! }
//! ```

use failure::Fail;
use std::fmt;

#[derive(Debug, Fail, Clone, PartialEq, Eq)]
/// The reason a codec call failed.
pub enum ErrorKind {
    /// The buffer ran out before the next field was complete.
    #[fail(
        display = "end of buffer: needed {} bytes, {} remaining",
        needed, remaining
    )]
    EndOfBuffer {
        /// Bytes required by the field being read or written.
        needed: usize,
        /// Bytes that were actually available.
        remaining: usize,
    },
    /// A declared length or count is above the configured ceiling.
    #[fail(display = "declared length {} exceeds the limit of {}", len, limit)]
    SizeLimitExceeded {
        /// The length found in (or destined for) the stream.
        len: u64,
        /// The ceiling it was checked against.
        limit: u64,
    },
    /// The value does not fit the requested shape or category.
    #[fail(display = "type mismatch: {}", _0)]
    TypeMismatch(String),
    /// A dynamic value started with a tag byte no type is registered for.
    #[fail(display = "unhandled type tag {:#04x}", _0)]
    UnhandledTag(u8),
    /// The decode destination cannot be written to.
    #[fail(display = "destination `{}` is not mutable", _0)]
    NotMutable(&'static str),
    /// A varint ran past ten bytes or past 64 bits.
    #[fail(display = "variable-length integer overflows 64 bits")]
    VarintOverflow,
    /// A decoded string was not valid UTF-8.
    #[fail(display = "string is not valid UTF-8")]
    InvalidUtf8,
    /// Input remained after a decode that must consume the whole buffer.
    #[fail(display = "{} trailing bytes after value", _0)]
    TrailingBytes(usize),
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// One step of the path from the outermost value to a failure.
pub enum Segment {
    /// A record field, by name (tuple fields use their index as the name).
    Field(&'static str),
    /// An element of a sequence, array or list.
    Index(usize),
    /// An entry of a dynamic dictionary.
    Key(String),
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Segment::Field(name) => write!(f, ".{}", name),
            Segment::Index(i) => write!(f, "[{}]", i),
            Segment::Key(k) => write!(f, "[{:?}]", k),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// An error encountered while encoding or decoding.
pub struct Error {
    kind: ErrorKind,
    // innermost segment first, segments are pushed while unwinding
    path: Vec<Segment>,
}

impl Error {
    /// Creates an error with an empty path.
    pub fn new(kind: ErrorKind) -> Self { Error { kind, path: Vec::new() } }

    /// Shorthand for [`ErrorKind::EndOfBuffer`].
    pub fn end_of_buffer(needed: usize, remaining: usize) -> Self {
        Error::new(ErrorKind::EndOfBuffer { needed, remaining })
    }

    /// Shorthand for [`ErrorKind::SizeLimitExceeded`].
    pub fn size_limit(len: u64, limit: u64) -> Self {
        Error::new(ErrorKind::SizeLimitExceeded { len, limit })
    }

    /// Shorthand for [`ErrorKind::TypeMismatch`].
    pub fn type_mismatch<S: Into<String>>(msg: S) -> Self {
        Error::new(ErrorKind::TypeMismatch(msg.into()))
    }

    /// The reason for the failure.
    pub fn kind(&self) -> &ErrorKind { &self.kind }

    /// Consumes the error, returning its kind.
    pub fn into_kind(self) -> ErrorKind { self.kind }

    /// The path to the failure, outermost segment first.
    pub fn path(&self) -> impl Iterator<Item = &Segment> { self.path.iter().rev() }

    /// Marks the error as having happened inside the record field `name`.
    pub fn at_field(mut self, name: &'static str) -> Self {
        self.path.push(Segment::Field(name));
        self
    }

    /// Marks the error as having happened inside element `index`.
    pub fn at_index(mut self, index: usize) -> Self {
        self.path.push(Segment::Index(index));
        self
    }

    /// Marks the error as having happened inside the dictionary entry `key`.
    pub fn at_key<S: Into<String>>(mut self, key: S) -> Self {
        self.path.push(Segment::Key(key.into()));
        self
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self { Error::new(kind) }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.path.is_empty() {
            return write!(f, "{}", self.kind);
        }
        write!(f, "at ")?;
        for seg in self.path() {
            write!(f, "{}", seg)?;
        }
        write!(f, ": {}", self.kind)
    }
}

impl Fail for Error {
    fn cause(&self) -> Option<&dyn Fail> { Some(&self.kind) }
}

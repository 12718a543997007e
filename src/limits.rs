//! Decode-time ceilings for counts read off the wire.
//!
//! Both codecs read a count before allocating storage for the elements it announces.
//! A corrupt or hostile buffer can announce billions of elements in a handful of bytes,
//! so every count is checked against a [`Limits`] before anything is allocated.
//!
//! # Example
//!
//! ```
//! use vellum::prelude::*;
//!
//! // three `i8`s
//! let bytes = [3, 1, 2, 3];
//!
//! // the default ceiling lets it through
//! let ok: Vec<i8> = decode(&mut Reader::new(&bytes[..])).unwrap();
//! assert_eq!(ok, vec![1, 2, 3]);
//!
//! // a tighter one does not
//! let tight = Limits::default().with_max_sequence_len(2);
//! let err = decode::<Vec<i8>, _>(&mut Reader::with_limits(&bytes[..], tight)).unwrap_err();
//! assert!(matches!(err.kind(), ErrorKind::SizeLimitExceeded { len: 3, limit: 2 }));
//! ```

/// Default ceiling for structural sequence counts.
pub const DEFAULT_MAX_SEQUENCE_LEN: usize = 10_000;
/// Default ceiling for dynamic list and dictionary counts.
pub const DEFAULT_MAX_COLLECTION_LEN: usize = 10_000;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
/// Count ceilings applied while decoding.
pub struct Limits {
    /// Largest element count accepted for a structural sequence.
    pub max_sequence_len: usize,
    /// Largest element count accepted for a dynamic list or dictionary.
    pub max_collection_len: usize,
}

impl Limits {
    /// Limits that accept any count the platform can address.
    ///
    /// Only use this for trusted input.
    pub fn unbounded() -> Self {
        Limits {
            max_sequence_len: usize::max_value(),
            max_collection_len: usize::max_value(),
        }
    }

    /// Sets the structural sequence ceiling.
    pub fn with_max_sequence_len(mut self, len: usize) -> Self {
        self.max_sequence_len = len;
        self
    }

    /// Sets the dynamic list and dictionary ceiling.
    pub fn with_max_collection_len(mut self, len: usize) -> Self {
        self.max_collection_len = len;
        self
    }
}

impl Default for Limits {
    fn default() -> Self {
        Limits {
            max_sequence_len: DEFAULT_MAX_SEQUENCE_LEN,
            max_collection_len: DEFAULT_MAX_COLLECTION_LEN,
        }
    }
}

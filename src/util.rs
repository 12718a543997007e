/// Helper macro to make implementing `From` easier.
macro_rules! from_fn {
    ($to:ty, $from:ty, $fn:expr) => {
        impl From<$from> for $to {
            fn from(f: $from) -> $to { $fn(f) }
        }
    };
}

/// Helper macro to implement `From` by widening through a lossless cast.
macro_rules! from_as {
    ($to:tt, $as:ty, $($from:ty),*) => {
        $(impl From<$from> for $to {
            fn from(f: $from) -> $to { $to::from(f as $as) }
        })*
    };
}

/// Helper macro to implement `TryFrom` for the payload of a single variant.
macro_rules! try_from_ctor {
    ($from:ident, $to:ty, $variant:ident, $kind:expr) => {
        impl TryFrom<$from> for $to {
            type Error = Error;

            fn try_from(v: $from) -> Result<$to, Error> {
                match v {
                    $from::$variant(x) => Ok(x),
                    other => Err(Error::type_mismatch(format!(
                        "expected {}, found {}",
                        $kind,
                        other.kind()
                    ))),
                }
            }
        }
    };
}

//! Error types for sort calls and their primitives.

use std::convert::Infallible;
use std::fmt;

/// Errors reported by a sort call or one of the public primitives.
///
/// `E` is the comparator's own error type. Comparators that cannot fail use
/// [`Infallible`], which is also the default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SortError<E = Infallible> {
    /// A half-open range with `start > end`, or one reaching past the slice.
    InvalidRange {
        start: usize,
        end: usize,
        len: usize,
    },

    /// A run query whose start lies before the start of an earlier query on
    /// the same cursor.
    OutOfOrderQuery { start: usize, previous: usize },

    /// The comparator itself failed. The slice contents are unspecified.
    Comparator(E),
}

impl SortError {
    /// Re-types an error that cannot carry a comparator failure.
    pub fn widen<E>(self) -> SortError<E> {
        match self {
            SortError::InvalidRange { start, end, len } => {
                SortError::InvalidRange { start, end, len }
            }
            SortError::OutOfOrderQuery { start, previous } => {
                SortError::OutOfOrderQuery { start, previous }
            }
            SortError::Comparator(never) => match never {},
        }
    }
}

impl<E: fmt::Display> fmt::Display for SortError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortError::InvalidRange { start, end, len } => {
                write!(f, "invalid range {}..{} for slice of length {}", start, end, len)
            }
            SortError::OutOfOrderQuery { start, previous } => {
                write!(
                    f,
                    "run query at {} after a query at {}: queries must not move left",
                    start, previous
                )
            }
            SortError::Comparator(err) => write!(f, "comparator failed: {}", err),
        }
    }
}

impl<E: std::error::Error + 'static> std::error::Error for SortError<E> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SortError::Comparator(err) => Some(err),
            _ => None,
        }
    }
}

/// Rejects `start > end` and ranges reaching past `len`.
pub(crate) fn check_range(start: usize, end: usize, len: usize) -> Result<(), SortError> {
    if start > end || end > len {
        return Err(SortError::InvalidRange { start, end, len });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Boom;

    impl fmt::Display for Boom {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("boom")
        }
    }

    impl std::error::Error for Boom {}

    #[test]
    fn check_range_bounds() {
        assert!(check_range(0, 0, 0).is_ok());
        assert!(check_range(2, 5, 5).is_ok());
        assert_eq!(
            check_range(3, 2, 5),
            Err(SortError::InvalidRange { start: 3, end: 2, len: 5 })
        );
        assert_eq!(
            check_range(0, 6, 5),
            Err(SortError::InvalidRange { start: 0, end: 6, len: 5 })
        );
    }

    #[test]
    fn widen_keeps_payload() {
        let err = SortError::OutOfOrderQuery { start: 1, previous: 4 };
        let widened: SortError<Boom> = err.widen();
        assert!(matches!(
            widened,
            SortError::OutOfOrderQuery { start: 1, previous: 4 }
        ));
    }

    #[test]
    fn comparator_error_is_source() {
        use std::error::Error;

        let err: SortError<Boom> = SortError::Comparator(Boom);
        assert_eq!(err.to_string(), "comparator failed: boom");
        assert!(err.source().is_some());

        let err: SortError<Boom> = SortError::InvalidRange { start: 0, end: 9, len: 3 };
        assert!(err.source().is_none());
    }
}

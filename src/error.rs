use std::error;
use std::fmt;
use std::result;

/// Errors raised when a `SkipList` is configured or used out of order.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Error {
    /// An ordering operation was attempted before a comparator was bound.
    UninitializedComparator,
    /// A comparator was bound after the list already held a value.
    ImmutableComparator,
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::UninitializedComparator => write!(f, "comparator used before it was set"),
            Error::ImmutableComparator => {
                write!(f, "cannot change comparator after adding elements")
            }
        }
    }
}

pub type Result<T> = result::Result<T, Error>;

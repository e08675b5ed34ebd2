use crate::error::{Error, Result};
use std::cmp::Ordering;

type CompareFn<T> = dyn Fn(&T, &T) -> Ordering;

/// A slot for the ordering function of a `SkipList`.
///
/// The slot starts empty. It may be written any number of times while the owning list is empty
/// and becomes read-only once the list holds a value.
pub(crate) struct ComparatorCell<T> {
    compare: Option<Box<CompareFn<T>>>,
}

impl<T> ComparatorCell<T> {
    pub fn new() -> Self {
        ComparatorCell { compare: None }
    }

    /// Stores `compare`, replacing any previous function. `is_mutated` must be `true` once the
    /// owning list holds at least one value.
    pub fn bind<F>(&mut self, compare: F, is_mutated: bool) -> Result<()>
    where
        F: Fn(&T, &T) -> Ordering + 'static,
    {
        if is_mutated {
            debug!("rejected comparator for non-empty list");
            return Err(Error::ImmutableComparator);
        }
        debug!(
            "{} comparator",
            if self.compare.is_some() { "replaced" } else { "bound" },
        );
        self.compare = Some(Box::new(compare));
        Ok(())
    }

    pub fn ensure_bound(&self) -> Result<()> {
        self.compare.as_ref().map(|_| ()).ok_or(Error::UninitializedComparator)
    }

    pub fn compare(&self, a: &T, b: &T) -> Result<Ordering> {
        match self.compare {
            Some(ref compare) => Ok(compare(a, b)),
            None => Err(Error::UninitializedComparator),
        }
    }
}

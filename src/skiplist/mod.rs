//! Probabilistic linked hierarchy of subsequences.

mod list;
mod node;

pub use self::list::{Iter, SkipList, PROMOTION_PROBABILITY};

//! A sorted sequence backed by a skiplist.
//!
//! Values are kept in the order given by a caller-supplied comparator. Insertion runs in expected
//! `O(log N)` time and iteration walks the values in sorted order. The list grows only: there is
//! no removal or lookup by key.
//!
//! # Examples
//! ```
//! use sorted_skiplist::SkipList;
//!
//! let mut list = SkipList::new();
//! list.set_comparator(|a: &String, b: &String| a.cmp(b)).unwrap();
//!
//! for word in &["pear", "apple", "fig"] {
//!     list.insert(word.to_string()).unwrap();
//! }
//!
//! let words: Vec<&str> = list.iter().map(|word| word.as_str()).collect();
//! assert_eq!(words, vec!["apple", "fig", "pear"]);
//! ```

#[macro_use]
extern crate log;
extern crate rand;
extern crate serde;
#[macro_use]
extern crate serde_derive;

mod arena;
mod comparator;
mod error;
mod options;
pub mod skiplist;
mod source;

pub use self::arena::Entry as NodeHandle;
pub use self::error::{Error, Result};
pub use self::options::{Options, DEFAULT_CHUNK_SIZE};
pub use self::skiplist::{Iter, SkipList, PROMOTION_PROBABILITY};
pub use self::source::{SequenceSource, UniformSource, XorShiftSource};

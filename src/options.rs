/// Number of nodes per arena chunk used by `Options::default`.
pub const DEFAULT_CHUNK_SIZE: usize = 1024;

/// Construction options for a `SkipList`.
///
/// # Examples
/// ```
/// use sorted_skiplist::{Options, SkipList, XorShiftSource};
///
/// let options = Options { chunk_size: 64 };
/// let list: SkipList<u32, _> = SkipList::with_options(options, XorShiftSource::new());
/// assert!(list.is_empty());
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Number of nodes stored per arena chunk. Must be non-zero.
    pub chunk_size: usize,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }
}

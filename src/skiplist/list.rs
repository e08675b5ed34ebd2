use super::node::Node;
use crate::arena::{Entry, TypedArena};
use crate::comparator::ComparatorCell;
use crate::error::Result;
use crate::options::Options;
use crate::source::{UniformSource, XorShiftSource};
use std::cmp::Ordering;
use std::mem;

/// The probability that a node present at level `k` is also promoted to level `k + 1`.
pub const PROMOTION_PROBABILITY: f64 = 0.5;

/// A sorted sequence implemented by a skiplist.
///
/// A skiplist is a probabilistic data structure that maintains a linked hierarchy of
/// subsequences. The first subsequence is a sorted linked list of all the values it contains.
/// Each successive subsequence contains approximately half the nodes of the previous one, so an
/// insertion can skip over most of the list and runs in expected logarithmic time.
///
/// The order is given by a comparator bound with `set_comparator` before the second value is
/// inserted. Values that compare equal are all kept; a new value is placed in front of the values
/// it is equal to.
///
/// # Examples
/// ```
/// use sorted_skiplist::SkipList;
///
/// let mut list = SkipList::new();
/// list.set_comparator(|a: &u32, b: &u32| a.cmp(b)).unwrap();
/// list.insert(3).unwrap();
/// list.insert(1).unwrap();
/// list.insert(2).unwrap();
///
/// assert_eq!(list.len(), 3);
/// assert_eq!(list.to_vec(), vec![1, 2, 3]);
/// ```
pub struct SkipList<T, S = XorShiftSource> {
    arena: TypedArena<Node<T>>,
    head: Entry,
    tail: Entry,
    comparator: ComparatorCell<T>,
    source: S,
}

impl<T> SkipList<T> {
    /// Constructs a new, empty `SkipList<T>` with no comparator bound.
    ///
    /// # Examples
    /// ```
    /// use sorted_skiplist::SkipList;
    ///
    /// let list: SkipList<u32> = SkipList::new();
    /// ```
    pub fn new() -> Self {
        Self::with_options(Options::default(), XorShiftSource::new())
    }
}

impl<T, S> SkipList<T, S>
where
    S: UniformSource,
{
    /// Constructs a new, empty `SkipList<T, S>` that draws promotion decisions from `source`.
    ///
    /// # Examples
    /// ```
    /// use sorted_skiplist::{SequenceSource, SkipList};
    ///
    /// // never promotes a node above level 0
    /// let list: SkipList<u32, _> = SkipList::with_source(SequenceSource::new(vec![0.9]));
    /// ```
    pub fn with_source(source: S) -> Self {
        Self::with_options(Options::default(), source)
    }

    /// Constructs a new, empty `SkipList<T, S>` from `options` and `source`.
    ///
    /// # Panics
    ///
    /// Panics if `options.chunk_size` is zero.
    pub fn with_options(options: Options, source: S) -> Self {
        let mut arena = TypedArena::new(options.chunk_size);
        let tail = arena.allocate(Node::sentinel());
        let mut head_node = Node::sentinel();
        head_node.next.push(tail);
        let head = arena.allocate(head_node);
        SkipList {
            arena,
            head,
            tail,
            comparator: ComparatorCell::new(),
            source,
        }
    }

    fn height(&self) -> usize {
        self.arena[self.head].height()
    }

    /// Binds the function used to order values. `compare(a, b)` returns `Ordering::Less` if `a`
    /// belongs before `b`.
    ///
    /// The comparator may be replaced while the list is empty. Once a value has been inserted,
    /// this returns `Error::ImmutableComparator` and keeps the current comparator.
    ///
    /// # Examples
    /// ```
    /// use sorted_skiplist::{Error, SkipList};
    ///
    /// let mut list = SkipList::new();
    /// assert_eq!(list.set_comparator(|a: &u32, b: &u32| a.cmp(b)), Ok(()));
    /// list.insert(1).unwrap();
    /// assert_eq!(
    ///     list.set_comparator(|a: &u32, b: &u32| b.cmp(a)),
    ///     Err(Error::ImmutableComparator),
    /// );
    /// ```
    pub fn set_comparator<F>(&mut self, compare: F) -> Result<()>
    where
        F: Fn(&T, &T) -> Ordering + 'static,
    {
        let is_mutated = !self.is_empty();
        self.comparator.bind(compare, is_mutated)
    }

    // sentinels order after every value
    fn compare(&self, a: &Node<T>, b: &Node<T>) -> Result<Ordering> {
        match (&a.value, &b.value) {
            (None, _) => Ok(Ordering::Greater),
            (_, None) => Ok(Ordering::Less),
            (Some(a), Some(b)) => self.comparator.compare(a, b),
        }
    }

    /// Returns the insertion path for `candidate`: for each level of the head, the last node
    /// that orders strictly before `candidate`.
    fn find(&self, candidate: &Node<T>) -> Result<Vec<Entry>> {
        let height = self.height();
        let mut path = vec![self.head; height];
        let mut curr_node = self.head;

        for level in (0..height).rev() {
            loop {
                let next_node = self.arena[curr_node].get_pointer(level);
                if self.compare(&self.arena[next_node], candidate)? != Ordering::Less {
                    break;
                }
                curr_node = next_node;
            }
            path[level] = curr_node;
        }

        Ok(path)
    }

    /// Splices `node` into `level` directly after `before`. `before` must already participate in
    /// `level` unless it is the head, which grows by one level.
    fn link_after(&mut self, before: Entry, node: Entry, level: usize) {
        let tail = self.tail;
        let after = {
            let links = &mut self.arena[before].next;
            if level < links.len() {
                mem::replace(&mut links[level], node)
            } else {
                assert_eq!(
                    links.len(),
                    level,
                    "cannot link at level {} after a node of height {}",
                    level,
                    links.len(),
                );
                links.push(node);
                trace!("grew to height {}", level + 1);
                tail
            }
        };

        let links = &mut self.arena[node].next;
        assert_eq!(links.len(), level, "node levels must be linked bottom up");
        links.push(after);
    }

    /// Inserts a value into its sorted position in the list and returns a handle to the new node.
    ///
    /// The first value inserted into an empty list needs no comparison. Every later insertion
    /// fails with `Error::UninitializedComparator` if no comparator is bound, in which case the
    /// list is left unchanged.
    ///
    /// # Examples
    /// ```
    /// use sorted_skiplist::{Error, SkipList};
    ///
    /// let mut list = SkipList::new();
    /// assert!(list.insert(1).is_ok());
    /// assert_eq!(list.insert(2), Err(Error::UninitializedComparator));
    /// assert_eq!(list.len(), 1);
    /// ```
    pub fn insert(&mut self, value: T) -> Result<Entry> {
        let mut new_node = Node::new(value);

        if self.is_empty() {
            new_node.next.push(self.tail);
            let handle = self.arena.allocate(new_node);
            self.arena[self.head].next[0] = handle;
            trace!("inserted {:?} into empty list", handle);
            return Ok(handle);
        }

        self.comparator.ensure_bound()?;
        let path = self.find(&new_node)?;
        let handle = self.arena.allocate(new_node);

        let mut level = 0;
        loop {
            let before = path.get(level).cloned().unwrap_or(self.head);
            self.link_after(before, handle, level);
            level += 1;

            if self.source.next_uniform() >= PROMOTION_PROBABILITY {
                break;
            }
        }

        trace!("inserted {:?} with height {}", handle, level);
        Ok(handle)
    }

    /// Returns the number of values in the list.
    ///
    /// # Examples
    /// ```
    /// use sorted_skiplist::SkipList;
    ///
    /// let mut list = SkipList::new();
    /// list.insert(1).unwrap();
    /// assert_eq!(list.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        // the head and the terminal sentinel
        self.arena.len() - 2
    }

    /// Returns `true` if the list is empty.
    ///
    /// # Examples
    /// ```
    /// use sorted_skiplist::SkipList;
    ///
    /// let list: SkipList<u32> = SkipList::new();
    /// assert!(list.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.arena[self.head].get_pointer(0) == self.tail
    }

    /// Returns an iterator over the values of the list in sorted order. Each call starts a new
    /// traversal from the front.
    ///
    /// # Examples
    /// ```
    /// use sorted_skiplist::SkipList;
    ///
    /// let mut list = SkipList::new();
    /// list.set_comparator(|a: &u32, b: &u32| a.cmp(b)).unwrap();
    /// list.insert(2).unwrap();
    /// list.insert(1).unwrap();
    ///
    /// let mut iterator = list.iter();
    /// assert_eq!(iterator.next(), Some(&1));
    /// assert_eq!(iterator.next(), Some(&2));
    /// assert_eq!(iterator.next(), None);
    /// ```
    pub fn iter(&self) -> Iter<T> {
        Iter {
            arena: &self.arena,
            current: self.arena[self.head].get_pointer(0),
            remaining: self.len(),
        }
    }

    /// Returns the values of the list in sorted order.
    ///
    /// # Examples
    /// ```
    /// use sorted_skiplist::SkipList;
    ///
    /// let mut list = SkipList::new();
    /// list.set_comparator(|a: &u32, b: &u32| a.cmp(b)).unwrap();
    /// list.insert(4).unwrap();
    /// list.insert(3).unwrap();
    /// assert_eq!(list.to_vec(), vec![3, 4]);
    /// ```
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }
}

impl<T> Default for SkipList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T: 'a, S> IntoIterator for &'a SkipList<T, S>
where
    S: UniformSource,
{
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An iterator for `SkipList<T, S>`.
///
/// This iterator walks level 0 of the list and yields immutable references in sorted order.
pub struct Iter<'a, T: 'a> {
    arena: &'a TypedArena<Node<T>>,
    current: Entry,
    remaining: usize,
}

impl<'a, T: 'a> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let arena = self.arena;
        let node = &arena[self.current];
        match node.value {
            Some(ref value) => {
                self.current = node.get_pointer(0);
                self.remaining -= 1;
                Some(value)
            }
            None => None,
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T: 'a> ExactSizeIterator for Iter<'a, T> {}

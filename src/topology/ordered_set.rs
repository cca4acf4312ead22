//! Insertion-ordered set with positional insert.
//!
//! [`OrderedSet`] is a hash-indexed doubly linked sequence: each member maps
//! to its neighbours in iteration order, so membership, positional insert and
//! removal are all O(1) expected, and touching one member never moves any
//! other member.

use hashbrown::HashMap;
use itertools::Itertools;
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Link<T> {
    prev: Option<T>,
    next: Option<T>,
}

/// Order-preserving set of copyable keys.
///
/// Iteration order is exactly the order callers asked for: appends go to
/// the back, [`insert`](Self::insert) with a `before` anchor lands
/// immediately ahead of it.
#[derive(Clone)]
pub struct OrderedSet<T> {
    links: HashMap<T, Link<T>>,
    head: Option<T>,
    tail: Option<T>,
}

impl<T> Default for OrderedSet<T> {
    fn default() -> Self {
        Self {
            links: HashMap::new(),
            head: None,
            tail: None,
        }
    }
}

impl<T> OrderedSet<T>
where
    T: Copy + Eq + std::hash::Hash,
{
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            links: HashMap::with_capacity(capacity),
            head: None,
            tail: None,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.links.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    #[inline]
    pub fn contains(&self, item: &T) -> bool {
        self.links.contains_key(item)
    }

    /// First member in iteration order.
    #[inline]
    pub fn front(&self) -> Option<T> {
        self.head
    }

    /// Last member in iteration order.
    #[inline]
    pub fn back(&self) -> Option<T> {
        self.tail
    }

    /// Insert `item` immediately before `before`, or at the back when
    /// `before` is `None` or not a member.
    ///
    /// Returns `false` and leaves the set untouched if `item` is already a
    /// member; an existing member is never repositioned by this call.
    pub fn insert(&mut self, before: Option<T>, item: T) -> bool {
        if self.links.contains_key(&item) {
            return false;
        }
        let anchor = before.filter(|b| self.links.contains_key(b));
        match anchor {
            Some(next) => {
                let prev = self.links.get(&next).and_then(|l| l.prev);
                if let Some(l) = self.links.get_mut(&next) {
                    l.prev = Some(item);
                }
                match prev {
                    Some(p) => {
                        if let Some(l) = self.links.get_mut(&p) {
                            l.next = Some(item);
                        }
                    }
                    None => self.head = Some(item),
                }
                self.links.insert(
                    item,
                    Link {
                        prev,
                        next: Some(next),
                    },
                );
            }
            None => {
                let prev = self.tail;
                match prev {
                    Some(p) => {
                        if let Some(l) = self.links.get_mut(&p) {
                            l.next = Some(item);
                        }
                    }
                    None => self.head = Some(item),
                }
                self.tail = Some(item);
                self.links.insert(item, Link { prev, next: None });
            }
        }
        true
    }

    /// Append `item` at the back. Same as `insert(None, item)`.
    #[inline]
    pub fn push_back(&mut self, item: T) -> bool {
        self.insert(None, item)
    }

    /// Remove `item`, returning whether it was a member.
    pub fn remove(&mut self, item: &T) -> bool {
        let Some(Link { prev, next }) = self.links.remove(item) else {
            return false;
        };
        match prev {
            Some(p) => {
                if let Some(l) = self.links.get_mut(&p) {
                    l.next = next;
                }
            }
            None => self.head = next,
        }
        match next {
            Some(n) => {
                if let Some(l) = self.links.get_mut(&n) {
                    l.prev = prev;
                }
            }
            None => self.tail = prev,
        }
        true
    }

    pub fn clear(&mut self) {
        self.links.clear();
        self.head = None;
        self.tail = None;
    }

    /// Zero-based position of `item` in iteration order. O(n).
    pub fn position(&self, item: &T) -> Option<usize> {
        if !self.contains(item) {
            return None;
        }
        self.iter().position(|x| x == *item)
    }

    /// Iterate members in their current order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            set: self,
            cursor: self.head,
            remaining: self.links.len(),
        }
    }

    /// Snapshot of the current order.
    pub fn order(&self) -> Vec<T> {
        self.iter().collect()
    }

    /// Whether walking the links visits every member exactly once.
    pub(crate) fn links_consistent(&self) -> bool {
        let walked = self.order();
        walked.len() == self.len()
            && walked.iter().all_unique()
            && walked.iter().all(|x| self.links.contains_key(x))
    }
}

/// Iterator over an [`OrderedSet`] in order.
pub struct Iter<'a, T> {
    set: &'a OrderedSet<T>,
    cursor: Option<T>,
    remaining: usize,
}

impl<T> Iterator for Iter<'_, T>
where
    T: Copy + Eq + std::hash::Hash,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.remaining == 0 {
            return None;
        }
        let current = self.cursor?;
        self.cursor = self.set.links.get(&current).and_then(|l| l.next);
        self.remaining -= 1;
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> where T: Copy + Eq + std::hash::Hash {}

impl<'a, T> IntoIterator for &'a OrderedSet<T>
where
    T: Copy + Eq + std::hash::Hash,
{
    type Item = T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> Extend<T> for OrderedSet<T>
where
    T: Copy + Eq + std::hash::Hash,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push_back(item);
        }
    }
}

impl<T> FromIterator<T> for OrderedSet<T>
where
    T: Copy + Eq + std::hash::Hash,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = OrderedSet::new();
        set.extend(iter);
        set
    }
}

impl<T> PartialEq for OrderedSet<T>
where
    T: Copy + Eq + std::hash::Hash,
{
    /// Equal when both hold the same members in the same order.
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T> Eq for OrderedSet<T> where T: Copy + Eq + std::hash::Hash {}

impl<T> fmt::Debug for OrderedSet<T>
where
    T: Copy + Eq + std::hash::Hash + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

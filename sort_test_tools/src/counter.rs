//! Construction and destruction bookkeeping for container tests.
//!
//! A [`CountRegistry`] is created per test and handed to every value it should observe, so
//! concurrent tests never share counts.

use std::cell::RefCell;
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Counts {
    pub constructed: usize,
    pub destructed: usize,
}

impl Counts {
    pub fn live(&self) -> isize {
        self.constructed as isize - self.destructed as isize
    }
}

pub struct CountRegistry<K: Ord> {
    counts: Rc<RefCell<BTreeMap<K, Counts>>>,
}

impl<K: Ord + Clone> CountRegistry<K> {
    pub fn new() -> Self {
        Self {
            counts: Rc::new(RefCell::new(BTreeMap::new())),
        }
    }

    /// Creates a value observed by this registry, counting one construction of `key`.
    pub fn track(&self, key: K) -> Counted<K> {
        note_constructed(&self.counts, &key);
        Counted {
            key,
            counts: Rc::clone(&self.counts),
        }
    }

    pub fn counts(&self, key: &K) -> Counts {
        self.counts.borrow().get(key).copied().unwrap_or_default()
    }

    pub fn constructed(&self, key: &K) -> usize {
        self.counts(key).constructed
    }

    pub fn destructed(&self, key: &K) -> usize {
        self.counts(key).destructed
    }

    /// Number of values currently alive across all keys.
    pub fn live(&self) -> isize {
        self.counts.borrow().values().map(Counts::live).sum()
    }

    /// Returns `true` if every key was destroyed exactly as often as it was constructed.
    pub fn is_balanced(&self) -> bool {
        self.counts
            .borrow()
            .values()
            .all(|c| c.constructed == c.destructed)
    }

    /// Keys whose construction and destruction counts differ.
    pub fn unbalanced(&self) -> Vec<(K, Counts)> {
        self.counts
            .borrow()
            .iter()
            .filter(|(_, c)| c.constructed != c.destructed)
            .map(|(k, c)| (k.clone(), *c))
            .collect()
    }
}

impl<K: Ord + Clone> Default for CountRegistry<K> {
    fn default() -> Self {
        Self::new()
    }
}

fn note_constructed<K: Ord + Clone>(counts: &RefCell<BTreeMap<K, Counts>>, key: &K) {
    counts.borrow_mut().entry(key.clone()).or_default().constructed += 1;
}

/// A value that reports its copies and drops to the [`CountRegistry`] that created it.
///
/// Moves are not observable, only `track`, `clone` and `drop` are.
pub struct Counted<K: Ord + Clone> {
    key: K,
    counts: Rc<RefCell<BTreeMap<K, Counts>>>,
}

impl<K: Ord + Clone> Counted<K> {
    pub fn key(&self) -> &K {
        &self.key
    }
}

impl<K: Ord + Clone> Clone for Counted<K> {
    fn clone(&self) -> Self {
        note_constructed(&self.counts, &self.key);
        Self {
            key: self.key.clone(),
            counts: Rc::clone(&self.counts),
        }
    }
}

impl<K: Ord + Clone> Drop for Counted<K> {
    fn drop(&mut self) {
        self.counts
            .borrow_mut()
            .entry(self.key.clone())
            .or_default()
            .destructed += 1;
    }
}

impl<K: Ord + Clone> PartialEq for Counted<K> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl<K: Ord + Clone> Eq for Counted<K> {}

impl<K: Ord + Clone> PartialOrd for Counted<K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K: Ord + Clone> Ord for Counted<K> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key.cmp(&other.key)
    }
}

impl<K: Ord + Clone + fmt::Debug> fmt::Debug for Counted<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Counted").field(&self.key).finish()
    }
}

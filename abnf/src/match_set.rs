use std::{
    collections::{BTreeSet, btree_set},
    iter::Copied,
};

/// Every prefix length at which a recognizer accepts its input.
///
/// An empty set means the production does not match at all, `{0}` means it
/// matches the empty prefix. Offsets are iterated in ascending order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchSet(BTreeSet<usize>);

impl MatchSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// The set `{0}`.
    pub fn empty_prefix() -> Self {
        Self::single(0)
    }

    pub fn single(offset: usize) -> Self {
        Self(BTreeSet::from([offset]))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn contains(&self, offset: usize) -> bool {
        self.0.contains(&offset)
    }

    /// Adds `offset`, returning `false` if it was already present.
    pub fn insert(&mut self, offset: usize) -> bool {
        self.0.insert(offset)
    }

    pub fn iter(&self) -> Iter<'_> {
        self.0.iter().copied()
    }

    /// The maximum offset, used by longest-match parsing.
    pub fn longest(&self) -> Option<usize> {
        self.0.last().copied()
    }

    /// The minimum non-zero offset, used by exact-match parsing of delimiters.
    pub fn shortest(&self) -> Option<usize> {
        self.0.range(1..).next().copied()
    }

    /// Moves every offset forward by `by`, as needed when a match found on
    /// `data[by..]` is reported relative to `data`.
    pub fn shifted(self, by: usize) -> Self {
        self.0.into_iter().map(|offset| offset + by).collect()
    }

    pub fn union(mut self, other: MatchSet) -> Self {
        self.0.extend(other.0);
        self
    }

    pub fn to_vec(&self) -> Vec<usize> {
        self.iter().collect()
    }
}

pub type Iter<'a> = Copied<btree_set::Iter<'a, usize>>;

impl FromIterator<usize> for MatchSet {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Extend<usize> for MatchSet {
    fn extend<I: IntoIterator<Item = usize>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

impl<const N: usize> From<[usize; N]> for MatchSet {
    fn from(offsets: [usize; N]) -> Self {
        offsets.into_iter().collect()
    }
}

impl From<Option<usize>> for MatchSet {
    fn from(offset: Option<usize>) -> Self {
        offset.into_iter().collect()
    }
}

impl IntoIterator for MatchSet {
    type Item = usize;
    type IntoIter = btree_set::IntoIter<usize>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a MatchSet {
    type Item = usize;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

//! Composition operators of RFC5234 §3.
//!
//! Every combinator is order-independent: all branches and all split points
//! are explored, so ambiguity propagates into the resulting [`MatchSet`]
//! instead of being resolved here. Picking one offset is the job of the
//! caller (see [`crate::parse_longest`] and [`crate::parse_shortest`]).
//!
//! # Cost
//!
//! Results are not computed in linear time. Nested concatenations over long
//! buffers can create and merge large intermediate sets, which is fine for
//! header-sized input. Unbounded or untrusted input needs a size cap before
//! it reaches a recognizer.

use std::collections::{HashSet, VecDeque};

use crate::{BoxedRecognizer, MatchSet, Recognizer};

/// `R1 R2 ... Rn`
pub struct Concatenation {
    elements: Vec<BoxedRecognizer>,
}

impl Concatenation {
    pub fn new(elements: Vec<BoxedRecognizer>) -> Self {
        Self { elements }
    }
}

impl Recognizer for Concatenation {
    fn find(&self, data: &[u8]) -> MatchSet {
        let mut ends = MatchSet::empty_prefix();

        for element in &self.elements {
            let mut next = MatchSet::new();
            for start in &ends {
                next.extend(element.find(&data[start..]).shifted(start));
            }
            if next.is_empty() {
                return next;
            }
            ends = next;
        }

        ends
    }
}

/// `R1 / R2 / ... / Rn`
pub struct Alternatives {
    branches: Vec<BoxedRecognizer>,
}

impl Alternatives {
    pub fn new(branches: Vec<BoxedRecognizer>) -> Self {
        Self { branches }
    }
}

impl Recognizer for Alternatives {
    fn find(&self, data: &[u8]) -> MatchSet {
        self.branches
            .iter()
            .fold(MatchSet::new(), |acc, branch| acc.union(branch.find(data)))
    }
}

/// `[ R ]`
pub struct Optional<R> {
    element: R,
}

impl<R: Recognizer> Recognizer for Optional<R> {
    fn find(&self, data: &[u8]) -> MatchSet {
        let mut ends = self.element.find(data);
        ends.insert(0);
        ends
    }
}

pub fn optional<R: Recognizer>(element: R) -> Optional<R> {
    Optional { element }
}

/// `min*max R`, with `max = None` standing for an unbounded upper limit.
pub struct Repetition<R> {
    element: R,
    min: usize,
    max: Option<usize>,
}

impl<R: Recognizer> Repetition<R> {
    pub fn new(element: R, min: usize, max: Option<usize>) -> Self {
        Self { element, min, max }
    }

    /// Lazily enumerates the accepted offsets, each one exactly once.
    ///
    /// Offsets are produced breadth-first, so the repetition count of the
    /// first arrival at an offset is minimal. Calling it again restarts the
    /// search from scratch.
    pub fn offsets<'a>(&'a self, data: &'a [u8]) -> Offsets<'a, R> {
        Offsets::new(self, data)
    }

    // Counts past `min` are interchangeable when there is no upper bound,
    // which keeps the state space at (len + 1) * (min + 1).
    fn state_count(&self, count: usize) -> usize {
        match self.max {
            Some(_) => count,
            None => count.min(self.min),
        }
    }

    fn can_repeat(&self, count: usize) -> bool {
        self.max.is_none_or(|max| count < max)
    }
}

impl<R: Recognizer> Recognizer for Repetition<R> {
    fn find(&self, data: &[u8]) -> MatchSet {
        self.offsets(data).collect()
    }
}

/// Iterator returned by [`Repetition::offsets`].
pub struct Offsets<'a, R> {
    repetition: &'a Repetition<R>,
    data: &'a [u8],
    queue: VecDeque<(usize, usize)>,
    visited: HashSet<(usize, usize)>,
    accepted: Vec<bool>,
}

impl<'a, R: Recognizer> Offsets<'a, R> {
    fn new(repetition: &'a Repetition<R>, data: &'a [u8]) -> Self {
        Self {
            repetition,
            data,
            queue: VecDeque::from([(0, 0)]),
            visited: HashSet::from([(0, 0)]),
            accepted: vec![false; data.len() + 1],
        }
    }

    fn expand(&mut self, offset: usize, count: usize) {
        if !self.repetition.can_repeat(count) {
            return;
        }
        let next_count = self.repetition.state_count(count + 1);
        for step in self.repetition.element.find(&self.data[offset..]) {
            let state = (offset + step, next_count);
            if self.visited.insert(state) {
                self.queue.push_back(state);
            }
        }
    }
}

impl<R: Recognizer> Iterator for Offsets<'_, R> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        while let Some((offset, count)) = self.queue.pop_front() {
            self.expand(offset, count);
            if count >= self.repetition.min && !self.accepted[offset] {
                self.accepted[offset] = true;
                return Some(offset);
            }
        }
        None
    }
}

/// `*R`
pub fn repetition<R: Recognizer>(element: R) -> Repetition<R> {
    Repetition::new(element, 0, None)
}

/// `n*R`
pub fn repetition_min<R: Recognizer>(min: usize, element: R) -> Repetition<R> {
    Repetition::new(element, min, None)
}

/// `nR`
pub fn repetition_exact<R: Recognizer>(count: usize, element: R) -> Repetition<R> {
    Repetition::new(element, count, Some(count))
}

/// `min*max R`
pub fn repetition_bounded<R: Recognizer>(min: usize, max: usize, element: R) -> Repetition<R> {
    Repetition::new(element, min, Some(max))
}

/// Builds a [`Concatenation`], boxing every element.
#[macro_export]
macro_rules! concatenation {
    ($($element:expr),+ $(,)?) => {
        $crate::Concatenation::new(vec![$($crate::Recognizer::boxed($element)),+])
    };
}

/// Builds an [`Alternatives`], boxing every branch.
#[macro_export]
macro_rules! alternatives {
    ($($branch:expr),+ $(,)?) => {
        $crate::Alternatives::new(vec![$($crate::Recognizer::boxed($branch)),+])
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{byte, from_fn, literal, range};

    fn digit() -> impl Recognizer {
        range(b'0', b'9')
    }

    #[test]
    fn test_concatenation_collects_every_split() {
        let a_star = repetition(byte(b'a'));
        let concat = concatenation![repetition(byte(b'a')), a_star];

        assert_eq!(concat.find(b"aa").to_vec(), vec![0, 1, 2]);
    }

    #[test]
    fn test_concatenation_fails_on_missing_element() {
        let concat = concatenation![byte(b'a'), byte(b'b')];

        assert!(concat.find(b"ac").is_empty());
        assert!(concat.find(b"").is_empty());
        assert_eq!(concat.find(b"abc"), MatchSet::single(2));
    }

    #[test]
    fn test_empty_concatenation_matches_empty_prefix() {
        assert_eq!(
            Concatenation::new(Vec::new()).find(b"xyz"),
            MatchSet::empty_prefix()
        );
    }

    #[test]
    fn test_alternatives_is_a_union() {
        let alt = alternatives![literal(b"ab"), byte(b'a'), literal(b"abc")];

        assert_eq!(alt.find(b"abc").to_vec(), vec![1, 2, 3]);
        assert!(alt.find(b"b").is_empty());
    }

    #[test]
    fn test_optional_always_contains_zero() {
        let opt = optional(byte(b'?'));

        assert_eq!(opt.find(b"?x").to_vec(), vec![0, 1]);
        assert_eq!(opt.find(b"x").to_vec(), vec![0]);
    }

    #[test]
    fn test_repetition_lists_every_count() {
        let digits = repetition(digit());

        assert_eq!(digits.find(b"123a").to_vec(), vec![0, 1, 2, 3]);
        assert_eq!(digits.find(b"").to_vec(), vec![0]);
    }

    #[test]
    fn test_repetition_min_filters_short_counts() {
        let digits = repetition_min(2, digit());

        assert_eq!(digits.find(b"1234").to_vec(), vec![2, 3, 4]);
        assert!(digits.find(b"1").is_empty());
    }

    #[test]
    fn test_repetition_exact() {
        let three = repetition_exact(3, digit());

        assert_eq!(three.find(b"2004").to_vec(), vec![3]);
        assert!(three.find(b"20").is_empty());
    }

    #[test]
    fn test_repetition_bounded() {
        let h16 = repetition_bounded(1, 4, digit());

        assert_eq!(h16.find(b"123456").to_vec(), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_repetition_terminates_on_zero_length_element() {
        let maybe_a = optional(byte(b'a'));

        assert_eq!(repetition(optional(byte(b'a'))).find(b"aab").to_vec(), vec![0, 1, 2]);
        assert_eq!(repetition_min(3, maybe_a).find(b"a").to_vec(), vec![0, 1]);
    }

    #[test]
    fn test_repetition_of_always_empty_element() {
        let nothing = from_fn(|_| MatchSet::empty_prefix());

        assert_eq!(repetition(nothing).find(b"abc"), MatchSet::empty_prefix());
    }

    #[test]
    fn test_offsets_are_lazy_and_restartable() {
        let digits = repetition(digit());

        let mut offsets = digits.offsets(b"12");
        assert_eq!(offsets.next(), Some(0));
        assert_eq!(offsets.next(), Some(1));

        let all: Vec<_> = digits.offsets(b"12").collect();
        assert_eq!(all, vec![0, 1, 2]);
    }
}

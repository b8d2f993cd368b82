use std::{fmt, sync::Arc};

use crate::MatchSet;

/// A grammar production: maps a buffer to every prefix length it accepts.
///
/// Implementations are pure and stateless, so a recognizer can be shared
/// freely between threads once built.
pub trait Recognizer: Send + Sync {
    fn find(&self, data: &[u8]) -> MatchSet;

    fn matches(&self, data: &[u8]) -> bool {
        !self.find(data).is_empty()
    }

    fn boxed(self) -> BoxedRecognizer
    where
        Self: Sized + 'static,
    {
        Box::new(self)
    }
}

pub type BoxedRecognizer = Box<dyn Recognizer>;

impl<R: Recognizer + ?Sized> Recognizer for Box<R> {
    fn find(&self, data: &[u8]) -> MatchSet {
        (**self).find(data)
    }
}

impl<R: Recognizer + ?Sized> Recognizer for Arc<R> {
    fn find(&self, data: &[u8]) -> MatchSet {
        (**self).find(data)
    }
}

/// Recognizer backed by a closure, see [`from_fn`].
#[derive(Clone)]
pub struct FromFn<F>(F);

impl<F> Recognizer for FromFn<F>
where
    F: Fn(&[u8]) -> MatchSet + Send + Sync,
{
    fn find(&self, data: &[u8]) -> MatchSet {
        (self.0)(data)
    }
}

impl<F> fmt::Debug for FromFn<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FromFn").finish_non_exhaustive()
    }
}

pub fn from_fn<F>(f: F) -> FromFn<F>
where
    F: Fn(&[u8]) -> MatchSet + Send + Sync,
{
    FromFn(f)
}

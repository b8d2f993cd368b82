use crate::{MatchSet, Recognizer};

/// A matcher for a single terminal: it consumes a fixed number of bytes at
/// the start of the buffer or nothing at all.
pub trait Terminal {
    fn match_prefix(&self, data: &[u8]) -> Option<usize>;
}

/// `%xNN`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Byte(pub u8);

/// `%xNN-MM`, both bounds inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ByteRange {
    pub lo: u8,
    pub hi: u8,
}

/// A case-sensitive byte sequence, `%s"..."` in RFC7405 notation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Literal(pub &'static [u8]);

impl Terminal for Byte {
    fn match_prefix(&self, data: &[u8]) -> Option<usize> {
        (data.first() == Some(&self.0)).then_some(1)
    }
}

impl Terminal for ByteRange {
    fn match_prefix(&self, data: &[u8]) -> Option<usize> {
        data.first()
            .filter(|b| (self.lo..=self.hi).contains(*b))
            .map(|_| 1)
    }
}

impl Terminal for Literal {
    fn match_prefix(&self, data: &[u8]) -> Option<usize> {
        data.starts_with(self.0).then_some(self.0.len())
    }
}

macro_rules! terminal_recognizer {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl Recognizer for $ty {
                fn find(&self, data: &[u8]) -> MatchSet {
                    self.match_prefix(data).into()
                }
            }
        )+
    };
}

terminal_recognizer!(Byte, ByteRange, Literal);

pub fn byte(value: u8) -> Byte {
    Byte(value)
}

pub fn range(lo: u8, hi: u8) -> ByteRange {
    ByteRange { lo, hi }
}

pub fn literal(bytes: &'static [u8]) -> Literal {
    Literal(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_byte() {
        assert_eq!(byte(b'/').match_prefix(b"/a"), Some(1));
        assert_eq!(byte(b'/').match_prefix(b"a/"), None);
        assert_eq!(byte(b'/').match_prefix(b""), None);
        assert_eq!(byte(b'/').find(b"/"), MatchSet::single(1));
    }

    #[test]
    fn test_range_bounds_are_inclusive() {
        let obs_text = range(0x80, 0xff);

        assert_eq!(obs_text.match_prefix(&[0x7f]), None);
        assert_eq!(obs_text.match_prefix(&[0x80]), Some(1));
        assert_eq!(obs_text.match_prefix(&[0xff]), Some(1));
    }

    #[test]
    fn test_literal_is_case_sensitive() {
        assert_eq!(literal(b"HTTP").find(b"HTTP/1.1"), MatchSet::single(4));
        assert!(literal(b"HTTP").find(b"http/1.1").is_empty());
        assert!(literal(b"HTTP").find(b"HTT").is_empty());
    }

    #[test]
    fn test_empty_literal_matches_empty_prefix() {
        assert_eq!(literal(b"").find(b"abc"), MatchSet::empty_prefix());
    }
}

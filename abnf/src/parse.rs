use crate::Recognizer;

/// A buffer split at a committed match offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Parsed<'a> {
    pub parsed: &'a [u8],
    pub remaining: &'a [u8],
}

impl<'a> Parsed<'a> {
    fn split(data: &'a [u8], offset: usize) -> Self {
        let (parsed, remaining) = data.split_at(offset);
        Self { parsed, remaining }
    }
}

/// Commits to the longest match of `recognizer`, which may be empty.
///
/// Returns `None` only when the production does not match at all.
pub fn parse_longest<'a, R>(data: &'a [u8], recognizer: &R) -> Option<Parsed<'a>>
where
    R: Recognizer + ?Sized,
{
    let offset = recognizer.find(data).longest()?;
    Some(Parsed::split(data, offset))
}

/// Commits to the shortest non-empty match of `recognizer`.
pub fn parse_shortest<'a, R>(data: &'a [u8], recognizer: &R) -> Option<Parsed<'a>>
where
    R: Recognizer + ?Sized,
{
    let offset = recognizer.find(data).shortest()?;
    Some(Parsed::split(data, offset))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{core_rules::sp, core_rules::wsp, repetition};

    #[test]
    fn test_parse_longest() {
        let ows = repetition(wsp());
        let parsed = parse_longest(b"  \tvalue", &ows).unwrap();

        assert_eq!(parsed.parsed, b"  \t");
        assert_eq!(parsed.remaining, b"value");
    }

    #[test]
    fn test_parse_longest_accepts_empty_match() {
        let ows = repetition(wsp());
        let parsed = parse_longest(b"value", &ows).unwrap();

        assert!(parsed.parsed.is_empty());
        assert_eq!(parsed.remaining, b"value");
    }

    #[test]
    fn test_parse_shortest() {
        let ows = repetition(wsp());

        assert_eq!(parse_shortest(b"  x", &ows).unwrap().parsed, b" ");
        assert!(parse_shortest(b"x", &ows).is_none());
        assert!(parse_shortest(b"x", &sp()).is_none());
    }
}

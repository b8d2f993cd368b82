//! RFC5234 Appendix B.1 core rules.

use crate::{
    Alternatives, Byte, ByteRange, Literal, Repetition, alternatives, byte, concatenation, literal,
    range, repetition,
};

/// `ALPHA = %x41-5A / %x61-7A`
pub fn alpha() -> Alternatives {
    alternatives![range(0x41, 0x5a), range(0x61, 0x7a)]
}

/// `BIT = "0" / "1"`
pub fn bit() -> Alternatives {
    alternatives![byte(b'0'), byte(b'1')]
}

/// `CHAR = %x01-7F`
pub fn char() -> ByteRange {
    range(0x01, 0x7f)
}

/// `CR = %x0D`
pub fn cr() -> Byte {
    byte(0x0d)
}

/// `CRLF = CR LF`
pub fn crlf() -> Literal {
    literal(b"\r\n")
}

/// `CTL = %x00-1F / %x7F`
pub fn ctl() -> Alternatives {
    alternatives![range(0x00, 0x1f), byte(0x7f)]
}

/// `DIGIT = %x30-39`
pub fn digit() -> ByteRange {
    range(0x30, 0x39)
}

/// `DQUOTE = %x22`
pub fn dquote() -> Byte {
    byte(0x22)
}

/// `HEXDIG = DIGIT / "A" / "B" / "C" / "D" / "E" / "F"`
///
/// Quoted strings are case-insensitive in ABNF, so `a-f` match as well.
pub fn hexdig() -> Alternatives {
    alternatives![digit(), range(b'A', b'F'), range(b'a', b'f')]
}

/// `HTAB = %x09`
pub fn htab() -> Byte {
    byte(0x09)
}

/// `LF = %x0A`
pub fn lf() -> Byte {
    byte(0x0a)
}

/// `LWSP = *(WSP / CRLF WSP)`
pub fn lwsp() -> Repetition<Alternatives> {
    repetition(alternatives![wsp(), concatenation![crlf(), wsp()]])
}

/// `OCTET = %x00-FF`
pub fn octet() -> ByteRange {
    range(0x00, 0xff)
}

/// `SP = %x20`
pub fn sp() -> Byte {
    byte(0x20)
}

/// `VCHAR = %x21-7E`
pub fn vchar() -> ByteRange {
    range(0x21, 0x7e)
}

/// `WSP = SP / HTAB`
pub fn wsp() -> Alternatives {
    alternatives![sp(), htab()]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{MatchSet, Recognizer};

    #[test]
    fn test_alpha() {
        assert!(alpha().matches(b"a"));
        assert!(alpha().matches(b"Z"));
        assert!(!alpha().matches(b"1"));
        assert!(!alpha().matches(b"["));
    }

    #[test]
    fn test_hexdig_accepts_both_cases() {
        assert!(hexdig().matches(b"f"));
        assert!(hexdig().matches(b"F"));
        assert!(hexdig().matches(b"9"));
        assert!(!hexdig().matches(b"g"));
    }

    #[test]
    fn test_vchar_excludes_space_and_del() {
        assert!(!vchar().matches(&[0x20]));
        assert!(vchar().matches(&[0x21]));
        assert!(vchar().matches(&[0x7e]));
        assert!(!vchar().matches(&[0x7f]));
    }

    #[test]
    fn test_crlf() {
        assert_eq!(crlf().find(b"\r\nabc"), MatchSet::single(2));
        assert!(crlf().find(b"\n").is_empty());
    }

    #[test]
    fn test_lwsp_allows_folded_whitespace() {
        assert_eq!(lwsp().find(b" \r\n\tx").to_vec(), vec![0, 1, 4]);
        assert_eq!(lwsp().find(b"\r\nx").to_vec(), vec![0]);
    }

    #[test]
    fn test_ctl() {
        assert!(ctl().matches(&[0x00]));
        assert!(ctl().matches(&[0x7f]));
        assert!(!ctl().matches(b"a"));
    }
}

use abnf::{Alternatives, Concatenation, alternatives, byte, concatenation, core_rules};

/// `pct-encoded = "%" HEXDIG HEXDIG`
pub fn pct_encoded() -> Concatenation {
    concatenation![byte(b'%'), core_rules::hexdig(), core_rules::hexdig()]
}

/// `unreserved = ALPHA / DIGIT / "-" / "." / "_" / "~"`
pub fn unreserved() -> Alternatives {
    alternatives![
        core_rules::alpha(),
        core_rules::digit(),
        byte(b'-'),
        byte(b'.'),
        byte(b'_'),
        byte(b'~'),
    ]
}

/// `sub-delims = "!" / "$" / "&" / "'" / "(" / ")" / "*" / "+" / "," / ";" / "="`
pub fn sub_delims() -> Alternatives {
    alternatives![
        byte(b'!'),
        byte(b'$'),
        byte(b'&'),
        byte(b'\''),
        byte(b'('),
        byte(b')'),
        byte(b'*'),
        byte(b'+'),
        byte(b','),
        byte(b';'),
        byte(b'='),
    ]
}

/// `pchar = unreserved / pct-encoded / sub-delims / ":" / "@"`
pub fn pchar() -> Alternatives {
    alternatives![
        unreserved(),
        pct_encoded(),
        sub_delims(),
        byte(b':'),
        byte(b'@'),
    ]
}

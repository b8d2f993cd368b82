use abnf::{
    Alternatives, Concatenation, Recognizer, Repetition, alternatives, byte, concatenation,
    core_rules, literal, optional, range, repetition, repetition_bounded, repetition_exact,
    repetition_min,
};

use crate::chars::{pct_encoded, sub_delims, unreserved};

/// `authority = [ userinfo "@" ] host [ ":" port ]`
pub fn authority() -> Concatenation {
    concatenation![
        optional(concatenation![userinfo(), byte(b'@')]),
        host(),
        optional(concatenation![byte(b':'), port()]),
    ]
}

/// `userinfo = *( unreserved / pct-encoded / sub-delims / ":" )`
pub fn userinfo() -> Repetition<Alternatives> {
    repetition(alternatives![
        unreserved(),
        pct_encoded(),
        sub_delims(),
        byte(b':'),
    ])
}

/// `host = IP-literal / IPv4address / reg-name`
///
/// `reg-name` may be empty, so `host` always matches the empty prefix.
pub fn host() -> Alternatives {
    alternatives![ip_literal(), ipv4address(), reg_name()]
}

/// `port = *DIGIT`
pub fn port() -> Repetition<abnf::ByteRange> {
    repetition(core_rules::digit())
}

/// `IP-literal = "[" ( IPv6address / IPvFuture ) "]"`
pub fn ip_literal() -> Concatenation {
    concatenation![
        byte(b'['),
        alternatives![ipv6address(), ipvfuture()],
        byte(b']'),
    ]
}

/// `IPvFuture = "v" 1*HEXDIG "." 1*( unreserved / sub-delims / ":" )`
pub fn ipvfuture() -> Concatenation {
    concatenation![
        alternatives![byte(b'v'), byte(b'V')],
        repetition_min(1, core_rules::hexdig()),
        byte(b'.'),
        repetition_min(1, alternatives![unreserved(), sub_delims(), byte(b':')]),
    ]
}

fn h16_colon() -> Concatenation {
    concatenation![h16(), byte(b':')]
}

// [ *n( h16 ":" ) h16 ]
fn leading_pieces(n: usize) -> impl Recognizer {
    optional(concatenation![repetition_bounded(0, n, h16_colon()), h16()])
}

/// ```text
/// IPv6address =                            6( h16 ":" ) ls32
///             /                       "::" 5( h16 ":" ) ls32
///             / [               h16 ] "::" 4( h16 ":" ) ls32
///             / [ *1( h16 ":" ) h16 ] "::" 3( h16 ":" ) ls32
///             / [ *2( h16 ":" ) h16 ] "::" 2( h16 ":" ) ls32
///             / [ *3( h16 ":" ) h16 ] "::"    h16 ":"   ls32
///             / [ *4( h16 ":" ) h16 ] "::"              ls32
///             / [ *5( h16 ":" ) h16 ] "::"              h16
///             / [ *6( h16 ":" ) h16 ] "::"
/// ```
pub fn ipv6address() -> Alternatives {
    alternatives![
        concatenation![repetition_exact(6, h16_colon()), ls32()],
        concatenation![literal(b"::"), repetition_exact(5, h16_colon()), ls32()],
        concatenation![
            optional(h16()),
            literal(b"::"),
            repetition_exact(4, h16_colon()),
            ls32(),
        ],
        concatenation![
            leading_pieces(1),
            literal(b"::"),
            repetition_exact(3, h16_colon()),
            ls32(),
        ],
        concatenation![
            leading_pieces(2),
            literal(b"::"),
            repetition_exact(2, h16_colon()),
            ls32(),
        ],
        concatenation![leading_pieces(3), literal(b"::"), h16_colon(), ls32()],
        concatenation![leading_pieces(4), literal(b"::"), ls32()],
        concatenation![leading_pieces(5), literal(b"::"), h16()],
        concatenation![leading_pieces(6), literal(b"::")],
    ]
}

/// `h16 = 1*4HEXDIG`
pub fn h16() -> Repetition<Alternatives> {
    repetition_bounded(1, 4, core_rules::hexdig())
}

/// `ls32 = ( h16 ":" h16 ) / IPv4address`
pub fn ls32() -> Alternatives {
    alternatives![concatenation![h16(), byte(b':'), h16()], ipv4address()]
}

/// `IPv4address = dec-octet "." dec-octet "." dec-octet "." dec-octet`
pub fn ipv4address() -> Concatenation {
    concatenation![
        dec_octet(),
        byte(b'.'),
        dec_octet(),
        byte(b'.'),
        dec_octet(),
        byte(b'.'),
        dec_octet(),
    ]
}

/// ```text
/// dec-octet = DIGIT                 ; 0-9
///           / %x31-39 DIGIT         ; 10-99
///           / "1" 2DIGIT            ; 100-199
///           / "2" %x30-34 DIGIT     ; 200-249
///           / "25" %x30-35          ; 250-255
/// ```
pub fn dec_octet() -> Alternatives {
    alternatives![
        core_rules::digit(),
        concatenation![range(0x31, 0x39), core_rules::digit()],
        concatenation![byte(b'1'), repetition_exact(2, core_rules::digit())],
        concatenation![byte(b'2'), range(0x30, 0x34), core_rules::digit()],
        concatenation![literal(b"25"), range(0x30, 0x35)],
    ]
}

/// `reg-name = *( unreserved / pct-encoded / sub-delims )`
pub fn reg_name() -> Repetition<Alternatives> {
    repetition(alternatives![unreserved(), pct_encoded(), sub_delims()])
}

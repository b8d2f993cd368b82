use abnf::{
    Alternatives, Concatenation, Literal, Repetition, alternatives, byte, concatenation, literal,
    optional, repetition, repetition_min,
};

use crate::chars::pchar;

/// `path-abempty = *( "/" segment )`
pub fn path_abempty() -> Repetition<Concatenation> {
    repetition(concatenation![byte(b'/'), segment()])
}

/// `path-absolute = "/" [ segment-nz *( "/" segment ) ]`
pub fn path_absolute() -> Concatenation {
    concatenation![
        byte(b'/'),
        optional(concatenation![segment_nz(), path_abempty()]),
    ]
}

/// `path-rootless = segment-nz *( "/" segment )`
pub fn path_rootless() -> Concatenation {
    concatenation![segment_nz(), path_abempty()]
}

/// `path-empty = 0<pchar>`
pub fn path_empty() -> Literal {
    literal(b"")
}

/// `segment = *pchar`
pub fn segment() -> Repetition<Alternatives> {
    repetition(pchar())
}

/// `segment-nz = 1*pchar`
pub fn segment_nz() -> Repetition<Alternatives> {
    repetition_min(1, pchar())
}

/// `query = *( pchar / "/" / "?" )`
pub fn query() -> Repetition<Alternatives> {
    repetition(alternatives![pchar(), byte(b'/'), byte(b'?')])
}

/// `fragment = *( pchar / "/" / "?" )`
pub fn fragment() -> Repetition<Alternatives> {
    query()
}

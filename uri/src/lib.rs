//! RFC3986 URI grammar as [`abnf`] recognizers.
//!
//! Every production from RFC3986 Appendix A that HTTP request targets depend
//! on is available as a builder function returning a recognizer. The
//! recognizers report every matching prefix length, so `host()` on
//! `"255.255.255.255"` reports the IPv4 reading as well as every shorter
//! `reg-name` prefix.

mod authority;
mod chars;
mod path;

use abnf::{Alternatives, Concatenation, Recognizer, alternatives, byte, concatenation, core_rules};

pub use authority::{
    authority, dec_octet, h16, host, ip_literal, ipv4address, ipv6address, ipvfuture, ls32, port,
    reg_name, userinfo,
};
pub use chars::{pchar, pct_encoded, sub_delims, unreserved};
pub use path::{
    fragment, path_abempty, path_absolute, path_empty, path_rootless, query, segment, segment_nz,
};

/// `scheme = ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )`
pub fn scheme() -> Concatenation {
    concatenation![
        core_rules::alpha(),
        abnf::repetition(alternatives![
            core_rules::alpha(),
            core_rules::digit(),
            byte(b'+'),
            byte(b'-'),
            byte(b'.'),
        ]),
    ]
}

/// ```text
/// hier-part = "//" authority path-abempty
///           / path-absolute
///           / path-rootless
///           / path-empty
/// ```
pub fn hier_part() -> Alternatives {
    alternatives![
        concatenation![abnf::literal(b"//"), authority(), path_abempty()],
        path_absolute(),
        path_rootless(),
        path_empty(),
    ]
}

/// `absolute-URI = scheme ":" hier-part [ "?" query ]`
pub fn absolute_uri() -> Concatenation {
    concatenation![
        scheme(),
        byte(b':'),
        hier_part(),
        abnf::optional(concatenation![byte(b'?'), query()]),
    ]
}

/// `URI = scheme ":" hier-part [ "?" query ] [ "#" fragment ]`
pub fn uri() -> impl Recognizer {
    concatenation![
        absolute_uri(),
        abnf::optional(concatenation![byte(b'#'), fragment()]),
    ]
}

//! ABNF recognizer algebra
//!
//! Grammar productions are modelled as [`Recognizer`]s: pure functions that
//! report every prefix length of a buffer at which the production matches.
//! Terminals match single bytes, byte ranges or literal sequences; the
//! combinators in [`combinator`] compose them following RFC5234 §3 without
//! resolving ambiguity, so a production such as `*( SP / HTAB )` reports all
//! of its possible lengths at once.
//!
//! # Examples
//!
//! ```
//! use abnf::{Recognizer, alternatives, core_rules, parse_longest, repetition};
//!
//! // OWS = *( SP / HTAB )
//! let ows = repetition(alternatives![core_rules::sp(), core_rules::htab()]);
//!
//! assert_eq!(ows.find(b"  ").to_vec(), vec![0, 1, 2]);
//!
//! let split = parse_longest(b" \tvalue", &ows).unwrap();
//! assert_eq!(split.remaining, b"value");
//! ```

pub mod combinator;
pub mod core_rules;
mod match_set;
mod parse;
mod recognizer;
mod terminal;

pub use combinator::{
    Alternatives, Concatenation, Optional, Repetition, optional, repetition, repetition_bounded,
    repetition_exact, repetition_min,
};
pub use match_set::{Iter, MatchSet};
pub use parse::{Parsed, parse_longest, parse_shortest};
pub use recognizer::{BoxedRecognizer, FromFn, Recognizer, from_fn};
pub use terminal::{Byte, ByteRange, Literal, Terminal, byte, literal, range};

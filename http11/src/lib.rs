//! Grammar-driven HTTP/1.1 parser and serializer
//!
//! Messages are recognized directly against the RFC9110 / RFC9112 ABNF. The
//! productions live in [`grammar`] as [`Rule`] variants; each reports every
//! prefix length it accepts. The parser collapses that ambiguity with a fixed
//! policy: productions take their longest match, while `SP`, `":"` and
//! `CRLF` take their shortest. Parsed values own their bytes and serialize
//! back to canonical wire form through [`HttpMessage`].
//!
//! # Examples
//!
//! ```
//! use http11::{HttpMessage, Request, Response};
//!
//! let request = Request::parse(
//!     b"GET /index.html HTTP/1.1\r\nHost:   example.com\r\n\r\n",
//! )
//! .unwrap();
//!
//! assert_eq!(request.method, b"GET");
//! assert_eq!(request.get_header(b"Host"), Some(&b"example.com"[..]));
//! assert_eq!(
//!     request.to_bytes(),
//!     b"GET /index.html HTTP/1.1\r\nHost: example.com\r\n\r\n"
//! );
//!
//! let response: Response = "HTTP/1.1 200 OK\r\n\r\n".parse().unwrap();
//! assert_eq!(response.status_code, b"200");
//! ```
//!
//! Named productions can also be queried on their own:
//!
//! ```
//! use http11::{Recognizer, Rule};
//!
//! let offsets = Rule::AbsolutePath.find(b"/a/b");
//! assert_eq!(offsets.to_vec(), vec![1, 2, 3, 4]);
//! ```

mod config;
mod error;
pub mod grammar;
mod message;
mod request;
mod response;
mod traits;
mod traversal;
mod types;


pub use abnf::{MatchSet, Recognizer};
pub use config::ParserConfig;
pub use error::{ParseError, Result};
pub use grammar::Rule;
pub use message::Message;
pub use request::{Request, RequestBuilder};
pub use response::{Response, ResponseBuilder};
pub use traits::HttpMessage;
pub use types::FieldLine;

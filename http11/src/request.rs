use std::{fmt, str::FromStr};

use tracing::trace;

use crate::{
    HttpMessage,
    config::ParserConfig,
    error::{ParseError, Result},
    grammar::Rule,
    traversal::Traverser,
    types::FieldLine,
};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Request {
    pub method: Vec<u8>,
    pub request_target: Vec<u8>,
    pub http_version: Vec<u8>,
    pub field_lines: Vec<FieldLine>,
    pub message_body: Vec<u8>,
}

impl Request {
    /// Parses `input` with the default, unlimited configuration.
    pub fn parse(input: &[u8]) -> Result<Self> {
        RequestBuilder::new().parse(input)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RequestBuilder {
    config: ParserConfig,
}

impl RequestBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }

    pub fn parse(&self, input: &[u8]) -> Result<Request> {
        let mut traverser = Traverser::new(input, self.config)?;

        let method = traverser.production(Rule::Method)?;
        traverser.sp("SP after method")?;
        let request_target = traverser.request_target()?;
        traverser.sp("SP after request-target")?;
        let http_version = traverser.production(Rule::HttpVersion)?;
        traverser.crlf("CRLF after request-line")?;

        let field_lines = traverser.field_lines()?;
        traverser.crlf("CRLF before message-body")?;
        let message_body = traverser.finish();

        trace!(
            field_lines = field_lines.len(),
            body_len = message_body.len(),
            "parsed request"
        );

        Ok(Request {
            method: method.to_vec(),
            request_target: request_target.to_vec(),
            http_version: http_version.to_vec(),
            field_lines,
            message_body: message_body.to_vec(),
        })
    }
}

impl FromStr for Request {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self> {
        Request::parse(s.as_bytes())
    }
}

impl TryFrom<&[u8]> for Request {
    type Error = ParseError;

    fn try_from(input: &[u8]) -> Result<Self> {
        Request::parse(input)
    }
}

impl HttpMessage for Request {
    fn field_lines(&self) -> &[FieldLine] {
        &self.field_lines
    }

    fn message_body(&self) -> &[u8] {
        &self.message_body
    }

    fn write_start_line(&self, buf: &mut Vec<u8>) {
        buf.extend_from_slice(&self.method);
        buf.push(b' ');
        buf.extend_from_slice(&self.request_target);
        buf.push(b' ');
        buf.extend_from_slice(&self.http_version);
    }
}

impl fmt::Display for Request {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from_utf8_lossy(&self.to_bytes()))
    }
}

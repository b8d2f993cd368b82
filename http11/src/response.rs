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
pub struct Response {
    pub http_version: Vec<u8>,
    pub status_code: Vec<u8>,
    pub reason_phrase: Vec<u8>,
    pub field_lines: Vec<FieldLine>,
    pub message_body: Vec<u8>,
}

impl Response {
    /// Parses `input` with the default, unlimited configuration.
    pub fn parse(input: &[u8]) -> Result<Self> {
        ResponseBuilder::new().parse(input)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ResponseBuilder {
    config: ParserConfig,
}

impl ResponseBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }

    /// The grammar makes `reason-phrase` optional; this parser requires it.
    pub fn parse(&self, input: &[u8]) -> Result<Response> {
        let mut traverser = Traverser::new(input, self.config)?;

        let http_version = traverser.production(Rule::HttpVersion)?;
        traverser.sp("SP after HTTP-version")?;
        let status_code = traverser.production(Rule::StatusCode)?;
        traverser.sp("SP after status-code")?;
        let reason_phrase = traverser.production(Rule::ReasonPhrase)?;
        traverser.crlf("CRLF after status-line")?;

        let field_lines = traverser.field_lines()?;
        traverser.crlf("CRLF before message-body")?;
        let message_body = traverser.finish();

        trace!(
            status_code = %String::from_utf8_lossy(status_code),
            field_lines = field_lines.len(),
            body_len = message_body.len(),
            "parsed response"
        );

        Ok(Response {
            http_version: http_version.to_vec(),
            status_code: status_code.to_vec(),
            reason_phrase: reason_phrase.to_vec(),
            field_lines,
            message_body: message_body.to_vec(),
        })
    }
}

impl FromStr for Response {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self> {
        Response::parse(s.as_bytes())
    }
}

impl TryFrom<&[u8]> for Response {
    type Error = ParseError;

    fn try_from(input: &[u8]) -> Result<Self> {
        Response::parse(input)
    }
}

impl HttpMessage for Response {
    fn field_lines(&self) -> &[FieldLine] {
        &self.field_lines
    }

    fn message_body(&self) -> &[u8] {
        &self.message_body
    }

    fn write_start_line(&self, buf: &mut Vec<u8>) {
        buf.extend_from_slice(&self.http_version);
        buf.push(b' ');
        buf.extend_from_slice(&self.status_code);
        buf.push(b' ');
        buf.extend_from_slice(&self.reason_phrase);
    }
}

impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from_utf8_lossy(&self.to_bytes()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_response_with_body() {
        shared::init_test_logging();

        let input = b"HTTP/1.1 200 OK\r\nContent-Length: 7\r\n\r\nabcdefg";
        let response = Response::parse(input).unwrap();

        assert_eq!(response.http_version, b"HTTP/1.1");
        assert_eq!(response.status_code, b"200");
        assert_eq!(response.reason_phrase, b"OK");
        assert_eq!(
            response.field_lines,
            vec![FieldLine::new("Content-Length", "7")]
        );
        assert_eq!(response.message_body, b"abcdefg");
    }

    #[test]
    fn test_parse_response_reason_phrase_with_spaces() {
        shared::init_test_logging();

        let response = Response::parse(b"HTTP/1.1 404 Not Found\r\n\r\n").unwrap();
        assert_eq!(response.reason_phrase, b"Not Found");
    }

    #[test]
    fn test_parse_empty_response() {
        shared::init_test_logging();

        assert_eq!(
            Response::parse(b""),
            Err(ParseError::MissingProduction(Rule::HttpVersion))
        );
    }

    #[test]
    fn test_parse_response_requires_reason_phrase() {
        shared::init_test_logging();

        assert_eq!(
            Response::parse(b"HTTP/1.1 204 \r\n\r\n"),
            Err(ParseError::MissingProduction(Rule::ReasonPhrase))
        );
    }

    #[test]
    fn test_parse_response_rejects_two_digit_status() {
        shared::init_test_logging();

        assert_eq!(
            Response::parse(b"HTTP/1.1 20 OK\r\n\r\n"),
            Err(ParseError::MissingProduction(Rule::StatusCode))
        );
    }

    #[test]
    fn test_response_to_bytes() {
        let response = Response {
            http_version: b"HTTP/1.1".to_vec(),
            status_code: b"200".to_vec(),
            reason_phrase: b"OK".to_vec(),
            field_lines: vec![FieldLine::new("Content-Length", "7")],
            message_body: b"abcdefg".to_vec(),
        };

        assert_eq!(
            response.to_bytes(),
            b"HTTP/1.1 200 OK\r\nContent-Length: 7\r\n\r\nabcdefg"
        );
    }
}

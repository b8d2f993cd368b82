use std::{fmt, str::FromStr};

use abnf::Recognizer;

use crate::{
    HttpMessage,
    config::ParserConfig,
    error::{ParseError, Result},
    grammar::Rule,
    request::{Request, RequestBuilder},
    response::{Response, ResponseBuilder},
    types::FieldLine,
};

/// A request or a response, told apart by the start line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    Request(Request),
    Response(Response),
}

impl Message {
    pub fn parse(input: &[u8]) -> Result<Self> {
        Self::parse_with_config(input, ParserConfig::default())
    }

    /// Input whose prefix is a `status-line` is parsed as a response,
    /// anything else as a request.
    pub fn parse_with_config(input: &[u8], config: ParserConfig) -> Result<Self> {
        config.check_message_len(input.len())?;

        if Rule::StatusLine.matches(input) {
            ResponseBuilder::with_config(config)
                .parse(input)
                .map(Message::Response)
        } else {
            RequestBuilder::with_config(config)
                .parse(input)
                .map(Message::Request)
        }
    }

    pub fn as_request(&self) -> Option<&Request> {
        match self {
            Message::Request(request) => Some(request),
            Message::Response(_) => None,
        }
    }

    pub fn as_response(&self) -> Option<&Response> {
        match self {
            Message::Request(_) => None,
            Message::Response(response) => Some(response),
        }
    }
}

impl From<Request> for Message {
    fn from(request: Request) -> Self {
        Message::Request(request)
    }
}

impl From<Response> for Message {
    fn from(response: Response) -> Self {
        Message::Response(response)
    }
}

impl FromStr for Message {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self> {
        Message::parse(s.as_bytes())
    }
}

impl TryFrom<&[u8]> for Message {
    type Error = ParseError;

    fn try_from(input: &[u8]) -> Result<Self> {
        Message::parse(input)
    }
}

impl HttpMessage for Message {
    fn field_lines(&self) -> &[FieldLine] {
        match self {
            Message::Request(request) => request.field_lines(),
            Message::Response(response) => response.field_lines(),
        }
    }

    fn message_body(&self) -> &[u8] {
        match self {
            Message::Request(request) => request.message_body(),
            Message::Response(response) => response.message_body(),
        }
    }

    fn write_start_line(&self, buf: &mut Vec<u8>) {
        match self {
            Message::Request(request) => request.write_start_line(buf),
            Message::Response(response) => response.write_start_line(buf),
        }
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Message::Request(request) => fmt::Display::fmt(request, f),
            Message::Response(response) => fmt::Display::fmt(response, f),
        }
    }
}

use http11::{FieldLine, HttpMessage, ParseError, ParserConfig, Response, ResponseBuilder, Rule};

#[test]
fn test_no_content_response() {
    shared::init_test_logging();

    let response = Response::parse(b"HTTP/1.1 204 No Content\r\n\r\n").unwrap();

    assert_eq!(
        response,
        Response {
            http_version: b"HTTP/1.1".to_vec(),
            status_code: b"204".to_vec(),
            reason_phrase: b"No Content".to_vec(),
            field_lines: Vec::new(),
            message_body: Vec::new(),
        }
    );
}

#[test]
fn test_response_with_fields_and_body() {
    shared::init_test_logging();

    let input = b"HTTP/1.1 200 OK\r\n\
        Content-Type: text/plain; charset=utf-8\r\n\
        Content-Length: 5\r\n\
        \r\n\
        hello";
    let response = Response::parse(input).unwrap();

    assert_eq!(
        response.field_lines,
        vec![
            FieldLine::new("Content-Type", "text/plain; charset=utf-8"),
            FieldLine::new("Content-Length", "5"),
        ]
    );
    assert_eq!(response.message_body, b"hello");
    assert_eq!(response.to_bytes(), input);
}

#[test]
fn test_empty_input() {
    shared::init_test_logging();

    assert_eq!(
        Response::parse(b""),
        Err(ParseError::MissingProduction(Rule::HttpVersion))
    );
}

#[test]
fn test_each_missing_step_is_named() {
    shared::init_test_logging();

    let cases: [(&[u8], ParseError); 6] = [
        (
            b"HTTP/1.1",
            ParseError::MissingDelimiter("SP after HTTP-version"),
        ),
        (
            b"HTTP/1.1 OK\r\n\r\n",
            ParseError::MissingProduction(Rule::StatusCode),
        ),
        (
            b"HTTP/1.1 200\r\n\r\n",
            ParseError::MissingDelimiter("SP after status-code"),
        ),
        (
            b"HTTP/1.1 200 \r\n\r\n",
            ParseError::MissingProduction(Rule::ReasonPhrase),
        ),
        (
            b"HTTP/1.1 200 OK",
            ParseError::MissingDelimiter("CRLF after status-line"),
        ),
        (
            b"HTTP/1.1 200 OK\r\nServer nginx\r\n\r\n",
            ParseError::MissingDelimiter("CRLF before message-body"),
        ),
    ];

    for (input, expected) in cases {
        assert_eq!(
            Response::parse(input),
            Err(expected),
            "{}",
            String::from_utf8_lossy(input)
        );
    }
}

#[test]
fn test_obs_text_in_reason_phrase_and_value() {
    shared::init_test_logging();

    let input = b"HTTP/1.1 200 \xc3\x9cber\r\nX-Name: J\xc3\xbcrgen\r\n\r\n";
    let response = Response::parse(input).unwrap();

    assert_eq!(response.reason_phrase, b"\xc3\x9cber");
    assert_eq!(response.get_header(b"X-Name"), Some(&b"J\xc3\xbcrgen"[..]));
    assert_eq!(response.to_string(), "HTTP/1.1 200 Über\r\nX-Name: Jürgen\r\n\r\n");
}

#[test]
fn test_from_str() {
    shared::init_test_logging();

    let response: Response = "HTTP/1.1 500 Internal Server Error\r\n\r\n".parse().unwrap();
    assert_eq!(response.reason_phrase, b"Internal Server Error");

    let response = Response::try_from(&b"HTTP/1.1 418 I'm a teapot\r\n\r\n"[..]).unwrap();
    assert_eq!(response.status_code, b"418");
}

#[test]
fn test_canonical_response_round_trips() {
    shared::init_test_logging();

    let input: &[u8] = b"HTTP/1.1 200 OK\r\nCache-Control: no-cache\r\n\r\n";

    assert_eq!(Response::parse(input).unwrap().to_bytes(), input);
}

#[test]
fn test_parse_after_serialize_is_idempotent() {
    shared::init_test_logging();

    let input = b"HTTP/1.1 200 OK\r\nServer:nginx  \r\nVary:\tAccept\r\n\r\n{}";
    let parsed = Response::parse(input).unwrap();
    let reparsed = Response::parse(&parsed.to_bytes()).unwrap();

    assert_eq!(reparsed, parsed);
    assert_ne!(parsed.to_bytes(), input);
}

#[test]
fn test_field_line_limit() {
    shared::init_test_logging();

    let input = b"HTTP/1.1 200 OK\r\nA: 1\r\n\r\n";
    let builder = ResponseBuilder::with_config(ParserConfig::new().with_max_field_lines(0));

    assert_eq!(
        builder.parse(input),
        Err(ParseError::TooManyFieldLines { limit: 0 })
    );
    assert!(builder.parse(b"HTTP/1.1 200 OK\r\n\r\n").is_ok());
}

//! RFC9110 / RFC9112 productions.
//!
//! Each production is a [`Rule`] variant. The definitions are built once into
//! a read-only table on first use; a `Rule` is itself a [`Recognizer`] that
//! looks its definition up in that table, which lets productions refer to
//! each other by name, recursively where the RFC does (`comment`).

mod definitions;


use std::{fmt, sync::LazyLock};

use abnf::{BoxedRecognizer, MatchSet, Recognizer};

static GRAMMAR: LazyLock<Vec<BoxedRecognizer>> =
    LazyLock::new(|| Rule::ALL.iter().map(|rule| rule.definition()).collect());

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    // RFC9110 §4.1
    UriHost,
    AbsolutePath,
    // RFC9110 §5
    FieldName,
    FieldValue,
    FieldContent,
    FieldVchar,
    ObsText,
    Token,
    Tchar,
    Ows,
    Rws,
    Bws,
    QuotedString,
    Qdtext,
    QuotedPair,
    Comment,
    Ctext,
    Parameters,
    Parameter,
    ParameterName,
    ParameterValue,
    // RFC9112
    HttpMessage,
    StartLine,
    HttpVersion,
    HttpName,
    RequestLine,
    Method,
    RequestTarget,
    OriginForm,
    AbsoluteForm,
    AuthorityForm,
    AsteriskForm,
    StatusLine,
    StatusCode,
    ReasonPhrase,
    FieldLine,
    MessageBody,
}

impl Rule {
    /// Every production, in declaration order.
    pub const ALL: [Rule; 37] = [
        Rule::UriHost,
        Rule::AbsolutePath,
        Rule::FieldName,
        Rule::FieldValue,
        Rule::FieldContent,
        Rule::FieldVchar,
        Rule::ObsText,
        Rule::Token,
        Rule::Tchar,
        Rule::Ows,
        Rule::Rws,
        Rule::Bws,
        Rule::QuotedString,
        Rule::Qdtext,
        Rule::QuotedPair,
        Rule::Comment,
        Rule::Ctext,
        Rule::Parameters,
        Rule::Parameter,
        Rule::ParameterName,
        Rule::ParameterValue,
        Rule::HttpMessage,
        Rule::StartLine,
        Rule::HttpVersion,
        Rule::HttpName,
        Rule::RequestLine,
        Rule::Method,
        Rule::RequestTarget,
        Rule::OriginForm,
        Rule::AbsoluteForm,
        Rule::AuthorityForm,
        Rule::AsteriskForm,
        Rule::StatusLine,
        Rule::StatusCode,
        Rule::ReasonPhrase,
        Rule::FieldLine,
        Rule::MessageBody,
    ];

    /// The four `request-target` forms in the order the parser prefers them.
    pub const REQUEST_TARGET_FORMS: [Rule; 4] = [
        Rule::OriginForm,
        Rule::AbsoluteForm,
        Rule::AuthorityForm,
        Rule::AsteriskForm,
    ];

    /// The production name as written in the RFCs.
    pub fn as_str(self) -> &'static str {
        match self {
            Rule::UriHost => "uri-host",
            Rule::AbsolutePath => "absolute-path",
            Rule::FieldName => "field-name",
            Rule::FieldValue => "field-value",
            Rule::FieldContent => "field-content",
            Rule::FieldVchar => "field-vchar",
            Rule::ObsText => "obs-text",
            Rule::Token => "token",
            Rule::Tchar => "tchar",
            Rule::Ows => "OWS",
            Rule::Rws => "RWS",
            Rule::Bws => "BWS",
            Rule::QuotedString => "quoted-string",
            Rule::Qdtext => "qdtext",
            Rule::QuotedPair => "quoted-pair",
            Rule::Comment => "comment",
            Rule::Ctext => "ctext",
            Rule::Parameters => "parameters",
            Rule::Parameter => "parameter",
            Rule::ParameterName => "parameter-name",
            Rule::ParameterValue => "parameter-value",
            Rule::HttpMessage => "HTTP-message",
            Rule::StartLine => "start-line",
            Rule::HttpVersion => "HTTP-version",
            Rule::HttpName => "HTTP-name",
            Rule::RequestLine => "request-line",
            Rule::Method => "method",
            Rule::RequestTarget => "request-target",
            Rule::OriginForm => "origin-form",
            Rule::AbsoluteForm => "absolute-form",
            Rule::AuthorityForm => "authority-form",
            Rule::AsteriskForm => "asterisk-form",
            Rule::StatusLine => "status-line",
            Rule::StatusCode => "status-code",
            Rule::ReasonPhrase => "reason-phrase",
            Rule::FieldLine => "field-line",
            Rule::MessageBody => "message-body",
        }
    }
}

impl Recognizer for Rule {
    fn find(&self, data: &[u8]) -> MatchSet {
        GRAMMAR[*self as usize].find(data)
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

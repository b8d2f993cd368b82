use abnf::{
    BoxedRecognizer, Recognizer, alternatives, byte, concatenation,
    core_rules::{alpha, crlf, digit, dquote, htab, octet, sp, vchar},
    literal, optional, range, repetition, repetition_exact, repetition_min,
};

use super::Rule;

impl Rule {
    pub(super) fn definition(self) -> BoxedRecognizer {
        match self {
            // uri-host = <host, see [URI], Section 3.2.2>
            Rule::UriHost => uri::host().boxed(),
            // absolute-path = 1*( "/" segment )
            Rule::AbsolutePath => {
                repetition_min(1, concatenation![byte(b'/'), uri::segment()]).boxed()
            }
            // field-name = token
            Rule::FieldName => Rule::Token.boxed(),
            // field-value = *field-content
            Rule::FieldValue => repetition(Rule::FieldContent).boxed(),
            // field-content = field-vchar
            //                 [ 1*( SP / HTAB / field-vchar ) field-vchar ]
            Rule::FieldContent => concatenation![
                Rule::FieldVchar,
                optional(concatenation![
                    repetition_min(1, alternatives![sp(), htab(), Rule::FieldVchar]),
                    Rule::FieldVchar,
                ]),
            ]
            .boxed(),
            // field-vchar = VCHAR / obs-text
            Rule::FieldVchar => alternatives![vchar(), Rule::ObsText].boxed(),
            // obs-text = %x80-FF
            Rule::ObsText => range(0x80, 0xff).boxed(),
            // token = 1*tchar
            Rule::Token => repetition_min(1, Rule::Tchar).boxed(),
            // tchar = "!" / "#" / "$" / "%" / "&" / "'" / "*"
            //       / "+" / "-" / "." / "^" / "_" / "`" / "|" / "~"
            //       / DIGIT / ALPHA
            Rule::Tchar => alternatives![
                byte(b'!'),
                byte(b'#'),
                byte(b'$'),
                byte(b'%'),
                byte(b'&'),
                byte(b'\''),
                byte(b'*'),
                byte(b'+'),
                byte(b'-'),
                byte(b'.'),
                byte(b'^'),
                byte(b'_'),
                byte(b'`'),
                byte(b'|'),
                byte(b'~'),
                digit(),
                alpha(),
            ]
            .boxed(),
            // OWS = *( SP / HTAB )
            Rule::Ows => repetition(alternatives![sp(), htab()]).boxed(),
            // RWS = 1*( SP / HTAB )
            Rule::Rws => repetition_min(1, alternatives![sp(), htab()]).boxed(),
            // BWS = OWS
            Rule::Bws => Rule::Ows.boxed(),
            // quoted-string = DQUOTE *( qdtext / quoted-pair ) DQUOTE
            Rule::QuotedString => concatenation![
                dquote(),
                repetition(alternatives![Rule::Qdtext, Rule::QuotedPair]),
                dquote(),
            ]
            .boxed(),
            // qdtext = HTAB / SP / %x21 / %x23-5B / %x5D-7E / obs-text
            Rule::Qdtext => alternatives![
                htab(),
                sp(),
                byte(0x21),
                range(0x23, 0x5b),
                range(0x5d, 0x7e),
                Rule::ObsText,
            ]
            .boxed(),
            // quoted-pair = "\" ( HTAB / SP / VCHAR / obs-text )
            Rule::QuotedPair => concatenation![
                byte(b'\\'),
                alternatives![htab(), sp(), vchar(), Rule::ObsText],
            ]
            .boxed(),
            // comment = "(" *( ctext / quoted-pair / comment ) ")"
            Rule::Comment => concatenation![
                byte(b'('),
                repetition(alternatives![Rule::Ctext, Rule::QuotedPair, Rule::Comment]),
                byte(b')'),
            ]
            .boxed(),
            // ctext = HTAB / SP / %x21-27 / %x2A-5B / %x5D-7E / obs-text
            Rule::Ctext => alternatives![
                htab(),
                sp(),
                range(0x21, 0x27),
                range(0x2a, 0x5b),
                range(0x5d, 0x7e),
                Rule::ObsText,
            ]
            .boxed(),
            // parameters = *( OWS ";" OWS [ parameter ] )
            Rule::Parameters => repetition(concatenation![
                Rule::Ows,
                byte(b';'),
                Rule::Ows,
                optional(Rule::Parameter),
            ])
            .boxed(),
            // parameter = parameter-name "=" parameter-value
            Rule::Parameter => {
                concatenation![Rule::ParameterName, byte(b'='), Rule::ParameterValue].boxed()
            }
            // parameter-name = token
            Rule::ParameterName => Rule::Token.boxed(),
            // parameter-value = ( token / quoted-string )
            Rule::ParameterValue => alternatives![Rule::Token, Rule::QuotedString].boxed(),
            // HTTP-message = start-line CRLF
            //                *( field-line CRLF )
            //                CRLF
            //                [ message-body ]
            Rule::HttpMessage => concatenation![
                Rule::StartLine,
                crlf(),
                repetition(concatenation![Rule::FieldLine, crlf()]),
                crlf(),
                optional(Rule::MessageBody),
            ]
            .boxed(),
            // start-line = request-line / status-line
            Rule::StartLine => alternatives![Rule::RequestLine, Rule::StatusLine].boxed(),
            // HTTP-version = HTTP-name "/" DIGIT "." DIGIT
            Rule::HttpVersion => concatenation![
                Rule::HttpName,
                byte(b'/'),
                digit(),
                byte(b'.'),
                digit(),
            ]
            .boxed(),
            // HTTP-name = %s"HTTP"
            Rule::HttpName => literal(b"HTTP").boxed(),
            // request-line = method SP request-target SP HTTP-version
            Rule::RequestLine => concatenation![
                Rule::Method,
                sp(),
                Rule::RequestTarget,
                sp(),
                Rule::HttpVersion,
            ]
            .boxed(),
            // method = token
            Rule::Method => Rule::Token.boxed(),
            // request-target = origin-form / absolute-form / authority-form / asterisk-form
            Rule::RequestTarget => alternatives![
                Rule::OriginForm,
                Rule::AbsoluteForm,
                Rule::AuthorityForm,
                Rule::AsteriskForm,
            ]
            .boxed(),
            // origin-form = absolute-path [ "?" query ]
            Rule::OriginForm => concatenation![
                Rule::AbsolutePath,
                optional(concatenation![byte(b'?'), uri::query()]),
            ]
            .boxed(),
            // absolute-form = absolute-URI
            Rule::AbsoluteForm => uri::absolute_uri().boxed(),
            // authority-form = uri-host ":" port
            Rule::AuthorityForm => {
                concatenation![Rule::UriHost, byte(b':'), uri::port()].boxed()
            }
            // asterisk-form = "*"
            Rule::AsteriskForm => byte(b'*').boxed(),
            // status-line = HTTP-version SP status-code SP [ reason-phrase ]
            Rule::StatusLine => concatenation![
                Rule::HttpVersion,
                sp(),
                Rule::StatusCode,
                sp(),
                optional(Rule::ReasonPhrase),
            ]
            .boxed(),
            // status-code = 3DIGIT
            Rule::StatusCode => repetition_exact(3, digit()).boxed(),
            // reason-phrase = 1*( HTAB / SP / VCHAR / obs-text )
            Rule::ReasonPhrase => {
                repetition_min(1, alternatives![htab(), sp(), vchar(), Rule::ObsText]).boxed()
            }
            // field-line = field-name ":" OWS field-value OWS
            Rule::FieldLine => concatenation![
                Rule::FieldName,
                byte(b':'),
                Rule::Ows,
                Rule::FieldValue,
                Rule::Ows,
            ]
            .boxed(),
            // message-body = *OCTET
            Rule::MessageBody => repetition(octet()).boxed(),
        }
    }
}

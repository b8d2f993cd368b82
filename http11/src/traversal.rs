use abnf::{
    Parsed, Recognizer, byte,
    core_rules::{crlf, sp},
    parse_longest, parse_shortest,
};
use tracing::{debug, trace};

use crate::{
    config::ParserConfig,
    error::{ParseError, Result},
    grammar::Rule,
    types::FieldLine,
};

/// Cursor over an input buffer that commits to one match per step.
///
/// Productions consume their longest match; delimiters consume their
/// shortest non-empty match.
pub(crate) struct Traverser<'a> {
    remaining: &'a [u8],
    config: ParserConfig,
}

impl<'a> Traverser<'a> {
    pub(crate) fn new(input: &'a [u8], config: ParserConfig) -> Result<Self> {
        config.check_message_len(input.len())?;
        Ok(Self {
            remaining: input,
            config,
        })
    }

    pub(crate) fn production(&mut self, rule: Rule) -> Result<&'a [u8]> {
        let Some(Parsed { parsed, remaining }) = parse_longest(self.remaining, &rule) else {
            debug!(%rule, remaining = self.remaining.len(), "production not found");
            return Err(ParseError::MissingProduction(rule));
        };
        self.remaining = remaining;
        Ok(parsed)
    }

    pub(crate) fn delimiter<R>(&mut self, delimiter: &R, name: &'static str) -> Result<()>
    where
        R: Recognizer + ?Sized,
    {
        let Some(Parsed { remaining, .. }) = parse_shortest(self.remaining, delimiter) else {
            debug!(delimiter = name, remaining = self.remaining.len(), "delimiter not found");
            return Err(ParseError::MissingDelimiter(name));
        };
        self.remaining = remaining;
        Ok(())
    }

    pub(crate) fn sp(&mut self, name: &'static str) -> Result<()> {
        self.delimiter(&sp(), name)
    }

    pub(crate) fn crlf(&mut self, name: &'static str) -> Result<()> {
        self.delimiter(&crlf(), name)
    }

    /// The first form that matches at all wins, at its longest offset.
    pub(crate) fn request_target(&mut self) -> Result<&'a [u8]> {
        let data = self.remaining;
        let found = Rule::REQUEST_TARGET_FORMS
            .iter()
            .find_map(|form| form.find(data).longest().map(|offset| (*form, offset)));

        let Some((form, offset)) = found else {
            debug!(remaining = data.len(), "no request-target form matched");
            return Err(ParseError::MissingProduction(Rule::RequestTarget));
        };
        trace!(%form, len = offset, "request-target");

        let (target, remaining) = data.split_at(offset);
        self.remaining = remaining;
        Ok(target)
    }

    /// Consumes `*( field-line CRLF )`, stopping at the first position where
    /// no field line matches.
    pub(crate) fn field_lines(&mut self) -> Result<Vec<FieldLine>> {
        let mut field_lines = Vec::new();

        while Rule::FieldLine.matches(self.remaining) {
            if let Some(limit) = self
                .config
                .max_field_lines
                .filter(|&limit| field_lines.len() >= limit)
            {
                debug!(limit, "too many field lines");
                return Err(ParseError::TooManyFieldLines { limit });
            }

            let name = self.production(Rule::FieldName)?;
            self.delimiter(&byte(b':'), "\":\" after field-name")?;
            self.production(Rule::Ows)?;
            let value = self.production(Rule::FieldValue)?;
            self.production(Rule::Ows)?;
            trace!(
                name = %String::from_utf8_lossy(name),
                value_len = value.len(),
                "field line"
            );
            field_lines.push(FieldLine::new(name, value));
            self.crlf("CRLF after field-line")?;
        }

        Ok(field_lines)
    }

    /// Everything left over is the message body, verbatim.
    pub(crate) fn finish(self) -> &'a [u8] {
        self.remaining
    }
}

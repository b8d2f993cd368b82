use tracing::debug;

use crate::error::{ParseError, Result};

/// Opt-in resource limits for the parser.
///
/// The default imposes no limit. Recognition cost grows faster than the
/// input length, so callers handling untrusted input should set
/// `max_message_len`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParserConfig {
    pub max_message_len: Option<usize>,
    pub max_field_lines: Option<usize>,
}

impl ParserConfig {
    pub const fn new() -> Self {
        Self {
            max_message_len: None,
            max_field_lines: None,
        }
    }

    pub const fn with_max_message_len(mut self, limit: usize) -> Self {
        self.max_message_len = Some(limit);
        self
    }

    pub const fn with_max_field_lines(mut self, limit: usize) -> Self {
        self.max_field_lines = Some(limit);
        self
    }

    pub(crate) fn check_message_len(&self, len: usize) -> Result<()> {
        match self.max_message_len {
            Some(limit) if len > limit => {
                debug!(len, limit, "message exceeds length limit");
                Err(ParseError::MessageTooLarge { len, limit })
            }
            _ => Ok(()),
        }
    }
}

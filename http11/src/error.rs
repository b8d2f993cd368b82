use thiserror::Error;

use crate::grammar::Rule;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("{0} not found")]
    MissingProduction(Rule),

    #[error("{0} not found")]
    MissingDelimiter(&'static str),

    #[error("message of {len} bytes exceeds the limit of {limit} bytes")]
    MessageTooLarge { len: usize, limit: usize },

    #[error("message has more than {limit} field lines")]
    TooManyFieldLines { limit: usize },
}

pub type Result<T> = std::result::Result<T, ParseError>;

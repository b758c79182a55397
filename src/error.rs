use std::io;

use thiserror::Error;

use crate::cli::ValueType;

#[derive(Debug, Error)]
pub enum ArgError {
    #[error("need at least {required} argument(s) : {given} given")]
    BelowMinimumArgumentCount { required: usize, given: usize },
    #[error("\"{0}\" argument name is unknown")]
    UnknownOptionName(String),
    #[error("\"{value}\" given to \"{option}\" is not of valid value type ({expected})")]
    InvalidValueType {
        option: String,
        value: String,
        expected: ValueType,
    },
    #[error("\"{option}\" option takes only {expected} argument(s) : {given} given")]
    WrongValueCount {
        option: String,
        expected: usize,
        given: usize,
    },
    #[error("no {0}s were provided to compile")]
    MissingRequiredOption(String),
    /// a description was queried for a name that was never registered; this is
    /// a bug in the caller, not bad input
    #[error("failed to find queried option ({0}), option not in option descriptions")]
    UnregisteredDescription(String),
    #[error("option name must not be empty")]
    EmptyOptionName,
    /// every user input error found in one pass over the arguments
    #[error("invalid arguments were given")]
    Invalid(Vec<ArgError>),
    #[error(transparent)]
    Io(#[from] io::Error),
}

impl ArgError {
    /// whether the error came from the command line itself, as opposed to
    /// registration mistakes or file access
    pub fn is_user_input(&self) -> bool {
        matches!(
            self,
            Self::BelowMinimumArgumentCount { .. }
                | Self::UnknownOptionName(_)
                | Self::InvalidValueType { .. }
                | Self::WrongValueCount { .. }
                | Self::Invalid(_)
        )
    }
}

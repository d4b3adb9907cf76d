use nix::errno::Errno;
use std::io;
use thiserror::Error;

/// Errors produced while turning the command-line argument into a duration.
#[derive(Debug, Error, PartialEq)]
pub enum ParseError {
    /// No duration argument was supplied.
    #[error("missing duration argument")]
    Usage,
    /// The first field could not be read as a number, or the total is not a
    /// usable number of seconds.
    #[error("invalid duration: '{0}'")]
    BadInput(String),
}

impl ParseError {
    pub fn exit_code(&self) -> i32 {
        match self {
            ParseError::Usage => 2,
            ParseError::BadInput(_) => 3,
        }
    }
}

/// Environment faults raised while the countdown is running. All of them are
/// fatal.
#[derive(Debug, Error)]
pub enum TimerError {
    #[error("{context}")]
    Clock {
        context: &'static str,
        #[source]
        source: Errno,
    },
    #[error("{context}")]
    Sleep {
        context: &'static str,
        #[source]
        source: Errno,
    },
    #[error("{context}")]
    Output {
        context: &'static str,
        #[source]
        source: io::Error,
    },
}

impl TimerError {
    /// Human-readable description of the underlying system error.
    pub fn reason(&self) -> String {
        match self {
            TimerError::Clock { source, .. } | TimerError::Sleep { source, .. } => {
                source.desc().to_string()
            }
            TimerError::Output { source, .. } => source.to_string(),
        }
    }

    pub fn exit_code(&self) -> i32 {
        1
    }
}

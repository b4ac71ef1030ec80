use thiserror::Error;

use crate::compact::SpecError;

/// Exit status for every usage error and for help output.
pub const USAGE_EXIT_CODE: u8 = 2;

#[derive(Error, Debug)]
pub enum UsageError {
    #[error("{}", flag_message(.0))]
    Flags(#[from] clap::Error),

    #[error("require exactly 1 argument for the IDL parameter, got: {0}")]
    ArgumentCount(usize),

    #[error("the IDL parameter must not be empty")]
    EmptyIdl,

    #[error(transparent)]
    Spec(#[from] SpecError),
}

impl UsageError {
    /// Whether the full usage text should follow the error message.
    pub fn shows_usage(&self) -> bool {
        matches!(self, UsageError::Flags(_))
    }
}

/// First line of clap's rendered error, without its own usage and tips.
fn flag_message(err: &clap::Error) -> String {
    err.to_string()
        .lines()
        .next()
        .unwrap_or_default()
        .trim_end()
        .to_string()
}

pub type Result<T> = std::result::Result<T, UsageError>;

use std::io;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Unknown function {0:?}, run `riemann list` to see the available ones.")]
    UnknownFunction(String),
    #[error("Invalid value {value:?} for --{name}: {reason}.")]
    InvalidArgument {
        name: &'static str,
        value: String,
        reason: &'static str,
    },
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

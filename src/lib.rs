use std::fmt;

pub use generator::{next, IdentifierGenerator};
pub use identifier::{CombineIdentifier, CustomCombineIdentifierConvertible, ParseIdentifierError};

pub mod ffi;
mod generator;
mod identifier;
pub mod verify;

/// failures of the verification tooling. issuing identifiers never fails.
#[derive(Debug)]
pub enum Error {
    Empty,
    DuplicateIdentifier(u64),
    Gap { after: u64, next: u64 },
    InvalidConfig,
    WorkerPanicked,
    SerializeFailed,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Empty => write!(f, "no identifiers were issued"),
            Error::DuplicateIdentifier(id) => write!(f, "identifier {id} was issued twice"),
            Error::Gap { after, next } => write!(f, "identifiers skip from {after} to {next}"),
            Error::InvalidConfig => write!(f, "invalid configuration"),
            Error::WorkerPanicked => write!(f, "a worker panicked"),
            Error::SerializeFailed => write!(f, "failed to serialize the report"),
        }
    }
}

impl std::error::Error for Error {}

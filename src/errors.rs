//! Definitions of errors that can occur during the execution of the BBTM toolkit

use std::{
    error::Error,
    fmt::{self, Display, Formatter},
};

/// Errors that can occur during the execution of the BBTM toolkit
#[derive(Debug)]
pub enum ScriptError {
    /// Error reading an input file
    Io(String),
    /// Error interpreting structured content (ABI source or build artifact)
    Parse(String),
    /// Error in the environment-derived configuration
    Configuration(String),
    /// Error in a user-supplied value (address, rate, comment)
    InvalidInput(String),
    /// Error when creating the client
    ClientInitialization(String),
    /// Error when fetching the nonce to deploy a contract
    NonceFetching(String),
    /// Error deploying a contract
    ContractDeployment(String),
    /// Error when building an output file
    JsonOutput(String),
    /// The manual and compiled ABIs differ (strict mode only)
    AbiMismatch,
}

impl Display for ScriptError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ScriptError::Io(s) => write!(f, "error reading input: {}", s),
            ScriptError::Parse(s) => write!(f, "error parsing input: {}", s),
            ScriptError::Configuration(s) => write!(f, "configuration error: {}", s),
            ScriptError::InvalidInput(s) => write!(f, "invalid input: {}", s),
            ScriptError::ClientInitialization(s) => write!(f, "error during client init: {}", s),
            ScriptError::NonceFetching(s) => {
                write!(f, "error during nonce fetching for client signing: {}", s)
            }
            ScriptError::ContractDeployment(s) => write!(f, "error deploying contract: {}", s),
            ScriptError::JsonOutput(s) => write!(f, "error writing json output: {}", s),
            ScriptError::AbiMismatch => {
                write!(f, "manual and compiled ABIs differ")
            }
        }
    }
}

impl Error for ScriptError {}

//! Companion scripts for deploying and displaying the BigBrotherTheMusical
//! (BBTM) NFT contract: ABI reconciliation, one-shot Polygon deployment and
//! the logic behind the static display page.

#![deny(clippy::missing_docs_in_private_items)]

pub mod abi;
pub mod artifact;
pub mod cli;
pub mod commands;
pub mod config;
pub mod constants;
pub mod errors;
pub mod site;

/// Our deploy utils
mod deploy;

// Our output utils
mod output_writer;

pub mod tx;

//! RPC client construction and transaction submission

pub mod client;
pub mod sender;

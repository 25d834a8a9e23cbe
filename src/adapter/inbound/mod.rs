//! Inbound adapters (driving side): the command line and the HTTP service.

pub mod cli;
pub mod http;

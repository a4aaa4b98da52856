//! Transports carrying JSON-RPC messages to the dispatcher
//!
//! - [`http`]: `POST /mcp` plus descriptor and health endpoints
//! - [`stdio`]: newline-delimited JSON on stdin/stdout

pub mod http;
pub mod stdio;

use clap::ValueEnum;

/// Transport selected on the command line
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum TransportKind {
    #[default]
    Http,
    Stdio,
}

impl std::fmt::Display for TransportKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Http => write!(f, "http"),
            Self::Stdio => write!(f, "stdio"),
        }
    }
}

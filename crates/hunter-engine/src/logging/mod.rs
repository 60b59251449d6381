//! Logger initialization for binaries built on the engine.
//!
//! Library code only talks to the `log` facade; this module wires up the
//! `env_logger` backend for hosts that want one.

mod init;

pub use init::{LoggingConfig, init_logging};

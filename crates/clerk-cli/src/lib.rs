//! # clerk-cli
//!
//! Shared library behind the `clerk-users`, `clerk-orgs` and
//! `clerk-invitations` binaries: clap definitions, command handlers,
//! JSON output and stderr error reporting.

pub mod bootstrap;
pub mod cli;
pub mod commands;
pub mod output;
pub mod report;

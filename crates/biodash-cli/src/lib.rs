#![deny(unsafe_code)]

//! Library surface of the biodash CLI.
//!
//! The binary is a thin wrapper over these modules; keeping them in a
//! library makes the command implementations testable without spawning a
//! process.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod summary;

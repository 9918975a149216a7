//! Version ordering and upgrade ranges for sequential out-of-band migrations
//!
//! # Modules
//!
//! - [`version`]: The `(major, minor)` version model and range enumeration
//! - [`config`]: Configuration file and data directory resolution
//! - [`logging`]: Tracing subscriber setup
//! - [`cli`]: Command-line surface used by the binary

pub mod cli;
pub mod config;
pub mod logging;
pub mod version;

#[cfg(test)]
mod test_support;

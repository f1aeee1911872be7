//! Command implementations.
//!
//! - [`build`] - write the assembled descriptors to disk
//! - [`inspect`] - print them to stdout

pub mod build;
pub mod inspect;
pub(crate) mod utils;

pub use build::execute as build_execute;
pub use inspect::execute as inspect_execute;

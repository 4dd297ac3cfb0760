//! Command-line argument parsing and typed parameter bindings.
//!
//! [`CommandLineArguments`] is the ordered store of raw named/positional
//! entries parsed once from process argv. [`CommandLineParameter`] and
//! [`CommandLineParameterList`] are typed, validated views over that store;
//! they read (or consume) matching entries and render the usage and help
//! text an application prints for `--help`.
//!
//! Absence of an argument is an expected, recoverable outcome and surfaces
//! as an [`ArgumentError`]; contract violations (empty names, out-of-range
//! indices, clearing the value name of a positional parameter) panic.

mod arguments;
mod error;
mod parameter;
mod parameters;

pub use arguments::{CommandLineArgument, CommandLineArguments};
pub use error::ArgumentError;
pub use parameter::{CommandLineParameter, CommandLineParameterList};
pub use parameters::CommandLineParameters;

//! Process context and action dispatch.
//!
//! A [`Process`] is the explicit context an application runs against:
//! its parsed command-line arguments, fan-out output and error streams,
//! and an exit code. There is no process-wide singleton; entry points
//! construct one and pass it down, and tests construct one over in-memory
//! streams.
//!
//! [`CommandLineActions`] dispatches the first anonymous argument to a
//! registered [`CommandLineAction`], with `--help`/unknown-action handling
//! and alias resolution.

mod actions;
mod process;

pub use actions::{CommandLineAction, CommandLineActions};
pub use process::Process;

//! Process Execution
//!
//! Implements the CommandRunner port on top of `sh -c`.

mod shell;

pub use shell::ShellRunner;

//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - File system implementations
//! - `process/` - Shell command runner with process-group timeouts

pub mod fs;
pub mod process;

// Re-export for convenience
pub use fs::LocalFs;
pub use process::ShellRunner;

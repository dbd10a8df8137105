//! Domain Services
//!
//! Stateless logic over documents and compiler output.

mod command_format;
mod dependency_resolver;
mod output_classifier;

pub use command_format::format_command;
pub use dependency_resolver::{
    find_includes, strip_comments, Dependencies, DependencyResolver, ReadFailure,
};
pub use output_classifier::{classify, has_fatal_error, ClassifiedOutput, FATAL_MARKERS};

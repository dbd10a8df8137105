//! Domain Entities
//!
//! - `Document` - A `.tex` source file named on the command line
//! - `CompileStep` / `CompileSequence` - The ordered passes of a build

mod compile_step;
mod document;

pub use compile_step::{CompileSequence, CompileStep};
pub use document::{with_tex_ext, Document, PDF_EXTENSION, TEX_EXTENSION};

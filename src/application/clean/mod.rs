//! Clean Use Case
//!
//! Removes auxiliary build artifacts next to a document.
//!
//! This module handles:
//! - Per-extension artifacts (`paper.aux`, `paper.log`, ...)
//! - Artifact folders matched by formatted patterns (`_minted-paper`)
//! - Dry runs that only report what would be removed

mod result;
mod use_case;

pub use result::{CleanFailure, CleanResult};
pub use use_case::{CleanOptions, CleanUseCase};

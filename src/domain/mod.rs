//! Domain Layer
//!
//! The build engine's pure logic: documents, compile sequences, placeholder
//! formatting, include scanning and compiler-output classification.
//!
//! ## Structure
//!
//! - `entities/` - Documents and compile steps
//! - `services/` - Stateless services (formatter, resolver, classifier)
//! - `ports/` - Interface definitions for infrastructure
//!
//! All I/O goes through the traits in `ports`, so every service can be
//! exercised with in-memory fakes.

pub mod entities;
pub mod ports;
pub mod services;

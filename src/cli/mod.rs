//! CLI command handlers
//!
//! This module contains all CLI-related functionality including:
//! - Argument parsing structures
//! - Document input and result rendering
//! - Command dispatch onto the dynamic operations

pub mod args;
pub mod input;
pub mod router;

// Re-export the main CLI structures for convenience
pub use args::{Cli, Commands};
pub use input::{parse_document, read_document, render};
pub use router::execute_command;

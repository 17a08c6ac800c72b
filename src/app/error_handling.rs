//! Error handling utilities
//!
//! This module provides centralized error handling for the application.

use crate::error::{describe_error_code, FiError};
use tracing::error;

/// Handle fatal errors and exit with appropriate status code
///
/// For `FiError` the user message is always shown and the full cause chain
/// is added in verbose mode. Other errors print their chain in verbose mode
/// and exit with status 1.
pub fn handle_fatal_error(error: anyhow::Error, verbose: u8) -> ! {
    error!("Fatal error: {}", error);

    let exit_code = if let Some(fi_err) = error.downcast_ref::<FiError>() {
        eprintln!("Error: {}", fi_err.user_message());

        if verbose >= 1 {
            eprintln!(
                "\n[E{:04}] {}",
                fi_err.code(),
                describe_error_code(fi_err.code())
            );
            eprintln!("\nContext Chain:\n{}", fi_err.developer_message());
        }

        fi_err.exit_code()
    } else {
        eprintln!("Error: {error}");

        if verbose >= 1 {
            eprintln!("\nError chain:");
            for (i, cause) in error.chain().enumerate() {
                eprintln!("  {}: {}", i, cause);
            }
        }

        1
    };

    std::process::exit(exit_code)
}

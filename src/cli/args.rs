//! CLI argument structures
//!
//! This module defines the command-line interface of the `fi` binary: global
//! options plus one subcommand per collection operation.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Apply collection operations to a JSON document
#[derive(Parser, Debug)]
#[command(name = "fi")]
#[command(about = "fi - Apply collection operations to JSON documents", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Enable verbose output (-v for debug, -vv for trace, -vvv adds line numbers)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Configuration file (defaults to ./fi.toml when present)
    #[arg(short = 'c', long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Read the document from a file instead of stdin
    #[arg(short = 'i', long, global = true, value_name = "PATH")]
    pub input: Option<PathBuf>,

    /// Pretty-print the JSON result
    #[arg(short = 'p', long, global = true)]
    pub pretty: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Commands {
    /// Count the elements of a sequence or the keys of a mapping
    Size,

    /// First element, or the first N elements
    First {
        /// Number of elements to take (0 means a single element)
        #[arg(short = 'n', long, allow_hyphen_values = true)]
        count: Option<i64>,
    },

    /// Last element, or the last N elements
    Last {
        /// Number of elements to take (0 means a single element)
        #[arg(short = 'n', long, allow_hyphen_values = true)]
        count: Option<i64>,
    },

    /// Drop false, null, 0, "" and NaN elements
    Compact,

    /// Flatten nested sequences
    Flatten {
        /// Remove only one level of nesting
        #[arg(long)]
        shallow: bool,
    },

    /// Remove repeated elements
    Uniq {
        /// Treat the input as sorted and only compare neighbours
        #[arg(long)]
        sorted: bool,

        /// Compare elements by this property instead of by value
        #[arg(long, value_name = "KEY")]
        by: Option<String>,
    },

    /// Sort ascending by a numeric property (or by the elements themselves)
    SortBy {
        /// Property to rank by
        key: Option<String>,
    },

    /// Key names of a mapping (indices for a sequence)
    Keys,

    /// Values of a mapping in key order
    Values,

    /// Replace every element by one of its properties
    Map {
        /// Property to extract
        #[arg(long, value_name = "KEY")]
        key: String,
    },

    /// First element (or property) equal to a JSON value
    Find {
        /// Compare this property instead of the whole element
        #[arg(long, value_name = "KEY")]
        key: Option<String>,

        /// JSON value to compare against
        #[arg(long, value_name = "JSON")]
        equals: String,
    },

    /// All elements (or properties) equal to a JSON value
    Filter {
        /// Compare this property instead of the whole element
        #[arg(long, value_name = "KEY")]
        key: Option<String>,

        /// JSON value to compare against
        #[arg(long, value_name = "JSON")]
        equals: String,
    },

    /// Add up the elements (or a property of each) as numbers
    Sum {
        /// Property to add up
        #[arg(long, value_name = "KEY")]
        key: Option<String>,
    },
}

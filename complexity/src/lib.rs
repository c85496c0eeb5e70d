// complexity/src/lib.rs
//! # Complexity CLI Application
//!
//! Command-line front end for `complexity-core`: scores annotated documents
//! from files or stdin and exports batch results as CSV.

pub mod cli;
pub mod commands;
pub mod logger;
pub mod ui;

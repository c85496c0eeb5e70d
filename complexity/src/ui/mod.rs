//! Terminal output: colour themes and formatting helpers.

pub mod output_format;
pub mod theme;

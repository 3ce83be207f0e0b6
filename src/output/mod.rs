//! Result rendering
//!
//! Text output goes to stdout; the JSON report is written to a file.

pub mod json;
pub mod text;

//! Listing output
//!
//! Formatters for the level-ordered listing:
//!
//! - `levels` - console output, one `depth:position:path` line per entry
//! - `json` - JSON output of the built tree

mod config;
mod json;
mod levels;

// Re-export public types and functions
pub use config::OutputConfig;
pub use json::print_json;
pub use levels::{LevelFormatter, render_levels};

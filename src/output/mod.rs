//! Output formatting for tree display
//!
//! `StreamingFormatter` turns the walker's callbacks into box-drawing lines.

mod config;
mod streaming;
mod utils;

pub use config::OutputConfig;
pub use streaming::StreamingFormatter;

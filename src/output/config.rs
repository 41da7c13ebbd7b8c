//! Output configuration types

/// Configuration for output formatting.
#[derive(Debug, Clone, Default)]
pub struct OutputConfig {
    /// Color directory names. Glyphs and quotes stay plain either way.
    pub use_color: bool,
    /// Print the `N directories, M files` trailer.
    pub summary: bool,
}

//! Parser Configuration
//!
//! Defines rendering options for the XML program document.
//! Configuration carries presentation choices only; the grammar is fixed.

/// Header token every source must open with (compared case-insensitively)
pub const HEADER_TOKEN: &str = ".IPPcode23";

/// Value of the `language` attribute on the document root
pub const LANGUAGE: &str = "IPPcode23";

/// Serializer configuration
#[derive(Debug, Clone)]
pub struct ParserConfig {
    /// Spaces per nesting level in the rendered document
    pub indent_width: usize,

    /// Emit the `<?xml ...?>` declaration line
    pub xml_declaration: bool,
}

impl Default for ParserConfig {
    fn default() -> Self {
        ParserConfig {
            indent_width: 2,
            xml_declaration: true,
        }
    }
}

impl ParserConfig {
    /// Create a new configuration with default rendering options
    pub fn new() -> Self {
        Self::default()
    }
}

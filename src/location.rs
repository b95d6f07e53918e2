//! Source positions carried by every tree element.
//!
//! Locations exist for diagnostics only; they never influence
//! serialization or document order.

use std::fmt;

/// A source span: file name plus start and end positions. Synthetic nodes
/// built programmatically carry the file name with zeroed positions.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Location {
    pub file: String,
    pub start_line: u32,
    pub start_column: u32,
    pub end_line: u32,
    pub end_column: u32,
}

impl Location {
    /// A zero-position location for elements built in memory.
    pub fn for_file(file: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            ..Self::default()
        }
    }

    pub fn new(
        file: impl Into<String>,
        start_line: u32,
        start_column: u32,
        end_line: u32,
        end_column: u32,
    ) -> Self {
        Self {
            file: file.into(),
            start_line,
            start_column,
            end_line,
            end_column,
        }
    }

}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} : Line: {} : Row: {}",
            self.file, self.start_line, self.start_column
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_uses_the_finding_prefix_format() {
        let location = Location::new("ecu.a2l", 12, 4, 12, 30);
        assert_eq!(location.to_string(), "ecu.a2l : Line: 12 : Row: 4");
    }
}

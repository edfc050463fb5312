//! Parser configuration.

/// Default maximum element nesting accepted by the markup parser.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Configuration for a single parse call.
///
/// A plain value: pass it per call, nothing is stored globally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParserConfig {
    /// Maximum element nesting depth before the markup parser gives up with
    /// [`ParseError::NestingTooDeep`](crate::error::ParseError::NestingTooDeep).
    pub max_depth: usize,
    /// Trim trailing whitespace from text nodes.
    pub trim_text: bool,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            trim_text: false,
        }
    }
}

impl ParserConfig {
    /// Create a new default config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum nesting depth (builder).
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Enable or disable trailing-whitespace trimming of text nodes (builder).
    pub fn with_trim_text(mut self, trim_text: bool) -> Self {
        self.trim_text = trim_text;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = ParserConfig::new();
        assert_eq!(config.max_depth, DEFAULT_MAX_DEPTH);
        assert!(!config.trim_text);
    }

    #[test]
    fn builders() {
        let config = ParserConfig::new().with_max_depth(4).with_trim_text(true);
        assert_eq!(config.max_depth, 4);
        assert!(config.trim_text);
    }
}

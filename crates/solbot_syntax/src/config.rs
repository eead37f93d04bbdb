//! Parse configuration for solbot

/// How tokens reach the parser
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LexerMode {
    /// The parser pulls tokens from the lexer on the calling thread.
    #[default]
    Inline,
    /// The lexer runs on its own thread behind a bounded channel.
    Threaded,
}

/// Parse configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseConfig {
    /// Where the lexer runs
    pub lexer_mode: LexerMode,
    /// Bounded channel capacity between lexer thread and parser (threaded mode only)
    pub lookahead_capacity: usize,
    /// Whether skipped regions produce a warning diagnostic
    pub report_skipped: bool,
}

impl Default for ParseConfig {
    fn default() -> Self {
        Self {
            lexer_mode: LexerMode::Inline,
            lookahead_capacity: 2,
            report_skipped: true,
        }
    }
}

impl ParseConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the lexer mode
    pub fn with_lexer_mode(mut self, mode: LexerMode) -> Self {
        self.lexer_mode = mode;
        self
    }

    /// Set the channel capacity; values below 1 are raised to 1
    pub fn with_lookahead_capacity(mut self, capacity: usize) -> Self {
        self.lookahead_capacity = capacity.max(1);
        self
    }

    /// Enable or disable skipped-region warnings
    pub fn with_report_skipped(mut self, report: bool) -> Self {
        self.report_skipped = report;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ParseConfig::default();
        assert_eq!(config.lexer_mode, LexerMode::Inline);
        assert_eq!(config.lookahead_capacity, 2);
        assert!(config.report_skipped);
    }

    #[test]
    fn test_new_equals_default() {
        assert_eq!(ParseConfig::new(), ParseConfig::default());
    }

    #[test]
    fn test_builder_chain() {
        let config = ParseConfig::new()
            .with_lexer_mode(LexerMode::Threaded)
            .with_lookahead_capacity(8)
            .with_report_skipped(false);
        assert_eq!(config.lexer_mode, LexerMode::Threaded);
        assert_eq!(config.lookahead_capacity, 8);
        assert!(!config.report_skipped);
    }

    #[test]
    fn test_zero_capacity_is_raised() {
        let config = ParseConfig::new().with_lookahead_capacity(0);
        assert_eq!(config.lookahead_capacity, 1);
    }
}

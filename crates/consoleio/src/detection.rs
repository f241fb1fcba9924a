//! Human/agent context detection
//!
//! Determines whether styled output should be enabled based on the execution context.

use console::Term;

/// Display context representing the environment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayContext {
    /// Agent context - plain output for machine parsing
    Agent,
    /// Human context - styled output
    #[default]
    Human,
}

impl DisplayContext {
    /// Create an agent (plain output) context
    #[must_use]
    pub fn new_agent() -> Self {
        Self::Agent
    }

    /// Create a human (styled output) context
    #[must_use]
    pub fn new_human() -> Self {
        Self::Human
    }

    /// Auto-detect the display context from environment
    #[must_use]
    pub fn detect() -> Self {
        if should_enable_rich() {
            Self::Human
        } else {
            Self::Agent
        }
    }

    /// Check if this is a human context (styled output enabled)
    #[must_use]
    pub fn is_human(&self) -> bool {
        matches!(self, Self::Human)
    }

    /// Check if this is an agent context (plain output)
    #[must_use]
    pub fn is_agent(&self) -> bool {
        matches!(self, Self::Agent)
    }
}

/// Determine if we're running in an agent or CI context
#[must_use]
pub fn is_agent_context() -> bool {
    std::env::var("CI").is_ok()
        || std::env::var("AGENT_MODE").is_ok()
        // Explicit styling disable
        || std::env::var("CONSOLEIO_PLAIN").is_ok()
        || std::env::var("NO_COLOR").is_ok()
}

/// Determine if styled output should be enabled
#[must_use]
pub fn should_enable_rich() -> bool {
    // Explicit enable always wins
    if std::env::var("CONSOLEIO_RICH").is_ok() {
        return true;
    }

    if is_agent_context() {
        return false;
    }

    // Piped stdout gets plain text
    Term::stdout().is_term()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_context_new_agent() {
        let ctx = DisplayContext::new_agent();
        assert!(ctx.is_agent());
        assert!(!ctx.is_human());
    }

    #[test]
    fn test_display_context_new_human() {
        let ctx = DisplayContext::new_human();
        assert!(ctx.is_human());
        assert!(!ctx.is_agent());
    }

    #[test]
    fn test_display_context_default_is_human() {
        assert!(DisplayContext::default().is_human());
    }

    #[test]
    fn test_display_context_equality() {
        assert_eq!(DisplayContext::Agent, DisplayContext::Agent);
        assert_ne!(DisplayContext::Agent, DisplayContext::Human);
    }

    #[test]
    fn test_detect_agrees_with_should_enable_rich() {
        assert_eq!(DisplayContext::detect().is_human(), should_enable_rich());
    }
}

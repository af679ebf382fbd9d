//! Style input errors.

/// Raised when a variant or size name is outside the declared set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StyleError {
    /// Unknown style variant name.
    #[error("Invalid style variant: {0:?} (expected one of: default, accent)")]
    InvalidVariant(String),

    /// Unknown size class name.
    #[error("Invalid size class: {0:?} (expected one of: sm, md, lg)")]
    InvalidSize(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_input() {
        let msg = StyleError::InvalidVariant("bold".to_string()).to_string();
        assert!(msg.contains("\"bold\""));
        assert!(msg.contains("accent"));

        let msg = StyleError::InvalidSize("xl".to_string()).to_string();
        assert!(msg.contains("\"xl\""));
    }
}

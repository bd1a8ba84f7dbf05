//! Patch engine errors

/// Errors raised before any rule runs
#[derive(Debug, thiserror::Error)]
pub enum PatchError {
    /// Follow-up instruction was empty
    #[error("prompt is empty")]
    EmptyPrompt,
}

impl PatchError {
    /// Check if error was caused by missing caller input
    #[inline]
    #[must_use]
    pub fn is_missing_input(&self) -> bool {
        matches!(self, Self::EmptyPrompt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_input_predicate() {
        assert!(PatchError::EmptyPrompt.is_missing_input());
        assert_eq!(PatchError::EmptyPrompt.to_string(), "prompt is empty");
    }
}

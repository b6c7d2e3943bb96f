//! Configuration for a divination session.

/// Configuration for a divination session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// RNG seed for reproducible tosses.
    pub seed: u64,
    /// The question the first reading is cast for.
    pub question: Option<String>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            question: None,
        }
    }
}

impl SessionConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the question. Blank questions are dropped.
    pub fn with_question(mut self, question: impl Into<String>) -> Self {
        let question = question.into();
        let trimmed = question.trim();
        self.question = (!trimmed.is_empty()).then(|| trimmed.to_string());
        self
    }
}

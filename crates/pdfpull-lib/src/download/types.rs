/// Result of attempting a single document. Immutable once recorded.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ItemOutcome {
    pub index: u32,
    pub success: bool,
    /// Hex SHA-256 of the stored body; present exactly when `success` is set.
    pub content_hash: Option<String>,
    pub message: String,
}

impl ItemOutcome {
    pub fn succeeded(index: u32, content_hash: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            index,
            success: true,
            content_hash: Some(content_hash.into()),
            message: message.into(),
        }
    }

    pub fn failed(index: u32, message: impl Into<String>) -> Self {
        Self {
            index,
            success: false,
            content_hash: None,
            message: message.into(),
        }
    }
}

/// Outcomes of a batch, in the order the indices were attempted.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub success_count: usize,
    pub failure_count: usize,
    pub outcomes: Vec<ItemOutcome>,
}

impl RunSummary {
    pub fn record(&mut self, outcome: ItemOutcome) {
        if outcome.success {
            self.success_count += 1;
        } else {
            self.failure_count += 1;
        }
        self.outcomes.push(outcome);
    }

    pub fn total(&self) -> usize {
        self.success_count + self.failure_count
    }

    pub fn successes(&self) -> impl Iterator<Item = &ItemOutcome> {
        self.outcomes.iter().filter(|outcome| outcome.success)
    }

    pub fn failures(&self) -> impl Iterator<Item = &ItemOutcome> {
        self.outcomes.iter().filter(|outcome| !outcome.success)
    }
}

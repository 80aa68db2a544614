use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum StatusKind {
    #[default]
    Info,
    Warn,
}

/// Advisory status line shown next to the chart. Never an error state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct StatusMessage {
    pub kind: StatusKind,
    pub text: String,
}

impl StatusMessage {
    #[must_use]
    pub fn cleared() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn warn(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Warn,
            text: text.into(),
        }
    }

    /// Status for a pass that removed `dropped` points on a log axis.
    #[must_use]
    pub fn for_dropped_points(dropped: usize) -> Self {
        if dropped == 0 {
            Self::cleared()
        } else {
            Self::warn(format!(
                "Skipped {dropped} point(s) not valid on log scale."
            ))
        }
    }

    #[must_use]
    pub fn is_cleared(&self) -> bool {
        self.text.is_empty()
    }
}

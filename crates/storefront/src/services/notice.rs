//! User-facing notices emitted by cart and wishlist mutations.

use std::fmt;

use tracing::info;

/// Tracing target for notices, so front ends can route them separately.
pub const TARGET: &str = "notification";

/// A short message confirming what a mutation did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// Something was added or updated.
    Success(String),
    /// Something was removed.
    Info(String),
}

impl Notice {
    /// The message text.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Success(msg) | Self::Info(msg) => msg,
        }
    }

    /// Log the notice and hand it back.
    pub(crate) fn emit(self) -> Self {
        match &self {
            Self::Success(msg) => info!(target: TARGET, kind = "success", "{msg}"),
            Self::Info(msg) => info!(target: TARGET, kind = "info", "{msg}"),
        }
        self
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

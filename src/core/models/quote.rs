//! Quote model

use serde::{Deserialize, Serialize};

/// Text shown when no quote can be loaded
pub const FALLBACK_TEXT: &str = "The secret of getting ahead is getting started.";

/// Author of the fallback quote
pub const FALLBACK_AUTHOR: &str = "Mark Twain";

/// A motivational quote
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    /// Quote body, without surrounding quotation marks
    pub text: String,
    /// Attribution
    pub author: String,
}

impl Quote {
    /// Create a new quote
    #[must_use]
    pub fn new(text: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            author: author.into(),
        }
    }

    /// The built-in quote used whenever the quote source is unavailable or empty
    #[must_use]
    pub fn fallback() -> Self {
        Self::new(FALLBACK_TEXT, FALLBACK_AUTHOR)
    }
}

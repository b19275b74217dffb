use serde::{Deserialize, Serialize};

/// An in-page anchor link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TocEntry {
    pub url: String,
    pub text: String,
}

impl TocEntry {
    pub fn new(anchor: &str, text: &str) -> Self {
        Self {
            url: format!("#{anchor}"),
            text: text.to_string(),
        }
    }
}

use serde::{Deserialize, Serialize};

use crate::content::ItemId;

/// A headline figure block as submitted from the editing form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeadlineFigure {
    pub figure_id: String,
    pub title: String,
    /// Article series the figure is sourced from. Only set on topic pages.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub series: Option<ItemId>,
}

impl HeadlineFigure {
    pub fn new(figure_id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            figure_id: figure_id.into(),
            title: title.into(),
            series: None,
        }
    }

    pub fn from_series(mut self, series: ItemId) -> Self {
        self.series = Some(series);
        self
    }
}

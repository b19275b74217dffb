use serde::{Deserialize, Serialize};

/// Publication state of an item at query time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Visibility {
    /// Published (not a draft, not unpublished).
    pub live: bool,
    /// Not behind a view restriction.
    pub public: bool,
}

impl Visibility {
    pub const VISIBLE: Visibility = Visibility {
        live: true,
        public: true,
    };

    pub const DRAFT: Visibility = Visibility {
        live: false,
        public: true,
    };

    pub const PRIVATE: Visibility = Visibility {
        live: true,
        public: false,
    };

    /// Whether the item may be shown to anonymous readers.
    pub fn is_visible(&self) -> bool {
        self.live && self.public
    }
}

impl Default for Visibility {
    fn default() -> Self {
        Self::VISIBLE
    }
}

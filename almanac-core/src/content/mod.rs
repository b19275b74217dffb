//! The content model: identifiers, page kinds, tree paths, and visibility.

mod item;
mod kind;
mod tree_path;
mod visibility;

pub use item::{ContentItem, ItemId};
pub use kind::ContentKind;
pub use tree_path::TreePath;
pub use visibility::Visibility;

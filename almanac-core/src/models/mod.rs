pub mod breadcrumb;
pub mod curation;
pub mod headline_figure;
pub mod related_list;
pub mod table_of_contents;

pub use breadcrumb::Breadcrumb;
pub use curation::{CurationEntry, CurationSection};
pub use headline_figure::HeadlineFigure;
pub use related_list::RelatedList;
pub use table_of_contents::TocEntry;

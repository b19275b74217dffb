/// Almanac system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Width of a single step in a materialised tree path.
pub const TREE_PATH_STEP_LEN: usize = 4;

/// Depth of the site home page. Ancestors at or above it render as "Home".
pub const HOMEPAGE_DEPTH: usize = 2;

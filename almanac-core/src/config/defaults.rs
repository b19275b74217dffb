// Single source of truth for all default values.

// --- Related content ---
pub const DEFAULT_MAX_ITEMS_PER_SECTION: usize = 3;

// --- Storage ---
pub const DEFAULT_DB_FILENAME: &str = "almanac.db";
pub const DEFAULT_WAL_MODE: bool = true;
pub const DEFAULT_BUSY_TIMEOUT_MS: u32 = 5_000;

// --- Validation ---
pub const DEFAULT_MIN_HEADLINE_FIGURES: usize = 2;
pub const DEFAULT_MAX_HEADLINE_FIGURES: usize = 6;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = true;

// --- Environment overrides ---
pub const ENV_MAX_ITEMS_PER_SECTION: &str = "ALMANAC_MAX_ITEMS_PER_SECTION";
pub const ENV_DB_PATH: &str = "ALMANAC_DB_PATH";
pub const ENV_LOG_LEVEL: &str = "ALMANAC_LOG_LEVEL";
pub const ENV_LOG_FILTER: &str = "ALMANAC_LOG";

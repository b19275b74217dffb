mod almanac_error;
mod config_error;
mod storage_error;
mod validation_error;

pub use almanac_error::{AlmanacError, AlmanacResult};
pub use config_error::ConfigError;
pub use storage_error::StorageError;
pub use validation_error::ValidationError;

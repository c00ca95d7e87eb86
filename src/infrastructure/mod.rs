pub mod error;
pub mod logging;

pub use error::{NeedleError, NeedleResult};
pub use logging::{setup_logging, LoggingConfig};

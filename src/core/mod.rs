mod error;

pub use error::{BootstrapError, Result};

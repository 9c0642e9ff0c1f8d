pub mod error;
pub mod types;


// Re-export the error alias for convenience
pub use error::{ConvertError, ConvertResult};

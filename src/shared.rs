pub mod errors;
pub mod settings;
pub mod types;

// Re-export AppError for convenience
pub use errors::{AppError, AppResult};

// Utilities
pub mod error;
pub mod logging;
pub mod settings_path;

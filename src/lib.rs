// StudyPalz - Library root
//
// Re-exports the credential store, configuration, UI and CLI modules.

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod store;
pub mod ui;

pub use error::{AppError, Result};

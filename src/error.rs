//! Top-level error type for the `vlist` binary.
//!
//! The windowing engine itself never fails: degenerate inputs (empty lists,
//! out-of-range scroll offsets, corrections for unknown indices) have defined
//! results. Errors only come from the edges - reading configuration, setting
//! up logging and driving the terminal.
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - wraps every fallible layer
//!   - [`ConfigError`] - config file read/parse failures, invalid values
//!   - [`LoggingError`] - log directory or subscriber setup
//!   - [`TuiError`] - terminal I/O
//!   - [`InvalidHeight`] - a height that is not finite and positive

use thiserror::Error;

use crate::config::ConfigError;
use crate::logging::LoggingError;
use crate::view::TuiError;
use crate::window::InvalidHeight;

/// Top-level application error.
///
/// Each layer's error converts via `From`, so `?` composes across them.
///
/// # Examples
///
/// ```
/// use vlist::error::AppError;
/// use vlist::window::Height;
///
/// fn item_height(raw: f64) -> Result<Height, AppError> {
///     Ok(Height::new(raw)?)
/// }
///
/// assert!(item_height(3.0).is_ok());
/// assert!(matches!(item_height(0.0), Err(AppError::Height(_))));
/// ```
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration could not be loaded or is invalid.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Logging could not be initialized.
    #[error("Logging error: {0}")]
    Logging(#[from] LoggingError),

    /// Terminal setup, drawing or input failed.
    #[error("Terminal error: {0}")]
    Tui(#[from] TuiError),

    /// A height value was rejected.
    #[error(transparent)]
    Height(#[from] InvalidHeight),
}

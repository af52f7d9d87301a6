//! # Error Types
//!
//! This module defines all error types for the fretboard engine.
//!
//! Errors only come out of the catalog lookups (note names, scale ids, tuning presets)
//! and out of settings loading. Everything past that edge is total: "nothing matched"
//! is an empty `Vec` or a `None`, never an error.
//!
//! ## Error Types
//! - `UnknownNoteName` - root spelling not in the note-name table
//! - `UnknownScaleId` - scale key not in the scale catalog
//! - `UnsupportedStringCount` - no tuning preset for that many strings
//! - `SettingsError` - malformed YAML settings
//!
//! ## Usage
//! ```rust
//! use fretmap::{tuning_preset, FretError};
//!
//! match tuning_preset(5, false) {
//!     Ok(tuning) => println!("{:?}", tuning),
//!     Err(FretError::UnsupportedStringCount(n)) => eprintln!("no preset for {} strings", n),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum FretError {
    /// Note name not found in the sharp/flat spelling table.
    ///
    /// # Example
    /// ```
    /// # use fretmap::FretError;
    /// let err = FretError::UnknownNoteName("H".to_string());
    /// assert_eq!(err.to_string(), "Unknown note name: H");
    /// ```
    #[error("Unknown note name: {0}")]
    UnknownNoteName(String),

    /// Scale id not present in the catalog.
    ///
    /// # Example
    /// ```
    /// # use fretmap::FretError;
    /// let err = FretError::UnknownScaleId("majour".to_string());
    /// assert_eq!(err.to_string(), "Unknown scale id: majour");
    /// ```
    #[error("Unknown scale id: {0}")]
    UnknownScaleId(String),

    /// Tuning presets exist for 6, 7, 8 and 9 strings only.
    ///
    /// # Example
    /// ```
    /// # use fretmap::FretError;
    /// let err = FretError::UnsupportedStringCount(4);
    /// assert_eq!(err.to_string(), "Unsupported string count: 4 (supported: 6-9)");
    /// ```
    #[error("Unsupported string count: {0} (supported: 6-9)")]
    UnsupportedStringCount(u8),

    /// Settings could not be read.
    #[error("Invalid settings: {0}")]
    SettingsError(String),
}

//! Error module for the Mauka spell checking engine.
//!
//! This module provides the error handling framework for the whole crate,
//! following Rust's idiomatic error handling patterns with explicit error types,
//! proper error propagation, and helpful context information.

use std::fmt::{Display, Formatter};
use std::path::PathBuf;
use thiserror::Error;

pub mod config;
pub mod dictionary;
pub mod input;

/// Result type alias used throughout the crate.
pub type SpellResult<T> = Result<T, SpellError>;

/// Core error enum for the spell checking engine.
#[derive(Error, Debug)]
pub enum SpellError {
    /// Errors occurring during configuration loading or validation.
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// A dictionary snapshot could not be loaded.
    #[error("Dictionary load error: {0}")]
    Load(#[from] dictionary::LoadError),

    /// A word was rejected before reaching the dictionary.
    #[error("Invalid input: {0}")]
    InvalidInput(#[from] input::InvalidInputError),

    /// The dictionary could not be written to disk. In-memory state is unaffected.
    #[error("Failed to persist dictionary to {}: {source}", .path.display())]
    Persist {
        /// Destination of the failed write
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// IO errors that may occur during other file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization errors.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Custom error with message for cases where specific error types are not defined.
    #[error("{0}")]
    Custom(String),
}

/// Error reporting structure to provide context and debugging information.
#[derive(Debug)]
pub struct ErrorContext {
    /// The original error that occurred.
    pub error: SpellError,

    /// The component where the error occurred.
    pub component: String,

    /// Additional context information to help with debugging.
    pub details: Option<String>,
}

impl ErrorContext {
    /// Creates a new error context with the given error and component.
    ///
    /// # Arguments
    ///
    /// * `error` - The error that occurred
    /// * `component` - The component where the error occurred
    pub fn new<S: Into<String>>(error: SpellError, component: S) -> Self {
        Self {
            error,
            component: component.into(),
            details: None,
        }
    }

    /// Adds detail information to the error context.
    ///
    /// # Arguments
    ///
    /// * `details` - Additional context information to help with debugging
    pub fn with_details<S: Into<String>>(mut self, details: S) -> Self {
        self.details = Some(details.into());
        self
    }
}

impl Display for ErrorContext {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error in {}: {}", self.component, self.error)?;
        if let Some(details) = &self.details {
            write!(f, "\nDetails: {details}")?;
        }
        Ok(())
    }
}

/// Error reporter trait for reporting errors to various sinks.
///
/// The spell checker hands every recovered load failure and every failed
/// persist to its reporter, so callers can surface them to a user.
#[cfg_attr(test, mockall::automock)]
pub trait ErrorReporter: Send + Sync + std::fmt::Debug {
    /// Report an error with context.
    ///
    /// # Arguments
    ///
    /// * `context` - The error context to report
    fn report(&self, context: ErrorContext);
}

/// A simple error reporter implementation that logs errors using the tracing framework.
#[derive(Default, Debug)]
pub struct TracingErrorReporter;

impl ErrorReporter for TracingErrorReporter {
    fn report(&self, context: ErrorContext) {
        tracing::error!(
            error = %context.error,
            component = %context.component,
            details = context.details.as_deref().unwrap_or("None"),
            "Error reported"
        );
    }
}

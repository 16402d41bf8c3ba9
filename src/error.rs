use std::error::Error as StdError;

use thiserror::Error as ThisError;

use crate::handles::ResourceKind;

#[derive(Debug, ThisError)]
/// Error type used to indicate that an operation on a connection, statement or result set failed.
///
/// Extracting a native handle never fails by itself. Handles not recognized by an extractor are
/// handed back unchanged. Errors only ever originate from the resources the extractors talk to,
/// and are passed on to the caller as they are.
pub enum Error {
    /// The resource has already been closed, e.g. a statement returned to the pool has been asked
    /// for its connection.
    #[error("The {kind} has already been closed.")]
    ResourceClosed {
        /// Kind of the closed resource.
        kind: ResourceKind,
    },
    /// Error emitted by the native driver object. This crate does not interpret it in any way.
    #[error("The database driver emitted an error:\n{0}")]
    Driver(Box<dyn StdError + Send + Sync>),
    /// The configuration names an extractor which does not exist. Exclusively emitted by parsing
    /// [`crate::ExtractorKind`].
    #[error(
        "Unknown native handle extractor '{name}'. Known extractors are 'delegating', \
        'delegate-walk' and 'pass-through'."
    )]
    UnknownExtractor {
        /// The name as it has been found in the configuration.
        name: String,
    },
}

impl Error {
    /// Wraps any error emitted by a database driver.
    pub fn driver(error: impl Into<Box<dyn StdError + Send + Sync>>) -> Self {
        Error::Driver(error.into())
    }
}

//! Error types for the access crate.
//!
//! Errors are designed for layered context using rootcause:
//! - `StorageError`: failures in the persistent session storage backend
//!
//! The session store downgrades every storage failure to "no session";
//! these types exist so backends can say precisely what went wrong in
//! logs, not so failures reach the UI.

use std::fmt;

/// Errors from the session storage backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    /// The storage backend is unavailable (e.g. disabled by the browser).
    Unavailable { reason: String },
    /// Reading a key failed.
    ReadFailed { key: String, reason: String },
    /// Writing a key failed (e.g. quota exceeded).
    WriteFailed { key: String, reason: String },
    /// Removing a key failed.
    RemoveFailed { key: String, reason: String },
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unavailable { reason } => {
                write!(f, "session storage unavailable: {reason}")
            }
            Self::ReadFailed { key, reason } => {
                write!(f, "failed to read '{key}' from session storage: {reason}")
            }
            Self::WriteFailed { key, reason } => {
                write!(f, "failed to write '{key}' to session storage: {reason}")
            }
            Self::RemoveFailed { key, reason } => {
                write!(f, "failed to remove '{key}' from session storage: {reason}")
            }
        }
    }
}

impl std::error::Error for StorageError {}

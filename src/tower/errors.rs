//! Error kinds for tower operations
//!
//! This module defines [`TowerError`], covering the only two ways a mutating
//! tower operation can fail. Neither is fatal and neither propagates: the
//! controller formats the error into a user-facing report (shown only while
//! the tower is visible), flips its success flag, and returns normally with
//! the stack untouched. Callers recover by inspecting the flag.

use std::fmt;

/// Failure of a mutating tower operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TowerError {
    /// An element with this identity is already in the stack
    DuplicateIdentity { id: u32 },

    /// No cup with this identity is available at the requested spot
    NotFound { id: u32 },
}

impl fmt::Display for TowerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TowerError::DuplicateIdentity { id } => {
                write!(f, "Cup {} already exists in the tower", id)
            }
            TowerError::NotFound { id } => {
                write!(f, "Cup {} does not exist in the tower", id)
            }
        }
    }
}

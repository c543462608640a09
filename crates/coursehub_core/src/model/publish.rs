//! Course publication state.
//!
//! # Invariants
//! - `Draft -> Published` is the only transition. There is no way back to
//!   `Draft`.
//! - A `Published` course locks itself, its modules and their lessons.

use serde::Serializer;

/// Publication state of one course.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PublishState {
    /// Editable. Children may be added, changed and removed.
    #[default]
    Draft,
    /// Frozen. Every mutation on the course subtree is rejected.
    Published,
}

impl PublishState {
    /// Maps the persisted `is_published` flag.
    pub fn from_flag(is_published: bool) -> Self {
        if is_published {
            Self::Published
        } else {
            Self::Draft
        }
    }

    /// Returns the persisted `is_published` flag.
    pub fn as_flag(self) -> bool {
        matches!(self, Self::Published)
    }

    /// Applies the publish action. Publishing twice is a no-op.
    pub fn publish(self) -> Self {
        Self::Published
    }

    /// Whether mutations on the course subtree must be rejected.
    pub fn is_locked(self) -> bool {
        self.as_flag()
    }

    /// Serializes as the boolean `is_published` flag.
    pub fn serialize_flag<S: Serializer>(state: &Self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_bool(state.as_flag())
    }
}

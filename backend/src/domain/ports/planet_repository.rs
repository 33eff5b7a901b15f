//! Driven port for planet storage.
//!
//! The repository owns the ordered planet sequence and assigns identifiers.
//! Absence is reported as `Ok(None)` so callers decide how to surface it;
//! `Err` is reserved for adapter faults.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{Planet, PlanetDraft, PlanetId};

/// Errors raised by planet repository adapters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlanetRepositoryError {
    /// The guard around the stored sequence is unusable.
    #[error("planet store lock poisoned: {message}")]
    Lock { message: String },
    /// No further identifiers can be assigned.
    #[error("planet identifier space exhausted after {last}")]
    IdExhausted { last: PlanetId },
}

impl PlanetRepositoryError {
    /// Helper for lock failures.
    pub fn lock(message: impl Into<String>) -> Self {
        Self::Lock {
            message: message.into(),
        }
    }
}

/// Port for planet storage and retrieval.
///
/// Listing order is insertion order. Replacement keeps a planet's position;
/// deletion preserves the relative order of the remaining planets.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PlanetRepository: Send + Sync {
    /// Return every planet in listing order.
    async fn list(&self) -> Result<Vec<Planet>, PlanetRepositoryError>;

    /// Return the first planet with the given identifier.
    async fn find_by_id(&self, id: PlanetId) -> Result<Option<Planet>, PlanetRepositoryError>;

    /// Append a planet under a freshly assigned identifier.
    async fn insert(&self, draft: PlanetDraft) -> Result<Planet, PlanetRepositoryError>;

    /// Overwrite every attribute of an existing planet, keeping its identifier.
    async fn replace(
        &self,
        id: PlanetId,
        draft: PlanetDraft,
    ) -> Result<Option<Planet>, PlanetRepositoryError>;

    /// Remove a planet, returning it when it existed.
    async fn delete(&self, id: PlanetId) -> Result<Option<Planet>, PlanetRepositoryError>;
}

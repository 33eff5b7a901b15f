//! In-memory planet repository.
//!
//! Planets live in a `Vec` behind an [`RwLock`]. Reads share the lock and
//! mutations take it exclusively, so no reader observes a half-applied
//! change. The next identifier is tracked under the same lock and never
//! moves backwards, so identifiers are not reused after deletions.

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;

use crate::domain::ports::{PlanetRepository, PlanetRepositoryError};
use crate::domain::{Planet, PlanetDraft, PlanetId};

#[derive(Debug)]
struct StoreState {
    planets: Vec<Planet>,
    /// `None` once `i64::MAX` has been handed out.
    next_id: Option<PlanetId>,
}

impl StoreState {
    fn position(&self, id: PlanetId) -> Option<usize> {
        self.planets.iter().position(|planet| planet.id() == id)
    }
}

/// Lock-guarded in-memory [`PlanetRepository`].
///
/// # Examples
/// ```
/// use planet_catalogue::domain::reference_catalogue;
/// use planet_catalogue::outbound::memory::InMemoryPlanetRepository;
///
/// let store = InMemoryPlanetRepository::with_planets(reference_catalogue());
/// assert_eq!(store.len(), 2);
/// ```
#[derive(Debug)]
pub struct InMemoryPlanetRepository {
    state: RwLock<StoreState>,
}

impl Default for InMemoryPlanetRepository {
    fn default() -> Self {
        Self::with_planets(Vec::new())
    }
}

impl InMemoryPlanetRepository {
    /// Create an empty store whose first identifier is `0`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding `planets` in the given order.
    ///
    /// The identifier counter starts one past the largest seeded identifier.
    /// Seeds with duplicate identifiers keep only the first occurrence.
    #[must_use]
    pub fn with_planets(planets: impl IntoIterator<Item = Planet>) -> Self {
        let mut unique: Vec<Planet> = Vec::new();
        for planet in planets {
            if unique.iter().all(|existing| existing.id() != planet.id()) {
                unique.push(planet);
            }
        }
        let next_id = match unique.iter().map(Planet::id).max() {
            Some(max) => max.successor(),
            None => Some(PlanetId::new(0)),
        };
        Self {
            state: RwLock::new(StoreState {
                planets: unique,
                next_id,
            }),
        }
    }

    /// Number of stored planets. A poisoned lock reads as empty.
    #[must_use]
    pub fn len(&self) -> usize {
        self.read().map(|state| state.planets.len()).unwrap_or(0)
    }

    /// Whether the store holds no planets.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, StoreState>, PlanetRepositoryError> {
        self.state.read().map_err(poisoned)
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, StoreState>, PlanetRepositoryError> {
        self.state.write().map_err(poisoned)
    }
}

fn poisoned<T>(err: PoisonError<T>) -> PlanetRepositoryError {
    PlanetRepositoryError::lock(err.to_string())
}

#[async_trait]
impl PlanetRepository for InMemoryPlanetRepository {
    async fn list(&self) -> Result<Vec<Planet>, PlanetRepositoryError> {
        Ok(self.read()?.planets.clone())
    }

    async fn find_by_id(&self, id: PlanetId) -> Result<Option<Planet>, PlanetRepositoryError> {
        Ok(self
            .read()?
            .planets
            .iter()
            .find(|planet| planet.id() == id)
            .cloned())
    }

    async fn insert(&self, draft: PlanetDraft) -> Result<Planet, PlanetRepositoryError> {
        let mut state = self.write()?;
        let id = state.next_id.ok_or(PlanetRepositoryError::IdExhausted {
            last: PlanetId::new(i64::MAX),
        })?;
        state.next_id = id.successor();
        let planet = Planet::new(id, draft);
        state.planets.push(planet.clone());
        Ok(planet)
    }

    async fn replace(
        &self,
        id: PlanetId,
        draft: PlanetDraft,
    ) -> Result<Option<Planet>, PlanetRepositoryError> {
        let mut state = self.write()?;
        let Some(planet) = state.planets.iter_mut().find(|planet| planet.id() == id) else {
            return Ok(None);
        };
        planet.replace_attributes(draft);
        Ok(Some(planet.clone()))
    }

    async fn delete(&self, id: PlanetId) -> Result<Option<Planet>, PlanetRepositoryError> {
        let mut state = self.write()?;
        Ok(state
            .position(id)
            .map(|index| state.planets.remove(index)))
    }
}

//! Planet records held by the catalogue.
//!
//! A [`Planet`] is always owned by the store that assigned its identifier.
//! Callers describe new or replacement records with a [`PlanetDraft`], which
//! has no identifier of its own.

use std::fmt;
use std::str::FromStr;

/// Store-assigned planet identifier.
///
/// # Examples
/// ```
/// use planet_catalogue::domain::PlanetId;
///
/// let id: PlanetId = "42".parse().expect("integer id");
/// assert_eq!(id.get(), 42);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PlanetId(i64);

impl PlanetId {
    /// Wrap a raw identifier.
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Raw integer value.
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }

    /// The identifier that follows this one, or `None` on overflow.
    #[must_use]
    pub fn successor(self) -> Option<Self> {
        self.0.checked_add(1).map(Self)
    }
}

impl fmt::Display for PlanetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PlanetId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self)
    }
}

impl From<i64> for PlanetId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

/// Physical and descriptive attributes of a planet without an identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanetDraft {
    pub name: String,
    pub description: String,
    /// Distance from Earth in arbitrary units.
    pub distance_from_earth: i64,
    pub radius: i64,
    pub mass: i64,
    /// Selects the surface gravity formula used by the fuel estimator.
    pub is_terrestrial: bool,
}

/// A catalogued planet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Planet {
    id: PlanetId,
    attributes: PlanetDraft,
}

impl Planet {
    /// Bind a draft to a store-assigned identifier.
    #[must_use]
    pub fn new(id: PlanetId, attributes: PlanetDraft) -> Self {
        Self { id, attributes }
    }

    #[must_use]
    pub fn id(&self) -> PlanetId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.attributes.name
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.attributes.description
    }

    #[must_use]
    pub fn distance_from_earth(&self) -> i64 {
        self.attributes.distance_from_earth
    }

    #[must_use]
    pub fn radius(&self) -> i64 {
        self.attributes.radius
    }

    #[must_use]
    pub fn mass(&self) -> i64 {
        self.attributes.mass
    }

    #[must_use]
    pub fn is_terrestrial(&self) -> bool {
        self.attributes.is_terrestrial
    }

    /// Replace every attribute while keeping the identifier.
    pub fn replace_attributes(&mut self, attributes: PlanetDraft) {
        self.attributes = attributes;
    }

    /// Borrow the attributes without the identifier.
    #[must_use]
    pub fn attributes(&self) -> &PlanetDraft {
        &self.attributes
    }
}

/// The catalogue the service starts with unless seeding is disabled.
#[must_use]
pub fn reference_catalogue() -> Vec<Planet> {
    vec![
        Planet::new(
            PlanetId::new(0),
            PlanetDraft {
                name: "Pluto".to_owned(),
                description: "Farthest Planet".to_owned(),
                distance_from_earth: 299_792_458,
                radius: 300,
                mass: 300_000,
                is_terrestrial: true,
            },
        ),
        Planet::new(
            PlanetId::new(1),
            PlanetDraft {
                name: "Jupiter".to_owned(),
                description: "Largest Planet".to_owned(),
                distance_from_earth: 29_299_792_458,
                radius: 300_000,
                mass: 300_000_000,
                is_terrestrial: true,
            },
        ),
    ]
}

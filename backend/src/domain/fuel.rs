//! Fuel cost estimation.
//!
//! Surface gravity `g` is `mass / radius²` for terrestrial planets and
//! `0.5 / radius²` otherwise; the non-terrestrial branch ignores mass. The
//! cost is `distance / (g² × crew)`, rounded half away from zero.
//!
//! Inputs that would divide by zero are rejected before any arithmetic runs.

use thiserror::Error;

use super::Planet;

/// Gravity numerator used for planets that are not terrestrial.
const NON_TERRESTRIAL_GRAVITY_NUMERATOR: f64 = 0.5;

/// Reasons an estimate cannot be produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FuelEstimateError {
    /// Crew capacity must be a positive integer.
    #[error("crew capacity must be greater than zero, got {crew_capacity}")]
    NonPositiveCrew { crew_capacity: i64 },
    /// A zero radius leaves surface gravity undefined.
    #[error("planet radius must be non-zero")]
    ZeroRadius,
    /// Zero surface gravity makes the cost formula divide by zero.
    #[error("surface gravity evaluates to zero")]
    ZeroGravity,
    /// The formula produced infinity or NaN.
    #[error("fuel cost is not a finite number")]
    NonFinite,
}

/// Estimate the fuel cost of reaching `planet` with `crew_capacity` people.
///
/// # Errors
/// Returns [`FuelEstimateError::NonPositiveCrew`] when `crew_capacity <= 0`
/// and the remaining variants when the formula has no finite value.
///
/// # Examples
/// ```
/// use planet_catalogue::domain::{estimate_fuel_cost, reference_catalogue};
///
/// let pluto = &reference_catalogue()[0];
/// assert_eq!(estimate_fuel_cost(pluto, 1), Ok(26_981_321.0));
/// ```
pub fn estimate_fuel_cost(planet: &Planet, crew_capacity: i64) -> Result<f64, FuelEstimateError> {
    if crew_capacity <= 0 {
        return Err(FuelEstimateError::NonPositiveCrew { crew_capacity });
    }
    if planet.radius() == 0 {
        return Err(FuelEstimateError::ZeroRadius);
    }

    #[expect(
        clippy::cast_precision_loss,
        reason = "the formula is defined over floating point inputs"
    )]
    let (mass, radius, distance, crew) = (
        planet.mass() as f64,
        planet.radius() as f64,
        planet.distance_from_earth() as f64,
        crew_capacity as f64,
    );

    let gravity = if planet.is_terrestrial() {
        mass / (radius * radius)
    } else {
        NON_TERRESTRIAL_GRAVITY_NUMERATOR / (radius * radius)
    };
    if gravity == 0.0 {
        return Err(FuelEstimateError::ZeroGravity);
    }

    let cost = distance / (gravity * gravity * crew);
    if !cost.is_finite() {
        return Err(FuelEstimateError::NonFinite);
    }
    Ok(cost.round())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{PlanetDraft, PlanetId};
    use rstest::{fixture, rstest};

    #[fixture]
    fn pluto() -> PlanetDraft {
        PlanetDraft {
            name: "Pluto".to_owned(),
            description: "Farthest Planet".to_owned(),
            distance_from_earth: 299_792_458,
            radius: 300,
            mass: 300_000,
            is_terrestrial: true,
        }
    }

    fn planet(draft: PlanetDraft) -> Planet {
        Planet::new(PlanetId::new(0), draft)
    }

    #[rstest]
    fn terrestrial_reference_value(pluto: PlanetDraft) {
        assert_eq!(estimate_fuel_cost(&planet(pluto), 1), Ok(26_981_321.0));
    }

    #[rstest]
    fn crew_divides_the_cost(pluto: PlanetDraft) {
        let single = estimate_fuel_cost(&planet(pluto.clone()), 1).expect("estimate");
        let double = estimate_fuel_cost(&planet(pluto), 2).expect("estimate");
        assert!((single / 2.0 - double).abs() <= 1.0);
    }

    #[rstest]
    fn non_terrestrial_ignores_mass(pluto: PlanetDraft) {
        let light = PlanetDraft {
            is_terrestrial: false,
            mass: 1,
            radius: 1,
            distance_from_earth: 100,
            ..pluto.clone()
        };
        let heavy = PlanetDraft {
            mass: 9_000_000,
            ..light.clone()
        };

        // g = 0.5, f = 100 / 0.25 = 400
        assert_eq!(estimate_fuel_cost(&planet(light), 1), Ok(400.0));
        assert_eq!(estimate_fuel_cost(&planet(heavy), 1), Ok(400.0));
    }

    #[rstest]
    fn rounds_half_away_from_zero(pluto: PlanetDraft) {
        // g = 1, f = 5 / 2 = 2.5
        let draft = PlanetDraft {
            mass: 1,
            radius: 1,
            distance_from_earth: 5,
            ..pluto
        };
        assert_eq!(estimate_fuel_cost(&planet(draft), 2), Ok(3.0));
    }

    #[rstest]
    #[case(0)]
    #[case(-3)]
    fn rejects_non_positive_crew(pluto: PlanetDraft, #[case] crew: i64) {
        assert_eq!(
            estimate_fuel_cost(&planet(pluto), crew),
            Err(FuelEstimateError::NonPositiveCrew {
                crew_capacity: crew
            })
        );
    }

    #[rstest]
    fn rejects_zero_radius(pluto: PlanetDraft) {
        let draft = PlanetDraft { radius: 0, ..pluto };
        assert_eq!(
            estimate_fuel_cost(&planet(draft), 1),
            Err(FuelEstimateError::ZeroRadius)
        );
    }

    #[rstest]
    fn rejects_massless_terrestrial_planet(pluto: PlanetDraft) {
        let draft = PlanetDraft { mass: 0, ..pluto };
        assert_eq!(
            estimate_fuel_cost(&planet(draft), 1),
            Err(FuelEstimateError::ZeroGravity)
        );
    }
}

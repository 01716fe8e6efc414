use crate::core::{Location, Roll};
use crate::utils::error::{LocationError, Result};
use rand::Rng;

/// Picks one roll uniformly at random from `location`.
///
/// The result always borrows from the location's own roll list.
pub fn select_roll<'a, R: Rng + ?Sized>(location: &'a Location, rng: &mut R) -> Result<&'a Roll> {
    if location.is_empty() {
        return Err(LocationError::EmptyLocation {
            name: location.name().to_string(),
        });
    }

    let index = rng.random_range(0..location.len());
    Ok(&location.rolls()[index])
}

impl Location {
    pub fn roll_dice<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<&Roll> {
        select_roll(self, rng)
    }
}

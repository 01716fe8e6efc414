use crate::core::selector::select_roll;
use crate::core::{Location, Roll};
use crate::utils::error::{LocationError, Result};
use rand::Rng;
use std::collections::BTreeMap;

/// Loaded locations keyed by name.
///
/// Owned by whoever drives the loading; a location inserted under an existing
/// name replaces the previous one.
#[derive(Debug, Clone, Default)]
pub struct Atlas {
    locations: BTreeMap<String, Location>,
}

impl Atlas {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the location previously stored under the same name, if any.
    pub fn insert(&mut self, location: Location) -> Option<Location> {
        self.locations.insert(location.name().to_string(), location)
    }

    pub fn get(&self, name: &str) -> Option<&Location> {
        self.locations.get(name)
    }

    /// Names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.locations.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    pub fn roll<R: Rng + ?Sized>(&self, name: &str, rng: &mut R) -> Result<&Roll> {
        let location = self
            .get(name)
            .ok_or_else(|| LocationError::UnknownLocation {
                name: name.to_string(),
            })?;
        select_roll(location, rng)
    }

    /// `(location, destination)` pairs whose destination names no loaded location.
    ///
    /// Destinations are uppercase, so a location is matched case-insensitively.
    pub fn unresolved_destinations(&self) -> Vec<(&str, &str)> {
        let known: Vec<String> = self.names().map(str::to_uppercase).collect();

        let mut unresolved = Vec::new();
        for location in self.locations.values() {
            for roll in location.rolls() {
                let destination = roll.destination();
                if !known.iter().any(|name| matches_destination(name, destination))
                    && !unresolved.contains(&(location.name(), destination))
                {
                    unresolved.push((location.name(), destination));
                }
            }
        }
        unresolved
    }
}

// A file named `castle.txt` satisfies the destination `CASTLE`.
fn matches_destination(upper_name: &str, destination: &str) -> bool {
    upper_name == destination
        || upper_name
            .rsplit_once('.')
            .map(|(stem, _)| stem == destination)
            .unwrap_or(false)
}

impl Extend<Location> for Atlas {
    fn extend<T: IntoIterator<Item = Location>>(&mut self, iter: T) {
        for location in iter {
            self.insert(location);
        }
    }
}

impl FromIterator<Location> for Atlas {
    fn from_iter<T: IntoIterator<Item = Location>>(iter: T) -> Self {
        let mut atlas = Atlas::new();
        atlas.extend(iter);
        atlas
    }
}

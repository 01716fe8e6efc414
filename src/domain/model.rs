use serde::{Deserialize, Serialize};

/// One possible outcome of rolling at a location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawRoll")]
pub struct Roll {
    message: String,
    destination: String,
}

impl Roll {
    /// The destination is stored uppercased.
    pub fn new(message: impl Into<String>, destination: impl AsRef<str>) -> Self {
        Self {
            message: message.into(),
            destination: destination.as_ref().to_uppercase(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn destination(&self) -> &str {
        &self.destination
    }
}

// Deserialized rolls go through `Roll::new` like parsed ones.
#[derive(Deserialize)]
struct RawRoll {
    message: String,
    destination: String,
}

impl From<RawRoll> for Roll {
    fn from(raw: RawRoll) -> Self {
        Roll::new(raw.message, raw.destination)
    }
}

/// A named bundle of rolls, loaded once and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Location {
    name: String,
    rolls: Vec<Roll>,
}

impl Location {
    pub fn new(name: impl Into<String>, rolls: Vec<Roll>) -> Self {
        Self {
            name: name.into(),
            rolls,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rolls(&self) -> &[Roll] {
        &self.rolls
    }

    pub fn len(&self) -> usize {
        self.rolls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rolls.is_empty()
    }
}

//! Canonical string encoding for storage layers and serde

use serde::de::{self, Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};

use crate::constraint::Constraint;
use crate::Version;

/// Encode a version as its canonical string
pub fn encode(version: &Version) -> String {
    version.to_string()
}

/// Decode a stored string; malformed values decode to `None`
pub fn decode(stored: &str) -> Option<Version> {
    let decoded = Version::try_parse(stored);
    if decoded.is_none() {
        log::debug!("Stored value \"{}\" is not a valid version", stored);
    }
    decoded
}

impl Serialize for Version {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Version {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Version::parse(&text).map_err(de::Error::custom)
    }
}

impl Serialize for Constraint {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.pretty_string())
    }
}

impl<'de> Deserialize<'de> for Constraint {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Constraint::parse(&text).map_err(de::Error::custom)
    }
}

//! Station and line identifiers.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::Coordinate;

macro_rules! impl_identifier {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new(s: impl Into<String>) -> Self {
                Self(s.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self::new(s)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }
    };
}

impl_identifier!(
    /// Unique identifier of a station record in the catalog.
    StationId
);

impl_identifier!(
    /// Line identifier as printed on the network map (e.g. "1", "14", "A").
    LineId
);

/// A stop on one line.
///
/// Names are not unique: the same interchange appears once per line it
/// serves, each with its own id. Matching names is how transfers are found.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Station {
    pub id: StationId,
    pub name: String,
    pub line: LineId,
    pub location: Coordinate,
}

impl Station {
    /// Creates a station record.
    pub fn new(
        id: impl Into<StationId>,
        name: impl Into<String>,
        line: impl Into<LineId>,
        location: Coordinate,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            line: line.into(),
            location,
        }
    }

    /// Distance to another station in kilometers.
    pub fn distance_km(&self, other: &Station) -> f64 {
        self.location.distance_km(&other.location)
    }
}

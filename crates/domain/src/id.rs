//! Typed identifiers for integration entries and the sensors they expose.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::sensor::SensorKey;

macro_rules! define_id {
    ($(#[doc = $doc:expr])* $name:ident) => {
        $(#[doc = $doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name(uuid::Uuid);

        impl Default for $name {
            fn default() -> Self {
                Self(uuid::Uuid::new_v4())
            }
        }

        impl $name {
            /// Generate a new random identifier.
            #[must_use]
            pub fn new() -> Self {
                Self::default()
            }

            /// Wrap an existing UUID.
            #[must_use]
            pub fn from_uuid(uuid: uuid::Uuid) -> Self {
                Self(uuid)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }

        impl FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                uuid::Uuid::parse_str(s).map(Self)
            }
        }
    };
}

define_id!(
    /// Unique identifier for a configured integration entry.
    ///
    /// Persisted by the host alongside the entry's [`Config`](crate::config::Config),
    /// so it is stable across restarts.
    EntryId
);

/// Identity of a single sensor: the owning entry plus the sensor key.
///
/// Displays as `"{entry}-{key}"`, which is the unique id handed to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SensorId {
    pub entry: EntryId,
    pub key: SensorKey,
}

impl SensorId {
    #[must_use]
    pub fn new(entry: EntryId, key: SensorKey) -> Self {
        Self { entry, key }
    }
}

impl fmt::Display for SensorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.entry, self.key)
    }
}

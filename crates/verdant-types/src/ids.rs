//! Type-safe document identifiers.
//!
//! Plant documents are keyed by 12-byte object IDs, written on the wire as
//! 24 hex characters (`"65f1c2a9e4b0a1b2c3d4e5f6"`). Plants and their
//! owners get distinct newtypes so a plant ID can never be passed where an
//! owner ID is expected. The engine never mints IDs; they always come from
//! the store.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use ts_rs::TS;

/// Length of an object ID in bytes.
const OBJECT_ID_LEN: usize = 12;

/// Generates a newtype over a 12-byte object ID, (de)serialized as hex.
macro_rules! define_id {
    (
        $(#[$meta:meta])*
        $name:ident
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, TS)]
        #[ts(export, export_to = "bindings/")]
        pub struct $name(#[ts(type = "string")] [u8; OBJECT_ID_LEN]);

        impl FromStr for $name {
            type Err = hex::FromHexError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let mut bytes = [0_u8; OBJECT_ID_LEN];
                hex::decode_to_slice(s, &mut bytes)?;
                Ok(Self(bytes))
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&hex::encode(self.0))
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.collect_str(self)
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let raw = String::deserialize(deserializer)?;
                raw.parse().map_err(serde::de::Error::custom)
            }
        }
    };
}

define_id! {
    /// Identifier of a plant document (`_id`).
    PlantId
}

define_id! {
    /// Identifier of the user who owns a plant (`user`).
    OwnerId
}

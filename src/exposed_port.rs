use serde::de::{IgnoredAny, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Value stored under every key of an "ExposedPorts" mapping.
///
/// The engine declares the mapping as `map[nat.Port]struct{}`, so each
/// value arrives as a bare `{}` on the wire. The slot is reserved for
/// future use and carries nothing; the key set is the whole payload.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct ExposedPort;

impl fmt::Display for ExposedPort {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("{}")
    }
}

impl Serialize for ExposedPort {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_map(None)?.end()
    }
}

struct ExposedPortVisitor;

impl<'de> Visitor<'de> for ExposedPortVisitor {
    type Value = ExposedPort;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("an exposed port object")
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        // Newer engines may start populating the reserved slot; drain
        // whatever shows up and keep only the presence of the key.
        while map.next_entry::<IgnoredAny, IgnoredAny>()?.is_some() {}
        Ok(ExposedPort)
    }
}

impl<'de> Deserialize<'de> for ExposedPort {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(ExposedPortVisitor)
    }
}

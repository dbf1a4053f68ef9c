use crate::{ExposedPort, PortSpec, PortSpecError};
#[cfg(feature = "indexmap")]
use indexmap::IndexMap;
use serde_derive::{Deserialize, Serialize};
#[cfg(not(feature = "indexmap"))]
use std::collections::HashMap;

/// The "ExposedPorts" mapping of a container config: every exposed port
/// spec keyed to the empty-object marker. With the default `indexmap`
/// feature the map keeps insertion order through a round trip.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct ExposedPorts(
    #[cfg(feature = "indexmap")] IndexMap<PortSpec, ExposedPort>,
    #[cfg(not(feature = "indexmap"))] HashMap<PortSpec, ExposedPort>,
);

impl ExposedPorts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn expose(&mut self, spec: PortSpec) {
        if self.0.insert(spec, ExposedPort).is_some() {
            tracing::debug!("port {} was already exposed", spec);
        }
    }

    pub fn contains(&self, spec: &PortSpec) -> bool {
        self.0.contains_key(spec)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn specs(&self) -> impl Iterator<Item = &PortSpec> {
        self.0.keys()
    }

    #[tracing::instrument(name = "Parse exposed ports.", skip(specs))]
    pub fn from_specs<I, S>(specs: I) -> Result<Self, PortSpecError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut ports = Self::new();
        for spec in specs {
            ports.expose(spec.as_ref().parse()?);
        }
        Ok(ports)
    }
}

impl FromIterator<PortSpec> for ExposedPorts {
    fn from_iter<I: IntoIterator<Item = PortSpec>>(iter: I) -> Self {
        let mut ports = Self::new();
        for spec in iter {
            ports.expose(spec);
        }
        ports
    }
}

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PortSpecError {
    #[error("empty port spec")]
    Empty,
    #[error("invalid port number: {0}")]
    InvalidPort(String),
    #[error("unknown protocol: {0}")]
    UnknownProtocol(String),
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub enum Protocol {
    Tcp,
    Udp,
    Sctp,
}

impl Default for Protocol {
    fn default() -> Self {
        Self::Tcp
    }
}

impl Protocol {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Tcp => "tcp",
            Self::Udp => "udp",
            Self::Sctp => "sctp",
        }
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Protocol {
    type Err = PortSpecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "tcp" => Ok(Self::Tcp),
            "udp" => Ok(Self::Udp),
            "sctp" => Ok(Self::Sctp),
            _ => Err(PortSpecError::UnknownProtocol(s.to_string())),
        }
    }
}

/// Port/protocol pair in the engine's `"<port>/<protocol>"` spec form,
/// e.g. `"22/tcp"`. Serializes as that string, so it works directly as
/// a JSON map key.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct PortSpec {
    pub port: u16,
    pub protocol: Protocol,
}

impl PortSpec {
    pub fn new(port: u16, protocol: Protocol) -> Self {
        Self { port, protocol }
    }

    pub fn tcp(port: u16) -> Self {
        Self::new(port, Protocol::Tcp)
    }

    pub fn udp(port: u16) -> Self {
        Self::new(port, Protocol::Udp)
    }
}

impl fmt::Display for PortSpec {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}/{}", self.port, self.protocol)
    }
}

impl FromStr for PortSpec {
    type Err = PortSpecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(PortSpecError::Empty);
        }
        // a spec without a protocol means tcp
        let (port, protocol) = match s.split_once('/') {
            Some((port, proto)) => (port, proto.parse::<Protocol>()?),
            None => (s, Protocol::Tcp),
        };
        let port = port
            .parse::<u16>()
            .map_err(|_| PortSpecError::InvalidPort(port.to_string()))?;

        Ok(Self { port, protocol })
    }
}

impl Serialize for PortSpec {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for PortSpec {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_spec() {
        let spec = "22/tcp".parse::<PortSpec>().unwrap();
        assert_eq!(spec, PortSpec::tcp(22));

        let spec = "53/udp".parse::<PortSpec>().unwrap();
        assert_eq!(spec, PortSpec::udp(53));

        let spec = "9000/sctp".parse::<PortSpec>().unwrap();
        assert_eq!(spec, PortSpec::new(9000, Protocol::Sctp));
    }

    #[test]
    fn test_parse_defaults_to_tcp() {
        let spec = "8080".parse::<PortSpec>().unwrap();
        assert_eq!(spec, PortSpec::tcp(8080));
    }

    #[test]
    fn test_parse_normalizes_protocol_case() {
        let spec = "22/TCP".parse::<PortSpec>().unwrap();
        assert_eq!(spec.to_string(), "22/tcp");
    }

    #[test]
    fn test_parse_rejects_bad_port() {
        assert_eq!(
            "http/tcp".parse::<PortSpec>(),
            Err(PortSpecError::InvalidPort("http".to_string()))
        );
        assert_eq!(
            "70000/tcp".parse::<PortSpec>(),
            Err(PortSpecError::InvalidPort("70000".to_string()))
        );
    }

    #[test]
    fn test_parse_rejects_unknown_protocol() {
        assert_eq!(
            "22/icmp".parse::<PortSpec>(),
            Err(PortSpecError::UnknownProtocol("icmp".to_string()))
        );
    }

    #[test]
    fn test_parse_rejects_empty() {
        assert_eq!("".parse::<PortSpec>(), Err(PortSpecError::Empty));
    }

    #[test]
    fn test_display_round_trip() {
        let spec = PortSpec::udp(514);
        assert_eq!(spec.to_string().parse::<PortSpec>().unwrap(), spec);
    }
}

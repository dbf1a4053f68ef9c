//! Wire model for the "ExposedPorts" member of a container-engine remote
//! API response: `"<port>/<protocol>"` keys mapped to empty-object
//! markers. The key set carries all the information.

mod exposed_port;
mod exposed_ports;
mod port_spec;

pub use exposed_port::*;
pub use exposed_ports::*;
pub use port_spec::*;

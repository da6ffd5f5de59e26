// confsmith-api: Async client and wire types for the config generator service

pub mod client;
pub mod error;
pub mod request;
pub mod transport;

pub use client::{FAILURE_MARKER, GeneratorClient};
pub use error::Error;
pub use request::{ConfigRequest, DirectoryNumber};
pub use transport::{TlsMode, TransportConfig};

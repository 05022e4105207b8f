pub mod http_transport;
pub mod transport;

pub use http_transport::HttpTransport;
pub use transport::{FilePart, RawResponse, Transport, TransportError};

pub mod config;
pub mod envelope;
pub mod error;
pub mod http;

pub use config::UpstreamConfig;
pub use error::ClientError;
pub use http::HttpClient;

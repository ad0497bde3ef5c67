pub mod client;
pub mod config;
pub mod errors;
pub mod models;
pub mod transport;

pub use client::ReportsClient;
pub use config::ClientConfig;
pub use errors::ReportsError;
pub use transport::{ApiRequest, HttpMethod, HttpTransport, Transport};

//! HTTP host for the Music 4 You page.

pub mod config;
pub mod error;
pub mod routes;

pub use config::{AllowedOrigins, Cli, ServerConfig};
pub use error::{Result, ServerError};
pub use routes::router;

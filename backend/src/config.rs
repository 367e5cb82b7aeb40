//! Server configuration from command-line flags or environment variables.

use clap::Parser;
use std::net::{IpAddr, SocketAddr};

#[derive(Debug, Clone, Parser)]
#[command(name = "ledger-backend", version, about = "Personal finance ledger REST API")]
pub struct Config {
    /// Address to bind
    #[arg(long, env = "HOST", default_value = "127.0.0.1")]
    pub host: IpAddr,

    /// Port to listen on
    #[arg(long, env = "PORT", default_value_t = 4000)]
    pub port: u16,

    /// SQLite database URL
    #[arg(long, env = "DATABASE_URL", default_value = "sqlite:ledger.db")]
    pub database_url: String,

    /// Origin allowed by CORS; any origin when unset
    #[arg(long, env = "CORS_ORIGIN")]
    pub cors_origin: Option<String>,
}

impl Config {
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

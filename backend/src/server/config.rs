//! HTTP server configuration object and helpers.

use std::net::SocketAddr;

use planet_catalogue::settings::ServerSettings;

/// Builder-style configuration for creating the HTTP server.
#[derive(Debug, Clone, Copy)]
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) seed_catalogue: bool,
}

impl ServerConfig {
    /// Construct a configuration binding `bind_addr` over an empty catalogue.
    #[must_use]
    pub fn new(bind_addr: SocketAddr) -> Self {
        Self {
            bind_addr,
            seed_catalogue: false,
        }
    }

    /// Start the store with the reference planets when `seed` is true.
    #[must_use]
    pub fn with_seed_catalogue(mut self, seed: bool) -> Self {
        self.seed_catalogue = seed;
        self
    }

    /// Return the socket address the server will bind to.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}

impl From<&ServerSettings> for ServerConfig {
    fn from(settings: &ServerSettings) -> Self {
        Self::new(settings.bind_addr()).with_seed_catalogue(settings.seed_catalogue())
    }
}

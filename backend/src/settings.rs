//! Server settings loaded via OrthoConfig.
//!
//! Values merge from defaults, configuration files, `PLANETS_*` environment
//! variables, and command-line flags, in increasing order of precedence.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_SEED_CATALOGUE: bool = true;

/// Settings controlling the HTTP listener and the initial catalogue.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "PLANETS")]
pub struct ServerSettings {
    /// Interface address to bind.
    pub host: Option<IpAddr>,
    /// TCP port to bind.
    pub port: Option<u16>,
    /// Start with the reference planets instead of an empty store.
    pub seed_catalogue: Option<bool>,
}

impl ServerSettings {
    /// Socket address to bind, falling back to `0.0.0.0:8080`.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(
            self.host.unwrap_or(DEFAULT_HOST),
            self.port.unwrap_or(DEFAULT_PORT),
        )
    }

    /// Whether to seed the reference planets, defaulting to `true`.
    #[must_use]
    pub fn seed_catalogue(&self) -> bool {
        self.seed_catalogue.unwrap_or(DEFAULT_SEED_CATALOGUE)
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for server settings parsing.

    use super::*;
    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    fn load_from_empty_args() -> ServerSettings {
        ServerSettings::load_from_iter([OsString::from("planet-catalogue")])
            .expect("config should load")
    }

    #[rstest]
    fn default_values_are_used_when_missing() {
        let _guard = lock_env([
            ("PLANETS_HOST", None::<String>),
            ("PLANETS_PORT", None::<String>),
            ("PLANETS_SEED_CATALOGUE", None::<String>),
        ]);

        let settings = load_from_empty_args();
        assert!(settings.seed_catalogue());
        assert_eq!(settings.bind_addr(), "0.0.0.0:8080".parse().expect("addr"));
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env([
            ("PLANETS_HOST", Some("127.0.0.1".to_owned())),
            ("PLANETS_PORT", Some("9090".to_owned())),
            ("PLANETS_SEED_CATALOGUE", Some("false".to_owned())),
        ]);

        let settings = load_from_empty_args();
        assert!(!settings.seed_catalogue());
        assert_eq!(settings.bind_addr(), "127.0.0.1:9090".parse().expect("addr"));
    }
}

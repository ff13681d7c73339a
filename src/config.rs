use std::env;

/// Environment variable that overrides the listen address.
pub const ADDR_ENV: &str = "SROUTE_ADDR";

pub const DEFAULT_ADDR: &str = "127.0.0.1:8080";

/// Server settings for an `Application`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Address the listener binds to, e.g. `127.0.0.1:8080`.
    pub addr: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            addr: DEFAULT_ADDR.to_string(),
        }
    }
}

impl Config {
    /// Defaults, with the address taken from `SROUTE_ADDR` when it is set and
    /// not blank.
    pub fn from_env() -> Config {
        Config::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Config
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();
        if let Some(addr) = lookup(ADDR_ENV) {
            let addr = addr.trim();
            if !addr.is_empty() {
                config.addr = addr.to_string();
            }
        }
        config
    }

    pub fn with_addr(mut self, addr: &str) -> Config {
        self.addr = addr.to_string();
        self
    }
}

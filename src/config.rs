use std::env;
use std::path::PathBuf;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_STATIC_DIR: &str = "static";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub static_dir: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
        }
    }
}

impl ServerConfig {
    /// Reads `HOST`, `PORT` and `STATIC_DIR`. `STATIC_DIR` is mounted at
    /// `/static` and should contain the `index.html` that `/` redirects to;
    /// the repo ships a placeholder in `static/`. Missing or unparsable values
    /// fall back to the defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            host: lookup("HOST")
                .filter(|v| !v.trim().is_empty())
                .unwrap_or(defaults.host),
            port: lookup("PORT")
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(defaults.port),
            static_dir: lookup("STATIC_DIR")
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from)
                .unwrap_or(defaults.static_dir),
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Address tried when the configured port is taken.
    pub fn fallback_bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port.saturating_add(1))
    }
}

//! Server configuration.

use std::path::PathBuf;
use std::time::Duration;

use plantgo_scanner::DEFAULT_INFERENCE_DELAY;

/// Configuration for the PlantGo server.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Host to bind (default `"0.0.0.0"`).
    pub host: String,
    /// Port to bind (default `8080`; `0` auto-assigns, used by tests).
    pub port: u16,
    /// Directory served for requests that match no API route.
    pub static_dir: PathBuf,
    /// Simulated classifier latency.
    pub inference_delay: Duration,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".into(),
            port: 8080,
            static_dir: PathBuf::from("./static"),
            inference_delay: DEFAULT_INFERENCE_DELAY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_bind() {
        let cfg = ServerConfig::default();
        assert_eq!(cfg.host, "0.0.0.0");
        assert_eq!(cfg.port, 8080);
    }

    #[test]
    fn default_static_dir() {
        let cfg = ServerConfig::default();
        assert_eq!(cfg.static_dir, PathBuf::from("./static"));
    }

    #[test]
    fn default_inference_delay() {
        let cfg = ServerConfig::default();
        assert_eq!(cfg.inference_delay, Duration::from_millis(100));
    }
}

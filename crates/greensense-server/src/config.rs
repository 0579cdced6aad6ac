use std::fmt::Write as _;

/// Service configuration, assembled from environment variables by the binary.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind: String,
    pub port: u16,
    pub log_json: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: "0.0.0.0".to_string(),
            port: 3000,
            log_json: false,
        }
    }
}

impl ServerConfig {
    #[must_use]
    pub fn listen_addr(&self) -> String {
        let mut addr = String::with_capacity(self.bind.len() + 6);
        let _ = write!(&mut addr, "{}:{}", self.bind, self.port);
        addr
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.bind.trim().is_empty() {
            return Err("bind address must not be empty".to_string());
        }
        if self.port == 0 {
            return Err("port must be > 0".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_listen_addr_matches_documented_port() {
        let config = ServerConfig::default();
        assert_eq!(config.listen_addr(), "0.0.0.0:3000");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn validation_rejects_blank_bind_and_zero_port() {
        let config = ServerConfig {
            bind: " ".to_string(),
            ..ServerConfig::default()
        };
        assert!(config.validate().is_err());

        let config = ServerConfig {
            port: 0,
            ..ServerConfig::default()
        };
        assert!(config.validate().is_err());
    }
}

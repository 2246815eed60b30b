/// Server binding configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind to (e.g., "127.0.0.1", "0.0.0.0")
    pub address: String,

    /// Port to listen on (e.g., 8000)
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            address: "127.0.0.1".to_string(),
            port: 8000,
        }
    }
}

impl ServerConfig {
    /// Create a new server configuration
    pub fn new(address: &str, port: u16) -> Self {
        ServerConfig {
            address: address.to_string(),
            port,
        }
    }

    /// Get the full address string (e.g., "127.0.0.1:8000")
    pub fn address_string(&self) -> String {
        format!("{}:{}", self.address, self.port)
    }

    /// Get the full URL (e.g., "http://localhost:8000/")
    pub fn url(&self) -> String {
        let address = if self.address == "127.0.0.1" {
            "localhost"
        } else {
            &self.address
        };
        format!("http://{}:{}/", address, self.port)
    }
}

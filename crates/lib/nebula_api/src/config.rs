//! API server configuration.

/// Configuration for the API server.
#[derive(Clone, Debug)]
pub struct ApiConfig {
    /// Address to bind the HTTP listener (e.g. "127.0.0.1:5000").
    pub bind_addr: String,
}

/// Picks the bind host for the current environment.
///
/// Hosted environments (Codespaces) need an all-interfaces bind so the port
/// forwarder can reach the server; local runs stay on loopback.
pub fn bind_host() -> &'static str {
    if std::env::var_os("CODESPACES").is_some() {
        "0.0.0.0"
    } else {
        "127.0.0.1"
    }
}

/// Client configuration loaded from environment variables.
///
/// Defaults suit local development against a backend on port 5000.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the catalog REST API, without a trailing slash.
    pub base_url: String,
}

impl ClientConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var           | Default                     |
    /// |-------------------|-----------------------------|
    /// | `CINELOG_API_URL` | `http://localhost:5000/api` |
    pub fn from_env() -> Self {
        let base_url = std::env::var("CINELOG_API_URL")
            .unwrap_or_else(|_| "http://localhost:5000/api".into());
        // Resource paths start with '/', so a trailing slash would double up.
        let base_url = base_url.trim_end_matches('/').to_string();
        Self { base_url }
    }
}

/// Origin value that allows any origin.
pub const ANY_ORIGIN: &str = "*";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: vec![ANY_ORIGIN.to_string()],
        }
    }
}

impl CorsConfig {
    /// Parses a comma-separated origin list, falling back to `*` when the
    /// list is empty.
    pub fn from_list(raw: &str) -> Self {
        let allowed_origins: Vec<String> = raw
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        if allowed_origins.is_empty() {
            return Self::default();
        }

        Self { allowed_origins }
    }

    /// Whether every origin is allowed.
    pub fn allows_any(&self) -> bool {
        self.allowed_origins.iter().any(|origin| origin == ANY_ORIGIN)
    }
}

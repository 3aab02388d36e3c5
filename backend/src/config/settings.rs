#[derive(Debug, Clone)]
pub struct ServerSettings {
    pub database_path: String,
    /// Single origin allowed by CORS; `None` means permissive.
    pub allowed_origin: Option<String>,
    pub seed_on_startup: bool,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            database_path: "roulette.db".to_string(),
            allowed_origin: None,
            seed_on_startup: true,
        }
    }
}

#[derive(Debug, Clone)]
pub struct HistorySettings {
    pub default_limit: usize,
    pub max_limit: usize,
}

impl Default for HistorySettings {
    fn default() -> Self {
        Self {
            default_limit: 50,
            max_limit: 500,
        }
    }
}

impl HistorySettings {
    pub fn clamp_limit(&self, requested: Option<usize>) -> usize {
        requested
            .unwrap_or(self.default_limit)
            .clamp(1, self.max_limit)
    }
}

#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub server: ServerSettings,
    pub history: HistorySettings,
}

impl AppConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults overridden by `DATABASE_PATH`, `CORS_ORIGIN` and `SEED_ON_STARTUP`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::new();

        if let Some(path) = lookup("DATABASE_PATH").filter(|p| !p.trim().is_empty()) {
            config.server.database_path = path;
        }
        config.server.allowed_origin = lookup("CORS_ORIGIN").filter(|o| !o.trim().is_empty());
        if let Some(flag) = lookup("SEED_ON_STARTUP") {
            match parse_flag(&flag) {
                Some(enabled) => config.server.seed_on_startup = enabled,
                None => log::warn!("Ignoring unrecognised SEED_ON_STARTUP value {:?}", flag),
            }
        }

        config
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

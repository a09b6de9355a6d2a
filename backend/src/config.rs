use ::config::{Config, ConfigBuilder, ConfigError, Environment, File, builder::DefaultState};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub run_migrations: bool,
    pub server_addr: String,
    pub static_dir: String,
    pub max_connections: u32,
}

impl AppConfig {
    /// Reads `config.toml` if present, then lets environment variables
    /// (`DATABASE_URL`, `SERVER_ADDR`, ...) override it.
    pub fn load() -> Result<Self, ConfigError> {
        let s = Self::defaults()?
            .add_source(File::with_name("config").required(false))
            .add_source(Environment::default())
            .build()?;

        s.try_deserialize()
    }

    fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Config::builder()
            .set_default("run_migrations", false)?
            .set_default("server_addr", "0.0.0.0:5000")?
            .set_default("static_dir", "public")?
            .set_default("max_connections", 10)
    }
}

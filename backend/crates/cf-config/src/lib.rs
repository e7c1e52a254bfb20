mod auth_config;
mod config;
mod database_config;
mod error;
mod log_level;
mod logging_config;
mod model_config;
mod server_config;

#[cfg(test)]
mod tests;

pub use auth_config::AuthConfig;
pub use config::Config;
pub use database_config::DatabaseConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use model_config::ModelConfig;
pub use server_config::ServerConfig;

const CONFIG_DIR_ENV: &str = "CF_CONFIG_DIR";
const DEFAULT_CONFIG_DIR_NAME: &str = ".carbon";
const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8000;
const MIN_PORT: u16 = 1024;

const DEFAULT_DATABASE_FILENAME: &str = "carbon.db";

const DEFAULT_TOKEN_EXPIRY_MINUTES: u32 = 30;
const MIN_TOKEN_EXPIRY_MINUTES: u32 = 1;
const MAX_TOKEN_EXPIRY_MINUTES: u32 = 1440;
const MIN_JWT_SECRET_LENGTH: usize = 32;

const DEFAULT_MODEL_FILENAME: &str = "carbon_model.json";
const DEFAULT_ENCODER_FILENAME: &str = "encoder.json";

const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";

//! Configuration loading

mod app_config;

pub use app_config::{
    AdminSeedConfig, AppConfig, ConfigError, DatabaseConfig, JwtConfig, ServerConfig,
};

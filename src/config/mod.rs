pub mod app_config;
pub mod logging;
#[cfg(test)]
pub mod test_config;

pub use app_config::{AppConfig, ServerConfig};
pub use logging::log_filter_from_env;
#[cfg(test)]
pub use test_config::create_test_config;

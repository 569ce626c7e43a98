use crate::adapters::protocol::constants::{
    DEFAULT_MAX_FRAME_SIZE, DEFAULT_READ_TIMEOUT, DEFAULT_WRITE_TIMEOUT,
};
use crate::adapters::protocol::KafkaProtocolParser;
use crate::application::broker::KafkaBroker;
use crate::application::{ApplicationError, Result};
use crate::ports::incoming::message_handler::MessageHandler;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

pub const LISTEN_ADDR_ENV: &str = "KAFKA_LISTEN_ADDR";
pub const READ_TIMEOUT_ENV: &str = "KAFKA_READ_TIMEOUT_MS";
pub const WRITE_TIMEOUT_ENV: &str = "KAFKA_WRITE_TIMEOUT_MS";
pub const MAX_FRAME_SIZE_ENV: &str = "KAFKA_MAX_FRAME_SIZE";

#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub listen_addr: String,
    pub read_timeout: Duration,  // 읽기 작업마다 적용
    pub write_timeout: Duration, // 쓰기 작업마다 적용
    pub max_frame_size: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:9092".to_string(),
            read_timeout: DEFAULT_READ_TIMEOUT,
            write_timeout: DEFAULT_WRITE_TIMEOUT,
            max_frame_size: DEFAULT_MAX_FRAME_SIZE,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from `lookup`, falling back to defaults for unset keys.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let listen_addr = lookup(LISTEN_ADDR_ENV).unwrap_or(defaults.listen_addr);
        let read_timeout = match lookup(READ_TIMEOUT_ENV) {
            Some(raw) => Duration::from_millis(parse_positive(READ_TIMEOUT_ENV, &raw)?),
            None => defaults.read_timeout,
        };
        let write_timeout = match lookup(WRITE_TIMEOUT_ENV) {
            Some(raw) => Duration::from_millis(parse_positive(WRITE_TIMEOUT_ENV, &raw)?),
            None => defaults.write_timeout,
        };
        let max_frame_size = match lookup(MAX_FRAME_SIZE_ENV) {
            Some(raw) => parse_positive(MAX_FRAME_SIZE_ENV, &raw)?,
            None => defaults.max_frame_size,
        };

        Ok(Self {
            listen_addr,
            read_timeout,
            write_timeout,
            max_frame_size,
        })
    }
}

fn parse_positive<T>(key: &str, raw: &str) -> Result<T>
where
    T: FromStr + PartialEq + Default,
{
    match raw.trim().parse::<T>() {
        Ok(value) if value != T::default() => Ok(value),
        _ => Err(ApplicationError::Config(format!(
            "{key} must be a positive integer, got {raw:?}"
        ))),
    }
}

pub struct AppConfig {
    pub server: ServerConfig,
    pub broker: Arc<dyn MessageHandler>,
    pub protocol_parser: KafkaProtocolParser,
}

impl AppConfig {
    pub fn new(server: ServerConfig) -> Self {
        Self {
            server,
            broker: Arc::new(KafkaBroker::default()),
            protocol_parser: KafkaProtocolParser::new(),
        }
    }

    pub fn from_env() -> Result<Self> {
        Ok(Self::new(ServerConfig::from_env()?))
    }
}

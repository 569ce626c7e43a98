pub mod constants;
pub mod dto;
pub mod error;
pub mod parser;

pub use parser::KafkaProtocolParser;

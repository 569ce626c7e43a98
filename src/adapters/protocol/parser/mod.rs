pub mod byte_cursor;
pub mod request_parser;
pub mod response_encoder;
pub mod tcp_parser;
pub mod traits;
pub mod varint;

pub use byte_cursor::ByteCursor;
pub use request_parser::RequestParser;
pub use response_encoder::ResponseEncoder;
pub use tcp_parser::KafkaProtocolParser;
pub use traits::*;

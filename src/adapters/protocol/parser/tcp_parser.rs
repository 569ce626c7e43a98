use crate::adapters::protocol::dto::{KafkaRequest, KafkaResponse};
use crate::adapters::protocol::error::DecodeError;
use bytes::Bytes;

use super::request_parser::RequestParser;
use super::response_encoder::ResponseEncoder;

#[derive(Debug, Default, Clone)]
pub struct KafkaProtocolParser {
    request_parser: RequestParser,
    response_encoder: ResponseEncoder,
}

impl KafkaProtocolParser {
    pub fn new() -> Self {
        Self {
            request_parser: RequestParser::new(),
            response_encoder: ResponseEncoder::new(),
        }
    }

    pub fn parse_request(&self, frame: Bytes) -> Result<KafkaRequest, DecodeError> {
        self.request_parser.parse(frame)
    }

    pub fn encode_response(&self, response: &KafkaResponse) -> Bytes {
        self.response_encoder.encode(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::protocol::constants::API_VERSIONS_KEY;
    use crate::adapters::protocol::dto::{ApiVersion, ApiVersionsResponse, ResponsePayload};

    #[test]
    fn test_request_to_response_through_facade() {
        let parser = KafkaProtocolParser::new();
        let frame = Bytes::from_static(&[
            0x00, 0x12, 0x00, 0x03, 0x7f, 0xff, 0xff, 0xff, 0xff, 0xff, 0x00,
        ]);

        let request = parser.parse_request(frame).unwrap();
        assert_eq!(request.header.api_key, API_VERSIONS_KEY);
        assert_eq!(request.header.correlation_id, i32::MAX);
        assert_eq!(request.header.client_id, None);

        let response = KafkaResponse::new(
            request.header.correlation_id,
            ResponsePayload::ApiVersions(ApiVersionsResponse::new(
                0,
                &[ApiVersion {
                    api_key: API_VERSIONS_KEY,
                    min_version: 0,
                    max_version: 4,
                }],
            )),
        );
        let encoded = parser.encode_response(&response);

        assert_eq!(&encoded[..4], &[0x7f, 0xff, 0xff, 0xff]);
        assert_eq!(encoded.len(), 19);
    }

    #[test]
    fn test_parse_error_is_reported_not_panicked() {
        let parser = KafkaProtocolParser::default();
        assert_eq!(
            parser.parse_request(Bytes::from_static(&[0x00, 0x12, 0x00, 0x04, 0x00])),
            Err(DecodeError::HeaderTooShort {
                field: "correlation_id"
            })
        );
    }
}

use crate::adapters::protocol::dto::{
    DescribeTopicPartitionsRequest, KafkaRequest, RequestHeader, TopicRequest,
};
use crate::adapters::protocol::error::DecodeError;
use bytes::{BufMut, Bytes, BytesMut};
use tracing::trace;

use super::byte_cursor::ByteCursor;
use super::traits::{Deserialize, PutCompact, Serialize};

#[derive(Debug, Default, Clone)]
pub struct RequestParser;

impl RequestParser {
    pub fn new() -> Self {
        Self
    }

    /// Parses the common request header; the rest of the frame is kept as the body.
    pub fn parse(&self, frame: Bytes) -> Result<KafkaRequest, DecodeError> {
        trace!(frame = %hex::encode(&frame), "decoding request");
        let mut cursor = ByteCursor::new(frame);

        let header = RequestHeader::deserialize(&mut cursor)?;
        trace!(
            api_key = header.api_key,
            api_version = header.api_version,
            correlation_id = header.correlation_id,
            client_id = ?header.client_id,
            body_len = cursor.remaining(),
            "decoded request header"
        );

        Ok(KafkaRequest::new(header, cursor.into_remaining()))
    }
}

/// 헤더 필드가 부족하면 HeaderTooShort로 변환
fn header_field<T>(field: &'static str, result: Result<T, DecodeError>) -> Result<T, DecodeError> {
    result.map_err(|e| match e {
        DecodeError::BufferUnderrun { .. } => DecodeError::HeaderTooShort { field },
        other => other,
    })
}

impl Deserialize for RequestHeader {
    fn deserialize(src: &mut ByteCursor) -> Result<Self, DecodeError> {
        let api_key = header_field("api_key", src.get_i16())?;
        let api_version = header_field("api_version", src.get_i16())?;
        let correlation_id = header_field("correlation_id", src.get_i32())?;
        let client_id = header_field("client_id", src.get_nullable_string("client_id"))?;
        header_field("tag_buffer", src.skip_tag_buffer())?;

        Ok(RequestHeader {
            api_key,
            api_version,
            correlation_id,
            client_id,
        })
    }
}

// Request header v2: client_id keeps the i16-length NULLABLE_STRING form.
impl Serialize for RequestHeader {
    fn serialize(&self, dst: &mut BytesMut) {
        dst.put_i16(self.api_key);
        dst.put_i16(self.api_version);
        dst.put_i32(self.correlation_id);
        dst.put_nullable_string(self.client_id.as_deref());
        dst.put_tag_buffer();
    }
}

impl Deserialize for DescribeTopicPartitionsRequest {
    fn deserialize(src: &mut ByteCursor) -> Result<Self, DecodeError> {
        let topics = src
            .get_compact_array(|src| {
                let topic_name = src.get_compact_string("topic_name")?.unwrap_or_default();
                src.skip_tag_buffer()?;
                Ok(TopicRequest { topic_name })
            })?
            .unwrap_or_default();

        if topics.is_empty() {
            return Err(DecodeError::NoTopicsRequested);
        }

        src.skip_tag_buffer()?;
        let response_partition_limit = src.get_i32()?;

        Ok(DescribeTopicPartitionsRequest {
            topics,
            response_partition_limit,
        })
    }
}

impl Serialize for DescribeTopicPartitionsRequest {
    fn serialize(&self, dst: &mut BytesMut) {
        dst.put_compact_array_len(self.topics.len());
        for topic in &self.topics {
            dst.put_compact_string(&topic.topic_name);
            dst.put_tag_buffer();
        }
        dst.put_tag_buffer();
        dst.put_i32(self.response_partition_limit);
    }
}

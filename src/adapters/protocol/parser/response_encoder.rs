use crate::adapters::protocol::constants::NULL_STRUCT;
use crate::adapters::protocol::dto::{
    ApiVersion, ApiVersionsResponse, DescribeTopicPartitionsResponse, KafkaResponse,
    PartitionInfo, ResponsePayload, TopicResponse,
};
use bytes::{BufMut, Bytes, BytesMut};
use tracing::trace;

use super::traits::{PutCompact, Serialize};

#[derive(Debug, Default, Clone)]
pub struct ResponseEncoder;

impl ResponseEncoder {
    pub fn new() -> Self {
        Self
    }

    /// Encodes the response header and body. The frame length prefix is left to
    /// the transport.
    pub fn encode(&self, response: &KafkaResponse) -> Bytes {
        let mut buf = BytesMut::new();

        // correlation_id
        buf.put_i32(response.correlation_id);

        match &response.payload {
            // ApiVersions는 헤더 v0 (TAG_BUFFER 없음)
            ResponsePayload::ApiVersions(api_versions) => api_versions.serialize(&mut buf),
            ResponsePayload::DescribeTopicPartitions(describe) => {
                buf.put_tag_buffer(); // response header v1
                describe.serialize(&mut buf);
            }
        }

        trace!(payload = %hex::encode(&buf), "encoded response");
        buf.freeze()
    }
}

impl Serialize for ApiVersion {
    fn serialize(&self, dst: &mut BytesMut) {
        dst.put_i16(self.api_key);
        dst.put_i16(self.min_version);
        dst.put_i16(self.max_version);
        dst.put_tag_buffer();
    }
}

impl Serialize for ApiVersionsResponse {
    fn serialize(&self, dst: &mut BytesMut) {
        dst.put_i16(self.error_code);

        dst.put_compact_array_len(self.api_versions.len());
        for version in &self.api_versions {
            version.serialize(dst);
        }

        dst.put_i32(self.throttle_time_ms);
        dst.put_tag_buffer();
    }
}

impl Serialize for PartitionInfo {
    fn serialize(&self, dst: &mut BytesMut) {
        dst.put_i16(self.error_code);
        dst.put_i32(self.partition_index);
        dst.put_i32(self.leader_id);
        dst.put_i32(self.leader_epoch);

        dst.put_compact_array_len(self.replica_nodes.len());
        for node in &self.replica_nodes {
            dst.put_i32(*node);
        }

        dst.put_compact_array_len(self.isr_nodes.len());
        for node in &self.isr_nodes {
            dst.put_i32(*node);
        }

        // eligible leader replicas, last known ELR, offline replicas
        dst.put_compact_array_len(0);
        dst.put_compact_array_len(0);
        dst.put_compact_array_len(0);

        dst.put_tag_buffer();
    }
}

impl Serialize for TopicResponse {
    fn serialize(&self, dst: &mut BytesMut) {
        dst.put_i16(self.error_code);
        dst.put_compact_string(&self.topic_name);
        dst.put_slice(self.topic_id.as_bytes());
        dst.put_u8(self.is_internal as u8);

        dst.put_compact_array_len(self.partitions.len());
        for partition in &self.partitions {
            partition.serialize(dst);
        }

        dst.put_i32(self.topic_authorized_operations);
        dst.put_tag_buffer();
    }
}

impl Serialize for DescribeTopicPartitionsResponse {
    fn serialize(&self, dst: &mut BytesMut) {
        dst.put_i32(self.throttle_time_ms);

        dst.put_compact_array_len(self.topics.len());
        for topic in &self.topics {
            topic.serialize(dst);
        }

        dst.put_u8(NULL_STRUCT); // next_cursor
        dst.put_tag_buffer();
    }
}

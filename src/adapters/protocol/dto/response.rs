use crate::adapters::protocol::constants::TOPIC_AUTHORIZED_OPERATIONS_UNKNOWN;
use crate::domain::TopicId;

use super::common::ErrorCode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApiVersion {
    pub api_key: i16,
    pub min_version: i16,
    pub max_version: i16,
}

impl ApiVersion {
    pub fn supports(&self, version: i16) -> bool {
        (self.min_version..=self.max_version).contains(&version)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApiVersionsResponse {
    pub error_code: i16,
    pub api_versions: Vec<ApiVersion>,
    pub throttle_time_ms: i32,
}

impl ApiVersionsResponse {
    pub fn new(error_code: i16, api_versions: &[ApiVersion]) -> Self {
        Self {
            error_code,
            api_versions: api_versions.to_vec(),
            throttle_time_ms: 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PartitionInfo {
    pub error_code: i16,
    pub partition_index: i32,
    pub leader_id: i32,
    pub leader_epoch: i32,
    pub replica_nodes: Vec<i32>,
    pub isr_nodes: Vec<i32>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TopicResponse {
    pub topic_name: String,
    pub topic_id: TopicId,
    pub error_code: i16,
    pub is_internal: bool,
    pub partitions: Vec<PartitionInfo>,
    pub topic_authorized_operations: i32,
}

impl TopicResponse {
    pub fn unknown(topic_name: String) -> Self {
        Self {
            topic_name,
            topic_id: TopicId::zero(), // 00000000-0000-0000-0000-000000000000
            error_code: ErrorCode::UnknownTopicOrPartition.into(),
            is_internal: false,
            partitions: vec![],
            topic_authorized_operations: TOPIC_AUTHORIZED_OPERATIONS_UNKNOWN,
        }
    }
}

/// next_cursor is always null: every result fits in one response.
#[derive(Debug, Clone, PartialEq)]
pub struct DescribeTopicPartitionsResponse {
    pub throttle_time_ms: i32,
    pub topics: Vec<TopicResponse>,
}

impl DescribeTopicPartitionsResponse {
    pub fn new(topics: Vec<TopicResponse>) -> Self {
        Self {
            throttle_time_ms: 0,
            topics,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ResponsePayload {
    ApiVersions(ApiVersionsResponse),
    DescribeTopicPartitions(DescribeTopicPartitionsResponse),
}

#[derive(Debug, Clone, PartialEq)]
pub struct KafkaResponse {
    pub correlation_id: i32,
    pub payload: ResponsePayload,
}

impl KafkaResponse {
    pub fn new(correlation_id: i32, payload: ResponsePayload) -> Self {
        Self {
            correlation_id,
            payload,
        }
    }
}

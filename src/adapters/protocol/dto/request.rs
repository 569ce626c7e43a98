use bytes::Bytes;

#[derive(Debug, Clone, PartialEq)]
pub struct RequestHeader {
    pub api_key: i16,
    pub api_version: i16,
    pub correlation_id: i32,
    pub client_id: Option<String>,
}

/// 헤더만 해석된 요청. body는 API별 핸들러가 파싱함
#[derive(Debug, Clone, PartialEq)]
pub struct KafkaRequest {
    pub header: RequestHeader,
    pub body: Bytes,
}

impl KafkaRequest {
    pub fn new(header: RequestHeader, body: Bytes) -> Self {
        Self { header, body }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TopicRequest {
    pub topic_name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DescribeTopicPartitionsRequest {
    pub topics: Vec<TopicRequest>,
    /// Decoded but not applied: no partitions are ever returned.
    pub response_partition_limit: i32,
}

use crate::adapters::protocol::constants::{
    API_VERSIONS_KEY, API_VERSIONS_MAX_VERSION, API_VERSIONS_MIN_VERSION,
    DESCRIBE_TOPIC_PARTITIONS_KEY, DESCRIBE_TOPIC_PARTITIONS_MAX_VERSION,
    DESCRIBE_TOPIC_PARTITIONS_MIN_VERSION,
};
use crate::adapters::protocol::dto::{
    ApiKey, ApiVersion, ApiVersionsResponse, DescribeTopicPartitionsRequest,
    DescribeTopicPartitionsResponse, ErrorCode, KafkaRequest, KafkaResponse, RequestHeader,
    ResponsePayload, TopicResponse,
};
use crate::adapters::protocol::parser::{ByteCursor, Deserialize};
use crate::ports::incoming::message_handler::MessageHandler;
use crate::Result;
use async_trait::async_trait;
use tracing::debug;

/// 브로커가 광고하는 API 버전 테이블
pub static SUPPORTED_API_VERSIONS: &[ApiVersion] = &[
    ApiVersion {
        api_key: API_VERSIONS_KEY,
        min_version: API_VERSIONS_MIN_VERSION,
        max_version: API_VERSIONS_MAX_VERSION,
    },
    ApiVersion {
        api_key: DESCRIBE_TOPIC_PARTITIONS_KEY,
        min_version: DESCRIBE_TOPIC_PARTITIONS_MIN_VERSION,
        max_version: DESCRIBE_TOPIC_PARTITIONS_MAX_VERSION,
    },
];

/// Stateless dispatcher. The only data it holds is the read-only capability
/// table, so one instance is shared by every connection.
#[derive(Debug, Clone, Copy)]
pub struct KafkaBroker {
    api_versions: &'static [ApiVersion],
}

impl KafkaBroker {
    pub fn new(api_versions: &'static [ApiVersion]) -> Self {
        Self { api_versions }
    }

    /// Routes by API key only; version checks belong to each handler.
    pub fn dispatch(&self, request: &KafkaRequest) -> Result<KafkaResponse> {
        match ApiKey::try_from(request.header.api_key)? {
            ApiKey::ApiVersions => Ok(self.handle_api_versions(&request.header)),
            ApiKey::DescribeTopicPartitions => self.handle_describe_topic_partitions(request),
        }
    }

    fn handle_api_versions(&self, header: &RequestHeader) -> KafkaResponse {
        let supported = self
            .api_versions
            .iter()
            .find(|v| v.api_key == API_VERSIONS_KEY)
            .is_some_and(|v| v.supports(header.api_version));

        // 지원하지 않는 버전이어도 전체 테이블을 돌려줌
        let error_code = if supported {
            ErrorCode::None
        } else {
            ErrorCode::UnsupportedVersion
        };

        KafkaResponse::new(
            header.correlation_id,
            ResponsePayload::ApiVersions(ApiVersionsResponse::new(
                error_code.into(),
                self.api_versions,
            )),
        )
    }

    fn handle_describe_topic_partitions(&self, request: &KafkaRequest) -> Result<KafkaResponse> {
        let mut body = ByteCursor::new(request.body.clone());
        let describe_request = DescribeTopicPartitionsRequest::deserialize(&mut body)?;

        // 메타데이터 저장소가 없으므로 모든 토픽은 unknown
        let topics: Vec<TopicResponse> = describe_request
            .topics
            .into_iter()
            .map(|topic| TopicResponse::unknown(topic.topic_name))
            .collect();

        for topic in &topics {
            debug!(
                correlation_id = request.header.correlation_id,
                topic = %topic.topic_name,
                topic_id = %topic.topic_id,
                error_code = topic.error_code,
                "described topic"
            );
        }

        Ok(KafkaResponse::new(
            request.header.correlation_id,
            ResponsePayload::DescribeTopicPartitions(DescribeTopicPartitionsResponse::new(topics)),
        ))
    }
}

impl Default for KafkaBroker {
    fn default() -> Self {
        Self::new(SUPPORTED_API_VERSIONS)
    }
}

#[async_trait]
impl MessageHandler for KafkaBroker {
    async fn handle_request(&self, request: KafkaRequest) -> Result<KafkaResponse> {
        self.dispatch(&request)
    }
}

use crate::adapters::protocol::dto::{KafkaRequest, KafkaResponse};
use crate::Result;
use async_trait::async_trait;

/// 디코딩된 요청 하나에 대해 응답 하나를 돌려주는 포트
///
/// An `Err` is fatal for the connection the request arrived on: no response
/// is written and the connection loop stops.
#[async_trait]
pub trait MessageHandler: Send + Sync {
    async fn handle_request(&self, request: KafkaRequest) -> Result<KafkaResponse>;
}

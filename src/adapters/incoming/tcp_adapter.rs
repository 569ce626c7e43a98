use crate::adapters::incoming::frame_transport::FrameTransport;
use crate::adapters::protocol::KafkaProtocolParser;
use crate::config::ServerConfig;
use crate::ports::incoming::message_handler::MessageHandler;
use crate::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::io::{AsyncRead, AsyncWrite};
use tokio::net::{TcpListener, TcpStream};
use tracing::{debug, error, info, warn};

pub struct TcpAdapter {
    listener: TcpListener,
    message_handler: Arc<dyn MessageHandler>,
    protocol_parser: KafkaProtocolParser,
    config: Arc<ServerConfig>,
}

impl TcpAdapter {
    pub async fn new(
        config: ServerConfig,
        message_handler: Arc<dyn MessageHandler>,
        protocol_parser: KafkaProtocolParser,
    ) -> Result<Self> {
        let listener = TcpListener::bind(&config.listen_addr).await?;
        Ok(Self {
            listener,
            message_handler,
            protocol_parser,
            config: Arc::new(config),
        })
    }

    pub fn local_addr(&self) -> Result<SocketAddr> {
        Ok(self.listener.local_addr()?)
    }

    pub async fn run(&self) -> Result<()> {
        info!(addr = %self.local_addr()?, "server listening");

        loop {
            match self.listener.accept().await {
                Ok((stream, peer)) => {
                    let message_handler = Arc::clone(&self.message_handler);
                    let protocol_parser = self.protocol_parser.clone();
                    let config = Arc::clone(&self.config);

                    tokio::spawn(async move {
                        serve_connection(stream, peer, message_handler, protocol_parser, config)
                            .await;
                    });
                }
                Err(e) => error!(error = %e, "accept error"),
            }
        }
    }
}

/// 연결 하나를 소유하고, 루프가 끝나면 스트림을 닫음
async fn serve_connection(
    mut stream: TcpStream,
    peer: SocketAddr,
    message_handler: Arc<dyn MessageHandler>,
    protocol_parser: KafkaProtocolParser,
    config: Arc<ServerConfig>,
) {
    info!(%peer, "accepted new connection");

    let result = handle_connection(
        &mut stream,
        message_handler.as_ref(),
        &protocol_parser,
        &config,
    )
    .await;

    match result {
        Ok(()) => info!(%peer, "client closed connection"),
        Err(e) => warn!(%peer, error = %e, "closing connection"),
    }
}

/// Sequential request/response loop for one connection.
///
/// Returns `Ok(())` on a clean EOF. Any frame, decode or dispatch error ends the
/// loop without writing a response. The stream is borrowed: closing it is the
/// caller's job.
pub async fn handle_connection<S>(
    stream: &mut S,
    message_handler: &dyn MessageHandler,
    protocol_parser: &KafkaProtocolParser,
    config: &ServerConfig,
) -> Result<()>
where
    S: AsyncRead + AsyncWrite + Unpin + Send,
{
    let mut transport = FrameTransport::new(stream, config);

    while let Some(frame) = transport.read_frame().await? {
        // 1. 헤더 파싱
        let request = protocol_parser.parse_request(frame)?;
        let (api_key, api_version, correlation_id) = (
            request.header.api_key,
            request.header.api_version,
            request.header.correlation_id,
        );
        debug!(api_key, api_version, correlation_id, "request");

        // 2. 디스패치 및 처리
        let response = message_handler.handle_request(request).await?;

        // 3. 응답 인코딩 및 전송
        let payload = protocol_parser.encode_response(&response);
        transport.write_frame(&payload).await?;
        debug!(api_key, correlation_id, len = payload.len(), "response");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::protocol::constants::{API_VERSIONS_KEY, DESCRIBE_TOPIC_PARTITIONS_KEY};
    use crate::adapters::protocol::dto::{
        DescribeTopicPartitionsRequest, RequestHeader, TopicRequest,
    };
    use crate::adapters::protocol::error::{DecodeError, DispatchError, FrameError};
    use crate::adapters::protocol::parser::Serialize;
    use crate::application::ApplicationError;
    use crate::config::create_test_config;
    use bytes::{BufMut, BytesMut};
    use tokio::io::{duplex, AsyncReadExt, AsyncWriteExt, DuplexStream};
    use tokio::task::JoinHandle;

    fn request_frame(api_key: i16, api_version: i16, correlation_id: i32, body: &[u8]) -> Vec<u8> {
        let mut payload = BytesMut::new();
        RequestHeader {
            api_key,
            api_version,
            correlation_id,
            client_id: Some("kafka-cli".to_string()),
        }
        .serialize(&mut payload);
        payload.put_slice(body);

        let mut frame = (payload.len() as u32).to_be_bytes().to_vec();
        frame.extend_from_slice(&payload);
        frame
    }

    fn spawn_connection() -> (DuplexStream, JoinHandle<Result<()>>) {
        let (client, mut server) = duplex(4096);
        let handle = tokio::spawn(async move {
            let config = create_test_config();
            handle_connection(
                &mut server,
                config.broker.as_ref(),
                &config.protocol_parser,
                &config.server,
            )
            .await
        });
        (client, handle)
    }

    async fn read_response(client: &mut DuplexStream) -> Vec<u8> {
        let mut length = [0u8; 4];
        client.read_exact(&mut length).await.unwrap();
        let mut payload = vec![0u8; u32::from_be_bytes(length) as usize];
        client.read_exact(&mut payload).await.unwrap();
        payload
    }

    #[tokio::test]
    async fn test_api_versions_over_connection() {
        let (mut client, handle) = spawn_connection();

        client
            .write_all(&request_frame(API_VERSIONS_KEY, 4, 7, &[]))
            .await
            .unwrap();
        let payload = read_response(&mut client).await;

        assert_eq!(&payload[0..4], &7i32.to_be_bytes());
        assert_eq!(&payload[4..6], &[0, 0]);
        assert_eq!(payload[6], 3);
        assert_eq!(payload.len(), 26);

        drop(client);
        assert!(handle.await.unwrap().is_ok());
    }

    #[tokio::test]
    async fn test_responses_follow_request_order() {
        let (mut client, handle) = spawn_connection();

        let mut body = BytesMut::new();
        DescribeTopicPartitionsRequest {
            topics: vec![TopicRequest {
                topic_name: "foo".to_string(),
            }],
            response_partition_limit: 10,
        }
        .serialize(&mut body);

        // 파이프라인된 요청 세 개를 한 번에 전송
        let mut pipelined = request_frame(API_VERSIONS_KEY, 4, 1, &[]);
        pipelined.extend(request_frame(DESCRIBE_TOPIC_PARTITIONS_KEY, 0, 2, &body));
        pipelined.extend(request_frame(API_VERSIONS_KEY, 5, 3, &[]));
        client.write_all(&pipelined).await.unwrap();

        let first = read_response(&mut client).await;
        let second = read_response(&mut client).await;
        let third = read_response(&mut client).await;

        assert_eq!(&first[0..4], &1i32.to_be_bytes());
        assert_eq!(&second[0..4], &2i32.to_be_bytes());
        assert_eq!(&third[0..4], &3i32.to_be_bytes());
        // unsupported version is reported in-band
        assert_eq!(&third[4..6], &35i16.to_be_bytes());

        drop(client);
        assert!(handle.await.unwrap().is_ok());
    }

    #[tokio::test]
    async fn test_unsupported_api_key_closes_without_response() {
        let (mut client, handle) = spawn_connection();

        client
            .write_all(&request_frame(99, 0, 1, &[]))
            .await
            .unwrap();

        let result = handle.await.unwrap();
        assert!(matches!(
            result,
            Err(ApplicationError::Dispatch(DispatchError::UnsupportedApiKey(99)))
        ));

        let mut rest = Vec::new();
        client.read_to_end(&mut rest).await.unwrap();
        assert!(rest.is_empty());
    }

    #[tokio::test]
    async fn test_no_topics_requested_closes_without_response() {
        let (mut client, handle) = spawn_connection();

        let body = [0x01, 0x00, 0x00, 0x00, 0x00, 0x64];
        client
            .write_all(&request_frame(DESCRIBE_TOPIC_PARTITIONS_KEY, 0, 1, &body))
            .await
            .unwrap();

        let result = handle.await.unwrap();
        assert!(matches!(
            result,
            Err(ApplicationError::Decode(DecodeError::NoTopicsRequested))
        ));

        let mut rest = Vec::new();
        client.read_to_end(&mut rest).await.unwrap();
        assert!(rest.is_empty());
    }

    #[tokio::test]
    async fn test_truncated_frame_closes_without_response() {
        let (mut client, handle) = spawn_connection();

        let mut data = 100u32.to_be_bytes().to_vec();
        data.extend_from_slice(&[0u8; 10]);
        client.write_all(&data).await.unwrap();
        client.shutdown().await.unwrap();

        let result = handle.await.unwrap();
        assert!(matches!(
            result,
            Err(ApplicationError::Frame(FrameError::TruncatedFrame {
                expected: 100,
                received: 10
            }))
        ));

        let mut rest = Vec::new();
        client.read_to_end(&mut rest).await.unwrap();
        assert!(rest.is_empty());
    }

    #[tokio::test]
    async fn test_header_too_short_closes_connection() {
        let (mut client, handle) = spawn_connection();

        client.write_all(&[0, 0, 0, 3, 0, 18, 0]).await.unwrap();

        let result = handle.await.unwrap();
        assert!(matches!(
            result,
            Err(ApplicationError::Decode(DecodeError::HeaderTooShort {
                field: "api_version"
            }))
        ));
    }

    #[tokio::test]
    async fn test_tcp_adapter_serves_real_socket() {
        let config = create_test_config();
        let adapter = TcpAdapter::new(config.server, config.broker, config.protocol_parser)
            .await
            .unwrap();
        let addr = adapter.local_addr().unwrap();
        let server = tokio::spawn(async move { adapter.run().await });

        let mut stream = TcpStream::connect(addr).await.unwrap();
        stream
            .write_all(&request_frame(API_VERSIONS_KEY, 3, 42, &[]))
            .await
            .unwrap();

        let mut length = [0u8; 4];
        stream.read_exact(&mut length).await.unwrap();
        let mut payload = vec![0u8; u32::from_be_bytes(length) as usize];
        stream.read_exact(&mut payload).await.unwrap();
        assert_eq!(&payload[0..4], &42i32.to_be_bytes());

        server.abort();
    }
}

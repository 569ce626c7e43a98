use crate::adapters::protocol::constants::FRAME_LENGTH_SIZE;
use crate::adapters::protocol::error::FrameError;
use crate::config::ServerConfig;
use bytes::{BufMut, Bytes, BytesMut};
use std::future::Future;
use std::io;
use std::time::Duration;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};

/// 길이 접두사(4바이트 big-endian) 프레임을 읽고 쓰는 전송 계층
pub struct FrameTransport<S> {
    stream: S,
    read_timeout: Duration,
    write_timeout: Duration,
    max_frame_size: usize,
}

impl<S> FrameTransport<S>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    pub fn new(stream: S, config: &ServerConfig) -> Self {
        Self {
            stream,
            read_timeout: config.read_timeout,
            write_timeout: config.write_timeout,
            max_frame_size: config.max_frame_size,
        }
    }

    /// Reads one frame payload.
    ///
    /// Returns `Ok(None)` when the peer closes the stream on a frame boundary.
    /// Partial length prefixes and short payloads are `TruncatedFrame`.
    pub async fn read_frame(&mut self) -> Result<Option<Bytes>, FrameError> {
        let mut length_bytes = [0u8; FRAME_LENGTH_SIZE];
        let received = with_timeout(
            "frame length read",
            self.read_timeout,
            read_full(&mut self.stream, &mut length_bytes),
        )
        .await?;

        match received {
            0 => return Ok(None),
            FRAME_LENGTH_SIZE => {}
            received => {
                return Err(FrameError::TruncatedFrame {
                    expected: FRAME_LENGTH_SIZE,
                    received,
                })
            }
        }

        let length = u32::from_be_bytes(length_bytes) as usize;
        if length > self.max_frame_size {
            return Err(FrameError::FrameTooLarge {
                size: length,
                max: self.max_frame_size,
            });
        }

        let mut payload = BytesMut::zeroed(length);
        let received = with_timeout(
            "frame payload read",
            self.read_timeout,
            read_full(&mut self.stream, &mut payload),
        )
        .await?;

        if received < length {
            return Err(FrameError::TruncatedFrame {
                expected: length,
                received,
            });
        }

        Ok(Some(payload.freeze()))
    }

    /// Writes the length prefix and payload with a single `write_all`.
    pub async fn write_frame(&mut self, payload: &[u8]) -> Result<(), FrameError> {
        let mut frame = BytesMut::with_capacity(FRAME_LENGTH_SIZE + payload.len());
        frame.put_u32(payload.len() as u32);
        frame.put_slice(payload);

        let stream = &mut self.stream;
        with_timeout("frame write", self.write_timeout, async {
            stream.write_all(&frame).await?;
            stream.flush().await
        })
        .await
    }
}

/// 버퍼가 다 찰 때까지 읽음. 스트림이 끝나면 읽은 바이트 수를 반환
async fn read_full<R>(reader: &mut R, buf: &mut [u8]) -> io::Result<usize>
where
    R: AsyncRead + Unpin,
{
    let mut filled = 0;
    while filled < buf.len() {
        let n = reader.read(&mut buf[filled..]).await?;
        if n == 0 {
            break;
        }
        filled += n;
    }
    Ok(filled)
}

async fn with_timeout<T, F>(
    operation: &'static str,
    after: Duration,
    io: F,
) -> Result<T, FrameError>
where
    F: Future<Output = io::Result<T>>,
{
    match tokio::time::timeout(after, io).await {
        Ok(result) => result.map_err(FrameError::Io),
        Err(_) => Err(FrameError::Timeout { operation, after }),
    }
}

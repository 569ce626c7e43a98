use std::time::Duration;
use thiserror::Error;

/// 프레임 전송 계층 에러
#[derive(Debug, Error)]
pub enum FrameError {
    #[error("truncated frame: expected {expected} bytes but stream ended after {received}")]
    TruncatedFrame { expected: usize, received: usize },
    #[error("frame too large: {size} bytes exceeds limit of {max}")]
    FrameTooLarge { size: usize, max: usize },
    #[error("{operation} timed out after {after:?}")]
    Timeout {
        operation: &'static str,
        after: Duration,
    },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// 요청 디코딩 에러
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("request header too short: missing {field}")]
    HeaderTooShort { field: &'static str },
    #[error("buffer underrun: need {needed} bytes but only {remaining} remain")]
    BufferUnderrun { needed: usize, remaining: usize },
    #[error("describe topic partitions request names no topics")]
    NoTopicsRequested,
    #[error("invalid UTF-8 in {field}")]
    InvalidUtf8 { field: &'static str },
    #[error("unsigned varint longer than 5 bytes")]
    InvalidVarint,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DispatchError {
    #[error("unsupported API key: {0}")]
    UnsupportedApiKey(i16),
}

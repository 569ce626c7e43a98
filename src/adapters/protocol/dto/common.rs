use crate::adapters::protocol::constants::{API_VERSIONS_KEY, DESCRIBE_TOPIC_PARTITIONS_KEY};
use crate::adapters::protocol::error::DispatchError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(i16)]
pub enum ErrorCode {
    None = 0,
    UnknownTopicOrPartition = 3,
    UnsupportedVersion = 35,
}

impl From<ErrorCode> for i16 {
    fn from(error_code: ErrorCode) -> Self {
        error_code as i16
    }
}

/// 브로커가 처리할 수 있는 API 목록
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ApiKey {
    ApiVersions,
    DescribeTopicPartitions,
}

impl ApiKey {
    pub fn code(self) -> i16 {
        match self {
            ApiKey::ApiVersions => API_VERSIONS_KEY,
            ApiKey::DescribeTopicPartitions => DESCRIBE_TOPIC_PARTITIONS_KEY,
        }
    }
}

impl TryFrom<i16> for ApiKey {
    type Error = DispatchError;

    fn try_from(code: i16) -> Result<Self, Self::Error> {
        match code {
            API_VERSIONS_KEY => Ok(ApiKey::ApiVersions),
            DESCRIBE_TOPIC_PARTITIONS_KEY => Ok(ApiKey::DescribeTopicPartitions),
            other => Err(DispatchError::UnsupportedApiKey(other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_key_round_trip() {
        for api_key in [ApiKey::ApiVersions, ApiKey::DescribeTopicPartitions] {
            assert_eq!(ApiKey::try_from(api_key.code()), Ok(api_key));
        }
    }

    #[test]
    fn test_unknown_api_key() {
        assert_eq!(
            ApiKey::try_from(99),
            Err(DispatchError::UnsupportedApiKey(99))
        );
        assert_eq!(ApiKey::try_from(0), Err(DispatchError::UnsupportedApiKey(0)));
    }

    #[test]
    fn test_error_code_values() {
        assert_eq!(i16::from(ErrorCode::None), 0);
        assert_eq!(i16::from(ErrorCode::UnknownTopicOrPartition), 3);
        assert_eq!(i16::from(ErrorCode::UnsupportedVersion), 35);
    }
}

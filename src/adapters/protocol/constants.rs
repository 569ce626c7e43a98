use std::time::Duration;

/// ApiVersions API의 키 값
/// 클라이언트가 브로커가 지원하는 API 버전을 조회할 때 사용함
pub const API_VERSIONS_KEY: i16 = 18;
pub const API_VERSIONS_MIN_VERSION: i16 = 0;
pub const API_VERSIONS_MAX_VERSION: i16 = 4;

/// DescribeTopicPartitions API의 키 값
pub const DESCRIBE_TOPIC_PARTITIONS_KEY: i16 = 75;

/// DescribeTopicPartitions API는 버전 0만 지원
pub const DESCRIBE_TOPIC_PARTITIONS_MIN_VERSION: i16 = 0;
pub const DESCRIBE_TOPIC_PARTITIONS_MAX_VERSION: i16 = 0;

/// Error codes
pub const UNKNOWN_TOPIC_OR_PARTITION: i16 = 3;
pub const UNSUPPORTED_VERSION: i16 = 35;

/// Frame length prefix (4 bytes, big-endian)
pub const FRAME_LENGTH_SIZE: usize = 4;

/// 최대 프레임 크기 (2MB)
pub const DEFAULT_MAX_FRAME_SIZE: usize = 2 * 1024 * 1024;

pub const DEFAULT_READ_TIMEOUT: Duration = Duration::from_secs(5);
pub const DEFAULT_WRITE_TIMEOUT: Duration = Duration::from_secs(5);

/// Empty tagged fields
pub const TAG_BUFFER: u8 = 0;

/// Null marker for nullable structs (next_cursor)
pub const NULL_STRUCT: u8 = 0xff;

/// Placeholder authorized operations for topics we know nothing about
pub const TOPIC_AUTHORIZED_OPERATIONS_UNKNOWN: i32 = 0;

use super::app_config::{AppConfig, ServerConfig};
use std::time::Duration;

/// 테스트용 설정: 짧은 타임아웃과 작은 프레임 제한
pub fn create_test_config() -> AppConfig {
    AppConfig::new(ServerConfig {
        listen_addr: "127.0.0.1:0".to_string(),
        read_timeout: Duration::from_millis(200),
        write_timeout: Duration::from_millis(200),
        max_frame_size: 1024,
    })
}

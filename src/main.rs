use kafka_wire_core::adapters::incoming::tcp_adapter::TcpAdapter;
use kafka_wire_core::config::{log_filter_from_env, AppConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(log_filter_from_env())
        .init();

    let config = AppConfig::from_env()?;

    let adapter = TcpAdapter::new(config.server, config.broker, config.protocol_parser).await?;
    adapter.run().await?;

    Ok(())
}

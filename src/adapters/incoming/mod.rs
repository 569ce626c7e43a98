pub mod frame_transport;
pub mod tcp_adapter;

pub mod incoming;
pub mod protocol;

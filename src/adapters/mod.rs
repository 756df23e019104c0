// Adapters layer: concrete implementations for the outbound ports
// (message delivery, storage).

pub mod sender;
pub mod storage;

pub use sender::NoopSender;
pub use storage::LocalStorage;

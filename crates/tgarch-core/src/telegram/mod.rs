//! Telegram-facing surface: the RPC port, its tagged response variants, and
//! the channel resolution pipeline.

pub mod channel;
pub mod port;
pub mod types;

pub use channel::resolve_channel;
pub use port::TelegramApi;

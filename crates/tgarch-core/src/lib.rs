//! Channel identity resolution and checkpoint discovery for the Telegram
//! archiver.
//!
//! The authenticated MTProto session lives behind the
//! [`telegram::TelegramApi`] port; this crate decides how a channel
//! reference is resolved and where the archival pipeline should start
//! paginating.

pub mod config;
pub mod domain;
pub mod errors;
pub mod logging;
pub mod telegram;

pub use errors::{Error, Result};

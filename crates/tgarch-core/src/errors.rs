/// Core error type for channel resolution.
///
/// The adapter owning the MTProto session maps its RPC failures into
/// `Transport`; everything the resolver classifies itself is either a
/// not-found variant (always carrying the original query input) or
/// `Cancelled`.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("config error: {0}")]
    Config(String),

    #[error("telegram rpc error: {0}")]
    Transport(String),

    #[error("couldn't find access hash for channel id {id}")]
    AccessHashNotFound { id: i64 },

    #[error("couldn't find a channel for handle: {handle}")]
    ChannelNotFound { handle: String },

    #[error("couldn't find last message id in channel {id}")]
    LastMessageNotFound { id: i64 },

    #[error("operation cancelled")]
    Cancelled,
}

impl Error {
    /// Domain-level absence, as opposed to a transport or cancellation
    /// failure.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Error::AccessHashNotFound { .. }
                | Error::ChannelNotFound { .. }
                | Error::LastMessageNotFound { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, Error>;

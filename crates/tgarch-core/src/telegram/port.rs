use async_trait::async_trait;

use crate::{
    domain::ChannelId,
    telegram::types::{ContactsResult, ResolvedPeer, SearchRequest, SearchResult},
    Result,
};

/// Authenticated Telegram RPC capability.
///
/// The adapter owning the MTProto session implements this; the resolver only
/// needs these three calls. Transport failures map into
/// [`crate::Error::Transport`] and are propagated unchanged.
#[async_trait]
pub trait TelegramApi: Send + Sync {
    /// Contacts lookup carrying the requested id. This queries the
    /// account's own contact list, not an entity-by-id endpoint.
    async fn lookup_contacts(&self, id: ChannelId) -> Result<ContactsResult>;

    /// Resolve a public handle to its associated chats.
    async fn resolve_handle(&self, handle: &str) -> Result<ResolvedPeer>;

    /// Bounded message search against a channel peer.
    async fn search_messages(&self, req: SearchRequest) -> Result<SearchResult>;
}

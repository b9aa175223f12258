//! Channel resolution pipeline.
//!
//! Three sequential round trips: classify the reference (numeric id vs
//! public handle), resolve it to an id/access-hash pair, then ask for the
//! single newest message to get the archival checkpoint. No retries and no
//! backward transitions; the first failure ends the whole call.

use std::future::Future;

use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use crate::{
    domain::{AccessHash, ChannelId, ChannelInfo, ChannelRef, MessageId},
    telegram::{
        port::TelegramApi,
        types::{
            ChatEntry, ContactEntry, ContactsResult, MessageEntry, MessageFilter, PeerRef,
            SearchRequest, SearchResult,
        },
    },
    Error, Result,
};

/// Resolve a channel reference into its identity and newest message id.
///
/// The returned [`ChannelInfo`] is the starting checkpoint for paginated
/// retrieval: `last_message_id` bounds everything posted so far.
pub async fn resolve_channel(
    api: &dyn TelegramApi,
    reference: &str,
    cancel: &CancellationToken,
) -> Result<ChannelInfo> {
    let (id, access_hash) = match ChannelRef::parse(reference) {
        ChannelRef::Private(id) => {
            debug!(id = id.0, "resolving private channel");
            (id, private_channel_info(api, id, cancel).await?)
        }
        ChannelRef::Handle(handle) => {
            debug!(handle = %handle, "resolving public channel");
            public_channel_info(api, &handle, cancel).await?
        }
    };

    let last_message_id = latest_message_id(api, id, access_hash, cancel).await?;

    info!(
        id = id.0,
        last_message_id = last_message_id.0,
        "channel resolved"
    );

    Ok(ChannelInfo {
        id,
        access_hash,
        last_message_id,
    })
}

/// Query the access hash for a private channel.
///
/// The lookup scans the account's own contact list, so this only succeeds
/// when the target already appears there. A zero access hash counts as
/// absent: it would poison the follow-up search.
async fn private_channel_info(
    api: &dyn TelegramApi,
    id: ChannelId,
    cancel: &CancellationToken,
) -> Result<AccessHash> {
    let contacts = round_trip(cancel, api.lookup_contacts(id)).await?;

    if let ContactsResult::Contacts(entries) = contacts {
        for entry in entries {
            if let ContactEntry::User { access_hash, .. } = entry {
                if access_hash.0 != 0 {
                    return Ok(access_hash);
                }
            }
        }
    }

    Err(Error::AccessHashNotFound { id: id.0 })
}

/// Query a public channel by its handle.
async fn public_channel_info(
    api: &dyn TelegramApi,
    handle: &str,
    cancel: &CancellationToken,
) -> Result<(ChannelId, AccessHash)> {
    let resolved = round_trip(cancel, api.resolve_handle(handle)).await?;

    if resolved.chats.is_empty() {
        return Err(Error::ChannelNotFound {
            handle: handle.to_string(),
        });
    }

    // The handle may also map to groups or forbidden chats; only a channel
    // entry carries a usable identity.
    for chat in resolved.chats {
        if let ChatEntry::Channel { id, access_hash } = chat {
            return Ok((id, access_hash));
        }
    }

    Err(Error::ChannelNotFound {
        handle: handle.to_string(),
    })
}

/// Find the newest message id in the given channel.
///
/// `offset_id = -1` anchors the search at the newest message and `limit = 1`
/// asks for just that one. The server is trusted for ordering: only the
/// first non-empty slot of the page is honored.
async fn latest_message_id(
    api: &dyn TelegramApi,
    id: ChannelId,
    access_hash: AccessHash,
    cancel: &CancellationToken,
) -> Result<MessageId> {
    let request = SearchRequest {
        peer: PeerRef {
            channel_id: id,
            access_hash,
        },
        filter: MessageFilter::Empty,
        query: String::new(),
        offset_id: -1,
        limit: 1,
    };

    let result = round_trip(cancel, api.search_messages(request)).await?;

    let SearchResult::ChannelMessages(messages) = result else {
        return Err(Error::LastMessageNotFound { id: id.0 });
    };

    let last = messages.iter().find_map(|entry| match entry {
        MessageEntry::Message { id } => Some(*id),
        MessageEntry::Empty => None,
    });

    match last {
        Some(message_id) if message_id.0 > 0 => Ok(message_id),
        _ => Err(Error::LastMessageNotFound { id: id.0 }),
    }
}

/// Race one outbound call against the caller's cancellation token.
///
/// `biased` so an already-cancelled token wins even when the call is ready
/// immediately.
async fn round_trip<T>(
    cancel: &CancellationToken,
    call: impl Future<Output = Result<T>>,
) -> Result<T> {
    tokio::select! {
        biased;
        _ = cancel.cancelled() => Err(Error::Cancelled),
        res = call => res,
    }
}

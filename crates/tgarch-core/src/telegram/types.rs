use crate::domain::{AccessHash, ChannelId, MessageId};

/// Result of a contacts lookup.
///
/// Mirror of the protocol union: the server either returns the contact list
/// or reports it unchanged since the hash we sent. Only the `Contacts`
/// variant can resolve a private channel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ContactsResult {
    Contacts(Vec<ContactEntry>),
    NotModified,
}

/// One entry of the account's contact list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactEntry {
    User { id: i64, access_hash: AccessHash },
    Deleted { id: i64 },
}

/// Result of resolving a public handle: the chats the server associates
/// with it, in server order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedPeer {
    pub chats: Vec<ChatEntry>,
}

/// One chat associated with a resolved handle. Only `Channel` entries carry
/// the identity the archiver can use.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChatEntry {
    Channel {
        id: ChannelId,
        access_hash: AccessHash,
    },
    Group {
        id: ChannelId,
    },
    Forbidden {
        id: ChannelId,
    },
}

/// Protocol-level address of a channel: id plus its access hash.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PeerRef {
    pub channel_id: ChannelId,
    pub access_hash: AccessHash,
}

/// Content filter for a message search. The checkpoint query always uses
/// `Empty`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MessageFilter {
    #[default]
    Empty,
}

/// A `messages.search` request, reduced to the fields the resolver sets.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchRequest {
    pub peer: PeerRef,
    pub filter: MessageFilter,
    pub query: String,
    pub offset_id: i32,
    pub limit: i32,
}

/// Result of a message search. Searches scoped to a channel peer come back
/// as `ChannelMessages`; the other variants exist so adapters never have to
/// invent a mapping for an unexpected union arm.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchResult {
    ChannelMessages(Vec<MessageEntry>),
    Messages(Vec<MessageEntry>),
    NotModified,
}

/// One slot of a returned message page. `Empty` is the protocol's hole for
/// a deleted or inaccessible message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageEntry {
    Message { id: MessageId },
    Empty,
}

/// Telegram channel id (numeric).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ChannelId(pub i64);

/// Opaque per-session authorization token paired with a [`ChannelId`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct AccessHash(pub i64);

/// Telegram message id (numeric, increasing per channel).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MessageId(pub i64);

/// Fully resolved channel identity plus the newest message id.
///
/// Constructed only after every round trip succeeded; a partially resolved
/// channel is not representable. `last_message_id` is always positive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChannelInfo {
    pub id: ChannelId,
    pub access_hash: AccessHash,
    pub last_message_id: MessageId,
}

/// Caller-supplied channel reference.
///
/// A base-10 signed integer selects the private resolution path; any other
/// string is treated as a public handle. No other formats are recognized.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ChannelRef {
    Private(ChannelId),
    Handle(String),
}

impl ChannelRef {
    pub fn parse(reference: &str) -> Self {
        match reference.parse::<i64>() {
            Ok(id) => ChannelRef::Private(ChannelId(id)),
            Err(_) => ChannelRef::Handle(reference.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_reference_is_private() {
        assert_eq!(
            ChannelRef::parse("123456"),
            ChannelRef::Private(ChannelId(123456))
        );
    }

    #[test]
    fn negative_numeric_reference_is_private() {
        assert_eq!(
            ChannelRef::parse("-1001234567890"),
            ChannelRef::Private(ChannelId(-1001234567890))
        );
    }

    #[test]
    fn textual_reference_is_handle() {
        assert_eq!(
            ChannelRef::parse("examplechannel"),
            ChannelRef::Handle("examplechannel".to_string())
        );
    }

    #[test]
    fn mixed_reference_is_handle() {
        // "123abc" does not parse as i64, so it goes down the public path.
        assert_eq!(
            ChannelRef::parse("123abc"),
            ChannelRef::Handle("123abc".to_string())
        );
    }

    #[test]
    fn padded_numeric_reference_is_handle() {
        assert_eq!(
            ChannelRef::parse(" 42 "),
            ChannelRef::Handle(" 42 ".to_string())
        );
    }
}

//! Telegram link construction for source records.

/// Public URL of the channel a message was posted in.
pub fn channel_url(chat_id: &str) -> String {
    format!("https://t.me/c/{chat_id}")
}

/// Public URL of a single message within a channel.
pub fn message_url(chat_id: &str, message_id: &str) -> String {
    format!("https://t.me/c/{chat_id}/{message_id}")
}

/// Deep-link URI for the sending user.
pub fn sender_uri(from_id: &str) -> String {
    format!("tg://user?id={from_id}")
}

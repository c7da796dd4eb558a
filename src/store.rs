use crate::errors::ChatError;
use crate::model::{Conversation, Message};
use crate::seed;
use chrono::{DateTime, Utc};
use tokio::sync::Mutex;
use tracing::debug;

/// One row of the chat-list sidebar: a conversation plus its latest activity.
#[derive(Debug, Clone)]
pub struct ChatListEntry {
    pub conversation: Conversation,
    /// One-line preview of the newest message, prefixed with the sender name
    /// for inbound group messages. `None` for an empty history.
    pub preview: Option<String>,
    pub last_activity: Option<DateTime<Utc>>,
}

#[derive(Default)]
struct Inner {
    conversations: Vec<Conversation>,
    /// Append-only within a session; insertion order is chronological order.
    messages: Vec<Message>,
}

/// The backing store for conversations and messages.
///
/// Explicitly owned and instantiable — every session or test creates its own
/// store, so state never leaks between them. Mutation happens behind a single
/// async mutex because delivery settlement runs on a spawned task; all other
/// access comes from one UI event stream.
pub struct ChatStore {
    inner: Mutex<Inner>,
}

impl Default for ChatStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatStore {
    /// An empty store with no conversations.
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner::default()),
        }
    }

    /// A store pre-populated with the fixed sample conversations and history.
    pub fn with_sample_data() -> Self {
        Self {
            inner: Mutex::new(Inner {
                conversations: seed::conversations(),
                messages: seed::messages(),
            }),
        }
    }

    pub async fn add_conversation(&self, conversation: Conversation) {
        let mut inner = self.inner.lock().await;
        if inner.conversations.iter().any(|c| c.id == conversation.id) {
            debug!("conversation {} already exists, ignoring", conversation.id);
            return;
        }
        inner.conversations.push(conversation);
    }

    pub async fn conversation(&self, id: &str) -> Option<Conversation> {
        let inner = self.inner.lock().await;
        inner.conversations.iter().find(|c| c.id == id).cloned()
    }

    pub async fn conversations(&self) -> Vec<Conversation> {
        self.inner.lock().await.conversations.clone()
    }

    /// Append a message. The owning conversation must exist — messages
    /// addressed to unknown conversations would never be projected.
    pub async fn append(&self, message: Message) -> Result<(), ChatError> {
        let mut inner = self.inner.lock().await;
        if !inner
            .conversations
            .iter()
            .any(|c| c.id == message.conversation_id)
        {
            return Err(ChatError::UnknownConversation(
                message.conversation_id.clone(),
            ));
        }
        debug!(
            "appending message {} to conversation {}",
            message.id, message.conversation_id
        );
        inner.messages.push(message);
        Ok(())
    }

    /// The ordered history of one conversation: exactly the messages whose
    /// owning id matches, in insertion order. Empty (never an error) for an
    /// unknown or message-less conversation. Recomputed on every call — the
    /// result is never cached, so it can never go stale after an append.
    pub async fn messages_for(&self, conversation_id: &str) -> Vec<Message> {
        let inner = self.inner.lock().await;
        inner
            .messages
            .iter()
            .filter(|m| m.conversation_id == conversation_id)
            .cloned()
            .collect()
    }

    pub async fn message_count(&self) -> usize {
        self.inner.lock().await.messages.len()
    }

    /// Remove every message owned by `conversation_id`, leaving other
    /// conversations untouched. Idempotent. Returns the removed count.
    pub async fn clear(&self, conversation_id: &str) -> usize {
        let mut inner = self.inner.lock().await;
        let before = inner.messages.len();
        inner.messages.retain(|m| m.conversation_id != conversation_id);
        let removed = before - inner.messages.len();
        if removed > 0 {
            debug!("cleared {} messages from {}", removed, conversation_id);
        }
        removed
    }

    /// Settle an optimistic message from Sending to Sent. Returns `false` if
    /// the message no longer exists (e.g. its conversation was cleared while
    /// the delivery simulation was in flight).
    pub async fn mark_sent(&self, message_id: &str) -> bool {
        use crate::model::DeliveryStatus;
        let mut inner = self.inner.lock().await;
        match inner.messages.iter_mut().find(|m| m.id == message_id) {
            Some(message) => {
                message.status = Some(DeliveryStatus::Sent);
                true
            }
            None => false,
        }
    }

    /// Returns `false` when the conversation is unknown.
    pub async fn set_muted(&self, conversation_id: &str, muted: bool) -> bool {
        let mut inner = self.inner.lock().await;
        match inner
            .conversations
            .iter_mut()
            .find(|c| c.id == conversation_id)
        {
            Some(conversation) => {
                conversation.muted = muted;
                true
            }
            None => false,
        }
    }

    /// Update the free-form presence line. Returns `false` when unknown.
    pub async fn set_status(&self, conversation_id: &str, status: &str) -> bool {
        let mut inner = self.inner.lock().await;
        match inner
            .conversations
            .iter_mut()
            .find(|c| c.id == conversation_id)
        {
            Some(conversation) => {
                conversation.status = status.to_string();
                true
            }
            None => false,
        }
    }

    /// Sidebar projection: every conversation with its latest message preview,
    /// most recently active first. Conversations without messages keep their
    /// seed order at the end.
    pub async fn chat_list(&self) -> Vec<ChatListEntry> {
        let inner = self.inner.lock().await;
        let mut entries: Vec<ChatListEntry> = inner
            .conversations
            .iter()
            .map(|conversation| {
                let last = inner
                    .messages
                    .iter()
                    .rev()
                    .find(|m| m.conversation_id == conversation.id);
                let preview = last.map(|m| match &m.sender_name {
                    Some(sender) => format!("{}: {}", sender, m.preview()),
                    None => m.preview(),
                });
                ChatListEntry {
                    conversation: conversation.clone(),
                    preview,
                    last_activity: last.map(|m| m.sent_at),
                }
            })
            .collect();
        entries.sort_by(|a, b| b.last_activity.cmp(&a.last_activity));
        entries
    }

    /// Case-insensitive name filter backing the chat-list search input.
    pub async fn search(&self, query: &str) -> Vec<Conversation> {
        let query = query.trim().to_lowercase();
        let inner = self.inner.lock().await;
        if query.is_empty() {
            return inner.conversations.clone();
        }
        inner
            .conversations
            .iter()
            .filter(|c| c.name.to_lowercase().contains(&query))
            .cloned()
            .collect()
    }
}

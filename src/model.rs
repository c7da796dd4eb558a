use crate::errors::ChatError;
use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Whether a conversation is one-to-one or a group chat.
///
/// An explicit attribute — group-ness is never inferred from the display name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConversationKind {
    Direct,
    Group,
}

/// An addressable chat context with its own message history.
///
/// Created from seed data at startup; only `muted` and `status` are
/// mutated in place afterwards. Never deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Conversation {
    pub id: String,
    pub name: String,
    pub kind: ConversationKind,
    pub avatar_url: Option<String>,
    /// Free-form presence line: "Online", "Typing...", "5 members", ...
    pub status: String,
    pub muted: bool,
}

impl Conversation {
    pub fn direct(id: &str, name: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            kind: ConversationKind::Direct,
            avatar_url: None,
            status: String::new(),
            muted: false,
        }
    }

    pub fn group(id: &str, name: &str) -> Self {
        Self {
            kind: ConversationKind::Group,
            ..Self::direct(id, name)
        }
    }

    pub fn with_avatar(mut self, url: &str) -> Self {
        self.avatar_url = Some(url.to_string());
        self
    }

    pub fn with_status(mut self, status: &str) -> Self {
        self.status = status.to_string();
        self
    }

    pub fn is_group(&self) -> bool {
        self.kind == ConversationKind::Group
    }

    /// Avatar fallback initials: first and last word initials for multi-word
    /// names, first two letters for single-word names, "?" when empty.
    pub fn initials(&self) -> String {
        let parts: Vec<&str> = self.name.split_whitespace().collect();
        match parts.as_slice() {
            [] => "?".to_string(),
            [only] => only.chars().take(2).collect::<String>().to_uppercase(),
            [first, .., last] => {
                let mut out = String::new();
                out.extend(first.chars().next());
                out.extend(last.chars().next());
                out.to_uppercase()
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Sent by the local user.
    Outbound,
    /// Received from a remote party.
    Inbound,
}

/// Delivery lifecycle of an outbound message. Inbound messages carry none.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryStatus {
    Sending,
    Sent,
    Delivered,
    Read,
}

/// Coarse attachment category used to select rendering behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
    Audio,
    Document,
}

impl MediaKind {
    /// Infer the kind from a declared content type. Unknown, empty, or
    /// malformed content types fall back to `Document`.
    pub fn from_content_type(content_type: &str) -> Self {
        let ct = content_type.trim().to_ascii_lowercase();
        if ct.starts_with("image/") {
            Self::Image
        } else if ct.starts_with("video/") {
            Self::Video
        } else if ct.starts_with("audio/") {
            Self::Audio
        } else {
            Self::Document
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Image => "📷 Photo",
            Self::Video => "🎥 Video",
            Self::Audio => "🎵 Audio",
            Self::Document => "📄 Document",
        }
    }
}

/// A displayable reference to an attachment. The core never reads file bytes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MediaRef {
    pub url: String,
    pub kind: MediaKind,
    pub file_name: Option<String>,
}

impl MediaRef {
    /// Derive a media reference from an attachment handle.
    ///
    /// Malformed handles (missing content type or name) degrade to the
    /// `Document` kind and a placeholder name rather than failing.
    pub fn from_file(file: &FileHandle) -> Self {
        let kind = MediaKind::from_content_type(&file.content_type);
        let name = if file.name.trim().is_empty() {
            "attachment".to_string()
        } else {
            file.name.clone()
        };
        let url = if file.handle.trim().is_empty() {
            format!("local://{}", name)
        } else {
            file.handle.clone()
        };
        Self {
            url,
            kind,
            file_name: Some(name),
        }
    }
}

/// Opaque handle to a locally attached file: a displayable reference plus
/// declared metadata. Bytes are never read by the view-model.
#[derive(Debug, Clone)]
pub struct FileHandle {
    /// Local reference (e.g. an object URL) used for preview rendering.
    pub handle: String,
    pub content_type: String,
    pub name: String,
    pub size: u64,
}

/// A single chat message.
///
/// Invariant: carries non-empty text content or a media reference (or both) —
/// `Message::new` rejects anything else. Immutable after creation except for
/// the Sending → Sent settlement performed by the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub conversation_id: String,
    pub content: Option<String>,
    /// Sortable creation instant; display formatting is derived, never stored.
    pub sent_at: DateTime<Utc>,
    pub direction: Direction,
    /// Present only for outbound messages.
    pub status: Option<DeliveryStatus>,
    /// Display name of the remote sender, for inbound group messages.
    pub sender_name: Option<String>,
    pub media: Option<MediaRef>,
}

impl Message {
    pub fn new(
        conversation_id: &str,
        direction: Direction,
        content: Option<&str>,
        media: Option<MediaRef>,
    ) -> Result<Self, ChatError> {
        let content = content
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .map(str::to_string);
        if content.is_none() && media.is_none() {
            return Err(ChatError::EmptyMessage);
        }
        let status = (direction == Direction::Outbound).then_some(DeliveryStatus::Sending);
        Ok(Self {
            id: Uuid::new_v4().to_string(),
            conversation_id: conversation_id.to_string(),
            content,
            sent_at: Utc::now(),
            direction,
            status,
            sender_name: None,
            media,
        })
    }

    pub fn with_sender_name(mut self, name: &str) -> Self {
        self.sender_name = Some(name.to_string());
        self
    }

    pub fn with_status(mut self, status: DeliveryStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_sent_at(mut self, at: DateTime<Utc>) -> Self {
        self.sent_at = at;
        self
    }

    pub fn is_outbound(&self) -> bool {
        self.direction == Direction::Outbound
    }

    /// Short local time for bubble display, derived from `sent_at`.
    pub fn display_time(&self) -> String {
        self.sent_at
            .with_timezone(&Local)
            .format("%I:%M %p")
            .to_string()
    }

    /// One-line preview for the chat list: the text content when present,
    /// otherwise a media label.
    pub fn preview(&self) -> String {
        if let Some(content) = &self.content {
            return content.clone();
        }
        match &self.media {
            Some(media) => match (&media.kind, &media.file_name) {
                (MediaKind::Document, Some(name)) => format!("📄 {}", name),
                (kind, _) => kind.label().to_string(),
            },
            // Unreachable for messages built via `new`, but renders harmlessly.
            None => String::new(),
        }
    }
}
